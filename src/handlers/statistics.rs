//! Statistics / Export HTTP Handlers
use actix_web::{get, web, HttpResponse};
use crate::{
    core::AppState,
    middlewares::AuthMiddleware,
    domain::{
        dto::entries::ExportQuery,
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::AppError,
};

/// 통계 핸들러
///
/// # Endpoint
/// `GET /api/statistics`
#[get("/statistics", wrap = "AuthMiddleware::required()")]
pub async fn get_statistics(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let statistics = state.statistics_service.get_statistics(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(statistics))
}

/// 내보내기 핸들러
///
/// # Endpoint
/// `GET /api/export?startDate=YYYY-MM-DD&endDate=YYYY-MM-DD&includeEmpty=true`
#[get("/export", wrap = "AuthMiddleware::required()")]
pub async fn export_entries(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<ExportQuery>,
) -> Result<HttpResponse, AppError> {
    let envelope = state.export_service
        .export(&user.user_id, query.start_date, query.end_date, query.include_empty())
        .await?;

    Ok(HttpResponse::Ok().json(envelope))
}
