//! Entry HTTP Handlers
//!
//! 날짜별 일기 읽기/쓰기 엔드포인트입니다. 모두 인증이 필요하며
//! 토큰의 사용자 ID 범위 안에서만 동작합니다.
use actix_web::{get, post, web, HttpResponse};
use crate::{
    core::AppState,
    middlewares::AuthMiddleware,
    domain::{
        dto::{
            entries::{EntryResponse, SaveEntryRequest},
            users::MessageResponse,
        },
        models::{auth::authenticated_user::AuthenticatedUser, calendar::CalendarDate},
    },
    errors::AppError,
};

/// 일기 조회 핸들러
///
/// 저장된 일기가 없으면 404가 아니라 `{"entry": ""}` 입니다.
///
/// # Endpoint
/// `GET /api/entries/{date}`
#[get("/entries/{date}", wrap = "AuthMiddleware::required()")]
pub async fn get_entry(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let date = CalendarDate::parse(&path.into_inner())?;
    let entry = state.entry_service.get_entry(&user.user_id, &date).await?;

    Ok(HttpResponse::Ok().json(EntryResponse { entry }))
}

/// 일기 저장 핸들러
///
/// # Endpoint
/// `POST /api/entries`
#[post("/entries", wrap = "AuthMiddleware::required()")]
pub async fn save_entry(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    payload: web::Json<SaveEntryRequest>,
) -> Result<HttpResponse, AppError> {
    let SaveEntryRequest { date, content } = payload.into_inner();
    state.entry_service.save_entry(&user.user_id, &date, &content).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new("Entry saved successfully")))
}
