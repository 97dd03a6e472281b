//! Authentication HTTP Handlers
//!
//! 회원가입, 로그인, 토큰 확인 엔드포인트입니다.
//!
//! - `POST /api/register` → 201 `{message}`
//! - `POST /api/login` → 200 `{message, token, user:{id, username}}`
//! - `GET /api/verify-token` → 200 `{valid, user}` (인증 필요)
use actix_web::{get, post, web, HttpResponse};
use validator::Validate;
use crate::{
    core::AppState,
    middlewares::AuthMiddleware,
    domain::{
        dto::users::{LoginRequest, MessageResponse, RegisterRequest, VerifyTokenResponse},
        models::auth::authenticated_user::AuthenticatedUser,
    },
    errors::AppError,
};

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/register`
#[post("/register")]
pub async fn register(
    state: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    state.user_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new("User created successfully")))
}

/// 로그인 핸들러
///
/// 존재하지 않는 사용자와 틀린 비밀번호는 같은 400 응답을 받습니다.
///
/// # Endpoint
/// `POST /api/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let response = state.user_service.login(payload.into_inner()).await?;
    log::info!("🔑 로그인 성공 - 사용자: {}, ID: {}", response.user.username, response.user.id);

    Ok(HttpResponse::Ok().json(response))
}

/// 토큰 확인 핸들러
///
/// 미들웨어를 통과했다면 토큰은 이미 유효하므로 클레임을 그대로 돌려줍니다.
///
/// # Endpoint
/// `GET /api/verify-token`
#[get("/verify-token", wrap = "AuthMiddleware::required()")]
pub async fn verify_token(user: AuthenticatedUser) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(VerifyTokenResponse { valid: true, user }))
}
