//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 인증 미들웨어 (AuthMiddleware)
//! - `Authorization: Bearer <token>` 헤더 추출
//! - [`TokenService`](crate::services::auth::TokenService) 로 서명/만료 검증
//! - 사용자 정보를 request extension에 저장
//! - 헤더 없음은 401, 검증 실패는 403
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{get, web, HttpResponse};
//!
//! // 보호된 핸들러에만 강제 인증
//! #[get("/statistics", wrap = "AuthMiddleware::required()")]
//! pub async fn get_statistics(
//!     state: web::Data<AppState>,
//!     user: AuthenticatedUser,
//! ) -> Result<HttpResponse, AppError> {
//!     // ...
//! }
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
