//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! 핸들러는 요청을 DTO로 받아 [`AppState`](crate::core::AppState) 의 서비스에 넘기고,
//! 결과를 JSON 응답으로 바꾸는 일만 합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, Mobile App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities/Models - 도메인 모델                  ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>` 를 반환하고, `?` 로 전파된
//! 에러는 `AppError::error_response()` 에서 `{message}` 응답이 됩니다.
//!
//! ```rust,ignore
//! #[get("/statistics")]
//! pub async fn get_statistics(
//!     state: web::Data<AppState>,
//!     user: AuthenticatedUser, // AuthMiddleware 가 넣어 둔 사용자
//! ) -> Result<HttpResponse, AppError> {
//!     let statistics = state.statistics_service.get_statistics(&user.user_id).await?;
//!     Ok(HttpResponse::Ok().json(statistics))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 회원가입, 로그인, 토큰 확인
//! - **`entries`**: 날짜별 일기 읽기/쓰기
//! - **`statistics`**: 통계, 내보내기

pub mod auth;
pub mod entries;
pub mod statistics;
