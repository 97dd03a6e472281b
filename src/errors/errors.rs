//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 저널 백엔드의 모든 실패는 [`AppError`] 하나로 모이고,
//! `actix_web::ResponseError` 구현 한 곳에서 HTTP 상태 코드로 변환됩니다.
//!
//! ## 응답 형식
//!
//! 상태 코드와 무관하게 응답 본문은 항상 `{ "message": string }` 입니다.
//! 5xx 계열은 내부 정보를 노출하지 않고 `"Internal server error"` 로 고정되며,
//! 실제 원인은 서버 로그에만 남습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn save(date: &str) -> Result<(), AppError> {
//!     let date = CalendarDate::parse(date)?; // 400
//!     entry_repo.upsert(user_id, &date, content).await?; // 500
//!     Ok(())
//! }
//! ```

use actix_web::http::StatusCode;
use mongodb::error::{ErrorKind, WriteFailure};
use thiserror::Error;

/// 클라이언트에게 내려가는 5xx 공통 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_CODE: i32 = 11000;

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 에러(4xx)와 인프라 에러(5xx)를 구분합니다.
/// 데이터가 없는 것은 에러가 아니므로 빈 결과로 처리합니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 중복 사용자명, 잘못된 자격 증명, 잘못된 날짜 형식 등
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 토큰 누락 (401 Unauthorized)
    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    /// 유효하지 않거나 만료된 토큰 (403 Forbidden)
    #[error("Authorization error: {0}")]
    AuthorizationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 응답 본문에 실릴 메시지
    pub fn client_message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg)
            | AppError::AuthorizationError(msg) => msg,
            AppError::DatabaseError(_) | AppError::InternalError(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::AuthorizationError(_) => StatusCode::FORBIDDEN,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러는 이 지점에서 원인을 로그로 남깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            log::error!("❌ {}", self);
        }

        actix_web::HttpResponse::build(status)
            .json(serde_json::json!({
                "message": self.client_message()
            }))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(e: mongodb::error::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

/// 유니크 인덱스 위반 여부
pub fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        err.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_CODE
    )
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use actix_web::body::MessageBody;

    fn body_json(error: &AppError) -> serde_json::Value {
        let bytes = error.error_response().into_body().try_into_bytes().unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("Username already exists".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(&error)["message"], "Username already exists");
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Access token required".to_string());

        assert_eq!(error.error_response().status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(&error)["message"], "Access token required");
    }

    #[test]
    fn test_authorization_error_response() {
        let error = AppError::AuthorizationError("Invalid or expired token".to_string());

        assert_eq!(error.error_response().status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("entry".to_string());

        assert_eq!(error.error_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_server_errors_hide_detail() {
        let error = AppError::DatabaseError("connection refused 10.0.0.3:27017".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(&error)["message"], INTERNAL_ERROR_MESSAGE);

        let error = AppError::InternalError("bcrypt exploded".to_string());
        assert_eq!(body_json(&error)["message"], INTERNAL_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
