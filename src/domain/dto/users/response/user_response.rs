//! 사용자/인증 응답 DTO

use serde::{Deserialize, Serialize};

use crate::domain::models::auth::authenticated_user::AuthenticatedUser;

/// 단순 메시지 응답 (`{ "message": ... }`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

/// 로그인 응답에 포함되는 사용자 요약
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub username: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub token: String,
    pub user: UserSummary,
}

impl LoginResponse {
    pub fn new(token: String, user: UserSummary) -> Self {
        Self {
            message: "Login successful".to_string(),
            token,
            user,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyTokenResponse {
    pub valid: bool,
    pub user: AuthenticatedUser,
}
