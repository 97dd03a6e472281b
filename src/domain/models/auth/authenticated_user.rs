//! 인증된 사용자 정보
//!
//! [`AuthMiddleware`](crate::middlewares::AuthMiddleware) 가 토큰을 검증한 뒤
//! request extension 에 넣어 두고, 핸들러는 추출자로 꺼내 씁니다.
//! 엔트리/통계/내보내기 작업은 모두 여기의 `user_id` 범위 안에서만 동작합니다.

use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

use crate::domain::models::token::token::TokenClaims;
use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.user_id,
            username: claims.username,
            iat: claims.iat,
            exp: claims.exp,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(AppError::AuthenticationError(
                "Access token required".to_string(),
            ).into())),
        }
    }
}
