//! JWT 인증 토큰 클레임
//!
//! 로그인 시 발급되는 토큰의 페이로드입니다. `userId`, `username` 과
//! 표준 `iat`/`exp` 클레임(초 단위 UNIX 시간)을 담습니다.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenClaims {
    pub user_id: String,
    pub username: String,
    pub iat: i64,
    pub exp: i64,
}
