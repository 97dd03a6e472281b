//! JWT 토큰 관리 서비스 구현
//!
//! 로그인한 사용자에게 HS256 서명 토큰을 발급하고, 보호된 모든 요청에서
//! 토큰을 검증해 사용자 식별자를 돌려줍니다.
//!
//! ## 에러 구분
//!
//! | 상황 | 에러 | 상태 코드 |
//! |------|------|-----------|
//! | 헤더 없음 / Bearer 아님 / 토큰 비어 있음 | `AuthenticationError` | 401 |
//! | 서명 불일치 / 만료 / 형식 오류 | `AuthorizationError` | 403 |

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};

use crate::{
    config::JwtConfig,
    domain::{entities::users::user::User, models::token::token::TokenClaims},
    errors::AppError,
};

pub const MISSING_TOKEN_MESSAGE: &str = "Access token required";
pub const INVALID_TOKEN_MESSAGE: &str = "Invalid or expired token";

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiration_days: i64,
}

impl TokenService {
    pub fn new(secret: &str, expiration_days: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiration_days,
        }
    }

    /// `JWT_SECRET`, `JWT_EXPIRATION_DAYS` 로 생성
    pub fn from_env() -> Self {
        Self::new(&JwtConfig::secret(), JwtConfig::expiration_days())
    }

    /// 사용자 ID와 사용자명을 담은 토큰을 발급합니다.
    pub fn generate_token(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expiration = now + Duration::days(self.expiration_days);

        let claims = TokenClaims {
            user_id: user.id_string().ok_or_else(|| {
                AppError::InternalError("사용자 ID가 없습니다".to_string())
            })?,
            username: user.username.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.encode_claims(&claims)
    }

    fn encode_claims(&self, claims: &TokenClaims) -> Result<String, AppError> {
        encode(&Header::default(), claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// 서명과 만료를 검증하고 클레임을 돌려줍니다.
    pub fn verify_token(&self, token: &str) -> Result<TokenClaims, AppError> {
        decode::<TokenClaims>(token, &self.decoding_key, &Validation::default())
            .map(|token_data| token_data.claims)
            .map_err(|e| {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                AppError::AuthorizationError(INVALID_TOKEN_MESSAGE.to_string())
            })
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: Option<&'a str>) -> Result<&'a str, AppError> {
        auth_header
            .and_then(|header| header.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::AuthenticationError(MISSING_TOKEN_MESSAGE.to_string()))
    }
}
