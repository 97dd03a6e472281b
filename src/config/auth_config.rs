//! 인증 관련 설정
//!
//! JWT 서명 비밀키와 유효기간, bcrypt 해싱 비용을 환경 변수에서 읽습니다.

use std::env;

use super::data_config::Environment;

pub struct JwtConfig;

impl JwtConfig {
    pub const DEFAULT_EXPIRATION_DAYS: i64 = 7;

    pub fn secret() -> String {
        env::var("JWT_SECRET")
            .unwrap_or_else(|_| {
                log::warn!("JWT_SECRET not set, using default (not secure for production!)");
                "your-jwt-secret-key".to_string()
            })
    }

    /// 토큰 유효기간 (일)
    pub fn expiration_days() -> i64 {
        env::var("JWT_EXPIRATION_DAYS")
            .ok()
            .and_then(|days| days.parse::<i64>().ok())
            .filter(|days| *days > 0)
            .unwrap_or(Self::DEFAULT_EXPIRATION_DAYS)
    }
}

/// bcrypt 비용 설정
///
/// `BCRYPT_COST` 가 4-15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
pub struct PasswordConfig;

impl PasswordConfig {
    pub fn bcrypt_cost() -> u32 {
        if let Ok(cost_str) = env::var("BCRYPT_COST") {
            if let Ok(cost) = cost_str.parse::<u32>() {
                if (4..=15).contains(&cost) {
                    return cost;
                }
            }
        }

        Self::bcrypt_cost_for_env(&Environment::current())
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}
