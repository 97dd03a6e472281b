//! 데이터 저장소, 서버, 실행 환경 관련 설정
//!
//! 모든 값은 환경 변수에서 읽으며, 누락되거나 파싱할 수 없는 값은
//! 개발용 기본값으로 대체됩니다.

use std::env;

/// 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 환경 변수 기준 현재 환경 (기본값: production)
    pub fn current() -> Self {
        Self::from_str(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// `PROFILE` 별 환경 파일 선택
pub struct ProfileConfig;

impl ProfileConfig {
    /// `dev` → `.env.dev`, `prod` → `.env.prod`, 그 외나 미설정 → `.env`
    pub fn env_file(profile: Option<&str>) -> &'static str {
        match profile.map(str::trim) {
            Some("prod") => ".env.prod",
            Some("dev") => ".env.dev",
            _ => ".env",
        }
    }
}

/// HTTP 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .unwrap_or(3000)
    }

    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }
}

/// 엔트리/사용자 저장소 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// MongoDB (운영 기본값)
    MongoDb,
    /// 프로세스 메모리 (로컬 실행, 테스트)
    Memory,
}

impl StorageBackend {
    pub fn current() -> Self {
        Self::from_str(&env::var("STORAGE_BACKEND").unwrap_or_default())
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => StorageBackend::Memory,
            _ => StorageBackend::MongoDb,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::MongoDb => "MongoDB",
            StorageBackend::Memory => "In-Memory",
        }
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
    pub app_name: String,
}

impl DatabaseConfig {
    pub const USERS_COLLECTION: &'static str = "users";
    pub const ENTRIES_COLLECTION: &'static str = "entries";

    /// ## 환경 변수
    /// - `MONGODB_URI`: 연결 URI (기본값: "mongodb://localhost:27017")
    /// - `DATABASE_NAME`: 데이터베이스 이름 (기본값: "journalApp")
    pub fn from_env() -> Self {
        Self {
            uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "journalApp".to_string()),
            app_name: "journal_service".to_string(),
        }
    }
}

/// Rate Limiting 설정
#[derive(Debug)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                log::error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        Self { per_second, burst_size }
    }
}

/// CORS 허용 Origin 목록
pub struct CorsConfig;

impl CorsConfig {
    /// 비어 있으면 모든 Origin 허용
    pub fn allowed_origins() -> Vec<String> {
        Self::parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default())
    }

    pub fn parse_origins(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_env_file() {
        assert_eq!(ProfileConfig::env_file(None), ".env");
        assert_eq!(ProfileConfig::env_file(Some("dev")), ".env.dev");
        assert_eq!(ProfileConfig::env_file(Some("prod")), ".env.prod");
        assert_eq!(ProfileConfig::env_file(Some("staging")), ".env");
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_storage_backend_from_string() {
        assert_eq!(StorageBackend::from_str("memory"), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str(" In-Memory "), StorageBackend::Memory);
        assert_eq!(StorageBackend::from_str("mongodb"), StorageBackend::MongoDb);
        assert_eq!(StorageBackend::from_str(""), StorageBackend::MongoDb);
    }

    #[test]
    fn test_parse_cors_origins() {
        assert!(CorsConfig::parse_origins("").is_empty());
        assert_eq!(
            CorsConfig::parse_origins("http://localhost:3000, https://diary.example.com ,"),
            vec!["http://localhost:3000", "https://diary.example.com"]
        );
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 3000);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "127.0.0.1");
        }
    }
}
