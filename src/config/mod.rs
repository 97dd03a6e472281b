//! # Configuration Module
//!
//! 저널 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 저장소, 서버, Rate Limit, CORS, 실행 환경 설정
//! - [`auth_config`] - JWT, bcrypt 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버
//! export HOST="0.0.0.0"
//! export PORT="3000"
//!
//! # 저장소 (mongodb | memory)
//! export STORAGE_BACKEND="mongodb"
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="journalApp"
//!
//! # 인증
//! export JWT_SECRET="your-super-secret-key"
//! export JWT_EXPIRATION_DAYS="7"
//! export BCRYPT_COST="12"          # 4-15 범위
//!
//! # 환경
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
