//! 인증 서비스 모듈
//!
//! JWT 토큰 발급과 검증을 담당합니다.
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명 (서버 보관 비밀키)
//! - 7일 토큰 만료 (`JWT_EXPIRATION_DAYS`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::from_env();
//! let token = token_service.generate_token(&user)?;
//! let claims = token_service.verify_token(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
