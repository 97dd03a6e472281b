//! 사용자 관리 서비스 모듈
//!
//! 회원가입과 로그인을 담당합니다.
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 사용자명 중복 방지
//! - 로그인 실패 사유 비노출
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let created = user_service.register(request).await?;
//! ```

pub mod user_service;

pub use user_service::*;
