//! 인증 결과 모델

pub mod authenticated_user;
