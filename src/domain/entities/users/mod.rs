//! Users Entity Module
//!
//! 로그인 주체인 [`User`](user::User) 엔티티를 정의합니다.

pub mod user;
