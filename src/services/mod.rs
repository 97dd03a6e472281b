//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 리포지토리 트레이트 객체를 생성자로 주입받으며,
//! [`AppState`](crate::core::AppState) 에 모여 핸들러로 전달됩니다.
//!
//! # Features
//!
//! - 회원가입/로그인 ([`users`])
//! - JWT 토큰 발급 및 검증 ([`auth`])
//! - 날짜별 일기 읽기/쓰기 ([`entries`])
//! - 일기 통계 집계 ([`statistics`])
//! - 날짜 범위 내보내기 ([`export`])

pub mod users;
pub mod auth;
pub mod entries;
pub mod statistics;
pub mod export;
