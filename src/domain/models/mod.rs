//! # Domain Models
//!
//! 저장되지 않는 도메인 값 객체들입니다.
//!
//! - [`calendar`] - 타임존 없는 달력 날짜와 주/요일 계산
//! - [`token`] - JWT 클레임
//! - [`auth`] - 인증 미들웨어가 요청에 붙이는 사용자 정보

pub mod auth;
pub mod calendar;
pub mod token;
