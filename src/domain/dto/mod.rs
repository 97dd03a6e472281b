//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문의 계약을 정의합니다.
//! 엔티티를 그대로 노출하지 않고 필요한 필드만 담습니다.
//!
//! - [`users`] - 회원가입, 로그인, 토큰 검증
//! - [`entries`] - 일기 조회/저장, 통계, 내보내기

pub mod users;
pub mod entries;
