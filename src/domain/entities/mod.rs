//! # Domain Entities
//!
//! MongoDB 컬렉션에 그대로 저장되는 영속 객체들입니다.
//!
//! - [`users`] - `users` 컬렉션 (사용자명, 해시된 비밀번호)
//! - [`entries`] - `entries` 컬렉션 (사용자별 날짜당 한 건의 일기)
//!
//! 필드는 camelCase 로 직렬화되어 기존 저장 데이터(`userId`, `createdAt` 등)와
//! 호환됩니다.

pub mod users;
pub mod entries;
