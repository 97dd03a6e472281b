//! Entries Entity Module
//!
//! 일기 한 건을 나타내는 [`Entry`](entry::Entry) 엔티티를 정의합니다.
//! `(userId, date)` 조합은 사용자마다 최대 한 건이며,
//! 이는 DB 제약이 아니라 리포지토리의 upsert 로 보장됩니다.

pub mod entry;
