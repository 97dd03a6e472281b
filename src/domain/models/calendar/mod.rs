//! 달력 날짜 모델
//!
//! 일기 키, 통계 버킷(월/ISO 주차/요일), 내보내기 날짜 범위 순회에 쓰이는
//! [`CalendarDate`](calendar_date::CalendarDate) 를 제공합니다.

pub mod calendar_date;

pub use calendar_date::CalendarDate;
