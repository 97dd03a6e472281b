//! # Domain Layer Module
//!
//! 저널 서비스의 도메인 타입을 모아 둔 모듈입니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - MongoDB 에 저장되는 User, Entry
//! ├── DTOs      - HTTP 요청/응답 계약
//! └── Models    - CalendarDate, TokenClaims, AuthenticatedUser
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DB)
//! ```

pub mod entities;
pub mod dto;
pub mod models;
