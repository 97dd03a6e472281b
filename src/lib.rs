//! 일기(저널) 서비스 백엔드
//!
//! 사용자별 날짜 일기를 저장하고, 통계와 날짜 범위 내보내기를 제공하는
//! REST API 서비스입니다.
//!
//! # Features
//!
//! - **JWT 인증**: 회원가입/로그인, 7일 유효 HS256 토큰
//! - **일기 저장소**: `(사용자, 날짜)` 당 한 건, upsert 저장
//! - **통계**: 월별/ISO 주차별/요일별 개수
//! - **내보내기**: 날짜 범위 일기를 JSON 봉투로, 빈 날짜 채우기 선택
//! - **저장소 선택**: MongoDB 또는 메모리 (`STORAGE_BACKEND`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + AuthMiddleware
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (AppState)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스 (trait 객체)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB/Memory  │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use journal_service_backend::config::StorageBackend;
//! use journal_service_backend::core::AppState;
//! use journal_service_backend::repositories::Repositories;
//!
//! let repositories = Repositories::in_memory();
//! repositories.init_all().await?;
//! let state = AppState::from_env(repositories, StorageBackend::Memory);
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
