//! 일기 저장소 서비스 모듈

pub mod entry_service;

pub use entry_service::*;
