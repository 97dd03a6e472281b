//! 일기 내보내기 서비스 모듈

pub mod export_service;

pub use export_service::*;
