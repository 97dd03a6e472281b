//! 통계 집계 서비스 모듈

pub mod statistics_service;

pub use statistics_service::*;
