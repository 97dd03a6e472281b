//! 일기 요청 DTO

pub mod entry_request;

pub use entry_request::{ExportQuery, SaveEntryRequest};
