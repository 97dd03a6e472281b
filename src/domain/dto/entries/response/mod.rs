//! 일기/통계/내보내기 응답 DTO

pub mod entry_response;
pub mod statistics_response;
pub mod export_response;

pub use entry_response::EntryResponse;
pub use export_response::{DateRange, ExportEnvelope, ExportMetadata, EXPORT_FORMAT_VERSION};
pub use statistics_response::StatisticsResponse;
