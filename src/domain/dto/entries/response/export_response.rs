//! 내보내기 응답 DTO
//!
//! ```json
//! {
//!   "metadata": {
//!     "exportDate": "2024-03-15T09:30:00.000Z",
//!     "dateRange": { "start": "2024-01-01", "end": "2024-01-03" },
//!     "totalEntries": 1,
//!     "version": "1.0"
//!   },
//!   "entries": { "2024-01-01": "", "2024-01-02": "x", "2024-01-03": "" }
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const EXPORT_FORMAT_VERSION: &str = "1.0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportMetadata {
    pub export_date: String,
    pub date_range: DateRange,
    /// 실제 저장된 일기 수. 빈 날짜 채우기와 무관합니다.
    pub total_entries: usize,
    pub version: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportEnvelope {
    pub metadata: ExportMetadata,
    pub entries: BTreeMap<String, String>,
}
