//! 일기 요청 DTO

use serde::Deserialize;

use crate::domain::models::calendar::CalendarDate;
use crate::utils::string_utils::deserialize_null_as_empty;

/// `POST /api/entries` 본문
///
/// `content` 는 형식 제약이 없는 텍스트이며 누락되거나 `null` 이면 빈 문자열로 저장됩니다.
#[derive(Debug, Deserialize)]
pub struct SaveEntryRequest {
    pub date: CalendarDate,
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub content: String,
}

/// `GET /api/export` 쿼리 스트링
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub include_empty: Option<String>,
}

impl ExportQuery {
    /// 정확히 `"true"` 일 때만 빈 날짜를 채웁니다.
    pub fn include_empty(&self) -> bool {
        self.include_empty.as_deref() == Some("true")
    }
}
