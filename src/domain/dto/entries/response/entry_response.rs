//! 일기 조회 응답 DTO

use serde::{Deserialize, Serialize};

/// `GET /api/entries/{date}` 응답. 저장된 일기가 없으면 빈 문자열입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryResponse {
    pub entry: String,
}
