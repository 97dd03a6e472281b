//! 통계 응답 DTO

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// 사용자의 전체 일기에서 계산한 통계
///
/// 맵은 키 오름차순으로 직렬화됩니다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsResponse {
    /// 일기가 있는 날짜 (오름차순)
    pub entry_dates: Vec<String>,
    /// `YYYY-MM` → 개수
    pub entries_by_month: BTreeMap<String, u32>,
    /// `<ISO 연도>-W<주차>` → 개수
    pub entries_by_week: BTreeMap<String, u32>,
    /// 요일별 개수, 일요일=0 ... 토요일=6
    pub weekday_data: [u32; 7],
}
