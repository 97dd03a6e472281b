//! # 내보내기 서비스
//!
//! 날짜 범위의 일기를 `{ metadata, entries }` 형태로 묶습니다.
//!
//! 1. `[start, end]` 범위의 일기를 날짜 오름차순으로 조회
//! 2. `entries[date] = content` 맵 구성
//! 3. `include_empty` 이면 범위의 모든 날짜를 빈 문자열로 채움 (기존 값은 유지)
//! 4. `totalEntries` 는 1단계에서 조회된 개수
//!
//! `start > end` 이면 조회 결과도 채울 날짜도 없으므로 빈 맵이 됩니다.
//! `include_empty` 는 최대 [`MAX_FILL_DAYS`] 일까지만 채우며, 더 긴 범위는 400 으로 거부됩니다.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::{
    domain::{
        dto::entries::{DateRange, ExportEnvelope, ExportMetadata, EXPORT_FORMAT_VERSION},
        entities::entries::entry::Entry,
        models::calendar::CalendarDate,
    },
    errors::AppError,
    repositories::entries::EntryRepository,
};

/// 빈 날짜 채우기를 허용하는 최대 일수 (약 10년)
pub const MAX_FILL_DAYS: i64 = 3660;

/// 조회된 일기로 내보내기 봉투를 만듭니다.
///
/// `exported_at` 은 호출자가 넘기므로 결과는 입력만으로 결정됩니다.
pub fn materialize(
    start: CalendarDate,
    end: CalendarDate,
    rows: Vec<Entry>,
    include_empty: bool,
    exported_at: DateTime<Utc>,
) -> ExportEnvelope {
    let total_entries = rows.len();

    let mut entries: BTreeMap<String, String> = rows
        .into_iter()
        .map(|entry| (entry.date, entry.content))
        .collect();

    if include_empty {
        for day in start.days_through(end) {
            entries.entry(day.to_string()).or_default();
        }
    }

    ExportEnvelope {
        metadata: ExportMetadata {
            export_date: exported_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            date_range: DateRange {
                start: start.to_string(),
                end: end.to_string(),
            },
            total_entries,
            version: EXPORT_FORMAT_VERSION.to_string(),
        },
        entries,
    }
}

pub struct ExportService {
    entry_repo: Arc<dyn EntryRepository>,
}

impl ExportService {
    pub fn new(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }

    pub async fn export(
        &self,
        user_id: &str,
        start: CalendarDate,
        end: CalendarDate,
        include_empty: bool,
    ) -> Result<ExportEnvelope, AppError> {
        if include_empty && start.days_inclusive(&end) > MAX_FILL_DAYS {
            return Err(AppError::ValidationError(format!(
                "includeEmpty range cannot exceed {} days",
                MAX_FILL_DAYS
            )));
        }

        let rows = self.entry_repo.find_in_range(user_id, &start, &end).await?;
        log::info!("📦 일기 내보내기: user={}, {}~{}, rows={}", user_id, start, end, rows.len());

        Ok(materialize(start, end, rows, include_empty, Utc::now()))
    }
}
