//! # 통계 집계 서비스
//!
//! 사용자의 전체 일기에서 날짜 목록, 월별/ISO 주차별 개수, 요일 분포를 계산합니다.
//!
//! 집계 자체([`aggregate`])는 입력 일기 목록에만 의존하는 순수 함수입니다.
//! 같은 입력이면 언제 호출해도 같은 결과가 나옵니다.

use std::sync::Arc;

use crate::{
    domain::{
        dto::entries::StatisticsResponse,
        entities::entries::entry::Entry,
        models::calendar::CalendarDate,
    },
    errors::AppError,
    repositories::entries::EntryRepository,
};

/// 일기 목록을 한 번 순회하며 통계를 만듭니다.
///
/// 저장된 날짜가 `YYYY-MM-DD` 로 해석되지 않는 일기는 건너뜁니다.
pub fn aggregate(entries: &[Entry]) -> StatisticsResponse {
    let mut statistics = StatisticsResponse::default();

    for entry in entries {
        let date = match CalendarDate::parse(&entry.date) {
            Ok(date) => date,
            Err(_) => {
                log::warn!("통계 집계 제외 - 잘못된 날짜: user={}, date={}", entry.user_id, entry.date);
                continue;
            }
        };

        statistics.entry_dates.push(date.to_string());
        *statistics.entries_by_month.entry(date.month_key()).or_default() += 1;
        *statistics.entries_by_week.entry(date.iso_week_key()).or_default() += 1;
        statistics.weekday_data[date.weekday_index()] += 1;
    }

    statistics.entry_dates.sort_unstable();
    statistics
}

pub struct StatisticsService {
    entry_repo: Arc<dyn EntryRepository>,
}

impl StatisticsService {
    pub fn new(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }

    pub async fn get_statistics(&self, user_id: &str) -> Result<StatisticsResponse, AppError> {
        let entries = self.entry_repo.find_all_by_user(user_id).await?;
        log::debug!("통계 집계: user={}, entries={}", user_id, entries.len());

        Ok(aggregate(&entries))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::entries::MemoryEntryRepository;

    fn entry(date: &str) -> Entry {
        Entry::new("u1".to_string(), date.to_string(), "text".to_string())
    }

    #[test]
    fn test_empty_input() {
        let statistics = aggregate(&[]);

        assert!(statistics.entry_dates.is_empty());
        assert!(statistics.entries_by_month.is_empty());
        assert!(statistics.entries_by_week.is_empty());
        assert_eq!(statistics.weekday_data, [0; 7]);
    }

    #[test]
    fn test_aggregate_counts() {
        // 2024-01-01 월요일, 2024-01-08 월요일, 2024-02-01 목요일
        let statistics = aggregate(&[entry("2024-02-01"), entry("2024-01-01"), entry("2024-01-08")]);

        assert_eq!(statistics.entry_dates, vec!["2024-01-01", "2024-01-08", "2024-02-01"]);
        assert_eq!(statistics.entries_by_month.get("2024-01"), Some(&2));
        assert_eq!(statistics.entries_by_month.get("2024-02"), Some(&1));
        assert_eq!(statistics.entries_by_week.get("2024-W1"), Some(&1));
        assert_eq!(statistics.entries_by_week.get("2024-W2"), Some(&1));
        assert_eq!(statistics.entries_by_week.get("2024-W5"), Some(&1));
        assert_eq!(statistics.weekday_data, [0, 2, 0, 0, 1, 0, 0]);
    }

    #[test]
    fn test_year_boundary_uses_iso_year() {
        let statistics = aggregate(&[entry("2021-01-01"), entry("2024-12-30")]);

        assert_eq!(statistics.entries_by_week.get("2020-W53"), Some(&1));
        assert_eq!(statistics.entries_by_week.get("2025-W1"), Some(&1));
        assert_eq!(statistics.entries_by_month.get("2021-01"), Some(&1));
    }

    #[test]
    fn test_malformed_dates_are_skipped() {
        let statistics = aggregate(&[entry("2024-1-5"), entry("2024-01-05")]);

        assert_eq!(statistics.entry_dates, vec!["2024-01-05"]);
        assert_eq!(statistics.weekday_data.iter().sum::<u32>(), 1);
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let entries = vec![entry("2024-03-15"), entry("2023-12-31")];
        assert_eq!(aggregate(&entries), aggregate(&entries));
    }

    #[actix_web::test]
    async fn test_service_reads_only_owner_entries() {
        let repo = Arc::new(MemoryEntryRepository::default());
        let day = CalendarDate::parse("2024-03-15").unwrap();
        repo.upsert("u1", &day, "mine").await.unwrap();
        repo.upsert("u2", &day, "theirs").await.unwrap();

        let statistics = StatisticsService::new(repo).get_statistics("u1").await.unwrap();
        assert_eq!(statistics.entry_dates, vec!["2024-03-15"]);
    }
}
