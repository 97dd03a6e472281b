//! 메모리 기반 일기 리포지토리
//!
//! `(userId, date)` 를 키로 하는 `BTreeMap` 이므로 사용자별 순회가 곧 날짜 오름차순입니다.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::{
    config::DatabaseConfig,
    domain::{entities::entries::entry::Entry, models::calendar::CalendarDate},
    errors::AppError,
    repositories::Repository,
};
use super::entry_repo::EntryRepository;

#[derive(Default)]
pub struct MemoryEntryRepository {
    entries: RwLock<BTreeMap<(String, String), Entry>>,
}

fn poisoned<T>(_: T) -> AppError {
    AppError::DatabaseError("in-memory entry store lock poisoned".to_string())
}

impl MemoryEntryRepository {
    fn collect_where<F>(&self, user_id: &str, mut keep: F) -> Result<Vec<Entry>, AppError>
    where
        F: FnMut(&str) -> bool,
    {
        let entries = self.entries.read().map_err(poisoned)?;

        Ok(entries
            .iter()
            .filter(|((owner, date), _)| owner == user_id && keep(date))
            .map(|(_, entry)| entry.clone())
            .collect())
    }
}

#[async_trait]
impl Repository for MemoryEntryRepository {
    fn name(&self) -> &str {
        "entry (memory)"
    }

    fn collection_name(&self) -> &str {
        DatabaseConfig::ENTRIES_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl EntryRepository for MemoryEntryRepository {
    async fn find_content(&self, user_id: &str, date: &CalendarDate) -> Result<Option<String>, AppError> {
        let entries = self.entries.read().map_err(poisoned)?;
        let key = (user_id.to_string(), date.to_string());

        Ok(entries.get(&key).map(|entry| entry.content.clone()))
    }

    async fn upsert(&self, user_id: &str, date: &CalendarDate, content: &str) -> Result<(), AppError> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        let key = (user_id.to_string(), date.to_string());

        match entries.get_mut(&key) {
            Some(existing) => {
                existing.content = content.to_string();
                existing.updated_at = DateTime::now();
            }
            None => {
                let mut entry = Entry::new(user_id.to_string(), date.to_string(), content.to_string());
                entry.id = Some(ObjectId::new());
                entries.insert(key, entry);
            }
        }

        Ok(())
    }

    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Entry>, AppError> {
        self.collect_where(user_id, |_| true)
    }

    async fn find_in_range(
        &self,
        user_id: &str,
        start: &CalendarDate,
        end: &CalendarDate,
    ) -> Result<Vec<Entry>, AppError> {
        let (start, end) = (start.to_string(), end.to_string());
        self.collect_where(user_id, |date| date >= start.as_str() && date <= end.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> CalendarDate {
        CalendarDate::parse(value).unwrap()
    }

    #[actix_web::test]
    async fn test_upsert_keeps_single_entry_and_created_at() {
        let repo = MemoryEntryRepository::default();

        repo.upsert("u1", &date("2024-03-15"), "first").await.unwrap();
        let created_at = repo.find_all_by_user("u1").await.unwrap()[0].created_at;

        repo.upsert("u1", &date("2024-03-15"), "second").await.unwrap();
        let all = repo.find_all_by_user("u1").await.unwrap();

        assert_eq!(all.len(), 1);
        assert_eq!(all[0].content, "second");
        assert_eq!(all[0].created_at, created_at);
        assert!(all[0].updated_at >= created_at);
    }

    #[actix_web::test]
    async fn test_queries_are_scoped_and_sorted() {
        let repo = MemoryEntryRepository::default();
        repo.upsert("u1", &date("2024-02-01"), "c").await.unwrap();
        repo.upsert("u1", &date("2024-01-01"), "a").await.unwrap();
        repo.upsert("u2", &date("2024-01-05"), "other user").await.unwrap();
        repo.upsert("u1", &date("2024-01-08"), "b").await.unwrap();

        let dates: Vec<String> = repo.find_all_by_user("u1").await.unwrap()
            .into_iter()
            .map(|entry| entry.date)
            .collect();
        assert_eq!(dates, vec!["2024-01-01", "2024-01-08", "2024-02-01"]);

        let in_range = repo.find_in_range("u1", &date("2024-01-01"), &date("2024-01-08")).await.unwrap();
        assert_eq!(in_range.len(), 2);

        assert_eq!(repo.find_content("u2", &date("2024-01-01")).await.unwrap(), None);
    }
}
