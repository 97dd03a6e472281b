//! # 일기 리포지토리 구현
//!
//! `entries` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 키와 upsert
//!
//! 문서 하나는 `(userId, date)` 조합 하나에 대응합니다. 저장은 항상
//! `update_one(upsert = true)` 한 번으로 처리되어, 같은 인자로 여러 번 호출해도
//! 문서는 한 건만 남습니다. 동시에 같은 키를 저장하면 마지막 쓰기가 이깁니다.
//!
//! ## 정렬
//!
//! `date` 는 0 채움된 `YYYY-MM-DD` 문자열이므로 사전순 정렬과 범위 비교가
//! 그대로 날짜 순서와 일치합니다.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, DateTime},
    options::IndexOptions,
    Collection, IndexModel,
};

use crate::{
    config::DatabaseConfig,
    db::Database,
    domain::{entities::entries::entry::Entry, models::calendar::CalendarDate},
    errors::AppError,
    repositories::Repository,
};

/// 일기 데이터 액세스 계약
///
/// 모든 메서드는 `user_id` 범위 안에서만 동작하며, 호출자는 저장소 내부가 아닌
/// 복사본을 받습니다.
#[async_trait]
pub trait EntryRepository: Repository {
    /// 해당 날짜의 일기 내용. 없으면 `Ok(None)`.
    async fn find_content(&self, user_id: &str, date: &CalendarDate) -> Result<Option<String>, AppError>;

    /// 없으면 생성(`createdAt = updatedAt = now`), 있으면 `content` 와 `updatedAt` 교체
    async fn upsert(&self, user_id: &str, date: &CalendarDate, content: &str) -> Result<(), AppError>;

    /// 사용자의 모든 일기 (날짜 오름차순)
    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Entry>, AppError>;

    /// `start <= date <= end` 인 일기 (날짜 오름차순)
    async fn find_in_range(
        &self,
        user_id: &str,
        start: &CalendarDate,
        end: &CalendarDate,
    ) -> Result<Vec<Entry>, AppError>;
}

/// MongoDB 기반 일기 리포지토리
///
/// - **컬렉션명**: `entries`
/// - **인덱스**: (userId, date) 복합 인덱스. 유니크 제약은 걸지 않습니다.
pub struct MongoEntryRepository {
    db: Database,
}

impl MongoEntryRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self) -> Collection<Entry> {
        self.db
            .get_database()
            .collection::<Entry>(DatabaseConfig::ENTRIES_COLLECTION)
    }
}

#[async_trait]
impl Repository for MongoEntryRepository {
    fn name(&self) -> &str {
        "entry"
    }

    fn collection_name(&self) -> &str {
        DatabaseConfig::ENTRIES_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        let user_date_index = IndexModel::builder()
            .keys(doc! { "userId": 1, "date": 1 })
            .options(IndexOptions::builder()
                .name("user_date".to_string())
                .build())
            .build();

        self.collection()
            .create_index(user_date_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl EntryRepository for MongoEntryRepository {
    async fn find_content(&self, user_id: &str, date: &CalendarDate) -> Result<Option<String>, AppError> {
        let entry = self.collection()
            .find_one(doc! { "userId": user_id, "date": date.to_string() })
            .await?;

        Ok(entry.map(|entry| entry.content))
    }

    async fn upsert(&self, user_id: &str, date: &CalendarDate, content: &str) -> Result<(), AppError> {
        let now = DateTime::now();

        self.collection()
            .update_one(
                doc! { "userId": user_id, "date": date.to_string() },
                doc! {
                    "$set": { "content": content, "updatedAt": now },
                    "$setOnInsert": { "createdAt": now },
                },
            )
            .upsert(true)
            .await?;

        log::debug!("일기 저장: user={}, date={}", user_id, date);
        Ok(())
    }

    async fn find_all_by_user(&self, user_id: &str) -> Result<Vec<Entry>, AppError> {
        let cursor = self.collection()
            .find(doc! { "userId": user_id })
            .sort(doc! { "date": 1 })
            .await?;

        let entries: Vec<Entry> = cursor.try_collect().await?;
        Ok(entries)
    }

    async fn find_in_range(
        &self,
        user_id: &str,
        start: &CalendarDate,
        end: &CalendarDate,
    ) -> Result<Vec<Entry>, AppError> {
        let cursor = self.collection()
            .find(doc! {
                "userId": user_id,
                "date": { "$gte": start.to_string(), "$lte": end.to_string() },
            })
            .sort(doc! { "date": 1 })
            .await?;

        let entries: Vec<Entry> = cursor.try_collect().await?;
        Ok(entries)
    }
}
