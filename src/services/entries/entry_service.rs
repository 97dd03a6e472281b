//! # 일기 저장소 서비스
//!
//! 날짜별 일기 한 건을 읽고 씁니다. 저장된 일기가 없는 날짜는 에러가 아니라
//! 빈 문자열로 응답합니다.

use std::sync::Arc;

use crate::{
    domain::models::calendar::CalendarDate,
    errors::AppError,
    repositories::entries::EntryRepository,
};

pub struct EntryService {
    entry_repo: Arc<dyn EntryRepository>,
}

impl EntryService {
    pub fn new(entry_repo: Arc<dyn EntryRepository>) -> Self {
        Self { entry_repo }
    }

    /// 해당 날짜의 일기 내용. 없으면 `""`.
    pub async fn get_entry(&self, user_id: &str, date: &CalendarDate) -> Result<String, AppError> {
        let content = self.entry_repo.find_content(user_id, date).await?;
        Ok(content.unwrap_or_default())
    }

    /// 일기 저장 (upsert)
    ///
    /// 같은 인자로 반복 호출해도 결과는 한 번 호출한 것과 같습니다.
    /// 내용은 형식 검사를 하지 않으며 빈 문자열도 저장됩니다.
    pub async fn save_entry(&self, user_id: &str, date: &CalendarDate, content: &str) -> Result<(), AppError> {
        self.entry_repo.upsert(user_id, date, content).await
    }
}
