//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 trait 으로 정의되고 MongoDB 구현과 메모리 구현을 가집니다.
//! 서비스는 `Arc<dyn ...>` 만 알고 있으므로 저장소 종류는
//! 시작 시점에 [`Repositories`] 를 만들 때 한 번만 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::Repositories;
//!
//! let repositories = Repositories::mongodb(&database);
//! repositories.init_all().await?; // 인덱스 생성
//! ```

pub mod users;
pub mod entries;

use std::sync::Arc;

use async_trait::async_trait;

use crate::db::Database;
use crate::errors::AppError;
use crate::utils::display_terminal::{print_boxed_title, print_step_complete, print_sub_task};
use entries::{EntryRepository, MemoryEntryRepository, MongoEntryRepository};
use users::{MemoryUserRepository, MongoUserRepository, UserRepository};

/// 모든 리포지토리의 공통 생명주기
#[async_trait]
pub trait Repository: Send + Sync {
    /// 로그 출력용 이름
    fn name(&self) -> &str;

    /// 대상 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 시작 시 한 번 호출됩니다 (인덱스 생성 등).
    async fn init(&self) -> Result<(), AppError>;
}

/// 시작 시점에 조립되는 리포지토리 묶음
#[derive(Clone)]
pub struct Repositories {
    pub users: Arc<dyn UserRepository>,
    pub entries: Arc<dyn EntryRepository>,
}

impl Repositories {
    pub fn mongodb(database: &Database) -> Self {
        Self {
            users: Arc::new(MongoUserRepository::new(database)),
            entries: Arc::new(MongoEntryRepository::new(database)),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserRepository::default()),
            entries: Arc::new(MemoryEntryRepository::default()),
        }
    }

    /// 모든 리포지토리의 `init` 을 순서대로 실행합니다.
    pub async fn init_all(&self) -> Result<(), AppError> {
        print_boxed_title("🔄 INITIALIZING REPOSITORIES");

        init_repository(self.users.as_ref()).await?;
        init_repository(self.entries.as_ref()).await?;

        print_step_complete(1, "Repositories initialized", 2);
        Ok(())
    }
}

async fn init_repository<R: Repository + ?Sized>(repository: &R) -> Result<(), AppError> {
    print_sub_task(repository.name(), "Initializing...");
    repository.init().await?;
    print_sub_task(repository.name(), &format!("✓ Ready ({})", repository.collection_name()));
    Ok(())
}
