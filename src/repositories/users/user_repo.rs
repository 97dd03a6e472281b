//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 데이터 액세스를 담당합니다.
//!
//! ## 특징
//!
//! - **사용자명 유니크성**: `username_unique` 인덱스로 보장
//! - **중복 경합 처리**: 동시에 같은 사용자명으로 가입하면 두 번째 insert 가
//!   중복 키 에러로 실패하고, 이를 검증 에러로 변환합니다.

use async_trait::async_trait;
use mongodb::{bson::doc, options::IndexOptions, Collection, IndexModel};

use crate::{
    config::DatabaseConfig,
    db::Database,
    domain::entities::users::user::User,
    errors::{is_duplicate_key, AppError},
    repositories::Repository,
};

/// 중복 사용자명 에러 메시지
pub const USERNAME_TAKEN_MESSAGE: &str = "Username already exists";

/// 사용자 데이터 액세스 계약
#[async_trait]
pub trait UserRepository: Repository {
    /// 사용자명으로 사용자 조회
    ///
    /// * `Ok(None)` - 해당 사용자명의 사용자가 없는 경우
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError>;

    /// 새 사용자 생성
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ValidationError)` - 사용자명 중복
    async fn create(&self, user: User) -> Result<User, AppError>;
}

/// MongoDB 기반 사용자 리포지토리
///
/// ## L2 Storage (MongoDB)
/// - **컬렉션명**: `users`
/// - **인덱스**: username(unique)
pub struct MongoUserRepository {
    /// MongoDB 데이터베이스 연결
    db: Database,
}

impl MongoUserRepository {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self) -> Collection<User> {
        self.db
            .get_database()
            .collection::<User>(DatabaseConfig::USERS_COLLECTION)
    }
}

#[async_trait]
impl Repository for MongoUserRepository {
    fn name(&self) -> &str {
        "user"
    }

    fn collection_name(&self) -> &str {
        DatabaseConfig::USERS_COLLECTION
    }

    /// 사용자명 유니크 인덱스 생성
    ///
    /// 이미 중복 데이터가 있는 경우 인덱스 생성이 실패합니다.
    async fn init(&self) -> Result<(), AppError> {
        let username_index = IndexModel::builder()
            .keys(doc! { "username": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("username_unique".to_string())
                .build())
            .build();

        self.collection()
            .create_index(username_index)
            .await?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for MongoUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "username": username })
            .await
            .map_err(AppError::from)
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_username(&user.username).await?.is_some() {
            return Err(AppError::ValidationError(USERNAME_TAKEN_MESSAGE.to_string()));
        }

        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| {
                if is_duplicate_key(&e) {
                    AppError::ValidationError(USERNAME_TAKEN_MESSAGE.to_string())
                } else {
                    AppError::from(e)
                }
            })?;

        user.id = result.inserted_id.as_object_id();

        Ok(user)
    }
}
