//! 메모리 기반 사용자 리포지토리
//!
//! `STORAGE_BACKEND=memory` 로 실행하거나 테스트에서 사용합니다.
//! 프로세스가 종료되면 데이터가 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::{
    config::DatabaseConfig,
    domain::entities::users::user::User,
    errors::AppError,
    repositories::Repository,
};
use super::user_repo::{UserRepository, USERNAME_TAKEN_MESSAGE};

/// 사용자명 → 사용자
#[derive(Default)]
pub struct MemoryUserRepository {
    users: RwLock<HashMap<String, User>>,
}

fn poisoned<T>(_: T) -> AppError {
    AppError::DatabaseError("in-memory user store lock poisoned".to_string())
}

#[async_trait]
impl Repository for MemoryUserRepository {
    fn name(&self) -> &str {
        "user (memory)"
    }

    fn collection_name(&self) -> &str {
        DatabaseConfig::USERS_COLLECTION
    }

    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, AppError> {
        let users = self.users.read().map_err(poisoned)?;
        Ok(users.get(username).cloned())
    }

    async fn create(&self, mut user: User) -> Result<User, AppError> {
        let mut users = self.users.write().map_err(poisoned)?;

        if users.contains_key(&user.username) {
            return Err(AppError::ValidationError(USERNAME_TAKEN_MESSAGE.to_string()));
        }

        user.id = Some(ObjectId::new());
        users.insert(user.username.clone(), user.clone());

        Ok(user)
    }
}
