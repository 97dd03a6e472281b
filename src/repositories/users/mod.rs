//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository) 계약과
//! MongoDB/메모리 구현을 제공합니다.

pub mod user_repo;
pub mod memory_user_repo;

pub use memory_user_repo::MemoryUserRepository;
pub use user_repo::{MongoUserRepository, UserRepository};
