//! 일기 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`EntryRepository`](entry_repo::EntryRepository) 계약과
//! MongoDB/메모리 구현을 제공합니다.

pub mod entry_repo;
pub mod memory_entry_repo;

pub use entry_repo::{EntryRepository, MongoEntryRepository};
pub use memory_entry_repo::MemoryEntryRepository;
