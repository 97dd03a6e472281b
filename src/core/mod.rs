//! # Core Module
//!
//! 애플리케이션 전역에서 공유되는 상태를 제공합니다.
//!
//! [`AppState`] 는 `main` 에서 저장소 종류에 맞는 [`Repositories`](crate::repositories::Repositories)
//! 로 한 번 만들어지고, 테스트에서는 메모리 저장소로 같은 방식으로 만들어집니다.
//!
//! ```rust,ignore
//! let state = web::Data::new(AppState::from_env(repositories, StorageBackend::current()));
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod state;

pub use state::AppState;
