//! # 애플리케이션 상태
//!
//! 시작 시점에 한 번 조립되어 `web::Data<AppState>` 로 모든 워커에 공유됩니다.
//! 서비스는 전역 조회 없이 이 구조체를 통해서만 핸들러와 미들웨어에 전달됩니다.
//!
//! ```text
//! Repositories ──┬──▶ UserService ◀── TokenService
//!                ├──▶ EntryService
//!                ├──▶ StatisticsService
//!                └──▶ ExportService
//! ```

use std::sync::Arc;

use crate::{
    config::{PasswordConfig, StorageBackend},
    repositories::Repositories,
    services::{
        auth::TokenService,
        entries::EntryService,
        export::ExportService,
        statistics::StatisticsService,
        users::UserService,
    },
    utils::display_terminal::{print_boxed_title, print_step_complete, print_sub_task},
};

pub struct AppState {
    pub user_service: UserService,
    pub token_service: Arc<TokenService>,
    pub entry_service: EntryService,
    pub statistics_service: StatisticsService,
    pub export_service: ExportService,
    pub storage_backend: StorageBackend,
}

impl AppState {
    pub fn new(
        repositories: Repositories,
        token_service: TokenService,
        bcrypt_cost: u32,
        storage_backend: StorageBackend,
    ) -> Self {
        let token_service = Arc::new(token_service);

        Self {
            user_service: UserService::new(repositories.users.clone(), token_service.clone(), bcrypt_cost),
            token_service,
            entry_service: EntryService::new(repositories.entries.clone()),
            statistics_service: StatisticsService::new(repositories.entries.clone()),
            export_service: ExportService::new(repositories.entries),
            storage_backend,
        }
    }

    /// 환경 변수의 JWT/bcrypt 설정으로 서비스를 조립합니다.
    pub fn from_env(repositories: Repositories, storage_backend: StorageBackend) -> Self {
        print_boxed_title("🔄 INITIALIZING SERVICES");

        let state = Self::new(
            repositories,
            TokenService::from_env(),
            PasswordConfig::bcrypt_cost(),
            storage_backend,
        );

        for name in ["token", "user", "entry", "statistics", "export"] {
            print_sub_task(name, "✓ Ready");
        }
        print_step_complete(2, "Services initialized", 5);

        state
    }
}
