//! Database Connection Management Module
//!
//! MongoDB 연결의 생성과 종료를 담당합니다.
//! 연결 핸들은 전역 상태가 아니라 `main` 에서 명시적으로 생성되어
//! 리포지토리에 주입되고, 서버가 멈추면 [`Database::shutdown`] 으로 닫힙니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::config::DatabaseConfig;
//! use crate::db::Database;
//! use crate::repositories::Repositories;
//!
//! let database = Database::connect(&DatabaseConfig::from_env()).await?;
//! let repositories = Repositories::mongodb(&database);
//! // ... 서버 실행 ...
//! database.shutdown().await;
//! ```

use log::info;
use mongodb::{Client, options::ClientOptions};
use crate::config::DatabaseConfig;

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 연결을 생성하고 `ping` 으로 연결 상태를 검증합니다.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 애플리케이션 이름 설정 (모니터링 및 로깅에 유용)
        client_options.app_name = Some(config.app_name.clone());

        let client = Client::with_options(client_options)?;

        client
            .database(&config.database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await?;

        info!("✅ MongoDB 연결 성공: {}", config.database_name);

        Ok(Self {
            client,
            database_name: config.database_name.clone(),
        })
    }

    /// 리포지토리가 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    ///
    /// ```rust,ignore
    /// let entries = database.get_database().collection::<Entry>("entries");
    /// ```
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 진행 중인 작업이 끝나길 기다린 뒤 연결 풀을 닫습니다.
    pub async fn shutdown(self) {
        info!("🔌 MongoDB 연결 종료: {}", self.database_name);
        self.client.shutdown().await;
    }
}
