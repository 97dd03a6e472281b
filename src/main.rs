//! 일기 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! 저장소(MongoDB 또는 메모리)를 준비한 뒤 JWT 인증 기반의 REST API를 제공합니다.

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info};
use journal_service_backend::config::{
    CorsConfig, DatabaseConfig, ProfileConfig, RateLimitConfig, ServerConfig, StorageBackend,
};
use journal_service_backend::core::AppState;
use journal_service_backend::db::Database;
use journal_service_backend::repositories::Repositories;
use journal_service_backend::routes::configure_all_routes;
use journal_service_backend::utils::display_terminal::print_final_summary;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 일기 서비스 시작중...");

    let storage_backend = StorageBackend::current();

    // 데이터 스토어 초기화
    let database = initialize_data_store(storage_backend).await?;
    let repositories = match &database {
        Some(database) => Repositories::mongodb(database),
        None => Repositories::in_memory(),
    };

    repositories
        .init_all()
        .await
        .map_err(|e| std::io::Error::other(format!("리포지토리 초기화 실패: {}", e)))?;

    let state = web::Data::new(AppState::from_env(repositories, storage_backend));
    print_final_summary(storage_backend.as_str(), 2, 5);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    let result = start_http_server(state).await;

    if let Some(database) = database {
        database.shutdown().await;
    }

    result
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 API: http://{}/api", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(state.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 또는 미설정 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").ok();
    let env_file = ProfileConfig::env_file(profile.as_deref());

    // 로거 초기화 전이므로 표준 출력 사용
    println!("Current profile: {} ({})", profile.as_deref().unwrap_or("default"), env_file);

    if let Err(e) = dotenv::from_filename(env_file) {
        if profile.is_some() {
            eprintln!("{} 파일 로드 실패: {}", env_file, e);
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=journal_service_backend=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 저장소 종류에 맞게 데이터베이스 연결을 준비합니다
///
/// 메모리 저장소면 연결하지 않고 `None` 을 돌려줍니다.
async fn initialize_data_store(backend: StorageBackend) -> std::io::Result<Option<Database>> {
    match backend {
        StorageBackend::Memory => {
            info!("💾 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(None)
        }
        StorageBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let config = DatabaseConfig::from_env();
            let database = Database::connect(&config).await.map_err(|e| {
                error!("❌ MongoDB 연결 실패: {}", e);
                std::io::Error::other(format!("데이터베이스 연결 실패: {}", e))
            })?;

            Ok(Some(database))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// `CORS_ALLOWED_ORIGINS` 가 비어 있으면 모든 Origin을 허용합니다.
///
/// ```bash
/// CORS_ALLOWED_ORIGINS=http://localhost:5173,https://journal.example.com
/// ```
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
            // 자격 증명(쿠키 등) 지원
            .supports_credentials()
    };

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
