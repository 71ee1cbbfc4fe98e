//! 도서관 관리 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소, 리포지토리, 서비스를 초기화합니다.
//! 도서/사용자 CRUD와 대출/반납, 구독 정보 조회 REST API를 제공합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use library_service_backend::config::{
    CorsConfig, Environment, RateLimitConfig, ServerConfig, StoreKind,
};
use library_service_backend::db::{DocumentStore, MemoryStore, MongoStore};
use library_service_backend::repositories::{books::BookRepository, users::UserRepository};
use library_service_backend::routes::{configure_all_routes, route_not_found};
use library_service_backend::services::{books::BookService, users::UserService};
use library_service_backend::utils::display_terminal;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    display_terminal::print_boxed_title("📚 Library Service");
    info!("🚀 도서관 관리 서비스 시작중... (환경: {:?})", Environment::current());

    // 저장소 초기화
    display_terminal::print_step_start(1, "Connecting document store");
    let store = initialize_store().await?;
    display_terminal::print_step_complete(1, "Document store connected", 1);

    // 리포지토리 및 서비스 구성
    display_terminal::print_step_start(2, "Wiring services");
    let book_repo = BookRepository::new(store.clone());
    let user_repo = UserRepository::new(store.clone());

    let book_service = web::Data::new(BookService::new(book_repo, user_repo.clone()));
    display_terminal::print_sub_task("BookService", "OK");
    let user_service = web::Data::new(UserService::new(user_repo));
    display_terminal::print_sub_task("UserService", "OK");
    display_terminal::print_step_complete(2, "Services wired", 2);

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(web::Data::new(store), book_service, user_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    store: web::Data<Arc<dyn DocumentStore>>,
    book_service: web::Data<BookService>,
    user_service: web::Data<UserService>,
) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "잘못된 Rate Limiting 설정")
        })?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second, rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(store.clone())
            .app_data(book_service.clone())
            .app_data(user_service.clone())
            // 라우트 설정
            .configure(configure_all_routes)
            .default_service(web::to(route_not_found))
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
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=library_service_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// `DATA_STORE` 설정에 따라 문서 저장소를 초기화합니다
///
/// MongoDB 연결에 실패하면 서버를 시작하지 않습니다.
async fn initialize_store() -> io::Result<Arc<dyn DocumentStore>> {
    match StoreKind::current() {
        StoreKind::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let store = MongoStore::new().await.map_err(|e| {
                error!("❌ 데이터베이스 연결 실패: {}", e);
                io::Error::new(io::ErrorKind::ConnectionRefused, e.to_string())
            })?;

            display_terminal::print_sub_task("MongoDB", "OK");
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            info!("🧪 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            display_terminal::print_sub_task("MemoryStore", "OK");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin은 `CORS_ALLOWED_ORIGINS`에서 읽습니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
