//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 도서, 사용자 라우트와 서버 상태/헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 도서 CRUD 및 대출 API 엔드포인트
//! - 사용자 CRUD, 반납, 구독 정보 API 엔드포인트
//! - 서버 상태 및 헬스체크 엔드포인트
//! - 등록되지 않은 경로에 대한 404 응답
//!
//! 모든 엔드포인트는 인증 없이 접근할 수 있습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::routes::{configure_all_routes, route_not_found};
//!
//! App::new()
//!     .app_data(web::Data::new(book_service))
//!     .app_data(web::Data::new(user_service))
//!     .app_data(web::Data::new(store))
//!     .configure(configure_all_routes)
//!     .default_service(web::to(route_not_found))
//! ```

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use log::error;
use serde_json::json;

use crate::db::DocumentStore;
use crate::domain::dto::common::ApiResponse;
use crate::handlers;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Status endpoints
    cfg.service(server_status);
    cfg.service(health_check);

    // Feature-specific routes
    configure_book_routes(cfg);
    configure_user_routes(cfg);
}

/// 도서 관련 라우트를 설정합니다
///
/// `/issued`와 `/issue/{id}`는 `/{id}`보다 먼저 등록되어야
/// 도서 ID로 해석되지 않습니다.
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8081/books \
///   -H "Content-Type: application/json" \
///   -d '{"name":"Dune","author":"Frank Herbert","genre":"Sci-Fi","price":"450","publisher":"Chilton"}'
///
/// curl -X PUT http://localhost:8081/books/issue/65a4f0c2e13b2a0012345678 \
///   -H "Content-Type: application/json" \
///   -d '{"userId":"65a4f0c2e13b2a0012345679","issuedDate":"2024-01-01","returnDate":"2024-02-01"}'
/// ```
fn configure_book_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/books")
            .service(handlers::books::get_all_books)
            .service(handlers::books::get_issued_books)
            .service(handlers::books::issue_book)
            .service(handlers::books::get_book)
            .service(handlers::books::add_book)
            .service(handlers::books::update_book)
            .service(handlers::books::delete_book),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Examples
///
/// ```bash
/// curl -X PUT http://localhost:8081/users/return/65a4f0c2e13b2a0012345679
/// curl http://localhost:8081/users/subscription-details/65a4f0c2e13b2a0012345679
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::get_all_users)
            .service(handlers::users::return_book)
            .service(handlers::users::get_subscription_details)
            .service(handlers::users::get_user)
            .service(handlers::users::add_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서버 동작 여부를 확인하는 루트 엔드포인트
#[actix_web::get("/")]
async fn server_status() -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::message("Server is up and running"))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 저장소에 ping을 보내 연결 상태를 확인합니다.
///
/// # Returns
///
/// * `200 OK` - 저장소 연결 정상
/// * `503 Service Unavailable` - 저장소 연결 실패
///
/// Response:
/// ```json
/// {
///   "message": "Service is healthy",
///   "success": true,
///   "data": {
///     "status": "healthy",
///     "service": "library_service",
///     "version": "0.1.0",
///     "timestamp": "2024-01-01T00:00:00Z"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(store: web::Data<Arc<dyn DocumentStore>>) -> HttpResponse {
    match store.ping().await {
        Ok(()) => HttpResponse::Ok().json(ApiResponse::success(
            "Service is healthy",
            json!({
                "status": "healthy",
                "service": "library_service",
                "version": env!("CARGO_PKG_VERSION"),
                "timestamp": chrono::Utc::now().to_rfc3339(),
            }),
        )),
        Err(e) => {
            error!("❌ 헬스체크 실패: {}", e);
            HttpResponse::ServiceUnavailable().json(ApiResponse::<()>::failure("Service is unhealthy"))
        }
    }
}

/// 등록되지 않은 경로에 대한 기본 응답
pub async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiResponse::<()>::failure("This route does not exist"))
}
