//! # User Management HTTP Handlers
//!
//! 도서관 회원 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/users` | 전체 사용자 목록 |
//! | `GET` | `/users/{id}` | 사용자 조회 |
//! | `POST` | `/users` | 사용자 등록 (등록 후 전체 목록 반환) |
//! | `PUT` | `/users/{id}` | 사용자 수정 |
//! | `DELETE` | `/users/{id}` | 사용자 삭제 |
//! | `PUT` | `/users/return/{id}` | 도서 반납 |
//! | `GET` | `/users/subscription-details/{id}` | 구독 정보 |
//!
//! ## 응답 형식
//!
//! ```json
//! {
//!   "message": "User fetched successfully",
//!   "success": true,
//!   "data": { "_id": "65a4f0c2e13b2a0012345678", "name": "Minsu", ... }
//! }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::common::{parse_payload, ApiResponse};
use crate::services::users::UserService;

#[get("")]
pub async fn get_all_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.get_all_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Users fetched successfully", users)))
}

#[get("/{user_id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user_by_id(&user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User fetched successfully", user)))
}

#[post("")]
pub async fn add_user(
    service: web::Data<UserService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let users = service.add_user(parse_payload(&body)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User added successfully", users)))
}

#[put("/{user_id}")]
pub async fn update_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user = service.update_user(&user_id, parse_payload(&body)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User updated successfully", user)))
}

#[delete("/{user_id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.delete_user(&user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("User deleted successfully", user)))
}

/// 도서 반납
///
/// 대출 중이 아닌 사용자에게 호출해도 성공합니다.
#[put("/return/{user_id}")]
pub async fn return_book(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user = service.return_book(&user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Book returned successfully", user)))
}

/// 구독 정보 조회
///
/// 구독 시작일로부터 만료일, 만료 여부, 남은 일수를 계산해 반환합니다.
#[get("/subscription-details/{user_id}")]
pub async fn get_subscription_details(
    service: web::Data<UserService>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let details = service.get_subscription_details(&user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(
        "Subscription details fetched successfully",
        details,
    )))
}
