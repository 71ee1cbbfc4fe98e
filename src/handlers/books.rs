//! # Book HTTP Handlers
//!
//! 도서 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `GET` | `/books` | 전체 도서 목록 |
//! | `GET` | `/books/issued` | 대출 중인 도서 목록 |
//! | `GET` | `/books/{id}` | 도서 조회 |
//! | `POST` | `/books` | 도서 등록 (등록 후 전체 목록 반환) |
//! | `PUT` | `/books/{id}` | 도서 수정 |
//! | `DELETE` | `/books/{id}` | 도서 삭제 |
//! | `PUT` | `/books/issue/{id}` | 도서 대출 |
//!
//! `/issued`는 `/{id}`보다 먼저 등록되어야 합니다.
//!
//! 요청 본문은 `web::Json` 대신 `web::Bytes`로 받습니다. 본문이 비어 있거나
//! `Content-Type`이 없어도 "본문 없음"으로 처리하기 위해서입니다.

use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::core::errors::AppError;
use crate::domain::dto::common::{parse_payload, ApiResponse};
use crate::services::books::BookService;

#[get("")]
pub async fn get_all_books(service: web::Data<BookService>) -> Result<HttpResponse, AppError> {
    let books = service.get_all_books().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Books fetched successfully", books)))
}

#[get("/issued")]
pub async fn get_issued_books(service: web::Data<BookService>) -> Result<HttpResponse, AppError> {
    let issued = service.get_issued_books().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Fetched issued Books successfully", issued)))
}

#[get("/{book_id}")]
pub async fn get_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = service.get_book_by_id(&book_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Book fetched successfully", book)))
}

/// 도서 등록
///
/// # 반환값
///
/// * `200 OK` - 등록 후 전체 도서 목록
/// * `400 Bad Request` - 본문 없음 또는 잘못된 JSON
/// * `500 Internal Server Error` - 필수 필드 누락
#[post("")]
pub async fn add_book(
    service: web::Data<BookService>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let books = service.add_book(parse_payload(&body)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Book Successfully added", books)))
}

#[put("/{book_id}")]
pub async fn update_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let book = service.update_book(&book_id, parse_payload(&body)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Book updated successfully", book)))
}

#[delete("/{book_id}")]
pub async fn delete_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let book = service.delete_book(&book_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Book deleted successfully", book)))
}

/// 도서 대출
///
/// 본문: `{ "userId": "...", "issuedDate": "...", "returnDate": "..." }`
///
/// 성공 시 대출 정보가 기록된 사용자를 반환합니다.
#[put("/issue/{book_id}")]
pub async fn issue_book(
    service: web::Data<BookService>,
    book_id: web::Path<String>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let user = service.issue_book(&book_id, parse_payload(&body)?).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success("Book issued successfully", user)))
}
