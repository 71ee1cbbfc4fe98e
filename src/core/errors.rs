//! # Application Error Handling System
//!
//! 도서 관리 백엔드를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 실패를 `{ message, success: false }` 형태의 JSON 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 요청 본문 누락, JSON 파싱 실패 |
//! | `NotFound` | 404 Not Found | 문서 없음, 빈 컬렉션, 잘못된 ID 형식 |
//! | `DatabaseError` | 500 Internal Server Error | 저장소 오류, 스키마 검증 실패 |
//! | `InternalError` | 500 Internal Server Error | 문서 디코딩 실패 등 예상치 못한 오류 |
//!
//! ## 5xx 응답 정책
//!
//! 저장소 계층의 상세 오류 내용은 서버 로그에만 기록되고,
//! 클라이언트에는 일반화된 메시지만 전달됩니다.
//!
//! ```json
//! { "message": "Internal server error", "success": false }
//! ```
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, AppResult};
//!
//! async fn get_book(&self, id: &str) -> AppResult<BookResponse> {
//!     let book = self.book_repo
//!         .find_by_id(id)
//!         .await?
//!         .ok_or_else(|| AppError::NotFound("Book not found".to_string()))?;
//!
//!     Ok(BookResponse::from(book))
//! }
//! ```

use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use log::error;
use thiserror::Error;

use crate::domain::dto::common::ApiResponse;

/// 5xx 응답에서 클라이언트에게 노출되는 메시지
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// 애플리케이션 전역 에러 타입
///
/// 핸들러에서 `?` 연산자로 전파되면 `ResponseError` 구현을 통해
/// 적절한 상태 코드와 표준 응답 봉투로 자동 변환됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러
    ///
    /// MongoDB 드라이버 오류와 저장소 스키마 검증 실패(필수 필드 누락 등)를
    /// 모두 포함합니다. 500 Internal Server Error로 응답됩니다.
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    ///
    /// 요청 본문이 비어 있거나 JSON으로 해석할 수 없는 경우에만 사용됩니다.
    /// 본문의 형태(shape)는 검사하지 않습니다.
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    ///
    /// 메시지는 그대로 클라이언트에게 전달되므로 사람이 읽을 수 있는
    /// 문장이어야 합니다 (예: `"Book not found"`).
    #[error("Not found: {0}")]
    NotFound(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 노출할 메시지를 반환합니다.
    ///
    /// 4xx 에러는 원래 메시지를, 5xx 에러는 일반화된 메시지를 반환합니다.
    pub fn client_message(&self) -> String {
        match self {
            AppError::ValidationError(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 5xx 에러의 경우 상세 내용을 서버 로그에 기록한 뒤
    /// 일반화된 메시지만 응답 본문에 담습니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        if status.is_server_error() {
            error!("❌ 요청 처리 실패: {}", self);
        }

        HttpResponse::build(status).json(ApiResponse::<()>::failure(self.client_message()))
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
///
/// ```rust,ignore
/// use crate::core::errors::ErrorContext;
///
/// let book: Book = bson::from_document(doc).context("Failed to decode book")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("No data was provided for the book".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Book not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_database_error_response() {
        let error = AppError::DatabaseError("connection refused".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_error_body_hides_store_details() {
        let error = AppError::DatabaseError("book validation failed: name is required".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], INTERNAL_ERROR_MESSAGE);
        assert!(json.get("data").is_none());
    }

    #[actix_web::test]
    async fn test_not_found_body_keeps_message() {
        let error = AppError::NotFound("User not found".to_string());
        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "User not found");
    }

    #[test]
    fn test_error_context_trait() {
        let result: Result<(), &str> = Err("original error");
        let app_result = result.context("Additional context");

        if let Err(AppError::InternalError(msg)) = app_result {
            assert!(msg.contains("Additional context"));
            assert!(msg.contains("original error"));
        } else {
            panic!("Expected InternalError");
        }
    }
}
