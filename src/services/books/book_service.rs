//! # 도서 관리 서비스 구현
//!
//! 도서 조회/등록/수정/삭제와 도서 대출 처리를 구현합니다.
//!
//! ## 대출 처리 흐름
//!
//! ```text
//! PUT /books/issue/{id}  { userId, issuedDate, returnDate }
//!        │
//!        ▼
//! ┌──────────────────┐   없음    ┌──────────────────────┐
//! │ 도서 존재 확인    │ ────────▶ │ 404 "Book not found" │
//! └──────────────────┘           └──────────────────────┘
//!        │ 있음
//!        ▼
//! ┌──────────────────┐   없음    ┌──────────────────────┐
//! │ 사용자 대출 기록  │ ────────▶ │ 404 "User not found" │
//! └──────────────────┘           └──────────────────────┘
//!        │
//!        ▼
//!   수정된 사용자 반환
//! ```
//!
//! 두 단계는 서로 다른 왕복이며 트랜잭션으로 묶이지 않습니다.
//! 이미 다른 사용자가 대출 중인 도서인지, 사용자가 다른 도서를 대출 중인지는 확인하지 않습니다.

use log::{debug, info, warn};
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::books::request::{IssueBookRequest, NewBook, UpdateBookRequest};
use crate::domain::dto::books::response::{BookResponse, IssuedBookView};
use crate::domain::dto::users::response::UserResponse;
use crate::repositories::books::BookRepository;
use crate::repositories::users::UserRepository;

pub const NO_BOOKS_FOUND: &str = "No books found";
pub const BOOK_NOT_FOUND: &str = "Book not found";
pub const NO_BOOKS_ISSUED: &str = "No books have been issued";
pub const NO_BOOK_DATA: &str = "No data was provided for the book";
pub const USER_NOT_FOUND: &str = "User not found";

/// 도서 관리 비즈니스 로직 서비스
///
/// ## 에러 처리 전략
///
/// - **NotFound**: 도서/사용자 없음, 빈 목록
/// - **ValidationError**: 등록 요청 본문 누락
/// - **DatabaseError**: 저장소 오류, 스키마 검사 실패
#[derive(Clone)]
pub struct BookService {
    book_repo: BookRepository,
    user_repo: UserRepository,
}

impl BookService {
    pub fn new(book_repo: BookRepository, user_repo: UserRepository) -> Self {
        Self {
            book_repo,
            user_repo,
        }
    }

    /// 모든 도서 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Vec<BookResponse>)` - 등록된 도서 목록
    /// * `Err(AppError::NotFound)` - 등록된 도서가 하나도 없는 경우
    pub async fn get_all_books(&self) -> AppResult<Vec<BookResponse>> {
        let books = self.book_repo.find_all().await?;

        if books.is_empty() {
            debug!("등록된 도서 없음");
            return Err(AppError::NotFound(NO_BOOKS_FOUND.to_string()));
        }

        Ok(books.into_iter().map(BookResponse::from).collect())
    }

    /// ID로 도서 조회
    pub async fn get_book_by_id(&self, id: &str) -> AppResult<BookResponse> {
        let book = self
            .book_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        Ok(BookResponse::from(book))
    }

    /// 대출 중인 도서 목록 조회
    ///
    /// `issuedBook`이 있는 사용자를 훑어 도서 정보와 대출일/반납 예정일을 합칩니다.
    /// 참조 대상 도서가 이미 삭제된 대출 기록은 목록에서 제외됩니다.
    pub async fn get_issued_books(&self) -> AppResult<Vec<IssuedBookView>> {
        let holders = self.user_repo.find_holders().await?;

        let issued: Vec<IssuedBookView> = holders
            .into_iter()
            .filter_map(|holder| {
                let holder_id = holder.id;
                let view = IssuedBookView::from_holder(holder);
                if view.is_none() {
                    warn!("⚠️ 삭제된 도서를 참조하는 대출 기록: user={}", holder_id);
                }
                view
            })
            .collect();

        if issued.is_empty() {
            return Err(AppError::NotFound(NO_BOOKS_ISSUED.to_string()));
        }

        Ok(issued)
    }

    /// 새 도서 등록
    ///
    /// 요청 본문이 없으면 `ValidationError`를 반환합니다. 본문의 형태는 검사하지 않으며,
    /// 필수 필드 누락은 저장 단계에서 `DatabaseError`가 됩니다.
    ///
    /// # 반환값
    ///
    /// 등록 직후의 전체 도서 목록
    pub async fn add_book(&self, payload: Option<Value>) -> AppResult<Vec<BookResponse>> {
        let payload = payload.ok_or_else(|| AppError::ValidationError(NO_BOOK_DATA.to_string()))?;

        let created = self.book_repo.create(NewBook::from_payload(payload)?).await?;
        info!("📚 도서 등록: {} ({})", created.name, created.id_string());

        self.get_all_books().await
    }

    /// 도서 정보 수정
    ///
    /// `name`, `author`, `genre`, `price`, `publisher` 중 본문에 있는 필드만 덮어씁니다.
    pub async fn update_book(&self, id: &str, payload: Option<Value>) -> AppResult<BookResponse> {
        let update = UpdateBookRequest::from_payload(payload)?.to_update();

        let book = self
            .book_repo
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        info!("📝 도서 수정: {}", book.id_string());
        Ok(BookResponse::from(book))
    }

    /// 도서 삭제
    ///
    /// 대출자의 참조는 그대로 남습니다.
    pub async fn delete_book(&self, id: &str) -> AppResult<BookResponse> {
        let book = self
            .book_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        info!("🗑️ 도서 삭제: {}", book.id_string());
        Ok(BookResponse::from(book))
    }

    /// 도서 대출
    ///
    /// # 인자
    ///
    /// * `book_id` - 대출할 도서 ID
    /// * `payload` - `{ userId, issuedDate, returnDate }`
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 대출 정보가 기록된 사용자
    /// * `Err(AppError::NotFound("Book not found"))` - 도서 없음
    /// * `Err(AppError::NotFound("User not found"))` - 사용자 없음 또는 `userId` 누락
    pub async fn issue_book(&self, book_id: &str, payload: Option<Value>) -> AppResult<UserResponse> {
        let book = self
            .book_repo
            .find_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(BOOK_NOT_FOUND.to_string()))?;

        let request = IssueBookRequest::from_payload(payload)?;
        let user_id = request
            .user_id
            .as_deref()
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        let user = self
            .user_repo
            .update(user_id, &request.to_update(book.id))
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("📖 도서 대출: book={} user={}", book.id_string(), user.id_string());
        Ok(UserResponse::from(user))
    }
}
