//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! Spring Framework의 Controller 레이어와 동일한 역할을 수행합니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Browser, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리      ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                      ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                    ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   DocumentStore - MongoDB / 메모리              ← Storage Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Spring MVC와의 비교
//!
//! ```java
//! @RestController
//! @RequestMapping("/books")
//! public class BookController {
//!     @GetMapping("/{id}")
//!     public ApiResponse<BookResponse> getBook(@PathVariable String id) {
//!         return ApiResponse.success("Book fetched successfully", bookService.getBookById(id));
//!     }
//! }
//! ```
//!
//! ```rust,ignore
//! #[get("/{book_id}")]
//! pub async fn get_book(
//!     service: web::Data<BookService>,
//!     book_id: web::Path<String>,
//! ) -> Result<HttpResponse, AppError> {
//!     let book = service.get_book_by_id(&book_id).await?;
//!     Ok(HttpResponse::Ok().json(ApiResponse::success("Book fetched successfully", book)))
//! }
//! ```
//!
//! 서비스는 `web::Data`로 주입되며, 에러는 `?`로 전파되어
//! `AppError`의 `ResponseError` 구현이 HTTP 응답으로 변환합니다.
//!
//! ## 모듈 구성
//!
//! - **`books`**: 도서 CRUD, 대출 중인 도서 목록, 도서 대출
//! - **`users`**: 사용자 CRUD, 도서 반납, 구독 정보

pub mod books;
pub mod users;
