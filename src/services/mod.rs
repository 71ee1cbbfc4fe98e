//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스는 `main`에서 한 번 생성되어 `web::Data`로 핸들러에 공유됩니다.
//! 각 서비스는 리포지토리를 통해서만 저장소에 접근합니다.
//!
//! # Features
//!
//! - 도서 CRUD와 대출 처리 ([`books::BookService`])
//! - 사용자 CRUD, 반납 처리, 구독 정보 계산 ([`users::UserService`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::{DocumentStore, MemoryStore};
//! use crate::repositories::{books::BookRepository, users::UserRepository};
//! use crate::services::{books::BookService, users::UserService};
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//! let book_repo = BookRepository::new(store.clone());
//! let user_repo = UserRepository::new(store);
//!
//! let book_service = BookService::new(book_repo, user_repo.clone());
//! let user_service = UserService::new(user_repo);
//! ```

pub mod books;
pub mod users;
