//! 도서 관리 서비스 모듈
//!
//! 도서 CRUD와 대출(issue) 처리를 담당합니다. 대출은 사용자 문서를 수정하므로
//! 도서 리포지토리와 사용자 리포지토리를 함께 사용합니다.

pub mod book_service;

pub use book_service::BookService;
