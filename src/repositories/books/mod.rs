//! 도서 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`BookRepository`](book_repo::BookRepository)를 통해 `books` 컬렉션을 다룹니다.

pub mod book_repo;

pub use book_repo::BookRepository;
