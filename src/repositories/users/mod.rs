//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`UserRepository`](user_repo::UserRepository)를 통해 `users` 컬렉션과
//! 대출 도서 참조 채우기를 다룹니다.

pub mod user_repo;

pub use user_repo::UserRepository;
