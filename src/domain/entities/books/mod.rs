//! 도서 엔티티 모듈

pub mod book;
