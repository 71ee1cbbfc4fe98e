//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 각 리포지토리는 공유된 [`DocumentStore`](crate::db::DocumentStore) 핸들을 보유하고,
//! 저장소 문서와 도메인 엔티티 사이의 변환을 담당합니다.
//!
//! # Features
//!
//! - 문자열 ID를 ObjectId로 변환 (형식이 잘못된 ID는 "없는 문서"로 취급)
//! - 저장 직전 스키마 검사 (`validator`)
//! - 문서 디코딩 실패를 `AppError::InternalError`로 변환
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::MemoryStore;
//! use crate::repositories::books::BookRepository;
//!
//! let book_repo = BookRepository::new(Arc::new(MemoryStore::new()));
//! let books = book_repo.find_all().await?;
//! ```

pub mod books;
pub mod users;

use mongodb::bson::oid::ObjectId;

/// 문자열 ID를 ObjectId로 변환합니다. 형식이 잘못되면 `None`입니다.
pub(crate) fn parse_object_id(id: &str) -> Option<ObjectId> {
    ObjectId::parse_str(id.trim()).ok()
}
