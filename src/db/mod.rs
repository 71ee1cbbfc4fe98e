//! Document Store Module
//!
//! 도서관 서비스의 영속성 계층입니다. 두 개의 컬렉션(`books`, `users`)을
//! 문서 단위로 다루는 [`DocumentStore`] trait과 그 구현체들을 제공합니다.
//!
//! # 구현체
//!
//! - [`MongoStore`] - MongoDB 기반 운영 저장소
//! - [`MemoryStore`] - 프로세스 내부 저장소 (테스트 및 로컬 실행용)
//!
//! 어떤 구현체를 사용할지는 `DATA_STORE` 환경 변수로 결정됩니다.
//!
//! # 공통 규칙
//!
//! - 모든 문서는 `_id`(ObjectId)로 식별됩니다.
//! - 생성 시 `createdAt`, `updatedAt`이, 수정 시 `updatedAt`이 자동 기록됩니다.
//! - 참조 채우기(populate)에서 대상 문서가 없으면 해당 필드는 결과에서 제거됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::db::{DocumentStore, MemoryStore, Filter, BOOKS};
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//! let created = store.create(BOOKS, doc! { "name": "Dune" }).await?;
//! let all = store.find_all(BOOKS).await?;
//! ```

pub mod memory;
pub mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime, Document};

use crate::core::errors::AppResult;

/// 도서 컬렉션 이름
pub const BOOKS: &str = "books";

/// 사용자 컬렉션 이름
pub const USERS: &str = "users";

/// 생성 시각 필드
pub const CREATED_AT: &str = "createdAt";

/// 수정 시각 필드
pub const UPDATED_AT: &str = "updatedAt";

/// 조건 조회에 사용하는 필터
#[derive(Debug, Clone, PartialEq)]
pub enum Filter {
    /// 해당 필드가 문서에 존재하는 경우
    Exists(String),
}

impl Filter {
    pub fn exists(field: impl Into<String>) -> Self {
        Filter::Exists(field.into())
    }

    /// MongoDB 쿼리 문서로 변환합니다.
    pub fn to_document(&self) -> Document {
        match self {
            Filter::Exists(field) => doc! { field.as_str(): { "$exists": true } },
        }
    }

    /// 메모리 저장소에서 문서가 필터 조건을 만족하는지 확인합니다.
    pub fn matches(&self, document: &Document) -> bool {
        match self {
            Filter::Exists(field) => document.contains_key(field),
        }
    }
}

/// 참조 필드를 다른 컬렉션의 문서로 치환하는 설정
///
/// `field`에 저장된 ObjectId를 `from` 컬렉션의 `_id`와 매칭하여
/// 해당 문서 전체로 바꿉니다.
#[derive(Debug, Clone, PartialEq)]
pub struct Populate {
    pub field: String,
    pub from: String,
}

impl Populate {
    pub fn new(field: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            from: from.into(),
        }
    }
}

/// 부분 수정 명세
///
/// `set`의 필드는 덮어쓰고 `unset`의 필드는 제거합니다.
/// 명시되지 않은 필드는 그대로 유지됩니다.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Update {
    pub set: Document,
    pub unset: Vec<String>,
}

impl Update {
    pub fn set(set: Document) -> Self {
        Self {
            set,
            unset: Vec::new(),
        }
    }

    pub fn unset<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            set: Document::new(),
            unset: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty() && self.unset.is_empty()
    }
}

/// 문서 저장소 인터페이스
///
/// 서비스 계층은 이 trait을 통해서만 저장소에 접근합니다.
/// 모든 연산은 하나의 컬렉션에 대한 단일 왕복이며, 컬렉션 간 트랜잭션은 제공하지 않습니다.
///
/// # 반환값 규칙
///
/// * `Ok(None)` - 해당 `_id`의 문서가 없음
/// * `Err(AppError::DatabaseError)` - 저장소 오류
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// 컬렉션의 모든 문서를 삽입 순서대로 조회합니다.
    async fn find_all(&self, collection: &str) -> AppResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: &ObjectId) -> AppResult<Option<Document>>;

    /// 필터 조건에 맞는 문서를 조회하고, 필요하면 참조 필드를 채웁니다.
    async fn find_where(
        &self,
        collection: &str,
        filter: &Filter,
        populate: Option<&Populate>,
    ) -> AppResult<Vec<Document>>;

    /// 새 문서를 저장하고 `_id`와 타임스탬프가 채워진 문서를 반환합니다.
    async fn create(&self, collection: &str, document: Document) -> AppResult<Document>;

    /// 부분 수정 후 수정된 문서를 반환합니다.
    async fn update_by_id(
        &self,
        collection: &str,
        id: &ObjectId,
        update: &Update,
    ) -> AppResult<Option<Document>>;

    /// 삭제된 문서를 반환합니다.
    async fn delete_by_id(&self, collection: &str, id: &ObjectId) -> AppResult<Option<Document>>;

    /// 저장소 연결 상태를 확인합니다.
    async fn ping(&self) -> AppResult<()>;
}

/// 신규 문서에 `_id`와 생성/수정 시각을 기록합니다.
///
/// 이미 `_id`가 있으면 유지합니다.
pub(crate) fn stamp_new(mut document: Document) -> Document {
    let now = DateTime::now();

    if !matches!(document.get("_id"), Some(mongodb::bson::Bson::ObjectId(_))) {
        document.insert("_id", ObjectId::new());
    }
    document.insert(CREATED_AT, now);
    document.insert(UPDATED_AT, now);
    document
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exists_filter_document() {
        let filter = Filter::exists("issuedBook");

        assert_eq!(
            filter.to_document(),
            doc! { "issuedBook": { "$exists": true } }
        );
    }

    #[test]
    fn test_exists_filter_matches() {
        let filter = Filter::exists("issuedBook");

        assert!(filter.matches(&doc! { "name": "Kim", "issuedBook": ObjectId::new() }));
        assert!(!filter.matches(&doc! { "name": "Kim" }));
    }

    #[test]
    fn test_update_builders() {
        assert!(Update::default().is_empty());
        assert!(!Update::set(doc! { "name": "X" }).is_empty());

        let update = Update::unset(["issuedBook", "issuedDate"]);
        assert_eq!(update.unset, vec!["issuedBook".to_string(), "issuedDate".to_string()]);
        assert!(update.set.is_empty());
    }

    #[test]
    fn test_stamp_new_assigns_id_and_timestamps() {
        let stamped = stamp_new(doc! { "name": "Dune" });

        assert!(stamped.get_object_id("_id").is_ok());
        assert!(stamped.get_datetime(CREATED_AT).is_ok());
        assert_eq!(stamped.get(CREATED_AT), stamped.get(UPDATED_AT));
    }

    #[test]
    fn test_stamp_new_keeps_existing_id() {
        let id = ObjectId::new();
        let stamped = stamp_new(doc! { "_id": id, "name": "Dune" });

        assert_eq!(stamped.get_object_id("_id").unwrap(), id);
    }
}
