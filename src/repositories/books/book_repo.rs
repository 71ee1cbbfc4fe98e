//! # 도서 리포지토리 구현
//!
//! `books` 컬렉션에 대한 CRUD 연산을 담당합니다.

use std::sync::Arc;

use log::debug;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::db::{DocumentStore, Update, BOOKS};
use crate::domain::dto::books::request::NewBook;
use crate::domain::entities::books::book::Book;
use crate::repositories::parse_object_id;

/// 도서 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: 저장소 오류, 스키마 검사 실패
/// - **InternalError**: 저장된 문서를 `Book`으로 디코딩할 수 없는 경우
///
/// 형식이 잘못된 ID는 에러가 아니라 `Ok(None)`으로 처리됩니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = BookRepository::new(store.clone());
///
/// let created = repo.create(new_book).await?;
/// let found = repo.find_by_id(&created.id_string()).await?;
/// let deleted = repo.delete(&created.id_string()).await?;
/// ```
#[derive(Clone)]
pub struct BookRepository {
    store: Arc<dyn DocumentStore>,
}

impl BookRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 모든 도서를 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<Book>> {
        self.store
            .find_all(BOOKS)
            .await?
            .into_iter()
            .map(Book::from_document)
            .collect()
    }

    /// ID로 도서를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Book))` - 도서를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 도서가 없거나 ID 형식이 잘못된 경우
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Book>> {
        let Some(object_id) = parse_object_id(id) else {
            debug!("잘못된 도서 ID 형식: {}", id);
            return Ok(None);
        };

        self.store
            .find_by_id(BOOKS, &object_id)
            .await?
            .map(Book::from_document)
            .transpose()
    }

    /// 새 도서를 저장합니다.
    ///
    /// 저장 전에 스키마 검사를 수행하며, 필수 필드가 비어 있으면
    /// `DatabaseError`를 반환합니다.
    pub async fn create(&self, book: NewBook) -> AppResult<Book> {
        book.validate()
            .map_err(|e| AppError::DatabaseError(format!("Book validation failed: {}", e)))?;

        let created = self.store.create(BOOKS, book.to_document()).await?;
        Book::from_document(created)
    }

    /// 도서 정보를 부분 수정하고 수정된 도서를 반환합니다.
    pub async fn update(&self, id: &str, update: &Update) -> AppResult<Option<Book>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        self.store
            .update_by_id(BOOKS, &object_id, update)
            .await?
            .map(Book::from_document)
            .transpose()
    }

    /// 도서를 삭제하고 삭제된 도서를 반환합니다.
    ///
    /// 대출자의 `issuedBook` 참조는 정리하지 않습니다.
    pub async fn delete(&self, id: &str) -> AppResult<Option<Book>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        self.store
            .delete_by_id(BOOKS, &object_id)
            .await?
            .map(Book::from_document)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use mongodb::bson::doc;
    use serde_json::json;

    fn repository() -> BookRepository {
        BookRepository::new(Arc::new(MemoryStore::new()))
    }

    fn dune() -> NewBook {
        NewBook::from_payload(json!({
            "name": "Dune",
            "author": "Frank Herbert",
            "genre": "Sci-Fi",
            "price": "450",
            "publisher": "Chilton"
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = repository();

        let created = repo.create(dune()).await.unwrap();
        assert!(created.created_at.is_some());

        let found = repo.find_by_id(&created.id_string()).await.unwrap();
        assert_eq!(found, Some(created.clone()));
        assert_eq!(repo.find_all().await.unwrap(), vec![created]);
    }

    #[actix_web::test]
    async fn test_create_rejects_missing_fields() {
        let repo = repository();
        let mut book = dune();
        book.publisher = String::new();

        let result = repo.create(book).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_id_is_absent() {
        let repo = repository();

        assert!(repo.find_by_id("not-an-id").await.unwrap().is_none());
        assert!(repo.update("not-an-id", &Update::default()).await.unwrap().is_none());
        assert!(repo.delete("not-an-id").await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let repo = repository();
        let created = repo.create(dune()).await.unwrap();
        let id = created.id_string();

        let updated = repo
            .update(&id, &Update::set(doc! { "price": "500" }))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.price, "500");
        assert_eq!(updated.name, "Dune");

        let deleted = repo.delete(&id).await.unwrap().unwrap();
        assert_eq!(deleted.id, created.id);
        assert!(repo.find_by_id(&id).await.unwrap().is_none());
    }
}
