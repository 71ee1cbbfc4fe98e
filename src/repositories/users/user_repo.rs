//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! 기본 CRUD 외에 대출 중인 사용자 조회(도서 참조 채우기 포함)를 제공합니다.
//!
//! ## 대출 관계
//!
//! 도서는 대출자를 기록하지 않으므로, "대출 중인 도서" 목록은
//! `issuedBook` 필드가 있는 사용자를 모두 훑은 뒤 `books` 컬렉션에서 참조를 채워 만듭니다.

use std::sync::Arc;

use log::debug;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::db::{DocumentStore, Filter, Populate, Update, BOOKS, USERS};
use crate::domain::dto::users::request::NewUser;
use crate::domain::entities::users::user::{IssuedBookHolder, User, ISSUED_BOOK};
use crate::repositories::parse_object_id;

/// 사용자 데이터 액세스 리포지토리
///
/// ## 저장소 구성
///
/// - **컬렉션명**: `users`
/// - **참조**: `issuedBook` → `books._id`
///
/// ## 에러 처리
///
/// - **DatabaseError**: 저장소 오류, 스키마 검사 실패, `issuedBook` 형식 오류
/// - **InternalError**: 문서 디코딩 실패
#[derive(Clone)]
pub struct UserRepository {
    store: Arc<dyn DocumentStore>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// 모든 사용자를 조회합니다.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        self.store
            .find_all(USERS)
            .await?
            .into_iter()
            .map(User::from_document)
            .collect()
    }

    /// ID로 사용자를 조회합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없거나 ID 형식이 잘못된 경우
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            debug!("잘못된 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        self.store
            .find_by_id(USERS, &object_id)
            .await?
            .map(User::from_document)
            .transpose()
    }

    /// 도서를 대출 중인 사용자를 도서 정보와 함께 조회합니다.
    ///
    /// 참조 대상 도서가 삭제된 사용자도 결과에 포함되며, 이 경우
    /// `issued_book`이 `None`입니다.
    pub async fn find_holders(&self) -> AppResult<Vec<IssuedBookHolder>> {
        let populate = Populate::new(ISSUED_BOOK, BOOKS);

        self.store
            .find_where(USERS, &Filter::exists(ISSUED_BOOK), Some(&populate))
            .await?
            .into_iter()
            .map(IssuedBookHolder::from_document)
            .collect()
    }

    /// 새 사용자를 저장합니다.
    ///
    /// 필수 필드 검사 후 저장하며, 실패 시 `DatabaseError`를 반환합니다.
    pub async fn create(&self, user: NewUser) -> AppResult<User> {
        user.validate()
            .map_err(|e| AppError::DatabaseError(format!("User validation failed: {}", e)))?;

        let created = self.store.create(USERS, user.to_document()?).await?;
        User::from_document(created)
    }

    /// 사용자 정보를 부분 수정하고 수정된 사용자를 반환합니다.
    ///
    /// `$set`과 `$unset`을 함께 사용할 수 있으므로 대출/반납 처리에도 사용됩니다.
    pub async fn update(&self, id: &str, update: &Update) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            debug!("잘못된 사용자 ID 형식: {}", id);
            return Ok(None);
        };

        self.store
            .update_by_id(USERS, &object_id, update)
            .await?
            .map(User::from_document)
            .transpose()
    }

    /// 사용자를 삭제하고 삭제된 사용자를 반환합니다.
    pub async fn delete(&self, id: &str) -> AppResult<Option<User>> {
        let Some(object_id) = parse_object_id(id) else {
            return Ok(None);
        };

        self.store
            .delete_by_id(USERS, &object_id)
            .await?
            .map(User::from_document)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    fn new_user(name: &str) -> NewUser {
        NewUser::from_payload(json!({
            "name": name,
            "surname": "Kim",
            "email": "kim@example.com",
            "subscriptionType": "Basic",
            "subscriptionDate": "2024-01-15"
        }))
        .unwrap()
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));

        let created = repo.create(new_user("Minsu")).await.unwrap();
        let found = repo.find_by_id(&created.id_string()).await.unwrap().unwrap();

        assert_eq!(found.name, "Minsu");
        assert!(found.issued_book.is_none());
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_create_rejects_missing_fields() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        let mut user = new_user("Minsu");
        user.subscription_date = String::new();

        assert!(matches!(repo.create(user).await, Err(AppError::DatabaseError(_))));
    }

    #[actix_web::test]
    async fn test_find_holders_populates_books() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let repo = UserRepository::new(store.clone());

        let book = store.create(BOOKS, doc! { "name": "Dune", "author": "Frank Herbert" }).await.unwrap();
        let book_id = book.get_object_id("_id").unwrap();

        let holder = repo.create(new_user("Minsu")).await.unwrap();
        repo.create(new_user("Jiwoo")).await.unwrap();

        let update = Update::set(doc! { "issuedBook": book_id, "issuedDate": "2024-01-01" });
        repo.update(&holder.id_string(), &update).await.unwrap();

        let holders = repo.find_holders().await.unwrap();
        assert_eq!(holders.len(), 1);
        assert_eq!(holders[0].id, holder.id);
        assert_eq!(holders[0].issued_book.as_ref().unwrap().name, "Dune");
        assert_eq!(holders[0].issued_date.as_deref(), Some("2024-01-01"));
    }

    #[actix_web::test]
    async fn test_find_holders_with_deleted_book() {
        let repo = UserRepository::new(Arc::new(MemoryStore::new()));
        let holder = repo.create(new_user("Minsu")).await.unwrap();

        let update = Update::set(doc! { "issuedBook": ObjectId::new() });
        repo.update(&holder.id_string(), &update).await.unwrap();

        let holders = repo.find_holders().await.unwrap();
        assert_eq!(holders.len(), 1);
        assert!(holders[0].issued_book.is_none());
    }
}
