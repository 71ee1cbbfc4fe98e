//! 도서 요청 DTO
//!
//! 요청 본문(JSON)을 저장소 문서 또는 부분 수정 명세로 변환합니다.
//! 모든 필드는 문자열로 변환되고 앞뒤 공백이 제거됩니다.

use mongodb::bson::{doc, Document};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::core::errors::AppResult;
use crate::db::Update;
use crate::domain::dto::common::deserialize_object;
use crate::domain::entities::users::user::{ISSUED_BOOK, ISSUED_DATE, RETURN_DATE};
use crate::utils::string_utils::{deserialize_optional_string_cast, deserialize_string_cast};

/// 신규 도서 문서
///
/// 도서 스키마를 표현하며, 다섯 필드 모두 비어 있지 않은 문자열이어야 합니다.
/// 검사는 저장 직전에 리포지토리에서 수행됩니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewBook {
    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `name` is required."))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `author` is required."))]
    pub author: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `genre` is required."))]
    pub genre: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `price` is required."))]
    pub price: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `publisher` is required."))]
    pub publisher: String,
}

impl NewBook {
    /// 요청 본문을 신규 도서로 해석합니다.
    ///
    /// 문자열로 변환할 수 없는 값(객체, 배열)이나 객체가 아닌 본문은
    /// 저장 단계 오류(`DatabaseError`)로 처리됩니다.
    pub fn from_payload(payload: Value) -> AppResult<Self> {
        deserialize_object(payload, "Book validation failed")
    }

    pub fn to_document(&self) -> Document {
        doc! {
            "name": &self.name,
            "author": &self.author,
            "genre": &self.genre,
            "price": &self.price,
            "publisher": &self.publisher,
        }
    }
}

/// 도서 수정 요청
///
/// 다섯 개의 스키마 필드만 반영하며, 본문의 다른 필드는 무시합니다.
/// 값이 없거나 `null`인 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UpdateBookRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub author: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub genre: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub publisher: Option<String>,
}

impl UpdateBookRequest {
    /// 본문이 없으면 아무 필드도 바꾸지 않는 요청이 됩니다.
    pub fn from_payload(payload: Option<Value>) -> AppResult<Self> {
        match payload {
            Some(value) => deserialize_object(value, "Book update failed"),
            None => Ok(Self::default()),
        }
    }

    pub fn to_update(&self) -> Update {
        let mut set = Document::new();

        let fields = [
            ("name", &self.name),
            ("author", &self.author),
            ("genre", &self.genre),
            ("price", &self.price),
            ("publisher", &self.publisher),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                set.insert(key, value.as_str());
            }
        }

        Update::set(set)
    }
}

/// 도서 대출 요청
///
/// ```json
/// { "userId": "65a4...", "issuedDate": "2024-01-01", "returnDate": "2024-02-01" }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueBookRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub issued_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub return_date: Option<String>,
}

impl IssueBookRequest {
    pub fn from_payload(payload: Option<Value>) -> AppResult<Self> {
        match payload {
            Some(value) => deserialize_object(value, "Book issue failed"),
            None => Ok(Self::default()),
        }
    }

    /// 사용자 문서에 적용할 대출 정보 수정 명세
    ///
    /// 세 필드가 항상 하나의 대출을 가리키도록, 요청에 없는 날짜 필드는 제거합니다.
    /// 누락된 날짜를 건너뛰고 이전 대출의 날짜를 남기는 방식은 의도적으로 따르지 않습니다.
    pub fn to_update(&self, book_id: mongodb::bson::oid::ObjectId) -> Update {
        let mut update = Update::set(doc! { ISSUED_BOOK: book_id });

        for (key, value) in [(ISSUED_DATE, &self.issued_date), (RETURN_DATE, &self.return_date)] {
            match value {
                Some(value) => {
                    update.set.insert(key, value.as_str());
                }
                None => update.unset.push(key.to_string()),
            }
        }

        update
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::AppError;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    #[test]
    fn test_new_book_casts_and_trims() {
        let book = NewBook::from_payload(json!({
            "name": "  Dune ",
            "author": "Frank Herbert",
            "genre": "Sci-Fi",
            "price": 450,
            "publisher": "Chilton",
            "unknown": "ignored"
        }))
        .unwrap();

        assert_eq!(book.name, "Dune");
        assert_eq!(book.price, "450");
        assert!(book.validate().is_ok());
        assert_eq!(book.to_document().len(), 5);
    }

    #[test]
    fn test_new_book_missing_fields_fail_validation() {
        let book = NewBook::from_payload(json!({ "name": "Dune", "author": "   " })).unwrap();
        let errors = book.validate().unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("author"));
        assert!(fields.contains_key("genre"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_new_book_uncastable_value_is_store_error() {
        let result = NewBook::from_payload(json!({ "name": { "first": "Dune" } }));
        assert!(matches!(result, Err(AppError::DatabaseError(_))));

        let result = NewBook::from_payload(json!("Dune"));
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_array_bodies_are_store_errors() {
        let positional = json!(["Dune", "Frank Herbert", "Sci-Fi", "450", "Chilton"]);

        assert!(matches!(
            NewBook::from_payload(positional.clone()),
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(
            UpdateBookRequest::from_payload(Some(positional)),
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(
            IssueBookRequest::from_payload(Some(json!(["65a4f0c2e13b2a0012345678", "2024-01-01"]))),
            Err(AppError::DatabaseError(_))
        ));
    }

    #[test]
    fn test_update_book_only_schema_fields() {
        let request = UpdateBookRequest::from_payload(Some(json!({
            "name": "X",
            "price": null,
            "isbn": "978-0441013593"
        })))
        .unwrap();

        let update = request.to_update();
        assert_eq!(update.set, doc! { "name": "X" });
        assert!(update.unset.is_empty());
    }

    #[test]
    fn test_update_book_without_payload() {
        let request = UpdateBookRequest::from_payload(None).unwrap();
        assert!(request.to_update().is_empty());
    }

    #[test]
    fn test_issue_request_update() {
        let book_id = ObjectId::new();
        let request = IssueBookRequest::from_payload(Some(json!({
            "userId": "65a4f0c2e13b2a0012345678",
            "issuedDate": "2024-01-01",
            "returnDate": "2024-02-01"
        })))
        .unwrap();

        assert_eq!(request.user_id.as_deref(), Some("65a4f0c2e13b2a0012345678"));

        let update = request.to_update(book_id);
        assert_eq!(
            update.set,
            doc! { "issuedBook": book_id, "issuedDate": "2024-01-01", "returnDate": "2024-02-01" }
        );
        assert!(update.unset.is_empty());
    }

    #[test]
    fn test_issue_request_missing_dates_are_cleared() {
        let book_id = ObjectId::new();
        let request = IssueBookRequest::from_payload(Some(json!({ "userId": "abc" }))).unwrap();

        let update = request.to_update(book_id);
        assert_eq!(update.set, doc! { "issuedBook": book_id });
        assert_eq!(update.unset, vec!["issuedDate".to_string(), "returnDate".to_string()]);
    }
}
