//! 사용자 요청 DTO

use mongodb::bson::{doc, oid::ObjectId, Document};
use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::core::errors::{AppError, AppResult};
use crate::db::Update;
use crate::domain::dto::common::deserialize_object;
use crate::domain::entities::users::user::{ISSUED_BOOK, ISSUED_DATE, RETURN_DATE};
use crate::utils::string_utils::{deserialize_optional_string_cast, deserialize_string_cast};

/// 대출 도서 참조를 ObjectId로 변환합니다.
fn cast_issued_book(value: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(value).map_err(|_| {
        AppError::DatabaseError(format!(
            "Cast to ObjectId failed for value \"{}\" at path \"{}\"",
            value, ISSUED_BOOK
        ))
    })
}

/// 신규 사용자 문서
///
/// 이름, 성, 이메일, 구독 유형, 구독 시작일은 필수입니다.
/// 대출 정보는 선택이며, `issuedBook`은 ObjectId 형식이어야 합니다.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `name` is required."))]
    pub name: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `surname` is required."))]
    pub surname: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `email` is required."))]
    pub email: String,

    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub issued_book: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub issued_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub return_date: Option<String>,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `subscriptionType` is required."))]
    pub subscription_type: String,

    #[serde(default, deserialize_with = "deserialize_string_cast")]
    #[validate(length(min = 1, message = "Path `subscriptionDate` is required."))]
    pub subscription_date: String,
}

impl NewUser {
    pub fn from_payload(payload: Value) -> AppResult<Self> {
        deserialize_object(payload, "User validation failed")
    }

    /// 저장소 문서로 변환합니다. 값이 없는 선택 필드는 문서에 포함하지 않습니다.
    pub fn to_document(&self) -> AppResult<Document> {
        let mut document = doc! {
            "name": &self.name,
            "surname": &self.surname,
            "email": &self.email,
        };

        if let Some(issued_book) = &self.issued_book {
            document.insert(ISSUED_BOOK, cast_issued_book(issued_book)?);
        }
        if let Some(issued_date) = &self.issued_date {
            document.insert(ISSUED_DATE, issued_date.as_str());
        }
        if let Some(return_date) = &self.return_date {
            document.insert(RETURN_DATE, return_date.as_str());
        }

        document.insert("subscriptionType", self.subscription_type.as_str());
        document.insert("subscriptionDate", self.subscription_date.as_str());

        Ok(document)
    }
}

/// 사용자 수정 요청
///
/// 본문에 포함된 스키마 필드만 덮어쓰며, 스키마에 없는 필드는 무시합니다.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub surname: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub issued_book: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub issued_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub return_date: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub subscription_type: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string_cast")]
    pub subscription_date: Option<String>,
}

impl UpdateUserRequest {
    pub fn from_payload(payload: Option<Value>) -> AppResult<Self> {
        match payload {
            Some(value) => deserialize_object(value, "User update failed"),
            None => Ok(Self::default()),
        }
    }

    /// 수정 명세로 변환합니다.
    ///
    /// `issuedBook`이 ObjectId 형식이 아니면 `DatabaseError`를 반환합니다.
    pub fn to_update(&self) -> AppResult<Update> {
        let mut set = Document::new();

        let text_fields = [
            ("name", &self.name),
            ("surname", &self.surname),
            ("email", &self.email),
            (ISSUED_DATE, &self.issued_date),
            (RETURN_DATE, &self.return_date),
            ("subscriptionType", &self.subscription_type),
            ("subscriptionDate", &self.subscription_date),
        ];
        for (key, value) in text_fields {
            if let Some(value) = value {
                set.insert(key, value.as_str());
            }
        }

        if let Some(issued_book) = &self.issued_book {
            set.insert(ISSUED_BOOK, cast_issued_book(issued_book)?);
        }

        Ok(Update::set(set))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_payload() -> Value {
        json!({
            "name": " Minsu ",
            "surname": "Kim",
            "email": "minsu@example.com",
            "subscriptionType": "Premium",
            "subscriptionDate": "2024-01-15"
        })
    }

    #[test]
    fn test_new_user_document() {
        let user = NewUser::from_payload(full_payload()).unwrap();
        assert!(user.validate().is_ok());

        let document = user.to_document().unwrap();
        assert_eq!(document.get_str("name").unwrap(), "Minsu");
        assert_eq!(document.get_str("subscriptionType").unwrap(), "Premium");
        assert!(!document.contains_key(ISSUED_BOOK));
        assert!(!document.contains_key(ISSUED_DATE));
    }

    #[test]
    fn test_new_user_with_issued_book() {
        let book_id = ObjectId::new();
        let mut payload = full_payload();
        payload["issuedBook"] = json!(book_id.to_hex());
        payload["issuedDate"] = json!("2024-01-01");

        let document = NewUser::from_payload(payload).unwrap().to_document().unwrap();
        assert_eq!(document.get_object_id(ISSUED_BOOK).unwrap(), book_id);
        assert_eq!(document.get_str(ISSUED_DATE).unwrap(), "2024-01-01");
    }

    #[test]
    fn test_new_user_invalid_issued_book_is_store_error() {
        let mut payload = full_payload();
        payload["issuedBook"] = json!("not-an-id");

        let result = NewUser::from_payload(payload).unwrap().to_document();
        assert!(matches!(result, Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_new_user_missing_required_fields() {
        let user = NewUser::from_payload(json!({ "name": "Minsu" })).unwrap();
        let errors = user.validate().unwrap_err();

        let fields = errors.field_errors();
        assert!(fields.contains_key("surname"));
        assert!(fields.contains_key("email"));
        assert!(!fields.contains_key("name"));
    }

    #[test]
    fn test_update_user_sets_present_fields() {
        let request = UpdateUserRequest::from_payload(Some(json!({
            "email": "new@example.com",
            "subscriptionType": "Basic",
            "role": "admin"
        })))
        .unwrap();

        let update = request.to_update().unwrap();
        assert_eq!(
            update.set,
            doc! { "email": "new@example.com", "subscriptionType": "Basic" }
        );
    }

    #[test]
    fn test_update_user_invalid_issued_book() {
        let request = UpdateUserRequest::from_payload(Some(json!({ "issuedBook": "xyz" }))).unwrap();

        assert!(matches!(request.to_update(), Err(AppError::DatabaseError(_))));
    }

    #[test]
    fn test_array_bodies_are_store_errors() {
        let positional = json!(["Minsu", "Kim", "minsu@example.com"]);

        assert!(matches!(
            NewUser::from_payload(positional.clone()),
            Err(AppError::DatabaseError(_))
        ));
        assert!(matches!(
            UpdateUserRequest::from_payload(Some(positional)),
            Err(AppError::DatabaseError(_))
        ));
    }
}
