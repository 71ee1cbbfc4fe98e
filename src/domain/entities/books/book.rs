//! Book Entity Implementation
//!
//! 도서 문서의 엔티티 표현입니다. 가격(`price`)을 포함한 모든 필드는 문자열입니다.
//! 도서는 대출자를 기록하지 않으며, 대출 관계는 사용자 문서에서만 관리됩니다.

use mongodb::bson::{self, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, ErrorContext};

/// 도서 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 도서명
    #[serde(default)]
    pub name: String,
    /// 저자
    #[serde(default)]
    pub author: String,
    /// 장르
    #[serde(default)]
    pub genre: String,
    /// 가격 (숫자가 아닌 문자열)
    #[serde(default)]
    pub price: String,
    /// 출판사
    #[serde(default)]
    pub publisher: String,
    /// 생성 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    /// 수정 시간
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl Book {
    /// 저장소 문서를 도서 엔티티로 변환합니다.
    pub fn from_document(document: Document) -> AppResult<Self> {
        bson::from_document(document).context("도서 문서 디코딩 실패")
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn test_book_from_document() {
        let id = ObjectId::new();
        let now = DateTime::now();
        let document = doc! {
            "_id": id,
            "name": "Dune",
            "author": "Frank Herbert",
            "genre": "Sci-Fi",
            "price": "450",
            "publisher": "Chilton",
            "createdAt": now,
            "updatedAt": now,
        };

        let book = Book::from_document(document).unwrap();

        assert_eq!(book.id, id);
        assert_eq!(book.name, "Dune");
        assert_eq!(book.price, "450");
        assert_eq!(book.created_at, Some(now));
        assert_eq!(book.id_string(), id.to_hex());
    }

    #[test]
    fn test_book_without_id_fails_to_decode() {
        assert!(Book::from_document(doc! { "name": "Dune" }).is_err());
    }
}
