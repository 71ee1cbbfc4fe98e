//! User Entity Implementation
//!
//! 도서관 회원 엔티티입니다. 회원은 한 번에 최대 한 권의 도서를 대출할 수 있으며,
//! 대출 정보 세 필드(`issuedBook`, `issuedDate`, `returnDate`)는 대출 시 함께 기록되고
//! 반납 시 함께 제거됩니다.

use mongodb::bson::{self, oid::ObjectId, DateTime, Document};
use serde::{Deserialize, Serialize};

use crate::core::errors::{AppResult, ErrorContext};
use crate::domain::entities::books::book::Book;

/// 대출 도서 참조 필드
pub const ISSUED_BOOK: &str = "issuedBook";
/// 대출일 필드
pub const ISSUED_DATE: &str = "issuedDate";
/// 반납 예정일 필드
pub const RETURN_DATE: &str = "returnDate";

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    /// 이름
    #[serde(default)]
    pub name: String,
    /// 성
    #[serde(default)]
    pub surname: String,
    /// 이메일 (형식 및 중복 검사 없음)
    #[serde(default)]
    pub email: String,
    /// 대출 중인 도서 ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_book: Option<ObjectId>,
    /// 대출일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    /// 반납 예정일
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    /// 구독 유형
    #[serde(default)]
    pub subscription_type: String,
    /// 구독 시작일
    #[serde(default)]
    pub subscription_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime>,
}

impl User {
    /// 저장소 문서를 사용자 엔티티로 변환합니다.
    pub fn from_document(document: Document) -> AppResult<Self> {
        bson::from_document(document).context("사용자 문서 디코딩 실패")
    }

    pub fn id_string(&self) -> String {
        self.id.to_hex()
    }
}

/// `issuedBook` 참조가 도서 문서로 채워진 사용자
///
/// 대출 도서 목록 조회에서만 사용됩니다. 참조 대상 도서가 삭제된 경우
/// `issued_book`은 `None`이 됩니다.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedBookHolder {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(default)]
    pub issued_book: Option<Book>,
    #[serde(default)]
    pub issued_date: Option<String>,
    #[serde(default)]
    pub return_date: Option<String>,
}

impl IssuedBookHolder {
    pub fn from_document(document: Document) -> AppResult<Self> {
        bson::from_document(document).context("대출 문서 디코딩 실패")
    }
}
