//! 도서 응답 DTO

use serde::Serialize;

use crate::domain::entities::books::book::Book;
use crate::domain::entities::users::user::IssuedBookHolder;
use crate::utils::dates::format_timestamp_millis;

/// 도서 응답
///
/// ```json
/// {
///   "_id": "65a4f0c2e13b2a0012345678",
///   "name": "Dune",
///   "author": "Frank Herbert",
///   "genre": "Sci-Fi",
///   "price": "450",
///   "publisher": "Chilton",
///   "createdAt": "2024-01-15T00:00:00.000Z",
///   "updatedAt": "2024-01-15T00:00:00.000Z"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub author: String,
    pub genre: String,
    pub price: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<Book> for BookResponse {
    fn from(book: Book) -> Self {
        Self {
            id: book.id_string(),
            name: book.name,
            author: book.author,
            genre: book.genre,
            price: book.price,
            publisher: book.publisher,
            created_at: book
                .created_at
                .and_then(|dt| format_timestamp_millis(dt.timestamp_millis())),
            updated_at: book
                .updated_at
                .and_then(|dt| format_timestamp_millis(dt.timestamp_millis())),
        }
    }
}

/// 대출 중인 도서 응답
///
/// 도서 정보에 대출자의 대출일/반납 예정일을 더한 형태이며, 가격은 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssuedBookView {
    pub id: String,
    pub name: String,
    pub author: String,
    pub genre: String,
    pub publisher: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
}

impl IssuedBookView {
    /// 대출자 문서로부터 생성합니다. 참조 도서가 없으면 `None`입니다.
    pub fn from_holder(holder: IssuedBookHolder) -> Option<Self> {
        let book = holder.issued_book?;

        Some(Self {
            id: book.id_string(),
            name: book.name,
            author: book.author,
            genre: book.genre,
            publisher: book.publisher,
            issued_date: holder.issued_date,
            return_date: holder.return_date,
        })
    }
}
