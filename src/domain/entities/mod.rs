//! # Domain Entities
//!
//! 저장소에 보관되는 문서를 타입으로 표현한 엔티티들입니다.
//!
//! - [`books::book::Book`] - 도서 문서
//! - [`users::user::User`] - 사용자(회원) 문서
//! - [`users::user::IssuedBookHolder`] - 대출 도서가 채워진 사용자 문서
//!
//! 모든 엔티티는 `bson::Document`에서 디코딩되며, 필드 이름은 camelCase로 저장됩니다.

pub mod books;
pub mod users;
