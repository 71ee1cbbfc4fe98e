//! 사용자 엔티티 모듈
//!
//! 회원 정보와 대출 상태(`issuedBook`, `issuedDate`, `returnDate`)를 함께 보관합니다.

pub mod user;
