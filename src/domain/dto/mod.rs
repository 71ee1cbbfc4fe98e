//! # Data Transfer Objects
//!
//! HTTP 계층과 서비스 계층 사이에서 주고받는 요청/응답 타입입니다.
//!
//! ## 모듈 구성
//!
//! - [`common`] - 모든 응답이 공유하는 `{ message, success, data? }` 봉투와 요청 본문 해석
//! - [`books`] - 도서 생성/수정/대출 요청, 도서 및 대출 도서 응답
//! - [`users`] - 사용자 생성/수정 요청, 사용자 및 구독 정보 응답
//!
//! ## 요청 본문 처리 규칙
//!
//! 요청 본문은 먼저 [`common::parse_payload`]로 "있음/없음"만 판별합니다.
//! 형태 검사는 하지 않으며, 필수 필드 누락은 저장 단계의 스키마 검사에서 처리됩니다.

pub mod books;
pub mod common;
pub mod users;
