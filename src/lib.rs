//! 도서관 관리 서비스 백엔드
//!
//! Rust 기반의 도서관 회원/도서 관리 REST 서비스입니다.
//! 도서와 사용자 CRUD, 도서 대출/반납, 구독 만료 정보 계산을 제공합니다.
//!
//! # Features
//!
//! - **도서 관리**: 도서 등록, 조회, 수정, 삭제, 대출 중인 도서 목록
//! - **사용자 관리**: 회원 등록, 조회, 수정, 삭제
//! - **대출/반납**: 회원당 한 권, 대출 정보는 사용자 문서에 기록
//! - **구독 정보**: 구독 시작일 기준 1년 만료일과 남은 일수 계산
//! - **MongoDB**: 기본 문서 저장소 (메모리 저장소로 교체 가능)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  DocumentStore  │ ← MongoDB / 메모리
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use library_service_backend::db::{DocumentStore, MemoryStore};
//! use library_service_backend::repositories::{books::BookRepository, users::UserRepository};
//! use library_service_backend::services::books::BookService;
//!
//! let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
//! let book_service = BookService::new(
//!     BookRepository::new(store.clone()),
//!     UserRepository::new(store),
//! );
//!
//! let books = book_service.get_all_books().await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
