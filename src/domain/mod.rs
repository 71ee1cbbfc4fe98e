//! # Domain Layer Module
//!
//! 도서관 서비스의 도메인 계층입니다.
//! Spring Framework의 Domain Layer와 같은 역할을 수행합니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities  - 저장소 문서와 1:1로 대응하는 Book, User
//! └── DTOs      - 요청 본문 해석과 응답 형태 정의
//!      │
//!      ▼
//! Application Layer (Services)
//!      │
//!      ▼
//! Infrastructure Layer (Repositories, DocumentStore)
//! ```
//!
//! ## Spring Framework와의 비교
//!
//! | Spring | 이 시스템 | 역할 |
//! |--------|-----------|------|
//! | `@Document` | `entities` 모듈 | 저장소 문서 표현 |
//! | `@RequestBody` / `@ResponseBody` | `dto` 모듈 | API 계약 정의 |
//! | `@Valid` | `validator` | 문서 스키마 검사 |
//!
//! ## 데이터 흐름
//!
//! ```text
//! JSON body ──▶ NewBook / UpdateBookRequest ──▶ bson::Document ──▶ DocumentStore
//!                                                                     │
//! JSON resp ◀── BookResponse ◀── Book (entity) ◀── bson::Document ◀───┘
//! ```

pub mod dto;
pub mod entities;
