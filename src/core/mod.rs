//! # Core Module
//!
//! 백엔드 서비스 전역에서 공유되는 핵심 기능을 제공하는 모듈입니다.
//!
//! ## 모듈 구성
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 애플리케이션 전역 에러 타입 정의
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 표준 응답 봉투 생성
//! - **5xx 마스킹**: 저장소 오류 상세는 로그에만 기록
//! - **자동 변환**: `mongodb::error::Error` → `AppError::DatabaseError`
//!
//! ## 계층 간 에러 흐름
//!
//! ```text
//! DocumentStore ──(DatabaseError)──▶ Repository ──▶ Service ──(NotFound)──▶ Handler
//!                                                                    │
//!                                                                    ▼
//!                                          ResponseError::error_response()
//!                                          { "message": "...", "success": false }
//! ```

pub mod errors;

pub use errors::*;
