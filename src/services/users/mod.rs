//! 사용자 관리 서비스 모듈
//!
//! 회원 CRUD, 도서 반납, 구독 정보 계산을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let details = user_service.get_subscription_details(&user_id).await?;
//! println!("남은 일수: {:?}", details.days_left);
//! ```

pub mod user_service;

pub use user_service::UserService;
