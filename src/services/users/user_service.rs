//! # 사용자 관리 서비스 구현
//!
//! 도서관 회원의 등록/조회/수정/삭제와 도서 반납, 구독 정보 계산을 구현합니다.
//!
//! ## 대출 상태
//!
//! ```text
//!            issue                      issue (다른 도서, 기존 기록 덮어씀)
//!   Free ─────────────▶ Holding ◀──────────────┐
//!    ▲                    │   └────────────────┘
//!    └──────── return ────┘
//! ```
//!
//! 반납 예정일이 지나도 상태는 자동으로 바뀌지 않습니다.

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};
use crate::db::Update;
use crate::domain::dto::users::request::{NewUser, UpdateUserRequest};
use crate::domain::dto::users::response::{SubscriptionDetails, UserResponse};
use crate::domain::entities::users::user::{ISSUED_BOOK, ISSUED_DATE, RETURN_DATE};
use crate::repositories::users::UserRepository;

pub const NO_USERS_FOUND: &str = "No users found";
pub const USER_NOT_FOUND: &str = "User not found";
pub const NO_USER_DATA: &str = "No data was provided for the user";

/// 사용자 관리 비즈니스 로직 서비스
#[derive(Clone)]
pub struct UserService {
    user_repo: UserRepository,
}

impl UserService {
    pub fn new(user_repo: UserRepository) -> Self {
        Self { user_repo }
    }

    /// 모든 사용자 조회
    ///
    /// 등록된 사용자가 없으면 `NotFound`를 반환합니다.
    pub async fn get_all_users(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.user_repo.find_all().await?;

        if users.is_empty() {
            debug!("등록된 사용자 없음");
            return Err(AppError::NotFound(NO_USERS_FOUND.to_string()));
        }

        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 새 사용자 등록
    ///
    /// # 반환값
    ///
    /// 등록 직후의 전체 사용자 목록
    pub async fn add_user(&self, payload: Option<Value>) -> AppResult<Vec<UserResponse>> {
        let payload = payload.ok_or_else(|| AppError::ValidationError(NO_USER_DATA.to_string()))?;

        let created = self.user_repo.create(NewUser::from_payload(payload)?).await?;
        info!("👤 사용자 등록: {} {} ({})", created.name, created.surname, created.id_string());

        self.get_all_users().await
    }

    /// 사용자 정보 수정
    ///
    /// 본문에 있는 스키마 필드만 덮어씁니다. 대출 정보 필드도 직접 수정할 수 있습니다.
    pub async fn update_user(&self, id: &str, payload: Option<Value>) -> AppResult<UserResponse> {
        let update = UpdateUserRequest::from_payload(payload)?.to_update()?;

        let user = self
            .user_repo
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("📝 사용자 수정: {}", user.id_string());
        Ok(UserResponse::from(user))
    }

    pub async fn delete_user(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("🗑️ 사용자 삭제: {}", user.id_string());
        Ok(UserResponse::from(user))
    }

    /// 도서 반납
    ///
    /// 대출 정보 세 필드를 무조건 제거합니다. 대출 중이 아닌 사용자도 성공으로 처리됩니다.
    pub async fn return_book(&self, id: &str) -> AppResult<UserResponse> {
        let update = Update::unset([ISSUED_BOOK, ISSUED_DATE, RETURN_DATE]);

        let user = self
            .user_repo
            .update(id, &update)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        info!("📗 도서 반납: user={}", user.id_string());
        Ok(UserResponse::from(user))
    }

    /// 현재 시각 기준 구독 정보 조회
    pub async fn get_subscription_details(&self, id: &str) -> AppResult<SubscriptionDetails> {
        self.subscription_details_at(id, Utc::now()).await
    }

    /// `now` 시점 기준 구독 정보 조회
    ///
    /// 만료일은 구독 시작일에서 1년 뒤이며, `daysLeft`는 만료 후 음수가 됩니다.
    pub async fn subscription_details_at(
        &self,
        id: &str,
        now: DateTime<Utc>,
    ) -> AppResult<SubscriptionDetails> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))?;

        Ok(SubscriptionDetails::from_user(user, now))
    }
}
