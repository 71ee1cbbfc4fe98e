//! 사용자 응답 DTO

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::user::User;
use crate::utils::dates::{format_datetime, format_timestamp_millis, subscription_status};

/// 사용자 응답
///
/// 대출 정보가 없는 사용자는 `issuedBook`, `issuedDate`, `returnDate` 필드가 생략됩니다.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_book: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub subscription_type: String,
    pub subscription_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id_string(),
            name: user.name,
            surname: user.surname,
            email: user.email,
            issued_book: user.issued_book.map(|id| id.to_hex()),
            issued_date: user.issued_date,
            return_date: user.return_date,
            subscription_type: user.subscription_type,
            subscription_date: user.subscription_date,
            created_at: user
                .created_at
                .and_then(|dt| format_timestamp_millis(dt.timestamp_millis())),
            updated_at: user
                .updated_at
                .and_then(|dt| format_timestamp_millis(dt.timestamp_millis())),
        }
    }
}

/// 구독 정보 응답
///
/// 구독 만료일은 저장되지 않고 조회 시점마다 계산됩니다.
/// 구독 시작일을 해석할 수 없으면 `subscriptionExpirationDate`와 `daysLeft`는 `null`,
/// `subscriptionExpired`는 `false`입니다.
///
/// ```json
/// {
///   "id": "65a4f0c2e13b2a0012345678",
///   "name": "Minsu",
///   "surname": "Kim",
///   "email": "minsu@example.com",
///   "subscriptionType": "Premium",
///   "subscriptionDate": "2023-01-15",
///   "subscriptionExpirationDate": "2024-01-15T00:00:00.000Z",
///   "subscriptionExpired": true,
///   "daysLeft": -5
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionDetails {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_book: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_date: Option<String>,
    pub subscription_type: String,
    pub subscription_date: String,
    pub subscription_expiration_date: Option<String>,
    pub subscription_expired: bool,
    pub days_left: Option<i64>,
}

impl SubscriptionDetails {
    /// `now` 시점 기준으로 구독 상태를 계산합니다.
    pub fn from_user(user: User, now: DateTime<Utc>) -> Self {
        let status = subscription_status(&user.subscription_date, now);

        Self {
            id: user.id_string(),
            name: user.name,
            surname: user.surname,
            email: user.email,
            issued_book: user.issued_book.map(|id| id.to_hex()),
            issued_date: user.issued_date,
            return_date: user.return_date,
            subscription_type: user.subscription_type,
            subscription_date: user.subscription_date,
            subscription_expiration_date: status
                .as_ref()
                .map(|status| format_datetime(status.expiration)),
            subscription_expired: status.as_ref().is_some_and(|status| status.expired),
            days_left: status.map(|status| status.days_left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::dates::parse_date;
    use mongodb::bson::oid::ObjectId;
    use serde_json::json;

    fn sample_user(subscription_date: &str) -> User {
        User {
            id: ObjectId::parse_str("65a4f0c2e13b2a0012345678").unwrap(),
            name: "Minsu".to_string(),
            surname: "Kim".to_string(),
            email: "minsu@example.com".to_string(),
            issued_book: None,
            issued_date: None,
            return_date: None,
            subscription_type: "Premium".to_string(),
            subscription_date: subscription_date.to_string(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_user_response_omits_missing_issuance() {
        let json = serde_json::to_value(UserResponse::from(sample_user("2024-01-15"))).unwrap();

        assert_eq!(json["_id"], "65a4f0c2e13b2a0012345678");
        assert_eq!(json["subscriptionType"], "Premium");
        assert!(json.get("issuedBook").is_none());
        assert!(json.get("returnDate").is_none());
    }

    #[test]
    fn test_user_response_with_issuance() {
        let book_id = ObjectId::new();
        let mut user = sample_user("2024-01-15");
        user.issued_book = Some(book_id);
        user.issued_date = Some("2024-01-01".to_string());

        let response = UserResponse::from(user);
        assert_eq!(response.issued_book, Some(book_id.to_hex()));
        assert_eq!(response.issued_date.as_deref(), Some("2024-01-01"));
    }

    #[test]
    fn test_subscription_details_expired() {
        let now = parse_date("2024-01-20").unwrap();
        let details = SubscriptionDetails::from_user(sample_user("2023-01-15"), now);

        let json = serde_json::to_value(&details).unwrap();
        assert_eq!(
            json,
            json!({
                "id": "65a4f0c2e13b2a0012345678",
                "name": "Minsu",
                "surname": "Kim",
                "email": "minsu@example.com",
                "subscriptionType": "Premium",
                "subscriptionDate": "2023-01-15",
                "subscriptionExpirationDate": "2024-01-15T00:00:00.000Z",
                "subscriptionExpired": true,
                "daysLeft": -5
            })
        );
    }

    #[test]
    fn test_subscription_details_unparseable_date() {
        let now = parse_date("2024-01-20").unwrap();
        let details = SubscriptionDetails::from_user(sample_user("whenever"), now);

        assert_eq!(details.subscription_expiration_date, None);
        assert!(!details.subscription_expired);
        assert_eq!(details.days_left, None);

        let json = serde_json::to_value(&details).unwrap();
        assert!(json["daysLeft"].is_null());
    }
}
