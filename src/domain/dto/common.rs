//! 공통 응답 봉투와 요청 본문 해석

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::core::errors::{AppError, AppResult};

/// API 응답 래퍼
///
/// 모든 응답은 이 형태로 직렬화됩니다. `data`가 없으면 필드 자체가 생략됩니다.
///
/// ```json
/// { "message": "Books fetched successfully", "success": true, "data": [ ... ] }
/// { "message": "Book not found", "success": false }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            success: true,
            data: Some(data),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: false,
            data: None,
        }
    }
}

impl ApiResponse<()> {
    /// 데이터 없이 성공 메시지만 담은 응답
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            success: true,
            data: None,
        }
    }
}

/// 요청 본문을 해석합니다.
///
/// # 반환값
///
/// * `Ok(None)` - 본문이 비어 있거나 공백뿐이거나, `null` 또는 `{}`인 경우
/// * `Ok(Some(Value))` - 그 외의 JSON 값 (형태는 검사하지 않음)
/// * `Err(AppError::ValidationError)` - JSON으로 해석할 수 없는 경우
pub fn parse_payload(body: &[u8]) -> AppResult<Option<Value>> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::ValidationError(format!("Malformed JSON payload: {}", e)))?;

    Ok(match value {
        Value::Null => None,
        Value::Object(ref map) if map.is_empty() => None,
        other => Some(other),
    })
}

/// JSON 객체 본문을 요청 타입으로 역직렬화합니다.
///
/// 배열처럼 객체가 아닌 본문은 필드 순서대로 해석되지 않도록 거부합니다.
/// 실패는 저장 단계 오류(`DatabaseError`)로 보고되며 메시지 앞에 `failure`가 붙습니다.
pub fn deserialize_object<T: DeserializeOwned>(payload: Value, failure: &str) -> AppResult<T> {
    if !payload.is_object() {
        return Err(AppError::DatabaseError(format!(
            "{}: expected a JSON object, got {}",
            failure, payload
        )));
    }

    serde_json::from_value(payload).map_err(|e| AppError::DatabaseError(format!("{}: {}", failure, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let response = ApiResponse::success("Books fetched successfully", vec![1, 2]);
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(
            json,
            json!({ "message": "Books fetched successfully", "success": true, "data": [1, 2] })
        );
    }

    #[test]
    fn test_failure_envelope_omits_data() {
        let json = serde_json::to_value(ApiResponse::<()>::failure("Book not found")).unwrap();

        assert_eq!(json, json!({ "message": "Book not found", "success": false }));
    }

    #[test]
    fn test_message_envelope() {
        let json = serde_json::to_value(ApiResponse::message("Server is up and running")).unwrap();

        assert_eq!(json, json!({ "message": "Server is up and running", "success": true }));
    }

    #[test]
    fn test_parse_payload_absent() {
        assert_eq!(parse_payload(b"").unwrap(), None);
        assert_eq!(parse_payload(b"  \n\t").unwrap(), None);
        assert_eq!(parse_payload(b"null").unwrap(), None);
        assert_eq!(parse_payload(b"{}").unwrap(), None);
        assert_eq!(parse_payload(b" { } ").unwrap(), None);
    }

    #[test]
    fn test_parse_payload_present() {
        assert_eq!(
            parse_payload(br#"{"name": "Dune"}"#).unwrap(),
            Some(json!({ "name": "Dune" }))
        );
        assert_eq!(parse_payload(b"[]").unwrap(), Some(json!([])));
    }

    #[test]
    fn test_parse_payload_malformed() {
        assert!(matches!(
            parse_payload(b"{name:"),
            Err(AppError::ValidationError(_))
        ));
    }

    #[derive(Debug, serde::Deserialize)]
    struct Pair {
        first: String,
        second: String,
    }

    #[test]
    fn test_deserialize_object() {
        let pair: Pair = deserialize_object(json!({ "first": "a", "second": "b" }), "Pair failed").unwrap();
        assert_eq!(pair.first, "a");
        assert_eq!(pair.second, "b");
    }

    #[test]
    fn test_deserialize_object_rejects_non_objects() {
        for payload in [json!(["a", "b"]), json!("a"), json!(42), json!(true)] {
            match deserialize_object::<Pair>(payload, "Pair failed") {
                Err(AppError::DatabaseError(msg)) => assert!(msg.starts_with("Pair failed")),
                other => panic!("Expected DatabaseError, got {:?}", other),
            }
        }
    }
}
