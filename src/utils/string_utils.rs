//! # 문자열 유틸리티
//!
//! 요청 본문의 스칼라 값을 문자열 필드로 정리하는 serde 헬퍼들입니다.
//!
//! 도서/사용자 문서의 모든 필드는 문자열이므로, 클라이언트가 숫자나 불리언을
//! 보내더라도 문자열로 변환(cast)한 뒤 앞뒤 공백을 제거하여 저장합니다.
//! 객체나 배열처럼 문자열로 표현할 수 없는 값은 역직렬화 에러가 됩니다.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::{Number, Value};

/// 정수로 정확히 표현되는 실수의 상한 (2^53)
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_992.0;

/// JSON 숫자를 사람이 읽는 문자열로 변환합니다.
///
/// 소수부가 없는 실수는 정수 형태로 표현합니다 (`12.0` → `"12"`).
/// 2^53 이상의 실수는 `i64`로 잘리지 않도록 `f64` 그대로 출력합니다 (`1e20` → `"100000000000000000000"`).
fn number_to_string(number: &Number) -> String {
    match number.as_f64() {
        Some(value) if number.is_f64() && value.is_finite() && value.fract() == 0.0 => {
            if value.abs() < MAX_SAFE_INTEGER {
                format!("{}", value as i64)
            } else {
                format!("{}", value)
            }
        }
        _ => number.to_string(),
    }
}

/// 스칼라 JSON 값을 정리된 문자열로 변환합니다.
///
/// # 반환값
/// * `Ok(None)` - `null`
/// * `Ok(Some(String))` - 문자열/숫자/불리언 (앞뒤 공백 제거됨)
/// * `Err(String)` - 객체 또는 배열
///
/// # 예제
/// ```rust,ignore
/// use serde_json::json;
///
/// assert_eq!(cast_to_string(&json!("  Dune ")), Ok(Some("Dune".to_string())));
/// assert_eq!(cast_to_string(&json!(450)), Ok(Some("450".to_string())));
/// assert_eq!(cast_to_string(&json!(null)), Ok(None));
/// ```
pub fn cast_to_string(value: &Value) -> Result<Option<String>, String> {
    match value {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s.trim().to_string())),
        Value::Number(n) => Ok(Some(number_to_string(n))),
        Value::Bool(b) => Ok(Some(b.to_string())),
        Value::Array(_) | Value::Object(_) => {
            Err(format!("Cast to string failed for value {}", value))
        }
    }
}

/// 필수 문자열 필드를 위한 serde deserializer
///
/// `#[serde(default, deserialize_with = "deserialize_string_cast")]`와 함께 사용하면
/// 누락된 필드와 `null`은 빈 문자열이 되고, 이후 `validator`의 길이 검사에서 걸러집니다.
///
/// # 예제
/// ```rust,ignore
/// #[derive(Deserialize, Validate)]
/// struct NewBook {
///     #[serde(default, deserialize_with = "deserialize_string_cast")]
///     #[validate(length(min = 1))]
///     name: String,
/// }
///
/// // JSON: {"name": "  Dune  "} → "Dune"
/// // JSON: {"name": 1984}       → "1984"
/// // JSON: {}                   → "" (검증 실패)
/// ```
pub fn deserialize_string_cast<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    cast_to_string(&value)
        .map(Option::unwrap_or_default)
        .map_err(D::Error::custom)
}

/// 선택적 문자열 필드를 위한 serde deserializer
///
/// 부분 수정 요청에서 사용합니다. `null`은 `None`으로, 나머지 스칼라 값은
/// 문자열로 변환됩니다. 빈 문자열은 그대로 유지됩니다.
pub fn deserialize_optional_string_cast<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    cast_to_string(&value).map_err(D::Error::custom)
}
