//! 날짜 계산 유틸리티
//!
//! 구독 만료일 계산과 응답용 타임스탬프 포맷팅을 담당합니다.
//! 현재 시각은 항상 인자로 받으므로 테스트에서 시점을 고정할 수 있습니다.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// 시각 정보 없이 날짜만 있는 입력 형식
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// 구독 상태 계산 결과
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStatus {
    /// 구독 만료 시각 (구독 시작일 + 1년)
    pub expiration: DateTime<Utc>,
    /// 현재 시각이 만료 시각 이후인지 여부
    pub expired: bool,
    /// 만료까지 남은 일수 (만료 후에는 음수)
    pub days_left: i64,
}

/// 문자열 날짜를 UTC 시각으로 해석합니다.
///
/// 지원 형식:
/// - RFC 3339 (`2024-01-15T09:30:00Z`, `2024-01-15T09:30:00+09:00`)
/// - 시간대 없는 일시 (`2024-01-15T09:30:00`, UTC로 간주)
/// - 날짜만 있는 형식 (`2024-01-15`, `2024/01/15`, `01/15/2024`, UTC 자정)
///
/// 해석할 수 없으면 `None`을 반환합니다.
pub fn parse_date(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(parsed) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(Utc.from_utc_datetime(&parsed));
    }

    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(value, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|midnight| Utc.from_utc_datetime(&midnight))
    })
}

/// 같은 월/일의 다음 해 시각을 반환합니다.
///
/// 다음 해에 같은 날짜가 없으면(2월 29일) 3월 1일로 넘어갑니다.
pub fn add_one_year(date: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let year = date.year() + 1;

    date.with_year(year).or_else(|| {
        NaiveDate::from_ymd_opt(year, 3, 1)
            .map(|march_first| Utc.from_utc_datetime(&march_first.and_time(date.time())))
    })
}

/// 구독 시작일과 현재 시각으로 구독 상태를 계산합니다.
///
/// # 인자
///
/// * `subscription_date` - 구독 시작일 문자열
/// * `now` - 기준 시각
///
/// # 반환값
///
/// * `Some(SubscriptionStatus)` - 계산 결과
/// * `None` - 구독 시작일을 해석할 수 없는 경우
///
/// # 예제
///
/// ```rust,ignore
/// let now = parse_date("2024-01-20").unwrap();
/// let status = subscription_status("2023-01-15", now).unwrap();
///
/// assert!(status.expired);
/// assert_eq!(status.days_left, -5);
/// ```
pub fn subscription_status(subscription_date: &str, now: DateTime<Utc>) -> Option<SubscriptionStatus> {
    let expiration = add_one_year(parse_date(subscription_date)?)?;
    let remaining = expiration.signed_duration_since(now).num_milliseconds();

    Some(SubscriptionStatus {
        expiration,
        expired: now >= expiration,
        days_left: remaining.div_euclid(MILLIS_PER_DAY),
    })
}

/// 밀리초 타임스탬프 형식 (`2024-01-15T00:00:00.000Z`)
pub fn format_datetime(value: DateTime<Utc>) -> String {
    value.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// 유닉스 밀리초를 응답용 문자열로 변환합니다.
pub fn format_timestamp_millis(millis: i64) -> Option<String> {
    DateTime::from_timestamp_millis(millis).map(format_datetime)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(value: &str) -> DateTime<Utc> {
        parse_date(value).unwrap()
    }

    #[test]
    fn test_parse_date_formats() {
        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();

        assert_eq!(parse_date("2024-01-15"), Some(midnight));
        assert_eq!(parse_date("2024/01/15"), Some(midnight));
        assert_eq!(parse_date("01/15/2024"), Some(midnight));
        assert_eq!(parse_date(" 2024-01-15T00:00:00Z "), Some(midnight));
        assert_eq!(parse_date("2024-01-15T09:00:00+09:00"), Some(midnight));
        assert_eq!(parse_date("2024-01-15T00:00:00.000"), Some(midnight));
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_add_one_year() {
        assert_eq!(add_one_year(at("2023-01-15")), Some(at("2024-01-15")));
        assert_eq!(
            add_one_year(at("2023-06-30T13:45:00Z")),
            Some(at("2024-06-30T13:45:00Z"))
        );
    }

    #[test]
    fn test_add_one_year_from_leap_day() {
        assert_eq!(add_one_year(at("2024-02-29")), Some(at("2025-03-01")));
        assert_eq!(
            add_one_year(at("2024-02-29T08:00:00Z")),
            Some(at("2025-03-01T08:00:00Z"))
        );
    }

    #[test]
    fn test_subscription_expired() {
        let status = subscription_status("2023-01-15", at("2024-01-20")).unwrap();

        assert_eq!(status.expiration, at("2024-01-15"));
        assert!(status.expired);
        assert_eq!(status.days_left, -5);
    }

    #[test]
    fn test_subscription_active() {
        let status = subscription_status("2024-01-15", at("2024-01-05")).unwrap();

        assert!(!status.expired);
        assert_eq!(status.days_left, 376);
    }

    #[test]
    fn test_days_left_rounds_down() {
        // 만료 12시간 후는 -1일
        let status = subscription_status("2023-01-15", at("2024-01-15T12:00:00Z")).unwrap();
        assert!(status.expired);
        assert_eq!(status.days_left, -1);

        // 만료 12시간 전은 0일
        let status = subscription_status("2023-01-15", at("2024-01-14T12:00:00Z")).unwrap();
        assert!(!status.expired);
        assert_eq!(status.days_left, 0);
    }

    #[test]
    fn test_expired_at_exact_expiration() {
        let status = subscription_status("2023-01-15", at("2024-01-15")).unwrap();

        assert!(status.expired);
        assert_eq!(status.days_left, 0);
    }

    #[test]
    fn test_unparseable_subscription_date() {
        assert!(subscription_status("someday", at("2024-01-15")).is_none());
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_datetime(at("2024-01-15")), "2024-01-15T00:00:00.000Z");
        assert_eq!(
            format_timestamp_millis(1_705_276_800_123),
            Some("2024-01-15T00:00:00.123Z".to_string())
        );
    }
}
