//! # 기간 문자열 파서
//!
//! `"1h"`, `"7d"`, `"30 minutes"` 같은 사람이 읽을 수 있는 기간 문자열을
//! `chrono::Duration`으로 변환합니다. 토큰 만료 정책을 환경 변수로 설정할 때 사용됩니다.
//!
//! ## 지원 형식
//!
//! | 입력 | 의미 |
//! |------|------|
//! | `"3600"` | 단위가 없으면 초 |
//! | `"250ms"` | 밀리초 |
//! | `"45s"`, `"45 sec"`, `"45 seconds"` | 초 |
//! | `"30m"`, `"30 min"`, `"30 minutes"` | 분 |
//! | `"1h"`, `"2 hrs"`, `"1 hour"` | 시간 |
//! | `"7d"`, `"7 days"` | 일 |
//! | `"2w"`, `"2 weeks"` | 주 |
//! | `"1y"`, `"1 year"` | 년 (365.25일) |
//!
//! 소수(`"1.5h"`)와 대소문자 혼용(`"1H"`)을 허용합니다.
//! 100년을 넘는 기간은 거부합니다.

use chrono::Duration;
use thiserror::Error;

const MS_PER_SECOND: f64 = 1_000.0;
const MS_PER_MINUTE: f64 = MS_PER_SECOND * 60.0;
const MS_PER_HOUR: f64 = MS_PER_MINUTE * 60.0;
const MS_PER_DAY: f64 = MS_PER_HOUR * 24.0;
const MS_PER_WEEK: f64 = MS_PER_DAY * 7.0;
const MS_PER_YEAR: f64 = MS_PER_DAY * 365.25;

/// 허용하는 최대 기간 (100년)
const MAX_DURATION_MS: f64 = MS_PER_YEAR * 100.0;

/// 기간 문자열 파싱 실패
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DurationParseError {
    #[error("duration string is empty")]
    Empty,

    #[error("invalid duration amount: {0}")]
    InvalidAmount(String),

    #[error("unknown duration unit: {0}")]
    UnknownUnit(String),

    #[error("duration too large: {0}")]
    TooLarge(String),
}

/// 기간 문자열을 `Duration`으로 변환합니다.
///
/// # Errors
///
/// * `DurationParseError::Empty` - 빈 문자열 또는 공백
/// * `DurationParseError::InvalidAmount` - 숫자 부분이 없거나 음수
/// * `DurationParseError::UnknownUnit` - 지원하지 않는 단위
/// * `DurationParseError::TooLarge` - 100년 초과
///
/// # Examples
///
/// ```rust
/// use chat_auth_service::utils::duration::parse_duration;
///
/// assert_eq!(parse_duration("1h").unwrap().num_seconds(), 3600);
/// assert_eq!(parse_duration("7d").unwrap().num_days(), 7);
/// assert_eq!(parse_duration("90").unwrap().num_seconds(), 90);
/// ```
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DurationParseError::Empty);
    }

    let split_at = trimmed
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(trimmed.len());
    let (amount_str, unit_str) = trimmed.split_at(split_at);

    let amount: f64 = amount_str
        .parse()
        .map_err(|_| DurationParseError::InvalidAmount(input.to_string()))?;
    if !amount.is_finite() {
        return Err(DurationParseError::InvalidAmount(input.to_string()));
    }

    let unit = unit_str.trim().to_ascii_lowercase();
    let ms_per_unit = match unit.as_str() {
        // 단위가 없으면 초 단위로 해석
        "" => MS_PER_SECOND,
        "ms" | "msec" | "msecs" | "millisecond" | "milliseconds" => 1.0,
        "s" | "sec" | "secs" | "second" | "seconds" => MS_PER_SECOND,
        "m" | "min" | "mins" | "minute" | "minutes" => MS_PER_MINUTE,
        "h" | "hr" | "hrs" | "hour" | "hours" => MS_PER_HOUR,
        "d" | "day" | "days" => MS_PER_DAY,
        "w" | "week" | "weeks" => MS_PER_WEEK,
        "y" | "yr" | "yrs" | "year" | "years" => MS_PER_YEAR,
        other => return Err(DurationParseError::UnknownUnit(other.to_string())),
    };

    let millis = (amount * ms_per_unit).round();
    if millis > MAX_DURATION_MS {
        return Err(DurationParseError::TooLarge(input.to_string()));
    }

    Duration::try_milliseconds(millis as i64)
        .ok_or_else(|| DurationParseError::TooLarge(input.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_short_units() {
        assert_eq!(parse_duration("45s").unwrap(), Duration::seconds(45));
        assert_eq!(parse_duration("30m").unwrap(), Duration::minutes(30));
        assert_eq!(parse_duration("1h").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("7d").unwrap(), Duration::days(7));
        assert_eq!(parse_duration("2w").unwrap(), Duration::weeks(2));
        assert_eq!(parse_duration("250ms").unwrap(), Duration::milliseconds(250));
    }

    #[test]
    fn test_parse_long_units_and_whitespace() {
        assert_eq!(parse_duration("2 hours").unwrap(), Duration::hours(2));
        assert_eq!(parse_duration(" 10 Minutes ").unwrap(), Duration::minutes(10));
        assert_eq!(parse_duration("1 DAY").unwrap(), Duration::days(1));
    }

    #[test]
    fn test_bare_number_is_seconds() {
        assert_eq!(parse_duration("3600").unwrap(), Duration::hours(1));
        assert_eq!(parse_duration("0").unwrap(), Duration::zero());
    }

    #[test]
    fn test_fractional_amounts() {
        assert_eq!(parse_duration("1.5h").unwrap(), Duration::minutes(90));
        assert_eq!(parse_duration("0.5s").unwrap(), Duration::milliseconds(500));
    }

    #[test]
    fn test_year_is_365_and_a_quarter_days() {
        assert_eq!(parse_duration("1y").unwrap(), Duration::hours(24 * 365 + 6));
    }

    #[test]
    fn test_oversized_amounts_are_rejected() {
        assert_eq!(parse_duration("100y").unwrap(), Duration::hours((24 * 365 + 6) * 100));
        assert!(matches!(parse_duration("101y"), Err(DurationParseError::TooLarge(_))));
        assert!(matches!(parse_duration("1000000y"), Err(DurationParseError::TooLarge(_))));
        assert!(matches!(
            parse_duration("99999999999999999999999"),
            Err(DurationParseError::TooLarge(_))
        ));
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(parse_duration(""), Err(DurationParseError::Empty));
        assert_eq!(parse_duration("   "), Err(DurationParseError::Empty));
        assert!(matches!(parse_duration("-1h"), Err(DurationParseError::InvalidAmount(_))));
        assert!(matches!(parse_duration("h"), Err(DurationParseError::InvalidAmount(_))));
        assert!(matches!(parse_duration("1.2.3s"), Err(DurationParseError::InvalidAmount(_))));
        assert_eq!(
            parse_duration("5 fortnights"),
            Err(DurationParseError::UnknownUnit("fortnights".to_string()))
        );
    }
}
