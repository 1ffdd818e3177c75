use crate::domain::model::{ElapsedDuration, Instant};
use crate::utils::error::{CalcError, Result};
use chrono::TimeDelta;
use regex::Regex;
use std::sync::LazyLock;

// `\d` 在 regex crate 會匹配 Unicode 數字，這裡只接受 ASCII
static ELAPSED_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").expect("elapsed time pattern is valid")
});

impl ElapsedDuration {
    /// 解析 `HH:mm:ss`。前後空白不會被容許，呼叫端需要自行 trim
    pub fn parse(text: &str) -> Result<Self> {
        let caps = ELAPSED_PATTERN
            .captures(text)
            .ok_or_else(|| CalcError::format(text, "expected elapsed time as HH:mm:ss"))?;

        let field = |index: usize| -> Result<u32> {
            caps[index]
                .parse::<u32>()
                .map_err(|e| CalcError::format(text, e.to_string()))
        };

        Ok(Self {
            hours: field(1)?,
            minutes: field(2)?,
            seconds: field(3)?,
        })
    }

    pub fn as_time_delta(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.hours))
            + TimeDelta::minutes(i64::from(self.minutes))
            + TimeDelta::seconds(i64::from(self.seconds))
    }
}

/// 把經過時間加到基準時間上。
///
/// 加法在 UTC 時間軸上進行，因此跨日、跨月以及 DST 切換都會得到正確的絕對時間；
/// 顯示用的偏移量由 [`crate::core::zoned::format_zoned`] 依結果時間重新計算。
pub fn add_elapsed(base: Instant, text: &str) -> Result<Instant> {
    let elapsed = ElapsedDuration::parse(text)?;

    base.checked_add_signed(elapsed.as_time_delta())
        .ok_or_else(|| CalcError::format(text, "result is outside the supported date range"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn instant(s: &str) -> Instant {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_parse_valid_elapsed() {
        let elapsed = ElapsedDuration::parse("01:23:45").unwrap();
        assert_eq!(elapsed.hours, 1);
        assert_eq!(elapsed.minutes, 23);
        assert_eq!(elapsed.seconds, 45);
        assert_eq!(elapsed.to_string(), "01:23:45");
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for text in ["1:2:3", "00:00", "abc", "", "00:00:00:00", "-1:00:00", "100:00:00"] {
            let err = ElapsedDuration::parse(text).unwrap_err();
            assert!(err.is_format_error(), "{text} should be a format error");
        }
    }

    #[test]
    fn test_parse_rejects_surrounding_whitespace() {
        assert!(ElapsedDuration::parse(" 00:01:00").is_err());
        assert!(ElapsedDuration::parse("00:01:00\n").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_digits() {
        // 全形數字
        assert!(ElapsedDuration::parse("０１:００:００").is_err());
    }

    #[test]
    fn test_minutes_and_seconds_are_not_range_checked() {
        let elapsed = ElapsedDuration::parse("00:99:75").unwrap();
        assert_eq!(elapsed.as_time_delta(), TimeDelta::seconds(99 * 60 + 75));
    }

    #[test]
    fn test_zero_elapsed_is_identity() {
        let base = instant("2023-01-01T00:00:00+09:00");
        assert_eq!(add_elapsed(base, "00:00:00").unwrap(), base);
    }

    #[test]
    fn test_add_elapsed_never_moves_backwards() {
        let base = Utc.with_ymd_and_hms(2024, 2, 28, 23, 59, 59).unwrap();
        for text in ["00:00:00", "00:00:01", "23:59:59", "48:00:00"] {
            assert!(add_elapsed(base, text).unwrap() >= base);
        }
    }

    #[test]
    fn test_large_hours_are_added_literally() {
        let base = instant("2023-01-01T00:00:00Z");
        let result = add_elapsed(base, "99:00:00").unwrap();
        assert_eq!(result, instant("2023-01-05T03:00:00Z"));
    }

    #[test]
    fn test_add_elapsed_crosses_month_and_leap_day() {
        let base = instant("2024-02-28T23:30:00Z");
        assert_eq!(
            add_elapsed(base, "24:45:00").unwrap(),
            instant("2024-03-01T00:15:00Z")
        );
    }

    #[test]
    fn test_add_elapsed_across_dst_start() {
        // 2023-03-12 02:00 America/New_York 進入夏令時間
        let base = instant("2023-03-12T01:30:00-05:00");
        let result = add_elapsed(base, "01:00:00").unwrap();
        assert_eq!(result, instant("2023-03-12T03:30:00-04:00"));
    }
}
