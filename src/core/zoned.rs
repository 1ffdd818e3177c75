use crate::domain::model::{Instant, ZoneLabel};
use crate::domain::ports::Clock;
use crate::utils::error::{CalcError, Result};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use chrono_tz::{Tz, TZ_VARIANTS};

const ISO_OFFSET_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// 沒有偏移量的 ISO 8601 日時，依序嘗試
const LOCAL_DATE_TIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// 把 IANA 識別子解析成時區。不認識的識別子不會退回 UTC
pub fn parse_time_zone(zone: &str) -> Result<Tz> {
    zone.parse::<Tz>().map_err(|_| CalcError::time_zone(zone))
}

/// 解析開始日時。
///
/// 帶偏移量的 RFC 3339 直接採用；沒有偏移量的本地日時用 `host_zone` 解讀。
/// DST 切換造成的重複時刻取較早的一個，不存在的時刻視為格式錯誤。
pub fn parse_start_time(text: &str, host_zone: &str) -> Result<Instant> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = LOCAL_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .ok_or_else(|| {
            CalcError::format(text, "expected an ISO 8601 date-time such as 2023-01-01T00:00:00+09:00")
        })?;

    let tz = parse_time_zone(host_zone)?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| CalcError::format(text, format!("local time does not exist in {}", tz.name())))
}

/// 轉成指定時區並輸出 `YYYY-MM-DDThh:mm:ss±hh:mm`，秒以下捨去。
/// 偏移量每次依 `instant` 重新計算。
pub fn format_zoned(instant: &Instant, zone: &str) -> Result<String> {
    let tz = parse_time_zone(zone)?;
    Ok(instant.with_timezone(&tz).format(ISO_OFFSET_FORMAT).to_string())
}

/// 只回傳 `±hh:mm` 部分
pub fn offset_of(zone: &str, instant: &Instant) -> Result<String> {
    let tz = parse_time_zone(zone)?;
    Ok(instant.with_timezone(&tz).format("%:z").to_string())
}

/// 支援的時區識別子一覽
pub fn available_time_zones() -> Vec<&'static str> {
    TZ_VARIANTS.iter().map(|tz| tz.name()).collect()
}

/// 為時區選單產生標籤。
///
/// 偏移量是 `now` 當下的值；實際輸入時間落在不同 DST 區間時標籤可能不符。
pub fn label_zones<'a, I>(zones: I, now: &Instant) -> Result<Vec<ZoneLabel>>
where
    I: IntoIterator<Item = &'a str>,
{
    zones
        .into_iter()
        .map(|zone| {
            let offset = offset_of(zone, now)?;
            Ok(ZoneLabel {
                name: zone.to_string(),
                label: format!("{} ({})", zone, offset),
                offset,
            })
        })
        .collect()
}

/// 「輸入目前時間」：現在時刻以 host 時區輸出
pub fn current_time_iso(clock: &dyn Clock, host_zone: &str) -> Result<String> {
    format_zoned(&clock.now(), host_zone)
}
