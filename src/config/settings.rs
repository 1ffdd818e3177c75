use crate::core::batch::BatchProcessor;
use crate::core::zoned::{current_time_iso, parse_time_zone};
use crate::domain::model::{BlankLinePolicy, OutputFormat};
use crate::domain::ports::{Clock, ConfigProvider};
use crate::utils::error::Result;
use crate::utils::validation::{validate_start_time, validate_time_zone, Validate};

pub const DEFAULT_HOST_TIMEZONE: &str = "UTC";

/// 合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub start_time: String,
    pub output_timezone: String,
    pub host_timezone: String,
    pub blank_lines: BlankLinePolicy,
    pub format: OutputFormat,
}

impl Settings {
    /// 依優先順序合併各層設定 (前面的優先)。
    ///
    /// host 時區: 各層 → `env_host_zone` → UTC。
    /// 輸出時區沒有指定時用 host 時區，開始日時沒有指定時用 `clock` 的目前時間。
    pub fn resolve(
        layers: &[&dyn ConfigProvider],
        clock: &dyn Clock,
        env_host_zone: Option<&str>,
    ) -> Result<Self> {
        let host_timezone = layers
            .iter()
            .find_map(|layer| layer.host_timezone())
            .or(env_host_zone)
            .unwrap_or(DEFAULT_HOST_TIMEZONE)
            .to_string();

        let output_timezone = layers
            .iter()
            .find_map(|layer| layer.output_timezone())
            .unwrap_or(host_timezone.as_str())
            .to_string();

        let start_time = match layers.iter().find_map(|layer| layer.start_time()) {
            Some(start) => start.to_string(),
            None => current_time_iso(clock, &host_timezone)?,
        };

        let blank_lines = layers
            .iter()
            .find_map(|layer| layer.blank_lines())
            .unwrap_or_default();

        let format = layers
            .iter()
            .find_map(|layer| layer.output_format())
            .unwrap_or_default();

        Ok(Self {
            start_time,
            output_timezone,
            host_timezone,
            blank_lines,
            format,
        })
    }

    pub fn processor(&self) -> BatchProcessor {
        BatchProcessor::new(self.host_timezone.clone(), self.blank_lines)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_time_zone("host_timezone", &self.host_timezone)?;
        validate_time_zone("output_timezone", &self.output_timezone)?;
        validate_start_time("start_time", &self.start_time, &self.host_timezone)
    }
}

/// 從 `TZ` 環境變數取得 host 時區。POSIX 形式 (例如 `JST-9`) 無法對應 IANA 識別子，會被忽略
pub fn host_zone_from_env() -> Option<String> {
    let raw = std::env::var("TZ").ok()?;
    let zone = raw.trim().trim_start_matches(':');

    if zone.is_empty() {
        return None;
    }

    match parse_time_zone(zone) {
        Ok(tz) => Some(tz.name().to_string()),
        Err(_) => {
            tracing::debug!("Ignoring TZ={} (not an IANA identifier)", raw);
            None
        }
    }
}
