use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 絕對時間點，內部一律以 UTC 保存
pub type Instant = DateTime<Utc>;

/// `HH:mm:ss` 形式的經過時間。小時不設上限（兩位數內），分秒只檢查格式不檢查範圍
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElapsedDuration {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl fmt::Display for ElapsedDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// 空白行的處理方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum BlankLinePolicy {
    /// 保留位置，輸出空字串
    #[default]
    Preserve,
    /// 處理前先過濾掉
    Skip,
}

/// 單行的處理結果。`output` 失敗時為空字串，和純文字輸出保持一致
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineResult {
    pub input: String,
    pub output: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LineResult {
    pub fn success(input: impl Into<String>, output: String) -> Self {
        Self {
            input: input.into(),
            output,
            error: None,
        }
    }

    pub fn failure(input: impl Into<String>, error: String) -> Self {
        Self {
            input: input.into(),
            output: String::new(),
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// 時區選單用的標籤，例如 `Asia/Tokyo (+09:00)`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ZoneLabel {
    pub name: String,
    pub offset: String,
    pub label: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// 每行一個結果，失敗的行為空行
    #[default]
    Text,
    /// `LineResult` 的 JSON 陣列
    Json,
}
