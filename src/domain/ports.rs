use crate::domain::model::{BlankLinePolicy, Instant, OutputFormat};
use chrono::Utc;

/// 目前時間的來源。核心邏輯不直接讀系統時鐘
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Utc::now()
    }
}

/// 固定時間，測試和重現用
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub Instant);

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.0
    }
}

pub trait ConfigProvider: Send + Sync {
    fn start_time(&self) -> Option<&str>;
    fn output_timezone(&self) -> Option<&str>;
    fn host_timezone(&self) -> Option<&str>;
    fn blank_lines(&self) -> Option<BlankLinePolicy>;
    fn output_format(&self) -> Option<OutputFormat>;
}
