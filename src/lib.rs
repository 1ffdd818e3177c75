pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{Settings, TomlConfig};
pub use core::batch::{process_batch, split_lines, BatchProcessor};
pub use core::elapsed::add_elapsed;
pub use core::zoned::{
    available_time_zones, current_time_iso, format_zoned, label_zones, offset_of,
    parse_start_time, parse_time_zone,
};
pub use domain::model::{BlankLinePolicy, ElapsedDuration, Instant, LineResult, OutputFormat};
pub use domain::ports::{Clock, FixedClock, SystemClock};
pub use utils::error::{CalcError, Result};
