pub mod batch;
pub mod elapsed;
pub mod zoned;

pub use crate::domain::model::{
    BlankLinePolicy, ElapsedDuration, Instant, LineResult, OutputFormat, ZoneLabel,
};
pub use crate::domain::ports::{Clock, ConfigProvider, FixedClock, SystemClock};
pub use crate::utils::error::Result;
