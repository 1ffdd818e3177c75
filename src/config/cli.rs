use crate::domain::model::{BlankLinePolicy, OutputFormat};
use crate::domain::ports::ConfigProvider;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "elapsed-clock")]
#[command(about = "Add HH:mm:ss elapsed times to a start time and print the results in an IANA time zone")]
pub struct CliConfig {
    /// Elapsed times (HH:mm:ss). Read from --input or stdin when omitted
    pub elapsed: Vec<String>,

    /// Start time, ISO 8601 / RFC 3339 (defaults to now in the host time zone)
    #[arg(short, long)]
    pub start: Option<String>,

    /// Output IANA time zone (defaults to the host time zone)
    #[arg(short = 'z', long)]
    pub timezone: Option<String>,

    /// Host IANA time zone, used for start times without an offset (defaults to $TZ, then UTC)
    #[arg(long)]
    pub host_timezone: Option<String>,

    /// File with one elapsed time per line
    #[arg(short, long)]
    pub input: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Drop blank lines instead of printing an empty result for them")]
    pub skip_blank_lines: bool,

    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "List supported time zones with their current UTC offset")]
    pub list_zones: bool,

    #[arg(long, help = "Print the current time in the host time zone")]
    pub print_now: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Write logs as JSON")]
    pub log_json: bool,
}

impl ConfigProvider for CliConfig {
    fn start_time(&self) -> Option<&str> {
        self.start.as_deref()
    }

    fn output_timezone(&self) -> Option<&str> {
        self.timezone.as_deref()
    }

    fn host_timezone(&self) -> Option<&str> {
        self.host_timezone.as_deref()
    }

    fn blank_lines(&self) -> Option<BlankLinePolicy> {
        // 旗標沒給時交給 TOML 決定
        self.skip_blank_lines.then_some(BlankLinePolicy::Skip)
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.format
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_arguments() {
        let config = CliConfig::parse_from([
            "elapsed-clock",
            "--start",
            "2023-01-01T00:00:00+09:00",
            "-z",
            "Asia/Tokyo",
            "--format",
            "json",
            "00:12:34",
            "01:23:45",
        ]);

        assert_eq!(config.start_time(), Some("2023-01-01T00:00:00+09:00"));
        assert_eq!(config.output_timezone(), Some("Asia/Tokyo"));
        assert_eq!(config.output_format(), Some(OutputFormat::Json));
        assert_eq!(config.elapsed, vec!["00:12:34", "01:23:45"]);
        assert_eq!(config.blank_lines(), None);
    }

    #[test]
    fn test_skip_blank_lines_flag() {
        let config = CliConfig::parse_from(["elapsed-clock", "--skip-blank-lines"]);
        assert_eq!(config.blank_lines(), Some(BlankLinePolicy::Skip));
        assert!(config.elapsed.is_empty());
    }
}
