use crate::domain::model::{BlankLinePolicy, OutputFormat};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::validation::{validate_start_time, validate_time_zone, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"));

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub calculation: CalculationConfig,
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalculationConfig {
    pub start_time: Option<String>,
    pub output_timezone: Option<String>,
    pub host_timezone: Option<String>,
    pub blank_lines: Option<BlankLinePolicy>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${START_TIME})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_PATTERN
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        let calc = &self.calculation;

        if let Some(zone) = &calc.output_timezone {
            validate_time_zone("calculation.output_timezone", zone)?;
        }

        if let Some(zone) = &calc.host_timezone {
            validate_time_zone("calculation.host_timezone", zone)?;
        }

        if let Some(start) = &calc.start_time {
            let host = calc.host_timezone.as_deref().unwrap_or("UTC");
            validate_start_time("calculation.start_time", start, host)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn start_time(&self) -> Option<&str> {
        self.calculation.start_time.as_deref()
    }

    fn output_timezone(&self) -> Option<&str> {
        self.calculation.output_timezone.as_deref()
    }

    fn host_timezone(&self) -> Option<&str> {
        self.calculation.host_timezone.as_deref()
    }

    fn blank_lines(&self) -> Option<BlankLinePolicy> {
        self.calculation.blank_lines
    }

    fn output_format(&self) -> Option<OutputFormat> {
        self.output.as_ref().and_then(|o| o.format)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
