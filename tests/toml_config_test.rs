use anyhow::Result;
use chrono::{TimeZone, Utc};
use elapsed_clock::app::{render_results, InputSource};
use elapsed_clock::domain::ports::ConfigProvider;
use elapsed_clock::utils::validation::Validate;
use elapsed_clock::{BlankLinePolicy, FixedClock, OutputFormat, Settings, TomlConfig};
use tempfile::TempDir;

/// TOML 配置 + 輸入檔案的完整流程
#[tokio::test]
async fn test_toml_config_with_input_file() -> Result<()> {
    let temp_dir = TempDir::new()?;

    let config_path = temp_dir.path().join("elapsed.toml");
    tokio::fs::write(
        &config_path,
        r#"
[calculation]
start_time = "2023-01-01T00:00:00"
host_timezone = "Asia/Tokyo"
output_timezone = "Asia/Tokyo"
blank_lines = "preserve"

[output]
format = "text"
"#,
    )
    .await?;

    let input_path = temp_dir.path().join("lines.txt");
    tokio::fs::write(&input_path, "00:12:34\n\nnope\n01:23:45\n").await?;

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let clock = FixedClock(Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap());
    let settings = Settings::resolve(&[&config], &clock, None)?;
    settings.validate()?;

    let lines = InputSource::File(input_path).read_lines().await?;
    let results = settings.processor().process_tagged(
        &settings.start_time,
        &settings.output_timezone,
        &lines,
    )?;

    let text = render_results(&results, settings.format)?;
    assert_eq!(
        text,
        "2023-01-01T00:12:34+09:00\n\n\n2023-01-01T01:23:45+09:00"
    );
    Ok(())
}

#[tokio::test]
async fn test_env_substituted_start_time_and_json_output() -> Result<()> {
    std::env::set_var("ELAPSED_CLOCK_IT_START", "2023-06-30T23:50:00+09:00");

    let config = TomlConfig::from_toml_str(
        r#"
[calculation]
start_time = "${ELAPSED_CLOCK_IT_START}"
output_timezone = "Asia/Tokyo"
blank_lines = "skip"

[output]
format = "json"
"#,
    )?;
    std::env::remove_var("ELAPSED_CLOCK_IT_START");

    assert_eq!(config.blank_lines(), Some(BlankLinePolicy::Skip));

    let clock = FixedClock(Utc::now());
    let settings = Settings::resolve(&[&config], &clock, Some("UTC"))?;
    assert_eq!(settings.format, OutputFormat::Json);

    let lines = InputSource::Inline(vec!["00:20:00".to_string(), "".to_string()])
        .read_lines()
        .await?;
    let results = settings.processor().process_tagged(
        &settings.start_time,
        &settings.output_timezone,
        &lines,
    )?;

    let json: serde_json::Value = serde_json::from_str(&render_results(&results, settings.format)?)?;
    assert_eq!(json.as_array().map(Vec::len), Some(1));
    assert_eq!(json[0]["output"], "2023-07-01T00:10:00+09:00");
    Ok(())
}

#[test]
fn test_invalid_file_config_is_rejected() -> Result<()> {
    let config = TomlConfig::from_toml_str(
        r#"
[calculation]
output_timezone = "Asia/Tokio"
"#,
    )?;

    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains("calculation.output_timezone"));
    Ok(())
}

#[test]
fn test_missing_config_file() {
    let err = TomlConfig::from_file("/definitely/not/here/elapsed.toml").unwrap_err();
    assert!(matches!(err, elapsed_clock::CalcError::IoError(_)));
}
