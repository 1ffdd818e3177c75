use clap::Parser;
use elapsed_clock::app::{render_results, render_zone_list, InputSource};
use elapsed_clock::config::settings::host_zone_from_env;
use elapsed_clock::core::zoned::current_time_iso;
use elapsed_clock::domain::ports::ConfigProvider;
use elapsed_clock::utils::error::{CalcError, ErrorSeverity};
use elapsed_clock::utils::{logger, validation::Validate};
use elapsed_clock::{CliConfig, Clock, Settings, SystemClock, TomlConfig};

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = run(config).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ elapsed-clock failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        // 輸出用戶友好的錯誤信息
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }
}

async fn run(config: CliConfig) -> Result<(), CalcError> {
    let clock = SystemClock;

    // 載入 TOML 配置
    let file_config = match &config.config {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let file_config = TomlConfig::from_file(path)?;
            file_config.validate()?;
            Some(file_config)
        }
        None => None,
    };

    // 命令列設定優先於 TOML
    let mut layers: Vec<&dyn ConfigProvider> = vec![&config];
    if let Some(file_config) = &file_config {
        layers.push(file_config);
    }

    let env_host_zone = host_zone_from_env();
    let settings = Settings::resolve(&layers, &clock, env_host_zone.as_deref())?;
    settings.validate()?;
    tracing::debug!("Resolved settings: {:?}", settings);

    if config.list_zones {
        println!("{}", render_zone_list(&clock.now())?);
        return Ok(());
    }

    if config.print_now {
        println!("{}", current_time_iso(&clock, &settings.host_timezone)?);
        return Ok(());
    }

    let source = InputSource::select(&config.elapsed, config.input.as_deref());
    let lines = source.read_lines().await?;

    tracing::info!(
        "🕒 Adding {} elapsed times to {} ({})",
        lines.len(),
        settings.start_time,
        settings.output_timezone
    );

    let results = settings.processor().process_tagged(
        &settings.start_time,
        &settings.output_timezone,
        &lines,
    )?;

    let failed = results.iter().filter(|r| !r.is_ok()).count();
    if failed > 0 {
        tracing::warn!("⚠️ {} of {} lines could not be parsed", failed, results.len());
    }

    if !results.is_empty() {
        println!("{}", render_results(&results, settings.format)?);
    }

    Ok(())
}
