use crate::core::zoned::{available_time_zones, label_zones};
use crate::domain::model::{Instant, LineResult, OutputFormat};
use crate::utils::error::Result;

/// 依輸出格式把結果轉成文字。純文字模式中失敗的行是空行，位置不變
pub fn render_results(results: &[LineResult], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(results
            .iter()
            .map(|r| r.output.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(results)?),
    }
}

/// `--list-zones` 的輸出，每行一個 `Zone/Name (+hh:mm)`
pub fn render_zone_list(now: &Instant) -> Result<String> {
    let labels = label_zones(available_time_zones(), now)?;
    Ok(labels
        .into_iter()
        .map(|l| l.label)
        .collect::<Vec<_>>()
        .join("\n"))
}
