use crate::core::elapsed::add_elapsed;
use crate::core::zoned::{format_zoned, parse_start_time};
use crate::domain::model::{BlankLinePolicy, Instant, LineResult};
use crate::utils::error::Result;

/// 多行經過時間的批次處理。
///
/// 開始日時只解析一次，解析失敗時整個批次失敗；各行的失敗互不影響。
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    host_timezone: String,
    blank_lines: BlankLinePolicy,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new("UTC", BlankLinePolicy::Preserve)
    }
}

impl BatchProcessor {
    pub fn new(host_timezone: impl Into<String>, blank_lines: BlankLinePolicy) -> Self {
        Self {
            host_timezone: host_timezone.into(),
            blank_lines,
        }
    }

    pub fn host_timezone(&self) -> &str {
        &self.host_timezone
    }

    pub fn blank_lines(&self) -> BlankLinePolicy {
        self.blank_lines
    }

    /// 每行輸出一個結果，失敗的行輸出空字串
    pub fn process<S: AsRef<str>>(
        &self,
        start_time: &str,
        output_timezone: &str,
        elapsed_lines: &[S],
    ) -> Result<Vec<String>> {
        Ok(self
            .process_tagged(start_time, output_timezone, elapsed_lines)?
            .into_iter()
            .map(|result| result.output)
            .collect())
    }

    /// 和 [`BatchProcessor::process`] 相同，但保留每行的錯誤原因
    pub fn process_tagged<S: AsRef<str>>(
        &self,
        start_time: &str,
        output_timezone: &str,
        elapsed_lines: &[S],
    ) -> Result<Vec<LineResult>> {
        let base = parse_start_time(start_time.trim(), &self.host_timezone)?;

        let results: Vec<LineResult> = elapsed_lines
            .iter()
            .map(S::as_ref)
            .filter(|line| match self.blank_lines {
                BlankLinePolicy::Preserve => true,
                BlankLinePolicy::Skip => !line.trim().is_empty(),
            })
            .enumerate()
            .map(|(index, line)| process_line(index, base, output_timezone, line))
            .collect();

        let failed = results.iter().filter(|r| !r.is_ok()).count();
        if failed > 0 && failed == results.len() {
            tracing::warn!("⚠️ All {} elapsed time lines failed", failed);
        } else {
            tracing::debug!(
                "Processed {} elapsed time lines ({} failed)",
                results.len(),
                failed
            );
        }

        Ok(results)
    }
}

fn process_line(index: usize, base: Instant, output_timezone: &str, line: &str) -> LineResult {
    let trimmed = line.trim();

    match add_elapsed(base, trimmed).and_then(|instant| format_zoned(&instant, output_timezone)) {
        Ok(output) => LineResult::success(line, output),
        Err(e) => {
            tracing::debug!("Line {} skipped: {}", index + 1, e);
            LineResult::failure(line, e.to_string())
        }
    }
}

/// 預設設定（host 時區 UTC、保留空白行）的批次處理
pub fn process_batch<S: AsRef<str>>(
    start_time: &str,
    output_timezone: &str,
    elapsed_lines: &[S],
) -> Result<Vec<String>> {
    BatchProcessor::default().process(start_time, output_timezone, elapsed_lines)
}

/// 把多行文字拆成行，接受 `\n` 和 `\r\n`。結尾的換行不會產生額外的空行
pub fn split_lines(text: &str) -> Vec<&str> {
    text.lines().collect()
}
