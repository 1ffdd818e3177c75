use crate::core::batch::split_lines;
use crate::utils::error::Result;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

/// 經過時間的來源
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Inline(Vec<String>),
    File(PathBuf),
    Stdin,
}

impl InputSource {
    /// 命令列參數優先，其次是檔案，都沒有時讀 stdin
    pub fn select(inline: &[String], file: Option<&str>) -> Self {
        if !inline.is_empty() {
            InputSource::Inline(inline.to_vec())
        } else if let Some(path) = file {
            InputSource::File(PathBuf::from(path))
        } else {
            InputSource::Stdin
        }
    }

    pub async fn read_lines(&self) -> Result<Vec<String>> {
        let text = match self {
            InputSource::Inline(lines) => return Ok(lines.clone()),
            InputSource::File(path) => {
                tracing::debug!("Reading elapsed times from {}", path.display());
                tokio::fs::read_to_string(path).await?
            }
            InputSource::Stdin => {
                tracing::debug!("Reading elapsed times from stdin");
                let mut buf = String::new();
                tokio::io::stdin().read_to_string(&mut buf).await?;
                buf
            }
        };

        Ok(split_lines(&text).into_iter().map(str::to_string).collect())
    }
}
