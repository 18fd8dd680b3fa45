use crate::types::Result;
use std::fs;
use std::path::Path;
use tracing::info;

/// `newsfeed.<checkpoint truncated to an integer>.json`
pub fn output_file_name(checkpoint: f64) -> String {
    format!("newsfeed.{}.json", checkpoint.trunc() as i64)
}

/// Overwrites `path` with `content` as-is.
pub fn write_document(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)?;
    info!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
