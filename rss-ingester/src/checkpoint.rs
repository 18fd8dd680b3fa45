use crate::types::{IngestError, Result};
use chrono::Utc;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// File-backed watermark holding the publication time (epoch seconds) of the
/// newest entry processed so far.
pub struct CheckpointStore {
    path: PathBuf,
}

impl CheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the checkpoint, creating the file with the current time on first use.
    ///
    /// Content that is not a finite number yields
    /// [`IngestError::InvalidCheckpoint`]; the file is left untouched.
    pub fn read(&self) -> Result<f64> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                let now = current_epoch_seconds();
                info!(
                    "No checkpoint at {}, starting from current time {}",
                    self.path.display(),
                    now
                );
                self.write(now)?;
                return Ok(now);
            }
            Err(e) => return Err(e.into()),
        };

        match content.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => {
                debug!("Read checkpoint {} from {}", value, self.path.display());
                Ok(value)
            }
            _ => {
                warn!("Invalid time in {}", self.path.display());
                Err(IngestError::InvalidCheckpoint {
                    path: self.path.clone(),
                    content,
                })
            }
        }
    }

    /// Overwrites the checkpoint file with `value`.
    pub fn write(&self, value: f64) -> Result<()> {
        fs::write(&self.path, format_checkpoint(value))?;
        debug!("Wrote checkpoint {} to {}", value, self.path.display());
        Ok(())
    }
}

/// Textual form stored on disk. Integral values keep a trailing `.0`.
pub fn format_checkpoint(value: f64) -> String {
    format!("{:?}", value)
}

pub fn current_epoch_seconds() -> f64 {
    let now = Utc::now();
    now.timestamp() as f64 + f64::from(now.timestamp_subsec_micros()) / 1_000_000.0
}
