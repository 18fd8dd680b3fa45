use crate::checkpoint::CheckpointStore;
use crate::fetcher::Fetcher;
use crate::filter::select_new_entries;
use crate::output::{output_file_name, write_document};
use crate::projector::{project_entries, to_json_document};
use crate::traits::FeedSource;
use crate::types::{IngestConfig, IngestError, Result, RunReport};
use tracing::{error, info};

/// Printed to stdout when the checkpoint file holds no usable time.
pub const INVALID_CHECKPOINT_DIAGNOSTIC: &str = "Make sure time file has correct epoch time.";

#[derive(Debug)]
pub enum RunStatus {
    Completed(RunReport),
    /// Nothing was fetched or written; `diagnostic` is meant for the operator.
    Aborted { diagnostic: &'static str },
}

/// One-shot pipeline: checkpoint read, fetch, filter, project, write output,
/// checkpoint write-back.
pub struct Ingester {
    config: IngestConfig,
    source: Box<dyn FeedSource>,
    checkpoint: CheckpointStore,
}

impl Ingester {
    pub fn new(config: IngestConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = Fetcher::new(config.fetch.clone())?;
        Ok(Self::with_source(config, Box::new(fetcher)))
    }

    pub fn with_source(config: IngestConfig, source: Box<dyn FeedSource>) -> Self {
        let checkpoint = CheckpointStore::new(config.checkpoint_path.clone());
        Self {
            config,
            source,
            checkpoint,
        }
    }

    /// Runs the pipeline once.
    ///
    /// An unreadable checkpoint aborts before anything is fetched or written.
    /// A failed fetch still produces an empty document and rewrites the
    /// unchanged checkpoint.
    pub async fn run_once(&self) -> Result<RunReport> {
        let previous_checkpoint = self.checkpoint.read()?;
        info!(
            "Fetching {} for entries newer than {}",
            self.config.feed_url, previous_checkpoint
        );

        let feed = self.source.fetch(&self.config.feed_url).await;
        let selection = select_new_entries(&feed, previous_checkpoint);

        let records = project_entries(&selection.entries);
        let document = to_json_document(&records)?;

        let output_path = self
            .config
            .output_dir
            .join(output_file_name(previous_checkpoint));
        write_document(&output_path, &document)?;
        self.checkpoint.write(selection.next_checkpoint)?;

        Ok(RunReport {
            previous_checkpoint,
            next_checkpoint: selection.next_checkpoint,
            fetched: feed.entries().len(),
            selected: selection.entries.len(),
            skipped: selection.skipped,
            fetch_failed: feed.is_failed(),
            output_path,
        })
    }

    /// [`Ingester::run_once`] with an unusable checkpoint turned into
    /// [`RunStatus::Aborted`] instead of an error.
    pub async fn run(&self) -> Result<RunStatus> {
        match self.run_once().await {
            Ok(report) => Ok(RunStatus::Completed(report)),
            Err(IngestError::InvalidCheckpoint { path, .. }) => {
                error!("Unusable checkpoint file {}", path.display());
                Ok(RunStatus::Aborted {
                    diagnostic: INVALID_CHECKPOINT_DIAGNOSTIC,
                })
            }
            Err(e) => Err(e),
        }
    }
}
