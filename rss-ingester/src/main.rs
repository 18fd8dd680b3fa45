use clap::Parser;
use rss_ingester::{IngestConfig, Ingester, RunStatus};
use rss_ingester::{DEFAULT_CHECKPOINT_FILE, DEFAULT_FEED_URL};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "rss-ingester", about = "Snapshot new feed entries since the last run")]
struct Args {
    /// Feed to fetch
    #[arg(long, default_value = DEFAULT_FEED_URL)]
    feed_url: String,

    /// File holding the last processed publication time
    #[arg(long, default_value = DEFAULT_CHECKPOINT_FILE)]
    checkpoint_file: PathBuf,

    /// Directory receiving newsfeed.<time>.json
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = IngestConfig {
        feed_url: args.feed_url,
        checkpoint_path: args.checkpoint_file,
        output_dir: args.output_dir,
        ..IngestConfig::default()
    };

    let ingester = Ingester::new(config)?;

    match ingester.run().await? {
        RunStatus::Completed(report) => {
            info!(
                "Wrote {} of {} entries to {} (skipped {}, fetch failed: {})",
                report.selected,
                report.fetched,
                report.output_path.display(),
                report.skipped,
                report.fetch_failed
            );
            info!(
                "Checkpoint {} -> {}",
                report.previous_checkpoint, report.next_checkpoint
            );
        }
        RunStatus::Aborted { diagnostic } => println!("{}", diagnostic),
    }
    Ok(())
}
