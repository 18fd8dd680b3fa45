use crate::types::{FeedEntry, FeedOutcome};
use tracing::{debug, warn};

/// Entries newer than a checkpoint together with the advanced checkpoint.
#[derive(Debug, Clone)]
pub struct Selection {
    pub entries: Vec<FeedEntry>,
    pub next_checkpoint: f64,
    /// Entries dropped because they carry no usable publication time.
    pub skipped: usize,
}

/// Selects entries published strictly after `checkpoint`, in feed order.
///
/// `next_checkpoint` ends up as the maximum of `checkpoint` and every
/// publication time in the feed. Entries without a valid publication time are
/// skipped: they are neither selected nor allowed to move the checkpoint.
pub fn select_new_entries(feed: &FeedOutcome, checkpoint: f64) -> Selection {
    let mut selection = Selection {
        entries: Vec::new(),
        next_checkpoint: checkpoint,
        skipped: 0,
    };

    if feed.is_empty() {
        debug!("Empty feed, checkpoint stays at {}", checkpoint);
        return selection;
    }

    for entry in feed.entries() {
        let Some(published) = entry.published_epoch() else {
            warn!(
                "Skipping entry without publication time: {}",
                entry.title.as_deref().unwrap_or("(untitled)")
            );
            selection.skipped += 1;
            continue;
        };

        if published > checkpoint {
            selection.entries.push(entry.clone());
        }
        if published > selection.next_checkpoint {
            selection.next_checkpoint = published;
        }
    }

    debug!(
        "Selected {} new entries, checkpoint {} -> {}",
        selection.entries.len(),
        checkpoint,
        selection.next_checkpoint
    );
    selection
}
