use crate::types::FeedOutcome;
use async_trait::async_trait;

/// Trait for retrieving the current entries of a feed.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed at `url`.
    ///
    /// Implementations must not fail: any network or parse problem is
    /// reported as [`FeedOutcome::Failed`].
    async fn fetch(&self, url: &str) -> FeedOutcome;
}
