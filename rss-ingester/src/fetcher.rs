use crate::parser::FeedParser;
use crate::traits::FeedSource;
use crate::types::{FeedOutcome, FetchConfig, IngestError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

const TIMEOUT_SECS: u64 = 30;

pub struct Fetcher {
    client: Client,
    config: FetchConfig,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let redirect = if config.follow_redirects {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(TIMEOUT_SECS))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(redirect)
            .build()?;

        Ok(Self { client, config })
    }

    async fn fetch_body(&self, url: &str) -> Result<Vec<u8>> {
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(IngestError::General(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let limit = self.config.max_feed_size_mb * 1024 * 1024;
        if let Some(content_length) = response.content_length() {
            if content_length as usize > limit {
                return Err(IngestError::FeedTooLarge {
                    size_mb: content_length as usize / (1024 * 1024),
                });
            }
        }

        let body = response.bytes().await?;
        if body.len() > limit {
            return Err(IngestError::FeedTooLarge {
                size_mb: body.len() / (1024 * 1024),
            });
        }

        Ok(body.to_vec())
    }
}

#[async_trait]
impl FeedSource for Fetcher {
    async fn fetch(&self, url: &str) -> FeedOutcome {
        let start_time = Instant::now();
        debug!("Fetching feed: {}", url);

        let entries = match self.fetch_body(url).await {
            Ok(body) => {
                info!(
                    "Successfully fetched feed: {} ({} bytes in {}ms)",
                    url,
                    body.len(),
                    start_time.elapsed().as_millis()
                );
                FeedParser::parse(&body)
            }
            Err(e) => Err(e),
        };

        match entries {
            Ok(entries) => FeedOutcome::Fetched(entries),
            Err(e) => {
                warn!("Failed to fetch feed {}: {}", url, e);
                FeedOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
