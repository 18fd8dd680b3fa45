#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rss_ingester::{EntryLink, FeedEntry, FeedOutcome, FeedSource, TimeStruct};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .try_init()
            .ok();
    });
}

pub fn time_struct(epoch: i64) -> TimeStruct {
    let dt = DateTime::<Utc>::from_timestamp(epoch, 0).unwrap();
    TimeStruct::from_datetime(&dt)
}

/// Entry published at `epoch` with a title and a single link.
pub fn entry_at(title: &str, epoch: i64) -> FeedEntry {
    let dt = DateTime::<Utc>::from_timestamp(epoch, 0).unwrap();
    FeedEntry {
        title: Some(title.to_string()),
        links: Some(vec![EntryLink {
            href: Some(format!("https://example.com/{}", title)),
        }]),
        summary: Some(format!("Summary of {}", title)),
        published: Some(dt.to_rfc2822()),
        published_parsed: Some(TimeStruct::from_datetime(&dt)),
    }
}

/// Feed source returning a fixed outcome and counting calls.
pub struct StubSource {
    outcome: FeedOutcome,
    pub calls: Arc<AtomicUsize>,
}

impl StubSource {
    pub fn new(outcome: FeedOutcome) -> Self {
        Self {
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }
}

#[async_trait]
impl FeedSource for StubSource {
    async fn fetch(&self, _url: &str) -> FeedOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }
}
