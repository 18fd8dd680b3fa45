use chrono::{DateTime, Datelike, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_FEED_URL: &str = "https://www.indiatoday.in/rss/home";
pub const DEFAULT_CHECKPOINT_FILE: &str = "lasttime.time";

/// Decomposed UTC publication time.
///
/// Serialized as a JSON array of nine integers:
/// `[year, month, day, hour, minute, second, weekday, yearday, isdst]`,
/// where `weekday` counts from Monday = 0, `yearday` starts at 1 and
/// `isdst` is always 0 for UTC values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "[i64; 9]", try_from = "[i64; 9]")]
pub struct TimeStruct {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub weekday: u32,
    pub yearday: u32,
    pub isdst: i32,
}

impl TimeStruct {
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
            day: dt.day(),
            hour: dt.hour(),
            minute: dt.minute(),
            second: dt.second(),
            weekday: dt.weekday().num_days_from_monday(),
            yearday: dt.ordinal(),
            isdst: 0,
        }
    }

    /// Epoch seconds of this time read as a UTC calendar time.
    /// `None` when the components do not form a valid date.
    pub fn epoch_seconds(&self) -> Option<f64> {
        let dt = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour, self.minute, self.second)?
            .and_utc();
        Some(dt.timestamp() as f64)
    }
}

impl From<TimeStruct> for [i64; 9] {
    fn from(t: TimeStruct) -> Self {
        [
            t.year as i64,
            t.month as i64,
            t.day as i64,
            t.hour as i64,
            t.minute as i64,
            t.second as i64,
            t.weekday as i64,
            t.yearday as i64,
            t.isdst as i64,
        ]
    }
}

impl TryFrom<[i64; 9]> for TimeStruct {
    type Error = String;

    fn try_from(parts: [i64; 9]) -> std::result::Result<Self, Self::Error> {
        let unsigned = |idx: usize| {
            u32::try_from(parts[idx])
                .map_err(|_| format!("time component {} out of range: {}", idx, parts[idx]))
        };
        let signed = |idx: usize| {
            i32::try_from(parts[idx])
                .map_err(|_| format!("time component {} out of range: {}", idx, parts[idx]))
        };

        Ok(Self {
            year: signed(0)?,
            month: unsigned(1)?,
            day: unsigned(2)?,
            hour: unsigned(3)?,
            minute: unsigned(4)?,
            second: unsigned(5)?,
            weekday: unsigned(6)?,
            yearday: unsigned(7)?,
            isdst: signed(8)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryLink {
    pub href: Option<String>,
}

/// One item of a fetched feed. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub links: Option<Vec<EntryLink>>,
    pub summary: Option<String>,
    /// RFC 2822 rendering of the parsed date in UTC, not the feed's raw text.
    pub published: Option<String>,
    pub published_parsed: Option<TimeStruct>,
}

impl FeedEntry {
    pub fn published_epoch(&self) -> Option<f64> {
        self.published_parsed.as_ref().and_then(TimeStruct::epoch_seconds)
    }
}

/// Result of a fetch attempt. Failures never escape the fetcher as errors.
#[derive(Debug, Clone)]
pub enum FeedOutcome {
    Fetched(Vec<FeedEntry>),
    Failed { reason: String },
}

impl FeedOutcome {
    pub fn entries(&self) -> &[FeedEntry] {
        match self {
            FeedOutcome::Fetched(entries) => entries,
            FeedOutcome::Failed { .. } => &[],
        }
    }

    /// True for a failed fetch and for a feed without entries.
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, FeedOutcome::Failed { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedLink {
    pub link: String,
}

/// Reduced, JSON-ready form of a [`FeedEntry`]. Absent fields are omitted
/// from the serialized object rather than written as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProjectedLink>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_parsed: Option<TimeStruct>,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub max_feed_size_mb: usize,
    pub follow_redirects: bool,
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "RSS-Ingester/1.0".to_string(),
            max_feed_size_mb: 10,
            follow_redirects: true,
            max_redirects: 5,
        }
    }
}

#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub feed_url: String,
    pub checkpoint_path: PathBuf,
    pub output_dir: PathBuf,
    pub fetch: FetchConfig,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            feed_url: DEFAULT_FEED_URL.to_string(),
            checkpoint_path: PathBuf::from(DEFAULT_CHECKPOINT_FILE),
            output_dir: PathBuf::from("."),
            fetch: FetchConfig::default(),
        }
    }
}

impl IngestConfig {
    /// Rejects feed URLs that are not absolute http(s) URLs.
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.feed_url)?;
        match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(IngestError::General(format!(
                "unsupported feed URL scheme: {}",
                scheme
            ))),
        }
    }
}

/// Summary of one completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub previous_checkpoint: f64,
    pub next_checkpoint: f64,
    pub fetched: usize,
    pub selected: usize,
    pub skipped: usize,
    pub fetch_failed: bool,
    pub output_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("Invalid checkpoint in {}: {content:?}", path.display())]
    InvalidCheckpoint { path: PathBuf, content: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Feed size exceeds limit: {size_mb}MB")]
    FeedTooLarge { size_mb: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, IngestError>;
