use crate::types::{EntryLink, FeedEntry, IngestError, Result, TimeStruct};
use feed_rs::parser;
use tracing::{debug, info};
use url::Url;

pub struct FeedParser;

impl FeedParser {
    /// Parses RSS/Atom bytes into entries, keeping the feed's own ordering.
    pub fn parse(content: &[u8]) -> Result<Vec<FeedEntry>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content)
            .map_err(|e| IngestError::Parse(format!("Failed to parse feed: {}", e)))?;

        let entries: Vec<FeedEntry> = feed.entries.into_iter().map(Self::parse_entry).collect();

        info!("Parsed feed with {} entries", entries.len());
        Ok(entries)
    }

    fn parse_entry(entry: feed_rs::model::Entry) -> FeedEntry {
        let mut links: Vec<EntryLink> = entry
            .links
            .iter()
            .map(|link| EntryLink {
                href: Some(link.href.clone()).filter(|href| !href.is_empty()),
            })
            .collect();

        // An item without <link> whose guid is a URL uses the guid as its link.
        if links.is_empty() {
            if let Some(permalink) = permalink_from_id(&entry.id) {
                links.push(EntryLink {
                    href: Some(permalink),
                });
            }
        }

        // Enclosures and media content follow the regular links.
        for url in entry
            .media
            .iter()
            .flat_map(|media| media.content.iter())
            .filter_map(|content| content.url.as_ref())
        {
            let href = url.to_string();
            if !links.iter().any(|link| link.href.as_deref() == Some(href.as_str())) {
                links.push(EntryLink { href: Some(href) });
            }
        }

        FeedEntry {
            title: entry.title.map(|t| t.content),
            links: if links.is_empty() { None } else { Some(links) },
            summary: entry.summary.map(|s| s.content),
            published: entry.published.map(|dt| dt.to_rfc2822()),
            published_parsed: entry.published.as_ref().map(TimeStruct::from_datetime),
        }
    }
}

fn permalink_from_id(id: &str) -> Option<String> {
    let url = Url::parse(id.trim()).ok()?;
    match url.scheme() {
        "http" | "https" => Some(id.trim().to_string()),
        _ => None,
    }
}
