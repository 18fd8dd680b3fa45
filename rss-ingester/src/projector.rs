use crate::types::{FeedEntry, ProjectedLink, ProjectedRecord, Result};

/// Keeps the recognized fields of an entry. `links` is included only when at
/// least one link carries an `href`.
pub fn project_entry(entry: &FeedEntry) -> ProjectedRecord {
    let links = entry.links.as_ref().and_then(|links| {
        let projected: Vec<ProjectedLink> = links
            .iter()
            .filter_map(|link| link.href.clone())
            .map(|link| ProjectedLink { link })
            .collect();
        if projected.is_empty() {
            None
        } else {
            Some(projected)
        }
    });

    ProjectedRecord {
        title: entry.title.clone(),
        links,
        summary: entry.summary.clone(),
        published: entry.published.clone(),
        published_parsed: entry.published_parsed,
    }
}

pub fn project_entries(entries: &[FeedEntry]) -> Vec<ProjectedRecord> {
    entries.iter().map(project_entry).collect()
}

/// Serializes records as a JSON array.
pub fn to_json_document(records: &[ProjectedRecord]) -> Result<String> {
    Ok(serde_json::to_string(records)?)
}

pub fn parse_json_document(document: &str) -> Result<Vec<ProjectedRecord>> {
    Ok(serde_json::from_str(document)?)
}
