mod common;

use common::{entry_at, init_tracing, time_struct};
use rss_ingester::{select_new_entries, FeedEntry, FeedOutcome, TimeStruct};

#[test]
fn test_failed_feed_keeps_checkpoint() {
    init_tracing();

    let feed = FeedOutcome::Failed {
        reason: "connection refused".to_string(),
    };
    let selection = select_new_entries(&feed, 1234.5);

    assert!(selection.entries.is_empty());
    assert_eq!(selection.next_checkpoint, 1234.5);
    assert_eq!(selection.skipped, 0);
}

#[test]
fn test_empty_feed_keeps_checkpoint() {
    let selection = select_new_entries(&FeedOutcome::Fetched(Vec::new()), 99.0);

    assert!(selection.entries.is_empty());
    assert_eq!(selection.next_checkpoint, 99.0);
}

#[test]
fn test_selects_only_strictly_newer_entries() {
    init_tracing();

    let feed = FeedOutcome::Fetched(vec![
        entry_at("newest", 300),
        entry_at("equal", 200),
        entry_at("older", 100),
        entry_at("newer", 250),
    ]);
    let selection = select_new_entries(&feed, 200.0);

    let titles: Vec<&str> = selection
        .entries
        .iter()
        .map(|e| e.title.as_deref().unwrap())
        .collect();
    assert_eq!(titles, vec!["newest", "newer"]);
    assert_eq!(selection.next_checkpoint, 300.0);
}

#[test]
fn test_next_checkpoint_is_max_of_feed_and_checkpoint() {
    let feed = FeedOutcome::Fetched(vec![entry_at("a", 100), entry_at("b", 200)]);

    let selection = select_new_entries(&feed, 50.0);
    assert_eq!(selection.entries.len(), 2);
    assert_eq!(selection.next_checkpoint, 200.0);

    let selection = select_new_entries(&feed, 500.0);
    assert!(selection.entries.is_empty());
    assert_eq!(selection.next_checkpoint, 500.0);
}

#[test]
fn test_fractional_checkpoint_compares_exactly() {
    let feed = FeedOutcome::Fetched(vec![entry_at("a", 100)]);

    let selection = select_new_entries(&feed, 99.999);
    assert_eq!(selection.entries.len(), 1);
    assert_eq!(selection.next_checkpoint, 100.0);

    let selection = select_new_entries(&feed, 100.0);
    assert!(selection.entries.is_empty());
    assert_eq!(selection.next_checkpoint, 100.0);
}

#[test]
fn test_entries_without_publication_time_are_skipped() {
    init_tracing();

    let undated = FeedEntry {
        title: Some("undated".to_string()),
        ..FeedEntry::default()
    };
    let invalid_date = FeedEntry {
        title: Some("february 30th".to_string()),
        published_parsed: Some(TimeStruct {
            month: 2,
            day: 30,
            ..time_struct(5_000)
        }),
        ..FeedEntry::default()
    };
    let feed = FeedOutcome::Fetched(vec![undated, entry_at("dated", 400), invalid_date]);

    let selection = select_new_entries(&feed, 10.0);

    assert_eq!(selection.entries.len(), 1);
    assert_eq!(selection.entries[0].title.as_deref(), Some("dated"));
    assert_eq!(selection.next_checkpoint, 400.0);
    assert_eq!(selection.skipped, 2);
}

#[test]
fn test_selection_never_lowers_checkpoint() {
    let checkpoints = [0.0, 150.0, 1_000_000.0];
    let feed = FeedOutcome::Fetched(vec![
        entry_at("a", 10),
        entry_at("b", 200),
        entry_at("c", 150),
    ]);

    for checkpoint in checkpoints {
        let selection = select_new_entries(&feed, checkpoint);
        assert!(selection.next_checkpoint >= checkpoint);
        for entry in &selection.entries {
            assert!(entry.published_epoch().unwrap() > checkpoint);
        }
    }
}
