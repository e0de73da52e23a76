//! Unit tests for the VisitTracker and its store backends.
//!
//! Exercise visit recording, ranking, and the degrade-to-empty discipline
//! of the JSON file store.

use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use navdash::managers::visit_tracker::{JsonFileStore, MemoryStore, VisitTracker};
use navdash::types::visit::VisitRecord;

fn now_secs() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64
}

/// Repeated visits to one URL accumulate in its count.
#[test]
fn test_count_increments_per_visit() {
    let mut tracker = VisitTracker::new(Box::new(MemoryStore::new()));

    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");

    let record = tracker.get("https://github.com").expect("record exists");
    assert_eq!(record.count, 3);
    assert_eq!(record.title, "GitHub");
}

/// An empty URL is a no-op: nothing recorded, nothing persisted.
#[test]
fn test_empty_url_is_ignored() {
    let mut tracker = VisitTracker::new(Box::new(MemoryStore::new()));

    tracker.record_visit("Nowhere", "fas fa-link", "");

    assert!(tracker.is_empty());
    assert!(tracker.top_visited(5).is_empty());
}

/// last_visit carries the timestamp of the most recent call.
#[test]
fn test_last_visit_is_stamped() {
    let mut tracker = VisitTracker::new(Box::new(MemoryStore::new()));

    let before = now_secs();
    tracker.record_visit("Docs", "fas fa-book", "https://docs.rs");
    let after = now_secs();

    let record = tracker.get("https://docs.rs").unwrap();
    assert!(record.last_visit >= before && record.last_visit <= after);
}

/// The documented example: a store holding one record with count 3 yields
/// exactly that record from top_visited(5).
#[test]
fn test_top_visited_over_seeded_store() {
    let mut seeded = HashMap::new();
    seeded.insert(
        "https://a.com".to_string(),
        VisitRecord {
            url: "https://a.com".to_string(),
            title: "A".to_string(),
            icon: "fas fa-a".to_string(),
            count: 3,
            last_visit: 1000,
        },
    );
    let tracker = VisitTracker::new(Box::new(MemoryStore::with_records(seeded)));

    let top = tracker.top_visited(5);
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].url, "https://a.com");
    assert_eq!(top[0].count, 3);
    assert_eq!(top[0].last_visit, 1000);
}

/// Ranking is descending by count and truncated to the limit.
#[test]
fn test_top_visited_sorted_and_truncated() {
    let mut tracker = VisitTracker::new(Box::new(MemoryStore::new()));

    for _ in 0..5 {
        tracker.record_visit("A", "fas fa-a", "https://a.com");
    }
    for _ in 0..2 {
        tracker.record_visit("B", "fas fa-b", "https://b.com");
    }
    tracker.record_visit("C", "fas fa-c", "https://c.com");

    let top = tracker.top_visited(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].url, "https://a.com");
    assert_eq!(top[1].url, "https://b.com");

    let all = tracker.top_visited(20);
    assert_eq!(all.len(), 3);
    assert!(all.windows(2).all(|w| w[0].count >= w[1].count));
}

/// Visits persisted through the JSON file store survive a fresh tracker.
#[test]
fn test_json_store_roundtrip() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("visit_stats.json");

    let mut tracker = VisitTracker::new(Box::new(JsonFileStore::new(&path)));
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");

    let reloaded = VisitTracker::new(Box::new(JsonFileStore::new(&path)));
    let record = reloaded.get("https://github.com").expect("persisted record");
    assert_eq!(record.count, 2);
    assert_eq!(record.icon, "fab fa-github");
}

/// A malformed stats file degrades to an empty map instead of failing.
#[test]
fn test_json_store_malformed_file_degrades_to_empty() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("visit_stats.json");
    std::fs::write(&path, "{not valid json").unwrap();

    let tracker = VisitTracker::new(Box::new(JsonFileStore::new(&path)));
    assert!(tracker.is_empty());
}

/// The default store location lives in the platform data directory.
#[test]
fn test_default_store_path() {
    let path = JsonFileStore::default_path();
    assert!(path.ends_with("visit_stats.json"));
    assert!(path
        .to_string_lossy()
        .to_lowercase()
        .contains("navdash"));
}

/// A store that cannot be written never surfaces the failure: the visit is
/// still counted in memory.
#[test]
fn test_unwritable_store_failure_is_swallowed() {
    let dir = tempfile::tempdir().expect("temp dir");
    // Parent "blocked" is a file, so creating it as a directory must fail
    let blocker = dir.path().join("blocked");
    std::fs::write(&blocker, "occupied").unwrap();
    let path = blocker.join("visit_stats.json");

    let mut tracker = VisitTracker::new(Box::new(JsonFileStore::new(&path)));
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");

    assert_eq!(tracker.get("https://github.com").unwrap().count, 1);
}
