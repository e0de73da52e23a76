//! Unit tests for the database layer and the SQLite visit store.

use std::collections::HashMap;
use std::sync::Arc;

use navdash::database::{migrations, Database};
use navdash::managers::visit_tracker::{SqliteVisitStore, VisitStore, VisitTracker};
use navdash::types::visit::VisitRecord;

#[test]
fn test_migrations_create_tables() {
    let db = Database::open_in_memory().expect("open in-memory database");
    let conn = db.connection();

    let tables: Vec<String> = {
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };

    assert!(tables.contains(&"visit_stats".to_string()));
    assert!(tables.contains(&"schema_version".to_string()));
}

#[test]
fn test_schema_version_recorded() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(
        migrations::get_schema_version(db.connection()),
        migrations::CURRENT_SCHEMA_VERSION
    );
}

/// Reopening a database file re-runs migrations idempotently.
#[test]
fn test_reopen_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("navdash.db");

    {
        let db = Database::open(&path).unwrap();
        assert_eq!(migrations::get_schema_version(db.connection()), 1);
    }
    let db = Database::open(&path).unwrap();
    assert_eq!(migrations::get_schema_version(db.connection()), 1);
}

fn record(url: &str, count: u32) -> VisitRecord {
    VisitRecord {
        url: url.to_string(),
        title: url.to_string(),
        icon: "fas fa-link".to_string(),
        count,
        last_visit: 1000,
    }
}

#[test]
fn test_sqlite_store_roundtrip() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut store = SqliteVisitStore::new(db.clone());

    let mut records = HashMap::new();
    records.insert("https://a.com".to_string(), record("https://a.com", 3));
    records.insert("https://b.com".to_string(), record("https://b.com", 1));
    store.save(&records).unwrap();

    let mut fresh = SqliteVisitStore::new(db);
    let loaded = fresh.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded["https://a.com"].count, 3);
    assert_eq!(loaded["https://b.com"].last_visit, 1000);
}

/// Saving again overwrites rows rather than duplicating them.
#[test]
fn test_sqlite_store_upserts() {
    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut store = SqliteVisitStore::new(db);

    let mut records = HashMap::new();
    records.insert("https://a.com".to_string(), record("https://a.com", 1));
    store.save(&records).unwrap();

    records.get_mut("https://a.com").unwrap().count = 5;
    store.save(&records).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded["https://a.com"].count, 5);
}

/// A tracker over the SQLite store persists visits across instances.
#[test]
fn test_tracker_over_sqlite_store() {
    let db = Arc::new(Database::open_in_memory().unwrap());

    let mut tracker = VisitTracker::new(Box::new(SqliteVisitStore::new(db.clone())));
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");
    tracker.record_visit("GitHub", "fab fa-github", "https://github.com");

    let reloaded = VisitTracker::new(Box::new(SqliteVisitStore::new(db)));
    assert_eq!(reloaded.get("https://github.com").unwrap().count, 2);
}
