//! Visit tracker for navdash.
//!
//! Owns the per-URL visit statistics behind an injected [`VisitStore`]
//! backend: a JSON file matching the original `visitStats` map shape, the
//! crate's SQLite database, or an in-memory map for tests.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::params;

use crate::database::Database;
use crate::platform;
use crate::types::errors::VisitStoreError;
use crate::types::visit::VisitRecord;

/// Number of top sites the frequent section shows by default.
pub const DEFAULT_TOP_LIMIT: usize = 20;

/// Persistence backend for the visit-stats map.
///
/// `load` never fails: missing or malformed data degrades to an empty map so
/// startup cannot be blocked by a corrupt store.
pub trait VisitStore {
    fn load(&mut self) -> HashMap<String, VisitRecord>;
    fn save(&mut self, records: &HashMap<String, VisitRecord>) -> Result<(), VisitStoreError>;
}

// === JsonFileStore ===

/// Visit store persisting the map as a single JSON object keyed by URL.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default store location under the platform data directory.
    pub fn default_path() -> PathBuf {
        platform::get_data_dir().join("visit_stats.json")
    }
}

impl VisitStore for JsonFileStore {
    fn load(&mut self) -> HashMap<String, VisitRecord> {
        let content = match fs::read_to_string(&self.path) {
            Ok(c) => c,
            Err(_) => return HashMap::new(),
        };
        match serde_json::from_str(&content) {
            Ok(map) => map,
            Err(e) => {
                log::warn!(
                    "discarding malformed visit stats at {}: {}",
                    self.path.display(),
                    e
                );
                HashMap::new()
            }
        }
    }

    fn save(&mut self, records: &HashMap<String, VisitRecord>) -> Result<(), VisitStoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| VisitStoreError::IoError(format!("create {}: {}", parent.display(), e)))?;
        }
        let json = serde_json::to_string(records)
            .map_err(|e| VisitStoreError::SerializationError(e.to_string()))?;
        fs::write(&self.path, json)
            .map_err(|e| VisitStoreError::IoError(format!("write {}: {}", self.path.display(), e)))
    }
}

// === MemoryStore ===

/// In-memory visit store for tests and ephemeral sessions.
pub struct MemoryStore {
    records: HashMap<String, VisitRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            records: HashMap::new(),
        }
    }

    /// A store pre-seeded with records, for tests.
    pub fn with_records(records: HashMap<String, VisitRecord>) -> Self {
        Self { records }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VisitStore for MemoryStore {
    fn load(&mut self) -> HashMap<String, VisitRecord> {
        self.records.clone()
    }

    fn save(&mut self, records: &HashMap<String, VisitRecord>) -> Result<(), VisitStoreError> {
        self.records = records.clone();
        Ok(())
    }
}

// === SqliteVisitStore ===

/// Visit store backed by the crate's SQLite database (`visit_stats` table).
pub struct SqliteVisitStore {
    db: Arc<Database>,
}

impl SqliteVisitStore {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<VisitRecord> {
        Ok(VisitRecord {
            url: row.get(0)?,
            title: row.get(1)?,
            icon: row.get(2)?,
            count: row.get(3)?,
            last_visit: row.get(4)?,
        })
    }
}

impl VisitStore for SqliteVisitStore {
    fn load(&mut self) -> HashMap<String, VisitRecord> {
        let conn = self.db.connection();
        let mut stmt = match conn.prepare("SELECT url, title, icon, count, last_visit FROM visit_stats") {
            Ok(stmt) => stmt,
            Err(e) => {
                log::warn!("failed to read visit stats: {}", e);
                return HashMap::new();
            }
        };
        let rows = match stmt.query_map([], Self::row_to_record) {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("failed to read visit stats: {}", e);
                return HashMap::new();
            }
        };
        rows.filter_map(|r| r.ok())
            .map(|rec| (rec.url.clone(), rec))
            .collect()
    }

    fn save(&mut self, records: &HashMap<String, VisitRecord>) -> Result<(), VisitStoreError> {
        let conn = self.db.connection();
        conn.execute_batch("BEGIN")
            .map_err(|e| VisitStoreError::DatabaseError(e.to_string()))?;
        let result = (|| -> Result<(), rusqlite::Error> {
            for rec in records.values() {
                conn.execute(
                    "INSERT OR REPLACE INTO visit_stats (url, title, icon, count, last_visit) \
                     VALUES (?1, ?2, ?3, ?4, ?5)",
                    params![rec.url, rec.title, rec.icon, rec.count, rec.last_visit],
                )?;
            }
            Ok(())
        })();
        match result {
            Ok(()) => conn
                .execute_batch("COMMIT")
                .map_err(|e| VisitStoreError::DatabaseError(e.to_string())),
            Err(e) => {
                let _ = conn.execute_batch("ROLLBACK");
                Err(VisitStoreError::DatabaseError(e.to_string()))
            }
        }
    }
}

// === VisitTracker ===

/// Tracks per-URL visit counts and computes the top-N ranking.
pub struct VisitTracker {
    records: HashMap<String, VisitRecord>,
    store: Box<dyn VisitStore>,
}

impl VisitTracker {
    /// Creates a tracker over the given store, loading whatever the store
    /// holds. Never fails.
    pub fn new(mut store: Box<dyn VisitStore>) -> Self {
        let records = store.load();
        Self { records, store }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Records one visit: creates the record on first sight (count starts at
    /// zero and is immediately incremented), bumps the count, stamps the
    /// visit time, and persists the full map.
    ///
    /// No-op when `url` is empty. A persistence failure is logged as a
    /// warning and swallowed; the in-memory count is kept either way.
    pub fn record_visit(&mut self, title: &str, icon: &str, url: &str) {
        if url.is_empty() {
            return;
        }

        let entry = self
            .records
            .entry(url.to_string())
            .or_insert_with(|| VisitRecord {
                url: url.to_string(),
                title: title.to_string(),
                icon: icon.to_string(),
                count: 0,
                last_visit: 0,
            });
        entry.count += 1;
        entry.last_visit = Self::now();

        if let Err(e) = self.store.save(&self.records) {
            log::warn!("failed to persist visit stats: {}", e);
        }
    }

    /// The most-visited records, sorted by count descending and truncated to
    /// `limit`. Ties keep an unspecified order. Pure read.
    pub fn top_visited(&self, limit: usize) -> Vec<VisitRecord> {
        let mut sites: Vec<VisitRecord> = self.records.values().cloned().collect();
        sites.sort_by(|a, b| b.count.cmp(&a.count));
        sites.truncate(limit);
        sites
    }

    pub fn get(&self, url: &str) -> Option<&VisitRecord> {
        self.records.get(url)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
