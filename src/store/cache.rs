//! Local SQLite cache for the deck collection.
//!
//! The whole collection lives under a single key in a key/value table, the
//! same way the browser original kept one JSON blob under one localStorage
//! key. The cache is the offline fallback and the authoritative copy for
//! immediate UI consistency.

use crate::error::StoreError;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// Key under which the serialized collection is stored.
const CACHE_KEY: &str = "decks_v1";

pub struct LocalCache {
    conn: Connection,
}

impl LocalCache {
    /// Opens (or creates) the cache database at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// In-memory cache, used by tests.
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> rusqlite::Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS cache (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            )",
            (),
        )?;
        Ok(Self { conn })
    }

    /// Returns the cached collection JSON, or None if nothing was saved yet.
    pub fn read(&self) -> rusqlite::Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM cache WHERE key = ?1",
                params![CACHE_KEY],
                |row| row.get(0),
            )
            .optional()
    }

    /// Replaces the cached collection JSON.
    ///
    /// A disk-full failure maps to `StoreError::QuotaExceeded` so callers can
    /// surface it distinctly from generic cache trouble.
    pub fn write(&self, value: &str) -> Result<(), StoreError> {
        self.conn
            .execute(
                "INSERT OR REPLACE INTO cache (key, value) VALUES (?1, ?2)",
                params![CACHE_KEY, value],
            )
            .map_err(|e| match &e {
                rusqlite::Error::SqliteFailure(inner, _)
                    if inner.code == rusqlite::ErrorCode::DiskFull =>
                {
                    StoreError::QuotaExceeded
                }
                _ => StoreError::Cache(e),
            })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_empty_cache_returns_none() {
        let cache = LocalCache::open_in_memory().unwrap();
        assert_eq!(cache.read().unwrap(), None);
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let cache = LocalCache::open_in_memory().unwrap();
        cache.write("[]").unwrap();
        assert_eq!(cache.read().unwrap().as_deref(), Some("[]"));

        cache.write(r#"[{"id":1}]"#).unwrap();
        assert_eq!(cache.read().unwrap().as_deref(), Some(r#"[{"id":1}]"#));
    }

    #[test]
    fn test_cache_persists_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.sqlite3");

        {
            let cache = LocalCache::open(&path).unwrap();
            cache.write("[1,2,3]").unwrap();
        }

        let reopened = LocalCache::open(&path).unwrap();
        assert_eq!(reopened.read().unwrap().as_deref(), Some("[1,2,3]"));
    }
}
