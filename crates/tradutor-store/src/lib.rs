//! Persistent word list.
//!
//! Keeps the last synced word list in an embedded SQLite database so lookups
//! keep working when the word list source is unreachable.
//!
//! ```no_run
//! use tradutor_store::SqliteStore;
//!
//! let store = SqliteStore::open("tradutor.db").unwrap();
//! let pairs = store.load_all().unwrap();
//! ```

use std::path::Path;

use rusqlite::{Connection, params};
use thiserror::Error;
use tradutor_types::WordPair;

/// Schema revision written to `PRAGMA user_version`
pub const SCHEMA_VERSION: i64 = 1;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Database was written by a newer build
    #[error("Unsupported schema version {found} (expected at most {supported})")]
    UnsupportedVersion { found: i64, supported: i64 },
}

/// SQLite-backed word list.
///
/// Connections are not shared across threads; open one per blocking task.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and bring the schema
    /// up to date
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        let mut store = Self { conn };
        store.upgrade()?;
        Ok(store)
    }

    /// Private database, gone when dropped
    pub fn in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let mut store = Self { conn };
        store.upgrade()?;
        Ok(store)
    }

    fn upgrade(&mut self) -> Result<(), StoreError> {
        let version: i64 = self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?;

        if version > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedVersion {
                found: version,
                supported: SCHEMA_VERSION,
            });
        }

        if version < 1 {
            tracing::info!("Creating word list schema (version {})", SCHEMA_VERSION);
            self.conn.execute_batch(include_str!("schema.sql"))?;
            self.conn
                .pragma_update(None, "user_version", SCHEMA_VERSION)?;
        }

        Ok(())
    }

    pub fn schema_version(&self) -> Result<i64, StoreError> {
        Ok(self
            .conn
            .query_row("PRAGMA user_version", [], |row| row.get(0))?)
    }

    /// Clear the table and insert `pairs`, all in one transaction
    pub fn replace_all(&mut self, pairs: &[WordPair]) -> Result<usize, StoreError> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM palavras", [])?;

        {
            let mut stmt =
                tx.prepare("INSERT INTO palavras (english, portuguese) VALUES (?1, ?2)")?;
            for pair in pairs {
                stmt.execute(params![pair.source, pair.target])?;
            }
        }

        tx.commit()?;
        tracing::info!("Stored {} word pairs", pairs.len());
        Ok(pairs.len())
    }

    /// Every stored pair in insertion order
    pub fn load_all(&self) -> Result<Vec<WordPair>, StoreError> {
        let mut stmt = self
            .conn
            .prepare("SELECT english, portuguese FROM palavras ORDER BY id")?;

        let rows = stmt.query_map([], |row| {
            Ok(WordPair {
                source: row.get(0)?,
                target: row.get(1)?,
            })
        })?;

        let mut pairs = Vec::new();
        for pair in rows {
            pairs.push(pair?);
        }
        Ok(pairs)
    }

    pub fn count(&self) -> Result<usize, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM palavras", [], |row| row.get(0))?;
        Ok(count as usize)
    }
}
