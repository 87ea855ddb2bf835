//! SQLite storage bootstrap.
//!
//! Owns the connection, the schema, and the error type shared by every
//! data-access module. The schema mirrors the strict ownership hierarchy of
//! the corpus:
//!
//! ```text
//! surahs
//! └── verses                  (surah_id, unique verse_key and (surah, number))
//!     ├── translations        (zero or more per verse)
//!     ├── tafsirs             (zero or more per verse)
//!     └── revelation_contexts (at most one per verse)
//! ```
//!
//! ## Open modes
//!
//! Query commands use [`Store::open`], which refuses to touch a missing
//! file rather than letting SQLite silently create an empty database. The
//! seed path uses [`Store::create`], which creates the file and applies the
//! schema. `open_in_memory` backs tests and throwaway runs.

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef};
use rusqlite::{Connection, OpenFlags, ToSql};
use std::path::Path;
use thiserror::Error;

use crate::chronology::RevelationType;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("database not found at {0}; run `tanzil seed` to create it")]
    Missing(String),
}

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS surahs (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    name_transliteration TEXT NOT NULL,
    name_translation TEXT NOT NULL,
    revelation_type TEXT NOT NULL CHECK (revelation_type IN ('Meccan', 'Medinan')),
    chronological_order INTEGER NOT NULL UNIQUE,
    verses_count INTEGER NOT NULL,
    description TEXT
);

CREATE TABLE IF NOT EXISTS verses (
    id INTEGER PRIMARY KEY,
    surah_id INTEGER NOT NULL REFERENCES surahs(id),
    verse_number INTEGER NOT NULL,
    verse_key TEXT NOT NULL UNIQUE,
    text_arabic TEXT NOT NULL,
    text_uthmani TEXT NOT NULL,
    text_simple TEXT NOT NULL,
    juz_number INTEGER NOT NULL,
    hizb_number INTEGER NOT NULL,
    page_number INTEGER NOT NULL,
    UNIQUE (surah_id, verse_number)
);

CREATE INDEX IF NOT EXISTS idx_verses_surah_id ON verses(surah_id);

CREATE TABLE IF NOT EXISTS translations (
    id INTEGER PRIMARY KEY,
    verse_id INTEGER NOT NULL REFERENCES verses(id),
    language TEXT NOT NULL,
    translator TEXT NOT NULL,
    text TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_translations_verse_id ON translations(verse_id);

CREATE TABLE IF NOT EXISTS tafsirs (
    id INTEGER PRIMARY KEY,
    verse_id INTEGER NOT NULL REFERENCES verses(id),
    source TEXT NOT NULL,
    language TEXT NOT NULL,
    text TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_tafsirs_verse_id ON tafsirs(verse_id);

CREATE TABLE IF NOT EXISTS revelation_contexts (
    id INTEGER PRIMARY KEY,
    verse_id INTEGER NOT NULL UNIQUE REFERENCES verses(id),
    occasion TEXT NOT NULL,
    historical_date TEXT,
    location TEXT,
    related_events TEXT,
    sources TEXT NOT NULL
);
"#;

/// An open handle to the corpus database.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open an existing database read-only.
    ///
    /// Errors with [`StoreError::Missing`] if no file exists at `path`.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(StoreError::Missing(path.display().to_string()));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Store { conn })
    }

    /// Create (or open) a writable database at `path` and apply the schema.
    pub fn create(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let store = Store { conn };
        store.init()?;
        Ok(store)
    }

    /// A fresh in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Store { conn };
        store.init()?;
        Ok(store)
    }

    fn init(&self) -> Result<(), StoreError> {
        self.conn.pragma_update(None, "journal_mode", "WAL")?;
        self.conn.pragma_update(None, "foreign_keys", "ON")?;
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub(crate) fn conn(&self) -> &Connection {
        &self.conn
    }

    pub(crate) fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Row counts for every table, in ownership order.
    pub fn counts(&self) -> Result<Counts, StoreError> {
        Ok(Counts {
            surahs: self.count_table("surahs")?,
            verses: self.count_table("verses")?,
            translations: self.count_table("translations")?,
            tafsirs: self.count_table("tafsirs")?,
            revelation_contexts: self.count_table("revelation_contexts")?,
        })
    }

    fn count_table(&self, table: &str) -> Result<i64, StoreError> {
        // Table names come from the fixed list above, never from input.
        let sql = format!("SELECT count(*) FROM {table}");
        Ok(self.conn.query_row(&sql, [], |row| row.get(0))?)
    }
}

/// Per-table row counts, as reported by the `check` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Counts {
    pub surahs: i64,
    pub verses: i64,
    pub translations: i64,
    pub tafsirs: i64,
    pub revelation_contexts: i64,
}

// =============================================================================
// SQL conversions
// =============================================================================

/// Stored as the exact contract strings the schema CHECK constraint names.
impl ToSql for RevelationType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for RevelationType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        RevelationType::parse(text)
            .ok_or_else(|| FromSqlError::Other(format!("unknown revelation type {text:?}").into()))
    }
}
