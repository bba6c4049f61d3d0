//! SQLite-backed document store.
//!
//! One connection is opened per run and shared across workers behind a
//! mutex; the mutex is the documented serialization point required by
//! the driver.

use std::path::Path;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rusqlite::{Connection, params};

/// Metadata and derived artifacts persisted for one processed document.
///
/// Built once per successfully parsed file and immutable afterwards; the
/// store owns it after insert.
#[derive(Debug, Clone)]
pub struct DocumentRecord {
    pub filename: String,
    pub path: String,
    pub size_bytes: u64,
    pub content: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub ingested_at: DateTime<Utc>,
}

/// Document store over a single SQLite connection.
pub struct DocumentStore {
    conn: Mutex<Connection>,
}

impl DocumentStore {
    /// Create or open the store at the given path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    /// Create an in-memory store (used by tests).
    pub fn in_memory() -> Result<Self, rusqlite::Error> {
        let conn = Connection::open_in_memory()?;
        let store = Self {
            conn: Mutex::new(conn),
        };
        store.init_schema()?;
        Ok(store)
    }

    fn init_schema(&self) -> Result<(), rusqlite::Error> {
        let conn = self.conn.lock();
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                id INTEGER PRIMARY KEY,
                filename TEXT NOT NULL,
                path TEXT NOT NULL,
                size_bytes INTEGER NOT NULL,
                content TEXT NOT NULL,
                summary TEXT NOT NULL,
                keywords TEXT NOT NULL,
                ingested_at TEXT NOT NULL
            );

            CREATE INDEX IF NOT EXISTS idx_documents_filename ON documents(filename);
            "#,
        )?;
        Ok(())
    }

    /// Insert one record. Keywords are stored as a JSON array so their
    /// order survives round-trips.
    pub fn insert(&self, record: &DocumentRecord) -> Result<(), rusqlite::Error> {
        let keywords = serde_json::to_string(&record.keywords)
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        let conn = self.conn.lock();
        conn.execute(
            r#"
            INSERT INTO documents (filename, path, size_bytes, content, summary, keywords, ingested_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.filename,
                record.path,
                record.size_bytes as i64,
                record.content,
                record.summary,
                keywords,
                record.ingested_at.to_rfc3339(),
            ],
        )?;
        Ok(())
    }

    /// Total number of stored documents.
    pub fn count(&self) -> Result<u64, rusqlite::Error> {
        let conn = self.conn.lock();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM documents", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    /// Average stored document size in bytes; 0.0 when the store is empty.
    pub fn average_size_bytes(&self) -> Result<f64, rusqlite::Error> {
        let conn = self.conn.lock();
        conn.query_row(
            "SELECT COALESCE(AVG(size_bytes), 0.0) FROM documents",
            [],
            |row| row.get(0),
        )
    }
}
