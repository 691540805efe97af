//! SQLite-backed task log.
//!
//! One append-only table, one connection behind a mutex. Timestamps are
//! stored as UTC unix microseconds so range predicates stay integer
//! comparisons on an indexed column.

use crate::models::TaskRecord;
use chrono::{DateTime, Local, TimeZone};
use rusqlite::{Connection, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

const SCHEMA_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS tasks (
    id         INTEGER PRIMARY KEY AUTOINCREMENT,
    created_at INTEGER NOT NULL,   -- UTC unix microseconds
    task_id    INTEGER NOT NULL CHECK (task_id >= 0)
);

CREATE INDEX IF NOT EXISTS idx_tasks_created_at ON tasks(created_at);
"#;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(rusqlite::Error),

    #[error("storage directory unavailable: {0}")]
    Directory(std::io::Error),

    #[error("failed to write task: {0}")]
    Write(rusqlite::Error),

    #[error("failed to read tasks: {0}")]
    Read(rusqlite::Error),

    #[error("lock poisoned: {0}")]
    Lock(String),
}

/// Persistent store of [`TaskRecord`]s.
///
/// Records are only ever inserted; ids come from SQLite's `AUTOINCREMENT`
/// so they grow with insertion order and are never handed out twice.
pub struct TaskStore {
    conn: Mutex<Connection>,
}

impl TaskStore {
    /// Open (or create) the database file at `path` and ensure the schema.
    ///
    /// Missing parent directories are created first.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(StoreError::Directory)?;
        }
        let conn = Connection::open(path).map_err(StoreError::Unavailable)?;
        Self::with_connection(conn)
    }

    /// Private in-memory database with the same schema.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory().map_err(StoreError::Unavailable)?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self, StoreError> {
        // In-memory databases stay in "memory" journal mode.
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get::<_, String>(0))
            .map_err(StoreError::Unavailable)?;
        conn.execute_batch(SCHEMA_SQL)
            .map_err(StoreError::Unavailable)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Record that `task_id` happened now.
    pub fn create(&self, task_id: u32) -> Result<TaskRecord, StoreError> {
        self.create_at(task_id, Local::now())
    }

    /// Insert a record with an explicit creation time.
    pub fn create_at(
        &self,
        task_id: u32,
        created_at: DateTime<Local>,
    ) -> Result<TaskRecord, StoreError> {
        let conn = self.lock()?;
        conn.execute(
            "INSERT INTO tasks (created_at, task_id) VALUES (?1, ?2)",
            params![created_at.timestamp_micros(), task_id],
        )
        .map_err(StoreError::Write)?;

        Ok(TaskRecord {
            id: conn.last_insert_rowid(),
            // Round-trip through the stored precision so callers see what a
            // later read would return.
            created_at: from_micros(created_at.timestamp_micros()).unwrap_or(created_at),
            task_id,
        })
    }

    /// Records with `start <= created_at < end`, oldest id first.
    pub fn list_between<Tz: TimeZone>(
        &self,
        start: &DateTime<Tz>,
        end: &DateTime<Tz>,
    ) -> Result<Vec<TaskRecord>, StoreError> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare(
                "SELECT id, created_at, task_id FROM tasks \
                 WHERE created_at >= ?1 AND created_at < ?2 ORDER BY id ASC",
            )
            .map_err(StoreError::Read)?;
        let rows = stmt
            .query_map(
                params![start.timestamp_micros(), end.timestamp_micros()],
                row_to_record,
            )
            .map_err(StoreError::Read)?;

        let mut records = Vec::new();
        for row in rows {
            records.push(row.map_err(StoreError::Read)?);
        }
        Ok(records)
    }

    /// Total number of stored records.
    pub fn count(&self) -> Result<u64, StoreError> {
        let conn = self.lock()?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))
            .map_err(StoreError::Read)?;
        Ok(count.max(0) as u64)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn
            .lock()
            .map_err(|e| StoreError::Lock(e.to_string()))
    }
}

fn row_to_record(row: &rusqlite::Row<'_>) -> rusqlite::Result<TaskRecord> {
    let micros: i64 = row.get(1)?;
    let created_at =
        from_micros(micros).ok_or(rusqlite::Error::IntegralValueOutOfRange(1, micros))?;
    Ok(TaskRecord {
        id: row.get(0)?,
        created_at,
        task_id: row.get(2)?,
    })
}

fn from_micros(micros: i64) -> Option<DateTime<Local>> {
    DateTime::from_timestamp_micros(micros).map(|utc| utc.with_timezone(&Local))
}
