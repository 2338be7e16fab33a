//! SQLite-backed persistence for columns and tasks
//!
//! The store is pure persistence: it enforces no board invariants. Commands
//! combine the column and task tables inside a single [`BoardStore::write`]
//! transaction so multi-step changes (cascading deletes, status fallback)
//! are applied all-or-nothing.
//!
//! # Schema
//!
//! - `columns`: `(id TEXT PRIMARY KEY, title, class_name, is_default)`
//! - `tasks`: `(id INTEGER PRIMARY KEY AUTOINCREMENT, summary, acceptance_criteria, status)`
//!
//! `tasks.status` is a soft reference to `columns.id`; there is no foreign key.

mod columns;
mod tasks;

pub use columns::ColumnStore;
pub use tasks::TaskStore;

use crate::error::Result;
use rusqlite::Connection;
use std::path::Path;
use tokio::sync::Mutex;

/// Path that selects a private in-memory database
pub const IN_MEMORY_PATH: &str = ":memory:";

/// The column and task tables, viewed through one connection or transaction
pub struct Tables<'c> {
    conn: &'c Connection,
}

impl<'c> Tables<'c> {
    fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn columns(&self) -> ColumnStore<'c> {
        ColumnStore::new(self.conn)
    }

    pub fn tasks(&self) -> TaskStore<'c> {
        TaskStore::new(self.conn)
    }
}

/// SQLite database holding the board
///
/// The connection lives behind an async mutex so the store can be shared
/// across request handlers; each access holds the lock for one synchronous
/// closure.
pub struct BoardStore {
    conn: Mutex<Connection>,
}

impl BoardStore {
    /// Open (or create) the database file at `path`
    ///
    /// Missing parent directories are created. `":memory:"` opens an
    /// in-memory database instead.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if path.as_os_str() == IN_MEMORY_PATH {
            return Self::open_in_memory();
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "synchronous", "NORMAL")?;

        tracing::debug!("Opened board database at {}", path.display());
        Self::with_connection(conn)
    }

    /// Open a fresh in-memory database
    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        create_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` against the tables without a transaction
    pub async fn read<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables<'_>) -> Result<T>,
    {
        let conn = self.conn.lock().await;
        f(&Tables::new(&conn))
    }

    /// Run `f` inside a transaction
    ///
    /// Commits when `f` returns `Ok`; any error rolls the whole transaction back.
    pub async fn write<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Tables<'_>) -> Result<T>,
    {
        let mut conn = self.conn.lock().await;
        let tx = conn.transaction()?;
        let value = f(&Tables::new(&tx))?;
        tx.commit()?;
        Ok(value)
    }
}

fn create_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS columns (
            id TEXT PRIMARY KEY,
            title TEXT NOT NULL,
            class_name TEXT NOT NULL DEFAULT '',
            is_default INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS tasks (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            summary TEXT NOT NULL,
            acceptance_criteria TEXT NOT NULL DEFAULT '',
            status TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
        "#,
    )
}
