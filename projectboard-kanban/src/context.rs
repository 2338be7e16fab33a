//! BoardContext - data access primitives for board storage
//!
//! The context provides access to storage and utilities. No business logic methods,
//! just data access primitives. Commands do all the work.

use crate::error::Result;
use crate::store::BoardStore;
use crate::types::{Column, ColumnId, Task, TaskId};
use std::path::Path;

/// Context passed to every command - provides access, not logic
pub struct BoardContext {
    store: BoardStore,
}

impl BoardContext {
    /// Create a context over an already opened store
    pub fn new(store: BoardStore) -> Self {
        Self { store }
    }

    /// Open the database at `path` and wrap it in a context
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(BoardStore::open(path)?))
    }

    /// Context over a fresh in-memory database
    pub fn in_memory() -> Result<Self> {
        Ok(Self::new(BoardStore::open_in_memory()?))
    }

    /// The underlying store, for commands that need a transaction
    pub fn store(&self) -> &BoardStore {
        &self.store
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Find a column by ID
    ///
    /// A store failure during the lookup is logged and reported as `None`,
    /// the same as a missing column.
    pub async fn find_column(&self, id: &ColumnId) -> Option<Column> {
        match self.store.read(|t| t.columns().get(id)).await {
            Ok(column) => column,
            Err(e) => {
                tracing::warn!("Column lookup for '{}' failed: {}", id, e);
                None
            }
        }
    }

    /// Find a task by ID
    ///
    /// A store failure during the lookup is logged and reported as `None`,
    /// the same as a missing task.
    pub async fn find_task(&self, id: TaskId) -> Option<Task> {
        match self.store.read(|t| t.tasks().get(id)).await {
            Ok(task) => task,
            Err(e) => {
                tracing::warn!("Task lookup for {} failed: {}", id, e);
                None
            }
        }
    }

    /// Check if a column exists
    pub async fn column_exists(&self, id: &ColumnId) -> bool {
        self.find_column(id).await.is_some()
    }

    // =========================================================================
    // Bulk reads
    // =========================================================================

    /// Read all columns in insertion order
    pub async fn read_all_columns(&self) -> Result<Vec<Column>> {
        self.store.read(|t| t.columns().all()).await
    }

    /// Read all tasks ordered by ID
    pub async fn read_all_tasks(&self) -> Result<Vec<Task>> {
        self.store.read(|t| t.tasks().all()).await
    }

    /// Number of stored columns
    pub async fn column_count(&self) -> Result<usize> {
        self.store.read(|t| t.columns().count()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::column::GetColumn;
    use crate::task::{GetTask, UpsertTask};
    use crate::types::TODO_COLUMN;
    use projectboard_operations::Execute;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_find_missing_returns_none() {
        let ctx = BoardContext::in_memory().unwrap();
        assert!(ctx.find_column(&ColumnId::from("NOPE")).await.is_none());
        assert!(ctx.find_task(TaskId::new(1)).await.is_none());
        assert!(!ctx.column_exists(&ColumnId::from("NOPE")).await);
    }

    #[tokio::test]
    async fn test_reads_see_written_rows() {
        let ctx = BoardContext::in_memory().unwrap();
        ctx.store()
            .write(|t| {
                t.columns().put_all(&Column::defaults())?;
                t.tasks().put(None, "task", "", &ColumnId::from("DONE"))?;
                Ok(())
            })
            .await
            .unwrap();

        assert_eq!(ctx.column_count().await.unwrap(), 3);
        assert_eq!(ctx.read_all_columns().await.unwrap().len(), 3);
        assert_eq!(ctx.read_all_tasks().await.unwrap().len(), 1);
        assert!(ctx.column_exists(&ColumnId::from("DONE")).await);
    }

    #[tokio::test]
    async fn test_failed_lookups_read_as_missing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("board.db");
        let ctx = BoardContext::open(&path).unwrap();
        InitBoard::new().execute(&ctx).await.unwrap();
        let task = UpsertTask::new("doomed").execute(&ctx).await.unwrap();
        assert!(ctx.find_column(&ColumnId::from(TODO_COLUMN)).await.is_some());

        // Break the schema underneath the open store
        rusqlite::Connection::open(&path)
            .unwrap()
            .execute_batch("DROP TABLE columns; DROP TABLE tasks;")
            .unwrap();

        assert!(ctx.read_all_columns().await.is_err());
        assert!(ctx.find_column(&ColumnId::from(TODO_COLUMN)).await.is_none());
        assert!(ctx.find_task(task.id).await.is_none());
        assert!(!ctx.column_exists(&ColumnId::from(TODO_COLUMN)).await);
        assert_eq!(GetColumn::new(TODO_COLUMN).execute(&ctx).await.unwrap(), None);
        assert_eq!(GetTask::new(task.id).execute(&ctx).await.unwrap(), None);
    }
}
