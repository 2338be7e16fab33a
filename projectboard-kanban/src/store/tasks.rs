//! Task table access

use crate::error::Result;
use crate::types::{ColumnId, Task, TaskId};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Persistence for [`Task`] records keyed by a store-assigned numeric ID
pub struct TaskStore<'c> {
    conn: &'c Connection,
}

fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: TaskId::new(row.get(0)?),
        summary: row.get(1)?,
        acceptance_criteria: row.get(2)?,
        status: ColumnId::from_string(row.get::<_, String>(3)?),
    })
}

impl<'c> TaskStore<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn get(&self, id: TaskId) -> Result<Option<Task>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, summary, acceptance_criteria, status FROM tasks WHERE id = ?1",
        )?;
        Ok(stmt.query_row(params![id.get()], row_to_task).optional()?)
    }

    /// Save a task and return the stored record
    ///
    /// With `Some(id)` naming an existing row, that row is updated. Otherwise a
    /// new row is inserted and the store assigns the ID.
    pub fn put(
        &self,
        id: Option<TaskId>,
        summary: &str,
        acceptance_criteria: &str,
        status: &ColumnId,
    ) -> Result<Task> {
        if let Some(id) = id {
            let updated = self.conn.execute(
                "UPDATE tasks SET summary = ?1, acceptance_criteria = ?2, status = ?3 WHERE id = ?4",
                params![summary, acceptance_criteria, status.as_str(), id.get()],
            )?;
            if updated > 0 {
                return Ok(Task {
                    id,
                    summary: summary.to_string(),
                    acceptance_criteria: acceptance_criteria.to_string(),
                    status: status.clone(),
                });
            }
        }

        self.conn.execute(
            "INSERT INTO tasks (summary, acceptance_criteria, status) VALUES (?1, ?2, ?3)",
            params![summary, acceptance_criteria, status.as_str()],
        )?;

        Ok(Task {
            id: TaskId::new(self.conn.last_insert_rowid()),
            summary: summary.to_string(),
            acceptance_criteria: acceptance_criteria.to_string(),
            status: status.clone(),
        })
    }

    /// Delete a task, returning whether a row was removed
    pub fn delete(&self, id: TaskId) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM tasks WHERE id = ?1", params![id.get()])?;
        Ok(removed > 0)
    }

    /// Delete a batch of tasks, returning how many rows were removed
    pub fn delete_all(&self, ids: &[TaskId]) -> Result<usize> {
        let mut stmt = self.conn.prepare_cached("DELETE FROM tasks WHERE id = ?1")?;
        let mut removed = 0;
        for id in ids {
            removed += stmt.execute(params![id.get()])?;
        }
        Ok(removed)
    }

    /// All tasks ordered by ID
    pub fn all(&self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, summary, acceptance_criteria, status FROM tasks ORDER BY id",
        )?;
        let rows = stmt.query_map([], row_to_task)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Tasks whose status is exactly `status`
    pub fn with_status(&self, status: &ColumnId) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, summary, acceptance_criteria, status FROM tasks WHERE status = ?1 ORDER BY id",
        )?;
        let rows = stmt.query_map(params![status.as_str()], row_to_task)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }
}
