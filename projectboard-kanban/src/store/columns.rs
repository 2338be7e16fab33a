//! Column table access

use crate::error::Result;
use crate::types::{Column, ColumnId};
use rusqlite::{params, Connection, OptionalExtension, Row};

/// Persistence for [`Column`] records keyed by their string ID
pub struct ColumnStore<'c> {
    conn: &'c Connection,
}

fn row_to_column(row: &Row<'_>) -> rusqlite::Result<Column> {
    Ok(Column {
        id: ColumnId::from_string(row.get::<_, String>(0)?),
        title: row.get(1)?,
        class_name: row.get(2)?,
        is_default: row.get::<_, i64>(3)? != 0,
    })
}

impl<'c> ColumnStore<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    /// Look up a column by ID
    pub fn get(&self, id: &ColumnId) -> Result<Option<Column>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, title, class_name, is_default FROM columns WHERE id = ?1",
        )?;
        Ok(stmt
            .query_row(params![id.as_str()], row_to_column)
            .optional()?)
    }

    /// Insert the column, or overwrite every field of the row with the same ID
    pub fn put(&self, column: &Column) -> Result<()> {
        let mut stmt = self.conn.prepare_cached(
            r#"
            INSERT INTO columns (id, title, class_name, is_default)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                class_name = excluded.class_name,
                is_default = excluded.is_default
            "#,
        )?;
        stmt.execute(params![
            column.id.as_str(),
            column.title,
            column.class_name,
            column.is_default as i64
        ])?;
        Ok(())
    }

    pub fn put_all(&self, columns: &[Column]) -> Result<()> {
        for column in columns {
            self.put(column)?;
        }
        Ok(())
    }

    /// Delete a column, returning whether a row was removed
    pub fn delete(&self, id: &ColumnId) -> Result<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM columns WHERE id = ?1", params![id.as_str()])?;
        Ok(removed > 0)
    }

    /// All columns in insertion order
    pub fn all(&self) -> Result<Vec<Column>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT id, title, class_name, is_default FROM columns ORDER BY rowid",
        )?;
        let rows = stmt.query_map([], row_to_column)?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn count(&self) -> Result<usize> {
        // SQLite integers are i64; usize needs rusqlite's fallible_uint feature
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM columns", [], |row| {
                let n: i64 = row.get(0)?;
                usize::try_from(n).map_err(|_| rusqlite::Error::IntegralValueOutOfRange(0, n))
            })?;
        Ok(count)
    }
}
