//! InitBoard command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::Column;
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Seed the default columns into an empty board
///
/// Idempotent: when the store already holds at least one column nothing is
/// written. Safe to run at startup and again before any read that needs
/// columns to exist.
#[derive(Debug, Default, Deserialize)]
pub struct InitBoard;

impl InitBoard {
    pub fn new() -> Self {
        Self
    }
}

impl Operation for InitBoard {
    fn verb(&self) -> &'static str {
        "init"
    }

    fn noun(&self) -> &'static str {
        "board"
    }

    fn description(&self) -> &'static str {
        "Seed the default columns if the board has none"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for InitBoard {
    /// The columns that were seeded; empty when the board was already populated
    type Output = Vec<Column>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Column>> {
        let seeded = ctx
            .store()
            .write(|t| {
                let columns = t.columns();
                if columns.count()? > 0 {
                    return Ok(Vec::new());
                }
                let defaults = Column::defaults();
                columns.put_all(&defaults)?;
                Ok(defaults)
            })
            .await?;

        if seeded.is_empty() {
            tracing::debug!("Board already has columns, skipping seed");
        } else {
            tracing::info!("Seeded {} default columns", seeded.len());
        }
        Ok(seeded)
    }
}
