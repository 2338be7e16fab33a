//! ColumnTitleExists command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Check whether any column already uses a title, ignoring case
#[derive(Debug, Deserialize)]
pub struct ColumnTitleExists {
    pub title: String,
}

impl ColumnTitleExists {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl Operation for ColumnTitleExists {
    fn verb(&self) -> &'static str {
        "check"
    }

    fn noun(&self) -> &'static str {
        "column title"
    }

    fn description(&self) -> &'static str {
        "Check whether a column title is already taken"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ColumnTitleExists {
    type Output = bool;

    async fn execute(&self, ctx: &BoardContext) -> Result<bool> {
        let columns = ctx.read_all_columns().await?;
        Ok(columns.iter().any(|c| c.title_matches(&self.title)))
    }
}
