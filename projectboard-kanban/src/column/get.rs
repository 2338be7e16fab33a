//! GetColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{Column, ColumnId};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Get a column by ID
#[derive(Debug, Deserialize)]
pub struct GetColumn {
    /// The column ID to retrieve
    pub id: ColumnId,
}

impl GetColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for GetColumn {
    fn verb(&self) -> &'static str {
        "get"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Retrieve a column by ID"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetColumn {
    /// `None` when the column does not exist
    type Output = Option<Column>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Option<Column>> {
        Ok(ctx.find_column(&self.id).await)
    }
}
