//! ListColumns command

use crate::board::InitBoard;
use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::Column;
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// List all columns, seeding the defaults first if the board is empty
#[derive(Debug, Default, Deserialize)]
pub struct ListColumns;

impl Operation for ListColumns {
    fn verb(&self) -> &'static str {
        "list"
    }

    fn noun(&self) -> &'static str {
        "columns"
    }

    fn description(&self) -> &'static str {
        "List all columns in creation order"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListColumns {
    type Output = Vec<Column>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Column>> {
        // The store may have been wiped after startup
        InitBoard::new().execute(ctx).await?;
        ctx.read_all_columns().await
    }
}
