//! ListTasks command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::Task;
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// List all tasks
#[derive(Debug, Default, Deserialize)]
pub struct ListTasks;

impl Operation for ListTasks {
    fn verb(&self) -> &'static str {
        "list"
    }

    fn noun(&self) -> &'static str {
        "tasks"
    }

    fn description(&self) -> &'static str {
        "List all tasks ordered by ID"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for ListTasks {
    type Output = Vec<Task>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Vec<Task>> {
        ctx.read_all_tasks().await
    }
}
