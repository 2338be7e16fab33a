//! GetTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{Task, TaskId};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Get a task by ID
#[derive(Debug, Deserialize)]
pub struct GetTask {
    /// The task ID to retrieve
    pub id: TaskId,
}

impl GetTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for GetTask {
    fn verb(&self) -> &'static str {
        "get"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Retrieve a task by ID"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for GetTask {
    /// `None` when the task does not exist
    type Output = Option<Task>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Option<Task>> {
        Ok(ctx.find_task(self.id).await)
    }
}
