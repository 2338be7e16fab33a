//! DeleteTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::TaskId;
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Delete a single task; a missing task is a no-op
#[derive(Debug, Deserialize)]
pub struct DeleteTask {
    /// The task ID to delete
    pub id: TaskId,
}

impl DeleteTask {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteTask {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Delete a task"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteTask {
    /// Whether a task was removed
    type Output = bool;

    async fn execute(&self, ctx: &BoardContext) -> Result<bool> {
        let removed = ctx.store().write(|t| t.tasks().delete(self.id)).await?;
        if removed {
            tracing::info!("Deleted task {}", self.id);
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::UpsertTask;

    #[tokio::test]
    async fn test_delete_task() {
        let ctx = BoardContext::in_memory().unwrap();
        let task = UpsertTask::new("Temporary").execute(&ctx).await.unwrap();

        assert!(DeleteTask::new(task.id).execute(&ctx).await.unwrap());
        assert!(ctx.find_task(task.id).await.is_none());

        // Second delete finds nothing
        assert!(!DeleteTask::new(task.id).execute(&ctx).await.unwrap());
    }
}
