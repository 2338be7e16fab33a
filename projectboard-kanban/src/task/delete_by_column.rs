//! DeleteTasksByColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{ColumnId, TaskId};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Delete every task in a column, leaving the column itself in place
///
/// The column lookup and the purge run in one transaction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteTasksByColumn {
    pub column_id: ColumnId,
}

impl DeleteTasksByColumn {
    pub fn new(column_id: impl Into<ColumnId>) -> Self {
        Self {
            column_id: column_id.into(),
        }
    }
}

impl Operation for DeleteTasksByColumn {
    fn verb(&self) -> &'static str {
        "clear"
    }

    fn noun(&self) -> &'static str {
        "column tasks"
    }

    fn description(&self) -> &'static str {
        "Delete all tasks in a column"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteTasksByColumn {
    /// Number of tasks removed, or `None` when the column does not exist
    type Output = Option<usize>;

    async fn execute(&self, ctx: &BoardContext) -> Result<Option<usize>> {
        let removed = ctx
            .store()
            .write(|t| {
                if t.columns().get(&self.column_id)?.is_none() {
                    return Ok(None);
                }
                let tasks = t.tasks();
                let ids: Vec<TaskId> = tasks
                    .with_status(&self.column_id)?
                    .into_iter()
                    .map(|task| task.id)
                    .collect();
                tasks.delete_all(&ids).map(Some)
            })
            .await?;

        match removed {
            Some(count) => {
                tracing::info!("Deleted {} tasks from column '{}'", count, self.column_id)
            }
            None => tracing::debug!("Column '{}' not found", self.column_id),
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::task::UpsertTask;
    use crate::types::{DONE_COLUMN, TODO_COLUMN};

    #[tokio::test]
    async fn test_delete_tasks_by_column_keeps_column() {
        let ctx = BoardContext::in_memory().unwrap();
        InitBoard::new().execute(&ctx).await.unwrap();
        UpsertTask::new("a").with_status(DONE_COLUMN).execute(&ctx).await.unwrap();
        UpsertTask::new("b").with_status(DONE_COLUMN).execute(&ctx).await.unwrap();
        UpsertTask::new("c").execute(&ctx).await.unwrap();

        let removed = DeleteTasksByColumn::new(DONE_COLUMN)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(removed, Some(2));

        assert!(ctx.column_exists(&ColumnId::from(DONE_COLUMN)).await);
        let remaining = ctx.read_all_tasks().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].status, TODO_COLUMN);
    }

    #[tokio::test]
    async fn test_delete_tasks_by_empty_column() {
        let ctx = BoardContext::in_memory().unwrap();
        InitBoard::new().execute(&ctx).await.unwrap();

        let removed = DeleteTasksByColumn::new(DONE_COLUMN)
            .execute(&ctx)
            .await
            .unwrap();
        assert_eq!(removed, Some(0));
    }

    #[tokio::test]
    async fn test_delete_tasks_by_missing_column() {
        let ctx = BoardContext::in_memory().unwrap();
        InitBoard::new().execute(&ctx).await.unwrap();
        UpsertTask::new("untouched").execute(&ctx).await.unwrap();

        let removed = DeleteTasksByColumn::new("ANY").execute(&ctx).await.unwrap();

        assert_eq!(removed, None);
        assert_eq!(ctx.read_all_tasks().await.unwrap().len(), 1);
    }
}
