//! DeleteColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{ColumnId, TaskId};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::{Deserialize, Serialize};

/// What a [`DeleteColumn`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ColumnDeletion {
    /// The column and every task in it were removed
    Deleted { tasks_removed: usize },
    /// No column with that ID; nothing changed
    NotFound,
    /// The column is a default column; nothing changed
    Protected,
}

impl ColumnDeletion {
    /// Turn the no-op outcomes into errors, yielding the number of tasks removed
    pub fn into_result(self, id: &ColumnId) -> Result<usize> {
        match self {
            Self::Deleted { tasks_removed } => Ok(tasks_removed),
            Self::NotFound => Err(KanbanError::ColumnNotFound { id: id.to_string() }),
            Self::Protected => Err(KanbanError::DefaultColumnProtected { id: id.to_string() }),
        }
    }
}

/// Delete a non-default column together with all of its tasks
///
/// The task purge and the column removal share one transaction.
#[derive(Debug, Deserialize)]
pub struct DeleteColumn {
    /// The column ID to delete
    pub id: ColumnId,
}

impl DeleteColumn {
    pub fn new(id: impl Into<ColumnId>) -> Self {
        Self { id: id.into() }
    }
}

impl Operation for DeleteColumn {
    fn verb(&self) -> &'static str {
        "delete"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Delete a non-default column and every task in it"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for DeleteColumn {
    type Output = ColumnDeletion;

    async fn execute(&self, ctx: &BoardContext) -> Result<ColumnDeletion> {
        let outcome = ctx
            .store()
            .write(|t| {
                let columns = t.columns();
                let column = match columns.get(&self.id)? {
                    None => return Ok(ColumnDeletion::NotFound),
                    Some(column) if column.is_default => return Ok(ColumnDeletion::Protected),
                    Some(column) => column,
                };

                let tasks = t.tasks();
                let doomed: Vec<TaskId> = tasks
                    .with_status(&column.id)?
                    .into_iter()
                    .map(|task| task.id)
                    .collect();
                let tasks_removed = tasks.delete_all(&doomed)?;
                columns.delete(&column.id)?;

                Ok(ColumnDeletion::Deleted { tasks_removed })
            })
            .await?;

        match outcome {
            ColumnDeletion::Deleted { tasks_removed } => tracing::info!(
                "Deleted column '{}' and {} of its tasks",
                self.id,
                tasks_removed
            ),
            ColumnDeletion::Protected => {
                tracing::debug!("Refusing to delete default column '{}'", self.id)
            }
            ColumnDeletion::NotFound => tracing::debug!("Column '{}' not found", self.id),
        }
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;
    use crate::column::AddColumn;
    use crate::task::UpsertTask;
    use crate::types::{DONE_COLUMN, TODO_COLUMN};

    async fn setup() -> BoardContext {
        let ctx = BoardContext::in_memory().unwrap();
        InitBoard::new().execute(&ctx).await.unwrap();
        ctx
    }

    #[tokio::test]
    async fn test_delete_column_cascades_to_tasks() {
        let ctx = setup().await;
        AddColumn::new("REVIEW", "Review").execute(&ctx).await.unwrap();
        UpsertTask::new("Y").with_status("REVIEW").execute(&ctx).await.unwrap();
        UpsertTask::new("Z").with_status("REVIEW").execute(&ctx).await.unwrap();
        let kept = UpsertTask::new("keep").execute(&ctx).await.unwrap();

        let outcome = DeleteColumn::new("REVIEW").execute(&ctx).await.unwrap();
        assert_eq!(outcome, ColumnDeletion::Deleted { tasks_removed: 2 });

        assert!(!ctx.column_exists(&ColumnId::from("REVIEW")).await);
        let tasks = ctx.read_all_tasks().await.unwrap();
        assert_eq!(tasks, vec![kept]);
    }

    #[tokio::test]
    async fn test_delete_default_column_is_noop() {
        let ctx = setup().await;
        UpsertTask::new("finished")
            .with_status(DONE_COLUMN)
            .execute(&ctx)
            .await
            .unwrap();

        for id in [TODO_COLUMN, "IN_PROGRESS", DONE_COLUMN] {
            let outcome = DeleteColumn::new(id).execute(&ctx).await.unwrap();
            assert_eq!(outcome, ColumnDeletion::Protected);
        }

        assert_eq!(ctx.column_count().await.unwrap(), 3);
        assert_eq!(ctx.read_all_tasks().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_column_is_noop() {
        let ctx = setup().await;
        let outcome = DeleteColumn::new("GHOST").execute(&ctx).await.unwrap();
        assert_eq!(outcome, ColumnDeletion::NotFound);
    }

    #[test]
    fn test_into_result() {
        let id = ColumnId::from("DONE");
        assert_eq!(
            ColumnDeletion::Deleted { tasks_removed: 4 }
                .into_result(&id)
                .unwrap(),
            4
        );
        assert!(matches!(
            ColumnDeletion::Protected.into_result(&id),
            Err(KanbanError::DefaultColumnProtected { .. })
        ));
        assert!(matches!(
            ColumnDeletion::NotFound.into_result(&id),
            Err(KanbanError::ColumnNotFound { .. })
        ));
    }
}
