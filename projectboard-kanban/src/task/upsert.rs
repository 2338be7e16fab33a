//! UpsertTask command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::store::ColumnStore;
use crate::types::{ColumnId, StatusPolicy, Task, TaskId, TODO_COLUMN};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Create a task, or update it when `id` names an existing task
///
/// A missing or empty status puts the task in `TO_DO`. A status naming a column
/// that does not exist is handled according to [`StatusPolicy`]: moved to
/// `TO_DO` under `LenientFallback` (the default), refused under `StrictReject`.
/// Only the lenient policy treats a whitespace-only status as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertTask {
    /// Present for updates
    #[serde(default)]
    pub id: Option<TaskId>,
    /// Short description of the work (required)
    #[serde(default, alias = "title")]
    pub summary: String,
    #[serde(default)]
    pub acceptance_criteria: String,
    /// The column ID the task belongs to
    #[serde(default)]
    pub status: Option<ColumnId>,
    #[serde(skip)]
    pub policy: StatusPolicy,
}

impl UpsertTask {
    /// Create a new task command with just a summary
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            summary: summary.into(),
            ..Self::default()
        }
    }

    /// Target an existing task
    pub fn with_id(mut self, id: TaskId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_acceptance_criteria(mut self, criteria: impl Into<String>) -> Self {
        self.acceptance_criteria = criteria.into();
        self
    }

    pub fn with_status(mut self, status: impl Into<ColumnId>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.summary.trim().is_empty() {
            return Err(KanbanError::validation("summary", "Summary cannot be blank"));
        }
        Ok(())
    }

    /// Work out the status to store, consulting the column table
    fn resolve_status(&self, columns: &ColumnStore<'_>) -> Result<ColumnId> {
        let requested = match self.status.as_ref() {
            None => return Ok(ColumnId::from(TODO_COLUMN)),
            Some(status) if status.as_str().is_empty() => return Ok(ColumnId::from(TODO_COLUMN)),
            Some(status) if status.is_blank() && self.policy == StatusPolicy::LenientFallback => {
                return Ok(ColumnId::from(TODO_COLUMN))
            }
            Some(status) => status,
        };

        if columns.get(requested)?.is_some() {
            return Ok(requested.clone());
        }

        match self.policy {
            StatusPolicy::StrictReject => {
                Err(KanbanError::invalid_value("status", "Invalid column ID"))
            }
            StatusPolicy::LenientFallback => {
                tracing::debug!(
                    "Column '{}' does not exist, filing task under {}",
                    requested,
                    TODO_COLUMN
                );
                Ok(ColumnId::from(TODO_COLUMN))
            }
        }
    }
}

impl Operation for UpsertTask {
    fn verb(&self) -> &'static str {
        "upsert"
    }

    fn noun(&self) -> &'static str {
        "task"
    }

    fn description(&self) -> &'static str {
        "Create a task or update an existing one"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for UpsertTask {
    type Output = Task;

    async fn execute(&self, ctx: &BoardContext) -> Result<Task> {
        self.validate()?;

        let task = ctx
            .store()
            .write(|t| {
                let status = self.resolve_status(&t.columns())?;
                t.tasks()
                    .put(self.id, &self.summary, &self.acceptance_criteria, &status)
            })
            .await?;

        tracing::info!("Saved task {} in '{}'", task.id, task.status);
        Ok(task)
    }
}
