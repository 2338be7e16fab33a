//! AddColumn command

use crate::context::BoardContext;
use crate::error::{KanbanError, Result};
use crate::types::{next_class_name, Column, ColumnId};
use projectboard_operations::{async_trait, Execute, Operation};
use serde::Deserialize;

/// Create a column, or update the column with the same ID
///
/// A column that does not exist yet is always stored as non-default, whatever
/// the caller sent. An existing column is overwritten with the incoming values,
/// `is_default` included.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddColumn {
    /// The column ID; derived from the title when blank
    #[serde(default)]
    pub id: ColumnId,
    /// The column display title (required)
    #[serde(default)]
    pub title: String,
    /// Display hint; a free palette class is picked for new columns when blank
    #[serde(default, alias = "classNameHint")]
    pub class_name: String,
    #[serde(default)]
    pub is_default: bool,
    /// Reject the write when another column already has this title
    #[serde(skip)]
    pub unique_title: bool,
}

impl AddColumn {
    /// Create a new AddColumn command
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Fail with `DuplicateTitle` instead of writing when the title is taken
    pub fn require_unique_title(mut self) -> Self {
        self.unique_title = true;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(KanbanError::validation("title", "Column title is required"));
        }
        Ok(())
    }
}

impl Operation for AddColumn {
    fn verb(&self) -> &'static str {
        "add"
    }

    fn noun(&self) -> &'static str {
        "column"
    }

    fn description(&self) -> &'static str {
        "Create a column or update an existing one"
    }
}

#[async_trait]
impl Execute<BoardContext, KanbanError> for AddColumn {
    type Output = Column;

    async fn execute(&self, ctx: &BoardContext) -> Result<Column> {
        self.validate()?;

        let column = ctx
            .store()
            .write(|t| {
                let columns = t.columns();
                let all = columns.all()?;

                if self.unique_title && all.iter().any(|c| c.title_matches(&self.title)) {
                    return Err(KanbanError::DuplicateTitle {
                        title: self.title.clone(),
                    });
                }

                let id = if self.id.is_blank() {
                    Column::derive_id(&self.title)
                } else {
                    self.id.clone()
                };

                let existing = columns.get(&id)?;
                let class_name = match (&existing, self.class_name.trim().is_empty()) {
                    (_, false) => self.class_name.clone(),
                    (Some(current), true) => current.class_name.clone(),
                    (None, true) => next_class_name(&all).to_string(),
                };

                let column = Column {
                    id,
                    title: self.title.clone(),
                    class_name,
                    is_default: existing.is_some() && self.is_default,
                };
                columns.put(&column)?;
                Ok(column)
            })
            .await?;

        tracing::info!("Saved column '{}' ({})", column.id, column.title);
        Ok(column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::InitBoard;

    async fn setup() -> BoardContext {
        let ctx = BoardContext::in_memory().unwrap();
        InitBoard::new().execute(&ctx).await.unwrap();
        ctx
    }

    #[tokio::test]
    async fn test_add_column() {
        let ctx = setup().await;

        let column = AddColumn::new("REVIEW", "Review")
            .with_class_name("bg-dark")
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(column.id, "REVIEW");
        assert_eq!(column.title, "Review");
        assert_eq!(column.class_name, "bg-dark");
        assert!(!column.is_default);
        assert!(ctx.column_exists(&ColumnId::from("REVIEW")).await);
    }

    #[tokio::test]
    async fn test_new_column_cannot_claim_default() {
        let ctx = setup().await;

        let column = AddColumn::new("SNEAKY", "Sneaky")
            .with_default(true)
            .execute(&ctx)
            .await
            .unwrap();

        assert!(!column.is_default);
    }

    #[tokio::test]
    async fn test_existing_column_updated_in_place() {
        let ctx = setup().await;
        AddColumn::new("QA", "QA").execute(&ctx).await.unwrap();

        let updated = AddColumn::new("QA", "Quality")
            .with_default(true)
            .execute(&ctx)
            .await
            .unwrap();

        assert_eq!(updated.title, "Quality");
        assert!(updated.is_default);
        assert_eq!(ctx.column_count().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn test_blank_title_rejected() {
        let ctx = setup().await;

        let result = AddColumn::new("EMPTY", "   ").execute(&ctx).await;
        match result {
            Err(KanbanError::Validation { errors }) => {
                assert_eq!(errors["title"], "Column title is required");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert_eq!(ctx.column_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_duplicate_title_rejected_when_required() {
        let ctx = setup().await;

        let result = AddColumn::new("DONE_AGAIN", "done")
            .require_unique_title()
            .execute(&ctx)
            .await;
        assert!(matches!(result, Err(KanbanError::DuplicateTitle { .. })));
        assert_eq!(ctx.column_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_blank_id_derived_from_title() {
        let ctx = setup().await;

        let column = AddColumn::new("", "Code review").execute(&ctx).await.unwrap();
        assert_eq!(column.id, "CODE_REVIEW");
    }

    #[tokio::test]
    async fn test_blank_class_name_uses_free_palette_entry() {
        let ctx = setup().await;

        let column = AddColumn::new("QA", "QA").execute(&ctx).await.unwrap();
        assert_eq!(column.class_name, "bg-danger");

        // Updating without a class keeps the stored one
        let updated = AddColumn::new("QA", "Quality").execute(&ctx).await.unwrap();
        assert_eq!(updated.class_name, "bg-danger");
    }

    #[test]
    fn test_deserialize_request_body() {
        let cmd: AddColumn = serde_json::from_str(
            r#"{"id":"QA","title":"QA","classNameHint":"bg-info","isDefault":true}"#,
        )
        .unwrap();
        assert_eq!(cmd.id, "QA");
        assert_eq!(cmd.class_name, "bg-info");
        assert!(cmd.is_default);
        assert!(!cmd.unique_title);
    }
}
