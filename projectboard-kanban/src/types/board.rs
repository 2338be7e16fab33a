//! Board-level types: Column and the seeded default columns

use super::ids::ColumnId;
use serde::{Deserialize, Serialize};

/// Column every task falls back to when it has no valid status
pub const TODO_COLUMN: &str = "TO_DO";
pub const IN_PROGRESS_COLUMN: &str = "IN_PROGRESS";
pub const DONE_COLUMN: &str = "DONE";

/// Display classes offered to new columns, in preference order
pub const CLASS_NAME_PALETTE: [&str; 7] = [
    "bg-primary",
    "bg-secondary",
    "bg-success",
    "bg-danger",
    "bg-warning",
    "bg-info",
    "bg-dark",
];

/// Used once every palette entry is taken
pub const FALLBACK_CLASS_NAME: &str = "bg-info";

/// A column is a status bucket tasks are assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: ColumnId,
    pub title: String,
    /// Opaque display hint for clients
    #[serde(default, alias = "classNameHint")]
    pub class_name: String,
    /// Seeded columns are protected from deletion
    #[serde(default)]
    pub is_default: bool,
}

impl Column {
    /// Create a non-default column with no display hint
    pub fn new(id: impl Into<ColumnId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            class_name: String::new(),
            is_default: false,
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

    /// The three protected columns seeded into an empty board
    pub fn defaults() -> Vec<Column> {
        vec![
            Column::new(TODO_COLUMN, "TO DO")
                .with_class_name("bg-secondary")
                .with_default(true),
            Column::new(IN_PROGRESS_COLUMN, "In Progress")
                .with_class_name("bg-primary")
                .with_default(true),
            Column::new(DONE_COLUMN, "Done")
                .with_class_name("bg-success")
                .with_default(true),
        ]
    }

    /// Case-insensitive title comparison
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Derive a column ID from a display title: `"Code review"` -> `"CODE_REVIEW"`
    pub fn derive_id(title: &str) -> ColumnId {
        let id = title
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .to_uppercase();
        ColumnId::from(id)
    }
}

/// First palette class not already used by `columns`
pub fn next_class_name(columns: &[Column]) -> &'static str {
    CLASS_NAME_PALETTE
        .iter()
        .copied()
        .find(|candidate| !columns.iter().any(|c| c.class_name == *candidate))
        .unwrap_or(FALLBACK_CLASS_NAME)
}
