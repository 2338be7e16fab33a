//! Error types for the kanban engine

use std::collections::BTreeMap;
use thiserror::Error;

/// Result type for kanban operations
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur in kanban operations
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Column not found
    #[error("column not found: {id}")]
    ColumnNotFound { id: String },

    /// One or more required fields are missing or blank, keyed by field name
    #[error("validation failed: {}", describe_fields(.errors))]
    Validation { errors: BTreeMap<String, String> },

    /// Another column already uses this title (case-insensitive)
    #[error("column with title '{title}' already exists")]
    DuplicateTitle { title: String },

    /// Default columns cannot be deleted
    #[error("cannot delete default column '{id}'")]
    DefaultColumnProtected { id: String },

    /// Invalid field value
    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    /// SQLite error
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn describe_fields(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{field}: {message}"))
        .collect::<Vec<_>>()
        .join(", ")
}

impl KanbanError {
    /// Create a validation error for a single field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = BTreeMap::new();
        errors.insert(field.into(), message.into());
        Self::Validation { errors }
    }

    /// Create an invalid value error
    pub fn invalid_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Field-level messages carried by this error, if it is field-scoped
    ///
    /// Validation, duplicate-title and invalid-value errors all point at a
    /// specific request field; everything else returns `None`.
    pub fn field_errors(&self) -> Option<BTreeMap<String, String>> {
        match self {
            Self::Validation { errors } => Some(errors.clone()),
            Self::DuplicateTitle { .. } => Some(BTreeMap::from([(
                "title".to_string(),
                "Column with this name already exists".to_string(),
            )])),
            Self::InvalidValue { field, message } => {
                Some(BTreeMap::from([(field.clone(), message.clone())]))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = KanbanError::ColumnNotFound {
            id: "REVIEW".into(),
        };
        assert_eq!(err.to_string(), "column not found: REVIEW");
    }

    #[test]
    fn test_validation_display_lists_fields() {
        let err = KanbanError::validation("title", "Column title is required");
        assert_eq!(
            err.to_string(),
            "validation failed: title: Column title is required"
        );
    }

    #[test]
    fn test_field_errors() {
        let dup = KanbanError::DuplicateTitle {
            title: "Done".into(),
        };
        assert_eq!(
            dup.field_errors().unwrap()["title"],
            "Column with this name already exists"
        );

        let invalid = KanbanError::invalid_value("status", "Invalid column ID");
        assert_eq!(invalid.field_errors().unwrap()["status"], "Invalid column ID");

        assert!(KanbanError::ColumnNotFound { id: "X".into() }
            .field_errors()
            .is_none());
    }
}
