//! Mapping from board errors to HTTP responses

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use projectboard_kanban::KanbanError;
use std::collections::BTreeMap;
use thiserror::Error;

pub const COLUMN_NOT_FOUND: &str = "Column not found";
pub const TASK_NOT_FOUND: &str = "Project task not found";
pub const DEFAULT_COLUMN_PROTECTED: &str = "Cannot delete default columns";

/// Error returned by handlers
///
/// Field errors render as a JSON object of field to message; every other
/// variant renders as a plain-text body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid request fields: {0:?}")]
    FieldErrors(BTreeMap<String, String>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("internal server error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::FieldErrors(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<KanbanError> for ApiError {
    fn from(error: KanbanError) -> Self {
        if let Some(errors) = error.field_errors() {
            return Self::FieldErrors(errors);
        }

        match error {
            KanbanError::ColumnNotFound { .. } => Self::not_found(COLUMN_NOT_FOUND),
            KanbanError::DefaultColumnProtected { .. } => {
                Self::bad_request(DEFAULT_COLUMN_PROTECTED)
            }
            other => {
                tracing::error!("Board operation failed: {}", other);
                Self::Internal(other.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("Rejected request body: {}", rejection);
        Self::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match self {
            Self::FieldErrors(errors) => (status, Json(errors)).into_response(),
            Self::NotFound(message) | Self::BadRequest(message) => {
                (status, message).into_response()
            }
            // Store details stay in the log
            Self::Internal(_) => (status, "Internal server error").into_response(),
        }
    }
}
