//! `/api/columns` handlers

use crate::error::{ApiError, COLUMN_NOT_FOUND};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projectboard_kanban::column::{AddColumn, DeleteColumn, GetColumn, ListColumns};
use projectboard_kanban::{Column, ColumnId, Execute};

pub(super) async fn list(State(state): State<AppState>) -> Result<Json<Vec<Column>>, ApiError> {
    Ok(Json(ListColumns.execute(&state.ctx).await?))
}

pub(super) async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Column>, ApiError> {
    GetColumn::new(id)
        .execute(&state.ctx)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(COLUMN_NOT_FOUND))
}

/// Create a column; titles must be unique ignoring case
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<AddColumn>, JsonRejection>,
) -> Result<(StatusCode, Json<Column>), ApiError> {
    let Json(cmd) = payload?;
    let column = cmd.require_unique_title().execute(&state.ctx).await?;
    Ok((StatusCode::CREATED, Json(column)))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<&'static str, ApiError> {
    let id = ColumnId::from(id);
    DeleteColumn::new(id.clone())
        .execute(&state.ctx)
        .await?
        .into_result(&id)?;
    Ok("Column and associated tasks deleted")
}
