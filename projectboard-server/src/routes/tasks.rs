//! `/api/tasks` handlers

use crate::error::{ApiError, COLUMN_NOT_FOUND, TASK_NOT_FOUND};
use crate::state::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use projectboard_kanban::task::{DeleteTask, DeleteTasksByColumn, GetTask, ListTasks, UpsertTask};
use projectboard_kanban::{Execute, Task};

pub(super) async fn list(State(state): State<AppState>) -> Result<Json<Vec<Task>>, ApiError> {
    Ok(Json(ListTasks.execute(&state.ctx).await?))
}

pub(super) async fn get(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Task>, ApiError> {
    GetTask::new(id)
        .execute(&state.ctx)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::not_found(TASK_NOT_FOUND))
}

/// Create or update a task under the configured status policy
pub(super) async fn create(
    State(state): State<AppState>,
    payload: Result<Json<UpsertTask>, JsonRejection>,
) -> Result<(StatusCode, Json<Task>), ApiError> {
    let Json(cmd) = payload?;
    let task = cmd
        .with_policy(state.status_policy)
        .execute(&state.ctx)
        .await?;
    Ok((StatusCode::CREATED, Json(task)))
}

pub(super) async fn delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<&'static str, ApiError> {
    if DeleteTask::new(id).execute(&state.ctx).await? {
        Ok("Project task deleted")
    } else {
        Err(ApiError::not_found(TASK_NOT_FOUND))
    }
}

pub(super) async fn delete_by_column(
    State(state): State<AppState>,
    Path(column_id): Path<String>,
) -> Result<&'static str, ApiError> {
    DeleteTasksByColumn::new(column_id)
        .execute(&state.ctx)
        .await?
        .ok_or_else(|| ApiError::not_found(COLUMN_NOT_FOUND))?;
    Ok("All tasks in column deleted")
}
