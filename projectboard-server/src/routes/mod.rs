//! Board API routes

mod columns;
mod tasks;

use crate::state::AppState;
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Build the application router
///
/// Board routes live under `/api`; `/health` sits at the root.
pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .route("/columns", get(columns::list).post(columns::create))
        .route("/columns/:id", get(columns::get).delete(columns::delete))
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route("/tasks/:id", get(tasks::get).delete(tasks::delete))
        .route("/tasks/column/:column_id", delete(tasks::delete_by_column));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
