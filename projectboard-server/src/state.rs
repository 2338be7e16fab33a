//! Shared handler state

use projectboard_kanban::{BoardContext, StatusPolicy};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub ctx: Arc<BoardContext>,
    /// Applied to task status checks on `POST /api/tasks`
    pub status_policy: StatusPolicy,
}

impl AppState {
    pub fn new(ctx: BoardContext, status_policy: StatusPolicy) -> Self {
        Self {
            ctx: Arc::new(ctx),
            status_policy,
        }
    }
}
