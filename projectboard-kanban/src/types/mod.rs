//! Core types for the kanban engine

mod board;
mod ids;
mod policy;
mod task;

// Re-export all types
pub use board::{
    next_class_name, Column, CLASS_NAME_PALETTE, DONE_COLUMN, FALLBACK_CLASS_NAME,
    IN_PROGRESS_COLUMN, TODO_COLUMN,
};
pub use ids::{ColumnId, TaskId};
pub use policy::StatusPolicy;
pub use task::Task;
