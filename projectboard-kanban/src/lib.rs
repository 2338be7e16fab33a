//! Kanban board engine with SQLite-backed storage
//!
//! This crate provides the board behind ProjectBoard: an ordered set of columns
//! and a set of tasks, each task filed under exactly one column. Three default
//! columns (`TO_DO`, `IN_PROGRESS`, `DONE`) are seeded on first use and can
//! never be deleted.
//!
//! ## Overview
//!
//! - **Commands, not methods** - Every operation is a struct implementing [`Execute`]
//! - **Context is data access only** - [`BoardContext`] wraps the store, commands hold the rules
//! - **One transaction per command** - Cascading deletes and status fallback are all-or-nothing
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use projectboard_kanban::{BoardContext, column::ListColumns, task::UpsertTask, Execute};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let ctx = BoardContext::open(".projectboard/board.db")?;
//!
//! // Listing columns seeds the defaults on an empty board
//! let columns = ListColumns.execute(&ctx).await?;
//! assert_eq!(columns.len(), 3);
//!
//! // Unknown statuses fall back to TO_DO
//! let task = UpsertTask::new("Implement feature X")
//!     .with_status("NONEXISTENT")
//!     .execute(&ctx)
//!     .await?;
//! assert_eq!(task.status, "TO_DO");
//! # Ok(())
//! # }
//! ```

mod context;
mod error;
pub mod store;
pub mod types;

// Command modules
pub mod board;
pub mod column;
pub mod task;

// Re-export Execute trait from operations crate
pub use projectboard_operations::{async_trait, Execute, Operation};

pub use context::BoardContext;
pub use error::{KanbanError, Result};
pub use store::BoardStore;

// Re-export commonly used types
pub use types::{Column, ColumnId, StatusPolicy, Task, TaskId};
