//! # ProjectBoard Operations
//!
//! This crate provides the `Operation` and `Execute` traits for defining board commands.
//! Commands are structs where the fields ARE the parameters - no duplication.
//!
//! ## Example
//!
//! ```ignore
//! use projectboard_operations::*;
//!
//! #[derive(Debug)]
//! pub struct GetColumn {
//!     pub id: ColumnId,
//! }
//!
//! impl Operation for GetColumn {
//!     fn verb(&self) -> &'static str { "get" }
//!     fn noun(&self) -> &'static str { "column" }
//!     fn description(&self) -> &'static str { "Retrieve a column by ID" }
//! }
//!
//! #[async_trait]
//! impl Execute<BoardContext, KanbanError> for GetColumn {
//!     type Output = Option<Column>;
//!
//!     async fn execute(&self, ctx: &BoardContext) -> Result<Option<Column>, KanbanError> {
//!         Ok(ctx.find_column(&self.id).await)
//!     }
//! }
//! ```

mod operation;

pub use operation::{Execute, Operation};

// Re-export for use in implementations
pub use async_trait::async_trait;
