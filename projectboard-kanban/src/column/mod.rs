//! Column commands

mod add;
mod delete;
mod exists;
mod get;
mod list;

pub use add::AddColumn;
pub use delete::{ColumnDeletion, DeleteColumn};
pub use exists::ColumnTitleExists;
pub use get::GetColumn;
pub use list::ListColumns;
