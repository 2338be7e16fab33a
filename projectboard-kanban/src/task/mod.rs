//! Task commands

mod delete;
mod delete_by_column;
mod get;
mod list;
mod upsert;

pub use delete::DeleteTask;
pub use delete_by_column::DeleteTasksByColumn;
pub use get::GetTask;
pub use list::ListTasks;
pub use upsert::UpsertTask;
