//! Task type

use super::ids::{ColumnId, TaskId};
use serde::{Deserialize, Serialize};

/// A unit of work assigned to a column through its `status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub summary: String,
    #[serde(default)]
    pub acceptance_criteria: String,
    /// ID of the column this task sits in
    pub status: ColumnId,
}
