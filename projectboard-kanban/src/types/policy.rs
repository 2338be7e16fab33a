//! Task status validation policy

use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do when a task names a status column that does not exist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusPolicy {
    /// Refuse the write with an `InvalidValue` error on `status`
    StrictReject,
    /// Silently store the task in the `TO_DO` column instead
    #[default]
    LenientFallback,
}

impl StatusPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StrictReject => "strict-reject",
            Self::LenientFallback => "lenient-fallback",
        }
    }
}

impl fmt::Display for StatusPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StatusPolicy {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict-reject" | "strict" => Ok(Self::StrictReject),
            "lenient-fallback" | "lenient" => Ok(Self::LenientFallback),
            other => Err(KanbanError::invalid_value(
                "status_policy",
                format!("expected 'strict-reject' or 'lenient-fallback', got '{other}'"),
            )),
        }
    }
}
