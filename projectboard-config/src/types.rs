//! Configuration types

use crate::error::{ConfigError, ConfigResult};
use projectboard_kanban::store::IN_MEMORY_PATH;
use projectboard_kanban::StatusPolicy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete service configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
}

/// Where the HTTP listener binds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// `host:port` string suitable for binding
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite file, or `:memory:`
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(".projectboard").join("board.db"),
        }
    }
}

impl DatabaseConfig {
    pub fn is_in_memory(&self) -> bool {
        self.path == Path::new(IN_MEMORY_PATH)
    }
}

/// Behaviour of the Board API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// How `POST /api/tasks` treats a status naming no column
    pub status_policy: StatusPolicy,
    /// Seed the default columns before serving
    pub seed_on_startup: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::StrictReject,
            seed_on_startup: true,
        }
    }
}

impl BoardConfig {
    /// Reject values the service cannot start with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::validation("server.host must not be empty"));
        }
        if self.server.port == 0 {
            return Err(ConfigError::validation("server.port must be between 1 and 65535"));
        }
        if self.database.path.as_os_str().is_empty() {
            return Err(ConfigError::validation("database.path must not be empty"));
        }
        Ok(())
    }
}
