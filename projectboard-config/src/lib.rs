//! ProjectBoard configuration management using Figment
//!
//! Settings come from three layers, later ones winning:
//!
//! - Built-in defaults ([`BoardConfig::default`])
//! - `projectboard.{toml,yaml,yml,json}` in the working directory, or a file
//!   passed explicitly
//! - `PROJECTBOARD_*` environment variables, with `__` between nesting levels
//!
//! ```no_run
//! use projectboard_config::ConfigProvider;
//!
//! let config = ConfigProvider::new().load(None)?;
//! println!("binding {}", config.server.bind_address());
//! # Ok::<(), projectboard_config::ConfigError>(())
//! ```
//!
//! ## Example TOML Configuration
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 9000
//!
//! [database]
//! path = "/var/lib/projectboard/board.db"
//!
//! [api]
//! status_policy = "lenient-fallback"
//! seed_on_startup = true
//! ```

pub mod error;
pub mod provider;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::{ConfigError, ConfigResult};
pub use provider::{ConfigProvider, CONFIG_FILE_STEM, ENV_PREFIX};
pub use types::{ApiConfig, BoardConfig, DatabaseConfig, ServerConfig};
