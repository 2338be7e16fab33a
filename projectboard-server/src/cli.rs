//! Command line interface

use clap::Parser;
use projectboard_config::BoardConfig;
use projectboard_kanban::StatusPolicy;
use std::path::PathBuf;

/// Kanban board HTTP service
#[derive(Debug, Parser)]
#[command(name = "projectboard", version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (default: projectboard.{toml,yaml,yml,json} in the working directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short, long)]
    pub port: Option<u16>,

    /// SQLite database file, or ":memory:"
    #[arg(long, value_name = "PATH")]
    pub database: Option<PathBuf>,

    /// How task creation treats a status naming no column: strict-reject or lenient-fallback
    #[arg(long, value_name = "POLICY")]
    pub status_policy: Option<StatusPolicy>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Overlay explicitly passed flags on top of the loaded configuration
    pub fn apply_overrides(&self, config: &mut BoardConfig) {
        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(path) = &self.database {
            config.database.path = path.clone();
        }
        if let Some(policy) = self.status_policy {
            config.api.status_policy = policy;
        }
    }
}
