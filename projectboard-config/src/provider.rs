//! Configuration provider using Figment for ProjectBoard

use crate::{
    error::ConfigError,
    types::BoardConfig,
    ConfigResult,
};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Base name of the configuration file looked up in the search directory
pub const CONFIG_FILE_STEM: &str = "projectboard";

/// Prefix for environment overrides, e.g. `PROJECTBOARD_SERVER__PORT`
pub const ENV_PREFIX: &str = "PROJECTBOARD_";

/// Extensions probed, in order, next to [`CONFIG_FILE_STEM`]
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Loads [`BoardConfig`] from defaults, a config file and the environment
///
/// Later sources override earlier ones:
/// 1. Built-in defaults
/// 2. The explicit file if one was given, else `projectboard.{toml,yaml,yml,json}`
///    found in the search directory (every match is merged, in that order)
/// 3. Environment variables prefixed with `PROJECTBOARD_`, `__` separating nesting levels
pub struct ConfigProvider {
    search_dir: PathBuf,
}

impl ConfigProvider {
    /// Provider that searches the current directory
    pub fn new() -> Self {
        Self::in_dir(std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Provider that searches `dir` for config files
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            search_dir: dir.into(),
        }
    }

    /// Load and validate the configuration
    pub fn load(&self, explicit_file: Option<&Path>) -> ConfigResult<BoardConfig> {
        debug!("Loading configuration");

        let config: BoardConfig = self.build_figment(explicit_file)?.extract()?;
        config.validate()?;

        info!(
            "Configuration loaded: listening on {}, database {}",
            config.server.bind_address(),
            config.database.path.display()
        );
        Ok(config)
    }

    fn build_figment(&self, explicit_file: Option<&Path>) -> ConfigResult<Figment> {
        let files = match explicit_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(ConfigError::FileNotFound {
                        path: path.to_path_buf(),
                    });
                }
                vec![path.to_path_buf()]
            }
            None => self.discover_files(),
        };

        let mut figment = Figment::from(Serialized::defaults(BoardConfig::default()));
        for file in &files {
            trace!("Merging config file {}", file.display());
            figment = figment.merge(Self::file_provider(file));
        }

        Ok(figment.merge(Env::prefixed(ENV_PREFIX).split("__")))
    }

    /// Config files present in the search directory, lowest precedence first
    fn discover_files(&self) -> Vec<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| self.search_dir.join(format!("{CONFIG_FILE_STEM}.{ext}")))
            .filter(|path| path.is_file())
            .collect()
    }

    /// Pick the format from the extension; anything unrecognised is read as TOML
    fn file_provider(path: &Path) -> Figment {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Figment::from(Yaml::file(path)),
            Some("json") => Figment::from(Json::file(path)),
            _ => Figment::from(Toml::file(path)),
        }
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}
