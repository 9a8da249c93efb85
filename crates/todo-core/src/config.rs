//! Configuration for todo
//!
//! Stored in <config dir>/todo/config.toml

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR: &str = "todo";
const CONFIG_FILE: &str = "config.toml";
const DATA_FILE: &str = ".todos.json";

/// todo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// JSON file holding the todos (defaults to ~/.todos.json)
    pub data_file: Option<PathBuf>,

    /// Use colors in output
    pub colors: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            colors: true,
        }
    }
}

impl Config {
    /// Default location of the config file, if a config dir is known
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load config from a TOML file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| crate::Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolved path of the JSON data file
    pub fn data_path(&self) -> PathBuf {
        if let Some(ref path) = self.data_file {
            return path.clone();
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DATA_FILE)
    }
}
