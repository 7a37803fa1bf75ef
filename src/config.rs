use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};
use crate::output::OutputFormat;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_db_path")]
    pub db_path: String,

    #[serde(default = "default_table")]
    pub table: String,

    #[serde(default)]
    pub format: OutputFormat,
}

fn default_db_path() -> String {
    "features.db".to_string()
}

fn default_table() -> String {
    "features".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            db_path: default_db_path(),
            table: default_table(),
            format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Loads the config from `path` if given, otherwise from the default location.
    ///
    /// A missing default config yields defaults and is not written back; a
    /// missing explicit path is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                if !path.exists() {
                    return Err(AppError::Config(format!(
                        "config file not found: {}",
                        path.display()
                    )));
                }
                Self::from_file(path)
            }
            None => {
                let config_path = Self::config_path();
                if config_path.exists() {
                    Self::from_file(&config_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        if config.table.trim().is_empty() {
            return Err(AppError::Config("table name must not be empty".to_string()));
        }
        Ok(config)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("feature-lookup")
            .join("config.toml")
    }
}
