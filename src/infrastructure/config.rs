//! Configuration management

use crate::domain::SortOrder;
use crate::error::{BoardError, Result};
use crate::infrastructure::DEFAULT_STORAGE_KEY;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Default display order for `board list`
    #[serde(default)]
    pub sort: SortOrder,
    /// Key the post collection is stored under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    pub created: DateTime<Utc>,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Config {
    /// Create a new config with default values
    pub fn new(sort: SortOrder) -> Self {
        Config {
            sort,
            storage_key: default_storage_key(),
            created: Utc::now(),
        }
    }

    /// Load config from .board/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".board").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BoardError::NotBoardDirectory(path.to_path_buf())
            } else {
                BoardError::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&contents)?;
        Self::validate_storage_key(&config.storage_key)?;
        Ok(config)
    }

    /// Save config to .board/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let board_dir = path.join(".board");
        let config_path = board_dir.join("config.toml");

        if !board_dir.exists() {
            fs::create_dir(&board_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the sort order, letting BOARD_SORT override the stored value
    pub fn get_sort(&self) -> SortOrder {
        match std::env::var("BOARD_SORT") {
            Ok(value) => SortOrder::from_str(&value).unwrap_or_else(|e| {
                warn!("ignoring BOARD_SORT: {}", e);
                self.sort
            }),
            Err(_) => self.sort,
        }
    }

    /// Check that a storage key can be used as a file name
    pub fn validate_storage_key(key: &str) -> Result<()> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

        if valid {
            Ok(())
        } else {
            Err(BoardError::Config(format!(
                "Invalid storage key: '{}'. Use letters, digits, '-' or '_'",
                key
            )))
        }
    }
}
