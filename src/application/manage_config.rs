//! Config management use case

use crate::domain::SortOrder;
use crate::error::{BoardError, Result};
use crate::infrastructure::{BoardDirectory, Config};
use std::str::FromStr;

/// Service for managing board configuration
pub struct ConfigService {
    directory: BoardDirectory,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(directory: BoardDirectory) -> Self {
        ConfigService { directory }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.directory.load_config()?;

        match key {
            "sort" => Ok(config.sort.to_string()),
            "storage_key" => Ok(config.storage_key),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BoardError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: sort, storage_key, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.directory.load_config()?;

        match key {
            "sort" => {
                config.sort = SortOrder::from_str(value).map_err(BoardError::Config)?;
            }
            "storage_key" => {
                Config::validate_storage_key(value)?;
                config.storage_key = value.to_string();
            }
            "created" => {
                return Err(BoardError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BoardError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: sort, storage_key",
                    key
                )));
            }
        }

        self.directory.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.directory.load_config()
    }
}
