//! Config management use case

use crate::error::{BotherdError, Result};
use crate::infrastructure::{BotRepository, Config, FileSystemRepository};

/// Service for managing registry configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "grace_secs" => Ok(config.grace_secs.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(BotherdError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: grace_secs, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "grace_secs" => {
                let secs = value.parse::<u64>().map_err(|_| {
                    BotherdError::Config(format!(
                        "Invalid grace_secs value: '{}' (expected a number of seconds)",
                        value
                    ))
                })?;
                if secs == 0 {
                    return Err(BotherdError::Config(
                        "grace_secs must be at least 1".to_string(),
                    ));
                }
                config.grace_secs = secs;
            }
            "created" => {
                return Err(BotherdError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(BotherdError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: grace_secs",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
