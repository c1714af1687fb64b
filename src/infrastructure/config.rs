//! Configuration management

use crate::domain::BotSpec;
use crate::error::{BotherdError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Seconds to wait for a bot to exit after SIGTERM
pub const DEFAULT_GRACE_SECS: u64 = 5;

fn default_grace_secs() -> u64 {
    DEFAULT_GRACE_SECS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub created: DateTime<Utc>,

    #[serde(default = "default_grace_secs")]
    pub grace_secs: u64,

    #[serde(default)]
    pub bots: BTreeMap<String, BotSpec>,
}

impl Config {
    /// Create a new config with default values and an empty bot table
    pub fn new() -> Self {
        Config {
            created: Utc::now(),
            grace_secs: DEFAULT_GRACE_SECS,
            bots: BTreeMap::new(),
        }
    }

    /// Load config from .botherd/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".botherd").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BotherdError::NotBotherdDirectory(path.to_path_buf())
            } else {
                BotherdError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| BotherdError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .botherd/config.toml in the given directory.
    /// Writes a temp file in the same directory, then renames into place,
    /// so a crash never leaves a half-written registry.
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let botherd_dir = path.join(".botherd");
        let config_path = botherd_dir.join("config.toml");
        let tmp_path = botherd_dir.join("config.toml.tmp");

        if !botherd_dir.exists() {
            fs::create_dir(&botherd_dir)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| BotherdError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &config_path)?;

        Ok(())
    }

    /// Look up a registered bot by name
    pub fn bot(&self, name: &str) -> Result<&BotSpec> {
        self.bots
            .get(name)
            .ok_or_else(|| BotherdError::UnknownBot(name.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
