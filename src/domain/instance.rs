//! Bot instance definitions

use crate::error::{BotherdError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Launch command used when a bot does not configure its own
pub const DEFAULT_COMMAND: &str = "python3 main.py";

/// Log file name used when a bot does not configure its own
pub const DEFAULT_LOG: &str = "output.log";

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

fn default_log() -> String {
    DEFAULT_LOG.to_string()
}

/// A registered bot: an opaque command run in its own working directory
/// with stdout and stderr appended to a per-bot log file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotSpec {
    /// Working directory, relative to the registry root (absolute allowed)
    pub dir: PathBuf,

    /// Launch command, split on whitespace (no shell involved)
    #[serde(default = "default_command")]
    pub command: String,

    /// Log file name, relative to the bot directory
    #[serde(default = "default_log")]
    pub log: String,
}

impl BotSpec {
    /// Create a spec with defaults for command and log file
    pub fn new(dir: PathBuf) -> Self {
        BotSpec {
            dir,
            command: default_command(),
            log: default_log(),
        }
    }

    /// Split the command into whitespace-separated tokens.
    /// An empty command is a configuration error.
    pub fn command_tokens(&self) -> Result<Vec<String>> {
        let tokens: Vec<String> = self
            .command
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        if tokens.is_empty() {
            return Err(BotherdError::Config(
                "Bot command is empty; set one with 'botherd add --command'".to_string(),
            ));
        }

        Ok(tokens)
    }

    /// Split the command into program and arguments
    pub fn program_and_args(&self) -> Result<(String, Vec<String>)> {
        let mut tokens = self.command_tokens()?;
        let program = tokens.remove(0);
        Ok((program, tokens))
    }

    /// Resolve the bot working directory against the registry root
    pub fn dir_path(&self, root: &Path) -> PathBuf {
        if self.dir.is_absolute() {
            self.dir.clone()
        } else {
            root.join(&self.dir)
        }
    }

    /// Resolve the bot log file against the registry root
    pub fn log_path(&self, root: &Path) -> PathBuf {
        self.dir_path(root).join(&self.log)
    }
}
