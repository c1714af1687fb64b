//! Error types for botherd

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the botherd application
#[derive(Debug, Error)]
pub enum BotherdError {
    #[error("Not a botherd directory: {0}")]
    NotBotherdDirectory(PathBuf),

    #[error("Unknown bot: {0}")]
    UnknownBot(String),

    #[error("Bot '{0}' is not running")]
    NotRunning(String),

    #[error("Bot '{name}' is already running (PID {pid})")]
    AlreadyRunning { name: String, pid: u32 },

    #[error("Multiple processes match bot '{name}': PIDs {pids:?}")]
    AmbiguousProcess { name: String, pids: Vec<u32> },

    #[error("Log file not found: {0}")]
    LogNotFound(PathBuf),

    #[error("Failed to spawn process: {0}")]
    Spawn(String),

    #[error("Failed to signal process: {0}")]
    Signal(String),

    #[error("Compose command failed: {0}")]
    Compose(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid process pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl BotherdError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BotherdError::NotBotherdDirectory(_) => 2,
            BotherdError::UnknownBot(_) => 3,
            BotherdError::NotRunning(_) => 4,
            BotherdError::AlreadyRunning { .. } => 5,
            BotherdError::AmbiguousProcess { .. } => 6,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BotherdError::NotBotherdDirectory(path) => {
                format!(
                    "Not a botherd directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'botherd init' in this directory to create a new registry\n\
                    • Navigate to an existing botherd directory\n\
                    • Set BOTHERD_ROOT environment variable to your registry path",
                    path.display()
                )
            }
            BotherdError::UnknownBot(name) => {
                format!(
                    "Unknown bot: '{}'\n\n\
                    Suggestions:\n\
                    • Use 'botherd list' to see registered bots\n\
                    • Register it first: botherd add {} --dir <dir>",
                    name, name
                )
            }
            BotherdError::NotRunning(name) => {
                format!(
                    "Bot '{}' is not running\n\n\
                    Suggestions:\n\
                    • Use 'botherd status' to see what is running\n\
                    • Start it: botherd start {}\n\
                    • A stale pidfile is cleaned up automatically on the next start",
                    name, name
                )
            }
            BotherdError::AlreadyRunning { name, pid } => {
                format!(
                    "Bot '{}' is already running (PID {})\n\n\
                    Suggestions:\n\
                    • Stop it first: botherd stop {}\n\
                    • Check its output: botherd logs {} -f",
                    name, pid, name, name
                )
            }
            BotherdError::AmbiguousProcess { name, pids } => {
                format!(
                    "Multiple processes match bot '{}': PIDs {:?}\n\n\
                    Suggestions:\n\
                    • Inspect candidates: botherd ps '{}'\n\
                    • Stop a specific one: botherd stop --pid <PID>\n\
                    • Working directories distinguish same-named bots; check them with 'botherd ps'",
                    name, pids, name
                )
            }
            BotherdError::LogNotFound(path) => {
                format!(
                    "Log file not found: {}\n\n\
                    Suggestions:\n\
                    • The log is created on first start: botherd start <name>\n\
                    • Check the configured log file name: botherd list",
                    path.display()
                )
            }
            BotherdError::Compose(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that 'docker' is installed and in PATH\n\
                    • Make sure a docker-compose.yml exists in the registry root\n\
                    • Inspect the container logs: botherd compose logs -f",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BotherdError
pub type Result<T> = std::result::Result<T, BotherdError>;
