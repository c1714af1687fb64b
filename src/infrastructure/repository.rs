//! File system repository for the bot registry

use crate::domain::BotSpec;
use crate::error::{BotherdError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for registry operations
pub trait BotRepository {
    /// Get the root directory of this registry
    fn root(&self) -> &Path;

    /// Load configuration from .botherd/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .botherd/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .botherd directory exists
    fn is_initialized(&self) -> bool;

    /// Create .botherd directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of BotRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover registry root by walking up from current directory.
    /// First checks BOTHERD_ROOT environment variable, then falls back to
    /// discovery.
    pub fn discover() -> Result<Self> {
        // 1. Check BOTHERD_ROOT environment variable first
        if let Ok(root_path) = std::env::var("BOTHERD_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_botherd_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            } else {
                return Err(BotherdError::Config(format!(
                    "BOTHERD_ROOT is set to '{}' but no .botherd directory found. \
                    Run 'botherd init' in that directory or unset BOTHERD_ROOT.",
                    path.display()
                )));
            }
        }

        // 2. Fall back to walking up from current directory
        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover registry root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_botherd_dir(&current) {
                return Ok(FileSystemRepository::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(BotherdError::NotBotherdDirectory(start.to_path_buf()));
                }
            }
        }
    }

    /// Check if a path contains a .botherd directory
    fn has_botherd_dir(path: &Path) -> bool {
        path.join(".botherd").is_dir()
    }
}

impl BotRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_botherd_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let botherd_dir = self.root.join(".botherd");

        if botherd_dir.exists() {
            return Err(BotherdError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&botherd_dir)?;
        fs::create_dir(botherd_dir.join("run"))?;
        Ok(())
    }
}

// Pidfile and bot-path operations (not part of trait - filesystem-specific)
impl FileSystemRepository {
    /// Path of the pidfile for a bot
    pub fn pid_path(&self, name: &str) -> PathBuf {
        self.root.join(".botherd").join("run").join(format!("{}.pid", name))
    }

    /// Read a bot's pidfile. Returns None when no pidfile exists.
    /// A pidfile with unparseable content is a configuration error.
    pub fn read_pid(&self, name: &str) -> Result<Option<u32>> {
        let path = self.pid_path(name);

        if !path.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&path)?;
        let pid = contents.trim().parse::<u32>().map_err(|_| {
            BotherdError::Config(format!(
                "Corrupt pidfile {}: '{}'",
                path.display(),
                contents.trim()
            ))
        })?;

        Ok(Some(pid))
    }

    /// Write a bot's pidfile
    pub fn write_pid(&self, name: &str, pid: u32) -> Result<()> {
        let path = self.pid_path(name);

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&path, format!("{}\n", pid))?;
        Ok(())
    }

    /// Remove a bot's pidfile if present
    pub fn remove_pid(&self, name: &str) -> Result<()> {
        let path = self.pid_path(name);

        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }

    /// The bot working directory resolved against the registry root
    pub fn bot_dir(&self, spec: &BotSpec) -> PathBuf {
        spec.dir_path(&self.root)
    }

    /// The bot working directory, canonicalized for comparison against
    /// live process working directories. None when the directory does
    /// not exist.
    pub fn canonical_bot_dir(&self, spec: &BotSpec) -> Option<PathBuf> {
        self.bot_dir(spec).canonicalize().ok()
    }

    /// The bot log file resolved against the registry root
    pub fn log_path(&self, spec: &BotSpec) -> PathBuf {
        spec.log_path(&self.root)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_run_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();

        assert!(repo.is_initialized());
        assert!(temp.path().join(".botherd/run").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        repo.initialize().unwrap();
        assert!(repo.initialize().is_err());
    }

    #[test]
    fn test_discover_from_nested_dir() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        let nested = temp.path().join("bot-a/deep");
        fs::create_dir_all(&nested).unwrap();

        let discovered = FileSystemRepository::discover_from(&nested).unwrap();
        assert_eq!(discovered.root, temp.path());
    }

    #[test]
    fn test_discover_from_uninitialized_fails() {
        let temp = TempDir::new().unwrap();

        let result = FileSystemRepository::discover_from(temp.path());
        assert!(matches!(
            result,
            Err(BotherdError::NotBotherdDirectory(_))
        ));
    }

    #[test]
    fn test_pidfile_round_trip() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        assert_eq!(repo.read_pid("alpha").unwrap(), None);

        repo.write_pid("alpha", 4321).unwrap();
        assert_eq!(repo.read_pid("alpha").unwrap(), Some(4321));

        repo.remove_pid("alpha").unwrap();
        assert_eq!(repo.read_pid("alpha").unwrap(), None);

        // Removing again is fine
        repo.remove_pid("alpha").unwrap();
    }

    #[test]
    fn test_corrupt_pidfile() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();

        fs::write(repo.pid_path("alpha"), "not-a-pid").unwrap();

        assert!(repo.read_pid("alpha").is_err());
    }

    #[test]
    fn test_canonical_bot_dir_missing() {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());

        let spec = BotSpec::new(PathBuf::from("does-not-exist"));
        assert!(repo.canonical_bot_dir(&spec).is_none());
    }
}
