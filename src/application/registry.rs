//! Bot registration use cases

use crate::application::resolve::{resolve, Resolution};
use crate::domain::BotSpec;
use crate::error::{BotherdError, Result};
use crate::infrastructure::{BotRepository, FileSystemRepository, ProcessTable};
use std::fs;
use std::path::PathBuf;

/// Service for registering and unregistering bots
pub struct RegistryService {
    repository: FileSystemRepository,
}

impl RegistryService {
    /// Create a new registry service
    pub fn new(repository: FileSystemRepository) -> Self {
        RegistryService { repository }
    }

    /// Register a bot. Creates its working directory when missing.
    pub fn add(
        &self,
        name: &str,
        dir: PathBuf,
        command: Option<String>,
        log: Option<String>,
    ) -> Result<BotSpec> {
        let mut config = self.repository.load_config()?;

        if config.bots.contains_key(name) {
            return Err(BotherdError::Config(format!(
                "Bot '{}' is already registered; remove it first with 'botherd remove {}'",
                name, name
            )));
        }

        let mut spec = BotSpec::new(dir);
        if let Some(command) = command {
            spec.command = command;
        }
        if let Some(log) = log {
            spec.log = log;
        }

        // Reject empty commands at registration time, not at start
        spec.command_tokens()?;

        let bot_dir = self.repository.bot_dir(&spec);
        if !bot_dir.exists() {
            fs::create_dir_all(&bot_dir)?;
        }

        config.bots.insert(name.to_string(), spec.clone());
        self.repository.save_config(&config)?;

        Ok(spec)
    }

    /// Unregister a bot. Refuses while the bot is running; removes any
    /// stale pidfile.
    pub fn remove(&self, name: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;
        let spec = config.bot(name)?.clone();

        let table = ProcessTable::snapshot();
        if let Resolution::Running(info) = resolve(&self.repository, &table, name, &spec)? {
            return Err(BotherdError::AlreadyRunning {
                name: name.to_string(),
                pid: info.pid,
            });
        }

        self.repository.remove_pid(name)?;
        config.bots.remove(name);
        self.repository.save_config(&config)?;

        Ok(())
    }

    /// All registered bots, sorted by name
    pub fn list(&self) -> Result<Vec<(String, BotSpec)>> {
        let config = self.repository.load_config()?;
        Ok(config.bots.into_iter().collect())
    }
}
