//! Status reporting use case

use crate::application::resolve::{resolve, Resolution};
use crate::error::Result;
use crate::infrastructure::{BotRepository, FileSystemRepository, ProcessTable};
use std::path::PathBuf;

/// Live state of one bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BotState {
    Running {
        pid: u32,
        uptime_secs: u64,
        /// Working directory read back from the live process
        cwd: Option<PathBuf>,
    },
    Stopped {
        /// A pidfile was found pointing at a dead or reused PID
        stale_pidfile: bool,
    },
}

/// Status line for one bot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotStatus {
    pub name: String,
    pub state: BotState,
}

/// Service for reporting bot states. Read-only: never signals and never
/// touches pidfiles.
pub struct StatusService {
    repository: FileSystemRepository,
}

impl StatusService {
    /// Create a new status service
    pub fn new(repository: FileSystemRepository) -> Self {
        StatusService { repository }
    }

    /// Status of a single bot
    pub fn execute(&self, name: &str) -> Result<BotStatus> {
        let config = self.repository.load_config()?;
        let spec = config.bot(name)?;

        let table = ProcessTable::snapshot();
        self.status_of(&table, name, spec)
    }

    /// Status of every registered bot, sorted by name
    pub fn execute_all(&self) -> Result<Vec<BotStatus>> {
        let config = self.repository.load_config()?;
        let table = ProcessTable::snapshot();

        let mut statuses = Vec::new();
        for (name, spec) in &config.bots {
            statuses.push(self.status_of(&table, name, spec)?);
        }

        Ok(statuses)
    }

    fn status_of(
        &self,
        table: &ProcessTable,
        name: &str,
        spec: &crate::domain::BotSpec,
    ) -> Result<BotStatus> {
        let state = match resolve(&self.repository, table, name, spec)? {
            Resolution::Running(info) => BotState::Running {
                pid: info.pid,
                uptime_secs: info.run_time_secs,
                cwd: info.cwd,
            },
            Resolution::StalePidfile(_) => BotState::Stopped {
                stale_pidfile: true,
            },
            Resolution::NotRunning => BotState::Stopped {
                stale_pidfile: false,
            },
        };

        Ok(BotStatus {
            name: name.to_string(),
            state,
        })
    }
}
