//! Stop bot use case

use crate::application::resolve::{resolve, Resolution};
use crate::error::{BotherdError, Result};
use crate::infrastructure::process_table::wait_for_exit;
use crate::infrastructure::{BotRepository, FileSystemRepository, ProcessTable};
use std::time::Duration;

/// Outcome of a stop request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopOutcome {
    /// The process exited within the grace window
    Stopped { pid: u32 },
    /// SIGTERM was delivered but the process survived the grace window
    Survived { pid: u32, grace_secs: u64 },
}

/// Service for terminating bots
pub struct StopService {
    repository: FileSystemRepository,
}

impl StopService {
    /// Create a new stop service
    pub fn new(repository: FileSystemRepository) -> Self {
        StopService { repository }
    }

    /// Stop one bot by name. SIGTERM by default, SIGKILL with `force`.
    pub fn execute(&self, name: &str, force: bool) -> Result<StopOutcome> {
        // 1. Load config and resolve the live process
        let config = self.repository.load_config()?;
        let spec = config.bot(name)?;

        let table = ProcessTable::snapshot();
        let pid = match resolve(&self.repository, &table, name, spec)? {
            Resolution::Running(info) => info.pid,
            Resolution::StalePidfile(_) => {
                self.repository.remove_pid(name)?;
                return Err(BotherdError::NotRunning(name.to_string()));
            }
            Resolution::NotRunning => {
                return Err(BotherdError::NotRunning(name.to_string()));
            }
        };

        // 2. Signal and wait out the grace window
        let outcome = signal_and_wait(&table, pid, force, config.grace_secs)?;

        // 3. Drop the pidfile once the process is confirmed gone
        if matches!(outcome, StopOutcome::Stopped { .. }) {
            self.repository.remove_pid(name)?;
        }

        Ok(outcome)
    }

    /// Stop an explicit PID, bypassing the registry. Still refuses to
    /// signal PID 1 or botherd itself.
    pub fn execute_pid(&self, pid: u32, force: bool) -> Result<StopOutcome> {
        if pid <= 1 || Some(pid) == ProcessTable::own_pid() {
            return Err(BotherdError::Signal(format!(
                "Refusing to signal PID {}",
                pid
            )));
        }

        let config = self.repository.load_config()?;
        let table = ProcessTable::snapshot();

        if !table.alive(pid) {
            return Err(BotherdError::Signal(format!("No such process: {}", pid)));
        }

        signal_and_wait(&table, pid, force, config.grace_secs)
    }

    /// Stop every running bot. Returns (name, outcome) for each bot that
    /// was actually signalled; bots not running are skipped.
    pub fn execute_all(&self, force: bool) -> Result<Vec<(String, StopOutcome)>> {
        let config = self.repository.load_config()?;
        let mut outcomes = Vec::new();

        for name in config.bots.keys() {
            match self.execute(name, force) {
                Ok(outcome) => outcomes.push((name.clone(), outcome)),
                Err(BotherdError::NotRunning(_)) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(outcomes)
    }
}

fn signal_and_wait(
    table: &ProcessTable,
    pid: u32,
    force: bool,
    grace_secs: u64,
) -> Result<StopOutcome> {
    if force {
        table.force_kill(pid)?;
    } else {
        table.terminate(pid)?;
    }

    if wait_for_exit(pid, Duration::from_secs(grace_secs)) {
        Ok(StopOutcome::Stopped { pid })
    } else {
        Ok(StopOutcome::Survived { pid, grace_secs })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{RegistryService, StartService};
    use crate::infrastructure::Config;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo.save_config(&Config::new()).unwrap();
        (temp, repo)
    }

    #[test]
    fn test_stop_not_running_fails() {
        let (_temp, repo) = setup();
        RegistryService::new(repo.clone())
            .add("alpha", PathBuf::from("bot-a"), None, None)
            .unwrap();

        let service = StopService::new(repo);
        assert!(matches!(
            service.execute("alpha", false),
            Err(BotherdError::NotRunning(_))
        ));
    }

    #[test]
    fn test_stop_stale_pidfile_cleans_up() {
        let (_temp, repo) = setup();
        RegistryService::new(repo.clone())
            .add("alpha", PathBuf::from("bot-a"), None, None)
            .unwrap();
        repo.write_pid("alpha", u32::MAX - 7).unwrap();

        let service = StopService::new(repo.clone());
        assert!(matches!(
            service.execute("alpha", false),
            Err(BotherdError::NotRunning(_))
        ));
        assert!(!repo.pid_path("alpha").exists());
    }

    #[test]
    fn test_stop_pid_refuses_init_and_self() {
        let (_temp, repo) = setup();
        let service = StopService::new(repo);

        assert!(service.execute_pid(1, false).is_err());
        let own = ProcessTable::own_pid().unwrap();
        assert!(service.execute_pid(own, false).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_running_bot() {
        let (_temp, repo) = setup();
        RegistryService::new(repo.clone())
            .add(
                "alpha",
                PathBuf::from("bot-a"),
                Some("sleep 300".to_string()),
                None,
            )
            .unwrap();

        let pid = StartService::new(repo.clone()).execute("alpha").unwrap();

        let service = StopService::new(repo.clone());
        let outcome = service.execute("alpha", false).unwrap();

        assert_eq!(outcome, StopOutcome::Stopped { pid });
        assert!(!repo.pid_path("alpha").exists());
    }
}
