//! Start bot use case

use crate::application::resolve::{resolve, Resolution};
use crate::error::{BotherdError, Result};
use crate::infrastructure::{launcher, BotRepository, FileSystemRepository, ProcessTable};

/// Service for launching bots detached with log capture
pub struct StartService {
    repository: FileSystemRepository,
}

impl StartService {
    /// Create a new start service
    pub fn new(repository: FileSystemRepository) -> Self {
        StartService { repository }
    }

    /// Start one bot. Returns the PID of the launched process.
    pub fn execute(&self, name: &str) -> Result<u32> {
        // 1. Load config and resolve the bot spec
        let config = self.repository.load_config()?;
        let spec = config.bot(name)?;

        // 2. Refuse when already running; clean a stale pidfile silently
        let table = ProcessTable::snapshot();
        match resolve(&self.repository, &table, name, spec)? {
            Resolution::Running(info) => {
                return Err(BotherdError::AlreadyRunning {
                    name: name.to_string(),
                    pid: info.pid,
                });
            }
            Resolution::StalePidfile(_) => {
                self.repository.remove_pid(name)?;
            }
            Resolution::NotRunning => {}
        }

        // 3. The working directory must exist before launch
        let dir = self.repository.bot_dir(spec);
        if !dir.is_dir() {
            return Err(BotherdError::Config(format!(
                "Bot directory does not exist: {}",
                dir.display()
            )));
        }

        // 4. Spawn detached with output appended to the log file
        let (program, args) = spec.program_and_args()?;
        let log_path = self.repository.log_path(spec);
        let pid = launcher::spawn_detached(&program, &args, &dir, &log_path)?;

        // 5. Record the pidfile only after a successful spawn
        self.repository.write_pid(name, pid)?;

        Ok(pid)
    }

    /// Start every registered bot, skipping the ones already running.
    /// Returns (name, PID) for each bot launched.
    pub fn execute_all(&self) -> Result<Vec<(String, u32)>> {
        let config = self.repository.load_config()?;
        let mut launched = Vec::new();

        for name in config.bots.keys() {
            match self.execute(name) {
                Ok(pid) => launched.push((name.clone(), pid)),
                Err(BotherdError::AlreadyRunning { name, pid }) => {
                    println!("Bot '{}' already running (PID {}), skipping", name, pid);
                }
                Err(e) => return Err(e),
            }
        }

        Ok(launched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RegistryService;
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
    fn test_start_unknown_bot_fails() {
        let (_temp, repo) = setup();
        let service = StartService::new(repo);

        assert!(matches!(
            service.execute("ghost"),
            Err(BotherdError::UnknownBot(_))
        ));
    }

    #[test]
    fn test_start_missing_dir_fails() {
        let (temp, repo) = setup();
        RegistryService::new(repo.clone())
            .add("alpha", PathBuf::from("bot-a"), None, None)
            .unwrap();
        std::fs::remove_dir(temp.path().join("bot-a")).unwrap();

        let service = StartService::new(repo.clone());
        assert!(matches!(
            service.execute("alpha"),
            Err(BotherdError::Config(_))
        ));
        // No pidfile is left behind for a failed launch
        assert!(!repo.pid_path("alpha").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_start_stop_round_trip() {
        let (_temp, repo) = setup();
        RegistryService::new(repo.clone())
            .add(
                "alpha",
                PathBuf::from("bot-a"),
                Some("sleep 300".to_string()),
                None,
            )
            .unwrap();

        let service = StartService::new(repo.clone());
        let pid = service.execute("alpha").unwrap();
        assert_eq!(repo.read_pid("alpha").unwrap(), Some(pid));

        // A second start refuses
        match service.execute("alpha") {
            Err(BotherdError::AlreadyRunning { pid: running, .. }) => {
                assert_eq!(running, pid)
            }
            other => panic!("Expected AlreadyRunning, got {:?}", other),
        }

        // Clean up the child
        ProcessTable::snapshot().force_kill(pid).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_start_cleans_stale_pidfile() {
        let (_temp, repo) = setup();
        RegistryService::new(repo.clone())
            .add(
                "alpha",
                PathBuf::from("bot-a"),
                Some("sleep 300".to_string()),
                None,
            )
            .unwrap();
        repo.write_pid("alpha", u32::MAX - 7).unwrap();

        let service = StartService::new(repo.clone());
        let pid = service.execute("alpha").unwrap();
        assert_eq!(repo.read_pid("alpha").unwrap(), Some(pid));

        ProcessTable::snapshot().force_kill(pid).unwrap();
    }
}
