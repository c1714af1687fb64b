//! Typed wrappers over the `docker compose` workflow
//!
//! Argument vectors are built by pure functions so they can be verified
//! without a container runtime; the runner shells out to `docker` in the
//! registry root with inherited stdio.

use crate::error::{BotherdError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// `docker compose build [service]`
pub fn build_args(service: Option<&str>) -> Vec<String> {
    let mut args = vec!["compose".to_string(), "build".to_string()];
    if let Some(s) = service {
        args.push(s.to_string());
    }
    args
}

/// `docker compose up -d [service]`
pub fn up_args(service: Option<&str>) -> Vec<String> {
    let mut args = vec!["compose".to_string(), "up".to_string(), "-d".to_string()];
    if let Some(s) = service {
        args.push(s.to_string());
    }
    args
}

/// `docker compose logs [-f] [service]`
pub fn logs_args(service: Option<&str>, follow: bool) -> Vec<String> {
    let mut args = vec!["compose".to_string(), "logs".to_string()];
    if follow {
        args.push("-f".to_string());
    }
    if let Some(s) = service {
        args.push(s.to_string());
    }
    args
}

/// `docker compose down [--volumes] [--rmi all] [--remove-orphans]`
pub fn down_args(volumes: bool, rmi: bool, remove_orphans: bool) -> Vec<String> {
    let mut args = vec!["compose".to_string(), "down".to_string()];
    if volumes {
        args.push("--volumes".to_string());
    }
    if rmi {
        args.push("--rmi".to_string());
        args.push("all".to_string());
    }
    if remove_orphans {
        args.push("--remove-orphans".to_string());
    }
    args
}

/// `docker system prune [-a] -f`
pub fn prune_args(all: bool) -> Vec<String> {
    let mut args = vec!["system".to_string(), "prune".to_string()];
    if all {
        args.push("-a".to_string());
    }
    args.push("-f".to_string());
    args
}

/// Runs docker commands in the registry root
pub struct ComposeRunner {
    cwd: PathBuf,
}

impl ComposeRunner {
    /// Create a runner executing in the given directory
    pub fn new(cwd: &Path) -> Self {
        ComposeRunner {
            cwd: cwd.to_path_buf(),
        }
    }

    /// Run `docker` with the given arguments, stdio inherited so build
    /// and log output stream straight to the operator's terminal.
    pub fn run(&self, args: &[String]) -> Result<()> {
        let status = Command::new("docker")
            .args(args)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| {
                BotherdError::Compose(format!("Could not run docker: {}", e))
            })?;

        if status.success() {
            Ok(())
        } else {
            Err(BotherdError::Compose(format!(
                "docker {} exited with {}",
                args.join(" "),
                status
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_args() {
        assert_eq!(build_args(None), vec!["compose", "build"]);
        assert_eq!(build_args(Some("bot-a")), vec!["compose", "build", "bot-a"]);
    }

    #[test]
    fn test_up_args_always_detached() {
        assert_eq!(up_args(None), vec!["compose", "up", "-d"]);
        assert_eq!(up_args(Some("bot-a")), vec!["compose", "up", "-d", "bot-a"]);
    }

    #[test]
    fn test_logs_args() {
        assert_eq!(logs_args(None, false), vec!["compose", "logs"]);
        assert_eq!(
            logs_args(Some("bot-a"), true),
            vec!["compose", "logs", "-f", "bot-a"]
        );
    }

    #[test]
    fn test_down_args_plain() {
        assert_eq!(down_args(false, false, false), vec!["compose", "down"]);
    }

    #[test]
    fn test_down_args_full_teardown() {
        assert_eq!(
            down_args(true, true, true),
            vec![
                "compose",
                "down",
                "--volumes",
                "--rmi",
                "all",
                "--remove-orphans"
            ]
        );
    }

    #[test]
    fn test_prune_args() {
        assert_eq!(prune_args(false), vec!["system", "prune", "-f"]);
        assert_eq!(prune_args(true), vec!["system", "prune", "-a", "-f"]);
    }
}
