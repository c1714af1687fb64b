//! Process enumeration use case
//!
//! The `pgrep -f` / `ps aux | grep` replacement: match a regex against
//! each process's full command line, and report the working directory so
//! same-named processes can be told apart.

use crate::domain::ProcessInfo;
use crate::error::Result;
use crate::infrastructure::ProcessTable;
use regex::Regex;

/// Enumerate processes whose command line matches `pattern`.
/// botherd itself is excluded from the snapshot.
pub fn ps(pattern: &str) -> Result<Vec<ProcessInfo>> {
    let regex = Regex::new(pattern)?;
    let table = ProcessTable::snapshot();

    let mut matches: Vec<ProcessInfo> = table
        .processes()
        .into_iter()
        .filter(|p| !p.argv.is_empty() && regex.is_match(&p.cmdline()))
        .collect();

    matches.sort_by_key(|p| p.pid);
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern() {
        assert!(ps("[unclosed").is_err());
    }

    #[test]
    fn test_no_match_for_nonsense_pattern() {
        let matches = ps("botherd-test-nonsense-pattern-9f3a1c").unwrap();
        assert!(matches.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_finds_spawned_process() {
        use crate::infrastructure::launcher;
        use tempfile::TempDir;

        let temp = TempDir::new().unwrap();
        let log = temp.path().join("output.log");
        // A sleep interval unlikely to collide with anything else running
        let pid = launcher::spawn_detached(
            "sleep",
            &["304167".to_string()],
            temp.path(),
            &log,
        )
        .unwrap();

        let matches = ps("sleep 304167").unwrap();
        assert!(matches.iter().any(|p| p.pid == pid));

        ProcessTable::snapshot().force_kill(pid).unwrap();
    }
}
