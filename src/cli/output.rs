//! Output formatting utilities

use crate::application::{BotState, BotStatus};
use crate::domain::{BotSpec, ProcessInfo};

/// Render seconds of uptime compactly: 42s, 3m12s, 2h05m, 3d14h
pub fn format_uptime(secs: u64) -> String {
    const MINUTE: u64 = 60;
    const HOUR: u64 = 60 * MINUTE;
    const DAY: u64 = 24 * HOUR;

    if secs < MINUTE {
        format!("{}s", secs)
    } else if secs < HOUR {
        format!("{}m{:02}s", secs / MINUTE, secs % MINUTE)
    } else if secs < DAY {
        format!("{}h{:02}m", secs / HOUR, (secs % HOUR) / MINUTE)
    } else {
        format!("{}d{:02}h", secs / DAY, (secs % DAY) / HOUR)
    }
}

/// Format the registered bot table for display
pub fn format_bot_list(bots: &[(String, BotSpec)]) -> String {
    if bots.is_empty() {
        return "No bots registered".to_string();
    }

    let mut output = String::new();
    for (name, spec) in bots {
        output.push_str(&format!(
            "{:<12} dir={} command={:?} log={}\n",
            name,
            spec.dir.display(),
            spec.command,
            spec.log
        ));
    }
    output
}

/// Format bot statuses for display
pub fn format_status_list(statuses: &[BotStatus]) -> String {
    if statuses.is_empty() {
        return "No bots registered".to_string();
    }

    let mut output = String::new();
    for status in statuses {
        match &status.state {
            BotState::Running {
                pid,
                uptime_secs,
                cwd,
            } => {
                let cwd = cwd
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "?".to_string());
                output.push_str(&format!(
                    "{:<12} running  pid={:<8} up={:<8} cwd={}\n",
                    status.name,
                    pid,
                    format_uptime(*uptime_secs),
                    cwd
                ));
            }
            BotState::Stopped { stale_pidfile } => {
                if *stale_pidfile {
                    output.push_str(&format!("{:<12} stopped  (stale pidfile)\n", status.name));
                } else {
                    output.push_str(&format!("{:<12} stopped\n", status.name));
                }
            }
        }
    }
    output
}

/// Format a process enumeration for display
pub fn format_process_list(processes: &[ProcessInfo]) -> String {
    if processes.is_empty() {
        return "No matching processes".to_string();
    }

    let mut output = String::new();
    for p in processes {
        let cwd = p
            .cwd
            .as_ref()
            .map(|c| c.display().to_string())
            .unwrap_or_else(|| "?".to_string());
        output.push_str(&format!(
            "{:<8} up={:<8} cwd={:<32} {}\n",
            p.pid,
            format_uptime(p.run_time_secs),
            cwd,
            p.cmdline()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0), "0s");
        assert_eq!(format_uptime(42), "42s");
        assert_eq!(format_uptime(192), "3m12s");
        assert_eq!(format_uptime(2 * 3600 + 5 * 60), "2h05m");
        assert_eq!(format_uptime(3 * 86400 + 14 * 3600), "3d14h");
    }

    #[test]
    fn test_format_empty_bot_list() {
        assert_eq!(format_bot_list(&[]), "No bots registered");
    }

    #[test]
    fn test_format_bot_list() {
        let bots = vec![("alpha".to_string(), BotSpec::new(PathBuf::from("bot-a")))];
        let output = format_bot_list(&bots);
        assert!(output.contains("alpha"));
        assert!(output.contains("dir=bot-a"));
        assert!(output.contains("python3 main.py"));
    }

    #[test]
    fn test_format_status_running() {
        let statuses = vec![BotStatus {
            name: "alpha".to_string(),
            state: BotState::Running {
                pid: 4321,
                uptime_secs: 192,
                cwd: Some(PathBuf::from("/srv/bot-a")),
            },
        }];
        let output = format_status_list(&statuses);
        assert!(output.contains("running"));
        assert!(output.contains("pid=4321"));
        assert!(output.contains("up=3m12s"));
        assert!(output.contains("cwd=/srv/bot-a"));
    }

    #[test]
    fn test_format_status_stopped_and_stale() {
        let statuses = vec![
            BotStatus {
                name: "alpha".to_string(),
                state: BotState::Stopped {
                    stale_pidfile: false,
                },
            },
            BotStatus {
                name: "beta".to_string(),
                state: BotState::Stopped {
                    stale_pidfile: true,
                },
            },
        ];
        let output = format_status_list(&statuses);
        assert!(output.contains("alpha"));
        assert!(output.contains("stopped"));
        assert!(output.contains("beta"));
        assert!(output.contains("stale pidfile"));
    }

    #[test]
    fn test_format_process_list() {
        let processes = vec![ProcessInfo::new(
            77,
            vec!["python3".to_string(), "main.py".to_string()],
            Some(PathBuf::from("/srv/bot-a")),
            30,
        )];
        let output = format_process_list(&processes);
        assert!(output.contains("77"));
        assert!(output.contains("python3 main.py"));
        assert!(output.contains("/srv/bot-a"));
    }

    #[test]
    fn test_format_process_list_unknown_cwd() {
        let processes = vec![ProcessInfo::new(
            77,
            vec!["python3".to_string()],
            None,
            30,
        )];
        let output = format_process_list(&processes);
        assert!(output.contains("cwd=?"));
    }

    #[test]
    fn test_format_empty_process_list() {
        assert_eq!(format_process_list(&[]), "No matching processes");
    }
}
