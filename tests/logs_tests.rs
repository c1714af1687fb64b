//! Integration tests for log tailing

use predicates::prelude::*;
use std::fs;
use std::time::Duration;
use tempfile::TempDir;

mod common;
use common::botherd_cmd;

fn init_registry() -> TempDir {
    let temp = TempDir::new().unwrap();
    botherd_cmd().arg("init").arg(temp.path()).assert().success();
    temp
}

#[test]
fn test_logs_tails_existing_file() {
    let temp = init_registry();

    botherd_cmd()
        .current_dir(temp.path())
        .args(["add", "alpha", "--dir", "bot-a"])
        .assert()
        .success();

    fs::write(
        temp.path().join("bot-a/output.log"),
        "line 1\nline 2\nline 3\nline 4\n",
    )
    .unwrap();

    botherd_cmd()
        .current_dir(temp.path())
        .args(["logs", "alpha", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("line 3"))
        .stdout(predicate::str::contains("line 4"))
        .stdout(predicate::str::contains("line 1").not());
}

#[test]
fn test_logs_missing_file_fails() {
    let temp = init_registry();

    botherd_cmd()
        .current_dir(temp.path())
        .args(["add", "alpha", "--dir", "bot-a"])
        .assert()
        .success();

    botherd_cmd()
        .current_dir(temp.path())
        .args(["logs", "alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Log file not found"))
        .stderr(predicate::str::contains("output.log"));
}

#[test]
fn test_logs_unknown_bot_exit_code() {
    let temp = init_registry();

    botherd_cmd()
        .current_dir(temp.path())
        .args(["logs", "ghost"])
        .assert()
        .failure()
        .code(3);
}

#[cfg(unix)]
#[test]
fn test_started_bot_output_lands_in_log() {
    let temp = init_registry();

    // A stand-in bot that prints a line and then idles
    botherd_cmd()
        .current_dir(temp.path())
        .args(["add", "alpha", "--dir", "bot-a"])
        .assert()
        .success();
    fs::write(
        temp.path().join("bot-a/bot.sh"),
        "echo hello-from-bot\nsleep 300\n",
    )
    .unwrap();

    // Point the bot at the script
    let config_path = temp.path().join(".botherd/config.toml");
    let config = fs::read_to_string(&config_path).unwrap();
    fs::write(
        &config_path,
        config.replace("python3 main.py", "sh bot.sh"),
    )
    .unwrap();

    botherd_cmd()
        .current_dir(temp.path())
        .args(["start", "alpha"])
        .assert()
        .success();

    // Wait for the detached child to write its line
    let log_path = temp.path().join("bot-a/output.log");
    let mut seen = false;
    for _ in 0..50 {
        if let Ok(contents) = fs::read_to_string(&log_path) {
            if contents.contains("hello-from-bot") {
                seen = true;
                break;
            }
        }
        std::thread::sleep(Duration::from_millis(100));
    }
    assert!(seen, "bot output never reached the log file");

    botherd_cmd()
        .current_dir(temp.path())
        .args(["logs", "alpha"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hello-from-bot"));

    botherd_cmd()
        .current_dir(temp.path())
        .args(["stop", "alpha", "--force"])
        .assert()
        .success();
}
