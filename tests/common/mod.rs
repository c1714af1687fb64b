use assert_cmd::Command;

pub fn botherd_cmd() -> Command {
    let mut cmd = Command::cargo_bin("botherd").unwrap();
    cmd.env_remove("BOTHERD_ROOT");
    cmd
}
