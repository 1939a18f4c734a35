use assert_cmd::Command;
use std::path::Path;

pub fn ultistats_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ultistats").unwrap();
    cmd.env_remove("ULTISTATS_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Run a command inside `dir`, assert success and return stdout
#[allow(dead_code)]
pub fn run_ok(dir: &Path, args: &[&str]) -> String {
    let output = ultistats_cmd()
        .current_dir(dir)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    String::from_utf8(output).unwrap()
}

/// Id printed as the last word of a "Created ..."/"Started ..." line
#[allow(dead_code)]
pub fn printed_id(stdout: &str) -> String {
    stdout
        .trim()
        .rsplit(' ')
        .next()
        .unwrap()
        .trim_matches(|c| c == '(' || c == ')')
        .to_string()
}

/// Initialize a workspace in `dir`
#[allow(dead_code)]
pub fn init_workspace(dir: &Path) {
    ultistats_cmd().arg("init").arg(dir).assert().success();
}
