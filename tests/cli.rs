use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn rentline_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_rentline"))
}

#[test]
fn test_cli_help() {
    rentline_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("car rental"))
        .stdout(predicate::str::contains("--endpoint"));
}

#[test]
fn test_cli_version() {
    rentline_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rentline"));
}

#[test]
fn test_config_where() {
    rentline_cmd().args(["config", "where"]).assert().success();
}

#[test]
fn test_config_init_in_isolated_home() {
    let home = tempfile::tempdir().expect("temp dir");

    rentline_cmd()
        .args(["config", "init"])
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("APPDATA", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config file"));
}

#[test]
fn test_invalid_subcommand() {
    rentline_cmd().arg("invalid-command").assert().failure();
}
