//! Binary-level tests for the CLI surface.

use assert_cmd::Command;
use predicates::prelude::*;

fn vtube() -> Command {
    Command::cargo_bin("vtube").expect("binary builds")
}

#[test]
fn version_flag_prints_version() {
    vtube()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn help_lists_subcommands() {
    vtube()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("watch"))
        .stdout(predicate::str::contains("library"))
        .stdout(predicate::str::contains("search"));
}

#[test]
fn config_path_prints_a_path() {
    vtube()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_emit_shell_script() {
    vtube()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("vtube"));
}

#[test]
fn watch_unknown_id_fails_with_message() {
    vtube()
        .args(["watch", "99999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("video 99999 not found"));
}

#[test]
fn home_without_a_tty_fails_cleanly() {
    // Test harness stdout is not a terminal, so the TTY guard trips
    vtube()
        .assert()
        .failure()
        .stderr(predicate::str::contains("interactive terminal"));
}

#[test]
fn invalid_subcommand_is_rejected() {
    vtube().arg("frobnicate").assert().failure();
}
