#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

fn pgdesk() -> Command {
    Command::cargo_bin("pgdesk").unwrap()
}

#[test]
fn no_args_prints_help_and_fails() {
    pgdesk()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn help_lists_the_resource_commands() {
    pgdesk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rooms"))
        .stdout(predicate::str::contains("tenants"))
        .stdout(predicate::str::contains("tickets"))
        .stdout(predicate::str::contains("notices"))
        .stdout(predicate::str::contains("auth"));
}

#[test]
fn unknown_subcommand_is_a_usage_error() {
    pgdesk().arg("bogus").assert().failure().code(2);
}

#[test]
fn ticket_status_spelling_is_validated() {
    pgdesk()
        .args(["tickets", "set-status", "1", "escalated", "-g", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("in-progress"));
}

#[test]
fn config_path_prints_a_toml_path() {
    pgdesk()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    pgdesk()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pgdesk"));
}
