//! Integration tests for the lintweave binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(options: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("lintweave.yml"), options).unwrap();
    temp
}

fn lintweave(temp: &TempDir) -> Command {
    let mut cmd = Command::new(cargo_bin("lintweave"));
    cmd.current_dir(temp.path()).env("NO_COLOR", "1");
    cmd
}

#[test]
fn cli_no_args_composes() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("gitignore: false\n");
    lintweave(&temp)
        .assert()
        .success()
        .stdout(predicate::str::contains("lintweave/ignores"))
        .stdout(predicate::str::contains("lintweave/javascript/rules"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lintweave"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_compose_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("gitignore: false\nrules: { eqeqeq: error }\n");
    let output = lintweave(&temp)
        .args(["compose", "--format", "json"])
        .output()?;

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(parsed[2]["rules"]["eqeqeq"], "error");
    Ok(())
}

#[test]
fn cli_check_reports_missing_companion() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("gitignore: false\nformatters: true\n");
    fs::write(temp.path().join("yarn.lock"), "")?;
    lintweave(&temp)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("eslint-plugin-format"))
        .stdout(predicate::str::contains("yarn add -D eslint-plugin-format"));
    Ok(())
}

#[test]
fn cli_check_passes_without_degraded_features() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("gitignore: false\n");
    lintweave(&temp)
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("No problems found"));
    Ok(())
}

#[test]
fn cli_detect_without_agent_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    lintweave(&temp)
        .arg("detect")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No package manager detected"));
    Ok(())
}

#[test]
fn cli_invalid_options_exit_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("unknown_key: true\n");
    lintweave(&temp)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse options"));
    Ok(())
}

#[test]
fn cli_quiet_hides_status() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("gitignore: false\n");
    lintweave(&temp)
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::contains("Composed").not());
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("lintweave"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("lintweave"));
    Ok(())
}

#[test]
fn cli_relative_project_detects_from_workspace_root() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("yarn.lock"), "")?;
    let nested = temp.path().join("packages").join("web");
    fs::create_dir_all(&nested)?;

    let mut cmd = Command::new(cargo_bin("lintweave"));
    cmd.current_dir(&nested)
        .env("NO_COLOR", "1")
        .args(["--project", ".", "detect"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Agent:   yarn"));
    Ok(())
}
