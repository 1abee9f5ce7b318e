//! Integration tests for the `stackgen` binary.
//!
//! Only paths that never reach an external tool are exercised here: help,
//! completions, config init, dry-run previews and early validation failures.
//! Full creation runs live in the adapters crate with a scripted runner.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Binary isolated from the host: cwd in `dir`, no `.env`, no user config.
fn stackgen(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("stackgen").unwrap();
    cmd.current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env("HOME", dir)
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

fn entries(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn help_flag_succeeds() {
    let tmp = TempDir::new().unwrap();
    stackgen(tmp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--type"))
        .stdout(predicate::str::contains("--name"))
        .stdout(predicate::str::contains("--dry-run"));
}

#[test]
fn version_flag_succeeds() {
    let tmp = TempDir::new().unwrap();
    stackgen(tmp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_arguments_prints_help_and_fails() {
    let tmp = TempDir::new().unwrap();
    stackgen(tmp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn dry_run_previews_without_writing() {
    let tmp = TempDir::new().unwrap();
    stackgen(tmp.path())
        .args(["-t", "fullstack", "-n", "demo-app", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("demo-app/"))
        .stdout(predicate::str::contains("README.md"))
        .stdout(predicate::str::contains("CONTRIBUTING.md"))
        .stdout(predicate::str::contains("demo-app-frontend/"))
        .stdout(predicate::str::contains("demo-app-backend/"))
        .stdout(predicate::str::contains(".git/"));

    assert!(entries(tmp.path()).iter().all(|e| e != "demo-app"));
}

#[test]
fn no_color_env_accepts_any_value() {
    let tmp = TempDir::new().unwrap();
    for value in ["1", "true", "yes", "0", ""] {
        stackgen(tmp.path())
            .env("NO_COLOR", value)
            .args(["-t", "frontend", "-n", "web-ui", "--dry-run"])
            .assert()
            .success()
            .stdout(predicate::str::contains("web-ui/"))
            .stdout(predicate::str::contains("\x1b[").not());
    }
}

#[test]
fn dry_run_reports_stale_backup() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir(tmp.path().join("demo-app.bak")).unwrap();

    stackgen(tmp.path())
        .env("NO_COLOR", "1")
        .args(["-t", "frontend", "-n", "demo-app", "--dry-run"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("demo-app.bak"));

    assert_eq!(entries(tmp.path()), vec!["demo-app.bak"]);
}

#[test]
fn dry_run_honours_output_dir() {
    let tmp = TempDir::new().unwrap();
    let parent = tmp.path().join("workspace");
    fs::create_dir(&parent).unwrap();

    stackgen(tmp.path())
        .args(["-t", "frontend", "-n", "web-ui", "-d", "-o"])
        .arg(&parent)
        .assert()
        .success()
        .stdout(predicate::str::contains("web-ui-frontend/"))
        .stdout(predicate::str::contains("web-ui-backend/").not());

    assert!(entries(&parent).is_empty());
}

#[test]
fn dry_run_json_output() {
    let tmp = TempDir::new().unwrap();
    let out = stackgen(tmp.path())
        .args(["-t", "backend", "-n", "api-svc", "-d", "--output-format", "json"])
        .output()
        .unwrap();
    assert!(out.status.success());

    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["status"], "planned");
    assert_eq!(value["type"], "backend");
    assert!(
        value["entries"]
            .as_array()
            .unwrap()
            .iter()
            .any(|e| e["path"] == "api-svc-backend/")
    );
}

#[test]
fn completions_for_bash() {
    let tmp = TempDir::new().unwrap();
    stackgen(tmp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("stackgen"));
}

#[test]
fn init_writes_default_config() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("conf/stackgen.toml");

    stackgen(tmp.path())
        .arg("init")
        .arg("-c")
        .arg(&config)
        .assert()
        .success();

    let written = fs::read_to_string(&config).unwrap();
    assert!(written.contains("[requirements]"));
    assert!(written.contains("[backend]"));
    assert!(written.contains("https://start.spring.io"));
}

#[test]
fn init_keeps_existing_config_without_force() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("stackgen.toml");
    fs::write(&config, "# mine\n").unwrap();

    stackgen(tmp.path())
        .args(["init", "-c"])
        .arg(&config)
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&config).unwrap(), "# mine\n");

    stackgen(tmp.path())
        .args(["init", "--force", "-c"])
        .arg(&config)
        .assert()
        .success();
    assert!(fs::read_to_string(&config).unwrap().contains("[requirements]"));
}

#[test]
fn invalid_config_file_fails() {
    let tmp = TempDir::new().unwrap();
    let config = tmp.path().join("stackgen.toml");
    fs::write(&config, "[requirements]\nnode = \"not-a-version\"\n").unwrap();

    stackgen(tmp.path())
        .args(["-t", "frontend", "-n", "demo-app", "-d", "-c"])
        .arg(&config)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration error"));
}
