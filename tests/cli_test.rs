// file: tests/cli_test.rs
// version: 1.0.0
// guid: 4e6a1c93-8b27-4f05-a3d8-92c5e0f7b614

//! Command line tests for the autoinstall-identity binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const BOB_IDENTITY: &str = "identity:\n  username: bob\n  hostname: h1\n  password: p\n";

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("autoinstall-identity").unwrap();
    cmd.env_remove("AUTOINSTALL_CONFIG");
    cmd
}

#[test]
fn test_validate_accepts_valid_section() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "ai.yaml", BOB_IDENTITY);

    cmd()
        .args(["validate", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("identity section is valid"));
}

#[test]
fn test_validate_reports_violations() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "ai.yaml", "identity:\n  username: bob\n  shell: /bin/zsh\n");

    cmd()
        .args(["validate", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stdout(predicate::str::contains("unknown key 'shell'"))
        .stdout(predicate::str::contains("missing required key 'hostname'"));
}

#[test]
fn test_run_prints_regenerated_document() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "ai.yaml", BOB_IDENTITY);

    cmd()
        .args(["--verbose", "run", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("realname: bob"))
        .stdout(predicate::str::contains("hostname: h1"));
}

#[test]
fn test_run_with_answers_never_logs_password() {
    let dir = TempDir::new().unwrap();
    let answers = write(
        &dir,
        "answers.yaml",
        "realname: Al\nusername: al\npassword: very-secret-hash\nhostname: box\n",
    );
    let output = dir.path().join("out.yaml");

    cmd()
        .args(["--verbose", "run", "--answers"])
        .arg(&answers)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stderr(predicate::str::contains("<REDACTED>"))
        .stderr(predicate::str::contains("very-secret-hash").not());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("username: al"));
    assert!(written.contains("password: very-secret-hash"));
}

#[test]
fn test_run_fails_without_identity() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "ai.yaml", "version: 1\n");

    cmd()
        .args(["run", "--config"])
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no identity data provided"));
}

#[test]
fn test_interactive_command() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "ai.yaml",
        &format!("interactive-sections: [identityhostname]\n{}", BOB_IDENTITY),
    );

    cmd()
        .args(["interactive", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("identity: automatic"))
        .stdout(predicate::str::contains("identityhostname: interactive"));
}

#[test]
fn test_schema_command() {
    cmd()
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"additionalProperties\": false"));
}

#[test]
fn test_json_logs_flag_emits_json_lines() {
    let dir = TempDir::new().unwrap();
    let config = write(&dir, "ai.yaml", BOB_IDENTITY);

    cmd()
        .args(["--json-logs", "run", "--config"])
        .arg(&config)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"level\":\"INFO\""))
        .stdout(predicate::str::contains("hostname: h1"));
}

#[test]
fn test_run_keeps_unset_placeholders_outside_identity() {
    let dir = TempDir::new().unwrap();
    let config = write(
        &dir,
        "ai.yaml",
        &format!("{}late-commands:\n  - echo ${{IDENTITY_UNSET_TARGET}}\n", BOB_IDENTITY),
    );

    cmd()
        .args(["run", "--config"])
        .arg(&config)
        .env_remove("IDENTITY_UNSET_TARGET")
        .assert()
        .success()
        .stdout(predicate::str::contains("username: bob"));
}
