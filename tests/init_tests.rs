//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodjour_cmd};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized mood journal"));

    assert!(temp.path().join(".moodjour").is_dir());

    let content = fs::read_to_string(temp.path().join(".moodjour/config.toml")).unwrap();
    assert!(content.contains("insight_delay_ms = 1500"));
    assert!(content.contains("default_period = \"two-weeks\""));
    assert!(content.contains("created"));
}

#[test]
fn test_init_creates_missing_directory() {
    let temp = TempDir::new().unwrap();
    let target = temp.path().join("nested/journal");

    moodjour_cmd().arg("init").arg(&target).assert().success();
    assert!(target.join(".moodjour/config.toml").exists());
}

#[test]
fn test_init_twice_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_command_outside_journal_fails() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("recent")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a moodjour directory"));
}

#[test]
fn test_root_env_var_is_used() {
    let temp = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(elsewhere.path())
        .env("MOODJOUR_ROOT", temp.path())
        .arg("recent")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records yet"));
}

#[test]
fn test_root_env_var_without_journal_fails() {
    let temp = TempDir::new().unwrap();

    moodjour_cmd()
        .env("MOODJOUR_ROOT", temp.path())
        .arg("recent")
        .assert()
        .failure()
        .stderr(predicate::str::contains("MOODJOUR_ROOT is set"));
}

#[test]
fn test_config_get_set_and_list() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "default_period"])
        .assert()
        .success()
        .stdout("two-weeks\n");

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "default_period", "month"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set default_period = month"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("default_period = six-weeks"))
        .stdout(predicate::str::contains("insight_delay_ms = 1500"));
}

#[test]
fn test_config_rejects_bad_values() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "default_period", "year"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Valid periods: two-weeks, six-weeks"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "created", "2020-01-01T00:00:00Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("read-only"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["config", "editor"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
