//! Integration tests for the stats command

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodjour_cmd};

fn record(root: &std::path::Path, emotions: &[&str]) {
    let mut cmd = moodjour_cmd();
    cmd.current_dir(root).arg("record").arg("--no-insight");
    for emotion in emotions {
        cmd.arg("-e").arg(emotion);
    }
    cmd.assert().success();
}

#[test]
fn test_stats_on_empty_journal() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("No records yet"));
}

#[test]
fn test_stats_bar_view_summary() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    record(temp.path(), &["happiness"]);
    record(temp.path(), &["joy", "sadness"]);
    record(temp.path(), &["stress"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("two-weeks"))
        .stdout(predicate::str::contains("Total records:     3"))
        .stdout(predicate::str::contains("Happiness records: 1"))
        .stdout(predicate::str::contains("Positive ratio:    67%"))
        .stdout(predicate::str::contains("++--"));
}

#[test]
fn test_stats_pie_view_lists_top_emotions() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    record(temp.path(), &["calm"]);
    record(temp.path(), &["joy"]);
    record(temp.path(), &["joy"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["stats", "--view", "pie"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Emotion distribution"))
        .stdout(predicate::str::contains("1. 😊 joy (2)"))
        .stdout(predicate::str::contains("2. 😌 calm (1)"))
        .stdout(predicate::str::contains("Most frequent:     joy"));
}

#[test]
fn test_stats_six_week_period() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    record(temp.path(), &["love"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["stats", "-p", "6w"])
        .assert()
        .success()
        .stdout(predicate::str::contains("six-weeks"))
        .stdout(predicate::function(|out: &str| {
            out.lines().filter(|l| l.trim_start().starts_with('W')).count() == 6
        }));
}

#[test]
fn test_stats_rejects_bad_options() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["stats", "-p", "year"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid period"));

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["stats", "--view", "line"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid view"));
}
