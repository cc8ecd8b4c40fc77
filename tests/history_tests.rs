//! Integration tests for recent, day and calendar commands

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{init_journal, moodjour_cmd};

fn journal_with_records(emotions: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    for emotion in emotions {
        moodjour_cmd()
            .current_dir(temp.path())
            .args(["record", "-e", emotion, "--no-insight"])
            .assert()
            .success();
    }
    temp
}

#[test]
fn test_recent_on_empty_journal() {
    let temp = journal_with_records(&[]);

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("recent")
        .assert()
        .success()
        .stdout("No records yet\n");
}

#[test]
fn test_recent_respects_limit() {
    let temp = journal_with_records(&["calm", "joy", "anger"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["recent", "-n", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("😠 anger"))
        .stdout(predicate::str::contains("😊 joy"))
        .stdout(predicate::str::contains("calm").not());
}

#[test]
fn test_day_shows_todays_records() {
    let temp = journal_with_records(&["gratitude"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("day")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 record(s)"))
        .stdout(predicate::str::contains("🙏 gratitude"));
}

#[test]
fn test_day_with_no_records() {
    let temp = journal_with_records(&["gratitude"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["day", "2020-02-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No records on February 03, 2020"));
}

#[test]
fn test_day_rejects_unknown_reference() {
    let temp = journal_with_records(&[]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["day", "next", "tuesday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid date reference"));
}

#[test]
fn test_calendar_counts_current_month() {
    let temp = journal_with_records(&["joy", "sadness"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .arg("calendar")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mon      Tue"))
        .stdout(predicate::str::contains("😊"))
        .stdout(predicate::str::contains("*"))
        .stdout(predicate::str::contains("2 record(s) this month"));
}

#[test]
fn test_calendar_for_other_month() {
    let temp = journal_with_records(&["joy"]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["calendar", "--month", "2020-02"])
        .assert()
        .success()
        .stdout(predicate::str::contains("February 2020"))
        .stdout(predicate::str::contains("29"))
        .stdout(predicate::str::contains("0 record(s) this month"));
}

#[test]
fn test_calendar_rejects_bad_month() {
    let temp = journal_with_records(&[]);

    moodjour_cmd()
        .current_dir(temp.path())
        .args(["calendar", "--month", "2020-13"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected format: YYYY-MM"));
}
