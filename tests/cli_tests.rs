use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{bikeshare, fixture_dir, no_config};

fn base_args(dir: &std::path::Path) -> Vec<String> {
    vec![
        "--data-dir".to_string(),
        dir.to_string_lossy().to_string(),
        "--config".to_string(),
        no_config(dir),
    ]
}

#[test]
fn test_stats_chicago_june_monday() {
    let dir = fixture_dir("cli_stats_chicago");

    bikeshare()
        .args(base_args(&dir))
        .args(["stats", "--city", "chicago", "--month", "June", "--day", "monday"])
        .assert()
        .success()
        .stdout(contains("Chicago / June / Monday (3 trips)"))
        .stdout(contains("Most popular station for starting a trip: A"))
        .stdout(contains("Most popular trip: A - X"))
        .stdout(contains("Total travel time (h): 0.10"))
        .stdout(contains("Number of different user types:"));
}

#[test]
fn test_stats_washington_has_no_user_stats() {
    let dir = fixture_dir("cli_stats_washington");

    bikeshare()
        .args(base_args(&dir))
        .args(["stats", "--city", "Washington"])
        .assert()
        .success()
        .stdout(contains("Sorry - no user data for Washington."))
        .stdout(contains("Calculating User Stats...").not());
}

#[test]
fn test_stats_rejects_unknown_city() {
    let dir = fixture_dir("cli_unknown_city");

    bikeshare()
        .args(base_args(&dir))
        .args(["stats", "--city", "boston"])
        .assert()
        .failure()
        .stderr(contains("Invalid city: boston"));
}

#[test]
fn test_stats_rejects_month_without_data() {
    let dir = fixture_dir("cli_unknown_month");

    bikeshare()
        .args(base_args(&dir))
        .args(["stats", "--city", "chicago", "--month", "july"])
        .assert()
        .failure()
        .stderr(contains("Invalid month: july"));
}

#[test]
fn test_missing_data_file_exits_with_error() {
    let dir = fixture_dir("cli_missing_file");
    fs::remove_file(dir.join("washington.csv")).unwrap();

    bikeshare()
        .args(base_args(&dir))
        .args(["stats", "--city", "washington"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("Error: Data source error"))
        .stderr(contains("washington.csv"));
}

#[test]
fn test_interactive_session_over_stdin() {
    let dir = fixture_dir("cli_interactive");

    bikeshare()
        .args(base_args(&dir))
        .write_stdin("new york city\nall\nall\nyes\nno\nno\n")
        .assert()
        .success()
        .stdout(contains("Hello! Let's explore some US bikeshare data!"))
        .stdout(contains("Most popular station for starting a trip: Broadway & W 60 St"))
        .stdout(contains("(missing)"))
        .stdout(contains("E 17 St & Broadway"))
        .stdout(contains("Ok - no more raw data."));
}

#[test]
fn test_explore_stops_on_closed_stdin() {
    let dir = fixture_dir("cli_closed_stdin");

    bikeshare()
        .args(base_args(&dir))
        .arg("explore")
        .write_stdin("")
        .assert()
        .success();
}
