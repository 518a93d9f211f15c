//! CLI integration tests for the `wordfreq` binary.
//!
//! Uses `assert_cmd` to spawn the binary as a subprocess, pipe stdin,
//! and assert on stdout/stderr/exit code.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

/// Path to the data directory (bundled in the repo).
fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

fn sample() -> String {
    data_dir().join("sample.txt").to_str().unwrap().to_string()
}

fn wordfreq_cmd() -> Command {
    Command::from(cargo_bin_cmd!("wordfreq"))
}

// ---------------------------------------------------------------------------
// Basic CLI behavior
// ---------------------------------------------------------------------------

#[test]
fn help_flag() {
    wordfreq_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("frequency statistics"));
}

#[test]
fn version_flag() {
    wordfreq_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("wordfreq-cli"));
}

#[test]
fn file_and_book_conflict() {
    wordfreq_cmd()
        .args(["--file", &sample(), "--book", "1"])
        .assert()
        .failure();
}

#[test]
fn zero_capacity_rejected() {
    wordfreq_cmd()
        .args(["--file", &sample(), "--initial-capacity", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity must be at least 1"));
}

// ---------------------------------------------------------------------------
// Text report
// ---------------------------------------------------------------------------

#[test]
fn file_report() {
    wordfreq_cmd()
        .args(["--file", &sample()])
        .assert()
        .success()
        .stdout(predicate::str::contains("RESULTS"))
        .stdout(predicate::str::contains("Total words: 11"))
        .stdout(predicate::str::contains("Distinct words: 8"))
        .stdout(predicate::str::contains("Repeated words: 3"))
        .stdout(predicate::str::contains("First word: the"))
        .stdout(predicate::str::contains("Last word: again"))
        .stdout(predicate::str::contains("Most frequent word: fox (2 times)"))
        .stderr(predicate::str::contains("Analyzing:"));
}

#[test]
fn histogram_lists_only_nonzero_letters() {
    wordfreq_cmd()
        .args(["--file", &sample()])
        .assert()
        .success()
        .stdout(predicate::str::contains("A: 2\nB: 1\nD: 1\nF: 2\nL: 1\nQ: 2\nT: 2\n"))
        .stdout(predicate::str::contains("C: ").not());
}

#[test]
fn list_prints_vocabulary_in_order() {
    wordfreq_cmd()
        .args(["--file", &sample(), "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Vocabulary:\na: 1\nagain: 1\nbrown: 1\ndog: 1\nfox: 2\nlazy: 1\nquick: 2\nthe: 2\n",
        ));
}

#[test]
fn small_capacity_same_report() {
    let run = |capacity: &str| {
        wordfreq_cmd()
            .args(["--file", &sample(), "--initial-capacity", capacity])
            .output()
            .expect("should run")
            .stdout
    };
    assert_eq!(run("1"), run("1000"));
}

// ---------------------------------------------------------------------------
// JSON report
// ---------------------------------------------------------------------------

#[test]
fn json_report() {
    let output = wordfreq_cmd()
        .args(["--file", &sample(), "--format", "json", "--list"])
        .output()
        .expect("should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_words"], 11);
    assert_eq!(json["distinct_words"], 8);
    assert_eq!(json["most_frequent"]["word"], "fox");
    assert_eq!(json["most_frequent"]["count"], 2);
    assert_eq!(json["initial_letters"][0]["letter"], "A");
    assert_eq!(json["vocabulary"]["quick"], 2);
}

#[test]
fn json_report_for_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.txt");
    std::fs::write(&path, "\n  \n...\n").unwrap();

    let output = wordfreq_cmd()
        .args(["--file", path.to_str().unwrap(), "--format", "json"])
        .output()
        .expect("should run");
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["total_words"], 0);
    assert!(json["first_word"].is_null());
    assert!(json["most_frequent"].is_null());
}

// ---------------------------------------------------------------------------
// Book selection
// ---------------------------------------------------------------------------

#[test]
fn book_flag_uses_builtin_catalog() {
    wordfreq_cmd()
        .args(["--data-dir", data_dir().to_str().unwrap(), "--book", "2"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Analyzing: Moby Dick"))
        .stdout(predicate::str::contains("Total words: 204"));
}

#[test]
fn menu_reads_selection_from_stdin() {
    wordfreq_cmd()
        .args(["--data-dir", data_dir().to_str().unwrap()])
        .write_stdin("1\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("1. Alice's Adventures in Wonderland"))
        .stderr(predicate::str::contains("2. Moby Dick"))
        .stdout(predicate::str::contains("Total words: 284"));
}

#[test]
fn catalog_file_selection() {
    wordfreq_cmd()
        .args([
            "--catalog",
            data_dir().join("catalog.toml").to_str().unwrap(),
            "--book",
            "3",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Analyzing: Sample"))
        .stdout(predicate::str::contains("Total words: 11"));
}

// ---------------------------------------------------------------------------
// Failures are reported, not crashes
// ---------------------------------------------------------------------------

#[test]
fn invalid_menu_choice() {
    wordfreq_cmd()
        .args(["--data-dir", data_dir().to_str().unwrap()])
        .write_stdin("7\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid selection `7`"))
        .stdout(predicate::str::contains("RESULTS").not());
}

#[test]
fn non_numeric_menu_choice() {
    wordfreq_cmd()
        .args(["--data-dir", data_dir().to_str().unwrap()])
        .write_stdin("moby\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid selection `moby`"));
}

#[test]
fn invalid_book_flag() {
    wordfreq_cmd()
        .args(["--data-dir", data_dir().to_str().unwrap(), "--book", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("choose a number from 1 to 2"));
}

#[test]
fn missing_file_reports_cause() {
    wordfreq_cmd()
        .args(["--file", "/nonexistent/path/book.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot open"))
        .stderr(predicate::str::contains("panicked").not())
        .stdout(predicate::str::is_empty());
}

#[test]
fn missing_builtin_book_reports_cause() {
    let dir = tempfile::tempdir().unwrap();
    wordfreq_cmd()
        .args(["--data-dir", dir.path().to_str().unwrap(), "--book", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "analysis of Alice's Adventures in Wonderland aborted",
        ));
}

#[test]
fn rust_log_enables_debug_without_verbose() {
    wordfreq_cmd()
        .args(["--file", &sample()])
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stderr(predicate::str::contains("processed lines"));
}

#[test]
fn rust_log_trace_shows_table_growth() {
    // Capacity 1 forces a resize on the second distinct word.
    wordfreq_cmd()
        .args(["--file", &sample(), "--initial-capacity", "1"])
        .env("RUST_LOG", "trace")
        .assert()
        .success()
        .stderr(predicate::str::contains("growing symbol table"));
}

#[test]
fn quiet_by_default() {
    wordfreq_cmd()
        .args(["--file", &sample()])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("processed lines").not());
}

#[test]
fn verbose_logs_to_stderr() {
    wordfreq_cmd()
        .args(["--file", &sample(), "--verbose"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("analysis finished"));
}
