//! End-to-end CLI tests for chatlens.
//!
//! These tests run the actual binary with various arguments and check the
//! output.
//!
//! # Test Categories
//!
//! - **Basic functionality**: text report, user listing
//! - **Output formats**: JSON report, CSV records, files vs stdout
//! - **Filters**: participant and date selection
//! - **Lexicon**: custom word lists
//! - **Error handling**: proper error messages for bad input
//!
//! # Running Tests
//!
//! ```bash
//! cargo test --test cli_e2e
//! ```

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::{TempDir, tempdir};

// ============================================================================
// Test Fixtures
// ============================================================================

const CHAT: &str = "01/02/23, 9:00 AM - Alice created group \"Weekend\"\n\
01/02/23, 10:00 AM - Alice: hello everyone\n\
01/02/23, 10:05 AM - Bob: hi there\n\
01/02/23, 10:05 AM - Bob: how are you\n\
05/03/23, 8:00 PM - Carol: lovely pizza tonight 🍕\n\
05/03/23, 8:10 PM - Bob: <Media omitted>\n";

/// Creates a temporary directory with a transcript and word lists.
fn setup_fixtures() -> TempDir {
    let dir = tempdir().expect("Failed to create temp dir");
    fs::write(dir.path().join("chat.txt"), CHAT).unwrap();
    fs::write(dir.path().join("garbage.txt"), "not a chat\nat all\n").unwrap();
    fs::write(dir.path().join("positive.txt"), "# custom\nlovely\n").unwrap();
    dir
}

fn path(dir: &TempDir, name: &str) -> PathBuf {
    dir.path().join(name)
}

fn chatlens() -> Command {
    Command::cargo_bin("chatlens").unwrap()
}

// ============================================================================
// Basic functionality
// ============================================================================

#[test]
fn test_help() {
    chatlens()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--user"))
        .stdout(predicate::str::contains("--keyword"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_version() {
    chatlens()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_text_report() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: Overall"))
        .stdout(predicate::str::contains("Messages:  6"))
        .stdout(predicate::str::contains("Media:     1"))
        .stdout(predicate::str::contains("Most active"))
        .stdout(predicate::str::contains("Average response"));
}

#[test]
fn test_text_report_for_user_with_keyword() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--user", "Bob", "--keyword", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Selection: Bob"))
        .stdout(predicate::str::contains("Messages:  3"))
        .stdout(predicate::str::contains("Keyword 'hi': 1"))
        .stdout(predicate::str::contains("Most active").not());
}

#[test]
fn test_list_users() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .arg("--list-users")
        .assert()
        .success()
        .stdout("Alice\nBob\nCarol\n");
}

// ============================================================================
// Output formats
// ============================================================================

#[test]
fn test_json_to_stdout() {
    let dir = setup_fixtures();
    let output = chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "json", "--keyword", "hi"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["stats"]["messages"], 6);
    assert_eq!(report["stats"]["words"], 11);
    assert_eq!(report["keyword"]["count"], 1);
    assert_eq!(report["participants"].as_array().unwrap().len(), 3);
}

#[test]
fn test_json_to_file() {
    let dir = setup_fixtures();
    let out = path(&dir, "report.json");
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["-f", "json", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stderr(predicate::str::contains("saved to"));

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(report["selector"], "Overall");
}

#[test]
fn test_csv_for_user() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "csv", "--user", "Bob"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Timestamp;Author;Body\n"))
        .stdout(predicate::str::contains("2023-02-01 10:05:00;Bob;hi there"))
        .stdout(predicate::str::contains("Alice").not());
}

// ============================================================================
// Filters and options
// ============================================================================

#[test]
fn test_date_filter() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "csv", "--after", "2023-03-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Carol"))
        .stdout(predicate::str::contains("hello everyone").not());
}

#[test]
fn test_month_first() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "csv", "--month-first", "--user", "Carol"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2023-05-03 20:00:00;Carol"));
}

#[test]
fn test_custom_positive_list() {
    let dir = setup_fixtures();
    let output = chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "json", "--positive"])
        .arg(path(&dir, "positive.txt"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["sentiment"]["positive"], 1);
}

#[test]
fn test_top_words_limit() {
    let dir = setup_fixtures();
    let output = chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "json", "--top", "2"])
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["common_words"].as_array().unwrap().len(), 2);
}

#[test]
fn test_analysis_config_file() {
    let dir = setup_fixtures();
    let config = path(&dir, "config.json");
    fs::write(&config, r#"{"heatmap_bucket_hours": 4}"#).unwrap();

    let output = chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--format", "json", "--config"])
        .arg(&config)
        .output()
        .unwrap();
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["heatmap"]["periods"].as_array().unwrap().len(), 6);
}

#[test]
fn test_unknown_user_is_not_an_error() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--user", "Nobody"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No messages to analyze"));
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_missing_input_file() {
    chatlens()
        .arg("does/not/exist.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_invalid_date() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--after", "01-02-2023"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn test_invalid_config() {
    let dir = setup_fixtures();
    let config = path(&dir, "bad.json");
    fs::write(&config, r#"{"heatmap_bucket_hours": 5}"#).unwrap();

    chatlens()
        .arg(path(&dir, "chat.txt"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("heatmap_bucket_hours"));
}

#[test]
fn test_missing_word_list() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "chat.txt"))
        .args(["--stop-words", "no_such_list.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("word list"));
}

#[test]
fn test_garbage_input_gives_empty_report() {
    let dir = setup_fixtures();
    chatlens()
        .arg(path(&dir, "garbage.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Messages:  0"));
}

#[test]
fn test_invalid_format() {
    chatlens()
        .args(["chat.txt", "--format", "xml"])
        .assert()
        .failure();
}
