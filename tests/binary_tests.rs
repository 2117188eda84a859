//! Integration tests for the sql-log-checker binary.

use std::{fs, path::Path};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from the user's config files and environment.
fn cmd(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("sql-log-checker");
    cmd.current_dir(home)
        .env("HOME", home)
        .env_remove("RUST_LOG")
        .env_remove("SQL_LOG_CHECKER_PATTERNS")
        .env_remove("SQL_LOG_CHECKER_KEYWORDS")
        .env_remove("SQL_LOG_CHECKER_OUTPUT_DIR")
        .env_remove("SQL_LOG_CHECKER_LOG");
    cmd
}

fn only_report(dir: &Path) -> String {
    let entries: Vec<_> = fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| p.to_string_lossy().ends_with("-output.txt"))
        .collect();
    assert_eq!(entries.len(), 1, "expected exactly one report in {:?}", dir);
    fs::read_to_string(&entries[0]).unwrap()
}

#[test]
fn test_check_success() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("app.log"), "ok\nERROR: request Timeout\n").unwrap();

    cmd(home.path())
        .args(["check", "-p", "error,timeout", "--no-color", "-o"])
        .arg(out.path())
        .arg(logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking file"))
        .stdout(predicate::str::contains("Checking done! Open"))
        .stdout(predicate::str::contains("=== Scan Summary ==="));

    let report = only_report(out.path());
    assert!(report.contains("ERROR: request Timeout"));
    assert!(!report.contains("\nok"));
}

#[test]
fn test_check_quiet_has_no_per_file_lines() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("app.log"), "line\n").unwrap();

    cmd(home.path())
        .args(["check", "--quiet", "--no-color", "-o"])
        .arg(out.path())
        .arg(logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking file").not())
        .stdout(predicate::str::contains("to view result"));
}

#[test]
fn test_check_defaults_to_current_dir() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("app.log"), "hello world\n").unwrap();

    cmd(home.path())
        .args(["check", "-q", "--no-color", "-p", "WORLD"])
        .assert()
        .success();

    let report = only_report(home.path());
    assert!(report.contains("hello world"));
    assert!(report.contains("app.log"));
}

#[test]
fn test_check_rebuilds_sql() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        logs.path().join("sql.log"),
        "[2024-01-01 10:00:00] SELECT * FROM t WHERE id=? AND name=? [params=42, Bob]\n"
    )
    .unwrap();

    cmd(home.path())
        .args(["check", "-q", "--no-color", "-o"])
        .arg(out.path())
        .arg(logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("SQL statements rebuilt: 1"));

    let report = only_report(out.path());
    assert!(report.contains("SELECT * FROM t "));
    assert!(report.contains("WHERE id=42 AND name=Bob"));
}

#[test]
fn test_check_json_summary() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("a.log"), "x\n").unwrap();

    cmd(home.path())
        .args(["check", "-q", "-f", "json", "-o"])
        .arg(out.path())
        .arg(logs.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"files_scanned\": 1"));
}

#[test]
fn test_check_missing_root_fails() {
    let home = TempDir::new().unwrap();

    cmd(home.path())
        .args(["check", "-q", "--no-color"])
        .arg(home.path().join("does-not-exist"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_unwritable_output_fails() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    fs::write(logs.path().join("a.log"), "x\n").unwrap();

    cmd(home.path())
        .args(["check", "-q", "-o"])
        .arg(home.path().join("missing").join("dir"))
        .arg(logs.path())
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_invalid_local_config_fails() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join(".sql-log-checker.toml"), "[sql]\nkeywords = []\n").unwrap();

    cmd(home.path())
        .args(["check", "-q"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_keywords_from_env() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(
        logs.path().join("a.log"),
        "[t] INSERT INTO t VALUES (?) [params=9]\n"
    )
    .unwrap();

    cmd(home.path())
        .env("SQL_LOG_CHECKER_KEYWORDS", "INSERT INTO")
        .args(["check", "-q", "--no-color", "-o"])
        .arg(out.path())
        .arg(logs.path())
        .assert()
        .success();

    assert!(only_report(out.path()).contains("INSERT INTO t VALUES (9)"));
}

#[test]
fn test_interactive_reads_folder_and_patterns() {
    let home = TempDir::new().unwrap();
    let logs = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    fs::write(logs.path().join("a.log"), "keep me\ndrop me\n").unwrap();
    let answers = format!("{}\nkeep\n", logs.path().display());

    cmd(home.path())
        .args(["interactive", "--no-color", "-o"])
        .arg(out.path())
        .write_stdin(answers)
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter full path to log folder"))
        .stdout(predicate::str::contains("Enter string to check"));

    let report = only_report(out.path());
    assert!(report.contains("keep me"));
    assert!(!report.contains("drop me"));
}

#[test]
fn test_help() {
    let home = TempDir::new().unwrap();

    cmd(home.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_version() {
    let home = TempDir::new().unwrap();

    cmd(home.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("sql-log-checker"));
}
