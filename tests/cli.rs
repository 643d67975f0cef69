//! Command-line surface tests

use assert_cmd::Command;
use predicates::prelude::*;

fn valtree() -> Command {
    let mut cmd = Command::cargo_bin("valtree").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("FORCE_COLOR");
    cmd
}

#[test]
fn test_help_lists_flags() {
    valtree()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--max-depth"))
        .stdout(predicate::str::contains("--functions"))
        .stdout(predicate::str::contains("--copy"));
}

#[test]
fn test_invalid_function_mode() {
    valtree()
        .args(["-F", "inline"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("inline"));
}

#[test]
fn test_invalid_depth() {
    valtree()
        .args(["-L", "deep"])
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid depth 'deep'"));
}

#[test]
fn test_depth_all_keyword() {
    valtree()
        .args(["-e", "-L", "all", "--list-expanded"])
        .write_stdin(r#"[[[[1]]]]"#)
        .assert()
        .success()
        .stdout("root\nroot.0\nroot.0.0\nroot.0.0.0\n");
}

#[test]
fn test_copy_conflicts_with_list() {
    valtree()
        .args(["--copy", "root", "--list-expanded"])
        .write_stdin("{}")
        .assert()
        .failure();
}

#[test]
fn test_map_and_set_labels() {
    valtree()
        .args(["-e"])
        .write_stdin(r#"{"$map": [["user1", "Alice"], [2, "Bob"]]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("[0] user1: \"Alice\""))
        .stdout(predicate::str::contains("[1] 2: \"Bob\""));

    valtree()
        .args(["-e"])
        .write_stdin(r#"{"$set": ["x", "y"]}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("0: \"x\""))
        .stdout(predicate::str::contains("1: \"y\""));
}

#[test]
fn test_verbose_logs_to_stderr() {
    valtree()
        .args(["-v", "--list-expanded"])
        .write_stdin("[1]")
        .assert()
        .success()
        .stderr(predicate::str::contains("built value tree"));
}

#[test]
fn test_bad_settings_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"expansion": {"max_depth": "deep"}}"#).unwrap();

    valtree()
        .arg("--config")
        .arg(&path)
        .write_stdin("{}")
        .assert()
        .failure()
        .stderr(predicate::str::starts_with("valtree: invalid settings"));
}
