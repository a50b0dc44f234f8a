use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn identsplit(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("identsplit").unwrap();
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("IDENTSPLIT_CHARACTERS")
        .env_remove("RUST_LOG")
        .arg("--no-color");
    cmd
}

#[test]
fn test_splits_arguments() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .args(["topPosts", "TOP_POSTS", "XMLHttpRequest"])
        .assert()
        .success()
        .stdout(predicate::str::contains("topPosts: top Posts"))
        .stdout(predicate::str::contains("TOP_POSTS: TOP _ POSTS"))
        .stdout(predicate::str::contains("XMLHttpRequest: XML Http Request"))
        .stdout(predicate::str::contains("✓ 3 identifiers tokenized"));
}

#[test]
fn test_invalid_identifier_fails() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .arg("top-posts")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("top-posts: <invalid \"-\">"))
        .stdout(predicate::str::contains("1 of 1 identifier contain"));
}

#[test]
fn test_no_fail() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .args(["--no-fail", "top-posts"])
        .assert()
        .success();
}

#[test]
fn test_extra_characters() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .args(["--extra", "-", "top-posts"])
        .assert()
        .success()
        .stdout(predicate::str::contains("top-posts: top - posts"));
}

#[test]
fn test_reads_stdin() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .write_stdin("isValid\r\n\nofType\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("isValid: is Valid"))
        .stdout(predicate::str::contains("ofType: of Type"))
        .stdout(predicate::str::contains("✓ 2 identifiers tokenized"));
}

#[test]
fn test_stdin_keeps_surrounding_whitespace() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .write_stdin(" top\n")
        .assert()
        .code(1)
        .stdout(predicate::str::contains(" top: <invalid \" \">"));
}

#[test]
fn test_no_identifiers() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No identifiers given"));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let output = identsplit(&dir)
        .args(["-o", "json", "W420"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["identifier"], "W420");
    assert_eq!(value[0]["valid"], true);
    assert_eq!(value[0]["tokens"][0]["kind"], "Word");
    assert_eq!(value[0]["tokens"][0]["uppercase"], true);
    assert_eq!(value[0]["tokens"].as_array().unwrap().len(), 4);
}

#[test]
fn test_local_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join(".identsplit.toml"), "words_only = true\n").unwrap();

    identsplit(&dir)
        .arg("TOP_POSTS")
        .assert()
        .success()
        .stdout(predicate::str::contains("TOP_POSTS: TOP POSTS"));
}

#[test]
fn test_empty_character_set() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .args(["--characters", "", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("admissible character set is empty"));
}

#[test]
fn test_completion() {
    let dir = TempDir::new().unwrap();
    identsplit(&dir)
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identsplit"));
}
