//! Integration tests for the validate, check, and quality commands.

use assert_cmd::Command;
use predicates::prelude::*;

mod common;
use common::{mixed_fixture, write_fixture, HEADER};

fn casetrim() -> Command {
    Command::cargo_bin("casetrim").unwrap()
}

#[test]
fn validate_passes_clean_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    casetrim()
        .arg("validate")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("no issues"));
}

#[test]
fn validate_fails_on_invalid_priority() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "cases.csv",
        &format!("{HEADER}\n\"A\",\"A\",\"케이스 제목\",\"\",\"1. 진입\",\"표시\",\"Critical\"\n"),
    );

    casetrim()
        .arg("validate")
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Critical"));
}

#[test]
fn validate_warnings_alone_pass() {
    let dir = tempfile::tempdir().unwrap();
    // Steps without Expected Result: warning only.
    let input = write_fixture(
        dir.path(),
        "cases.csv",
        &format!("{HEADER}\n\"A\",\"A\",\"케이스 제목\",\"\",\"1. 진입\",\"\",\"High\"\n"),
    );

    casetrim()
        .arg("validate")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Expected Result"));
}

#[test]
fn validate_missing_column_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "cases.csv",
        "Section,Section Hierarchy,Title,Preconditions,Steps,Expected Result\n",
    );

    casetrim()
        .arg("validate")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Priority"));
}

#[test]
fn validate_json_emits_report() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    let output = casetrim()
        .arg("validate")
        .arg(&input)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed["errors"].as_array().unwrap().is_empty());
}

#[test]
fn check_fails_on_case_without_steps() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "cases.csv",
        &format!("{HEADER}\n\"A\",\"A\",\"제목만 있는 케이스\",\"\",\"\",\"\",\"High\"\n"),
    );

    casetrim()
        .arg("check")
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Steps"));
}

#[test]
fn check_fails_on_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &format!("{HEADER}\n"));

    casetrim()
        .arg("check")
        .arg(&input)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("no test cases"));
}

#[test]
fn check_passes_complete_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    casetrim()
        .arg("check")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("ready for TestRail import"));
}

#[test]
fn quality_always_exits_zero_for_readable_files() {
    let dir = tempfile::tempdir().unwrap();
    // Vague, sparse cases: low score, still exit 0.
    let input = write_fixture(
        dir.path(),
        "cases.csv",
        &format!("{HEADER}\n\"A\",\"A\",\"테스트\",\"\",\"클릭\",\"성공\",\"Highest\"\n"),
    );

    casetrim()
        .arg("quality")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("score:"));
}

#[test]
fn quality_json_carries_score_and_stats() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    let output = casetrim()
        .arg("quality")
        .arg(&input)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(parsed["score"].is_number());
    assert_eq!(parsed["stats"]["total_cases"], 3);
}

#[test]
fn version_prints_name_and_version() {
    casetrim()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("casetrim"));
}

#[test]
fn completions_generate_for_bash() {
    casetrim()
        .arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("casetrim"));
}
