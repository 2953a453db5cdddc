//! Integration tests for the extract, filter, and purify commands.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

mod common;
use common::{mixed_fixture, pure_happy_fixture, write_fixture, HEADER};

fn casetrim() -> Command {
    Command::cargo_bin("casetrim").unwrap()
}

#[test]
fn filter_writes_happy_copy_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    casetrim()
        .arg("filter")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("cases_happy.csv"));

    let output = dir.path().join("cases_happy.csv");
    assert!(output.exists());

    // Original must be untouched.
    assert_eq!(fs::read_to_string(&input).unwrap(), mixed_fixture());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("로그인 성공 시 메인 페이지로 이동"));
    assert!(!written.contains("비밀번호 오류"));
    // The 보안 section lost its only case, so its marker goes too.
    assert!(!written.contains("보안"));
}

#[test]
fn extract_prints_classification_table() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    casetrim()
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("HAPPY"))
        .stdout(predicate::str::contains("EXCLUDE"))
        .stdout(predicate::str::contains("SECTION"));

    assert!(dir.path().join("cases_happy.csv").exists());
}

#[test]
fn purify_overwrites_input_in_place() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    casetrim().arg("purify").arg(&input).assert().success();

    // No _happy copy; the input itself was rewritten.
    assert!(!dir.path().join("cases_happy.csv").exists());
    let written = fs::read_to_string(&input).unwrap();
    assert!(written.contains("로그인 성공 시 메인 페이지로 이동"));
    assert!(!written.contains("에러 메시지"));
}

#[test]
fn pure_happy_file_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "pure.csv", &pure_happy_fixture());

    casetrim().arg("filter").arg(&input).assert().success();

    // Identity transform: every data row survives byte for byte. The writer
    // quotes the header, so compare from the first data row on.
    let written = fs::read_to_string(dir.path().join("pure_happy.csv")).unwrap();
    let written_rows: Vec<&str> = written.lines().skip(1).collect();
    let fixture = pure_happy_fixture();
    let fixture_rows: Vec<&str> = fixture.lines().skip(1).collect();
    assert_eq!(written_rows, fixture_rows);
}

#[test]
fn missing_file_exits_2() {
    casetrim()
        .arg("filter")
        .arg("/nonexistent/cases.csv")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("failed to read file"));
}

#[test]
fn missing_column_exits_2_and_names_it() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(
        dir.path(),
        "cases.csv",
        "Section,Section Hierarchy,Title,Preconditions,Steps,Expected Result\n",
    );

    casetrim()
        .arg("filter")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Priority"));
}

#[test]
fn non_utf8_input_exits_2() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cases.csv");
    fs::write(&path, [0xff, 0xfe, 0x00, 0x41]).unwrap();

    casetrim()
        .arg("filter")
        .arg(&path)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("UTF-8"));
}

#[test]
fn missing_input_argument_exits_1() {
    casetrim().arg("filter").assert().code(1);
}

#[test]
fn quiet_suppresses_report_but_still_writes() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &mixed_fixture());

    casetrim()
        .arg("--quiet")
        .arg("extract")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(dir.path().join("cases_happy.csv").exists());
}

#[test]
fn output_keeps_all_fields_quoted() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_fixture(dir.path(), "cases.csv", &pure_happy_fixture());

    casetrim().arg("filter").arg(&input).assert().success();

    let written = fs::read_to_string(dir.path().join("cases_happy.csv")).unwrap();
    let header_line = written.lines().next().unwrap();
    assert_eq!(
        header_line,
        format!("\"{}\"", HEADER.replace(',', "\",\""))
    );
}
