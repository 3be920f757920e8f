use std::fs;

use assert_cmd::Command;
use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use serde_json::Value;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bytelens"))
}

fn repo_root() -> std::path::PathBuf {
    let manifest = std::path::Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(|p| p.parent())
        .expect("repo root")
        .to_path_buf()
}

fn sample_input() -> std::path::PathBuf {
    repo_root()
        .join("tests")
        .join("golden")
        .join("leb128")
        .join("input.bin")
}

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 stdout")
}

fn table_value(stdout: &str, name: &str) -> String {
    let line = stdout
        .lines()
        .find(|line| line.starts_with(name) && line[name.len()..].starts_with(' '))
        .unwrap_or_else(|| panic!("row {name} missing in:\n{stdout}"));
    line[name.len()..].trim_start().to_string()
}

#[test]
fn help_is_available_for_every_command() {
    for sub in ["inspect", "hex", "formats"] {
        cmd().arg(sub).arg("--help").assert().success();
    }
}

#[test]
fn formats_lists_names_in_display_order() {
    let assert = cmd().arg("formats").assert().success();
    let stdout = stdout_of(&assert);
    let names: Vec<&str> = stdout.lines().collect();
    assert_eq!(names.len(), 16);
    assert_eq!(names[0], "Int LE Hex");
    assert_eq!(names[8], "ULEB128");
    assert_eq!(names[15], "UTF-32 BE");
}

#[test]
fn hex_prints_table_with_sentinel() {
    let assert = cmd().arg("hex").arg("e5 8e 26").assert().success();
    let stdout = stdout_of(&assert);
    assert_eq!(stdout.lines().count(), 16);
    assert_eq!(table_value(&stdout, "ULEB128"), "624485");
    assert_eq!(table_value(&stdout, "Int BE Hex"), "0xe58e26");
    assert_eq!(table_value(&stdout, "UTF-8"), "<error>");
}

#[test]
fn custom_sentinel_replaces_error_text() {
    let assert = cmd()
        .arg("hex")
        .arg("e58e26")
        .arg("--sentinel")
        .arg("n/a")
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert_eq!(table_value(&stdout, "Float LE"), "n/a");
}

#[test]
fn hex_json_keeps_error_kinds() {
    let assert = cmd().arg("hex").arg("9bf159").arg("--json").assert().success();
    let value: Value = serde_json::from_str(&stdout_of(&assert)).expect("valid json");
    let rows = value["rows"].as_array().expect("rows");
    assert_eq!(rows.len(), 16);
    assert_eq!(rows[9]["name"], "SLEB128");
    assert_eq!(rows[9]["value"], "-624485");
    assert_eq!(rows[4]["error"]["kind"], "UnsupportedFloatSize");
}

#[test]
fn format_filter_keeps_only_named_rows() {
    let assert = cmd()
        .arg("hex")
        .arg("40490fdb")
        .arg("--format")
        .arg("Float BE")
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert_eq!(stdout.lines().count(), 1);
    assert!(table_value(&stdout, "Float BE").starts_with("3.14159"));
}

#[test]
fn unknown_format_is_rejected() {
    cmd()
        .arg("hex")
        .arg("00")
        .arg("--format")
        .arg("Float XE")
        .assert()
        .failure()
        .stderr(contains("unknown format").and(contains("hint:")));
}

#[test]
fn invalid_hex_shows_error_and_hint() {
    cmd()
        .arg("hex")
        .arg("abc")
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn strict_fails_when_a_row_fails() {
    cmd()
        .arg("hex")
        .arg("e58e26")
        .arg("--strict")
        .assert()
        .failure()
        .stderr(contains("failed to decode"));
    cmd()
        .arg("hex")
        .arg("e58e26")
        .arg("--strict")
        .arg("--format")
        .arg("ULEB128")
        .assert()
        .success();
}

#[test]
fn inspect_reads_selected_range() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("dump.bin");
    fs::write(&input, [0xff, 0xff, 0x00, 0x00, 0x80, 0x3f, 0xff]).expect("write input");

    let assert = cmd()
        .arg("inspect")
        .arg(&input)
        .arg("--offset")
        .arg("0x2")
        .arg("--length")
        .arg("4")
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert_eq!(table_value(&stdout, "Float LE"), "1.0");
    assert_eq!(table_value(&stdout, "Int LE Hex"), "0x3f800000");
}

#[test]
fn inspect_selection_past_end_fails() {
    cmd()
        .arg("inspect")
        .arg(sample_input())
        .arg("--offset")
        .arg("2")
        .arg("--length")
        .arg("4")
        .assert()
        .failure()
        .stderr(contains("invalid selection").and(contains("hint: the input has 3 bytes")));
}

#[test]
fn missing_input_shows_error_and_hint() {
    let temp = TempDir::new().expect("tempdir");
    let missing = temp.path().join("missing.bin");

    cmd()
        .arg("inspect")
        .arg(missing)
        .assert()
        .failure()
        .stderr(contains("error:").and(contains("hint:")));
}

#[test]
fn report_is_written_to_file() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("out").join("report.json");

    cmd()
        .arg("inspect")
        .arg(sample_input())
        .arg("-o")
        .arg(&report)
        .arg("--pretty")
        .assert()
        .success()
        .stderr(contains("OK: report written"));

    let json = fs::read_to_string(&report).expect("read report");
    let value: Value = serde_json::from_str(&json).expect("valid json");
    assert_eq!(value["input"]["bytes"], 3);
    assert_eq!(value["rows"][8]["value"], "624485");
}

#[test]
fn json_and_report_conflict() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("inspect")
        .arg(sample_input())
        .arg("--json")
        .arg("-o")
        .arg(report)
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn pretty_and_compact_conflict() {
    cmd()
        .arg("hex")
        .arg("00")
        .arg("--json")
        .arg("--pretty")
        .arg("--compact")
        .assert()
        .failure()
        .stderr(contains("error:"));
}

#[test]
fn quiet_suppresses_ok_message() {
    let temp = TempDir::new().expect("tempdir");
    let report = temp.path().join("report.json");

    cmd()
        .arg("inspect")
        .arg(sample_input())
        .arg("-o")
        .arg(report)
        .arg("--quiet")
        .assert()
        .success()
        .stderr(predicates::str::contains("OK:").not());
}

#[test]
fn report_path_must_differ_from_input() {
    let temp = TempDir::new().expect("tempdir");
    let input = temp.path().join("dump.bin");
    fs::write(&input, [0x01]).expect("write input");

    cmd()
        .arg("inspect")
        .arg(&input)
        .arg("-o")
        .arg(&input)
        .assert()
        .failure()
        .stderr(contains("report path must differ from input"));
    assert_eq!(fs::read(&input).expect("read input"), vec![0x01]);
}

#[test]
fn glob_must_match_a_single_file() {
    let temp = TempDir::new().expect("tempdir");
    fs::write(temp.path().join("a.bin"), [0x01]).expect("write a");
    fs::write(temp.path().join("b.bin"), [0x02]).expect("write b");

    cmd()
        .arg("inspect")
        .arg(temp.path().join("*.bin"))
        .assert()
        .failure()
        .stderr(contains("multiple files match pattern"));

    let assert = cmd()
        .arg("inspect")
        .arg(temp.path().join("a.*"))
        .arg("--format")
        .arg("Int LE Dec")
        .assert()
        .success();
    assert_eq!(table_value(&stdout_of(&assert), "Int LE Dec"), "1");
}
