use std::fs;
use std::path::Path;

use bytelens_core::{Registry, Report, inspect_file};

fn load_expected_report(dir: &str) -> Report {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let expected_path = root.join(dir).join("expected_report.json");

    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let input = root.join(dir).join("input.bin");
    let expected = load_expected_report(dir);

    let registry = Registry::with_default_formats();
    let mut actual = inspect_file(&input, None, &registry).expect("inspect input");
    actual.input.path = expected.input.path.clone();
    actual.tool.version = expected.tool.version.clone();

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_leb128() {
    run_golden("tests/golden/leb128");
}

#[test]
fn golden_ascii_text() {
    run_golden("tests/golden/ascii_text");
}

#[test]
fn golden_utf16_text() {
    run_golden("tests/golden/utf16_text");
}

#[test]
fn golden_empty() {
    run_golden("tests/golden/empty");
}

#[test]
fn golden_extended_float() {
    run_golden("tests/golden/extended_float");
}

#[test]
fn golden_leb128_has_varint_values() {
    let report = load_expected_report("tests/golden/leb128");
    let uleb = report.rows.iter().find(|row| row.name == "ULEB128").unwrap();
    assert_eq!(uleb.value.as_deref(), Some("624485"));
    let utf8 = report.rows.iter().find(|row| row.name == "UTF-8").unwrap();
    assert_eq!(utf8.error.as_ref().map(|e| e.kind.as_str()), Some("InvalidEncoding"));
}

#[test]
fn golden_empty_fails_integers_only_where_expected() {
    let report = load_expected_report("tests/golden/empty");
    let failed: Vec<&str> = report
        .rows
        .iter()
        .filter(|row| row.is_failed())
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(
        failed,
        [
            "Int LE Hex",
            "Int LE Dec",
            "Int BE Hex",
            "Int BE Dec",
            "Float LE",
            "Float BE",
            "ULEB128",
            "SLEB128",
        ]
    );
}
