use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bytelens_core::{FileSource, Selection, SelectionError, SelectionSource, SourceError};

fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
}

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let mut path = std::env::temp_dir();
    let unique = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    path.push(format!("bytelens_{name}_{unique}.bin"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn file_source_reads_whole_fixture() {
    let path = repo_root()
        .join("tests")
        .join("golden")
        .join("leb128")
        .join("input.bin");
    let mut source = FileSource::open(&path).unwrap();

    let len = source.len();
    assert_eq!(len, 3);
    let bytes = source.read(Selection::whole(len)).unwrap();
    assert_eq!(bytes, vec![0xe5, 0x8e, 0x26]);
}

#[test]
fn file_source_reads_inner_range() {
    let path = temp_file("range", b"0123456789");
    let mut source = FileSource::open(&path).unwrap();
    let first = source.read(Selection::new(2, 5).unwrap()).unwrap();
    let second = source.read(Selection::new(0, 1).unwrap()).unwrap();
    let _ = fs::remove_file(&path);

    assert_eq!(first, b"234");
    assert_eq!(second, b"0");
}

#[test]
fn file_source_rejects_range_past_end() {
    let path = temp_file("past_end", &[0x00, 0x01]);
    let mut source = FileSource::open(&path).unwrap();
    let err = match source.read(Selection::from_offset_len(1, 2).unwrap()) {
        Ok(_) => panic!("expected out-of-range selection to be rejected"),
        Err(err) => err,
    };
    let _ = fs::remove_file(&path);

    assert!(matches!(
        err,
        SourceError::Selection(SelectionError::OutOfRange { available: 2, .. })
    ));
}

#[test]
fn file_source_reports_missing_file() {
    let path = repo_root().join("tests").join("golden").join("missing.bin");
    let err = match FileSource::open(&path) {
        Ok(_) => panic!("expected missing file to be rejected"),
        Err(err) => err,
    };
    assert!(matches!(err, SourceError::Io(_)));
}
