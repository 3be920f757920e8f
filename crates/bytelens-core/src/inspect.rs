use std::path::Path;

use log::debug;
use thiserror::Error;

use crate::source::{FileSource, SelectionSource, SourceError};
use crate::{FormatRow, Registry, Report, Selection, make_stub_report};

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("Source error: {0}")]
    Source(#[from] SourceError),
}

/// Decode a selection of a file with every format in `registry`.
///
/// `None` selects the whole file.
pub fn inspect_file(
    path: &Path,
    selection: Option<Selection>,
    registry: &Registry,
) -> Result<Report, InspectError> {
    let source = FileSource::open(path)?;
    inspect_source(&path.display().to_string(), source, selection, registry)
}

/// Decode a selection read from `source`; `input_label` names the input in
/// the report.
pub fn inspect_source<S: SelectionSource>(
    input_label: &str,
    mut source: S,
    selection: Option<Selection>,
    registry: &Registry,
) -> Result<Report, InspectError> {
    let available = source.len();
    let selection = selection.unwrap_or_else(|| Selection::whole(available));
    let bytes = source.read(selection)?;
    debug!(
        "decoding {} bytes with {} formats",
        bytes.len(),
        registry.len()
    );

    let mut report = make_stub_report(input_label, available, selection);
    report.rows = registry
        .decode_all(&bytes)
        .into_iter()
        .map(|(name, outcome)| FormatRow::from_outcome(name, outcome))
        .collect();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::inspect_source;
    use crate::source::MemorySource;
    use crate::{DEFAULT_FORMATS, Registry, Selection};

    #[test]
    fn rows_follow_registry_order() {
        let registry = Registry::with_default_formats();
        let source = MemorySource::new(vec![0xe5, 0x8e, 0x26]);
        let report = inspect_source("<memory>", source, None, &registry).unwrap();
        let names: Vec<&str> = report.rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, DEFAULT_FORMATS);
        assert_eq!(report.selection.length, 3);
        assert_eq!(report.input.bytes, 3);
    }

    #[test]
    fn selection_narrows_decoded_bytes() {
        let registry = Registry::with_default_formats();
        let source = MemorySource::new(b"xx\xe5\x8e\x26yy".to_vec());
        let selection = Selection::from_offset_len(2, 3).unwrap();
        let report = inspect_source("<memory>", source, Some(selection), &registry).unwrap();
        let uleb = report.rows.iter().find(|row| row.name == "ULEB128").unwrap();
        assert_eq!(uleb.value.as_deref(), Some("624485"));
        assert_eq!(report.selection.offset, 2);
        assert_eq!(report.input.bytes, 7);
    }

    #[test]
    fn out_of_range_selection_is_an_error() {
        let registry = Registry::with_default_formats();
        let source = MemorySource::new(vec![0; 2]);
        let selection = Selection::from_offset_len(1, 4).unwrap();
        let err = inspect_source("<memory>", source, Some(selection), &registry).unwrap_err();
        assert!(err.to_string().contains("exceeds input"));
    }
}
