//! bytelens core library: byte selections rendered in many formats at once.
//!
//! A [`Registry`] holds named, pure decoders (`&[u8] -> Result<String,
//! DecodeError>`) in display order. `decode_all` applies each of them to one
//! borrowed buffer and returns one [`DecodeOutcome`] per decoder; a failing
//! decoder only fails its own row. Selection sources isolate file I/O, and
//! the inspection layer turns a decode pass into a serializable [`Report`].
//!
//! Invariants:
//! - Row order always equals registration order.
//! - Decoders never mutate or retain the buffer.
//! - `decode_all` is total: errors and panics become `Failed` rows.
//!
//! # Examples
//! ```
//! use bytelens_core::Registry;
//!
//! let registry = Registry::with_default_formats();
//! for (name, outcome) in registry.decode_all(&[0x9b, 0xf1, 0x59]) {
//!     println!("{name}: {}", outcome.display_or("<error>"));
//! }
//! ```

use std::fmt::Write;

use serde::{Deserialize, Serialize};

mod error;
pub mod formats;
mod inspect;
mod registry;
mod selection;
mod source;

pub use error::DecodeError;
pub use inspect::{InspectError, inspect_file, inspect_source};
pub use registry::{
    DEFAULT_FORMATS, DecodeOutcome, Decoder, Registry, Transform, add_default_formats,
};
pub use selection::{Selection, SelectionError};
pub use source::{FileSource, MemorySource, SelectionSource, SourceError};

/// Current report schema version.
pub const REPORT_VERSION: u32 = 1;
/// Display text hosts conventionally show for failed rows.
pub const DEFAULT_ERROR_SENTINEL: &str = "<error>";

/// One decode pass over a selection, rows in registry order.
///
/// # Examples
/// ```
/// use bytelens_core::{Selection, make_stub_report};
///
/// let report = make_stub_report("dump.bin", 64, Selection::whole(64));
/// assert_eq!(report.report_version, bytelens_core::REPORT_VERSION);
/// assert!(report.rows.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (not the binary version).
    pub report_version: u32,
    /// Tool identification metadata.
    pub tool: ToolInfo,
    /// Input metadata.
    pub input: InputInfo,
    /// Decoded range within the input.
    pub selection: SelectionInfo,
    /// One row per registered decoder.
    pub rows: Vec<FormatRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInfo {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputInfo {
    /// Input path (or label) as provided to the inspector.
    pub path: String,
    /// Total input size in bytes.
    pub bytes: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionInfo {
    pub offset: u64,
    pub length: u64,
}

/// Outcome of one decoder; exactly one of `value` and `error` is present.
///
/// # Examples
/// ```
/// use bytelens_core::{DecodeError, DecodeOutcome, FormatRow};
///
/// let row = FormatRow::from_outcome("UTF-8", DecodeOutcome::Failed(
///     DecodeError::InvalidEncoding { encoding: "UTF-8" },
/// ));
/// assert_eq!(row.display_or("<error>"), "<error>");
/// assert_eq!(row.error.unwrap().kind, "InvalidEncoding");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatRow {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RowError>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowError {
    /// Stable kind name, e.g. `TruncatedVarint`.
    pub kind: String,
    pub message: String,
}

impl FormatRow {
    pub fn from_outcome(name: impl Into<String>, outcome: DecodeOutcome) -> Self {
        let name = name.into();
        match outcome {
            DecodeOutcome::Rendered(text) => Self {
                name,
                value: Some(text),
                error: None,
            },
            DecodeOutcome::Failed(err) => Self {
                name,
                value: None,
                error: Some(RowError {
                    kind: err.kind().to_string(),
                    message: err.to_string(),
                }),
            },
        }
    }

    pub fn display_or<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match &self.value {
            Some(text) => text.as_str(),
            None => sentinel,
        }
    }

    pub fn is_failed(&self) -> bool {
        self.error.is_some()
    }
}

/// Build a report with base fields filled and no rows.
pub fn make_stub_report(input_path: &str, input_bytes: u64, selection: Selection) -> Report {
    Report {
        report_version: REPORT_VERSION,
        tool: ToolInfo {
            name: "bytelens".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        input: InputInfo {
            path: input_path.to_string(),
            bytes: input_bytes,
        },
        selection: SelectionInfo {
            offset: selection.start(),
            length: selection.len(),
        },
        rows: vec![],
    }
}

/// Two-column text table: names left-aligned to the longest name, failed
/// rows shown as `sentinel`, rendered values written verbatim.
///
/// # Examples
/// ```
/// use bytelens_core::{DecodeError, DecodeOutcome, FormatRow, render_table};
///
/// let rows = vec![
///     FormatRow::from_outcome("ULEB128", DecodeOutcome::Rendered("300".to_string())),
///     FormatRow::from_outcome("UTF-8", DecodeOutcome::Failed(DecodeError::EmptyBuffer)),
/// ];
/// assert_eq!(render_table(&rows, "<error>"), "ULEB128  300\nUTF-8    <error>\n");
/// ```
pub fn render_table(rows: &[FormatRow], sentinel: &str) -> String {
    let width = rows
        .iter()
        .map(|row| row.name.chars().count())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for row in rows {
        let _ = writeln!(out, "{:<width$}  {}", row.name, row.display_or(sentinel));
    }
    out
}
