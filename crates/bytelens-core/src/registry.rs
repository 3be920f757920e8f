//! Ordered collection of named format decoders.
//!
//! Registration order is display order. Names are not unique: a later entry
//! with an existing name is appended, never substituted. `decode_all` is the
//! aggregation boundary; it always returns one outcome per entry, converting
//! both `Err` returns and panics of individual transforms into
//! [`DecodeOutcome::Failed`].

use std::panic::{self, AssertUnwindSafe};

use log::{debug, warn};

use crate::DecodeError;
use crate::formats::{binary, escape, float, integer, leb128, text};

/// A pure byte-to-text transform.
pub type Transform = Box<dyn Fn(&[u8]) -> Result<String, DecodeError> + Send + Sync>;

/// Display names of the built-in decoders, in registration order.
pub const DEFAULT_FORMATS: [&str; 16] = [
    "Int LE Hex",
    "Int LE Dec",
    "Int BE Hex",
    "Int BE Dec",
    "Float LE",
    "Float BE",
    "Binary LE",
    "Binary BE",
    "ULEB128",
    "SLEB128",
    "Bytes",
    "UTF-8",
    "UTF-16 LE",
    "UTF-16 BE",
    "UTF-32 LE",
    "UTF-32 BE",
];

pub struct Decoder {
    name: String,
    transform: Transform,
}

impl Decoder {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the transform, converting a panic into `DecodeError::Other`.
    pub fn decode(&self, buffer: &[u8]) -> DecodeOutcome {
        let result = panic::catch_unwind(AssertUnwindSafe(|| (self.transform)(buffer)));
        match result {
            Ok(Ok(text)) => DecodeOutcome::Rendered(text),
            Ok(Err(err)) => {
                debug!("format {:?} failed: {}", self.name, err);
                DecodeOutcome::Failed(err)
            }
            Err(payload) => {
                let message = panic_message(payload.as_ref());
                warn!("format {:?} panicked: {}", self.name, message);
                DecodeOutcome::Failed(DecodeError::Other(format!(
                    "decoder panicked: {message}"
                )))
            }
        }
    }
}

impl std::fmt::Debug for Decoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Decoder").field("name", &self.name).finish()
    }
}

/// Result of one decoder applied to one buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeOutcome {
    Rendered(String),
    Failed(DecodeError),
}

impl DecodeOutcome {
    /// Rendered text, or `sentinel` for any failure.
    ///
    /// # Examples
    /// ```
    /// use bytelens_core::{DecodeError, DecodeOutcome};
    ///
    /// let failed = DecodeOutcome::Failed(DecodeError::EmptyBuffer);
    /// assert_eq!(failed.display_or("<error>"), "<error>");
    /// ```
    pub fn display_or<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            DecodeOutcome::Rendered(text) => text.as_str(),
            DecodeOutcome::Failed(_) => sentinel,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, DecodeOutcome::Failed(_))
    }

    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            DecodeOutcome::Rendered(_) => None,
            DecodeOutcome::Failed(err) => Some(err),
        }
    }
}

/// Ordered, append-only list of decoders.
///
/// # Examples
/// ```
/// use bytelens_core::{DecodeOutcome, Registry};
///
/// let mut registry = Registry::with_default_formats();
/// registry.register("Length", |bytes: &[u8]| Ok(bytes.len().to_string()));
///
/// let rows = registry.decode_all(&[0xe5, 0x8e, 0x26]);
/// assert_eq!(rows.len(), 17);
/// assert_eq!(rows[8].0, "ULEB128");
/// assert_eq!(rows[8].1, DecodeOutcome::Rendered("624485".to_string()));
/// assert_eq!(rows[16].1, DecodeOutcome::Rendered("3".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct Registry {
    decoders: Vec<Decoder>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in decoders in [`DEFAULT_FORMATS`] order.
    pub fn with_default_formats() -> Self {
        let mut registry = Self::new();
        add_default_formats(&mut registry);
        registry
    }

    /// Append a decoder. Existing entries with the same name are kept.
    pub fn register<F>(&mut self, name: impl Into<String>, transform: F)
    where
        F: Fn(&[u8]) -> Result<String, DecodeError> + Send + Sync + 'static,
    {
        self.decoders.push(Decoder {
            name: name.into(),
            transform: Box::new(transform),
        });
    }

    /// Apply every decoder to `buffer` in registration order.
    ///
    /// Never fails; the result has exactly one entry per registered decoder.
    pub fn decode_all(&self, buffer: &[u8]) -> Vec<(String, DecodeOutcome)> {
        self.decoders
            .iter()
            .map(|decoder| (decoder.name.clone(), decoder.decode(buffer)))
            .collect()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.decoders.iter().map(Decoder::name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().any(|candidate| candidate == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Decoder> {
        self.decoders.iter()
    }

    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}

/// Register the built-in decoders. The order is part of the display contract.
pub fn add_default_formats(registry: &mut Registry) {
    use crate::formats::ByteOrder::{Big, Little};

    registry.register("Int LE Hex", |b: &[u8]| integer::int_hex(b, Little));
    registry.register("Int LE Dec", |b: &[u8]| integer::int_dec(b, Little));
    registry.register("Int BE Hex", |b: &[u8]| integer::int_hex(b, Big));
    registry.register("Int BE Dec", |b: &[u8]| integer::int_dec(b, Big));
    registry.register("Float LE", |b: &[u8]| float::float(b, Little));
    registry.register("Float BE", |b: &[u8]| float::float(b, Big));
    registry.register("Binary LE", |b: &[u8]| Ok(binary::binary(b, Little)));
    registry.register("Binary BE", |b: &[u8]| Ok(binary::binary(b, Big)));
    registry.register("ULEB128", leb128::uleb128);
    registry.register("SLEB128", leb128::sleb128);
    registry.register("Bytes", |b: &[u8]| Ok(escape::escape_bytes(b)));
    registry.register("UTF-8", text::utf8);
    registry.register("UTF-16 LE", |b: &[u8]| text::utf16(b, Little));
    registry.register("UTF-16 BE", |b: &[u8]| text::utf16(b, Big));
    registry.register("UTF-32 LE", |b: &[u8]| text::utf32(b, Little));
    registry.register("UTF-32 BE", |b: &[u8]| text::utf32(b, Big));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
