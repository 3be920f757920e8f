use thiserror::Error;

/// Structured failure of a single format decoder.
///
/// Hosts usually collapse every variant into one display sentinel, but the
/// kind is kept so callers and tests can tell failures apart.
///
/// # Examples
/// ```
/// use bytelens_core::DecodeError;
///
/// let err = DecodeError::UnsupportedFloatSize { len: 3 };
/// assert_eq!(err.kind(), "UnsupportedFloatSize");
/// assert!(err.to_string().contains("3 bytes"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("empty buffer")]
    EmptyBuffer,
    #[error("unsupported float size: {len} bytes")]
    UnsupportedFloatSize { len: usize },
    #[error("truncated varint: no terminating byte after {consumed} bytes")]
    TruncatedVarint { consumed: usize },
    #[error("varint overflows 64 bits")]
    Overflow,
    #[error("invalid {encoding} data")]
    InvalidEncoding { encoding: &'static str },
    #[error("{0}")]
    Other(String),
}

impl DecodeError {
    /// Stable kind name, independent of the variant payload.
    pub fn kind(&self) -> &'static str {
        match self {
            DecodeError::EmptyBuffer => "EmptyBuffer",
            DecodeError::UnsupportedFloatSize { .. } => "UnsupportedFloatSize",
            DecodeError::TruncatedVarint { .. } => "TruncatedVarint",
            DecodeError::Overflow => "Overflow",
            DecodeError::InvalidEncoding { .. } => "InvalidEncoding",
            DecodeError::Other(_) => "Other",
        }
    }
}
