//! Built-in byte-to-text format decoders.
//!
//! Each decoder follows the same layered structure:
//! - `layout`: widths, masks and fixed strings (source of truth)
//! - `reader`: safe byte access and shared conventions
//! - one module per family (`integer`, `float`, `binary`, `leb128`,
//!   `escape`, `text`) holding the pure transforms
//!
//! Transforms borrow the buffer, never retain it and return a structured
//! `DecodeError` instead of panicking. Registration order and display names
//! live in `registry`.

pub mod binary;
pub mod escape;
pub mod float;
pub mod integer;
pub mod layout;
pub mod leb128;
pub(crate) mod reader;
pub mod text;

/// Byte order applied before a buffer is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    Little,
    Big,
}
