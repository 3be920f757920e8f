//! Byte sources for selections.
//!
//! All file I/O lives here; decoders and the registry only ever see slices.

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use thiserror::Error;

use crate::{Selection, SelectionError};

pub trait SelectionSource {
    /// Total number of bytes available.
    fn len(&self) -> u64;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes covered by `selection`.
    fn read(&mut self, selection: Selection) -> Result<Vec<u8>, SourceError>;
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
}
