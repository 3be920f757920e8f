use super::{SelectionSource, SourceError};
use crate::Selection;

/// In-memory bytes, e.g. a hex string given on the command line.
///
/// # Examples
/// ```
/// use bytelens_core::{MemorySource, Selection, SelectionSource};
///
/// let mut source = MemorySource::new(vec![1, 2, 3, 4]);
/// assert_eq!(source.read(Selection::new(1, 3)?)?, vec![2, 3]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct MemorySource {
    bytes: Vec<u8>,
}

impl MemorySource {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl SelectionSource for MemorySource {
    fn len(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn read(&mut self, selection: Selection) -> Result<Vec<u8>, SourceError> {
        Ok(selection.slice(&self.bytes)?.to_vec())
    }
}
