//! Selected byte ranges over a larger buffer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("selection end {end} is before start {start}")]
    Inverted { start: u64, end: u64 },
    #[error("selection offset {offset} + length {length} overflows")]
    Overflow { offset: u64, length: u64 },
    #[error("selection {start}..{end} exceeds input of {available} bytes")]
    OutOfRange { start: u64, end: u64, available: u64 },
}

/// Half-open byte range `[start, end)`.
///
/// # Examples
/// ```
/// use bytelens_core::Selection;
///
/// let selection = Selection::from_offset_len(2, 3)?;
/// assert_eq!(selection.slice(b"abcdefg")?, b"cde");
/// assert!(selection.is_touched_by(4, 10));
/// assert!(!selection.is_touched_by(6, 1));
/// # Ok::<(), bytelens_core::SelectionError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    start: u64,
    end: u64,
}

impl Selection {
    pub fn new(start: u64, end: u64) -> Result<Self, SelectionError> {
        if end < start {
            return Err(SelectionError::Inverted { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn from_offset_len(offset: u64, length: u64) -> Result<Self, SelectionError> {
        let end = offset
            .checked_add(length)
            .ok_or(SelectionError::Overflow { offset, length })?;
        Ok(Self { start: offset, end })
    }

    /// Everything in an input of `len` bytes.
    pub fn whole(len: u64) -> Self {
        Self { start: 0, end: len }
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn end(&self) -> u64 {
        self.end
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Fails unless the range lies within `[0, available)`.
    pub fn check_within(&self, available: u64) -> Result<(), SelectionError> {
        if self.end > available {
            return Err(SelectionError::OutOfRange {
                start: self.start,
                end: self.end,
                available,
            });
        }
        Ok(())
    }

    pub fn slice<'a>(&self, data: &'a [u8]) -> Result<&'a [u8], SelectionError> {
        self.check_within(data.len() as u64)?;
        // Bounded by data.len(), so both fit in usize.
        Ok(&data[self.start as usize..self.end as usize])
    }

    /// Whether a write of `length` bytes at `offset` can change the selected
    /// bytes. Bounds are inclusive, so adjacent writes also count.
    pub fn is_touched_by(&self, offset: u64, length: u64) -> bool {
        let write_end = offset.saturating_add(length);
        !(offset > self.end || write_end < self.start)
    }
}
