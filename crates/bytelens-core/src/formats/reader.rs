use super::ByteOrder;
use crate::DecodeError;

pub struct ByteReader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Next byte of a varint; running out is a truncation, not an empty buffer.
    pub fn next_varint_byte(&mut self) -> Result<u8, DecodeError> {
        let byte = self
            .bytes
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::TruncatedVarint {
                consumed: self.pos,
            })?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn consumed(&self) -> usize {
        self.pos
    }
}

/// Copy of `bytes` in most-significant-first order.
pub fn big_endian_view(bytes: &[u8], order: ByteOrder) -> Vec<u8> {
    match order {
        ByteOrder::Big => bytes.to_vec(),
        ByteOrder::Little => bytes.iter().rev().copied().collect(),
    }
}

pub fn require_non_empty(bytes: &[u8]) -> Result<(), DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyBuffer);
    }
    Ok(())
}

pub fn fixed<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    bytes.try_into().ok()
}
