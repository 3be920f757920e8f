//! LEB128 (Little Endian Base 128) varint decoding.
//!
//! Seven payload bits per byte, high bit set while more bytes follow. Only
//! the bytes the encoding needs are consumed; anything after the terminating
//! byte is ignored. Both variants are capped at 64 bits.

use super::layout;
use super::reader::ByteReader;
use crate::DecodeError;

/// Decode an unsigned LEB128 value.
/// Returns the value and the number of bytes consumed.
pub fn decode_uleb128(data: &[u8]) -> Result<(u64, usize), DecodeError> {
    let mut reader = ByteReader::new(data);
    let mut result: u64 = 0;
    let mut shift: u32 = 0;

    loop {
        let byte = reader.next_varint_byte()?;
        let low_bits = (byte & layout::LEB128_PAYLOAD_MASK) as u64;

        if shift > layout::LEB128_LAST_SHIFT
            || (shift == layout::LEB128_LAST_SHIFT && low_bits > 1)
        {
            return Err(DecodeError::Overflow);
        }

        result |= low_bits << shift;
        shift += layout::LEB128_BITS_PER_BYTE;

        if byte & layout::LEB128_CONTINUATION == 0 {
            break;
        }
    }

    Ok((result, reader.consumed()))
}

/// Decode a signed LEB128 value.
/// Returns the value and the number of bytes consumed.
pub fn decode_sleb128(data: &[u8]) -> Result<(i64, usize), DecodeError> {
    let mut reader = ByteReader::new(data);
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    let last = loop {
        let byte = reader.next_varint_byte()?;
        let low_bits = byte & layout::LEB128_PAYLOAD_MASK;

        if shift > layout::LEB128_LAST_SHIFT {
            return Err(DecodeError::Overflow);
        }
        if shift == layout::LEB128_LAST_SHIFT {
            // Only bit 63 fits; the rest must repeat it as sign padding.
            if low_bits != 0 && low_bits != layout::LEB128_PAYLOAD_MASK {
                return Err(DecodeError::Overflow);
            }
        }

        result |= (low_bits as i64) << shift;
        shift += layout::LEB128_BITS_PER_BYTE;

        if byte & layout::LEB128_CONTINUATION == 0 {
            break byte;
        }
    };

    if shift < 64 && last & layout::SLEB128_SIGN_BIT != 0 {
        result |= !0i64 << shift;
    }

    Ok((result, reader.consumed()))
}

/// # Examples
/// ```
/// use bytelens_core::formats::leb128::uleb128;
///
/// assert_eq!(uleb128(&[0xe5, 0x8e, 0x26]).unwrap(), "624485");
/// ```
pub fn uleb128(data: &[u8]) -> Result<String, DecodeError> {
    decode_uleb128(data).map(|(value, _)| value.to_string())
}

/// # Examples
/// ```
/// use bytelens_core::formats::leb128::sleb128;
///
/// assert_eq!(sleb128(&[0x9b, 0xf1, 0x59]).unwrap(), "-624485");
/// ```
pub fn sleb128(data: &[u8]) -> Result<String, DecodeError> {
    decode_sleb128(data).map(|(value, _)| value.to_string())
}
