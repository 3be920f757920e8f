//! Strict text decoding. No replacement characters, no BOM handling.
//!
//! Decoded text is returned as-is, control characters included.

use super::ByteOrder;
use super::layout;
use crate::DecodeError;

pub fn utf8(bytes: &[u8]) -> Result<String, DecodeError> {
    std::str::from_utf8(bytes)
        .map(str::to_string)
        .map_err(|_| DecodeError::InvalidEncoding { encoding: "UTF-8" })
}

/// # Examples
/// ```
/// use bytelens_core::formats::ByteOrder;
/// use bytelens_core::formats::text::utf16;
///
/// assert_eq!(utf16(&[0x68, 0x00, 0x69, 0x00], ByteOrder::Little).unwrap(), "hi");
/// assert!(utf16(&[0x00, 0x68, 0x00], ByteOrder::Big).is_err());
/// ```
pub fn utf16(bytes: &[u8], order: ByteOrder) -> Result<String, DecodeError> {
    let invalid = DecodeError::InvalidEncoding {
        encoding: match order {
            ByteOrder::Little => "UTF-16 LE",
            ByteOrder::Big => "UTF-16 BE",
        },
    };
    if bytes.len() % layout::UTF16_UNIT != 0 {
        return Err(invalid);
    }
    let units = bytes.chunks_exact(layout::UTF16_UNIT).map(|unit| {
        let raw = [unit[0], unit[1]];
        match order {
            ByteOrder::Little => u16::from_le_bytes(raw),
            ByteOrder::Big => u16::from_be_bytes(raw),
        }
    });
    char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|_| invalid)
}

pub fn utf32(bytes: &[u8], order: ByteOrder) -> Result<String, DecodeError> {
    let invalid = DecodeError::InvalidEncoding {
        encoding: match order {
            ByteOrder::Little => "UTF-32 LE",
            ByteOrder::Big => "UTF-32 BE",
        },
    };
    if bytes.len() % layout::UTF32_UNIT != 0 {
        return Err(invalid);
    }
    bytes
        .chunks_exact(layout::UTF32_UNIT)
        .map(|unit| {
            let raw = [unit[0], unit[1], unit[2], unit[3]];
            let code = match order {
                ByteOrder::Little => u32::from_le_bytes(raw),
                ByteOrder::Big => u32::from_be_bytes(raw),
            };
            char::from_u32(code)
        })
        .collect::<Option<String>>()
        .ok_or(invalid)
}
