//! IEEE-754 float decoding dispatched on the exact selection length.
//!
//! Values render with the shortest text that round-trips at the decoded
//! width; binary16 values are widened exactly to binary32 first.

use std::fmt::Debug;

use super::ByteOrder;
use super::layout;
use super::reader::fixed;
use crate::DecodeError;

/// Decode a 2, 4 or 8 byte float. A 10 byte selection yields
/// [`layout::EXTENDED_PLACEHOLDER`]; any other length is unsupported.
///
/// # Examples
/// ```
/// use bytelens_core::formats::ByteOrder;
/// use bytelens_core::formats::float::float;
///
/// assert_eq!(float(&[0x00, 0x00, 0x80, 0x3f], ByteOrder::Little).unwrap(), "1.0");
/// assert_eq!(float(&[0x3c, 0x00], ByteOrder::Big).unwrap(), "1.0");
/// ```
pub fn float(bytes: &[u8], order: ByteOrder) -> Result<String, DecodeError> {
    let unsupported = DecodeError::UnsupportedFloatSize { len: bytes.len() };
    match bytes.len() {
        layout::HALF_LEN => {
            let raw = fixed::<2>(bytes).ok_or(unsupported)?;
            let bits = match order {
                ByteOrder::Little => u16::from_le_bytes(raw),
                ByteOrder::Big => u16::from_be_bytes(raw),
            };
            let value = decode_f16(bits);
            Ok(render(value, value.is_nan()))
        }
        layout::SINGLE_LEN => {
            let raw = fixed::<4>(bytes).ok_or(unsupported)?;
            let value = match order {
                ByteOrder::Little => f32::from_le_bytes(raw),
                ByteOrder::Big => f32::from_be_bytes(raw),
            };
            Ok(render(value, value.is_nan()))
        }
        layout::DOUBLE_LEN => {
            let raw = fixed::<8>(bytes).ok_or(unsupported)?;
            let value = match order {
                ByteOrder::Little => f64::from_le_bytes(raw),
                ByteOrder::Big => f64::from_be_bytes(raw),
            };
            Ok(render(value, value.is_nan()))
        }
        layout::EXTENDED_LEN => Ok(layout::EXTENDED_PLACEHOLDER.to_string()),
        _ => Err(unsupported),
    }
}

/// Widen an IEEE-754 binary16 bit pattern to `f32` without rounding.
///
/// # Examples
/// ```
/// use bytelens_core::formats::float::decode_f16;
///
/// assert_eq!(decode_f16(0x3c00), 1.0);
/// assert_eq!(decode_f16(0xc000), -2.0);
/// assert!(decode_f16(0x7c00).is_infinite());
/// assert!(decode_f16(0x7e00).is_nan());
/// ```
pub fn decode_f16(bits: u16) -> f32 {
    let negative = bits & layout::HALF_SIGN_MASK != 0;
    let exponent = (bits & layout::HALF_EXPONENT_MASK) >> layout::HALF_EXPONENT_SHIFT;
    let fraction = (bits & layout::HALF_FRACTION_MASK) as u32;
    let sign = if negative { 1u32 << 31 } else { 0 };

    if exponent == 0 {
        // Zero or subnormal: fraction * 2^-24, exact in f32.
        let magnitude = fraction as f32 * layout::HALF_SUBNORMAL_UNIT;
        return if negative { -magnitude } else { magnitude };
    }
    if exponent == layout::HALF_EXPONENT_MAX {
        return f32::from_bits(sign | 0x7f80_0000 | (fraction << 13));
    }
    let exponent = exponent as u32 + layout::HALF_TO_SINGLE_BIAS;
    f32::from_bits(sign | (exponent << 23) | (fraction << 13))
}

fn render<T: Debug>(value: T, is_nan: bool) -> String {
    if is_nan {
        return "nan".to_string();
    }
    format!("{value:?}")
}
