//! Arbitrary precision unsigned integer rendering.
//!
//! The whole buffer is one magnitude; there is no upper bound on its length.

use std::fmt::Write;

use super::ByteOrder;
use super::layout;
use super::reader::{big_endian_view, require_non_empty};
use crate::DecodeError;

/// Render the buffer as a lowercase, `0x`-prefixed hex integer.
///
/// # Examples
/// ```
/// use bytelens_core::formats::ByteOrder;
/// use bytelens_core::formats::integer::int_hex;
///
/// assert_eq!(int_hex(&[0x34, 0x12], ByteOrder::Little).unwrap(), "0x1234");
/// assert_eq!(int_hex(&[0x00, 0x0f], ByteOrder::Big).unwrap(), "0xf");
/// ```
pub fn int_hex(bytes: &[u8], order: ByteOrder) -> Result<String, DecodeError> {
    let magnitude = magnitude(bytes, order)?;
    let Some((first, rest)) = magnitude.split_first() else {
        return Ok("0x0".to_string());
    };
    let mut out = String::with_capacity(2 + magnitude.len() * 2);
    let _ = write!(out, "0x{first:x}");
    for byte in rest {
        let _ = write!(out, "{byte:02x}");
    }
    Ok(out)
}

/// Render the buffer as a base-10 integer without grouping.
///
/// # Examples
/// ```
/// use bytelens_core::formats::ByteOrder;
/// use bytelens_core::formats::integer::int_dec;
///
/// assert_eq!(int_dec(&[0x34, 0x12], ByteOrder::Little).unwrap(), "4660");
/// ```
pub fn int_dec(bytes: &[u8], order: ByteOrder) -> Result<String, DecodeError> {
    let magnitude = magnitude(bytes, order)?;

    // Little-endian limbs, each below DECIMAL_LIMB_BASE.
    let mut limbs: Vec<u32> = Vec::with_capacity(magnitude.len() / 3 + 1);
    for &byte in &magnitude {
        let mut carry = byte as u64;
        for limb in limbs.iter_mut() {
            let value = (*limb as u64) * 256 + carry;
            *limb = (value % layout::DECIMAL_LIMB_BASE) as u32;
            carry = value / layout::DECIMAL_LIMB_BASE;
        }
        while carry > 0 {
            limbs.push((carry % layout::DECIMAL_LIMB_BASE) as u32);
            carry /= layout::DECIMAL_LIMB_BASE;
        }
    }

    let Some((top, lower)) = limbs.split_last() else {
        return Ok("0".to_string());
    };
    let mut out = String::with_capacity(limbs.len() * layout::DECIMAL_LIMB_DIGITS);
    let _ = write!(out, "{top}");
    for limb in lower.iter().rev() {
        let _ = write!(out, "{limb:0width$}", width = layout::DECIMAL_LIMB_DIGITS);
    }
    Ok(out)
}

/// Big-endian magnitude with leading zero bytes stripped (empty for zero).
fn magnitude(bytes: &[u8], order: ByteOrder) -> Result<Vec<u8>, DecodeError> {
    require_non_empty(bytes)?;
    let mut view = big_endian_view(bytes, order);
    let leading = view.iter().take_while(|&&b| b == 0).count();
    view.drain(..leading);
    Ok(view)
}
