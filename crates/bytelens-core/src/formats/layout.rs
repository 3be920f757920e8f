pub const HALF_LEN: usize = 2;
pub const SINGLE_LEN: usize = 4;
pub const DOUBLE_LEN: usize = 8;
pub const EXTENDED_LEN: usize = 10;

/// Rendered for 80-bit extended precision selections, which are recognized
/// but not decoded.
pub const EXTENDED_PLACEHOLDER: &str = "extended precision not implemented";

pub const HALF_SIGN_MASK: u16 = 0x8000;
pub const HALF_EXPONENT_MASK: u16 = 0x7c00;
pub const HALF_FRACTION_MASK: u16 = 0x03ff;
pub const HALF_EXPONENT_SHIFT: u32 = 10;
pub const HALF_EXPONENT_MAX: u16 = 0x1f;
/// binary32 exponent bias minus binary16 exponent bias.
pub const HALF_TO_SINGLE_BIAS: u32 = 127 - 15;
/// Smallest binary16 subnormal, 2^-24.
pub const HALF_SUBNORMAL_UNIT: f32 = 1.0 / 16_777_216.0;

pub const LEB128_PAYLOAD_MASK: u8 = 0x7f;
pub const LEB128_CONTINUATION: u8 = 0x80;
pub const SLEB128_SIGN_BIT: u8 = 0x40;
pub const LEB128_BITS_PER_BYTE: u32 = 7;
/// Shift of the tenth byte, the last one that can contribute to 64 bits.
pub const LEB128_LAST_SHIFT: u32 = 63;

pub const UTF16_UNIT: usize = 2;
pub const UTF32_UNIT: usize = 4;

/// Decimal limb base used for arbitrary precision rendering.
pub const DECIMAL_LIMB_BASE: u64 = 1_000_000_000;
pub const DECIMAL_LIMB_DIGITS: usize = 9;
