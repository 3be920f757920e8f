use super::ByteOrder;

/// Render each byte as eight `0`/`1` characters, most significant bit
/// first, one space-separated group per byte.
///
/// Little-endian reverses the byte sequence only; bit order within a byte is
/// unchanged. An empty buffer renders as an empty string.
///
/// # Examples
/// ```
/// use bytelens_core::formats::ByteOrder;
/// use bytelens_core::formats::binary::binary;
///
/// assert_eq!(binary(&[0x01, 0x80], ByteOrder::Big), "00000001 10000000");
/// assert_eq!(binary(&[0x01, 0x80], ByteOrder::Little), "10000000 00000001");
/// ```
pub fn binary(bytes: &[u8], order: ByteOrder) -> String {
    let groups: Vec<String> = match order {
        ByteOrder::Big => bytes.iter().map(|b| format!("{b:08b}")).collect(),
        ByteOrder::Little => bytes.iter().rev().map(|b| format!("{b:08b}")).collect(),
    };
    groups.join(" ")
}
