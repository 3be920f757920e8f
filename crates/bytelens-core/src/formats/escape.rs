use std::fmt::Write;

/// Render raw bytes with a fixed escape table.
///
/// | byte              | output        |
/// |-------------------|---------------|
/// | `0x09` `0x0a` `0x0d` | `\t` `\n` `\r` |
/// | `0x5c`            | `\\`          |
/// | `0x20..=0x7e`     | the character |
/// | anything else     | `\xNN`        |
///
/// Quote characters are not escaped since the output is not delimited.
///
/// # Examples
/// ```
/// use bytelens_core::formats::escape::escape_bytes;
///
/// assert_eq!(escape_bytes(b"ok\n\x00\xff"), "ok\\n\\x00\\xff");
/// ```
pub fn escape_bytes(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for &byte in bytes {
        match byte {
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\\' => out.push_str("\\\\"),
            0x20..=0x7e => out.push(byte as char),
            _ => {
                let _ = write!(out, "\\x{byte:02x}");
            }
        }
    }
    out
}
