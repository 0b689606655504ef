//! Hexadecimal helpers.
//!
//! Card traffic is exchanged with the host as hex strings, so validation
//! happens on the string form and single bytes are decoded only where a
//! value has to be inspected.

/// True when `s` is non-empty and made of ASCII hex digits only.
///
/// Mirrors the `[a-fA-F0-9]+` pattern used by the host boundary. Length
/// parity is checked separately by [`is_even_hex`].
pub fn is_hex_string(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

/// True when `s` is a hex string of even length, i.e. whole bytes.
pub fn is_even_hex(s: &str) -> bool {
    s.len() % 2 == 0 && is_hex_string(s)
}

/// Parse exactly one byte from a two-character hex string.
pub fn byte_from_hex(pair: &str) -> Option<u8> {
    if pair.len() != 2 || !is_hex_string(pair) {
        return None;
    }
    u8::from_str_radix(pair, 16).ok()
}
