//! Hex text to integer conversion with `%x` scan semantics.
//!
//! Works directly on the input bytes, no heap allocation.

use crate::foundation::error::HexError;

/// Parse the leading hex number in `hex`.
///
/// Accepted shape: `[ws]* [+|-]? [0x|0X]? <hex digits>` followed by anything.
/// Scanning stops at the first non-hex byte. A leading minus wraps the value
/// the way the C scanner does (`"-1"` → `0xffff_ffff`). `0x` with no digit
/// after it is read as the single digit `0`.
///
/// Example: `hex_to_int("  0x1F rest")` returns `Ok(31)`.
pub fn hex_to_int<S: AsRef<[u8]> + ?Sized>(hex: &S) -> Result<u32, HexError> {
    let bytes = hex.as_ref();
    let mut pos = bytes
        .iter()
        .position(|&b| !is_c_space(b))
        .ok_or(HexError::Empty)?;

    let negative = match bytes[pos] {
        b'-' => {
            pos += 1;
            true
        }
        b'+' => {
            pos += 1;
            false
        }
        _ => false,
    };

    if bytes.len() > pos + 2
        && bytes[pos] == b'0'
        && matches!(bytes[pos + 1], b'x' | b'X')
        && hex_digit(bytes[pos + 2]).is_some()
    {
        pos += 2;
    }

    let mut value: u32 = 0;
    let mut count = 0;
    for digit in bytes[pos..].iter().map_while(|&b| hex_digit(b)) {
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(digit as u32))
            .ok_or(HexError::Overflow)?;
        count += 1;
    }
    if count == 0 {
        return Err(HexError::NoDigits);
    }

    Ok(if negative { value.wrapping_neg() } else { value })
}

/// Convert a single ASCII hex character to its 4-bit value.
fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// C `isspace`: unlike `u8::is_ascii_whitespace`, includes vertical tab.
fn is_c_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
