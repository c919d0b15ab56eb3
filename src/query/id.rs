//! Numeric `id=` extraction from resource query strings.
//!
//! Grammar handled (after every `' '` is dropped):
//!
//! ```text
//! <anything> "id=" <digits> [ ( "?" | ";" | "#" | "&" ) <anything> ]
//! ```
//!
//! The first `id=` wins. The value runs to the first separator after the
//! marker, or to the end of the query. A single non-digit in the value
//! rejects the whole query; an empty value is a valid, empty id.
//!
//! Nothing here allocates except [`extract_id`], which collects the digits
//! into an owned [`IdValue`]. The space-stripped query is never materialized:
//! matching runs over a filtered byte iterator.

use alloc::string::String;
use core::fmt;

use crate::foundation::config::{ID_KEY, QUERY_SEPARATORS, QUERY_WHITESPACE};
use crate::foundation::error::ExtractError;

/// A validated identifier: ASCII digits only, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct IdValue(String);

impl IdValue {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// Decimal value of the id.
    /// Returns None for an empty id or one above `u32::MAX`.
    pub fn to_u32(&self) -> Option<u32> {
        if self.0.is_empty() {
            return None;
        }
        self.0.bytes().try_fold(0u32, |acc, b| {
            acc.checked_mul(10)?.checked_add((b - b'0') as u32)
        })
    }
}

impl AsRef<str> for IdValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the digits assigned to `id` in `query`.
///
/// Example: `extract_id(Some("foo=bar&id=42"), 100)` yields `"42"`.
///
/// Errors, in the order they are checked:
///   - `NoInput` when `query` is None
///   - `InputTooLong` when `query.len() > max_len` (content is not inspected)
///   - `KeyNotFound` when no `id=` survives space removal
///   - `InvalidValue` when the value holds any non-digit
pub fn extract_id(query: Option<&str>, max_len: usize) -> Result<IdValue, ExtractError> {
    let value = locate_value(query.map(str::as_bytes), max_len)?;
    Ok(IdValue(value.map(char::from).collect()))
}

/// Allocation-free [`extract_id`]: writes the digits and a NUL into `out`.
///
/// Returns the digit count. On any error no digit is written and `out[0]`
/// (if present) is set to NUL, so the buffer always reads as a valid
/// C string. Fails with `BufferTooSmall` when `out` cannot hold
/// digits + terminator.
pub fn extract_id_into(
    query: Option<&str>,
    max_len: usize,
    out: &mut [u8],
) -> Result<usize, ExtractError> {
    extract_id_bytes_into(query.map(str::as_bytes), max_len, out)
}

/// Byte-level [`extract_id_into`] for queries that arrive as raw C strings.
pub(crate) fn extract_id_bytes_into(
    query: Option<&[u8]>,
    max_len: usize,
    out: &mut [u8],
) -> Result<usize, ExtractError> {
    let result = locate_value(query, max_len).and_then(|value| {
        let len = value.clone().count();
        if len >= out.len() {
            return Err(ExtractError::BufferTooSmall {
                needed: len + 1,
                capacity: out.len(),
            });
        }
        for (slot, b) in out.iter_mut().zip(value) {
            *slot = b;
        }
        out[len] = 0;
        Ok(len)
    });

    if result.is_err() {
        if let Some(first) = out.first_mut() {
            *first = 0;
        }
    }
    result
}

/// Find the value region of the first `id=` and validate it.
/// The returned iterator yields exactly the value's digits.
fn locate_value(
    query: Option<&[u8]>,
    max_len: usize,
) -> Result<impl Iterator<Item = u8> + Clone + '_, ExtractError> {
    let query = query.ok_or(ExtractError::NoInput)?;
    if query.len() > max_len {
        return Err(ExtractError::InputTooLong {
            len: query.len(),
            max: max_len,
        });
    }

    let mut bytes = query.iter().copied().filter(|&b| b != QUERY_WHITESPACE);

    // `id=` has no proper prefix that is also a suffix, so after a mismatch
    // only the current byte can start a new match.
    let mut matched = 0;
    while matched < ID_KEY.len() {
        let b = bytes.next().ok_or(ExtractError::KeyNotFound)?;
        matched = if b == ID_KEY[matched] {
            matched + 1
        } else {
            usize::from(b == ID_KEY[0])
        };
    }

    let value = bytes.take_while(|b| !QUERY_SEPARATORS.contains(b));
    if let Some(byte) = value.clone().find(|b| !b.is_ascii_digit()) {
        return Err(ExtractError::InvalidValue { byte });
    }
    Ok(value)
}
