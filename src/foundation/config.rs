//! Constants and return codes for the things string utilities.
//!
//! ## C Mapping
//!
//! | Framework C name        | Rust                          |
//! |-------------------------|-------------------------------|
//! | `MAX_INPUT_QUERY_LEN`   | [`MAX_INPUT_QUERY_LEN`]       |
//! | `MAX_BUF_LEN`           | [`MAX_BUF_LEN`]               |
//! | `"id="` literal         | [`ID_KEY`]                    |
//! | separator set           | [`QUERY_SEPARATORS`]          |
//! | `1` / `0` int returns   | [`SUCCESS`] / [`FAILURE`]     |

// ═══════════════════════════════════════════════════════════════════════
// BUFFER LIMITS
// ═══════════════════════════════════════════════════════════════════════

/// Largest query the C entry point will accept, in bytes (terminator excluded).
pub const MAX_INPUT_QUERY_LEN: usize = 100;

/// Largest owned string `concat_owned` will build, terminator included.
pub const MAX_BUF_LEN: usize = 2048;

// ═══════════════════════════════════════════════════════════════════════
// QUERY GRAMMAR
// ═══════════════════════════════════════════════════════════════════════

/// Marker preceding the identifier value.
pub const ID_KEY: &[u8] = b"id=";

/// Characters that end a key=value segment.
pub const QUERY_SEPARATORS: &[u8] = b"?;#&";

/// Stripped from the query before matching.
pub const QUERY_WHITESPACE: u8 = b' ';

// ═══════════════════════════════════════════════════════════════════════
// RETURN CODES (C entry points)
// ═══════════════════════════════════════════════════════════════════════

pub const SUCCESS: i32 = 1;
pub const FAILURE: i32 = 0;
/// Returned by `things_string_compare` for absent input or differing lengths.
pub const COMPARE_MISMATCH: i32 = -1;
/// Returned by `things_string_hex_to_int` when the input holds nothing to scan.
pub const SCAN_EOF: i32 = -1;
