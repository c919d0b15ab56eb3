//! NUL-terminated views over byte buffers.
//!
//! Buffers handed in by the framework are fixed-size `[u8]` regions whose
//! logical content ends at the first `0x00`. A buffer with no NUL is treated
//! as full.

/// Length of the string stored in `buf`, not counting the terminator.
pub fn c_strlen(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}

/// The logical content of `buf`, terminator excluded.
pub fn c_str(buf: &[u8]) -> &[u8] {
    &buf[..c_strlen(buf)]
}
