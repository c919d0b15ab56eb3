//! Error types for every operation family.
//!
//! Each enum is returned to the immediate caller; nothing in the core logs or
//! swallows them. The C layer in [`crate::ffi`] folds them back into int codes.

use thiserror::Error;

/// Failure of [`crate::query::id::extract_id`] and friends.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractError {
    /// Query was absent
    #[error("input query is absent")]
    NoInput,

    /// Query is longer than the caller's bound; content was not inspected
    #[error("input query is {len} bytes, maximum is {max}")]
    InputTooLong { len: usize, max: usize },

    /// No `id=` marker after space removal
    #[error("no \"id=\" in input query")]
    KeyNotFound,

    /// A non-digit byte appeared in the value region
    #[error("id value holds non-digit byte 0x{byte:02x}")]
    InvalidValue { byte: u8 },

    /// Output buffer cannot hold the digits plus terminator
    #[error("id value needs {needed} bytes, buffer holds {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },
}

/// Failure of [`crate::bounded::copy::safe_copy`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyError {
    #[error("source string is absent")]
    NullSource,
}

/// Failure of the bounded and owned concatenation primitives.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcatError {
    /// Source (or owned attachment) was absent
    #[error("concatenation argument is absent")]
    NullArgument,

    /// Existing content + source + terminator would not fit
    #[error("concatenation needs {needed} bytes, capacity is {capacity}")]
    CapacityExceeded { needed: usize, capacity: usize },
}

/// Failure of [`crate::owned::dup::duplicate`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicateError {
    #[error("source string is absent")]
    NullSource,

    #[error("allocation of {len} bytes failed")]
    AllocationFailed { len: usize },
}

/// Failure of [`crate::owned::compare::compare`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareError {
    #[error("comparison argument is absent")]
    NullArgument,

    #[error("lengths differ: {left} vs {right}")]
    LengthMismatch { left: usize, right: usize },
}

/// Failure of [`crate::convert::hex::hex_to_int`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HexError {
    /// Nothing but whitespace to scan
    #[error("hex input is empty")]
    Empty,

    /// Scan stopped before the first hex digit
    #[error("hex input holds no digits")]
    NoDigits,

    #[error("hex value does not fit in 32 bits")]
    Overflow,
}
