//! Things string utilities: bounded string primitives for the device stack
//!
//! # Architecture
//!
//! The framework's string helpers, reshaped around typed results instead of
//! sentinel returns:
//!
//! | Framework helper                   | Rust module                  |
//! |------------------------------------|------------------------------|
//! | things_get_id_value_from_query     | query::id                    |
//! | things_strncpy                     | bounded::copy                |
//! | things_strcat                      | bounded::concat              |
//! | things_string_concat               | owned::concat                |
//! | things_strdup / string_duplicate   | owned::dup                   |
//! | things_string_compare              | owned::compare               |
//! | things_string_hex_to_int           | convert::hex                 |
//! | MAX_* limits, return codes         | foundation::config           |
//!
//! # Query ids
//!
//! Resource handlers receive queries such as `"if=oic.if.baseline;id=42"`.
//! [`extract_id`] strips spaces, finds the first `id=`, cuts the value at the
//! first of `?;#&`, and accepts it only if every byte is a digit:
//!
//! ```
//! use things_string::{extract_id, ExtractError};
//!
//! assert_eq!(extract_id(Some("foo=bar&id=42"), 100).unwrap().as_str(), "42");
//! assert_eq!(extract_id(Some("id=12a3"), 100), Err(ExtractError::InvalidValue { byte: b'a' }));
//! ```
//!
//! # C Exports
//!
//! The [`ffi`] module exposes the same operations under the framework's C
//! names. Logging happens there, through the `log` facade; the library
//! itself reports failures only through its error types.
//!
//! All functions are stateless and allocation is limited to the `owned`
//! helpers and [`extract_id`]'s return value.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod bounded;
pub mod convert;
pub mod ffi;
pub mod foundation;
pub mod owned;
pub mod query;


pub use bounded::concat::safe_concat;
pub use bounded::copy::safe_copy;
pub use convert::hex::hex_to_int;
pub use foundation::error::{
    CompareError, ConcatError, CopyError, DuplicateError, ExtractError, HexError,
};
pub use owned::compare::compare;
pub use owned::concat::concat_owned;
pub use owned::dup::duplicate;
pub use query::id::{extract_id, extract_id_into, IdValue};
