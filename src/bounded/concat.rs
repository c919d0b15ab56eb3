//! Bounded string concatenation into a fixed-capacity buffer.
//!
//! The capacity is the length of the destination slice. Existing content
//! ends at the first NUL; the appended result is always NUL-terminated.

use crate::foundation::cstr::{c_str, c_strlen};
use crate::foundation::error::ConcatError;

/// Append the string in `src` to the string already held in `dest`.
///
/// Succeeds only when `existing + src + 1` fits in `dest.len()`. On error
/// `dest` is not modified. Returns the new content length.
///
/// Example: with `dest = b"ab\0\0\0"`, `safe_concat(dest, Some(b"cd"))`
/// leaves `b"abcd\0"` and returns `Ok(4)`.
pub fn safe_concat(dest: &mut [u8], src: Option<&[u8]>) -> Result<usize, ConcatError> {
    let src = c_str(src.ok_or(ConcatError::NullArgument)?);
    let capacity = dest.len();
    let existing = c_strlen(dest);
    let needed = existing + src.len() + 1;

    // existing <= capacity, so the free space never underflows
    if src.len() >= capacity - existing {
        return Err(ConcatError::CapacityExceeded { needed, capacity });
    }

    let end = existing + src.len();
    dest[existing..end].copy_from_slice(src);
    dest[end] = 0;
    Ok(end)
}
