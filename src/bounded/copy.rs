//! Bounded string copy (`strncpy` contract with an absent-source check).

use crate::foundation::cstr::c_str;
use crate::foundation::error::CopyError;

/// Copy at most `max_count` bytes of the string in `src` into `dest`.
///
/// `src` is read up to its first NUL. When it is shorter than the copy
/// window, the rest of the window is NUL-filled; when it is not, `dest` is
/// left unterminated, as with `strncpy`. The window is clamped to
/// `dest.len()`, so nothing past the destination is ever written.
///
/// Returns the number of string bytes copied. `dest` is untouched on error.
pub fn safe_copy(dest: &mut [u8], src: Option<&[u8]>, max_count: usize) -> Result<usize, CopyError> {
    let src = c_str(src.ok_or(CopyError::NullSource)?);
    let window = max_count.min(dest.len());
    let copied = src.len().min(window);

    dest[..copied].copy_from_slice(&src[..copied]);
    dest[copied..window].fill(0);
    Ok(copied)
}
