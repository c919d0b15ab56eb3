//! Length-gated string comparison.

use core::cmp::Ordering;

use crate::foundation::error::CompareError;

/// Compare two strings that must be the same length.
///
/// Strings of different lengths are never ordered; they report
/// `LengthMismatch`. Equal-length strings compare byte-wise.
pub fn compare<S: AsRef<[u8]> + ?Sized>(
    src: Option<&S>,
    dst: Option<&S>,
) -> Result<Ordering, CompareError> {
    let (src, dst) = match (src, dst) {
        (Some(s), Some(d)) => (s.as_ref(), d.as_ref()),
        _ => return Err(CompareError::NullArgument),
    };
    if src.len() != dst.len() {
        return Err(CompareError::LengthMismatch {
            left: src.len(),
            right: dst.len(),
        });
    }
    Ok(src.cmp(dst))
}
