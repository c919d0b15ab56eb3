//! Owned string duplication with allocation-failure reporting.

use alloc::string::String;

use crate::foundation::error::DuplicateError;

/// Copy `src` into a freshly allocated `String`.
///
/// Uses `try_reserve_exact` so an exhausted heap surfaces as
/// `AllocationFailed` instead of aborting the device.
pub fn duplicate(src: Option<&str>) -> Result<String, DuplicateError> {
    let src = src.ok_or(DuplicateError::NullSource)?;
    let mut dup = String::new();
    dup.try_reserve_exact(src.len())
        .map_err(|_| DuplicateError::AllocationFailed { len: src.len() })?;
    dup.push_str(src);
    Ok(dup)
}
