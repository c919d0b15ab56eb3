//! Growing an owned string under the `MAX_BUF_LEN` staging bound.

use alloc::string::String;

use crate::foundation::config::MAX_BUF_LEN;
use crate::foundation::error::ConcatError;

/// Append `attach` to `target`, creating the string when `target` is None.
///
/// The result plus a terminator must fit in `MAX_BUF_LEN`. On error `target`
/// keeps its previous value.
pub fn concat_owned(target: &mut Option<String>, attach: Option<&str>) -> Result<(), ConcatError> {
    let attach = attach.ok_or(ConcatError::NullArgument)?;
    let existing = target.as_deref().map_or(0, str::len);
    let needed = existing + attach.len() + 1;
    if needed > MAX_BUF_LEN {
        return Err(ConcatError::CapacityExceeded {
            needed,
            capacity: MAX_BUF_LEN,
        });
    }

    target.get_or_insert_with(String::new).push_str(attach);
    Ok(())
}
