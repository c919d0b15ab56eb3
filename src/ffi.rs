//! C entry points for the device framework.
//!
//! Each export keeps the framework's int/pointer return convention and logs
//! the reason for a failure; the Rust functions underneath stay silent and
//! return typed errors.
//!
//! ## Exports
//!
//! | C symbol                          | Rust                                  |
//! |-----------------------------------|---------------------------------------|
//! | `things_get_id_value_from_query`  | `query::id::extract_id_into`          |
//! | `things_strncpy`                  | `bounded::copy::safe_copy`            |
//! | `things_strcat`                   | `bounded::concat::safe_concat`        |
//! | `things_string_compare`           | `owned::compare::compare`             |
//! | `things_string_hex_to_int`        | `convert::hex::hex_to_int`            |

use core::cmp::Ordering;
use core::ffi::{c_char, c_int, CStr};
use core::ptr;
use core::slice;

use crate::bounded::concat::safe_concat;
use crate::bounded::copy::safe_copy;
use crate::convert::hex::hex_to_int;
use crate::foundation::config::*;
use crate::foundation::error::HexError;
use crate::owned::compare::compare;
use crate::query::id::extract_id_bytes_into;

/// Borrow a C string as bytes. None for a null pointer.
///
/// # Safety
/// A non-null `ptr` must point to a NUL-terminated string that outlives `'a`.
unsafe fn c_bytes<'a>(ptr: *const c_char) -> Option<&'a [u8]> {
    if ptr.is_null() {
        None
    } else {
        Some(CStr::from_ptr(ptr).to_bytes())
    }
}

fn printable(bytes: &[u8]) -> &str {
    core::str::from_utf8(bytes).unwrap_or("<non-utf8>")
}

// ═══════════════════════════════════════════════════════════════════════
// Query id extraction
// ═══════════════════════════════════════════════════════════════════════

/// Extract the numeric `id=` value of `input_query` into `idvalue`.
///
/// `size` is the caller's bound on the query length and may not exceed
/// `MAX_INPUT_QUERY_LEN`. Returns `SUCCESS` with a NUL-terminated digit
/// string in `idvalue`, or `FAILURE` with `idvalue[0] == 0`.
///
/// # Safety
/// `idvalue` must be writable for `idvalue_size` bytes. `input_query` must be
/// null or a NUL-terminated string not overlapping `idvalue`.
#[no_mangle]
pub unsafe extern "C" fn things_get_id_value_from_query(
    idvalue: *mut c_char,
    idvalue_size: usize,
    input_query: *const c_char,
    size: usize,
) -> c_int {
    let query = c_bytes(input_query);
    match query {
        Some(q) => log::debug!("Input query => {}", printable(q)),
        None => log::debug!("Input query is NULL"),
    }

    if idvalue.is_null() {
        log::error!("id value buffer is NULL");
        return FAILURE;
    }
    if size > MAX_INPUT_QUERY_LEN {
        log::debug!("Input size bigger than maximum query size({})", MAX_INPUT_QUERY_LEN);
        if idvalue_size > 0 {
            *idvalue = 0;
        }
        return FAILURE;
    }

    let out = slice::from_raw_parts_mut(idvalue.cast::<u8>(), idvalue_size);
    match extract_id_bytes_into(query, size, out) {
        Ok(_) => SUCCESS,
        Err(e) => {
            log::debug!("id extraction failed: {}", e);
            FAILURE
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Bounded copy / concat
// ═══════════════════════════════════════════════════════════════════════

/// `strncpy` that refuses a null source. Returns `destination`, or null.
///
/// # Safety
/// `destination` must be writable for `num` bytes. `source` must be null or a
/// NUL-terminated string not overlapping `destination`.
#[no_mangle]
pub unsafe extern "C" fn things_strncpy(
    destination: *mut c_char,
    source: *const c_char,
    num: usize,
) -> *mut c_char {
    let Some(src) = c_bytes(source) else {
        log::error!("Input String is NULL");
        return ptr::null_mut();
    };
    if destination.is_null() {
        log::error!("Destination buffer is NULL");
        return ptr::null_mut();
    }

    let dest = slice::from_raw_parts_mut(destination.cast::<u8>(), num);
    match safe_copy(dest, Some(src), num) {
        Ok(_) => destination,
        Err(e) => {
            log::error!("{}", e);
            ptr::null_mut()
        }
    }
}

/// Append `src` to the string in `dest`. Returns `dest`, or null with
/// `dest` unchanged when the result would not fit in `dest_size` bytes.
///
/// # Safety
/// `dest` must be writable for `dest_size` bytes. `src` must be null or a
/// NUL-terminated string not overlapping `dest`.
#[no_mangle]
pub unsafe extern "C" fn things_strcat(
    dest: *mut c_char,
    dest_size: usize,
    src: *const c_char,
) -> *mut c_char {
    if dest.is_null() || src.is_null() || dest_size == 0 {
        log::error!(
            "dest({:p}) or src({:p}) or dest_size={} is NULL.",
            dest,
            src,
            dest_size
        );
        return ptr::null_mut();
    }

    let buf = slice::from_raw_parts_mut(dest.cast::<u8>(), dest_size);
    match safe_concat(buf, c_bytes(src)) {
        Ok(_) => dest,
        Err(e) => {
            log::error!("{}", e);
            ptr::null_mut()
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Compare / hex
// ═══════════════════════════════════════════════════════════════════════

/// `0` when equal, `-1` or `1` by byte order; `-1` for null input or
/// differing lengths.
///
/// # Safety
/// Both pointers must be null or NUL-terminated strings.
#[no_mangle]
pub unsafe extern "C" fn things_string_compare(src: *const c_char, dst: *const c_char) -> c_int {
    match compare(c_bytes(src), c_bytes(dst)) {
        Ok(Ordering::Less) => -1,
        Ok(Ordering::Equal) => 0,
        Ok(Ordering::Greater) => 1,
        Err(_) => COMPARE_MISMATCH,
    }
}

/// Scan a hex number into `num`. Returns the number of values stored:
/// `1`, `0` when nothing convertible was found, `SCAN_EOF` on empty input.
///
/// # Safety
/// `hex` must be null or a NUL-terminated string; `num` must be null or
/// writable.
#[no_mangle]
pub unsafe extern "C" fn things_string_hex_to_int(hex: *const c_char, num: *mut c_int) -> c_int {
    let Some(bytes) = c_bytes(hex) else {
        log::error!("Input String is NULL");
        return FAILURE;
    };
    if num.is_null() {
        log::error!("Output pointer is NULL");
        return FAILURE;
    }

    match hex_to_int(bytes) {
        Ok(value) => {
            *num = value as c_int;
            SUCCESS
        }
        Err(HexError::Empty) => SCAN_EOF,
        Err(e) => {
            log::debug!("hex scan of {} failed: {}", printable(bytes), e);
            FAILURE
        }
    }
}
