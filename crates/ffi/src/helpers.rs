use crate::error::{with_last_error_mut, DefaultTireCalcError, TireCalcError, TireCalcErrorCode};
use std::borrow::Cow;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

/// Set the thread-local error message and code.
/// Accepts any type implementing `TireCalcError` trait.
pub(crate) fn set_last_error(error: &impl TireCalcError) {
    with_last_error_mut(|(cstring, code)| {
        *cstring = CString::new(error.msg()).ok();
        *code = error.code();
    });
}

/// Track an error by setting it in thread-local storage and returning its code.
#[inline]
pub(crate) fn track_error(error: &impl TireCalcError) -> TireCalcErrorCode {
    set_last_error(error);
    error.code()
}

/// Clear the thread-local error message and code.
/// Called on successful operations.
pub(crate) fn clear_last_error() {
    with_last_error_mut(|(cstring, code)| {
        *cstring = None;
        *code = TireCalcErrorCode::Ok;
    });
}

/// Record the outcome of an FFI call and convert it to an error code.
pub(crate) fn finish(result: Result<(), DefaultTireCalcError>) -> TireCalcErrorCode {
    match result {
        Ok(()) => {
            clear_last_error();
            TireCalcErrorCode::Ok
        }
        Err(error) => track_error(&error),
    }
}

/// Borrow a unit tag passed from C.
///
/// # Safety
/// `ptr` must be null or point to a valid null-terminated string that outlives `'a`.
pub(crate) unsafe fn read_tag<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<&'a str, DefaultTireCalcError> {
    if ptr.is_null() {
        return Err(DefaultTireCalcError::null_pointer(param_name));
    }
    // SAFETY: checked non-null above; validity is the caller's contract
    unsafe { CStr::from_ptr(ptr) }.to_str().map_err(|e| {
        DefaultTireCalcError::invalid_parameter(format!(
            "Parameter '{param_name}' is not valid UTF-8: {e}"
        ))
    })
}

/// Borrow a tag passed from C, replacing invalid UTF-8.
///
/// For tags where anything unrecognized is tolerated: a replaced sequence can
/// never match a known unit, so it falls into the same path.
///
/// # Safety
/// `ptr` must be null or point to a valid null-terminated string that outlives `'a`.
pub(crate) unsafe fn read_tag_lossy<'a>(
    ptr: *const c_char,
    param_name: &str,
) -> Result<Cow<'a, str>, DefaultTireCalcError> {
    if ptr.is_null() {
        return Err(DefaultTireCalcError::null_pointer(param_name));
    }
    // SAFETY: checked non-null above; validity is the caller's contract
    Ok(unsafe { CStr::from_ptr(ptr) }.to_string_lossy())
}

/// Write `values` into a caller-provided buffer, at most `capacity` items,
/// and report the full count through `out_len`.
///
/// Only the written prefix is ever produced, so a size query
/// (`capacity = 0`) costs nothing however long `values` is.
///
/// # Safety
/// `out` must be valid for `capacity` writes (or may be null when `capacity` is 0).
/// `out_len` must be null or valid for one write.
pub(crate) unsafe fn write_exact<T, I>(
    values: I,
    out: *mut T,
    capacity: usize,
    out_len: *mut usize,
) -> Result<(), DefaultTireCalcError>
where
    I: ExactSizeIterator<Item = T>,
{
    if out_len.is_null() {
        return Err(DefaultTireCalcError::null_pointer("out_len"));
    }
    if out.is_null() && capacity > 0 {
        return Err(DefaultTireCalcError::null_pointer("out"));
    }

    let total = values.len();
    for (i, value) in values.take(capacity).enumerate() {
        // SAFETY: `out` is non-null and valid for `capacity > i` writes
        unsafe { out.add(i).write(value) };
    }
    // SAFETY: checked non-null above
    unsafe { *out_len = total };
    Ok(())
}
