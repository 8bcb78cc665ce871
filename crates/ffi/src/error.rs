use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;
use tire_calc_core::CalcError;

/// Common interface for FFI error types.
///
/// - `code()` - Returns the error code to be passed across FFI boundary
/// - `msg()` - Returns the error message for diagnostic purposes
///
/// # Example
/// ```rust,ignore
/// let err = DefaultTireCalcError::null_pointer("out");
/// assert_eq!(err.code(), TireCalcErrorCode::NullPointer);
/// assert_eq!(err.msg(), "Parameter 'out' cannot be null");
/// ```
pub(crate) trait TireCalcError {
    /// Returns the error code to be returned across the FFI boundary.
    fn code(&self) -> TireCalcErrorCode;

    /// Returns the human-readable error message.
    fn msg(&self) -> &str;
}

/// Default implementation of `TireCalcError` for the FFI error scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultTireCalcError {
    code: TireCalcErrorCode,
    msg: String,
}

impl DefaultTireCalcError {
    /// Create error for null pointer passed where non-null required.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"out"`, `"unit"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: TireCalcErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for a unit tag that is not recognized.
    ///
    /// The message is always `"Invalid unit"`, matching the core library.
    pub fn invalid_unit() -> Self {
        Self {
            code: TireCalcErrorCode::InvalidUnit,
            msg: CalcError::invalid_unit("").to_string(),
        }
    }

    /// Create error for invalid parameter.
    ///
    /// # Arguments
    /// * `message` - Description of the error
    pub fn invalid_parameter(message: String) -> Self {
        Self {
            code: TireCalcErrorCode::InvalidParameter,
            msg: message,
        }
    }
}

impl From<CalcError> for DefaultTireCalcError {
    fn from(error: CalcError) -> Self {
        match error {
            CalcError::InvalidUnit { .. } => Self::invalid_unit(),
        }
    }
}

impl TireCalcError for DefaultTireCalcError {
    fn code(&self) -> TireCalcErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by tire calculator functions.
/// Follows standard C convention: 0 = success, non-zero = error.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TireCalcErrorCode {
    /// Operation completed successfully.
    Ok = 0,

    /// Invalid pointer: null pointer passed where non-null required.
    NullPointer = 1,

    /// Unit tag is not one of the recognized units.
    InvalidUnit = 2,

    /// Invalid parameter passed to function (e.g. a tag that is not UTF-8).
    InvalidParameter = 3,
}

impl From<DefaultTireCalcError> for TireCalcErrorCode {
    fn from(error: DefaultTireCalcError) -> Self {
        error.code
    }
}

thread_local! {
    /// Thread-local storage for the most recent FFI error (C string, error code).
    /// The CString is stored to prevent memory leaks when returning raw pointers via FFI.
    static LAST_ERROR: RefCell<(Option<CString>, TireCalcErrorCode)> = const { RefCell::new((None, TireCalcErrorCode::Ok)) };
}

/// Internal helper to read `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, TireCalcErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Internal helper to mutate `LAST_ERROR` thread-local storage (cstring, code).
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, TireCalcErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Retrieve the most recent FFI error message as a null-terminated C string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call failed.
/// - `null` if the last call succeeded.
///
/// # Thread Safety
/// Error messages are stored per-thread, so each thread has its own
/// independent error state.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// **DO NOT FREE THIS POINTER** - it is managed internally.
///
/// Example:
/// ```cpp
/// RevsResult revs;
/// if (tire_calc_revs(201.88, "furlong", &revs) != TireCalcErrorCode::Ok) {
///     printf("%s\n", tire_calc_get_last_error()); // "Invalid unit"
/// }
/// ```
#[no_mangle]
pub extern "C" fn tire_calc_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Retrieve the most recent FFI error code.
///
/// Returns `TireCalcErrorCode::Ok` (0) if the last call succeeded.
#[no_mangle]
pub extern "C" fn tire_calc_get_last_error_code() -> TireCalcErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
