//! FFI wrappers for the range generator and the tire size lister.
//!
//! Both write into a caller-owned buffer. At most `capacity` items are
//! written and `out_len` always receives the full count, so a caller can
//! call once with `capacity = 0` to size the buffer:
//!
//! ```c
//! size_t len = 0;
//! tire_calc_list_tires(&min, &max, 16.0, NULL, NULL, 0, &len);
//! TireC* tires = malloc(len * sizeof(TireC));
//! tire_calc_list_tires(&min, &max, 16.0, NULL, tires, len, &len);
//! ```

use crate::error::{DefaultTireCalcError, TireCalcErrorCode};
use crate::helpers::{finish, write_exact};
use crate::types::{HeightLimitsC, TireC, TireDataFormC};
use tire_calc_core::{list_tires_per_wheel_diameter, HeightLimits, StepRange, TireDataForm};

/// Integers from `start` towards `stop` (exclusive) keeping every
/// `round(step)`-th one. Empty when `step < 1`.
///
/// # Safety
/// - `out` must be valid for `capacity` writes, or null when `capacity` is 0.
/// - `out_len` must be null or valid for one write.
#[no_mangle]
pub unsafe extern "C" fn tire_calc_range(
    start: i64,
    stop: i64,
    step: f64,
    out: *mut i64,
    capacity: usize,
    out_len: *mut usize,
) -> TireCalcErrorCode {
    // The length is known up front; nothing past `capacity` is generated
    let values = StepRange::new(start, stop, step);
    // SAFETY: forwarded caller contract
    finish(unsafe { write_exact(values, out, capacity, out_len) })
}

/// List tire sizes between `min` and `max` fitting `wheel_diameter`, sorted
/// by overall height.
///
/// A null `height_limits` uses `{ min->height_limit, max->height_limit }`.
///
/// # Safety
/// - `min` and `max` must be null or valid for reads.
/// - `height_limits` must be null or valid for reads.
/// - `out` must be valid for `capacity` writes, or null when `capacity` is 0.
/// - `out_len` must be null or valid for one write.
#[no_mangle]
pub unsafe extern "C" fn tire_calc_list_tires(
    min: *const TireDataFormC,
    max: *const TireDataFormC,
    wheel_diameter: f64,
    height_limits: *const HeightLimitsC,
    out: *mut TireC,
    capacity: usize,
    out_len: *mut usize,
) -> TireCalcErrorCode {
    // SAFETY: forwarded caller contract
    finish(unsafe { list_tires(min, max, wheel_diameter, height_limits, out, capacity, out_len) })
}

unsafe fn list_tires(
    min: *const TireDataFormC,
    max: *const TireDataFormC,
    wheel_diameter: f64,
    height_limits: *const HeightLimitsC,
    out: *mut TireC,
    capacity: usize,
    out_len: *mut usize,
) -> Result<(), DefaultTireCalcError> {
    if min.is_null() {
        return Err(DefaultTireCalcError::null_pointer("min"));
    }
    if max.is_null() {
        return Err(DefaultTireCalcError::null_pointer("max"));
    }

    // SAFETY: checked non-null above
    let min: TireDataForm = unsafe { *min }.into();
    let max: TireDataForm = unsafe { *max }.into();
    // SAFETY: null is allowed and maps to the default window
    let limits: Option<HeightLimits> = unsafe { height_limits.as_ref() }.map(|l| (*l).into());

    let tires = list_tires_per_wheel_diameter(&min, &max, wheel_diameter, limits);

    // SAFETY: forwarded caller contract
    unsafe { write_exact(tires.iter().map(TireC::from), out, capacity, out_len) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ptr;

    #[test]
    fn test_range_into_buffer() {
        let mut buf = [0i64; 8];
        let mut len = 0usize;
        let code = unsafe { tire_calc_range(5, 1, 1.0, buf.as_mut_ptr(), buf.len(), &mut len) };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, 4);
        assert_eq!(&buf[..len], &[5, 4, 3, 2]);
    }

    #[test]
    fn test_range_size_query() {
        let mut len = 0usize;
        let code = unsafe { tire_calc_range(0, 10, 2.0, ptr::null_mut(), 0, &mut len) };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, 5);
    }

    #[test]
    fn test_range_truncates_to_capacity() {
        let mut buf = [0i64; 2];
        let mut len = 0usize;
        let code = unsafe { tire_calc_range(1, 6, 1.0, buf.as_mut_ptr(), buf.len(), &mut len) };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, 5);
        assert_eq!(buf, [1, 2]);
    }

    #[test]
    fn test_range_size_query_full_span() {
        let mut len = 0usize;
        let code =
            unsafe { tire_calc_range(i64::MIN, i64::MAX, 1.0, ptr::null_mut(), 0, &mut len) };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, usize::try_from(u64::MAX).unwrap_or(usize::MAX));
    }

    #[test]
    fn test_range_huge_span_writes_prefix() {
        let mut buf = [0i64; 3];
        let mut len = 0usize;
        let code =
            unsafe { tire_calc_range(0, 1 << 40, 1.0, buf.as_mut_ptr(), buf.len(), &mut len) };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, 1 << 40);
        assert_eq!(buf, [0, 1, 2]);
    }

    #[test]
    fn test_range_null_len() {
        let mut buf = [0i64; 2];
        let code = unsafe { tire_calc_range(1, 6, 1.0, buf.as_mut_ptr(), buf.len(), ptr::null_mut()) };
        assert_eq!(code, TireCalcErrorCode::NullPointer);
    }

    #[test]
    fn test_list_tires_default_limits() {
        let min = TireDataFormC {
            width: 185,
            aspect_ratio: 40,
            height_limit: 24.5,
        };
        let max = TireDataFormC {
            width: 245,
            aspect_ratio: 65,
            height_limit: 25.0,
        };
        let mut buf = [TireC::default(); 16];
        let mut len = 0usize;
        let code = unsafe {
            tire_calc_list_tires(&min, &max, 16.0, ptr::null(), buf.as_mut_ptr(), buf.len(), &mut len)
        };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, 4);
        assert_eq!(buf[0].width, 245.0);
        assert_eq!(buf[0].aspect_ratio, 45.0);
        assert_eq!(buf[0].height, 24.68);
        assert!(buf[..len].windows(2).all(|w| w[0].height <= w[1].height));
    }

    #[test]
    fn test_list_tires_explicit_limits() {
        let min = TireDataFormC {
            width: 205,
            aspect_ratio: 55,
            height_limit: 0.0,
        };
        let max = min;
        let limits = HeightLimitsC { min: 24.0, max: 25.0 };
        let mut len = 0usize;
        let code = unsafe {
            tire_calc_list_tires(&min, &max, 16.0, &limits, ptr::null_mut(), 0, &mut len)
        };
        assert_eq!(code, TireCalcErrorCode::Ok);
        assert_eq!(len, 1);
    }

    #[test]
    fn test_list_tires_null_form() {
        let max = TireDataFormC {
            width: 245,
            aspect_ratio: 65,
            height_limit: 25.0,
        };
        let mut len = 0usize;
        let code = unsafe {
            tire_calc_list_tires(ptr::null(), &max, 16.0, ptr::null(), ptr::null_mut(), 0, &mut len)
        };
        assert_eq!(code, TireCalcErrorCode::NullPointer);
    }
}
