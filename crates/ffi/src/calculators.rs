//! FFI wrappers for the dimension calculators.
//!
//! Unit tags cross the boundary as C strings (`"inch"`, `"cm"`) exactly as the
//! calculator UI sends them; they are parsed here.

use crate::error::{DefaultTireCalcError, TireCalcErrorCode};
use crate::helpers::{finish, read_tag, read_tag_lossy};
use crate::types::{CircumferenceResult, RevsResult, TireCalcSidewallUnit};
use std::os::raw::c_char;
use tire_calc_core::{
    calculate_circumference_tagged, calculate_revs_tagged, calculate_sidewall_height,
    calculate_tire_height, LinearUnit, TireSpec,
};

/// Sidewall height from aspect ratio (percent) and width (mm).
#[no_mangle]
pub extern "C" fn tire_calc_sidewall_height(
    aspect_ratio: f64,
    width: f64,
    unit: TireCalcSidewallUnit,
) -> f64 {
    calculate_sidewall_height(aspect_ratio, width, unit.into())
}

/// Overall tire height in inches.
#[no_mangle]
pub extern "C" fn tire_calc_tire_height(width: f64, aspect_ratio: f64, wheel_diameter: f64) -> f64 {
    calculate_tire_height(&TireSpec::new(width, aspect_ratio, wheel_diameter))
}

/// Circumference of a diameter, expressed in `target_unit`.
///
/// An unrecognized `diameter_unit` (including one that is not valid UTF-8) is
/// used without conversion. An unrecognized `target_unit` fails with
/// `InvalidUnit`.
///
/// # Safety
/// - `diameter_unit` and `target_unit` must be null or valid null-terminated strings.
/// - `out` must be null or valid for one write.
#[no_mangle]
pub unsafe extern "C" fn tire_calc_circumference(
    diameter: f64,
    diameter_unit: *const c_char,
    target_unit: *const c_char,
    out: *mut CircumferenceResult,
) -> TireCalcErrorCode {
    // SAFETY: forwarded caller contract
    finish(unsafe { write_circumference(diameter, diameter_unit, target_unit, out) })
}

unsafe fn write_circumference(
    diameter: f64,
    diameter_unit: *const c_char,
    target_unit: *const c_char,
    out: *mut CircumferenceResult,
) -> Result<(), DefaultTireCalcError> {
    if out.is_null() {
        return Err(DefaultTireCalcError::null_pointer("out"));
    }
    let diameter_unit = unsafe { read_tag_lossy(diameter_unit, "diameter_unit") }?;
    let target: LinearUnit = unsafe { read_tag(target_unit, "target_unit") }?.parse()?;

    let circumference = calculate_circumference_tagged(diameter, &diameter_unit, target);
    // SAFETY: checked non-null above
    unsafe {
        *out = CircumferenceResult {
            value: circumference.value,
            unit: circumference.unit.into(),
        };
    }
    Ok(())
}

/// Tire revolutions per mile (`"inch"`) or per km (`"cm"`).
///
/// Fails with `InvalidUnit` ("Invalid unit") for any other tag.
///
/// # Safety
/// - `unit` must be null or a valid null-terminated string.
/// - `out` must be null or valid for one write.
#[no_mangle]
pub unsafe extern "C" fn tire_calc_revs(
    value: f64,
    unit: *const c_char,
    out: *mut RevsResult,
) -> TireCalcErrorCode {
    // SAFETY: forwarded caller contract
    finish(unsafe { write_revs(value, unit, out) })
}

unsafe fn write_revs(
    value: f64,
    unit: *const c_char,
    out: *mut RevsResult,
) -> Result<(), DefaultTireCalcError> {
    if out.is_null() {
        return Err(DefaultTireCalcError::null_pointer("out"));
    }
    let unit = unsafe { read_tag(unit, "unit") }?;
    let revs = calculate_revs_tagged(value, unit)?;
    // SAFETY: checked non-null above
    unsafe {
        *out = RevsResult {
            value: revs.value,
            unit: revs.unit.into(),
        };
    }
    Ok(())
}
