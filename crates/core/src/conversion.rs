//! Tire dimension calculators
//!
//! Pure functions converting tire size figures between unit systems. Every
//! result is rounded to [`PRECISION`] decimal places.
//!
//! No domain validation is performed: zero, negative or non-finite inputs are
//! computed mechanically. Callers are expected to hand in form values they have
//! already validated.
//!
//! # Usage
//! ```
//! use tire_calc_core::conversion::{calculate_circumference, calculate_revs};
//! use tire_calc_core::core_types::{Diameter, DistanceUnit, LinearUnit};
//!
//! let circumference = calculate_circumference(&Diameter::new(64.26, LinearUnit::Cm), LinearUnit::Cm);
//! let revs = calculate_revs(&circumference);
//! assert_eq!(revs.unit, DistanceUnit::Km);
//! ```

use crate::core_types::units::{round_to, INCH_PER_MM, MM_PER_INCH, PRECISION};
use crate::core_types::{Circumference, Diameter, LinearUnit, Revs, SidewallUnit, TireSpec};
use crate::error::CalcError;
use std::f64::consts::PI;
use tracing::warn;

/// Sidewall height from aspect ratio (percent) and section width (mm).
///
/// `(aspect_ratio / 100) × width` gives millimeters; with
/// [`SidewallUnit::Inch`] the result is converted to inches.
pub fn calculate_sidewall_height(aspect_ratio: f64, width: f64, unit: SidewallUnit) -> f64 {
    let sidewall_height = (aspect_ratio / 100.0) * width;
    let converted = match unit {
        SidewallUnit::Inch => sidewall_height * INCH_PER_MM,
        SidewallUnit::Mm => sidewall_height,
    };
    round_to(converted, PRECISION)
}

/// Overall tire height in inches.
///
/// Both sidewalls (mm, from width and aspect ratio) are converted to inches
/// and added to the rim diameter, which is already in inches.
pub fn calculate_tire_height(spec: &TireSpec) -> f64 {
    let sidewall = (spec.width * spec.aspect_ratio) / 100.0;
    round_to((sidewall * 2.0) / MM_PER_INCH + spec.wheel_diameter, PRECISION)
}

/// Circumference of a diameter, expressed in `target`.
pub fn calculate_circumference(diameter: &Diameter, target: LinearUnit) -> Circumference {
    let converted = match diameter.diameter_unit.factor_to(target) {
        Some(factor) => diameter.diameter * factor,
        None => diameter.diameter,
    };
    circumference_of(converted, target)
}

/// Circumference of a diameter given with a raw unit tag.
///
/// An unrecognized `diameter_unit` tag is not rejected: the diameter is used
/// as-is, without conversion, and a warning is logged.
pub fn calculate_circumference_tagged(
    diameter: f64,
    diameter_unit: &str,
    target: LinearUnit,
) -> Circumference {
    match diameter_unit.parse::<LinearUnit>() {
        Ok(unit) => calculate_circumference(&Diameter::new(diameter, unit), target),
        Err(_) => {
            warn!(
                "Unrecognized diameter unit '{}', computing circumference in {} without conversion",
                diameter_unit, target
            );
            circumference_of(diameter, target)
        }
    }
}

#[inline]
fn circumference_of(diameter: f64, unit: LinearUnit) -> Circumference {
    Circumference::new(round_to(diameter * PI, PRECISION), unit)
}

/// Tire revolutions per mile (inch circumference) or per km (cm circumference).
pub fn calculate_revs(circumference: &Circumference) -> Revs {
    let conversion = circumference.unit.revs_conversion();
    Revs {
        value: round_to(conversion.factor / circumference.value, PRECISION),
        unit: conversion.unit,
    }
}

/// Revolutions per distance for a circumference given with a raw unit tag.
///
/// # Errors
/// [`CalcError::InvalidUnit`] ("Invalid unit") when `unit` is neither
/// `"inch"` nor `"cm"`.
pub fn calculate_revs_tagged(value: f64, unit: &str) -> Result<Revs, CalcError> {
    let unit: LinearUnit = unit.parse()?;
    Ok(calculate_revs(&Circumference::new(value, unit)))
}
