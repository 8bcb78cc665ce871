//! Unit tags and fixed conversion constants for tire measurements
//!
//! The calculator only ever deals with a handful of units, so each family is a
//! closed enum rather than an open string tag:
//! - [`SidewallUnit`]: inch or millimeter output for sidewall height
//! - [`LinearUnit`]: inch or centimeter for diameters and circumferences
//! - [`DistanceUnit`]: mile or kilometer for revolutions-per-distance
//!
//! Tags serialize in lowercase (`"inch"`, `"mm"`, `"cm"`, `"mile"`, `"km"`) to
//! match the form values used by the calculator UI. Parsing an unknown linear
//! unit tag fails with [`CalcError::InvalidUnit`].
//!
//! # Usage
//! ```
//! use tire_calc_core::core_types::{DistanceUnit, LinearUnit};
//!
//! let unit: LinearUnit = "cm".parse().unwrap();
//! assert_eq!(unit.revs_conversion().unit, DistanceUnit::Km);
//! assert!("furlong".parse::<LinearUnit>().is_err());
//! ```

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// CONVERSION CONSTANTS
// ============================================================================

/// Inches in one millimeter (sidewall height conversion)
pub const INCH_PER_MM: f64 = 0.03937008;

/// Millimeters in one inch (tire height conversion)
pub const MM_PER_INCH: f64 = 25.4;

/// Centimeters in one inch
pub const CM_PER_INCH: f64 = 2.54;

/// Inches in one centimeter
pub const INCH_PER_CM: f64 = 0.3937008;

/// Inches in one statute mile
pub const INCHES_PER_MILE: f64 = 63360.0;

/// Centimeters in one kilometer
pub const CM_PER_KM: f64 = 100000.0;

/// Decimal places every calculator result is rounded to
pub const PRECISION: i32 = 2;

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Below this magnitude `2n + 1` is exact for any integer `n`
const EXACT_HALF_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Round to a fixed number of decimal places.
///
/// Rounds the exact decimal value of `value` to the nearest multiple of
/// `10^-precision`, ties away from zero. `value * scale` alone is not enough:
/// the product is itself rounded, so `0.015` (stored as 0.01499...) would
/// otherwise come out as 0.02.
#[inline]
pub(crate) fn round_to(value: f64, precision: i32) -> f64 {
    let scale = 10f64.powi(precision);
    let scaled = value * scale;
    if !scaled.is_finite() || scaled.abs() >= EXACT_HALF_LIMIT {
        return scaled.round() / scale;
    }

    let magnitude = value.abs();
    // May be one too high when the product rounded up onto an integer; the
    // half-way test below still picks the nearest multiple in that case.
    let floor = (magnitude * scale).floor();
    // Fused multiply-add rounds once, so its sign is the sign of the exact
    // `magnitude * scale - (floor + 0.5)`.
    let past_half = magnitude.mul_add(2.0 * scale, -(2.0 * floor + 1.0));
    let nearest = if past_half >= 0.0 { floor + 1.0 } else { floor };
    (nearest / scale).copysign(value)
}

/// Compare f64 values with `f64::total_cmp` ordering. Positive NaN sorts
/// after every number, negative NaN before.
#[inline]
pub(crate) fn f64_total_cmp(a: f64, b: f64) -> Ordering {
    a.total_cmp(&b)
}

// ============================================================================
// SIDEWALL UNITS
// ============================================================================

/// Output unit for sidewall height
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidewallUnit {
    /// Inches (default)
    #[default]
    Inch,
    /// Millimeters, the unit tire widths are quoted in
    Mm,
}

impl SidewallUnit {
    /// Lowercase tag for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            SidewallUnit::Inch => "inch",
            SidewallUnit::Mm => "mm",
        }
    }
}

impl fmt::Display for SidewallUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SidewallUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inch" => Ok(SidewallUnit::Inch),
            "mm" => Ok(SidewallUnit::Mm),
            _ => Err(CalcError::invalid_unit(s)),
        }
    }
}

// ============================================================================
// LINEAR UNITS (diameter / circumference)
// ============================================================================

/// Unit of a diameter or circumference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum LinearUnit {
    /// Inches (default)
    #[default]
    Inch,
    /// Centimeters
    Cm,
}

/// Entry of the revolutions conversion table: the distance unit a
/// circumference unit maps to, and how many of the circumference unit fit in
/// one of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevsConversion {
    /// Distance unit revolutions are counted per
    pub unit: DistanceUnit,
    /// Circumference units per distance unit
    pub factor: f64,
}

impl LinearUnit {
    /// Lowercase tag for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            LinearUnit::Inch => "inch",
            LinearUnit::Cm => "cm",
        }
    }

    /// Factor that converts a length in `self` into `target`.
    ///
    /// Returns `None` when the units already match, so callers can skip the
    /// multiplication entirely.
    #[inline]
    pub fn factor_to(self, target: LinearUnit) -> Option<f64> {
        match (self, target) {
            (LinearUnit::Inch, LinearUnit::Cm) => Some(CM_PER_INCH),
            (LinearUnit::Cm, LinearUnit::Inch) => Some(INCH_PER_CM),
            (LinearUnit::Inch, LinearUnit::Inch) | (LinearUnit::Cm, LinearUnit::Cm) => None,
        }
    }

    /// Revolutions conversion for a circumference measured in this unit.
    ///
    /// inch → mile (63360), cm → km (100000). No other mapping exists.
    #[inline]
    pub fn revs_conversion(self) -> RevsConversion {
        match self {
            LinearUnit::Inch => RevsConversion {
                unit: DistanceUnit::Mile,
                factor: INCHES_PER_MILE,
            },
            LinearUnit::Cm => RevsConversion {
                unit: DistanceUnit::Km,
                factor: CM_PER_KM,
            },
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LinearUnit {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inch" => Ok(LinearUnit::Inch),
            "cm" => Ok(LinearUnit::Cm),
            _ => Err(CalcError::invalid_unit(s)),
        }
    }
}

impl TryFrom<String> for LinearUnit {
    type Error = CalcError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// ============================================================================
// DISTANCE UNITS (revolutions per distance)
// ============================================================================

/// Distance unit revolutions are counted per
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceUnit {
    /// Statute mile
    Mile,
    /// Kilometer
    Km,
}

impl DistanceUnit {
    /// Lowercase tag for this unit
    pub fn as_str(&self) -> &'static str {
        match self {
            DistanceUnit::Mile => "mile",
            DistanceUnit::Km => "km",
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
