//! FFI-exposed value types.
//!
//! All types here are `#[repr(C)]` so they can be built and read from C/C++
//! through the cbindgen-generated header. Each converts to and from its
//! `tire_calc_core` counterpart.

use tire_calc_core::{DistanceUnit, HeightLimits, LinearUnit, SidewallUnit, Tire, TireDataForm};

/// Output unit for sidewall height.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TireCalcSidewallUnit {
    /// Inches
    Inch = 0,
    /// Millimeters
    Mm = 1,
}

impl From<TireCalcSidewallUnit> for SidewallUnit {
    fn from(unit: TireCalcSidewallUnit) -> Self {
        match unit {
            TireCalcSidewallUnit::Inch => SidewallUnit::Inch,
            TireCalcSidewallUnit::Mm => SidewallUnit::Mm,
        }
    }
}

/// Unit of a circumference.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TireCalcLinearUnit {
    /// Inches
    Inch = 0,
    /// Centimeters
    Cm = 1,
}

impl From<LinearUnit> for TireCalcLinearUnit {
    fn from(unit: LinearUnit) -> Self {
        match unit {
            LinearUnit::Inch => TireCalcLinearUnit::Inch,
            LinearUnit::Cm => TireCalcLinearUnit::Cm,
        }
    }
}

/// Distance unit revolutions are counted per.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TireCalcDistanceUnit {
    /// Statute mile
    Mile = 0,
    /// Kilometer
    Km = 1,
}

impl From<DistanceUnit> for TireCalcDistanceUnit {
    fn from(unit: DistanceUnit) -> Self {
        match unit {
            DistanceUnit::Mile => TireCalcDistanceUnit::Mile,
            DistanceUnit::Km => TireCalcDistanceUnit::Km,
        }
    }
}

/// Circumference result.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircumferenceResult {
    /// Circumference rounded to 2 decimals
    pub value: f64,
    /// Unit of `value`
    pub unit: TireCalcLinearUnit,
}

/// Revolutions-per-distance result.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevsResult {
    /// Revolutions rounded to 2 decimals
    pub value: f64,
    /// Distance unit revolutions are counted per
    pub unit: TireCalcDistanceUnit,
}

/// One endpoint of a tire size sweep.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TireDataFormC {
    /// Section width in millimeters
    pub width: u32,
    /// Aspect ratio in percent
    pub aspect_ratio: u32,
    /// Overall height bound in inches
    pub height_limit: f64,
}

impl From<TireDataFormC> for TireDataForm {
    fn from(form: TireDataFormC) -> Self {
        TireDataForm::new(form.width, form.aspect_ratio, form.height_limit)
    }
}

/// Exclusive overall height window in inches.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeightLimitsC {
    pub min: f64,
    pub max: f64,
}

impl From<HeightLimitsC> for HeightLimits {
    fn from(limits: HeightLimitsC) -> Self {
        HeightLimits::new(limits.min, limits.max)
    }
}

/// A listed tire size.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TireC {
    /// Section width in millimeters
    pub width: f64,
    /// Aspect ratio in percent
    pub aspect_ratio: f64,
    /// Rim diameter in inches
    pub wheel_diameter: f64,
    /// Overall height in inches
    pub height: f64,
}

impl From<&Tire> for TireC {
    fn from(tire: &Tire) -> Self {
        Self {
            width: tire.width(),
            aspect_ratio: tire.aspect_ratio(),
            wheel_diameter: tire.wheel_diameter(),
            height: tire.height(),
        }
    }
}
