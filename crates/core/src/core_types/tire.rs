//! Tire size types
//!
//! A tire size is written `width/aspect R wheel`, e.g. `205/55 R16`:
//! - width: section width in millimeters
//! - aspect ratio: sidewall height as a percentage of width
//! - wheel diameter: rim diameter in inches
//!
//! [`Tire`] additionally carries the overall height in inches. That height is
//! derived and is recomputed whenever a `Tire` is built, including when one is
//! deserialized.

use crate::conversion::calculate_tire_height;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tire size without its derived height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireSpec {
    /// Section width (mm)
    pub width: f64,
    /// Sidewall height as a percentage of width
    pub aspect_ratio: f64,
    /// Rim diameter (inches)
    pub wheel_diameter: f64,
}

impl TireSpec {
    pub fn new(width: f64, aspect_ratio: f64, wheel_diameter: f64) -> Self {
        Self {
            width,
            aspect_ratio,
            wheel_diameter,
        }
    }
}

/// A tire size together with its overall height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "TireSpec")]
pub struct Tire {
    width: f64,
    aspect_ratio: f64,
    wheel_diameter: f64,
    height: f64,
}

impl Tire {
    /// Build a tire and compute its overall height (inches, 2 decimals).
    pub fn new(width: f64, aspect_ratio: f64, wheel_diameter: f64) -> Self {
        TireSpec::new(width, aspect_ratio, wheel_diameter).into()
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect_ratio
    }

    #[inline]
    pub fn wheel_diameter(&self) -> f64 {
        self.wheel_diameter
    }

    /// Overall height in inches
    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The size without its height
    pub fn spec(&self) -> TireSpec {
        TireSpec::new(self.width, self.aspect_ratio, self.wheel_diameter)
    }
}

impl From<TireSpec> for Tire {
    fn from(spec: TireSpec) -> Self {
        Tire {
            width: spec.width,
            aspect_ratio: spec.aspect_ratio,
            wheel_diameter: spec.wheel_diameter,
            height: calculate_tire_height(&spec),
        }
    }
}

impl fmt::Display for Tire {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{} R{}",
            self.width, self.aspect_ratio, self.wheel_diameter
        )
    }
}

/// One endpoint (min or max) of a tire size sweep, as entered in the form
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireDataForm {
    /// Section width (mm)
    pub width: u32,
    /// Aspect ratio (percent)
    pub aspect_ratio: u32,
    /// Overall height bound (inches) this endpoint contributes to the window
    pub height_limit: f64,
}

impl TireDataForm {
    pub fn new(width: u32, aspect_ratio: u32, height_limit: f64) -> Self {
        Self {
            width,
            aspect_ratio,
            height_limit,
        }
    }
}

/// Exclusive overall-height window (inches)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightLimits {
    pub min: f64,
    pub max: f64,
}

impl HeightLimits {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Window spanned by the height limits of a sweep's two endpoints.
    pub fn from_forms(min: &TireDataForm, max: &TireDataForm) -> Self {
        Self::new(min.height_limit, max.height_limit)
    }

    /// `min < height < max`; both bounds are exclusive.
    #[inline]
    pub fn contains(&self, height: f64) -> bool {
        height > self.min && height < self.max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_tire_height_is_derived() {
        let tire = Tire::new(245.0, 30.0, 16.0);
        assert_relative_eq!(tire.height(), 21.79);
        assert_eq!(tire.spec(), TireSpec::new(245.0, 30.0, 16.0));
    }

    #[test]
    fn test_deserialize_ignores_supplied_height() {
        let json = r#"{"width": 245, "aspectRatio": 30, "wheelDiameter": 16, "height": 99.0}"#;
        let tire: Tire = serde_json::from_str(json).unwrap();
        assert_relative_eq!(tire.height(), 21.79);
    }

    #[test]
    fn test_serialize_includes_height() {
        let value = serde_json::to_value(Tire::new(205.0, 55.0, 16.0)).unwrap();
        assert_eq!(value["width"], 205.0);
        assert_eq!(value["aspectRatio"], 55.0);
        assert_eq!(value["wheelDiameter"], 16.0);
        assert_eq!(value["height"], 24.88);
    }

    #[test]
    fn test_tire_display() {
        assert_eq!(Tire::new(205.0, 55.0, 16.0).to_string(), "205/55 R16");
    }

    #[test]
    fn test_height_limits_are_exclusive() {
        let limits = HeightLimits::new(20.0, 25.0);
        assert!(limits.contains(22.5));
        assert!(!limits.contains(20.0));
        assert!(!limits.contains(25.0));
        assert!(!limits.contains(19.99));
    }

    #[test]
    fn test_height_limits_from_forms() {
        let min = TireDataForm::new(185, 40, 23.0);
        let max = TireDataForm::new(245, 65, 26.5);
        assert_eq!(HeightLimits::from_forms(&min, &max), HeightLimits::new(23.0, 26.5));
    }
}
