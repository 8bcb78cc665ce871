//! Diameter, circumference and revolutions value types

use super::units::{DistanceUnit, LinearUnit};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Overall tire diameter in a linear unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diameter {
    pub diameter: f64,
    pub diameter_unit: LinearUnit,
}

impl Diameter {
    pub fn new(diameter: f64, diameter_unit: LinearUnit) -> Self {
        Self {
            diameter,
            diameter_unit,
        }
    }
}

/// Rolling circumference: distance covered by one full revolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circumference {
    pub value: f64,
    pub unit: LinearUnit,
}

impl Circumference {
    pub fn new(value: f64, unit: LinearUnit) -> Self {
        Self { value, unit }
    }
}

impl fmt::Display for Circumference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} {}", self.value, self.unit)
    }
}

/// Revolutions per mile or per kilometer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Revs {
    pub value: f64,
    pub unit: DistanceUnit,
}

impl fmt::Display for Revs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} revs/{}", self.value, self.unit)
    }
}
