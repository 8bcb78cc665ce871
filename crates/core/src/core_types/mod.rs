//! Core types and utilities

pub mod measurement;
pub mod tire;
pub mod units;

pub use measurement::{Circumference, Diameter, Revs};
pub use tire::{HeightLimits, Tire, TireDataForm, TireSpec};
pub use units::{DistanceUnit, LinearUnit, RevsConversion, SidewallUnit};
