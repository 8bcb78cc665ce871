//! Tire Size Calculator Core Library
//!
//! Pure helpers behind a tire-size calculator: sidewall height, overall tire
//! height, rolling circumference and revolutions per distance, plus a stepped
//! integer range generator and a lister that enumerates tire sizes fitting a
//! rim within a height window.
//!
//! Everything here is synchronous and side-effect free apart from `tracing`
//! events. The only error is [`CalcError::InvalidUnit`], raised when a linear
//! unit tag other than `"inch"` or `"cm"` is parsed.
//!
//! ```
//! use tire_calc_core::{calculate_tire_height, list_tires_per_wheel_diameter, TireDataForm, TireSpec};
//!
//! assert_eq!(calculate_tire_height(&TireSpec::new(245.0, 30.0, 16.0)), 21.79);
//!
//! let min = TireDataForm::new(195, 45, 24.5);
//! let max = TireDataForm::new(235, 60, 25.5);
//! let tires = list_tires_per_wheel_diameter(&min, &max, 16.0, None);
//! assert!(tires.iter().all(|t| t.height() > 24.5 && t.height() < 25.5));
//! ```

// Core types and utilities
pub mod core_types;
pub mod error;

// Calculators
pub mod conversion;
pub mod lister;
pub mod range;

// Re-export core types
pub use core_types::{Circumference, Diameter, Revs};
pub use core_types::{DistanceUnit, LinearUnit, SidewallUnit};
pub use core_types::{HeightLimits, Tire, TireDataForm, TireSpec};
pub use error::CalcError;

// Re-export calculators
pub use conversion::{
    calculate_circumference, calculate_circumference_tagged, calculate_revs, calculate_revs_tagged,
    calculate_sidewall_height, calculate_tire_height,
};
pub use lister::list_tires_per_wheel_diameter;
pub use range::{range, range_with_step, StepRange};
