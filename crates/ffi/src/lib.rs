//! C ABI for the tire calculator core.
//!
//! Exposes the calculators, the range generator and the tire size lister to
//! C/C++ callers. The header `TireCalcFFI.h` is generated by cbindgen at build
//! time.
//!
//! Fallible functions return a [`TireCalcErrorCode`]; on failure the message is
//! available from [`tire_calc_get_last_error`] until the next call on the same
//! thread.

mod calculators;
mod error;
mod helpers;
mod sizes;
mod types;

pub use calculators::{
    tire_calc_circumference, tire_calc_revs, tire_calc_sidewall_height, tire_calc_tire_height,
};
pub use error::{tire_calc_get_last_error, tire_calc_get_last_error_code, TireCalcErrorCode};
pub use sizes::{tire_calc_list_tires, tire_calc_range};
pub use types::{
    CircumferenceResult, HeightLimitsC, RevsResult, TireC, TireCalcDistanceUnit,
    TireCalcLinearUnit, TireCalcSidewallUnit, TireDataFormC,
};
