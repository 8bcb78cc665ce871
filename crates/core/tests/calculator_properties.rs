//! Property-based tests for the range generator and the calculators
//!
//! These verify the invariants that must hold for every input within the
//! generated bounds, not just the reference values.

use proptest::prelude::*;
use tire_calc_core::{
    calculate_circumference, calculate_revs, calculate_revs_tagged, list_tires_per_wheel_diameter,
    range, range_with_step, Circumference, Diameter, DistanceUnit, HeightLimits, LinearUnit,
    TireDataForm,
};

/// `actual` is a whole number of hundredths within half a hundredth of `exact`
fn rounded_from(actual: f64, exact: f64) -> bool {
    let on_grid = (actual * 100.0).round() / 100.0 == actual;
    on_grid && (actual - exact).abs() <= 0.005 + 1e-9
}

fn linear_unit() -> impl Strategy<Value = LinearUnit> {
    prop_oneof![Just(LinearUnit::Inch), Just(LinearUnit::Cm)]
}

proptest! {
    #[test]
    fn test_step_below_one_is_always_empty(
        start in -1000i64..1000,
        stop in -1000i64..1000,
        step in -100.0f64..0.999,
    ) {
        prop_assert!(range_with_step(start, stop, step).is_empty());
    }

    #[test]
    fn test_unit_step_ascending(start in -1000i64..1000, len in 1i64..200) {
        let stop = start + len;
        let expected: Vec<i64> = (start..stop).collect();
        prop_assert_eq!(range(start, stop), expected);
    }

    #[test]
    fn test_unit_step_descending(start in -1000i64..1000, len in 1i64..200) {
        let stop = start - len;
        let expected: Vec<i64> = ((stop + 1)..=start).rev().collect();
        prop_assert_eq!(range(start, stop), expected);
    }

    #[test]
    fn test_equal_bounds_are_empty(a in -1000i64..1000, step in 1.0f64..50.0) {
        prop_assert!(range_with_step(a, a, step).is_empty());
    }

    #[test]
    fn test_stepped_values_stay_in_bounds(
        start in -500i64..500,
        stop in -500i64..500,
        step in 1.0f64..20.0,
    ) {
        let values = range_with_step(start, stop, step);
        let stride = step.round() as i64;
        for (i, v) in values.iter().enumerate() {
            prop_assert_eq!((v - start).abs(), i as i64 * stride);
            prop_assert!((v - start).abs() < (stop - start).abs());
        }
    }

    #[test]
    fn test_revs_per_mile(value in 1.0f64..10_000.0) {
        let revs = calculate_revs(&Circumference::new(value, LinearUnit::Inch));
        prop_assert_eq!(revs.unit, DistanceUnit::Mile);
        prop_assert!(rounded_from(revs.value, 63360.0 / value), "{} from {}", revs.value, value);
    }

    #[test]
    fn test_revs_per_km(value in 1.0f64..10_000.0) {
        let revs = calculate_revs(&Circumference::new(value, LinearUnit::Cm));
        prop_assert_eq!(revs.unit, DistanceUnit::Km);
        prop_assert!(rounded_from(revs.value, 100000.0 / value), "{} from {}", revs.value, value);
    }

    #[test]
    fn test_revs_unknown_tag_is_invalid_unit(tag in "[a-z]{1,8}", value in 1.0f64..1000.0) {
        prop_assume!(tag != "inch" && tag != "cm");
        let err = calculate_revs_tagged(value, &tag).unwrap_err();
        prop_assert_eq!(err.to_string(), "Invalid unit");
    }

    #[test]
    fn test_circumference_same_unit_is_direct(diameter in 0.0f64..500.0, unit in linear_unit()) {
        let result = calculate_circumference(&Diameter::new(diameter, unit), unit);
        prop_assert_eq!(result.unit, unit);
        prop_assert!(rounded_from(result.value, diameter * std::f64::consts::PI), "{} from {}", result.value, diameter);
    }

    #[test]
    fn test_listed_tires_respect_window(
        min_width in 135u32..235,
        width_span in 0u32..120,
        min_aspect in 25u32..60,
        aspect_span in 0u32..40,
        wheel_diameter in 13u32..22,
        low in 18.0f64..28.0,
        window in 0.0f64..6.0,
    ) {
        let min = TireDataForm::new(min_width, min_aspect, low);
        let max = TireDataForm::new(min_width + width_span, min_aspect + aspect_span, low + window);
        let limits = HeightLimits::from_forms(&min, &max);
        let tires = list_tires_per_wheel_diameter(&min, &max, f64::from(wheel_diameter), None);

        for tire in &tires {
            prop_assert!(limits.min < tire.height() && tire.height() < limits.max);
            prop_assert!(tire.width() % 10.0 != 0.0);
        }
        prop_assert!(tires.windows(2).all(|w| w[0].height() <= w[1].height()));
    }
}
