//! Tire size lister
//!
//! Enumerates every width × aspect-ratio combination between two form
//! endpoints for a given rim, keeps the sizes whose overall height falls
//! strictly inside a height window, and returns them shortest first.
//!
//! Widths and aspect ratios are swept in steps of [`SWEEP_STEP`]. Widths that
//! are a multiple of 10 (200, 210, ...) are skipped: real section widths end
//! in 5 (205, 215, ...).

use crate::core_types::units::f64_total_cmp;
use crate::core_types::{HeightLimits, Tire, TireDataForm};
use std::cmp::Ordering;
use tracing::debug;

/// Increment between consecutive widths and aspect ratios (mm / percent)
pub const SWEEP_STEP: u32 = 5;

/// Widths that are a multiple of this are not valid section widths
const SKIPPED_WIDTH_MULTIPLE: u32 = 10;

/// List the tire sizes between `min` and `max` that fit on `wheel_diameter`.
///
/// `height_limits` defaults to `{ min: min.height_limit, max: max.height_limit }`.
/// A candidate is kept only when `limits.min < height < limits.max`.
///
/// The result is sorted by height, ties broken by width then aspect ratio, so
/// the order is fully deterministic. Inverted bounds yield an empty list.
pub fn list_tires_per_wheel_diameter(
    min: &TireDataForm,
    max: &TireDataForm,
    wheel_diameter: f64,
    height_limits: Option<HeightLimits>,
) -> Vec<Tire> {
    let limits = height_limits.unwrap_or_else(|| HeightLimits::from_forms(min, max));
    let aspect_ratios = sweep(min.aspect_ratio, max.aspect_ratio);

    let mut candidates = 0usize;
    let mut tires: Vec<Tire> = sweep(min.width, max.width)
        .filter(|width| width % SKIPPED_WIDTH_MULTIPLE != 0)
        .flat_map(|width| {
            aspect_ratios.clone().map(move |aspect_ratio| {
                Tire::new(f64::from(width), f64::from(aspect_ratio), wheel_diameter)
            })
        })
        .inspect(|_| candidates += 1)
        .filter(|tire| limits.contains(tire.height()))
        .collect();

    tires.sort_by(compare_by_height);

    debug!(
        "Tire sweep: R{}, window ({:.2}, {:.2}), {} candidates, {} kept",
        wheel_diameter,
        limits.min,
        limits.max,
        candidates,
        tires.len()
    );

    tires
}

/// Inclusive sweep from `from` to `to` in steps of [`SWEEP_STEP`]
fn sweep(from: u32, to: u32) -> std::iter::StepBy<std::ops::RangeInclusive<u32>> {
    (from..=to).step_by(SWEEP_STEP as usize)
}

/// Ascending height, then width, then aspect ratio.
pub fn compare_by_height(a: &Tire, b: &Tire) -> Ordering {
    f64_total_cmp(a.height(), b.height())
        .then_with(|| f64_total_cmp(a.width(), b.width()))
        .then_with(|| f64_total_cmp(a.aspect_ratio(), b.aspect_ratio()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms() -> (TireDataForm, TireDataForm) {
        (
            TireDataForm::new(195, 40, 24.0),
            TireDataForm::new(245, 60, 25.5),
        )
    }

    #[test]
    fn test_skips_decade_widths() {
        let (min, max) = forms();
        let tires = list_tires_per_wheel_diameter(&min, &max, 16.0, Some(HeightLimits::new(0.0, 100.0)));

        assert!(!tires.is_empty());
        assert!(tires.iter().all(|t| t.width() % 10.0 != 0.0));
        // 195, 205, ..., 245 → 6 widths; 40..=60 → 5 aspect ratios
        assert_eq!(tires.len(), 30);
    }

    #[test]
    fn test_filters_by_exclusive_window() {
        let (min, max) = forms();
        let tires = list_tires_per_wheel_diameter(&min, &max, 16.0, None);

        assert!(!tires.is_empty());
        for tire in &tires {
            assert!(tire.height() > 24.0 && tire.height() < 25.5, "{tire}: {}", tire.height());
        }
    }

    #[test]
    fn test_exact_limit_is_excluded() {
        // 205/55 R16 is exactly 24.88"
        let min = TireDataForm::new(205, 55, 24.88);
        let max = TireDataForm::new(205, 55, 30.0);
        assert!(list_tires_per_wheel_diameter(&min, &max, 16.0, None).is_empty());

        let min = TireDataForm::new(205, 55, 24.87);
        let tires = list_tires_per_wheel_diameter(&min, &max, 16.0, None);
        assert_eq!(tires.len(), 1);
        assert_eq!(tires[0].to_string(), "205/55 R16");
    }

    #[test]
    fn test_sorted_by_height() {
        let (min, max) = forms();
        let tires = list_tires_per_wheel_diameter(&min, &max, 16.0, Some(HeightLimits::new(0.0, 100.0)));
        assert!(tires.windows(2).all(|w| w[0].height() <= w[1].height()));
    }

    #[test]
    fn test_ties_broken_by_width_then_aspect_ratio() {
        let a = Tire::new(215.0, 50.0, 16.0);
        let b = Tire::new(225.0, 50.0, 16.0);
        let c = Tire::new(215.0, 55.0, 16.0);
        assert_eq!(compare_by_height(&a, &a), Ordering::Equal);
        assert_eq!(compare_by_height(&a, &b), Ordering::Less);
        assert_eq!(compare_by_height(&c, &a), Ordering::Greater);

        // Same height, different width
        let wide = Tire::new(250.0, 40.0, 16.0);
        let narrow = Tire::new(200.0, 50.0, 16.0);
        assert_eq!(wide.height(), narrow.height());
        assert_eq!(compare_by_height(&narrow, &wide), Ordering::Less);
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let min = TireDataForm::new(255, 40, 0.0);
        let max = TireDataForm::new(205, 60, 100.0);
        assert!(list_tires_per_wheel_diameter(&min, &max, 16.0, None).is_empty());

        let min = TireDataForm::new(205, 60, 0.0);
        let max = TireDataForm::new(255, 40, 100.0);
        assert!(list_tires_per_wheel_diameter(&min, &max, 16.0, None).is_empty());
    }

    #[test]
    fn test_wheel_diameter_is_carried() {
        let (min, max) = forms();
        let tires = list_tires_per_wheel_diameter(&min, &max, 17.0, Some(HeightLimits::new(0.0, 100.0)));
        assert!(tires.iter().all(|t| t.wheel_diameter() == 17.0));
    }
}
