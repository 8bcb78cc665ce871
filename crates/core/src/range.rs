//! Stepped integer ranges
//!
//! Produces the integers from `start` towards `stop` (exclusive), ascending or
//! descending depending on which bound is larger. Only every `round(step)`-th
//! offset from `start` is kept. A step below 1 yields an empty range.
//!
//! ```
//! use tire_calc_core::range::{range, range_with_step};
//!
//! assert_eq!(range(1, 6), vec![1, 2, 3, 4, 5]);
//! assert_eq!(range(5, 1), vec![5, 4, 3, 2]);
//! assert_eq!(range_with_step(0, 10, 2.0), vec![0, 2, 4, 6, 8]);
//! assert!(range_with_step(1, 6, 0.0).is_empty());
//! ```

/// Step used when the caller does not give one
pub const DEFAULT_STEP: f64 = 1.0;

/// Lazy stepped range. Cloning restarts from the clone's current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepRange {
    start: i64,
    ascending: bool,
    length: u64,
    stride: u64,
    index: u64,
}

impl StepRange {
    /// Create a range from `start` towards `stop` keeping every `round(step)`-th value.
    pub fn new(start: i64, stop: i64, step: f64) -> Self {
        if step.is_nan() || step < 1.0 {
            return Self {
                start,
                ascending: true,
                length: 0,
                stride: 1,
                index: 0,
            };
        }

        Self {
            start,
            ascending: start < stop,
            length: start.abs_diff(stop),
            // Saturating float cast: an infinite step keeps only `start`
            stride: step.round() as u64,
            index: 0,
        }
    }

    /// Number of values not yet produced
    fn remaining(&self) -> usize {
        let left = self.length.saturating_sub(self.index);
        usize::try_from(left.div_ceil(self.stride)).unwrap_or(usize::MAX)
    }
}

impl Iterator for StepRange {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.index >= self.length {
            return None;
        }

        // `index < length`, so the value lies between start and stop and the
        // wrapping op is exact even when the span exceeds `i64::MAX`
        let value = if self.ascending {
            self.start.wrapping_add_unsigned(self.index)
        } else {
            self.start.wrapping_sub_unsigned(self.index)
        };
        self.index = self.index.saturating_add(self.stride);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for StepRange {}

impl std::iter::FusedIterator for StepRange {}

/// Integers from `start` towards `stop` (exclusive) with a step of 1.
pub fn range(start: i64, stop: i64) -> Vec<i64> {
    range_with_step(start, stop, DEFAULT_STEP)
}

/// Integers from `start` towards `stop` (exclusive), keeping every
/// `round(step)`-th one. Empty when `step < 1`.
pub fn range_with_step(start: i64, stop: i64, step: f64) -> Vec<i64> {
    StepRange::new(start, stop, step).collect()
}
