// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ticks at integer powers of a logarithm base.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_tick_with_step;
use crate::generator::MajorTicksGenerator;
use crate::range::Range;
use crate::tick::Tick;

/// Upper bound on exponents covered by a single pass.
const MAX_DECADES: i64 = 10_000;

/// One major tick per power of `base` from `floor(log(min))` to `ceil(log(max))`.
///
/// Tick positions are intrinsic to the range: the requested count is ignored
/// and both suggestions return it unchanged.
///
/// A positive point range yields that single point. Ranges reaching zero or
/// below, points included, yield no ticks since they have no logarithm.
#[derive(Clone, Copy, Debug)]
pub struct LogTicks {
    base: f64,
    tick_length: f64,
}

impl LogTicks {
    /// Creates a generator for `base`; invalid bases fall back to `10`.
    pub fn new(base: f64) -> Self {
        let base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        Self {
            base,
            tick_length: 5.0,
        }
    }

    /// Sets the tick mark length in pixels.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Returns the log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    fn exponent(&self, x: f64) -> f64 {
        log_by_base(self.base, x)
    }
}

impl Default for LogTicks {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl MajorTicksGenerator<f64> for LogTicks {
    fn default_ticks_count(&self) -> usize {
        10
    }

    fn tick_length(&self) -> f64 {
        self.tick_length
    }

    fn generate_ticks(&self, range: &Range<f64>, _ticks_count: usize) -> Vec<Tick<f64>> {
        let (min, max) = (*range.min(), *range.max());
        if min <= 0.0 || !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        if range.is_point() {
            let label = format_tick_with_step(min, min);
            return alloc::vec![Tick::labeled(min, self.tick_length, 0, label)];
        }

        let first = clamp_exponent(self.exponent(min).floor());
        let last = clamp_exponent(self.exponent(max).ceil());
        let last = last.min(first + MAX_DECADES);

        (first..=last)
            .enumerate()
            .map(|(index, e)| {
                #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
                let value = self.base.powi(e as i32);
                let label = format_tick_with_step(value, value);
                Tick::labeled(value, self.tick_length, index, label)
            })
            .collect()
    }

    fn suggest_increased_ticks_count(&self, ticks_count: usize) -> usize {
        ticks_count
    }

    fn suggest_decreased_tick_count(&self, ticks_count: usize) -> usize {
        ticks_count
    }
}

/// `log_base(x)`, snapped to the nearest integer when within `1e-9`.
///
/// Without snapping `log_10(1000)` comes out as `2.9999999999999996` and an
/// exact power would sit one decade off after `floor`.
pub(crate) fn log_by_base(base: f64, x: f64) -> f64 {
    let raw = if base == 10.0 {
        x.log10()
    } else {
        x.ln() / base.ln()
    };
    let snapped = raw.round();
    if (raw - snapped).abs() < 1.0e-9 {
        snapped
    } else {
        raw
    }
}

fn clamp_exponent(e: f64) -> i64 {
    let e = e.clamp(f64::from(i32::MIN), f64::from(i32::MAX));
    #[allow(clippy::cast_possible_truncation, reason = "clamped to the i32 range")]
    {
        e as i64
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn values(ticks: &[Tick<f64>]) -> Vec<f64> {
        ticks.iter().map(|t| t.value).collect()
    }

    #[test]
    fn decades_cover_the_range_for_any_count() {
        let g = LogTicks::new(10.0);
        let r = Range::new(1.0, 1000.0).unwrap();
        for count in [0, 1, 3, 10, 50] {
            let ticks = g.generate_ticks(&r, count);
            assert_eq!(values(&ticks), alloc::vec![1.0, 10.0, 100.0, 1000.0]);
        }
        let ticks = g.generate_ticks(&r, 10);
        let labels: Vec<&str> = ticks.iter().map(Tick::label_text).collect();
        assert_eq!(labels, alloc::vec!["1", "10", "100", "1000"]);
    }

    #[test]
    fn bounds_round_outwards_to_powers() {
        let g = LogTicks::new(2.0);
        let r = Range::new(3.0, 20.0).unwrap();
        assert_eq!(values(&g.generate_ticks(&r, 10)), alloc::vec![2.0, 4.0, 8.0, 16.0, 32.0]);
    }

    #[test]
    fn fractional_decades_are_labeled_with_decimals() {
        let g = LogTicks::new(10.0);
        let r = Range::new(0.01, 1.0).unwrap();
        let ticks = g.generate_ticks(&r, 10);
        let labels: Vec<&str> = ticks.iter().map(Tick::label_text).collect();
        assert_eq!(labels, alloc::vec!["0.01", "0.1", "1"]);
    }

    #[test]
    fn non_positive_ranges_have_no_ticks() {
        let g = LogTicks::default();
        assert!(g.generate_ticks(&Range::new(0.0, 10.0).unwrap(), 10).is_empty());
        assert!(g.generate_ticks(&Range::new(-5.0, -1.0).unwrap(), 10).is_empty());
    }

    #[test]
    fn point_range_yields_the_point() {
        let ticks = LogTicks::default().generate_ticks(&Range::point(5.0), 1);
        assert_eq!(values(&ticks), alloc::vec![5.0]);
    }

    #[test]
    fn non_positive_point_range_has_no_ticks() {
        let g = LogTicks::default();
        assert!(g.generate_ticks(&Range::point(0.0), 1).is_empty());
        assert!(g.generate_ticks(&Range::point(-3.0), 1).is_empty());
    }

    #[test]
    fn suggestions_are_identity() {
        let g = LogTicks::default();
        assert_eq!(g.suggest_increased_ticks_count(7), 7);
        assert_eq!(g.suggest_decreased_tick_count(7), 7);
    }
}
