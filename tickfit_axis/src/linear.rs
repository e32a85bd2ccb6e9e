// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Evenly spaced ticks over a numeric range.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::format::format_tick_with_step;
use crate::generator::{MajorTicksGenerator, coarser_ticks_count, finer_ticks_count};
use crate::range::Range;
use crate::tick::Tick;

/// Upper bound on ticks produced by a single pass.
const MAX_TICKS: usize = 10_000;

/// Major ticks at multiples of a "nice" step (1, 2 or 5 times a power of ten).
///
/// The step is derived from `span / ticks_count`, so the requested count is a
/// target rather than an exact number of ticks.
#[derive(Clone, Copy, Debug)]
pub struct LinearTicks {
    tick_length: f64,
    default_ticks_count: usize,
}

impl LinearTicks {
    /// Creates a generator with 5px ticks and a default target of 10.
    pub fn new() -> Self {
        Self {
            tick_length: 5.0,
            default_ticks_count: 10,
        }
    }

    /// Sets the tick mark length in pixels.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Sets the count requested on the first layout pass.
    pub fn with_default_ticks_count(mut self, ticks_count: usize) -> Self {
        self.default_ticks_count = ticks_count.max(1);
        self
    }
}

impl Default for LinearTicks {
    fn default() -> Self {
        Self::new()
    }
}

impl MajorTicksGenerator<f64> for LinearTicks {
    fn default_ticks_count(&self) -> usize {
        self.default_ticks_count
    }

    fn tick_length(&self) -> f64 {
        self.tick_length
    }

    fn generate_ticks(&self, range: &Range<f64>, ticks_count: usize) -> Vec<Tick<f64>> {
        let (min, max) = (*range.min(), *range.max());
        if !min.is_finite() || !max.is_finite() {
            return Vec::new();
        }
        if range.is_point() || ticks_count <= 1 {
            let (value, step) = representative_value(min, max);
            let label = format_tick_with_step(value, step);
            return alloc::vec![Tick::labeled(value, self.tick_length, 0, label)];
        }

        // Halving the cap leaves room for `nice_step` rounding the step down.
        let ticks_count = ticks_count.min(MAX_TICKS / 2);
        let step = nice_step(range.span() / ticks_count as f64);
        if step == 0.0 {
            return Vec::new();
        }
        let start = (min / step).ceil() * step;
        let n_f = ((max - start) / step + 1.0e-9).floor();
        if n_f >= MAX_TICKS as f64 {
            tracing::warn!(step, "linear ticks exceed the per-pass cap");
            return Vec::new();
        }
        let n = if n_f.is_finite() && n_f >= 0.0 {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "guarded by finite/non-negative checks and the cap"
            )]
            {
                n_f as usize
            }
        } else {
            0
        };

        (0..=n)
            .enumerate()
            .map(|(index, i)| {
                let mut value = start + step * i as f64;
                // Accumulated error turns zero into things like -1e-17.
                if value.abs() < step * 1.0e-9 {
                    value = 0.0;
                }
                let label = format_tick_with_step(value, step);
                Tick::labeled(value, self.tick_length, index, label)
            })
            .collect()
    }

    /// Steps down the count ladder, widening the tick interval.
    fn suggest_increased_ticks_count(&self, ticks_count: usize) -> usize {
        coarser_ticks_count(ticks_count)
    }

    /// Steps up the count ladder, narrowing the tick interval.
    fn suggest_decreased_tick_count(&self, ticks_count: usize) -> usize {
        finer_ticks_count(ticks_count)
    }
}

/// A single value standing in for the whole range, with the step used to label it.
fn representative_value(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        return (min, 0.0);
    }
    let step = nice_step(0.5 * (max - min));
    let mid = 0.5 * (min + max);
    if step == 0.0 {
        return (mid, 0.0);
    }
    let nice = (mid / step).round() * step;
    if nice >= min && nice <= max {
        (nice, step)
    } else {
        (mid, 0.0)
    }
}

pub(crate) fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}
