// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minor tick generators.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::generator::MinorTicksGenerator;
use crate::log::log_by_base;
use crate::range::Range;
use crate::tick::Tick;
use crate::value::AxisValue;

/// Splits every interval between adjacent major ticks into `parts` equal pieces.
///
/// The partial intervals before the first and after the last major tick are
/// filled using the width of their neighbouring interval, clipped to the range.
#[derive(Clone, Copy, Debug)]
pub struct SubdivisionMinorTicks {
    parts: usize,
    tick_length: f64,
}

impl SubdivisionMinorTicks {
    /// Creates a generator placing `parts - 1` minor ticks per major interval.
    pub fn new(parts: usize) -> Self {
        Self {
            parts,
            tick_length: 3.0,
        }
    }

    /// Sets the tick mark length in pixels.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }
}

impl<T: AxisValue> MinorTicksGenerator<T> for SubdivisionMinorTicks {
    fn generate_minor_ticks(&self, range: &Range<T>, major_ticks: &[Tick<T>]) -> Vec<Tick<T>> {
        if self.parts < 2 || major_ticks.len() < 2 {
            return Vec::new();
        }
        let numeric = range.to_numeric();
        let majors: Vec<f64> = major_ticks
            .iter()
            .map(|t| t.value.to_axis_number())
            .collect();
        let parts = self.parts as f64;
        let mut values = Vec::new();

        let head_step = (majors[1] - majors[0]) / parts;
        if head_step > 0.0 {
            let mut head: Vec<f64> = (1..self.parts)
                .map(|k| majors[0] - head_step * k as f64)
                .take_while(|v| numeric.contains(v))
                .collect();
            head.reverse();
            values.extend(head);
        }

        for pair in majors.windows(2) {
            let step = (pair[1] - pair[0]) / parts;
            if step <= 0.0 {
                continue;
            }
            values.extend(
                (1..self.parts)
                    .map(|k| pair[0] + step * k as f64)
                    .filter(|v| numeric.contains(v)),
            );
        }

        let n = majors.len();
        let tail_step = (majors[n - 1] - majors[n - 2]) / parts;
        if tail_step > 0.0 {
            values.extend(
                (1..self.parts)
                    .map(|k| majors[n - 1] + tail_step * k as f64)
                    .take_while(|v| numeric.contains(v)),
            );
        }

        values
            .into_iter()
            .filter_map(T::from_axis_number)
            .enumerate()
            .map(|(index, value)| Tick::new(value, self.tick_length, index))
            .collect()
    }
}

/// Minor ticks at `k * base^e` for `k = 2..base`, the usual log-axis sub-decades.
#[derive(Clone, Copy, Debug)]
pub struct LogMinorTicks {
    base: f64,
    tick_length: f64,
}

impl LogMinorTicks {
    /// Creates a generator for `base`; invalid bases fall back to `10`.
    pub fn new(base: f64) -> Self {
        let base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        Self {
            base,
            tick_length: 3.0,
        }
    }

    /// Sets the tick mark length in pixels.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }
}

impl MinorTicksGenerator<f64> for LogMinorTicks {
    fn generate_minor_ticks(&self, range: &Range<f64>, major_ticks: &[Tick<f64>]) -> Vec<Tick<f64>> {
        let multipliers = self.base.floor();
        if multipliers < 3.0 || *range.min() <= 0.0 {
            return Vec::new();
        }
        let Some(first) = major_ticks.first() else {
            return Vec::new();
        };

        // The decade below the first major may still reach into the range.
        let first_exp = log_by_base(self.base, first.value).floor();
        let mut decade = self.base.powf(first_exp - 1.0);
        let mut values = Vec::new();
        for _ in 0..=major_ticks.len() {
            let mut k = 2.0;
            while k < multipliers {
                let v = k * decade;
                if range.contains(&v) {
                    values.push(v);
                }
                k += 1.0;
            }
            decade *= self.base;
        }

        values
            .into_iter()
            .enumerate()
            .map(|(index, value)| Tick::new(value, self.tick_length, index))
            .collect()
    }
}
