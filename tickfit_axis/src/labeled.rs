// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use crate::generator::MajorTicksGenerator;
use crate::range::Range;
use crate::tick::Tick;

/// Major ticks at caller-supplied positions with caller-supplied labels.
///
/// Only labels inside the visible range become ticks. The set is fixed, so
/// both suggestions return the requested count unchanged and the layout search
/// settles within two passes.
///
/// A point range keeps exactly the labels sitting at that position, which may
/// be none or several.
#[derive(Clone, Debug)]
pub struct FixedLabelTicks {
    labels: Vec<(f64, String)>,
    tick_length: f64,
}

impl FixedLabelTicks {
    /// Creates a generator from `(position, label)` pairs.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        let mut out = Self {
            labels: Vec::new(),
            tick_length: 5.0,
        };
        out.set_labels(labels);
        out
    }

    /// Sets the tick mark length in pixels.
    pub fn with_tick_length(mut self, tick_length: f64) -> Self {
        self.tick_length = tick_length;
        self
    }

    /// Replaces the labels. They are kept sorted by position.
    pub fn set_labels<I, S>(&mut self, labels: I)
    where
        I: IntoIterator<Item = (f64, S)>,
        S: Into<String>,
    {
        self.labels = labels
            .into_iter()
            .map(|(position, label)| (position, label.into()))
            .collect();
        self.labels.sort_by(|a, b| a.0.total_cmp(&b.0));
    }

    /// Returns the `(position, label)` pairs, sorted by position.
    pub fn labels(&self) -> &[(f64, String)] {
        &self.labels
    }
}

impl MajorTicksGenerator<f64> for FixedLabelTicks {
    fn default_ticks_count(&self) -> usize {
        self.labels.len()
    }

    fn tick_length(&self) -> f64 {
        self.tick_length
    }

    fn generate_ticks(&self, range: &Range<f64>, _ticks_count: usize) -> Vec<Tick<f64>> {
        self.labels
            .iter()
            .filter(|(position, _)| range.contains(position))
            .enumerate()
            .map(|(index, (position, label))| {
                Tick::labeled(*position, self.tick_length, index, label.clone())
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

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn labels_outside_the_range_are_dropped_and_indices_stay_dense() {
        let g = FixedLabelTicks::new([
            (0.0, "zero"),
            (5.0, "five"),
            (12.0, "twelve"),
            (3.0, "three"),
            (20.0, "twenty"),
        ]);
        let r = Range::new(2.0, 12.0).unwrap();
        let ticks = g.generate_ticks(&r, g.default_ticks_count());
        let got: Vec<(usize, f64, &str)> = ticks
            .iter()
            .map(|t| (t.index, t.value, t.label_text()))
            .collect();
        assert_eq!(
            got,
            alloc::vec![(0, 3.0, "three"), (1, 5.0, "five"), (2, 12.0, "twelve")]
        );
    }

    #[test]
    fn default_count_is_the_number_of_labels() {
        let mut g = FixedLabelTicks::new([(1.0, "a"), (2.0, "b")]);
        assert_eq!(g.default_ticks_count(), 2);
        g.set_labels([(1.0, String::from("x"))]);
        assert_eq!(g.default_ticks_count(), 1);
        assert_eq!(g.suggest_increased_ticks_count(1), 1);
        assert_eq!(g.suggest_decreased_tick_count(1), 1);
    }

    #[test]
    fn point_range_keeps_labels_at_that_position() {
        let g = FixedLabelTicks::new([(1.0, "a"), (2.0, "b"), (2.0, "b'")]);
        let at = |v: f64| g.generate_ticks(&Range::point(v), 1).len();
        assert_eq!(at(1.0), 1);
        assert_eq!(at(2.0), 2);
        assert_eq!(at(1.5), 0);
    }
}
