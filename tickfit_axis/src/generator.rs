// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick generator capabilities.

use alloc::vec::Vec;

use crate::range::Range;
use crate::tick::Tick;

/// Produces the major ticks of an axis for a requested tick count.
///
/// The layout engine starts from [`MajorTicksGenerator::default_ticks_count`]
/// and, after each arrangement check, asks for an adjusted count:
/// [`MajorTicksGenerator::suggest_increased_ticks_count`] once labels collide
/// and [`MajorTicksGenerator::suggest_decreased_tick_count`] once they leave
/// gaps. A suggestion equal to the current count (or `0`) ends the search, so
/// generators whose ticks are intrinsic to the range return the count unchanged.
pub trait MajorTicksGenerator<T> {
    /// The count requested on the first pass.
    fn default_ticks_count(&self) -> usize;

    /// Length in pixels of the tick marks this generator emits.
    ///
    /// Axes derive their thickness from it, even when no tick is committed.
    fn tick_length(&self) -> f64;

    /// Generates ticks for `range`, ascending by value with dense indices.
    fn generate_ticks(&self, range: &Range<T>, ticks_count: usize) -> Vec<Tick<T>>;

    /// Count to request after labels collided at `ticks_count`.
    fn suggest_increased_ticks_count(&self, ticks_count: usize) -> usize;

    /// Count to request after labels left gaps at `ticks_count`.
    fn suggest_decreased_tick_count(&self, ticks_count: usize) -> usize;
}

/// Produces unlabeled ticks between already committed major ticks.
pub trait MinorTicksGenerator<T> {
    /// Generates minor ticks for `range`, ascending by value with dense indices.
    fn generate_minor_ticks(&self, range: &Range<T>, major_ticks: &[Tick<T>]) -> Vec<Tick<T>>;
}

/// Tick counts adaptive generators step through.
const TICK_COUNT_LADDER: &[usize] = &[1, 2, 3, 4, 5, 6, 8, 10, 12, 16, 20, 24, 32];

/// The next smaller ladder count, or `ticks_count` at the bottom.
pub(crate) fn coarser_ticks_count(ticks_count: usize) -> usize {
    TICK_COUNT_LADDER
        .iter()
        .rev()
        .copied()
        .find(|&c| c < ticks_count)
        .unwrap_or(ticks_count)
}

/// The next larger ladder count, or `ticks_count` at the top.
pub(crate) fn finer_ticks_count(ticks_count: usize) -> usize {
    TICK_COUNT_LADDER
        .iter()
        .copied()
        .find(|&c| c > ticks_count)
        .unwrap_or(ticks_count)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn ladder_steps_and_saturates() {
        assert_eq!(coarser_ticks_count(10), 8);
        assert_eq!(coarser_ticks_count(7), 6);
        assert_eq!(coarser_ticks_count(1), 1);
        assert_eq!(finer_ticks_count(10), 12);
        assert_eq!(finer_ticks_count(32), 32);
        assert_eq!(finer_ticks_count(100), 100);
    }
}
