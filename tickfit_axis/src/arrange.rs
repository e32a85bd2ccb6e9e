// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label arrangement check.
//!
//! Decides whether the labels of a candidate tick set collide (too many ticks)
//! or leave large gaps (too few). The two thresholds differ on purpose: a pair
//! spaced between `1.5` and `2` label extents apart is accepted either way, so
//! borderline spacings do not flip the search back and forth.

use kurbo::Size;
use smallvec::SmallVec;

use crate::axis::AxisOrientation;

/// Labels closer than this many label extents are too dense.
pub const DECREASE_TICKS_COUNT_COEFF: f64 = 1.5;
/// Labels further apart than this many label extents are too sparse.
pub const INCREASE_TICKS_COUNT_COEFF: f64 = 2.0;

/// Outcome of an arrangement check, driving the next requested tick count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TicksCountChange {
    /// The arrangement is acceptable.
    Ok,
    /// Labels are sparse; more ticks would fit.
    Increase,
    /// Labels overlap; fewer ticks are needed.
    Decrease,
}

/// A tick label reduced to what the arrangement check needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelPlacement {
    /// Mapped coordinate of the tick along the axis.
    pub coord: f64,
    /// Label size along the axis: width for horizontal axes, height for vertical ones.
    pub extent: f64,
}

/// Pairs label sizes with coordinates and sorts them along the axis.
pub(crate) fn label_placements(
    orientation: AxisOrientation,
    label_sizes: &[Size],
    coords: &[f64],
) -> SmallVec<[LabelPlacement; 16]> {
    let mut placements: SmallVec<[LabelPlacement; 16]> = label_sizes
        .iter()
        .zip(coords)
        .map(|(size, &coord)| LabelPlacement {
            coord,
            extent: match orientation {
                AxisOrientation::Horizontal => size.width,
                AxisOrientation::Vertical => size.height,
            },
        })
        .collect();
    placements.sort_by(|a, b| a.coord.total_cmp(&b.coord));
    placements
}

/// Scans adjacent placements (sorted by `coord`) for collisions and gaps.
///
/// The first colliding pair returns [`TicksCountChange::Decrease`] at once. A
/// gap only records [`TicksCountChange::Increase`] and keeps scanning, so a
/// later collision still wins.
pub fn check_labels_arrangement(placements: &[LabelPlacement]) -> TicksCountChange {
    debug_assert!(
        placements.windows(2).all(|w| w[0].coord <= w[1].coord),
        "placements must be sorted by coordinate"
    );
    let mut res = TicksCountChange::Ok;
    for pair in placements.windows(2) {
        let (left, right) = (pair[0], pair[1]);
        if left.coord + left.extent * DECREASE_TICKS_COUNT_COEFF > right.coord {
            return TicksCountChange::Decrease;
        }
        if left.coord + left.extent * INCREASE_TICKS_COUNT_COEFF < right.coord {
            res = TicksCountChange::Increase;
        }
    }
    res
}
