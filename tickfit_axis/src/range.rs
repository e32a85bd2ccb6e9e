// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::error::LayoutError;
use crate::value::AxisValue;

/// A closed interval `[min, max]` over an ordered domain.
///
/// `min <= max` always holds; [`Range::new`] rejects anything else.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Range<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd> Range<T> {
    /// Creates a range, failing with [`LayoutError::InvertedRange`] if
    /// `min > max` or the bounds are unordered (e.g. NaN).
    pub fn new(min: T, max: T) -> Result<Self, LayoutError> {
        if min <= max {
            Ok(Self { min, max })
        } else {
            Err(LayoutError::InvertedRange)
        }
    }

    /// Returns the lower bound.
    pub fn min(&self) -> &T {
        &self.min
    }

    /// Returns the upper bound.
    pub fn max(&self) -> &T {
        &self.max
    }

    /// Returns `true` if the range is a single point (`min == max`).
    pub fn is_point(&self) -> bool {
        self.min == self.max
    }

    /// Returns `true` if `value` lies within the closed interval.
    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value <= self.max
    }
}

impl<T: Clone> Range<T> {
    /// Creates the degenerate range `[value, value]`.
    pub fn point(value: T) -> Self {
        Self {
            min: value.clone(),
            max: value,
        }
    }
}

impl<T: AxisValue> Range<T> {
    /// Projects the range onto the numeric axis line.
    pub fn to_numeric(&self) -> Range<f64> {
        Range {
            min: self.min.to_axis_number(),
            max: self.max.to_axis_number(),
        }
    }
}

impl Range<f64> {
    /// Returns `max - min`.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn inverted_and_nan_ranges_are_rejected() {
        assert_eq!(Range::new(2.0, 1.0), Err(LayoutError::InvertedRange));
        assert_eq!(Range::new(f64::NAN, 1.0), Err(LayoutError::InvertedRange));
    }

    #[test]
    fn point_range_contains_only_its_value() {
        let r = Range::point(5.0);
        assert!(r.is_point());
        assert!(r.contains(&5.0));
        assert!(!r.contains(&5.000_001));
        assert_eq!(r.span(), 0.0);
    }
}
