// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value to pixel mapping.
//!
//! The layout engine sorts candidate ticks by their mapped coordinate and
//! assumes that gives the same order as sorting by value, so every mapper must
//! be monotonic in `value` for a fixed range and extent. Mappers produce a
//! coordinate along the axis starting at `0`; the engine flips it for vertical
//! axes.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::range::Range;

/// Maps a numeric axis value to a pixel offset along an axis.
pub trait CoordinateMapper {
    /// Maps `value` within `range` onto `[0, extent]`.
    fn to_screen(&self, value: f64, range: &Range<f64>, extent: f64) -> f64;
}

impl<F> CoordinateMapper for F
where
    F: Fn(f64, &Range<f64>, f64) -> f64,
{
    fn to_screen(&self, value: f64, range: &Range<f64>, extent: f64) -> f64 {
        (self)(value, range, extent)
    }
}

/// Affine mapping: `min` lands on `0`, `max` on `extent`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearMapper;

impl CoordinateMapper for LinearMapper {
    fn to_screen(&self, value: f64, range: &Range<f64>, extent: f64) -> f64 {
        let denom = range.span();
        if denom == 0.0 {
            return 0.0;
        }
        let t = (value - *range.min()) / denom;
        t * extent
    }
}

/// Logarithmic mapping for strictly positive ranges.
#[derive(Clone, Copy, Debug)]
pub struct LogMapper {
    base: f64,
}

impl LogMapper {
    /// Creates a log mapper; invalid bases (non-finite, `<= 0`, or `1`) fall back to `10`.
    pub fn new(base: f64) -> Self {
        let base = if base.is_finite() && base > 0.0 && base != 1.0 {
            base
        } else {
            10.0
        };
        Self { base }
    }

    /// Returns the log base.
    pub fn base(&self) -> f64 {
        self.base
    }

    fn log_base(&self, x: f64) -> f64 {
        x.ln() / self.base.ln()
    }
}

impl Default for LogMapper {
    fn default() -> Self {
        Self::new(10.0)
    }
}

impl CoordinateMapper for LogMapper {
    /// Non-positive values lie infinitely far before the axis start. A range
    /// that is not strictly positive maps everything to `0`.
    fn to_screen(&self, value: f64, range: &Range<f64>, extent: f64) -> f64 {
        let (d0, d1) = (*range.min(), *range.max());
        if d0 <= 0.0 || d1 <= 0.0 {
            return 0.0;
        }
        if value <= 0.0 {
            return f64::NEG_INFINITY;
        }
        let ld0 = self.log_base(d0);
        let denom = self.log_base(d1) - ld0;
        if denom == 0.0 {
            return 0.0;
        }
        let t = (self.log_base(value) - ld0) / denom;
        t * extent
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn linear_maps_endpoints_to_extent() {
        let r = Range::new(-10.0, 10.0).unwrap();
        assert_eq!(LinearMapper.to_screen(-10.0, &r, 200.0), 0.0);
        assert_eq!(LinearMapper.to_screen(0.0, &r, 200.0), 100.0);
        assert_eq!(LinearMapper.to_screen(10.0, &r, 200.0), 200.0);
    }

    #[test]
    fn log_maps_decades_evenly() {
        let r = Range::new(1.0, 1000.0).unwrap();
        let m = LogMapper::new(10.0);
        assert!((m.to_screen(10.0, &r, 300.0) - 100.0).abs() < 1e-9);
        assert!((m.to_screen(100.0, &r, 300.0) - 200.0).abs() < 1e-9);
        assert_eq!(m.to_screen(0.0, &r, 300.0), f64::NEG_INFINITY);
    }

    #[test]
    fn point_range_maps_to_origin() {
        let r = Range::point(3.0);
        assert_eq!(LinearMapper.to_screen(3.0, &r, 50.0), 0.0);
        assert_eq!(LogMapper::default().to_screen(3.0, &r, 50.0), 0.0);
    }

    #[test]
    fn closures_are_mappers() {
        let inset = |v: f64, r: &Range<f64>, extent: f64| {
            4.0 + LinearMapper.to_screen(v, r, extent - 8.0)
        };
        let r = Range::new(0.0, 1.0).unwrap();
        assert_eq!(inset.to_screen(0.0, &r, 108.0), 4.0);
        assert_eq!(inset.to_screen(1.0, &r, 108.0), 104.0);
    }

    #[test]
    fn invalid_log_base_falls_back_to_ten() {
        assert_eq!(LogMapper::new(1.0).base(), 10.0);
        assert_eq!(LogMapper::new(-2.0).base(), 10.0);
        assert_eq!(LogMapper::new(2.0).base(), 2.0);
    }
}
