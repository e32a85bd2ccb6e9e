// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Conversion between axis domain values and the numeric line mappers work on.

use chrono::{DateTime, NaiveDateTime};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// A value that can sit on an axis.
///
/// Coordinate mappers only understand `f64`; every axis value type projects
/// onto that line. The projection must be strictly increasing so that ordering
/// ticks by value and by coordinate agree.
pub trait AxisValue: Clone + PartialOrd + core::fmt::Debug {
    /// Projects the value onto the numeric axis line.
    fn to_axis_number(&self) -> f64;

    /// Inverse of [`AxisValue::to_axis_number`].
    ///
    /// Returns `None` when `n` has no representation in this domain.
    fn from_axis_number(n: f64) -> Option<Self>;
}

impl AxisValue for f64 {
    fn to_axis_number(&self) -> f64 {
        *self
    }

    fn from_axis_number(n: f64) -> Option<Self> {
        Some(n)
    }
}

/// Timestamps project to (fractional) seconds since the Unix epoch, UTC.
impl AxisValue for NaiveDateTime {
    fn to_axis_number(&self) -> f64 {
        let utc = self.and_utc();
        utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) * 1.0e-9
    }

    fn from_axis_number(n: f64) -> Option<Self> {
        if !n.is_finite() {
            return None;
        }
        let secs_f = n.floor();
        if secs_f < i64::MIN as f64 || secs_f > i64::MAX as f64 {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, reason = "range checked above")]
        let secs = secs_f as i64;
        let nanos_f = ((n - secs_f) * 1.0e9).round().clamp(0.0, 999_999_999.0);
        #[allow(
            clippy::cast_possible_truncation,
            reason = "clamped to the sub-second nanosecond range"
        )]
        let nanos = nanos_f as u32;
        DateTime::from_timestamp(secs, nanos).map(|t| t.naive_utc())
    }
}
