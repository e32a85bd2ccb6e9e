// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Calendar-aligned ticks for timestamp axes.
//!
//! A [`TimeUnitTicks`] generator places ticks on boundaries of one calendar
//! unit (every 15 seconds, every 6 hours, every quarter, ...). Labels come in
//! two forms: a detailed one that anchors the reader (`March 10 2024, 10:01:00`)
//! on the first tick and whenever the next larger unit rolls over, and a short
//! one (`15s`) in between.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, TimeDelta, Timelike};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::generator::{MajorTicksGenerator, coarser_ticks_count, finer_ticks_count};
use crate::range::Range;
use crate::tick::Tick;
use crate::value::AxisValue;

/// Upper bound on ticks produced by a single pass.
const MAX_TICKS: usize = 10_000;

/// Calendar unit ticks are aligned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TimeUnit {
    /// Seconds within a minute.
    Seconds,
    /// Minutes within an hour.
    Minutes,
    /// Hours within a day.
    Hours,
    /// Days within a month.
    Days,
    /// Months within a year.
    Months,
    /// Calendar years.
    Years,
}

impl TimeUnit {
    /// Allowed steps, in units. Each divides the next larger unit where possible.
    fn steps(self) -> &'static [u32] {
        match self {
            Self::Seconds | Self::Minutes => &[1, 2, 5, 10, 15, 30],
            Self::Hours => &[1, 2, 3, 6, 12],
            Self::Days => &[1, 2, 7, 14],
            Self::Months => &[1, 2, 3, 6],
            Self::Years => &[1, 2, 5, 10, 20, 50, 100, 200, 500, 1000],
        }
    }

    /// Average length of one unit in seconds.
    fn approx_seconds(self) -> f64 {
        match self {
            Self::Seconds => 1.0,
            Self::Minutes => 60.0,
            Self::Hours => 3_600.0,
            Self::Days => 86_400.0,
            Self::Months => 2_629_746.0,
            Self::Years => 31_556_952.0,
        }
    }

    /// Smallest allowed step giving at most `ticks_count` intervals over `span_seconds`.
    ///
    /// Past the end of the ladder the largest step is multiplied up, so a long
    /// range is still covered end to end.
    fn step_for(self, span_seconds: f64, ticks_count: usize) -> u32 {
        let ticks_count = ticks_count.clamp(1, MAX_TICKS / 2);
        let wanted = span_seconds / ticks_count as f64 / self.approx_seconds();
        let steps = self.steps();
        if let Some(&step) = steps.iter().find(|&&s| f64::from(s) >= wanted) {
            return step;
        }
        let largest = steps.last().copied().unwrap_or(1);
        let k = (wanted / f64::from(largest))
            .ceil()
            .clamp(1.0, f64::from(u32::MAX));
        #[allow(clippy::cast_possible_truncation, reason = "clamped to the u32 range")]
        let k = k as u32;
        largest.saturating_mul(k)
    }

    /// Rounds `t` down to a unit boundary that is a multiple of `step`.
    fn floor(self, t: NaiveDateTime, step: u32) -> Option<NaiveDateTime> {
        let date = t.date();
        match self {
            Self::Seconds => {
                let s = t.second();
                t.with_nanosecond(0)?.with_second(s - s % step)
            }
            Self::Minutes => {
                let m = t.minute();
                date.and_hms_opt(t.hour(), m - m % step, 0)
            }
            Self::Hours => {
                let h = t.hour();
                date.and_hms_opt(h - h % step, 0, 0)
            }
            Self::Days => {
                let d0 = t.day0();
                date.with_day0(d0 - d0 % step)?.and_hms_opt(0, 0, 0)
            }
            Self::Months => {
                let m0 = t.month0();
                NaiveDate::from_ymd_opt(t.year(), m0 - m0 % step + 1, 1)?.and_hms_opt(0, 0, 0)
            }
            Self::Years => {
                let y = t.year();
                let step = i32::try_from(step).ok()?;
                NaiveDate::from_ymd_opt(y - y.rem_euclid(step), 1, 1)?.and_hms_opt(0, 0, 0)
            }
        }
    }

    /// Advances `t` by `step` units.
    fn add(self, t: NaiveDateTime, step: u32) -> Option<NaiveDateTime> {
        let n = i64::from(step);
        match self {
            Self::Seconds => t.checked_add_signed(TimeDelta::try_seconds(n)?),
            Self::Minutes => t.checked_add_signed(TimeDelta::try_minutes(n)?),
            Self::Hours => t.checked_add_signed(TimeDelta::try_hours(n)?),
            Self::Days => t.checked_add_signed(TimeDelta::try_days(n)?),
            Self::Months => t.checked_add_months(Months::new(step)),
            Self::Years => t.checked_add_months(Months::new(step.checked_mul(12)?)),
        }
    }

    /// Whether the next larger unit differs between `prev` and `cur`.
    fn crosses_boundary(self, prev: NaiveDateTime, cur: NaiveDateTime) -> bool {
        match self {
            Self::Seconds => {
                prev.date() != cur.date()
                    || prev.hour() != cur.hour()
                    || prev.minute() != cur.minute()
            }
            Self::Minutes => prev.date() != cur.date() || prev.hour() != cur.hour(),
            Self::Hours => prev.date() != cur.date(),
            Self::Days => prev.year() != cur.year() || prev.month() != cur.month(),
            Self::Months => prev.year() != cur.year(),
            Self::Years => false,
        }
    }

    fn format(self, t: NaiveDateTime, detailed: bool) -> String {
        if detailed {
            let pattern = match self {
                Self::Seconds => "%B %-d %Y, %-H:%M:%S",
                Self::Minutes => "%B %-d %Y, %-H:%M",
                Self::Hours => "%B %-d %Y, %-H:00",
                Self::Days => "%B %-d %Y",
                Self::Months => "%B %Y",
                Self::Years => "%Y",
            };
            return t.format(pattern).to_string();
        }
        match self {
            Self::Seconds => alloc::format!("{}s", t.second()),
            Self::Minutes => alloc::format!("{}m", t.minute()),
            Self::Hours => alloc::format!("{}h", t.hour()),
            Self::Days => alloc::format!("{}", t.day()),
            Self::Months => t.format("%b").to_string(),
            Self::Years => t.format("%Y").to_string(),
        }
    }
}

/// Major ticks on calendar boundaries of a single [`TimeUnit`].
#[derive(Clone, Copy, Debug)]
pub struct TimeUnitTicks {
    unit: TimeUnit,
    tick_length: f64,
    default_ticks_count: usize,
}

impl TimeUnitTicks {
    /// Creates a generator for `unit` with 5px ticks and a default target of 10.
    pub fn new(unit: TimeUnit) -> Self {
        Self {
            unit,
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

    /// Returns the unit ticks are aligned to.
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }
}

impl MajorTicksGenerator<NaiveDateTime> for TimeUnitTicks {
    fn default_ticks_count(&self) -> usize {
        self.default_ticks_count
    }

    fn tick_length(&self) -> f64 {
        self.tick_length
    }

    fn generate_ticks(
        &self,
        range: &Range<NaiveDateTime>,
        ticks_count: usize,
    ) -> Vec<Tick<NaiveDateTime>> {
        let (min, max) = (*range.min(), *range.max());
        if range.is_point() {
            let label = self.unit.format(min, true);
            return alloc::vec![Tick::labeled(min, self.tick_length, 0, label)];
        }

        let span = max.to_axis_number() - min.to_axis_number();
        let step = self.unit.step_for(span, ticks_count);
        let Some(mut t) = self.unit.floor(min, step) else {
            return Vec::new();
        };
        while t < min {
            match self.unit.add(t, step) {
                Some(next) => t = next,
                None => return Vec::new(),
            }
        }

        let mut out = Vec::new();
        let mut prev: Option<NaiveDateTime> = None;
        while t <= max {
            if out.len() == MAX_TICKS {
                tracing::warn!(unit = ?self.unit, step, "time ticks exceed the per-pass cap");
                return Vec::new();
            }
            let detailed = prev.is_none_or(|p| self.unit.crosses_boundary(p, t));
            let label = self.unit.format(t, detailed);
            out.push(Tick::labeled(t, self.tick_length, out.len(), label));
            prev = Some(t);
            match self.unit.add(t, step) {
                Some(next) => t = next,
                None => break,
            }
        }
        out
    }

    fn suggest_increased_ticks_count(&self, ticks_count: usize) -> usize {
        coarser_ticks_count(ticks_count)
    }

    fn suggest_decreased_tick_count(&self, ticks_count: usize) -> usize {
        finer_ticks_count(ticks_count)
    }
}
