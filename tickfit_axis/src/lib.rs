// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adaptive axis tick layout.
//!
//! Given a value range, a pixel extent and a tick generation strategy, an
//! [`Axis`] finds a set of major ticks whose labels neither overlap nor leave
//! large gaps. It does this with a short feedback search:
//! - a [`MajorTicksGenerator`] proposes ticks for a requested count,
//! - a [`LabelMeasurer`] sizes their labels and a [`CoordinateMapper`] places them,
//! - [`check_labels_arrangement`] decides whether the count should go up or down.
//!
//! The search is bounded by [`MAX_ATTEMPTS`] and damped so that a collision
//! followed by a gap settles instead of oscillating. Minor ticks are derived
//! from the committed major ticks afterwards.
//!
//! Generators are provided for linear ranges ([`LinearTicks`]), logarithmic
//! ranges ([`LogTicks`]), calendar ranges ([`TimeUnitTicks`]) and caller-supplied
//! labels ([`FixedLabelTicks`]). Value types plug in through [`AxisValue`].
//!
//! Rendering is out of scope: the result is an [`AxisLayout`] of ticks,
//! pixel coordinates and label sizes.

#![no_std]

extern crate alloc;

mod arrange;
mod axis;
mod error;
#[cfg(not(feature = "std"))]
mod float;
mod format;
mod generator;
mod label_cache;
mod labeled;
mod linear;
mod log;
mod mapper;
mod minor;
mod range;
mod tick;
mod time;
mod value;

pub use arrange::{
    DECREASE_TICKS_COUNT_COEFF, INCREASE_TICKS_COUNT_COEFF, LabelPlacement, TicksCountChange,
    check_labels_arrangement,
};
pub use axis::{Axis, AxisLayout, AxisOptions, AxisOrientation, Dimension, MAX_ATTEMPTS};
pub use error::LayoutError;
pub use format::format_tick_with_step;
pub use generator::{MajorTicksGenerator, MinorTicksGenerator};
pub use labeled::FixedLabelTicks;
pub use linear::LinearTicks;
pub use log::LogTicks;
pub use mapper::{CoordinateMapper, LinearMapper, LogMapper};
pub use minor::{LogMinorTicks, SubdivisionMinorTicks};
pub use range::Range;
pub use tick::Tick;
pub use time::{TimeUnit, TimeUnitTicks};
pub use value::AxisValue;

pub use tickfit_text::{
    FontFamily, FontStyle, FontWeight, HeuristicLabelMeasurer, LabelFont, LabelMeasurer, Size,
};
