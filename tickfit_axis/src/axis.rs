// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Axis layout engine.
//!
//! An [`Axis`] owns a major tick generator, an optional minor tick generator,
//! a coordinate mapper and a label measurer. Every update runs a bounded
//! search for a tick count whose labels neither collide nor leave large gaps:
//!
//! 1. generate candidate ticks for the requested count,
//! 2. measure their labels and map them to pixels,
//! 3. check the arrangement and ask the generator for an adjusted count,
//!
//! until the arrangement is acceptable, the count stops changing, or
//! [`MAX_ATTEMPTS`] passes have run. Candidates live only inside the search;
//! the result is committed to an [`AxisLayout`] once the search ends.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use kurbo::Size;
use smallvec::SmallVec;
use tickfit_text::{HeuristicLabelMeasurer, LabelFont, LabelMeasurer};

use crate::arrange::{TicksCountChange, check_labels_arrangement, label_placements};
use crate::error::LayoutError;
use crate::generator::{MajorTicksGenerator, MinorTicksGenerator};
use crate::label_cache::LabelSizeCache;
use crate::mapper::{CoordinateMapper, LinearMapper};
use crate::range::Range;
use crate::tick::Tick;
use crate::value::AxisValue;

/// Generation passes allowed before the search gives up.
pub const MAX_ATTEMPTS: usize = 12;

/// Axis direction on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AxisOrientation {
    /// Values grow left to right; label widths decide collisions.
    Horizontal,
    /// Values grow bottom to top; label heights decide collisions.
    Vertical,
}

impl fmt::Display for AxisOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        })
    }
}

/// One of the two axis extents.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Horizontal extent.
    Width,
    /// Vertical extent.
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Width => "width",
            Self::Height => "height",
        })
    }
}

/// Axis layout options.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisOptions {
    /// Font used to measure tick labels.
    pub label_font: LabelFont,
    /// Space added to a derived vertical axis width, beyond labels and ticks.
    pub vertical_label_padding: f64,
    /// Space added to a derived horizontal axis height, beyond labels and ticks.
    pub horizontal_label_padding: f64,
}

impl AxisOptions {
    /// Sets the label font.
    pub fn with_label_font(mut self, label_font: LabelFont) -> Self {
        self.label_font = label_font;
        self
    }

    /// Sets the padding added to a derived vertical axis width.
    pub fn with_vertical_label_padding(mut self, padding: f64) -> Self {
        self.vertical_label_padding = padding;
        self
    }

    /// Sets the padding added to a derived horizontal axis height.
    pub fn with_horizontal_label_padding(mut self, padding: f64) -> Self {
        self.horizontal_label_padding = padding;
        self
    }
}

impl Default for AxisOptions {
    fn default() -> Self {
        Self {
            label_font: LabelFont::new(12.0),
            vertical_label_padding: 4.0,
            horizontal_label_padding: 2.0,
        }
    }
}

/// The committed result of the last layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisLayout<T> {
    /// Major ticks, ascending by value.
    pub major_ticks: Vec<Tick<T>>,
    /// Minor ticks, ascending by value. Empty without a minor generator.
    pub minor_ticks: Vec<Tick<T>>,
    /// Pixel coordinate of each major tick along the axis.
    pub major_coords: Vec<f64>,
    /// Pixel coordinate of each minor tick along the axis.
    pub minor_coords: Vec<f64>,
    /// Measured label size of each major tick.
    pub major_label_sizes: Vec<Size>,
    /// Axis size, with any unset extent derived from the labels.
    pub size: Size,
}

impl<T> Default for AxisLayout<T> {
    fn default() -> Self {
        Self {
            major_ticks: Vec::new(),
            minor_ticks: Vec::new(),
            major_coords: Vec::new(),
            minor_coords: Vec::new(),
            major_label_sizes: Vec::new(),
            size: Size::ZERO,
        }
    }
}

/// An axis and its committed tick layout.
///
/// Horizontal axes need a width and vertical axes a height: ticks are mapped
/// onto that extent. The other extent may be left unset, in which case it is
/// derived from the committed labels on every update.
///
/// ```
/// use tickfit_axis::{Axis, AxisOrientation, LinearTicks, Range};
///
/// let mut axis = Axis::new(
///     AxisOrientation::Horizontal,
///     Range::new(0.0, 100.0)?,
///     Some(400.0),
///     None,
///     LinearTicks::new(),
/// )?;
/// let layout = axis.compute_layout();
/// assert!(!layout.major_ticks.is_empty());
/// assert!(layout.size.height > 0.0);
/// # Ok::<(), tickfit_axis::LayoutError>(())
/// ```
pub struct Axis<T> {
    orientation: AxisOrientation,
    range: Range<T>,
    width: Option<f64>,
    height: Option<f64>,
    options: AxisOptions,
    major_generator: Box<dyn MajorTicksGenerator<T>>,
    minor_generator: Option<Box<dyn MinorTicksGenerator<T>>>,
    mapper: Box<dyn CoordinateMapper>,
    measurer: Box<dyn LabelMeasurer>,
    label_cache: LabelSizeCache,
    layout: AxisLayout<T>,
}

impl<T: fmt::Debug> fmt::Debug for Axis<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Axis")
            .field("orientation", &self.orientation)
            .field("range", &self.range)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("options", &self.options)
            .field("minor_generator", &self.minor_generator.is_some())
            .field("layout", &self.layout)
            .finish_non_exhaustive()
    }
}

impl<T: AxisValue> Axis<T> {
    /// Creates an axis with a linear mapper and a heuristic label measurer.
    ///
    /// Fails with [`LayoutError::MissingExtent`] if the extent ticks are mapped
    /// onto (width for horizontal, height for vertical) is `None`. No layout is
    /// computed until [`Axis::compute_layout`] or [`Axis::update`] is called.
    pub fn new(
        orientation: AxisOrientation,
        range: Range<T>,
        width: Option<f64>,
        height: Option<f64>,
        major_generator: impl MajorTicksGenerator<T> + 'static,
    ) -> Result<Self, LayoutError> {
        validate_extents(orientation, width, height)?;
        Ok(Self {
            orientation,
            range,
            width,
            height,
            options: AxisOptions::default(),
            major_generator: Box::new(major_generator),
            minor_generator: None,
            mapper: Box::new(LinearMapper),
            measurer: Box::new(HeuristicLabelMeasurer),
            label_cache: LabelSizeCache::default(),
            layout: AxisLayout::default(),
        })
    }

    /// Adds a minor tick generator.
    pub fn with_minor_ticks(mut self, generator: impl MinorTicksGenerator<T> + 'static) -> Self {
        self.minor_generator = Some(Box::new(generator));
        self
    }

    /// Replaces the coordinate mapper.
    pub fn with_mapper(mut self, mapper: impl CoordinateMapper + 'static) -> Self {
        self.mapper = Box::new(mapper);
        self
    }

    /// Replaces the label measurer.
    ///
    /// Cached label sizes from the previous measurer are dropped.
    pub fn with_measurer(mut self, measurer: impl LabelMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self.label_cache = LabelSizeCache::default();
        self
    }

    /// Replaces the layout options.
    pub fn with_options(mut self, options: AxisOptions) -> Self {
        self.options = options;
        self.label_cache = LabelSizeCache::default();
        self
    }

    /// Returns the orientation.
    pub fn orientation(&self) -> AxisOrientation {
        self.orientation
    }

    /// Returns the current range.
    pub fn range(&self) -> &Range<T> {
        &self.range
    }

    /// Returns the committed layout.
    pub fn layout(&self) -> &AxisLayout<T> {
        &self.layout
    }

    /// Returns the committed axis size.
    pub fn size(&self) -> Size {
        self.layout.size
    }

    /// Sets a new range and extents, then recomputes the layout.
    ///
    /// On error the axis keeps its previous range, extents and layout.
    pub fn update(
        &mut self,
        range: Range<T>,
        width: Option<f64>,
        height: Option<f64>,
    ) -> Result<&AxisLayout<T>, LayoutError> {
        validate_extents(self.orientation, width, height)?;
        self.range = range;
        self.width = width;
        self.height = height;
        Ok(self.compute_layout())
    }

    /// Recomputes the layout for the current range and extents.
    pub fn compute_layout(&mut self) -> &AxisLayout<T> {
        let numeric = self.range.to_numeric();
        let extent = self.mapped_extent();

        let major_ticks = self.generate_major_ticks(&numeric, extent);
        let major_label_sizes =
            self.label_cache
                .measure(&major_ticks, &*self.measurer, &self.options.label_font);
        let major_coords = self.coordinates(&major_ticks, &numeric, extent);

        let minor_ticks = match &self.minor_generator {
            Some(generator) if !major_ticks.is_empty() => {
                generator.generate_minor_ticks(&self.range, &major_ticks)
            }
            _ => Vec::new(),
        };
        let minor_coords = self.coordinates(&minor_ticks, &numeric, extent);

        let size = self.resolve_size(&major_label_sizes);
        self.layout = AxisLayout {
            major_ticks,
            minor_ticks,
            major_coords,
            minor_coords,
            major_label_sizes,
            size,
        };
        &self.layout
    }

    /// The extent ticks are mapped onto. Guaranteed set by `validate_extents`.
    fn mapped_extent(&self) -> f64 {
        match self.orientation {
            AxisOrientation::Horizontal => self.width.unwrap_or_default(),
            AxisOrientation::Vertical => self.height.unwrap_or_default(),
        }
    }

    fn coordinates(&self, ticks: &[Tick<T>], numeric: &Range<f64>, extent: f64) -> Vec<f64> {
        ticks
            .iter()
            .map(|tick| {
                tick_coordinate(
                    self.orientation,
                    &*self.mapper,
                    tick.value.to_axis_number(),
                    numeric,
                    extent,
                )
            })
            .collect()
    }

    /// Runs the tick count search. Returns no ticks if it does not converge.
    fn generate_major_ticks(&mut self, numeric: &Range<f64>, extent: f64) -> Vec<Tick<T>> {
        let generator = &*self.major_generator;
        let mut ticks_count = generator.default_ticks_count();
        let mut prev_state: Option<TicksCountChange> = None;
        let mut prev_len: Option<usize> = None;
        let mut attempt = 1;

        loop {
            if attempt > MAX_ATTEMPTS {
                tracing::warn!(
                    attempts = MAX_ATTEMPTS,
                    orientation = %self.orientation,
                    "axis major ticks generation failed to converge"
                );
                return Vec::new();
            }

            if self.range.is_point() {
                ticks_count = 1;
            }

            let ticks = generator.generate_ticks(&self.range, ticks_count);
            if prev_len == Some(ticks.len()) {
                tracing::trace!(attempt, ticks_count, len = ticks.len(), "tick count settled");
                return ticks;
            }

            let label_sizes =
                self.label_cache
                    .measure(&ticks, &*self.measurer, &self.options.label_font);
            let coords: SmallVec<[f64; 16]> = ticks
                .iter()
                .map(|tick| {
                    tick_coordinate(
                        self.orientation,
                        &*self.mapper,
                        tick.value.to_axis_number(),
                        numeric,
                        extent,
                    )
                })
                .collect();
            let placements = label_placements(self.orientation, &label_sizes, &coords);

            let mut state = check_labels_arrangement(&placements);
            if prev_state == Some(TicksCountChange::Decrease) && state == TicksCountChange::Increase
            {
                state = TicksCountChange::Ok;
            }
            if state != TicksCountChange::Ok {
                let suggested = match state {
                    TicksCountChange::Decrease => generator.suggest_increased_ticks_count(ticks_count),
                    _ => generator.suggest_decreased_tick_count(ticks_count),
                };
                if suggested == 0 || suggested == ticks_count {
                    state = TicksCountChange::Ok;
                } else {
                    ticks_count = suggested;
                }
            }

            tracing::trace!(
                attempt,
                ticks_count,
                len = ticks.len(),
                state = ?state,
                "axis arrangement checked"
            );
            if state == TicksCountChange::Ok {
                return ticks;
            }

            prev_state = Some(state);
            prev_len = Some(ticks.len());
            attempt += 1;
        }
    }

    fn resolve_size(&self, label_sizes: &[Size]) -> Size {
        let tick_length = self.major_generator.tick_length();
        let width = self.width.unwrap_or_else(|| {
            let label_width = label_sizes.iter().map(|s| s.width).fold(0.0_f64, f64::max);
            label_width + tick_length + self.options.vertical_label_padding
        });
        let height = self.height.unwrap_or_else(|| {
            self.measurer.line_height(&self.options.label_font)
                + tick_length
                + self.options.horizontal_label_padding
        });
        Size::new(width, height)
    }
}

fn validate_extents(
    orientation: AxisOrientation,
    width: Option<f64>,
    height: Option<f64>,
) -> Result<(), LayoutError> {
    let dimension = match (orientation, width, height) {
        (AxisOrientation::Horizontal, None, _) => Dimension::Width,
        (AxisOrientation::Vertical, _, None) => Dimension::Height,
        _ => return Ok(()),
    };
    Err(LayoutError::MissingExtent {
        orientation,
        dimension,
    })
}

/// Maps a value onto the axis. Vertical axes grow upwards, so their screen
/// coordinate is measured from the bottom of the extent.
fn tick_coordinate(
    orientation: AxisOrientation,
    mapper: &dyn CoordinateMapper,
    value: f64,
    numeric: &Range<f64>,
    extent: f64,
) -> f64 {
    let offset = mapper.to_screen(value, numeric, extent);
    match orientation {
        AxisOrientation::Horizontal => offset,
        AxisOrientation::Vertical => extent - offset,
    }
}
