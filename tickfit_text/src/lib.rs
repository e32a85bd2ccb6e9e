// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Label measurement hooks for axis layout.
//!
//! Axis layout needs the pixel size of every candidate tick label to decide
//! whether labels collide. Rasterization and shaping live downstream, so the
//! layout engine depends only on the tiny [`LabelMeasurer`] interface defined
//! here.
//!
//! Any `Fn(&str, &LabelFont) -> Size` closure is a measurer, which makes it easy
//! to bridge to a canvas `measureText` call or a shaping engine:
//!
//! ```
//! use kurbo::Size;
//! use tickfit_text::{LabelFont, LabelMeasurer};
//!
//! let measurer = |text: &str, font: &LabelFont| {
//!     Size::new(text.len() as f64 * font.size * 0.5, font.size)
//! };
//! let size = measurer.measure("100", &LabelFont::new(10.0));
//! assert_eq!(size, Size::new(15.0, 10.0));
//! ```

#![no_std]

extern crate alloc;

use alloc::string::String;
use alloc::sync::Arc;

pub use kurbo::Size;

/// Measures the pixel bounding box of a single-line label.
pub trait LabelMeasurer {
    /// Returns the `(width, height)` of `text` rendered with `font`.
    fn measure(&self, text: &str, font: &LabelFont) -> Size;

    /// Returns the height of one line of text in `font`.
    ///
    /// Used when an axis derives its own thickness and no label is available
    /// to measure.
    fn line_height(&self, font: &LabelFont) -> f64 {
        self.measure("", font).height
    }
}

impl<F> LabelMeasurer for F
where
    F: Fn(&str, &LabelFont) -> Size,
{
    fn measure(&self, text: &str, font: &LabelFont) -> Size {
        (self)(text, font)
    }
}

/// Font description used for label measurement.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelFont {
    /// Font size in pixels.
    pub size: f64,
    /// The preferred font family.
    pub family: FontFamily,
    /// Font weight (e.g. `400` for normal, `700` for bold).
    pub weight: FontWeight,
    /// Font style (normal/italic/oblique).
    pub style: FontStyle,
}

impl LabelFont {
    /// Creates a normal-weight sans-serif font of the given pixel `size`.
    #[must_use]
    pub fn new(size: f64) -> Self {
        Self {
            size,
            family: FontFamily::SansSerif,
            weight: FontWeight::NORMAL,
            style: FontStyle::Normal,
        }
    }

    /// Sets the font family.
    #[must_use]
    pub fn with_family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self
    }

    /// Sets the font weight.
    #[must_use]
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the font style.
    #[must_use]
    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Formats the font as a CSS `font` shorthand, e.g. `italic 700 12px serif`.
    ///
    /// This is the form expected by canvas `measureText` backends. Normal
    /// style is omitted.
    #[must_use]
    pub fn to_css(&self) -> String {
        let style = match self.style {
            FontStyle::Normal => "",
            FontStyle::Italic => "italic ",
            FontStyle::Oblique => "oblique ",
        };
        alloc::format!(
            "{style}{} {}px {}",
            self.weight.0,
            self.size,
            self.family.as_css_family()
        )
    }
}

impl Default for LabelFont {
    fn default() -> Self {
        Self::new(12.0)
    }
}

/// Font family selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// CSS `serif`.
    Serif,
    /// CSS `sans-serif`.
    SansSerif,
    /// CSS `monospace`.
    Monospace,
    /// A named family (e.g. `"Inter"`).
    Named(Arc<str>),
}

impl FontFamily {
    /// Returns the family name as used in CSS font declarations.
    #[must_use]
    pub fn as_css_family(&self) -> &str {
        match self {
            Self::Serif => "serif",
            Self::SansSerif => "sans-serif",
            Self::Monospace => "monospace",
            Self::Named(name) => name,
        }
    }
}

/// CSS-style numeric font weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// `400`.
    pub const NORMAL: Self = Self(400);
    /// `700`.
    pub const BOLD: Self = Self(700);
}

/// CSS-style font style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontStyle {
    /// Upright.
    Normal,
    /// Italic.
    Italic,
    /// Oblique.
    Oblique,
}

/// A heuristic measurer for tests and early layout.
///
/// Every glyph is assumed to advance `0.6em`; a line is `1em` tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicLabelMeasurer;

impl LabelMeasurer for HeuristicLabelMeasurer {
    fn measure(&self, text: &str, font: &LabelFont) -> Size {
        let width = 0.6 * font.size * text.chars().count() as f64;
        Size::new(width, font.size)
    }
}
