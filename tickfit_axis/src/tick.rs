// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

/// A single graduation on an axis.
///
/// Ticks are produced fresh by a generator on every pass and never mutated.
/// A tick carrying a `label` is the labeled variant; minor ticks have none.
#[derive(Clone, Debug, PartialEq)]
pub struct Tick<T> {
    /// Position of the tick in the axis domain.
    pub value: T,
    /// Length of the tick mark in pixels.
    pub length: f64,
    /// Dense position of the tick within its generation pass, starting at `0`.
    pub index: usize,
    /// Display text, if any.
    pub label: Option<String>,
}

impl<T> Tick<T> {
    /// Creates an unlabeled tick.
    pub fn new(value: T, length: f64, index: usize) -> Self {
        Self {
            value,
            length,
            index,
            label: None,
        }
    }

    /// Creates a labeled tick.
    pub fn labeled(value: T, length: f64, index: usize, label: impl Into<String>) -> Self {
        Self {
            value,
            length,
            index,
            label: Some(label.into()),
        }
    }

    /// Returns the label text, or `""` for unlabeled ticks.
    pub fn label_text(&self) -> &str {
        self.label.as_deref().unwrap_or("")
    }
}
