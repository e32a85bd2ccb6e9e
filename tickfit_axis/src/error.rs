// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use thiserror::Error;

use crate::axis::{AxisOrientation, Dimension};

/// Errors raised while configuring an axis.
///
/// Layout itself never fails: a search that does not converge yields an empty
/// tick set instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// The axis lacks the extent its tick coordinates are mapped onto.
    #[error("{orientation} axis requires an explicit {dimension}")]
    MissingExtent {
        /// Orientation of the offending axis.
        orientation: AxisOrientation,
        /// The dimension that was left unset.
        dimension: Dimension,
    },
    /// A range was constructed with `min > max`.
    #[error("range minimum is greater than its maximum")]
    InvertedRange,
}
