// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Numeric tick label formatting.

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Formats `v` with just enough decimals to distinguish multiples of `step`.
///
/// `format_tick_with_step(0.30000000000000004, 0.1)` is `"0.3"`; steps of one
/// or more print integers. Negative zero prints as `0`.
pub fn format_tick_with_step(v: f64, step: f64) -> String {
    if !v.is_finite() {
        return alloc::format!("{v}");
    }
    let precision = decimals_for_step(step);
    let v = if v == 0.0 { 0.0 } else { v };
    let out = alloc::format!("{v:.precision$}");
    // Rounding can still produce "-0" or "-0.00".
    if out.starts_with('-') && out[1..].chars().all(|c| c == '0' || c == '.') {
        return String::from(&out[1..]);
    }
    out
}

fn decimals_for_step(step: f64) -> usize {
    let step = step.abs();
    if !step.is_finite() || step == 0.0 || step >= 1.0 {
        return 0;
    }
    let digits = -step.log10();
    // Snap so that `log10(0.1)` lands on exactly one decimal.
    let snapped = digits.round();
    let digits = if (digits - snapped).abs() < 1.0e-9 {
        snapped
    } else {
        digits.ceil()
    };
    let digits = digits.clamp(0.0, 15.0);
    #[allow(clippy::cast_possible_truncation, reason = "clamped to 0..=15")]
    {
        digits as usize
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn precision_follows_step() {
        assert_eq!(format_tick_with_step(0.30000000000000004, 0.1), "0.3");
        assert_eq!(format_tick_with_step(0.25, 0.05), "0.25");
        assert_eq!(format_tick_with_step(1000.0, 200.0), "1000");
    }

    #[test]
    fn negative_zero_prints_unsigned() {
        assert_eq!(format_tick_with_step(-0.0, 1.0), "0");
        assert_eq!(format_tick_with_step(-1.0e-17, 0.1), "0.0");
    }
}
