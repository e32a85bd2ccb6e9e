// Copyright 2025 the tickfit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::Size;
use tickfit_text::{LabelFont, LabelMeasurer};

use crate::tick::Tick;
use crate::value::AxisValue;

#[derive(Clone, Debug)]
struct CachedLabel {
    value_bits: u64,
    text: String,
    size: Size,
}

/// Label sizes from the previous measuring pass, keyed by tick index.
///
/// An entry is reused only when the tick at that index has the same value
/// and label text; anything else is measured again.
#[derive(Clone, Debug, Default)]
pub(crate) struct LabelSizeCache {
    entries: HashMap<usize, CachedLabel>,
}

impl LabelSizeCache {
    /// Measures every tick label, then forgets indices beyond `ticks.len()`.
    pub(crate) fn measure<T: AxisValue>(
        &mut self,
        ticks: &[Tick<T>],
        measurer: &dyn LabelMeasurer,
        font: &LabelFont,
    ) -> Vec<Size> {
        let sizes = ticks
            .iter()
            .map(|tick| {
                let value_bits = tick.value.to_axis_number().to_bits();
                let text = tick.label_text();
                if let Some(hit) = self.entries.get(&tick.index)
                    && hit.value_bits == value_bits
                    && hit.text == text
                {
                    return hit.size;
                }
                let size = measurer.measure(text, font);
                self.entries.insert(
                    tick.index,
                    CachedLabel {
                        value_bits,
                        text: String::from(text),
                        size,
                    },
                );
                size
            })
            .collect();
        self.entries.retain(|index, _| *index < ticks.len());
        sizes
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
