// File: crates/barchart-core/src/axis.rs
// Summary: Bottom category axis element: placement, tick positions and labels.

use serde::{Deserialize, Serialize};

use crate::scale::BandScale;

pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Empty for a category the host left blank.
    pub label: String,
    /// Band centre in surface coordinates.
    pub x: f64,
}

/// Axis drawn under the plot, one tick per distinct category.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryAxis {
    /// Vertical offset of the axis line (the plot height).
    pub translate_y: f64,
    /// Horizontal extent of the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    pub tick_size_inner: f64,
    pub tick_size_outer: f64,
    pub tick_padding: f64,
}

impl Default for CategoryAxis {
    fn default() -> Self {
        Self {
            translate_y: 0.0,
            range: (0.0, 0.0),
            ticks: Vec::new(),
            tick_size_inner: TICK_SIZE,
            tick_size_outer: TICK_SIZE,
            tick_padding: TICK_PADDING,
        }
    }
}

impl CategoryAxis {
    /// Reposition to `translate_y` and rebuild ticks against `scale`.
    pub fn redraw(&mut self, scale: &BandScale<Option<String>>, translate_y: f64) {
        let half = scale.bandwidth() / 2.0;
        self.translate_y = translate_y;
        self.range = scale.range();
        self.ticks = scale
            .domain()
            .iter()
            .filter_map(|key| {
                let left = scale.position(key)?;
                Some(AxisTick { label: key.clone().unwrap_or_default(), x: left + half })
            })
            .collect();
    }

    /// Baseline offset of tick labels below the axis line.
    pub fn label_offset(&self) -> f64 {
        self.tick_size_inner.max(0.0) + self.tick_padding
    }
}
