// File: crates/barchart-core/src/types.rs
// Summary: Shared types and layout constants (viewport, margins, band padding).

use serde::{Deserialize, Serialize};

/// Space reserved under the plot for the category axis.
pub const AXIS_MARGIN_BOTTOM: f64 = 25.0;
/// Fraction of each band's step left as a gap between bars.
pub const BAND_PADDING: f64 = 0.1;
/// Tick count hint used when snapping the value scale to round numbers.
pub const NICE_TICK_COUNT: usize = 10;

/// Size of the container the host gives the visual.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width and height as whole pixels, negative or NaN sizes become 0.
    pub fn pixel_size(&self) -> (u32, u32) {
        (to_pixels(self.width), to_pixels(self.height))
    }
}

fn to_pixels(v: f64) -> u32 {
    if v.is_finite() && v > 0.0 {
        v.round().min(u32::MAX as f64) as u32
    } else {
        0
    }
}

/// Plot margins, in surface units.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margin {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Margin {
    pub const fn new(top: f64, bottom: f64, left: f64, right: f64) -> Self {
        Self { top, bottom, left, right }
    }

    /// Height left for bars once the margins are taken out, never negative.
    pub fn plot_height(&self, viewport: &Viewport) -> f64 {
        let h = viewport.height - self.top - self.bottom;
        if h.is_finite() && h > 0.0 { h } else { 0.0 }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(0.0, AXIS_MARGIN_BOTTOM, 0.0, 0.0)
    }
}
