// File: crates/barchart-core/src/geometry.rs
// Summary: Lightweight rectangle type for bar geometry and its Skia conversion.

use serde::{Deserialize, Serialize};
use skia_safe as skia;

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn from_xywh(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn bottom(&self) -> f64 { self.y + self.height }
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_xywh(self.x as f32, self.y as f32, self.width as f32, self.height as f32)
    }
}
