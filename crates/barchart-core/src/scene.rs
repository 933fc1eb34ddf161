// File: crates/barchart-core/src/scene.rs
// Summary: Retained render state (surface size, axis, keyed bar shapes) and its per-update reconciliation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use skia_safe as skia;
use tracing::{debug, trace};

use crate::axis::CategoryAxis;
use crate::geometry::Rect;
use crate::model::{DataPoint, ViewModel};
use crate::reconcile::{self, BarKey};
use crate::scale::{BandScale, LinearScale};
use crate::types::{Margin, Viewport};

/// Bar colour, chosen by the sign of the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BarFill {
    /// Strictly positive values.
    Positive,
    /// Zero, negative and absent values.
    Negative,
}

impl BarFill {
    pub fn for_value(value: f64) -> Self {
        if value > 0.0 { BarFill::Positive } else { BarFill::Negative }
    }

    pub fn css_name(self) -> &'static str {
        match self {
            BarFill::Positive => "green",
            BarFill::Negative => "red",
        }
    }

    pub fn color(self) -> skia::Color {
        match self {
            BarFill::Positive => skia::Color::from_argb(255, 0, 128, 0),
            BarFill::Negative => skia::Color::from_argb(255, 255, 0, 0),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BarShape {
    pub key: BarKey,
    /// Axis text for the bar, empty when the category is absent.
    pub label: String,
    pub value: Option<f64>,
    pub rect: Rect,
    pub fill: BarFill,
}

/// Counts from one reconciliation pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateStats {
    pub entered: usize,
    pub updated: usize,
    pub exited: usize,
}

/// Everything on screen, kept between update cycles.
///
/// Equality includes bar order.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub viewport: Viewport,
    pub axis: CategoryAxis,
    bars: IndexMap<BarKey, BarShape>,
}

impl PartialEq for Scene {
    fn eq(&self, other: &Self) -> bool {
        self.viewport == other.viewport && self.axis == other.axis && self.bars.iter().eq(other.bars.iter())
    }
}

/// Scales shared by every bar of one pass.
struct Layout {
    value: LinearScale,
    category: BandScale<Option<String>>,
    /// Pixel offset of the zero line from the top of the surface.
    zero_line: f64,
}

impl Layout {
    fn new(model: &ViewModel, viewport: Viewport, margin: &Margin) -> Self {
        let plot_height = margin.plot_height(&viewport);
        let value = LinearScale::for_magnitudes(model.value_max, model.value_min, plot_height);
        let right = (viewport.width - margin.right).max(margin.left);
        let category = BandScale::for_categories(&model.points, margin.left, right);
        let zero_line = margin.top + value.apply(model.magnitude());
        Self { value, category, zero_line: if zero_line.is_finite() { zero_line } else { margin.top } }
    }

    fn rect_for(&self, point: &DataPoint) -> Rect {
        let v = point.value_or_zero();
        let height = self.value.apply(v.abs());
        let height = if height.is_finite() { height } else { 0.0 };
        let y = if v > 0.0 { self.zero_line - height } else { self.zero_line };
        let x = self.category.position(&point.category).unwrap_or(0.0);
        Rect::from_xywh(x, y, self.category.bandwidth(), height)
    }

    fn shape_for(&self, key: BarKey, point: &DataPoint) -> BarShape {
        BarShape {
            label: point.category.clone().unwrap_or_default(),
            key,
            value: point.value,
            rect: self.rect_for(point),
            fill: BarFill::for_value(point.value_or_zero()),
        }
    }
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bring the scene in line with `model` drawn into `viewport`.
    ///
    /// New points get a shape, surviving shapes have geometry and fill
    /// recomputed, and shapes whose key vanished are dropped. Shapes end up
    /// in point order.
    pub fn apply(&mut self, model: &ViewModel, viewport: Viewport, margin: &Margin) -> UpdateStats {
        self.viewport = viewport;
        let layout = Layout::new(model, viewport, margin);
        self.axis.redraw(&layout.category, margin.top + margin.plot_height(&viewport));

        let keys = reconcile::keys_for(&model.points);
        let diff = reconcile::diff(self.bars.keys(), &keys);
        if diff.is_noop_structurally() {
            trace!(bars = keys.len(), "bar set unchanged, refreshing geometry only");
        }
        for key in &diff.exit {
            self.bars.shift_remove(key);
        }

        let mut next: IndexMap<BarKey, BarShape> = IndexMap::with_capacity(keys.len());
        for (key, point) in keys.into_iter().zip(&model.points) {
            let shape = match self.bars.shift_remove(&key) {
                Some(mut existing) => {
                    existing.value = point.value;
                    existing.rect = layout.rect_for(point);
                    existing.fill = BarFill::for_value(point.value_or_zero());
                    existing
                }
                None => layout.shape_for(key.clone(), point),
            };
            trace!(?key, rect = ?shape.rect, "bar placed");
            next.insert(key, shape);
        }
        self.bars = next;

        let stats = UpdateStats { entered: diff.enter.len(), updated: diff.update.len(), exited: diff.exit.len() };
        debug!(
            entered = stats.entered,
            updated = stats.updated,
            exited = stats.exited,
            bandwidth = layout.category.bandwidth(),
            "scene reconciled"
        );
        stats
    }

    pub fn bars(&self) -> impl ExactSizeIterator<Item = &BarShape> {
        self.bars.values()
    }

    pub fn bar(&self, key: &BarKey) -> Option<&BarShape> {
        self.bars.get(key)
    }

    pub fn bar_count(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
