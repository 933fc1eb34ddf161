// File: crates/barchart-core/src/model.rs
// Summary: View-model produced by the transform: (category, value) points plus host bounds.

use serde::{Deserialize, Serialize};

/// One bar's worth of data.
///
/// Either side is `None` only in the tail of a data view whose category and
/// measure columns have different lengths.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub category: Option<String>,
    pub value: Option<f64>,
}

impl DataPoint {
    pub fn new(category: impl Into<String>, value: f64) -> Self {
        Self { category: Some(category.into()), value: Some(value) }
    }

    /// Value used for geometry; an absent value draws like zero.
    pub fn value_or_zero(&self) -> f64 {
        self.value.filter(|v| v.is_finite()).unwrap_or(0.0)
    }

    pub fn is_positive(&self) -> bool {
        self.value_or_zero() > 0.0
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewModel {
    pub points: Vec<DataPoint>,
    /// Host-aggregated bounds; not recomputed from `points`.
    pub value_max: f64,
    pub value_min: f64,
}

impl ViewModel {
    /// The model every malformed input degrades to.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Symmetric magnitude bound used as the value scale's upper domain.
    pub fn magnitude(&self) -> f64 {
        self.value_max.max(-self.value_min)
    }
}
