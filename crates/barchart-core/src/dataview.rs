// File: crates/barchart-core/src/dataview.rs
// Summary: Host data-view snapshot model (categorical tables, column sources, metadata objects).
// Notes:
// - Every level is optional because hosts routinely omit pieces mid-edit;
//   the transform decides what counts as usable.
// - Field names follow the host's camelCase JSON so snapshots deserialize as-is.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::types::Viewport;

/// Arguments of one host update cycle.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualUpdateOptions {
    pub viewport: Viewport,
    #[serde(default)]
    pub data_views: Vec<DataView>,
}

impl VisualUpdateOptions {
    pub fn new(viewport: Viewport, data_view: DataView) -> Self {
        Self { viewport, data_views: vec![data_view] }
    }

    /// Options with a viewport and no data at all.
    pub fn empty(viewport: Viewport) -> Self {
        Self { viewport, data_views: Vec::new() }
    }

    pub fn data_view(&self) -> Option<&DataView> {
        self.data_views.first()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<DataViewMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categorical: Option<Categorical>,
}

impl DataView {
    /// Parse a host snapshot from JSON text.
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Formatting objects persisted by the host, keyed by object name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataViewMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub objects: Option<serde_json::Map<String, serde_json::Value>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Categorical {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryColumn>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<ValueColumn>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ColumnSource>,
    #[serde(default)]
    pub values: Vec<PrimitiveValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueColumn {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<ColumnSource>,
    #[serde(default)]
    pub values: Vec<PrimitiveValue>,
    /// Host-aggregated bounds over the column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_local: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_local: Option<f64>,
}

/// Describes where a column comes from in the host's model.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSource {
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_name: Option<String>,
    #[serde(default)]
    pub is_measure: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub roles: BTreeMap<String, bool>,
}

impl ColumnSource {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self { display_name: display_name.into(), ..Self::default() }
    }

    pub fn with_query_name(mut self, query_name: impl Into<String>) -> Self {
        self.query_name = Some(query_name.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.insert(role.into(), true);
        self
    }

    pub fn measure(mut self) -> Self {
        self.is_measure = true;
        self
    }
}

/// A single cell as the host hands it over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveValue {
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl PrimitiveValue {
    /// Display label for a category cell; `None` for null.
    pub fn as_label(&self) -> Option<String> {
        match self {
            PrimitiveValue::Null => None,
            PrimitiveValue::Bool(b) => Some(b.to_string()),
            PrimitiveValue::Number(n) => Some(n.to_string()),
            PrimitiveValue::Text(s) => Some(s.clone()),
        }
    }

    /// Numeric reading of a measure cell; only numbers qualify.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PrimitiveValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<f64> for PrimitiveValue {
    fn from(v: f64) -> Self {
        PrimitiveValue::Number(v)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(v: &str) -> Self {
        PrimitiveValue::Text(v.to_owned())
    }
}

impl From<String> for PrimitiveValue {
    fn from(v: String) -> Self {
        PrimitiveValue::Text(v)
    }
}

impl<T: Into<PrimitiveValue>> From<Option<T>> for PrimitiveValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(PrimitiveValue::Null, Into::into)
    }
}

/// Assembles a single-category, single-measure data view.
///
/// Bounds default to what the host reports for a measure: the largest value
/// or 0, and the smallest value or 0.
#[derive(Clone, Debug, Default)]
pub struct CategoricalBuilder {
    category_source: Option<ColumnSource>,
    categories: Vec<PrimitiveValue>,
    value_source: Option<ColumnSource>,
    values: Vec<PrimitiveValue>,
    bounds: Option<(f64, f64)>,
    objects: Option<serde_json::Map<String, serde_json::Value>>,
}

impl CategoricalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn categories<I, V>(mut self, source: ColumnSource, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PrimitiveValue>,
    {
        self.category_source = Some(source);
        self.categories = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn measure<I, V>(mut self, source: ColumnSource, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<PrimitiveValue>,
    {
        self.value_source = Some(source);
        self.values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Override the host-aggregated `(max, min)` bounds.
    pub fn bounds(mut self, max: f64, min: f64) -> Self {
        self.bounds = Some((max, min));
        self
    }

    pub fn objects(mut self, objects: serde_json::Map<String, serde_json::Value>) -> Self {
        self.objects = Some(objects);
        self
    }

    pub fn build(self) -> DataView {
        let (max_local, min_local) = self.bounds.unwrap_or_else(|| {
            self.values.iter().filter_map(PrimitiveValue::as_number).fold(
                (0.0f64, 0.0f64),
                |(hi, lo), v| (hi.max(v), lo.min(v)),
            )
        });
        DataView {
            metadata: self.objects.map(|objects| DataViewMetadata { objects: Some(objects) }),
            categorical: Some(Categorical {
                categories: Some(vec![CategoryColumn {
                    source: self.category_source,
                    values: self.categories,
                }]),
                values: Some(vec![ValueColumn {
                    source: self.value_source,
                    values: self.values,
                    max_local: Some(max_local),
                    min_local: Some(min_local),
                }]),
            }),
        }
    }
}
