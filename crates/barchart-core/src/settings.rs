// File: crates/barchart-core/src/settings.rs
// Summary: Formatting settings persisted by the host, parsed from data-view objects and enumerated for the property pane.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use crate::dataview::DataView;

/// Settings of the `dataPoint` formatting card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataPointSettings {
    #[serde(deserialize_with = "color_text")]
    pub default_color: String,
    pub show_all_data_points: bool,
    #[serde(deserialize_with = "color_text")]
    pub fill: String,
    pub fill_rule: String,
    pub font_size: f64,
}

impl Default for DataPointSettings {
    fn default() -> Self {
        Self {
            default_color: String::new(),
            show_all_data_points: true,
            fill: String::new(),
            fill_rule: String::new(),
            font_size: 12.0,
        }
    }
}

impl DataPointSettings {
    /// Read each property on its own over the defaults.
    fn from_object(object: &Map<String, Value>) -> Self {
        let mut dp = Self::default();
        read_property(object, "defaultColor", &mut dp.default_color, color_from_value);
        read_property(object, "showAllDataPoints", &mut dp.show_all_data_points, serde_json::from_value);
        read_property(object, "fill", &mut dp.fill, color_from_value);
        read_property(object, "fillRule", &mut dp.fill_rule, serde_json::from_value);
        read_property(object, "fontSize", &mut dp.font_size, serde_json::from_value);
        dp
    }
}

/// Colours arrive either as plain text or in the host's fill shape
/// `{"solid": {"color": "#rrggbb"}}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorValue {
    Text(String),
    Solid { solid: SolidColor },
}

#[derive(Deserialize)]
struct SolidColor {
    color: String,
}

impl ColorValue {
    fn into_text(self) -> String {
        match self {
            ColorValue::Text(text) => text,
            ColorValue::Solid { solid } => solid.color,
        }
    }
}

fn color_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    ColorValue::deserialize(deserializer).map(ColorValue::into_text)
}

fn color_from_value(value: Value) -> serde_json::Result<String> {
    serde_json::from_value::<ColorValue>(value).map(ColorValue::into_text)
}

fn read_property<T>(
    object: &Map<String, Value>,
    name: &str,
    slot: &mut T,
    parse: impl FnOnce(Value) -> serde_json::Result<T>,
) {
    let Some(raw) = object.get(name) else { return };
    match parse(raw.clone()) {
        Ok(value) => *slot = value,
        Err(err) => warn!(error = %err, object = "dataPoint", property = name, "ignoring malformed setting"),
    }
}

/// All formatting objects the visual exposes, keyed by host object name.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VisualSettings {
    pub data_point: DataPointSettings,
}

/// Which object the property pane is asking about.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumerateOptions {
    pub object_name: String,
}

impl EnumerateOptions {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self { object_name: object_name.into() }
    }
}

/// One card instance handed back to the property pane.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualObjectInstance {
    pub object_name: String,
    pub selector: Option<serde_json::Value>,
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl VisualSettings {
    /// Read settings from the data view's metadata objects.
    ///
    /// Objects and properties the host did not send keep their defaults, as
    /// does any single property of the wrong shape (logged at warn level).
    pub fn parse(data_view: &DataView) -> Self {
        let Some(objects) = data_view.metadata.as_ref().and_then(|m| m.objects.as_ref()) else {
            return Self::default();
        };
        let mut settings = Self::default();
        match objects.get("dataPoint") {
            Some(Value::Object(obj)) => settings.data_point = DataPointSettings::from_object(obj),
            Some(other) => warn!(found = %other, object = "dataPoint", "settings object is not a map, using defaults"),
            None => {}
        }
        settings
    }

    /// Project the named object into property-pane instances.
    ///
    /// Unknown object names yield no instances.
    pub fn enumerate_object_instances(&self, options: &EnumerateOptions) -> Vec<VisualObjectInstance> {
        let value = match serde_json::to_value(self) {
            Ok(v) => v,
            Err(err) => {
                warn!(error = %err, "settings could not be serialized");
                return Vec::new();
            }
        };
        match value.get(&options.object_name) {
            Some(serde_json::Value::Object(properties)) => vec![VisualObjectInstance {
                object_name: options.object_name.clone(),
                selector: None,
                properties: properties.clone(),
            }],
            _ => Vec::new(),
        }
    }
}

/// Source of formatting settings for an update cycle.
pub trait SettingsStore {
    /// Settings for this data view, `None` when there is nothing to read.
    fn load(&self, data_view: Option<&DataView>) -> Option<VisualSettings>;
}

/// Parses settings from the data view metadata, the host's own persistence.
#[derive(Clone, Copy, Debug, Default)]
pub struct DataViewSettings;

impl SettingsStore for DataViewSettings {
    fn load(&self, data_view: Option<&DataView>) -> Option<VisualSettings> {
        data_view.map(VisualSettings::parse)
    }
}

/// Always hands out the same settings, for hosts that keep formatting elsewhere.
#[derive(Clone, Debug, Default)]
pub struct FixedSettings(pub VisualSettings);

impl SettingsStore for FixedSettings {
    fn load(&self, _data_view: Option<&DataView>) -> Option<VisualSettings> {
        Some(self.0.clone())
    }
}
