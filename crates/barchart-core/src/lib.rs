// File: crates/barchart-core/src/lib.rs
// Summary: Core library entry point; exports the diverging bar chart visual and its building blocks.

pub mod axis;
pub mod dataview;
pub mod error;
pub mod geometry;
pub mod model;
pub mod reconcile;
pub mod render;
pub mod scale;
pub mod scene;
pub mod settings;
pub mod svg;
pub mod telemetry;
pub mod text;
pub mod theme;
pub mod transform;
pub mod types;
pub mod visual;

pub use axis::{AxisTick, CategoryAxis};
pub use dataview::{CategoricalBuilder, ColumnSource, DataView, PrimitiveValue, VisualUpdateOptions};
pub use error::{ChartError, ChartResult};
pub use model::{DataPoint, ViewModel};
pub use reconcile::{BarKey, KeyedDiff};
pub use render::RenderOptions;
pub use scene::{BarFill, BarShape, Scene, UpdateStats};
pub use settings::{DataViewSettings, EnumerateOptions, SettingsStore, VisualObjectInstance, VisualSettings};
pub use theme::Theme;
pub use transform::visual_transform;
pub use types::{Margin, Viewport};
pub use visual::{BarChartVisual, HostServices, StandaloneHost};
