// File: crates/barchart-core/src/visual.rs
// Summary: Visual lifecycle the host drives: construct once, update per cycle, enumerate settings.

use tracing::{debug, info_span};

use crate::dataview::VisualUpdateOptions;
use crate::model::ViewModel;
use crate::scene::{Scene, UpdateStats};
use crate::settings::{EnumerateOptions, SettingsStore, VisualObjectInstance, VisualSettings};
use crate::transform::visual_transform;
use crate::types::Margin;

/// Host capabilities the visual is allowed to see.
pub trait HostServices {
    /// Identifier used to tag diagnostics from this visual instance.
    fn visual_id(&self) -> &str;
}

/// Host stand-in for embedding the visual outside the BI application.
#[derive(Clone, Debug)]
pub struct StandaloneHost {
    id: String,
}

impl StandaloneHost {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl Default for StandaloneHost {
    fn default() -> Self {
        Self::new("bar-chart")
    }
}

impl HostServices for StandaloneHost {
    fn visual_id(&self) -> &str {
        &self.id
    }
}

/// Diverging bar chart visual.
///
/// Owns the retained scene; every [`update`](Self::update) reconciles it
/// against the latest data view and viewport.
pub struct BarChartVisual<H: HostServices, S: SettingsStore> {
    host: H,
    settings_store: S,
    settings: Option<VisualSettings>,
    margin: Margin,
    scene: Scene,
    last_model: ViewModel,
}

impl<H: HostServices, S: SettingsStore> BarChartVisual<H, S> {
    pub fn new(host: H, settings_store: S) -> Self {
        Self {
            host,
            settings_store,
            settings: None,
            margin: Margin::default(),
            scene: Scene::new(),
            last_model: ViewModel::empty(),
        }
    }

    /// Run one host update cycle: transform, refresh settings, reconcile.
    pub fn update(&mut self, options: &VisualUpdateOptions) -> UpdateStats {
        let span = info_span!("update", visual = self.host.visual_id());
        let _guard = span.enter();

        let model = visual_transform(options, &self.host);
        if let Some(settings) = self.settings_store.load(options.data_view()) {
            self.settings = Some(settings);
        }
        debug!(
            points = model.points.len(),
            value_max = model.value_max,
            value_min = model.value_min,
            width = options.viewport.width,
            height = options.viewport.height,
            "view model ready"
        );
        let stats = self.scene.apply(&model, options.viewport, &self.margin);
        self.last_model = model;
        stats
    }

    /// Property-pane instances for `options.object_name`, from the last
    /// parsed settings or the defaults before any update.
    pub fn enumerate_object_instances(&self, options: &EnumerateOptions) -> Vec<VisualObjectInstance> {
        match &self.settings {
            Some(settings) => settings.enumerate_object_instances(options),
            None => VisualSettings::default().enumerate_object_instances(options),
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn settings(&self) -> Option<&VisualSettings> {
        self.settings.as_ref()
    }

    /// View-model used by the most recent update.
    pub fn view_model(&self) -> &ViewModel {
        &self.last_model
    }

    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = margin;
        self
    }
}
