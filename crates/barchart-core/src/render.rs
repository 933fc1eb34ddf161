// File: crates/barchart-core/src/render.rs
// Summary: Headless Skia CPU raster pipeline for a scene: PNG bytes/files and RGBA8 buffers.

use skia_safe as skia;
use tracing::debug;

use crate::axis::CategoryAxis;
use crate::error::{ChartError, ChartResult};
use crate::scene::Scene;
use crate::settings::VisualSettings;
use crate::text::TextShaper;
use crate::theme::Theme;

/// Axis label size used when no settings say otherwise.
pub const DEFAULT_FONT_SIZE: f32 = 10.0;

pub struct RenderOptions {
    pub theme: Theme,
    /// Skip axis labels (keeps snapshots free of font differences).
    pub draw_labels: bool,
    pub font_size: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::light(), draw_labels: true, font_size: DEFAULT_FONT_SIZE }
    }
}

impl RenderOptions {
    /// Defaults with the label size taken from the formatting settings.
    pub fn from_settings(settings: &VisualSettings) -> Self {
        let size = settings.data_point.font_size as f32;
        Self { font_size: if size.is_finite() && size > 0.0 { size } else { DEFAULT_FONT_SIZE }, ..Self::default() }
    }
}

impl Scene {
    /// Pixel dimensions as Skia wants them; zero or beyond `i32` is rejected.
    fn surface_dims(&self) -> ChartResult<(i32, i32)> {
        let (width, height) = self.viewport.pixel_size();
        match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok((w, h)),
            _ => Err(ChartError::InvalidViewport { width, height }),
        }
    }

    fn raster_surface(&self) -> ChartResult<skia::Surface> {
        let dims = self.surface_dims()?;
        skia::surfaces::raster_n32_premul(dims).ok_or(ChartError::SurfaceCreation)
    }

    fn paint_into(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        canvas.clear(opts.theme.background);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(false);
        fill.set_style(skia::paint::Style::Fill);
        for bar in self.bars() {
            if bar.rect.height <= 0.0 || !bar.rect.is_finite() {
                continue;
            }
            fill.set_color(bar.fill.color());
            canvas.draw_rect(bar.rect.to_skia(), &fill);
        }

        draw_axis(canvas, &self.axis, opts);
    }

    /// Render to PNG bytes using a CPU raster surface sized to the viewport.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> ChartResult<Vec<u8>> {
        let mut surface = self.raster_surface()?;
        self.paint_into(surface.canvas(), opts);

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(ChartError::Encode)?;
        debug!(bytes = data.len(), bars = self.bar_count(), "scene encoded as PNG");
        Ok(data.as_bytes().to_vec())
    }

    /// Render the scene to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> ChartResult<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    /// Render to an unpremultiplied RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> ChartResult<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.raster_surface()?;
        self.paint_into(surface.canvas(), opts);

        let (w, h) = self.surface_dims()?;
        let info = skia::ImageInfo::new(
            (w, h),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = w as usize * 4;
        let mut pixels = vec![0u8; row_bytes * h as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::ReadPixels);
        }
        Ok((pixels, w as u32, h as u32, row_bytes))
    }
}

fn draw_axis(canvas: &skia::Canvas, axis: &CategoryAxis, opts: &RenderOptions) {
    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(1.0);
    stroke.set_color(opts.theme.axis_line);

    let y0 = axis.translate_y as f32 + 0.5;
    let (r0, r1) = (axis.range.0 as f32 + 0.5, axis.range.1 as f32 + 0.5);
    let outer = axis.tick_size_outer as f32;

    // Domain line with outer ticks at both ends.
    canvas.draw_line((r0, y0 + outer), (r0, y0), &stroke);
    canvas.draw_line((r0, y0), (r1, y0), &stroke);
    canvas.draw_line((r1, y0), (r1, y0 + outer), &stroke);

    let inner = axis.tick_size_inner as f32;
    for tick in &axis.ticks {
        let x = tick.x as f32 + 0.5;
        canvas.draw_line((x, y0), (x, y0 + inner), &stroke);
    }

    if !opts.draw_labels || axis.ticks.is_empty() {
        return;
    }
    let shaper = TextShaper::new();
    let top = axis.translate_y as f32 + axis.label_offset() as f32;
    for tick in &axis.ticks {
        shaper.draw_centered(canvas, &tick.label, tick.x as f32 + 0.5, top, opts.font_size, opts.theme.axis_label);
    }
}
