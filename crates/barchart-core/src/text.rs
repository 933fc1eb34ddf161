// File: crates/barchart-core/src/text.rs
// Summary: Axis label shaping with Skia textlayout, centred under each tick.

use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use skia_safe as skia;

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(TextAlign::Left);
        let mut style = TextStyle::new();
        style.set_font_size(size.max(1.0));
        style.set_color(color);
        style.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);

        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&style);
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` horizontally centred on `cx` with its top edge at `top`.
    pub fn draw_centered(&self, canvas: &skia::Canvas, text: &str, cx: f32, top: f32, size: f32, color: skia::Color) {
        if text.is_empty() {
            return;
        }
        let mut p = self.layout(text, size, color);
        let w = p.longest_line();
        p.paint(canvas, (cx - w * 0.5, top));
    }
}
