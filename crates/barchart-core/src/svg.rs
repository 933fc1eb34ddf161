// File: crates/barchart-core/src/svg.rs
// Summary: Serializes a scene as an SVG document laid out like the host DOM (bar group + xAxis group).

use std::fmt::Write as _;

use crate::render::RenderOptions;
use crate::scene::Scene;
use crate::theme::css_hex;

impl Scene {
    /// SVG text for the scene: a `g` of `rect.bar` elements and a `g.xAxis`.
    pub fn to_svg(&self, opts: &RenderOptions) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_svg(&mut out, opts);
        out
    }

    fn write_svg(&self, out: &mut String, opts: &RenderOptions) -> std::fmt::Result {
        let vp = self.viewport;
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:{}">"#,
            num(vp.width),
            num(vp.height),
            css_hex(opts.theme.background)
        )?;

        writeln!(out, "  <g>")?;
        for bar in self.bars() {
            let r = bar.rect;
            writeln!(
                out,
                r#"    <rect class="bar" width="{}" height="{}" y="{}" x="{}" fill="{}"/>"#,
                num(r.width),
                num(r.height),
                num(r.y),
                num(r.x),
                bar.fill.css_name()
            )?;
        }
        writeln!(out, "  </g>")?;

        let axis = &self.axis;
        let stroke = css_hex(opts.theme.axis_line);
        let label = css_hex(opts.theme.axis_label);
        writeln!(
            out,
            r#"  <g class="xAxis" transform="translate(0, {})" fill="none" font-size="{}" font-family="sans-serif" text-anchor="middle">"#,
            num(axis.translate_y),
            num(opts.font_size as f64)
        )?;
        writeln!(
            out,
            r#"    <path class="domain" stroke="{}" d="M{},{}V0.5H{}V{}"/>"#,
            stroke,
            num(axis.range.0 + 0.5),
            num(axis.tick_size_outer),
            num(axis.range.1 + 0.5),
            num(axis.tick_size_outer)
        )?;
        for tick in &axis.ticks {
            writeln!(out, r#"    <g class="tick" opacity="1" transform="translate({},0)">"#, num(tick.x + 0.5))?;
            writeln!(out, r#"      <line stroke="{}" y2="{}"/>"#, stroke, num(axis.tick_size_inner))?;
            if opts.draw_labels {
                writeln!(
                    out,
                    r#"      <text fill="{}" y="{}" dy="0.71em">{}</text>"#,
                    label,
                    num(axis.label_offset()),
                    escape(&tick.label)
                )?;
            }
            writeln!(out, "    </g>")?;
        }
        writeln!(out, "  </g>")?;
        writeln!(out, "</svg>")
    }
}

/// Shortest decimal text for a coordinate; non-finite values print as 0.
fn num(v: f64) -> String {
    if v.is_finite() { format!("{}", v) } else { "0".to_owned() }
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\'' => s.push_str("&#39;"),
            _ => s.push(c),
        }
    }
    s
}
