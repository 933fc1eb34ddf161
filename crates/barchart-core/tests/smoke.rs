// File: crates/barchart-core/tests/smoke.rs
// Purpose: End-to-end render smoke tests: PNG file/bytes, RGBA buffer and SVG document.

mod common;

use barchart_core::{BarFill, ChartError, RenderOptions, Scene, Viewport, VisualUpdateOptions};

#[test]
fn render_smoke_png() {
    let mut visual = common::visual();
    visual.update(&VisualUpdateOptions::new(Viewport::new(500.0, 500.0), common::business_areas()));

    let opts = RenderOptions::default();
    let out = std::path::PathBuf::from("target/test_out/business_areas.png");
    visual.scene().render_to_png(&opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let bytes = visual.scene().render_to_png_bytes(&opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_chart_still_draws_sized_surface() {
    let mut visual = common::visual();
    visual.update(&VisualUpdateOptions::empty(Viewport::new(320.0, 200.0)));

    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, w, h, stride) = visual.scene().render_to_rgba8(&opts).expect("rgba render");
    assert_eq!((w, h), (320, 200));
    assert_eq!(px.len(), stride * h as usize);
    // white background, opaque
    assert_eq!(&px[0..4], &[255, 255, 255, 255]);

    let png = visual.scene().render_to_png_bytes(&opts).expect("empty chart encodes as PNG");
    assert!(png.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn bar_pixels_take_their_fill_colour() {
    let mut visual = common::visual();
    visual.update(&VisualUpdateOptions::new(
        Viewport::new(200.0, 225.0),
        common::data_view(&["up", "down"], &[10.0, -10.0]),
    ));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    let (px, _w, _h, stride) = visual.scene().render_to_rgba8(&opts).expect("rgba render");

    let sample = |fill: BarFill| {
        let bar = visual.scene().bars().find(|b| b.fill == fill).expect("bar with fill");
        let cx = (bar.rect.x + bar.rect.width / 2.0) as usize;
        let cy = (bar.rect.y + bar.rect.height / 2.0) as usize;
        let i = cy * stride + cx * 4;
        [px[i], px[i + 1], px[i + 2]]
    };
    assert_eq!(sample(BarFill::Positive), [0, 128, 0]);
    assert_eq!(sample(BarFill::Negative), [255, 0, 0]);
}

#[test]
fn zero_sized_scene_is_rejected() {
    let scene = Scene::new();
    let err = scene.render_to_png_bytes(&RenderOptions::default()).expect_err("no surface for 0x0");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 0 }));
}

#[test]
fn svg_mirrors_bar_and_axis_groups() {
    let mut visual = common::visual();
    visual.update(&VisualUpdateOptions::new(Viewport::new(500.0, 500.0), common::business_areas()));
    let svg = visual.scene().to_svg(&RenderOptions::default());

    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"width="500" height="500""#));
    assert_eq!(svg.matches(r#"class="bar""#).count(), 7);
    assert_eq!(svg.matches(r#"fill="green""#).count(), 1);
    assert_eq!(svg.matches(r#"fill="red""#).count(), 6);
    assert!(svg.contains(r#"class="xAxis" transform="translate(0, 475)""#));
    assert!(svg.contains("R&amp;D"));
    assert_eq!(svg.matches(r#"class="tick""#).count(), 7);
}
