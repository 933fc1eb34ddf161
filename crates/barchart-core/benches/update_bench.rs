use barchart_core::{
    BarChartVisual, CategoricalBuilder, ColumnSource, DataView, DataViewSettings, RenderOptions, StandaloneHost,
    Viewport, VisualUpdateOptions,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn build_data_view(n: usize) -> DataView {
    let cats = (0..n).map(|i| format!("Category {i}")).collect::<Vec<_>>();
    let values = (0..n).map(|i| (i as f64 * 0.37).sin() * 1_000.0).collect::<Vec<_>>();
    CategoricalBuilder::new()
        .categories(ColumnSource::new("Category").with_role("category"), cats)
        .measure(ColumnSource::new("Measure").measure(), values)
        .build()
}

fn bench_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("visual_update");
    for &n in &[10usize, 500usize] {
        let options = VisualUpdateOptions::new(Viewport::new(1024.0, 640.0), build_data_view(n));
        group.bench_function(format!("steady_{n}"), |b| {
            let mut visual = BarChartVisual::new(StandaloneHost::default(), DataViewSettings);
            b.iter(|| black_box(visual.update(&options)));
        });
        group.bench_function(format!("fresh_{n}"), |b| {
            b.iter(|| {
                let mut visual = BarChartVisual::new(StandaloneHost::default(), DataViewSettings);
                black_box(visual.update(&options))
            });
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut visual = BarChartVisual::new(StandaloneHost::default(), DataViewSettings);
    visual.update(&VisualUpdateOptions::new(Viewport::new(800.0, 500.0), build_data_view(50)));
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    c.bench_function("render_png_bytes_50", |b| {
        b.iter(|| black_box(visual.scene().render_to_png_bytes(&opts)))
    });
}

criterion_group!(benches, bench_update, bench_render);
criterion_main!(benches);
