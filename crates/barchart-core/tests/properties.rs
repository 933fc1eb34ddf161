// File: crates/barchart-core/tests/properties.rs
// Purpose: Property tests over arbitrary categorical inputs: point counts, fills, reconciliation.

mod common;

use barchart_core::{visual_transform, BarFill, StandaloneHost, Viewport, VisualUpdateOptions};
use proptest::prelude::*;

fn labels(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("cat-{}", i % 11)).collect()
}

fn data_view(cats: &[String], values: &[f64]) -> barchart_core::DataView {
    let cats = cats.iter().map(String::as_str).collect::<Vec<_>>();
    common::data_view(&cats, values)
}

proptest! {
    #[test]
    fn point_count_is_longer_column(
        n_cats in 0usize..40,
        values in prop::collection::vec(-1.0e9f64..1.0e9, 0..40)
    ) {
        let cats = labels(n_cats);
        let options = VisualUpdateOptions::new(Viewport::new(300.0, 200.0), data_view(&cats, &values));
        let vm = visual_transform(&options, &StandaloneHost::default());
        prop_assert_eq!(vm.points.len(), n_cats.max(values.len()));
    }

    #[test]
    fn fill_follows_sign_and_count_follows_points(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..30),
        width in 50.0f64..1200.0,
        height in 30.0f64..900.0
    ) {
        let cats = labels(values.len());
        let mut visual = common::visual();
        visual.update(&VisualUpdateOptions::new(Viewport::new(width, height), data_view(&cats, &values)));

        let scene = visual.scene();
        prop_assert_eq!(scene.bar_count(), values.len());
        for (bar, v) in scene.bars().zip(&values) {
            let want = if *v > 0.0 { BarFill::Positive } else { BarFill::Negative };
            prop_assert_eq!(bar.fill, want);
            prop_assert!(bar.rect.is_finite());
            prop_assert!(bar.rect.height >= 0.0);
        }
    }

    #[test]
    fn successive_updates_track_latest_points(
        first in prop::collection::vec(-100.0f64..100.0, 0..25),
        second in prop::collection::vec(-100.0f64..100.0, 0..25)
    ) {
        let mut visual = common::visual();
        let vp = Viewport::new(640.0, 480.0);
        visual.update(&VisualUpdateOptions::new(vp, data_view(&labels(first.len()), &first)));
        let opts = VisualUpdateOptions::new(vp, data_view(&labels(second.len()), &second));
        let stats = visual.update(&opts);
        prop_assert_eq!(visual.scene().bar_count(), second.len());
        prop_assert_eq!(stats.entered + stats.updated, second.len());

        let snapshot = visual.scene().clone();
        let again = visual.update(&opts);
        prop_assert_eq!(again.entered + again.exited, 0);
        prop_assert_eq!(visual.scene(), &snapshot);
        prop_assert_eq!(visual.scene().bars().collect::<Vec<_>>(), snapshot.bars().collect::<Vec<_>>());
    }
}
