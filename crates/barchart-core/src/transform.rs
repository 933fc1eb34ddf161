// File: crates/barchart-core/src/transform.rs
// Summary: Maps the host's data view into the bar chart view-model.

use tracing::debug;

use crate::dataview::{CategoryColumn, DataView, ValueColumn, VisualUpdateOptions};
use crate::model::{DataPoint, ViewModel};
use crate::visual::HostServices;

/// Build the view-model for one update cycle.
///
/// Missing pieces of the data view are not errors: the result is simply the
/// empty view-model, which renders as a chart without bars.
pub fn visual_transform(options: &VisualUpdateOptions, host: &dyn HostServices) -> ViewModel {
    let Some(data_view) = options.data_view() else {
        debug!(visual = host.visual_id(), "no data view supplied");
        return ViewModel::empty();
    };
    match usable_columns(data_view) {
        Ok((category, measure)) => view_model_from_columns(category, measure),
        Err(missing) => {
            debug!(visual = host.visual_id(), missing, "data view incomplete, rendering empty chart");
            ViewModel::empty()
        }
    }
}

/// First category column and first measure column, or the name of the piece
/// that is absent.
fn usable_columns(data_view: &DataView) -> Result<(&CategoryColumn, &ValueColumn), &'static str> {
    let categorical = data_view.categorical.as_ref().ok_or("categorical")?;
    let category = categorical
        .categories
        .as_deref()
        .and_then(<[CategoryColumn]>::first)
        .ok_or("categories")?;
    if category.source.is_none() {
        return Err("category source");
    }
    let measure = categorical
        .values
        .as_deref()
        .and_then(<[ValueColumn]>::first)
        .ok_or("values")?;
    Ok((category, measure))
}

fn view_model_from_columns(category: &CategoryColumn, measure: &ValueColumn) -> ViewModel {
    // Pair up to the longer column; the shorter side is absent in the tail.
    let len = category.values.len().max(measure.values.len());
    let points = (0..len)
        .map(|i| DataPoint {
            category: category.values.get(i).and_then(|v| v.as_label()),
            value: measure.values.get(i).and_then(|v| v.as_number()),
        })
        .collect::<Vec<_>>();

    if category.values.len() != measure.values.len() {
        debug!(
            categories = category.values.len(),
            values = measure.values.len(),
            "category and measure columns differ in length"
        );
    }

    ViewModel {
        points,
        value_max: measure.max_local.unwrap_or(0.0),
        value_min: measure.min_local.unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataview::{Categorical, ColumnSource, PrimitiveValue};
    use crate::types::Viewport;
    use crate::visual::StandaloneHost;

    fn options(data_view: DataView) -> VisualUpdateOptions {
        VisualUpdateOptions::new(Viewport::new(100.0, 100.0), data_view)
    }

    #[test]
    fn labels_cover_numbers_and_booleans() {
        let dv = DataView {
            metadata: None,
            categorical: Some(Categorical {
                categories: Some(vec![CategoryColumn {
                    source: Some(ColumnSource::new("Year")),
                    values: vec![
                        PrimitiveValue::Number(2020.0),
                        PrimitiveValue::Bool(true),
                        PrimitiveValue::Null,
                    ],
                }]),
                values: Some(vec![ValueColumn {
                    values: vec![
                        PrimitiveValue::Number(1.0),
                        PrimitiveValue::Text("n/a".to_owned()),
                        PrimitiveValue::Number(3.0),
                    ],
                    ..ValueColumn::default()
                }]),
            }),
        };
        let vm = visual_transform(&options(dv), &StandaloneHost::default());
        let labels = vm.points.iter().map(|p| p.category.clone()).collect::<Vec<_>>();
        assert_eq!(labels, vec![Some("2020".to_owned()), Some("true".to_owned()), None]);
        assert_eq!(vm.points[1].value, None);
        assert_eq!(vm.value_max, 0.0);
        assert_eq!(vm.value_min, 0.0);
    }

    #[test]
    fn empty_column_list_is_treated_as_missing() {
        let dv = DataView {
            metadata: None,
            categorical: Some(Categorical { categories: Some(Vec::new()), values: Some(Vec::new()) }),
        };
        assert_eq!(visual_transform(&options(dv), &StandaloneHost::default()), ViewModel::empty());
    }
}
