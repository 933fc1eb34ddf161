// File: crates/barchart-core/tests/common/mod.rs
// Purpose: Shared data-view fixtures for integration tests.

#![allow(dead_code)]

use barchart_core::{CategoricalBuilder, ColumnSource, DataView, StandaloneHost, DataViewSettings, BarChartVisual};

pub const CATEGORIES: [&str; 7] = [
    "Infrastructure",
    "Services",
    "Distribution",
    "Manufacturing",
    "Office & Administrative",
    "BU",
    "R&D",
];

pub const MEASURES: [f64; 7] = [
    23536681.479000024,
    572443.5630000085,
    -561203.5199999921,
    -1061897.1090000793,
    -2429005.238999985,
    -2846388.948000014,
    -2970340.0979999974,
];

pub fn category_source() -> ColumnSource {
    ColumnSource::new("Business Area")
        .with_query_name("Business Area.Business Area")
        .with_role("category")
}

pub fn measure_source() -> ColumnSource {
    ColumnSource::new("Var Plan").with_query_name("Fact.Var Plan").with_role("measure").measure()
}

/// The seven business areas with host bounds computed from the measures.
pub fn business_areas() -> DataView {
    CategoricalBuilder::new()
        .categories(category_source(), CATEGORIES)
        .measure(measure_source(), MEASURES)
        .build()
}

pub fn data_view(categories: &[&str], values: &[f64]) -> DataView {
    CategoricalBuilder::new()
        .categories(category_source(), categories.iter().copied())
        .measure(measure_source(), values.iter().copied())
        .build()
}

pub fn visual() -> BarChartVisual<StandaloneHost, DataViewSettings> {
    BarChartVisual::new(StandaloneHost::new("test-visual"), DataViewSettings)
}
