// File: crates/demo/src/main.rs
// Summary: Standalone host: loads a category/measure CSV or data-view JSON, runs an update cycle, writes PNG and SVG.

use anyhow::{bail, Context, Result};
use barchart_core::dataview::PrimitiveValue;
use barchart_core::telemetry::init_default_tracing;
use barchart_core::{
    theme, BarChartVisual, CategoricalBuilder, ColumnSource, DataView, DataViewSettings, RenderOptions,
    StandaloneHost, Viewport, VisualUpdateOptions,
};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const USAGE: &str = "usage: barchart-demo [INPUT.csv|INPUT.json] [--width W] [--height H] [--out DIR] [--theme NAME]";

struct DemoArgs {
    input: Option<PathBuf>,
    width: f64,
    height: f64,
    out_dir: PathBuf,
    theme: String,
}

fn main() -> Result<()> {
    let _ = init_default_tracing();
    let args = parse_args(std::env::args().skip(1))?;

    let (data_view, stem) = match &args.input {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(input = %path.display(), "using input file");
            if used_alt {
                info!("extension swapped between .csv/.cvs");
            }
            let dv = load_data_view(&path).with_context(|| format!("failed to load '{}'", path.display()))?;
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("chart").to_owned();
            (dv, stem)
        }
        None => {
            info!("no input given, rendering built-in business-area sample");
            (sample_data_view(), "business_areas".to_owned())
        }
    };

    let mut visual = BarChartVisual::new(StandaloneHost::new(stem.clone()), DataViewSettings);
    let options = VisualUpdateOptions::new(Viewport::new(args.width, args.height), data_view);
    let stats = visual.update(&options);
    info!(
        bars = visual.scene().bar_count(),
        entered = stats.entered,
        updated = stats.updated,
        exited = stats.exited,
        value_max = visual.view_model().value_max,
        value_min = visual.view_model().value_min,
        "update cycle finished"
    );
    if visual.scene().is_empty() {
        warn!("data view had no usable category/measure columns; chart is empty");
    }

    let mut opts = visual.settings().map(RenderOptions::from_settings).unwrap_or_default();
    opts.theme = theme::find(&args.theme);

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating output dir {}", args.out_dir.display()))?;
    let out_png = args.out_dir.join(format!("{stem}.png"));
    visual.scene().render_to_png(&opts, &out_png).with_context(|| format!("writing {}", out_png.display()))?;
    info!(path = %out_png.display(), "wrote PNG");

    let out_svg = out_png.with_extension("svg");
    std::fs::write(&out_svg, visual.scene().to_svg(&opts)).with_context(|| format!("writing {}", out_svg.display()))?;
    info!(path = %out_svg.display(), "wrote SVG");
    Ok(())
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<DemoArgs> {
    let mut args = DemoArgs {
        input: None,
        width: 500.0,
        height: 500.0,
        out_dir: PathBuf::from("target/out"),
        theme: "light".to_owned(),
    };
    while let Some(arg) = it.next() {
        let mut value = |flag: &str| it.next().with_context(|| format!("{flag} needs a value\n{USAGE}"));
        match arg.as_str() {
            "--width" => args.width = parse_size(&value("--width")?)?,
            "--height" => args.height = parse_size(&value("--height")?)?,
            "--out" => args.out_dir = PathBuf::from(value("--out")?),
            "--theme" => args.theme = value("--theme")?,
            "-h" | "--help" => {
                println!("{USAGE}");
                std::process::exit(0);
            }
            flag if flag.starts_with("--") => bail!("unknown flag {flag}\n{USAGE}"),
            _ if args.input.is_none() => args.input = Some(PathBuf::from(&arg)),
            _ => bail!("more than one input given\n{USAGE}"),
        }
    }
    Ok(args)
}

fn parse_size(s: &str) -> Result<f64> {
    let v: f64 = s.trim().parse().with_context(|| format!("'{s}' is not a number"))?;
    if !(v.is_finite() && v >= 1.0) {
        bail!("size must be at least 1, got {v}");
    }
    Ok(v)
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &Path) -> Result<(PathBuf, bool)> {
    if raw.exists() {
        return Ok((raw.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(raw) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    bail!("file not found: {}", raw.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

fn load_data_view(path: &Path) -> Result<DataView> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    if ext == "json" {
        let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        return DataView::from_json(&text).context("data view JSON does not match the host schema");
    }
    load_csv_data_view(path)
}

/// First column is the category, second the measure; header names become column display names.
fn load_csv_data_view(path: &Path) -> Result<DataView> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.clone();
    let category_name = headers.get(0).unwrap_or("Category").trim().to_owned();
    let measure_name = headers.get(1).unwrap_or("Measure").trim().to_owned();
    info!(category = %category_name, measure = %measure_name, "CSV columns");

    let mut categories = Vec::new();
    let mut values = Vec::new();
    let mut unparsed = 0usize;
    for rec in rdr.records() {
        let rec = rec?;
        let label = rec.get(0).map(str::trim).filter(|s| !s.is_empty());
        categories.push(PrimitiveValue::from(label));
        let value = rec.get(1).and_then(|s| s.trim().parse::<f64>().ok());
        if value.is_none() {
            unparsed += 1;
        }
        values.push(PrimitiveValue::from(value));
    }
    if unparsed > 0 {
        warn!(rows = unparsed, "measure cells that are not numbers were left empty");
    }
    info!(rows = categories.len(), "loaded CSV rows");

    Ok(CategoricalBuilder::new()
        .categories(ColumnSource::new(category_name).with_role("category"), categories)
        .measure(ColumnSource::new(measure_name).with_role("measure").measure(), values)
        .build())
}

fn sample_data_view() -> DataView {
    let categories = [
        "Infrastructure",
        "Services",
        "Distribution",
        "Manufacturing",
        "Office & Administrative",
        "BU",
        "R&D",
    ];
    let values = [
        23536681.479000024,
        572443.5630000085,
        -561203.5199999921,
        -1061897.1090000793,
        -2429005.238999985,
        -2846388.948000014,
        -2970340.0979999974,
    ];
    CategoricalBuilder::new()
        .categories(
            ColumnSource::new("Business Area").with_query_name("Business Area.Business Area").with_role("category"),
            categories,
        )
        .measure(
            ColumnSource::new("Var Plan").with_query_name("Fact.Var Plan").with_role("measure").measure(),
            values,
        )
        .build()
}
