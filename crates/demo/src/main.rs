// File: crates/demo/src/main.rs
// Summary: Demo builds a grouped bar chart, a stacked bar chart and a multi-line chart and renders each to PNG.
// Usage: slate-demo [OUT_DIR] [BAR_CONFIG.json]

use anyhow::{Context, Result};
use slate_core::color::{ColorSpec, Palette};
use slate_core::config::{BarChartConfig, LineChartConfig};
use slate_core::label::Anchor;
use slate_core::text::ValueFormat;
use slate_core::{BarChart, Dataset, LineChart};
use slate_render_skia::SkiaSurface;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_span_events(FmtSpan::CLOSE))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let out_dir = PathBuf::from(args.next().unwrap_or_else(|| "target/demo".to_string()));
    let bar_config = match args.next() {
        Some(path) => load_bar_config(Path::new(&path))?,
        None => BarChartConfig::default(),
    };

    let regions = sales_by_region();

    // 1) Grouped bars with value labels
    let mut grouped_cfg = bar_config.clone();
    grouped_cfg.bar.label.enabled = true;
    grouped_cfg.bar.label.position = Anchor::Above;
    grouped_cfg.bar.label.filter = ValueFormat::Fixed(0);
    let grouped = regions.iter().cloned().fold(BarChart::new(grouped_cfg), BarChart::with_dataset);
    render_bar(&grouped, &out_dir.join("bars_grouped.png"))?;

    // 2) Same data stacked, drawn in greens
    let mut stacked_cfg = bar_config;
    stacked_cfg.stack = true;
    stacked_cfg.bar.color = ColorSpec::Named(Palette::Greens);
    let stacked = regions.into_iter().fold(BarChart::new(stacked_cfg), BarChart::with_dataset);
    render_bar(&stacked, &out_dir.join("bars_stacked.png"))?;

    // 3) Two smoothed lines
    let lines = LineChart::new(LineChartConfig::default())
        .with_dataset(Dataset::from_values("visits", &[12.0, 19.0, 15.0, 24.0, 21.0, 30.0, 27.0]))
        .with_dataset(Dataset::from_values("signups", &[3.0, 6.0, 4.0, 9.0, 8.0, 12.0, 10.0]));
    let cfg = lines.config();
    let mut surface = SkiaSurface::new(cfg.width, cfg.height);
    lines.draw(&mut surface).context("drawing line chart")?;
    write_png(&surface, &out_dir.join("lines.png"))?;

    Ok(())
}

fn sales_by_region() -> Vec<Dataset> {
    let quarters = ["Q1", "Q2", "Q3", "Q4"];
    let rows = [("north", [12.0, 18.0, 9.0, 15.0]), ("south", [7.0, 11.0, 14.0, 6.0]), ("west", [5.0, 8.0, 10.0, 13.0])];
    rows.iter()
        .map(|(name, values)| Dataset::with_data(*name, quarters.iter().copied().zip(values.iter().copied())))
        .collect()
}

fn load_bar_config(path: &Path) -> Result<BarChartConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("failed to read config '{}'", path.display()))?;
    let cfg = serde_json::from_str(&text).with_context(|| format!("failed to parse config '{}'", path.display()))?;
    info!(path = %path.display(), "loaded bar config");
    Ok(cfg)
}

fn render_bar(chart: &BarChart, out: &Path) -> Result<()> {
    let cfg = chart.config();
    let mut surface = SkiaSurface::new(cfg.width, cfg.height);
    chart.draw(&mut surface).with_context(|| format!("drawing {}", out.display()))?;
    write_png(&surface, out)
}

fn write_png(surface: &SkiaSurface, out: &Path) -> Result<()> {
    surface.render_to_png(out).with_context(|| format!("failed to write '{}'", out.display()))?;
    info!(path = %out.display(), primitives = surface.scene().len(), "wrote chart");
    Ok(())
}
