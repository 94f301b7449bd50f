// File: crates/slate-core/src/line.rs
// Summary: Line layout engine: per-dataset stroke and fill paths, dots, and hover zones.

use tracing::debug;

use crate::axis::Axes;
use crate::color::Color;
use crate::config::LineChartConfig;
use crate::dataset::{Dataset, Datasets};
use crate::error::Result;
use crate::geometry::DrawBox;
use crate::scale::{resolve_max, GridSpec, Stepping};
use crate::surface::{PathData, Style};

/// Canvas position of point `i` with `value`, snapped to whole pixels.
#[inline]
pub fn point_position(grid: &GridSpec, i: usize, value: f64) -> (f64, f64) {
    let x = (grid.frame.left + grid.x_step * i as f64).round();
    let y = (grid.frame.baseline() - grid.value_to_height(value)).round();
    (x, y)
}

/// Invisible rectangle one x-step wide and the full plot height, starting at point `i`.
pub fn hover_zone(grid: &GridSpec, i: usize) -> DrawBox {
    DrawBox::new(grid.frame.left + grid.x_step * i as f64, grid.frame.top, grid.x_step, grid.frame.height)
}

/// Geometry and paint for one dataset's line.
#[derive(Clone, Debug, PartialEq)]
pub struct LinePlot {
    pub dataset: usize,
    pub points: Vec<(f64, f64)>,
    pub stroke: PathData,
    pub stroke_style: Style,
    /// Area between the line and the baseline.
    pub fill: PathData,
    pub fill_style: Style,
    pub dot_radius: f64,
    pub dot_style: Style,
    pub hover_zones: Vec<DrawBox>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineLayout {
    pub grid: GridSpec,
    pub axes: Axes,
    /// One plot per dataset, in declaration order.
    pub plots: Vec<LinePlot>,
    pub hover_style: Style,
}

/// Stroke and fill paths through `points`. The fill starts on the baseline,
/// follows the line, drops back to the baseline at the last x and closes.
pub fn trace_paths(points: &[(f64, f64)], baseline: (f64, f64), tension: f64) -> (PathData, PathData) {
    let mut stroke = PathData::new();
    let mut fill = PathData::new();
    fill.move_to(baseline.0, baseline.1);

    for (i, &(x, y)) in points.iter().enumerate() {
        if i == 0 {
            stroke.move_to(x, y);
            fill.line_to(x, y);
        } else {
            stroke.smooth_to(x, y, tension);
            fill.smooth_to(x, y, tension);
        }
    }
    if let Some(&(last_x, _)) = points.last() {
        fill.line_to(last_x, baseline.1).close();
    }
    (stroke, fill)
}

fn plot_dataset(
    cfg: &LineChartConfig,
    grid: &GridSpec,
    d: usize,
    set: &Dataset,
    stroke_color: Color,
    fill_color: Color,
    dot_style: &Style,
) -> LinePlot {
    let points: Vec<(f64, f64)> = set
        .data()
        .iter()
        .enumerate()
        .map(|(i, datum)| point_position(grid, i, datum.value))
        .collect();
    let (stroke, fill) = trace_paths(&points, (grid.frame.left, grid.frame.baseline()), cfg.line.curve);

    let mut stroke_style = Style::stroked(stroke_color, cfg.line.width);
    stroke_style.round_join = true;

    LinePlot {
        dataset: d,
        hover_zones: (0..points.len()).map(|i| hover_zone(grid, i)).collect(),
        points,
        stroke,
        stroke_style,
        fill,
        fill_style: Style::filled(fill_color).with_opacity(cfg.fill.opacity),
        dot_radius: cfg.dot.radius,
        dot_style: dot_style.clone(),
    }
}

/// Lines never stack, so `auto` takes the largest dataset maximum.
pub fn layout_lines(cfg: &LineChartConfig, datasets: Datasets<'_>) -> Result<LineLayout> {
    let max = resolve_max(&datasets, false, cfg.grid.max_y)?;
    let grid = GridSpec::resolve(
        cfg.width,
        cfg.height,
        cfg.gutter,
        max,
        datasets.point_count(),
        Stepping::Segments,
    )?;
    let axes = Axes::layout(&grid, &cfg.grid, &cfg.border, &cfg.text)?;

    let strokes = cfg.line.color.resolve(datasets.len())?;
    let fills = cfg.fill.color.resolve(datasets.len())?;
    let dot_style = Style::filled(Color::parse(&cfg.dot.color)?).with_stroke(Color::parse(&cfg.dot.stroke)?, 1.0);

    let plots = datasets
        .iter()
        .enumerate()
        .map(|(d, set)| {
            debug!(dataset = set.name(), index = d, stroke = %strokes[d], "laying out line");
            plot_dataset(cfg, &grid, d, set, strokes[d], fills[d], &dot_style)
        })
        .collect();

    Ok(LineLayout {
        grid,
        axes,
        plots,
        hover_style: Style::filled(Color::WHITE).with_opacity(0.0),
    })
}
