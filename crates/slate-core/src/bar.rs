// File: crates/slate-core/src/bar.rs
// Summary: Bar layout engine: grouped and stacked bar boxes, per-dataset colors, value and category labels.

use tracing::debug;

use crate::axis::Axes;
use crate::color::Color;
use crate::config::{BarChartConfig, GradientConfig};
use crate::dataset::Datasets;
use crate::error::Result;
use crate::geometry::{ChartBox, DrawBox};
use crate::label::{category_label_box, value_label_box};
use crate::scale::{resolve_max, GridSpec, Stepping};
use crate::surface::{Gradient, Style, TextSpec};
use crate::text::Align;

/// Lightness removed from a fill to derive an `auto` border.
pub const BORDER_SHADE: f32 = 0.05;

/// Running height of each x-step's stack, owned by one layout pass.
#[derive(Clone, Debug, PartialEq)]
pub struct StackTotals(Vec<f64>);

impl StackTotals {
    pub fn new(steps: usize) -> Self { Self(vec![0.0; steps]) }

    /// Base y for a bar of `height` at `step`; the step's total grows by `height`.
    pub fn place(&mut self, step: usize, height: f64) -> f64 {
        let base = self.0[step];
        self.0[step] += height;
        base
    }

    pub fn total(&self, step: usize) -> f64 { self.0[step] }

    pub fn as_slice(&self) -> &[f64] { &self.0 }
}

/// Horizontal placement rules for one chart's bars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarSlots {
    pub x_step: f64,
    pub gutter: f64,
    pub stack: bool,
    pub datasets: usize,
}

impl BarSlots {
    /// Bar width: the whole step minus gutter when stacked, an equal share of it when grouped.
    pub fn width(&self) -> f64 {
        let usable = self.x_step - self.gutter;
        if self.stack { usable } else { usable / self.datasets as f64 }
    }

    /// Chart-local x of dataset `d`'s bar at step `i`.
    pub fn x(&self, d: usize, i: usize) -> f64 {
        let x = (self.gutter / 2.0 + self.x_step * i as f64).round();
        if self.stack { x } else { x + self.width() * d as f64 }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    pub dataset: usize,
    pub index: usize,
    pub value: f64,
    pub chart_box: ChartBox,
    pub draw_box: DrawBox,
    pub style: Style,
    pub label: Option<TextSpec>,
}

/// Everything one bar chart draw needs, computed before touching the surface.
#[derive(Clone, Debug, PartialEq)]
pub struct BarLayout {
    pub grid: GridSpec,
    pub axes: Axes,
    /// Bars in dataset order, then point order.
    pub bars: Vec<BarGeometry>,
    /// One category label per x-step.
    pub category_labels: Vec<TextSpec>,
    pub totals: StackTotals,
}

/// Per-dataset paint resolved once per layout pass.
struct BarPaint {
    fills: Vec<Color>,
    borders: Option<Vec<Color>>,
}

impl BarPaint {
    fn resolve(cfg: &BarChartConfig, datasets: usize) -> Result<Self> {
        let fills = cfg.bar.color.resolve(datasets)?;
        let borders = if cfg.bar.border.width > 0.0 {
            Some(cfg.bar.border.color.resolve(&fills, BORDER_SHADE)?)
        } else {
            None
        };
        Ok(Self { fills, borders })
    }

    fn style(&self, cfg: &BarChartConfig, d: usize) -> Style {
        let fill = self.fills[d];
        let mut style = Style::filled(fill).with_opacity(cfg.bar.opacity);
        if let Some(borders) = &self.borders {
            style = style.with_stroke(borders[d], cfg.bar.border.width);
        }
        style.gradient = gradient(&cfg.bar.gradient, fill);
        style
    }
}

fn gradient(cfg: &GradientConfig, fill: Color) -> Option<Gradient> {
    if !cfg.enabled {
        return None;
    }
    let [x1, y1, x2, y2] = cfg.vector;
    Some(Gradient {
        start: (x1, y1),
        end: (x2, y2),
        stops: vec![fill.lighter_by(cfg.amount), fill.darker_by(cfg.amount)],
    })
}

pub fn layout_bars(cfg: &BarChartConfig, datasets: Datasets<'_>) -> Result<BarLayout> {
    let max = resolve_max(&datasets, cfg.stack, cfg.grid.max_y)?;
    let points = datasets.point_count();
    let grid = GridSpec::resolve(cfg.width, cfg.height, cfg.gutter, max, points, Stepping::Slots)?;
    let axes = Axes::layout(&grid, &cfg.grid, &cfg.border, &cfg.text)?;
    let paint = BarPaint::resolve(cfg, datasets.len())?;
    let label_color = Color::parse(&cfg.bar.label.color)?;
    let text_color = Color::parse(&cfg.text.color)?;

    let slots = BarSlots { x_step: grid.x_step, gutter: cfg.bar.gutter, stack: cfg.stack, datasets: datasets.len() };
    let value_label_h = cfg.bar.label.font.size_px();
    let category_label_h = cfg.text.font.size_px();

    let mut totals = StackTotals::new(points);
    let mut bars = Vec::with_capacity(points * datasets.len());
    let mut category_labels = Vec::with_capacity(points);

    for (d, set) in datasets.iter().enumerate() {
        let style = paint.style(cfg, d);
        debug!(dataset = set.name(), index = d, fill = %paint.fills[d], "laying out bars");

        for (i, datum) in set.data().iter().enumerate() {
            let height = grid.value_to_height(datum.value);
            let base = totals.place(i, height);
            let chart_box = ChartBox::new(
                slots.x(d, i),
                if cfg.stack { base } else { 0.0 },
                slots.width(),
                height,
            );
            let draw_box = grid.frame.to_draw(chart_box);

            let label = cfg.bar.label.enabled.then(|| TextSpec {
                content: cfg.bar.label.filter.apply(datum.value),
                bbox: value_label_box(&draw_box, cfg.bar.label.position, value_label_h),
                align: Align::Center,
                font: cfg.bar.label.font.clone(),
                color: label_color,
            });

            // Category labels belong to the step, not the dataset.
            if d == 0 {
                category_labels.push(TextSpec {
                    content: cfg.grid.label_x.apply(&datum.label),
                    bbox: category_label_box(&draw_box, &grid, cfg.bar.gutter, category_label_h),
                    align: Align::Center,
                    font: cfg.text.font.clone(),
                    color: text_color,
                });
            }

            bars.push(BarGeometry {
                dataset: d,
                index: i,
                value: datum.value,
                chart_box,
                draw_box,
                style: style.clone(),
                label,
            });
        }
    }

    Ok(BarLayout { grid, axes, bars, category_labels, totals })
}
