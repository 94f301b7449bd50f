// File: crates/slate-core/src/chart.rs
// Summary: Bar and line chart owners: validate inputs, run layout, then emit draw commands to a surface.

use tracing::debug;

use crate::bar::{layout_bars, BarLayout};
use crate::config::{BarChartConfig, LineChartConfig};
use crate::dataset::{Dataset, Datasets};
use crate::error::Result;
use crate::line::{layout_lines, LineLayout};
use crate::surface::Surface;

/// A bar chart: one or more datasets drawn grouped or stacked.
#[derive(Clone, Debug, Default)]
pub struct BarChart {
    config: BarChartConfig,
    datasets: Vec<Dataset>,
}

impl BarChart {
    pub fn new(config: BarChartConfig) -> Self {
        Self { config, datasets: Vec::new() }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.add_dataset(dataset);
        self
    }

    pub fn config(&self) -> &BarChartConfig { &self.config }

    pub fn datasets(&self) -> &[Dataset] { &self.datasets }

    /// Compute every primitive's geometry without drawing.
    pub fn layout(&self) -> Result<BarLayout> {
        layout_bars(&self.config, Datasets::new(&self.datasets)?)
    }

    /// Clear `surface` and draw the chart. Fails before touching the surface
    /// when the datasets or configuration are unusable.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let layout = self.layout()?;
        debug!(bars = layout.bars.len(), max = layout.grid.max, stack = self.config.stack, "drawing bar chart");

        surface.clear();
        layout.axes.draw_grid(surface);
        let frame = layout.axes.draw_frame(surface);
        layout.axes.draw_value_labels(surface);

        for bar in &layout.bars {
            surface.rect(bar.draw_box, &bar.style);
            if let Some(label) = &bar.label {
                surface.text(label);
            }
            if bar.dataset == 0 {
                surface.text(&layout.category_labels[bar.index]);
            }
        }

        surface.to_front(&[frame]);
        Ok(())
    }
}

/// A line chart: one or more datasets plotted independently on shared axes.
#[derive(Clone, Debug, Default)]
pub struct LineChart {
    config: LineChartConfig,
    datasets: Vec<Dataset>,
}

impl LineChart {
    pub fn new(config: LineChartConfig) -> Self {
        Self { config, datasets: Vec::new() }
    }

    pub fn add_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn with_dataset(mut self, dataset: Dataset) -> Self {
        self.add_dataset(dataset);
        self
    }

    pub fn config(&self) -> &LineChartConfig { &self.config }

    pub fn datasets(&self) -> &[Dataset] { &self.datasets }

    pub fn layout(&self) -> Result<LineLayout> {
        layout_lines(&self.config, Datasets::new(&self.datasets)?)
    }

    /// Clear `surface` and draw the chart; hover zones end up on top.
    pub fn draw(&self, surface: &mut dyn Surface) -> Result<()> {
        let layout = self.layout()?;
        debug!(lines = layout.plots.len(), max = layout.grid.max, "drawing line chart");

        surface.clear();
        layout.axes.draw_grid(surface);
        layout.axes.draw_frame(surface);
        layout.axes.draw_value_labels(surface);

        let mut blanket = Vec::new();
        for plot in &layout.plots {
            surface.path(&plot.stroke, &plot.stroke_style);
            surface.path(&plot.fill, &plot.fill_style);
            for (&(x, y), zone) in plot.points.iter().zip(&plot.hover_zones) {
                surface.circle(x, y, plot.dot_radius, &plot.dot_style);
                blanket.push(surface.rect(*zone, &layout.hover_style));
            }
        }

        surface.to_front(&blanket);
        Ok(())
    }
}
