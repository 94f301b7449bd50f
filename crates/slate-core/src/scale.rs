// File: crates/slate-core/src/scale.rs
// Summary: Value-axis maximum policy and the per-draw grid spec (plot frame, x-step, vertical scale).

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dataset::Datasets;
use crate::error::{ConfigError, Result};
use crate::geometry::PlotFrame;
use crate::types::Insets;

/// How the top of the value axis is chosen.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMax {
    /// Derived from the data.
    #[default]
    Auto,
    /// Used verbatim; values above it are not clamped.
    #[serde(untagged)]
    Fixed(f64),
}

/// Resolve the value-axis maximum. Stacked bars add up, so `auto` takes the
/// sum of dataset maxima; otherwise the largest single maximum.
pub fn resolve_max(datasets: &Datasets<'_>, stack: bool, policy: AxisMax) -> Result<f64> {
    let max = match policy {
        AxisMax::Auto if stack => datasets.sum_of_maxima(),
        AxisMax::Auto => datasets.max_of_maxima(),
        AxisMax::Fixed(v) => v,
    };
    if !max.is_finite() || max <= 0.0 {
        return Err(ConfigError::InvalidMaximum(max));
    }
    Ok(max)
}

/// How the plot width is divided among data points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stepping {
    /// One slot per point (bars occupy slots).
    Slots,
    /// One segment between consecutive points (lines connect points).
    Segments,
}

impl Stepping {
    fn divisions(self, points: usize) -> Result<usize> {
        match self {
            Stepping::Slots => Ok(points),
            Stepping::Segments if points < 2 => Err(ConfigError::TooFewPoints(points)),
            Stepping::Segments => Ok(points - 1),
        }
    }
}

/// Derived per-draw geometry: where the plot sits and how values map to pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridSpec {
    pub frame: PlotFrame,
    /// Value-axis maximum.
    pub max: f64,
    /// Horizontal pixels per x-step.
    pub x_step: f64,
    /// Vertical pixels per data unit.
    pub y_scale: f64,
}

impl GridSpec {
    pub fn resolve(
        width: u32,
        height: u32,
        insets: Insets,
        max: f64,
        points: usize,
        stepping: Stepping,
    ) -> Result<Self> {
        let plot_w = f64::from(width) - f64::from(insets.hsum());
        let plot_h = f64::from(height) - f64::from(insets.vsum());
        if plot_w <= 0.0 || plot_h <= 0.0 {
            return Err(ConfigError::EmptyPlotArea { width: plot_w, height: plot_h });
        }
        if !max.is_finite() || max <= 0.0 {
            return Err(ConfigError::InvalidMaximum(max));
        }
        let divisions = stepping.divisions(points)?;
        if divisions == 0 {
            return Err(ConfigError::TooFewPoints(points));
        }
        let spec = Self {
            frame: PlotFrame::new(f64::from(insets.left), f64::from(insets.top), plot_w, plot_h),
            max,
            x_step: plot_w / divisions as f64,
            y_scale: plot_h / max,
        };
        debug!(max, x_step = spec.x_step, y_scale = spec.y_scale, plot_w, plot_h, "resolved grid spec");
        Ok(spec)
    }

    pub fn plot_width(&self) -> f64 { self.frame.width }

    pub fn plot_height(&self) -> f64 { self.frame.height }

    /// Data value to chart-local pixel height.
    #[inline]
    pub fn value_to_height(&self, value: f64) -> f64 { value * self.y_scale }

    /// Chart-local pixel height back to a data value.
    #[inline]
    pub fn height_to_value(&self, height: f64) -> f64 { height / self.y_scale }
}
