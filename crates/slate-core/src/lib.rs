// File: crates/slate-core/src/lib.rs
// Summary: Core library entry point; exports datasets, configuration, layout engines and the surface seam.

pub mod axis;
pub mod bar;
pub mod chart;
pub mod color;
pub mod config;
pub mod dataset;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod label;
pub mod line;
pub mod scale;
pub mod scene;
pub mod surface;
pub mod text;
pub mod types;

pub use chart::{BarChart, LineChart};
pub use color::{BorderColor, Color, ColorSpec, Colorset, Palette};
pub use config::{BarChartConfig, LineChartConfig};
pub use dataset::{Dataset, Datasets, Datum};
pub use error::{ConfigError, Result};
pub use geometry::{ChartBox, DrawBox, PlotFrame};
pub use label::Anchor;
pub use scale::{AxisMax, GridSpec};
pub use scene::{Primitive, Scene};
pub use surface::{ElementId, PathData, PathSegment, Style, Surface, TextSpec};
pub use types::Insets;
