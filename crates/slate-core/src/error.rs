// File: crates/slate-core/src/error.rs
// Summary: Configuration error raised before any drawing when chart inputs are unusable.

use thiserror::Error;

/// Every way a chart's inputs can be rejected. All variants abort the draw
/// call before the surface is touched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("no datasets supplied")]
    NoDatasets,

    #[error("dataset `{name}` has no data points")]
    EmptyDataset { name: String },

    #[error("dataset `{name}` has {found} points but `{first}` has {expected}")]
    MismatchedLengths {
        name: String,
        found: usize,
        first: String,
        expected: usize,
    },

    #[error("dataset `{name}` has a non-finite value at point {index}")]
    NonFiniteValue { name: String, index: usize },

    #[error("invalid color `{0}`")]
    InvalidColor(String),

    #[error("unknown palette `{0}`")]
    UnknownPalette(String),

    #[error("value-axis maximum must be finite and positive, got {0}")]
    InvalidMaximum(f64),

    #[error("plot area is empty: {width}x{height} after gutters")]
    EmptyPlotArea { width: f64, height: f64 },

    #[error("line chart needs at least two points, got {0}")]
    TooFewPoints(usize),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
