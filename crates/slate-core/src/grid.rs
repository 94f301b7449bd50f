// File: crates/slate-core/src/grid.rs
// Summary: Gridline layout helpers.

use crate::geometry::PlotFrame;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Canvas positions of the gridlines across a plot frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Gridlines {
    /// Y of each horizontal line, top to bottom (plot edges included).
    pub rows: Vec<f64>,
    /// X of each vertical line, left to right (plot edges included).
    pub columns: Vec<f64>,
}

impl Gridlines {
    /// `rows`/`columns` count the bands; zero bands yields no lines in that direction.
    pub fn new(frame: &PlotFrame, rows: usize, columns: usize) -> Self {
        let lines = |start: f64, end: f64, bands: usize| {
            if bands == 0 { Vec::new() } else { linspace(start, end, bands + 1) }
        };
        Self {
            rows: lines(frame.top, frame.baseline(), rows),
            columns: lines(frame.left, frame.left + frame.width, columns),
        }
    }
}
