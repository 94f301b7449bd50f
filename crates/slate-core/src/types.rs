// File: crates/slate-core/src/types.rs
// Summary: Shared constants and the gutter (margin) model.

use serde::{Deserialize, Serialize};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default bar chart height in pixels.
pub const BAR_HEIGHT: u32 = 300;
/// Default line chart height in pixels.
pub const LINE_HEIGHT: u32 = 250;

/// Space reserved around the plot area for axis labels, in pixels.
/// Contract: all fields are non-negative. Inside a chart configuration a
/// partial gutter merges over that chart's preset (`bar()` or `line()`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Bar chart gutters: wide left side for value labels.
    pub const fn bar() -> Self { Self::new(100, 30, 20, 30) }
    /// Line chart gutters.
    pub const fn line() -> Self { Self::new(30, 30, 20, 20) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::bar()
    }
}

