// File: crates/slate-core/src/geometry.rs
// Summary: Chart-local and draw-space boxes, and the mapper between the two coordinate systems.

/// Rectangle in chart-local coordinates: origin at the plot's bottom-left,
/// `y` grows upward from the baseline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ChartBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    /// Chart-local y of the box's upper edge.
    pub fn top(&self) -> f64 { self.y + self.height }
}

/// Rectangle in surface coordinates: origin at the canvas top-left,
/// `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl DrawBox {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }
    pub fn right(&self) -> f64 { self.x + self.width }
    pub fn bottom(&self) -> f64 { self.y + self.height }
}

/// Maps chart-local boxes onto the surface. `left`/`top` locate the plot
/// area's top-left corner on the canvas; `height` is the plot height.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotFrame {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotFrame {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Canvas y of the baseline (plot bottom edge).
    pub fn baseline(&self) -> f64 { self.top + self.height }

    /// The plot area itself as a draw box.
    pub fn bounds(&self) -> DrawBox {
        DrawBox::new(self.left, self.top, self.width, self.height)
    }

    #[inline]
    pub fn to_draw(&self, b: ChartBox) -> DrawBox {
        DrawBox {
            x: self.left + b.x,
            y: self.top + (self.height - b.y - b.height),
            width: b.width,
            height: b.height,
        }
    }

    #[inline]
    pub fn to_chart(&self, b: DrawBox) -> ChartBox {
        ChartBox {
            x: b.x - self.left,
            y: self.height - (b.y - self.top) - b.height,
            width: b.width,
            height: b.height,
        }
    }
}
