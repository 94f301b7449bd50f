// File: crates/slate-core/src/label.rs
// Summary: Label placement: value labels anchored to bars, category labels under the plot, value-axis labels.

use serde::{Deserialize, Serialize};

use crate::geometry::DrawBox;
use crate::scale::GridSpec;

/// Gap between a label box and the primitive it annotates, in pixels.
pub const LABEL_PADDING: f64 = 1.0;
/// Gap between the plot's bottom edge and the category labels.
pub const CATEGORY_LABEL_OFFSET: f64 = 5.0;
/// Gap between value-axis labels and the plot's left edge.
pub const VALUE_AXIS_LABEL_GAP: f64 = 5.0;

/// Where a value label sits relative to its bar. Unknown keywords read as `Above`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Anchor {
    /// Outside, on top of the bar.
    #[default]
    Above,
    /// Outside, under the bar.
    Below,
    /// Inside, near the top edge.
    Top,
    /// Resolves to the same position as `Below`.
    Bottom,
}

impl Anchor {
    pub fn from_keyword(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "below" => Anchor::Below,
            "top" => Anchor::Top,
            "bottom" => Anchor::Bottom,
            _ => Anchor::Above,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Anchor::Above => "above",
            Anchor::Below => "below",
            Anchor::Top => "top",
            Anchor::Bottom => "bottom",
        }
    }
}

impl From<String> for Anchor {
    fn from(s: String) -> Self { Anchor::from_keyword(&s) }
}

impl From<Anchor> for String {
    fn from(a: Anchor) -> Self { a.keyword().to_string() }
}

/// Anchor y for a label of height `label_h` next to `bar`.
pub fn anchor_y(bar: &DrawBox, anchor: Anchor, label_h: f64, padding: f64) -> f64 {
    match anchor {
        Anchor::Above => bar.y - label_h - padding,
        Anchor::Top => bar.y + label_h + padding,
        Anchor::Below | Anchor::Bottom => bar.bottom() + label_h + padding,
    }
}

/// Text box for a bar's value label: the bar's horizontal extent, moved to the anchor.
pub fn value_label_box(bar: &DrawBox, anchor: Anchor, label_h: f64) -> DrawBox {
    let y = anchor_y(bar, anchor, label_h, LABEL_PADDING) - LABEL_PADDING;
    DrawBox::new(bar.x, y, bar.width, label_h)
}

/// Text box for the category label of one x-step, just below the plot.
pub fn category_label_box(bar: &DrawBox, grid: &GridSpec, bar_gutter: f64, label_h: f64) -> DrawBox {
    DrawBox::new(
        bar.x,
        grid.frame.baseline() + CATEGORY_LABEL_OFFSET,
        grid.x_step - bar_gutter,
        label_h,
    )
}

/// Text box for a value-axis label centred on the gridline at `row_y`, filling the left gutter.
pub fn value_axis_label_box(row_y: f64, grid: &GridSpec, label_h: f64) -> DrawBox {
    let width = (grid.frame.left - VALUE_AXIS_LABEL_GAP).max(0.0);
    DrawBox::new(0.0, row_y - label_h / 2.0, width, label_h)
}
