// File: crates/slate-core/src/axis.rs
// Summary: Plot frame, gridlines and value-axis labels shared by bar and line charts.

use crate::color::Color;
use crate::config::{FrameBorder, GridConfig};
use crate::error::Result;
use crate::geometry::DrawBox;
use crate::grid::{linspace, Gridlines};
use crate::label::value_axis_label_box;
use crate::scale::GridSpec;
use crate::surface::{ElementId, PathData, Style, Surface, TextSpec};
use crate::text::{Align, TextStyle};

/// Everything drawn around the data: the frame, gridlines and value labels.
#[derive(Clone, Debug, PartialEq)]
pub struct Axes {
    pub frame: DrawBox,
    pub frame_style: Style,
    pub gridlines: Gridlines,
    pub grid_style: Style,
    pub value_labels: Vec<TextSpec>,
}

impl Axes {
    pub fn layout(grid: &GridSpec, cfg: &GridConfig, border: &FrameBorder, text: &TextStyle) -> Result<Self> {
        let frame_style = Style::stroked(Color::parse(&border.color)?, border.width);
        let grid_style = Style::stroked(Color::parse(&cfg.color)?, 1.0);
        let text_color = Color::parse(&text.color)?;
        let gridlines = Gridlines::new(&grid.frame, cfg.horizontal.bands(), cfg.vertical.bands());

        // One label per horizontal band edge, even when the lines themselves are hidden.
        let label_h = text.font.size_px();
        let baseline = grid.frame.baseline();
        let value_labels = linspace(grid.frame.top, baseline, cfg.horizontal.lines.max(1) + 1)
            .into_iter()
            .map(|y| TextSpec {
                content: cfg.label_y.apply(grid.height_to_value(baseline - y)),
                bbox: value_axis_label_box(y, grid, label_h),
                align: Align::Right,
                font: text.font.clone(),
                color: text_color,
            })
            .collect();

        Ok(Self { frame: grid.frame.bounds(), frame_style, gridlines, grid_style, value_labels })
    }

    /// Gridlines as one path each, horizontal first.
    pub fn grid_paths(&self) -> Vec<PathData> {
        let f = &self.frame;
        let rows = self.gridlines.rows.iter().map(|&y| {
            let mut p = PathData::new();
            p.move_to(f.x, y).line_to(f.right(), y);
            p
        });
        let columns = self.gridlines.columns.iter().map(|&x| {
            let mut p = PathData::new();
            p.move_to(x, f.y).line_to(x, f.bottom());
            p
        });
        rows.chain(columns).collect()
    }

    pub fn draw_grid(&self, surface: &mut dyn Surface) {
        for path in self.grid_paths() {
            surface.path(&path, &self.grid_style);
        }
    }

    pub fn draw_frame(&self, surface: &mut dyn Surface) -> ElementId {
        surface.rect(self.frame, &self.frame_style)
    }

    pub fn draw_value_labels(&self, surface: &mut dyn Surface) {
        for label in &self.value_labels {
            surface.text(label);
        }
    }
}
