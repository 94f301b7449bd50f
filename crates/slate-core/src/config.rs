// File: crates/slate-core/src/config.rs
// Summary: Typed, immutable chart configuration. Every section derives `serde(default)`,
// so a partial document merges over the defaults below. Sections whose defaults
// differ per chart kind (gutter, grid, frame border) merge over that chart's preset.

use serde::{Deserialize, Deserializer, Serialize};

use crate::color::{BorderColor, ColorSpec, Colorset, Palette};
use crate::label::Anchor;
use crate::scale::AxisMax;
use crate::text::{Font, LabelFormat, TextStyle, ValueFormat};
use crate::types::{Insets, BAR_HEIGHT, LINE_HEIGHT, WIDTH};

const BAR_GRID_COLOR: &str = "#eee";
const BAR_BORDER_COLOR: &str = "#bbb";
const LINE_GRID_COLOR: &str = "#ddd";
const LINE_BORDER_COLOR: &str = "#999";

/// One direction of gridlines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridLines {
    pub enabled: bool,
    /// Number of bands the plot is divided into.
    pub lines: usize,
}

impl GridLines {
    pub const fn new(enabled: bool, lines: usize) -> Self {
        Self { enabled, lines }
    }

    /// Bands actually drawn.
    pub fn bands(&self) -> usize {
        if self.enabled { self.lines } else { 0 }
    }
}

impl Default for GridLines {
    fn default() -> Self {
        Self::new(true, 10)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Gridline color.
    pub color: String,
    pub horizontal: GridLines,
    pub vertical: GridLines,
    /// Filter for category (x-axis) labels.
    pub label_x: LabelFormat,
    /// Filter for value-axis labels.
    pub label_y: ValueFormat,
    pub max_y: AxisMax,
}

impl GridConfig {
    fn with_color(color: &str) -> Self {
        Self {
            color: color.to_string(),
            horizontal: GridLines::new(true, 10),
            vertical: GridLines::new(false, 0),
            label_x: LabelFormat::Identity,
            label_y: ValueFormat::Fixed(1),
            max_y: AxisMax::Auto,
        }
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::with_color(BAR_GRID_COLOR)
    }
}

/// Border drawn around the plot area.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameBorder {
    pub color: String,
    pub width: f64,
}

impl Default for FrameBorder {
    fn default() -> Self {
        Self::with_color(BAR_BORDER_COLOR)
    }
}

impl FrameBorder {
    fn with_color(color: &str) -> Self {
        Self { color: color.to_string(), width: 1.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarBorder {
    /// 0 disables the border.
    pub width: f64,
    pub color: BorderColor,
}

impl Default for BarBorder {
    fn default() -> Self {
        Self { width: 0.0, color: BorderColor::Auto }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarLabelConfig {
    pub enabled: bool,
    pub position: Anchor,
    pub font: Font,
    pub color: String,
    pub filter: ValueFormat,
}

impl Default for BarLabelConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            position: Anchor::Above,
            font: Font::default(),
            color: "#000".to_string(),
            filter: ValueFormat::Plain,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
}

/// Gradient painted over each bar. The two stops are the bar's fill
/// lightened and darkened by `amount`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientConfig {
    pub enabled: bool,
    pub kind: GradientKind,
    /// `[x1, y1, x2, y2]` as fractions of the bar box.
    pub vector: [f64; 4],
    pub amount: f32,
}

impl Default for GradientConfig {
    fn default() -> Self {
        Self { enabled: true, kind: GradientKind::Linear, vector: [0.0, 0.0, 1.0, 0.0], amount: 0.05 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyle {
    /// A colorset yields a distinct color per dataset.
    pub color: ColorSpec,
    pub border: BarBorder,
    /// Space left on either side of a bar or bar group.
    pub gutter: f64,
    pub opacity: f64,
    pub label: BarLabelConfig,
    pub gradient: GradientConfig,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self {
            color: ColorSpec::Generated(Colorset::default()),
            border: BarBorder::default(),
            gutter: 5.0,
            opacity: 1.0,
            label: BarLabelConfig::default(),
            gradient: GradientConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub width: u32,
    pub height: u32,
    pub bar: BarStyle,
    #[serde(deserialize_with = "bar_gutter")]
    pub gutter: Insets,
    #[serde(deserialize_with = "bar_grid")]
    pub grid: GridConfig,
    pub border: FrameBorder,
    pub text: TextStyle,
    pub stack: bool,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: BAR_HEIGHT,
            bar: BarStyle::default(),
            gutter: Insets::bar(),
            grid: GridConfig::default(),
            border: FrameBorder::default(),
            text: TextStyle::default(),
            stack: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineStyle {
    pub color: ColorSpec,
    pub width: f64,
    /// Curve tension; 0 draws straight segments.
    pub curve: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self { color: ColorSpec::Named(Palette::Blues), width: 4.0, curve: 10.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FillStyle {
    pub color: ColorSpec,
    pub opacity: f64,
}

impl Default for FillStyle {
    fn default() -> Self {
        Self { color: ColorSpec::literal("#039"), opacity: 0.3 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotStyle {
    pub color: String,
    pub stroke: String,
    pub radius: f64,
}

impl Default for DotStyle {
    fn default() -> Self {
        Self { color: "#039".to_string(), stroke: "#fff".to_string(), radius: 4.0 }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub width: u32,
    pub height: u32,
    pub line: LineStyle,
    pub fill: FillStyle,
    #[serde(deserialize_with = "line_gutter")]
    pub gutter: Insets,
    pub dot: DotStyle,
    #[serde(deserialize_with = "line_grid")]
    pub grid: GridConfig,
    #[serde(deserialize_with = "line_border")]
    pub border: FrameBorder,
    pub text: TextStyle,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: LINE_HEIGHT,
            line: LineStyle::default(),
            fill: FillStyle::default(),
            gutter: Insets::line(),
            dot: DotStyle::default(),
            grid: GridConfig::with_color(LINE_GRID_COLOR),
            border: FrameBorder::with_color(LINE_BORDER_COLOR),
            text: TextStyle::default(),
        }
    }
}

// ---- partial sections ---------------------------------------------------------
//
// A nested section given in a document only names the fields it changes; the
// rest come from the owning chart's preset, not from the section type's Default.

#[derive(Default, Deserialize)]
#[serde(default)]
struct InsetsPatch {
    left: Option<u32>,
    right: Option<u32>,
    top: Option<u32>,
    bottom: Option<u32>,
}

impl InsetsPatch {
    fn over(self, base: Insets) -> Insets {
        Insets {
            left: self.left.unwrap_or(base.left),
            right: self.right.unwrap_or(base.right),
            top: self.top.unwrap_or(base.top),
            bottom: self.bottom.unwrap_or(base.bottom),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct GridLinesPatch {
    enabled: Option<bool>,
    lines: Option<usize>,
}

impl GridLinesPatch {
    fn over(self, base: GridLines) -> GridLines {
        GridLines {
            enabled: self.enabled.unwrap_or(base.enabled),
            lines: self.lines.unwrap_or(base.lines),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct GridPatch {
    color: Option<String>,
    horizontal: Option<GridLinesPatch>,
    vertical: Option<GridLinesPatch>,
    label_x: Option<LabelFormat>,
    label_y: Option<ValueFormat>,
    max_y: Option<AxisMax>,
}

impl GridPatch {
    fn over(self, base: GridConfig) -> GridConfig {
        GridConfig {
            color: self.color.unwrap_or(base.color),
            horizontal: self.horizontal.map_or(base.horizontal, |p| p.over(base.horizontal)),
            vertical: self.vertical.map_or(base.vertical, |p| p.over(base.vertical)),
            label_x: self.label_x.unwrap_or(base.label_x),
            label_y: self.label_y.unwrap_or(base.label_y),
            max_y: self.max_y.unwrap_or(base.max_y),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct FrameBorderPatch {
    color: Option<String>,
    width: Option<f64>,
}

impl FrameBorderPatch {
    fn over(self, base: FrameBorder) -> FrameBorder {
        FrameBorder {
            color: self.color.unwrap_or(base.color),
            width: self.width.unwrap_or(base.width),
        }
    }
}

fn bar_gutter<'de, D: Deserializer<'de>>(d: D) -> Result<Insets, D::Error> {
    InsetsPatch::deserialize(d).map(|p| p.over(Insets::bar()))
}

fn line_gutter<'de, D: Deserializer<'de>>(d: D) -> Result<Insets, D::Error> {
    InsetsPatch::deserialize(d).map(|p| p.over(Insets::line()))
}

fn bar_grid<'de, D: Deserializer<'de>>(d: D) -> Result<GridConfig, D::Error> {
    GridPatch::deserialize(d).map(|p| p.over(GridConfig::with_color(BAR_GRID_COLOR)))
}

fn line_grid<'de, D: Deserializer<'de>>(d: D) -> Result<GridConfig, D::Error> {
    GridPatch::deserialize(d).map(|p| p.over(GridConfig::with_color(LINE_GRID_COLOR)))
}

fn line_border<'de, D: Deserializer<'de>>(d: D) -> Result<FrameBorder, D::Error> {
    FrameBorderPatch::deserialize(d).map(|p| p.over(FrameBorder::with_color(LINE_BORDER_COLOR)))
}
