// File: crates/slate-core/src/surface.rs
// Summary: Drawing-surface seam: primitive styles, path data, and the `Surface` trait charts draw through.

use crate::color::Color;
use crate::geometry::DrawBox;
use crate::text::{Align, Font};

/// Handle to a primitive drawn on a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

/// Linear gradient; endpoints are fractions of the shape's bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct Gradient {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub stops: Vec<Color>,
}

/// Paint attributes shared by rectangles, paths and circles.
#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
    pub opacity: f64,
    pub gradient: Option<Gradient>,
    pub round_join: bool,
}

impl Default for Style {
    fn default() -> Self {
        Self { fill: None, stroke: None, opacity: 1.0, gradient: None, round_join: false }
    }
}

impl Style {
    pub fn filled(color: Color) -> Self {
        Self { fill: Some(color), ..Self::default() }
    }

    pub fn stroked(color: Color, width: f64) -> Self {
        Self { stroke: Some(Stroke { color, width }), ..Self::default() }
    }

    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke = Some(Stroke { color, width });
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathSegment {
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    CurveTo { c1: (f64, f64), c2: (f64, f64), x: f64, y: f64 },
    Close,
}

/// Path builder tracking its current point.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    segments: Vec<PathSegment>,
    last: (f64, f64),
}

impl PathData {
    pub fn new() -> Self { Self::default() }

    pub fn segments(&self) -> &[PathSegment] { &self.segments }

    /// Current point (end of the last segment).
    pub fn last(&self) -> (f64, f64) { self.last }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::MoveTo { x, y });
        self.last = (x, y);
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::LineTo { x, y });
        self.last = (x, y);
        self
    }

    pub fn curve_to(&mut self, c1: (f64, f64), c2: (f64, f64), x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::CurveTo { c1, c2, x, y });
        self.last = (x, y);
        self
    }

    /// Smoothed connection to `(x, y)`: a cubic whose control points sit
    /// `tension` pixels right of the current point and left of the target,
    /// each at its own height. Zero tension draws a straight segment.
    pub fn smooth_to(&mut self, x: f64, y: f64, tension: f64) -> &mut Self {
        if tension == 0.0 {
            return self.line_to(x, y);
        }
        let (x0, y0) = self.last;
        self.curve_to((x0 + tension, y0), (x - tension, y), x, y)
    }

    pub fn close(&mut self) -> &mut Self {
        self.segments.push(PathSegment::Close);
        self
    }
}

/// A text run positioned inside a box.
#[derive(Clone, Debug, PartialEq)]
pub struct TextSpec {
    pub content: String,
    pub bbox: DrawBox,
    pub align: Align,
    pub font: Font,
    pub color: Color,
}

/// Vector drawing surface. Every call returns a handle; primitives stack in
/// call order unless raised with `to_front`.
pub trait Surface {
    /// Drop every primitive drawn so far.
    fn clear(&mut self);
    fn rect(&mut self, bbox: DrawBox, style: &Style) -> ElementId;
    fn path(&mut self, path: &PathData, style: &Style) -> ElementId;
    fn circle(&mut self, cx: f64, cy: f64, radius: f64, style: &Style) -> ElementId;
    fn text(&mut self, text: &TextSpec) -> ElementId;
    /// Raise a group of primitives above everything else, keeping their relative order.
    fn to_front(&mut self, ids: &[ElementId]);
}
