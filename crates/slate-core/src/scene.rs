// File: crates/slate-core/src/scene.rs
// Summary: In-memory display list implementing `Surface`; used headless, by tests, and by rasterizers.

use std::collections::HashSet;

use tracing::trace;

use crate::geometry::DrawBox;
use crate::surface::{ElementId, PathData, Style, Surface, TextSpec};

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Rect { bbox: DrawBox, style: Style },
    Path { path: PathData, style: Style },
    Circle { cx: f64, cy: f64, radius: f64, style: Style },
    Text(TextSpec),
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Rect { .. } => "rect",
            Primitive::Path { .. } => "path",
            Primitive::Circle { .. } => "circle",
            Primitive::Text(_) => "text",
        }
    }
}

/// Recorded primitives in paint order (back to front).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    elements: Vec<(ElementId, Primitive)>,
    next_id: usize,
}

impl Scene {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.elements.len() }

    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    /// Primitives in paint order.
    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.elements.iter().map(|(_, p)| p)
    }

    /// Primitives with their handles, in paint order.
    pub fn elements(&self) -> &[(ElementId, Primitive)] { &self.elements }

    pub fn get(&self, id: ElementId) -> Option<&Primitive> {
        self.elements.iter().find(|(e, _)| *e == id).map(|(_, p)| p)
    }

    pub fn rects(&self) -> impl Iterator<Item = (&DrawBox, &Style)> {
        self.primitives().filter_map(|p| match p {
            Primitive::Rect { bbox, style } => Some((bbox, style)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextSpec> {
        self.primitives().filter_map(|p| match p {
            Primitive::Text(t) => Some(t),
            _ => None,
        })
    }

    fn push(&mut self, primitive: Primitive) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        trace!(id = id.0, kind = primitive.kind(), "record primitive");
        self.elements.push((id, primitive));
        id
    }
}

impl Surface for Scene {
    fn clear(&mut self) {
        self.elements.clear();
        self.next_id = 0;
    }

    fn rect(&mut self, bbox: DrawBox, style: &Style) -> ElementId {
        self.push(Primitive::Rect { bbox, style: style.clone() })
    }

    fn path(&mut self, path: &PathData, style: &Style) -> ElementId {
        self.push(Primitive::Path { path: path.clone(), style: style.clone() })
    }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, style: &Style) -> ElementId {
        self.push(Primitive::Circle { cx, cy, radius, style: style.clone() })
    }

    fn text(&mut self, text: &TextSpec) -> ElementId {
        self.push(Primitive::Text(text.clone()))
    }

    fn to_front(&mut self, ids: &[ElementId]) {
        let ids: HashSet<ElementId> = ids.iter().copied().collect();
        let (raised, rest): (Vec<_>, Vec<_>) =
            self.elements.drain(..).partition(|(id, _)| ids.contains(id));
        self.elements = rest;
        self.elements.extend(raised);
    }
}
