// File: crates/slate-render-skia/src/text.rs
// Summary: Text shaper using Skia textlayout; lays a run out inside its box with the run's alignment.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextAlign, TextStyle};
use slate_core::text::Align;
use slate_core::TextSpec;

use crate::to_skia_color;

/// Families tried after the requested one.
const FALLBACK_FAMILIES: [&str; 5] = ["Helvetica", "Arial", "Roboto", "DejaVu Sans", "sans-serif"];

pub struct TextShaper {
    fonts: FontCollection,
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        // Use system manager fallback
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(spec: &TextSpec) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size((spec.font.size_px() as f32).max(1.0));
        ts.set_color(to_skia_color(spec.color, 1.0));
        let mut families = vec![spec.font.family.as_str()];
        families.extend(FALLBACK_FAMILIES);
        ts.set_font_families(&families[..]);
        ts
    }

    /// Paragraph wrapped to the run's box width and aligned within it.
    pub fn layout(&self, spec: &TextSpec) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(match spec.align {
            Align::Left => TextAlign::Left,
            Align::Center => TextAlign::Center,
            Align::Right => TextAlign::Right,
        });
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(spec));
        builder.add_text(&spec.content);
        let mut paragraph = builder.build();
        paragraph.layout((spec.bbox.width as f32).max(1.0));
        paragraph
    }

    pub fn measure_width(&self, spec: &TextSpec) -> f32 {
        self.layout(spec).longest_line()
    }

    /// Draw `spec` with its first line starting at the top of its box.
    pub fn draw(&self, canvas: &skia::Canvas, spec: &TextSpec) {
        let p = self.layout(spec);
        p.paint(canvas, (spec.bbox.x as f32, spec.bbox.y as f32));
    }
}
