// File: crates/slate-render-skia/src/lib.rs
// Summary: Skia-backed `Surface`: records chart primitives, then rasterizes them to PNG or RGBA8 on a CPU surface.

pub mod text;

use anyhow::Result;
use skia_safe as skia;
use slate_core::surface::{Gradient, PathSegment};
use slate_core::{Color, DrawBox, ElementId, PathData, Primitive, Scene, Style, Surface, TextSpec};
use tracing::debug;

pub use text::TextShaper;

/// Convert a chart color plus opacity into a Skia color.
pub fn to_skia_color(color: Color, opacity: f64) -> skia::Color {
    let (r, g, b) = color.components();
    let a = (opacity.clamp(0.0, 1.0) * 255.0).round() as u8;
    skia::Color::from_argb(a, r, g, b)
}

/// Drawing surface of a fixed pixel size. Primitives are recorded as they are
/// drawn and painted in recorded order on each render call.
pub struct SkiaSurface {
    width: i32,
    height: i32,
    background: skia::Color,
    scene: Scene,
    shaper: TextShaper,
}

impl SkiaSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            background: skia::Color::WHITE,
            scene: Scene::new(),
            shaper: TextShaper::new(),
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = to_skia_color(color, 1.0);
        self
    }

    pub fn width(&self) -> u32 { self.width as u32 }

    pub fn height(&self) -> u32 { self.height as u32 }

    /// Primitives recorded so far, in paint order.
    pub fn scene(&self) -> &Scene { &self.scene }

    fn rasterize(&self) -> Result<skia::Surface> {
        let mut surface = skia::surfaces::raster_n32_premul((self.width, self.height))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface {}x{}", self.width, self.height))?;
        let canvas = surface.canvas();
        canvas.clear(self.background);
        for primitive in self.scene.primitives() {
            self.paint_primitive(canvas, primitive);
        }
        debug!(width = self.width, height = self.height, primitives = self.scene.len(), "rasterized scene");
        Ok(surface)
    }

    fn paint_primitive(&self, canvas: &skia::Canvas, primitive: &Primitive) {
        match primitive {
            Primitive::Rect { bbox, style } => {
                let rect = to_skia_rect(bbox);
                for paint in paints(style, bbox) {
                    canvas.draw_rect(rect, &paint);
                }
            }
            Primitive::Path { path, style } => {
                let sk_path = to_skia_path(path);
                let bounds = sk_path.bounds();
                let bbox = DrawBox::new(
                    bounds.left as f64,
                    bounds.top as f64,
                    bounds.width() as f64,
                    bounds.height() as f64,
                );
                for paint in paints(style, &bbox) {
                    canvas.draw_path(&sk_path, &paint);
                }
            }
            Primitive::Circle { cx, cy, radius, style } => {
                let bbox = DrawBox::new(cx - radius, cy - radius, radius * 2.0, radius * 2.0);
                for paint in paints(style, &bbox) {
                    canvas.draw_circle((*cx as f32, *cy as f32), *radius as f32, &paint);
                }
            }
            Primitive::Text(spec) => self.shaper.draw(canvas, spec),
        }
    }

    /// Render the recorded scene and encode it as PNG bytes.
    pub fn render_to_png_bytes(&self) -> Result<Vec<u8>> {
        let mut surface = self.rasterize()?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the recorded scene to a PNG at `output_png_path`, creating parent directories.
    pub fn render_to_png(&self, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes()?;
        let path = output_png_path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        debug!(path = %path.display(), "wrote png");
        Ok(())
    }

    /// Render into unpremultiplied RGBA8 pixels; returns `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.rasterize()?;
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            anyhow::bail!("read_pixels failed");
        }
        Ok((pixels, self.width as u32, self.height as u32, row_bytes))
    }
}

impl Surface for SkiaSurface {
    fn clear(&mut self) { self.scene.clear(); }

    fn rect(&mut self, bbox: DrawBox, style: &Style) -> ElementId { self.scene.rect(bbox, style) }

    fn path(&mut self, path: &PathData, style: &Style) -> ElementId { self.scene.path(path, style) }

    fn circle(&mut self, cx: f64, cy: f64, radius: f64, style: &Style) -> ElementId {
        self.scene.circle(cx, cy, radius, style)
    }

    fn text(&mut self, text: &TextSpec) -> ElementId { self.scene.text(text) }

    fn to_front(&mut self, ids: &[ElementId]) { self.scene.to_front(ids); }
}

// ---- helpers ----------------------------------------------------------------

fn to_skia_rect(b: &DrawBox) -> skia::Rect {
    skia::Rect::from_xywh(b.x as f32, b.y as f32, b.width as f32, b.height as f32)
}

fn to_skia_path(path: &PathData) -> skia::Path {
    let mut p = skia::Path::new();
    for segment in path.segments() {
        match *segment {
            PathSegment::MoveTo { x, y } => {
                p.move_to((x as f32, y as f32));
            }
            PathSegment::LineTo { x, y } => {
                p.line_to((x as f32, y as f32));
            }
            PathSegment::CurveTo { c1, c2, x, y } => {
                p.cubic_to((c1.0 as f32, c1.1 as f32), (c2.0 as f32, c2.1 as f32), (x as f32, y as f32));
            }
            PathSegment::Close => {
                p.close();
            }
        }
    }
    p
}

fn gradient_shader(g: &Gradient, bbox: &DrawBox, opacity: f64) -> Option<skia::Shader> {
    let at = |(fx, fy): (f64, f64)| {
        skia::Point::new((bbox.x + bbox.width * fx) as f32, (bbox.y + bbox.height * fy) as f32)
    };
    let colors: Vec<skia::Color> = g.stops.iter().map(|&c| to_skia_color(c, opacity)).collect();
    skia::Shader::linear_gradient((at(g.start), at(g.end)), colors.as_slice(), None, skia::TileMode::Clamp, None, None)
}

/// Fill paint (if any) followed by stroke paint (if any); `bbox` anchors gradients.
fn paints(style: &Style, bbox: &DrawBox) -> Vec<skia::Paint> {
    let mut out = Vec::with_capacity(2);

    if let Some(fill) = style.fill {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Fill);
        paint.set_color(to_skia_color(fill, style.opacity));
        if let Some(shader) = style.gradient.as_ref().and_then(|g| gradient_shader(g, bbox, style.opacity)) {
            paint.set_shader(shader);
        }
        out.push(paint);
    }

    if let Some(stroke) = style.stroke {
        if stroke.width > 0.0 {
            let mut paint = skia::Paint::default();
            paint.set_anti_alias(true);
            paint.set_style(skia::paint::Style::Stroke);
            paint.set_stroke_width(stroke.width as f32);
            paint.set_color(to_skia_color(stroke.color, style.opacity));
            if style.round_join {
                paint.set_stroke_join(skia::paint::Join::Round);
                paint.set_stroke_cap(skia::paint::Cap::Round);
            }
            out.push(paint);
        }
    }

    out
}
