// File: crates/slate-render-skia/tests/smoke.rs
// Purpose: End-to-end render smoke tests: PNG output, RGBA buffer shape and a few pixels.

use slate_core::config::BarChartConfig;
use slate_core::{BarChart, Dataset, LineChart, Scene};
use slate_render_skia::SkiaSurface;

fn bar_chart() -> BarChart {
    BarChart::new(BarChartConfig::default()).with_dataset(Dataset::with_data("ab", [("A", 10.0), ("B", 20.0)]))
}

#[test]
fn render_smoke_png() {
    let chart = bar_chart();
    let mut surface = SkiaSurface::new(chart.config().width, chart.config().height);
    chart.draw(&mut surface).expect("draw");

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    surface.render_to_png(&out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    // Also verify in-memory API works
    let bytes = surface.render_to_png_bytes().expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let img = image::load_from_memory(&bytes).expect("decode png");
    assert_eq!((img.width(), img.height()), (800, 300));
}

#[test]
fn render_rgba8_buffer() {
    let chart = bar_chart();
    let mut surface = SkiaSurface::new(800, 300);
    chart.draw(&mut surface).expect("draw");

    let (px, w, h, stride) = surface.render_to_rgba8().expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    let at = |x: usize, y: usize| {
        let i = y * stride + x * 4;
        [px[i], px[i + 1], px[i + 2], px[i + 3]]
    };
    // Background in the top-left corner is opaque white.
    assert_eq!(at(2, 2), [255, 255, 255, 255]);
    // Middle of the tallest bar (draw box 438,20 330x250) is painted.
    let bar = at(603, 145);
    assert_eq!(bar[3], 255);
    assert_ne!(&bar[..3], &[255, 255, 255]);
}

#[test]
fn surface_records_the_same_scene_as_a_plain_scene() {
    let line = LineChart::default().with_dataset(Dataset::from_values("x", &[1.0, 3.0, 2.0]));

    let mut scene = Scene::new();
    line.draw(&mut scene).expect("draw scene");
    let mut surface = SkiaSurface::new(800, 250);
    line.draw(&mut surface).expect("draw surface");

    assert_eq!(surface.scene(), &scene);
}

#[test]
fn redraw_replaces_previous_primitives() {
    let chart = bar_chart();
    let mut surface = SkiaSurface::new(800, 300);
    chart.draw(&mut surface).expect("first draw");
    let first = surface.scene().len();
    chart.draw(&mut surface).expect("second draw");
    assert_eq!(surface.scene().len(), first);
}
