// File: crates/slate-core/tests/draw.rs
// Purpose: End-to-end draw calls into a recording scene: ordering, z-order, errors and determinism.

use slate_core::color::Color;
use slate_core::config::{BarChartConfig, LineChartConfig};
use slate_core::error::ConfigError;
use slate_core::geometry::DrawBox;
use slate_core::scene::{Primitive, Scene};
use slate_core::surface::{Style, Surface};
use slate_core::{BarChart, Dataset, LineChart};

fn bar_chart(stack: bool) -> BarChart {
    let cfg = BarChartConfig { stack, ..BarChartConfig::default() };
    BarChart::new(cfg)
        .with_dataset(Dataset::with_data("a", [("A", 10.0), ("B", 20.0)]))
        .with_dataset(Dataset::with_data("b", [("A", 5.0), ("B", 7.5)]))
}

fn line_chart() -> LineChart {
    LineChart::default()
        .with_dataset(Dataset::from_values("x", &[1.0, 3.0, 2.0, 4.0]))
        .with_dataset(Dataset::from_values("y", &[2.0, 2.0, 1.0, 0.5]))
}

fn kinds(scene: &Scene) -> Vec<&'static str> {
    scene.primitives().map(Primitive::kind).collect()
}

#[test]
fn bar_chart_draws_grid_labels_bars_and_frame_on_top() {
    let mut scene = Scene::new();
    bar_chart(false).draw(&mut scene).expect("draw");

    // 11 gridlines, frame, 11 value labels, 4 bars, 2 category labels
    assert_eq!(scene.len(), 11 + 1 + 11 + 4 + 2);
    let k = kinds(&scene);
    assert!(k[..11].iter().all(|&p| p == "path"));
    assert!(k[11..22].iter().all(|&p| p == "text"));

    let frame = scene.primitives().last().unwrap();
    match frame {
        Primitive::Rect { bbox, style } => {
            assert_eq!(*bbox, DrawBox::new(100.0, 20.0, 670.0, 250.0));
            assert_eq!(style.stroke.unwrap().color, Color::parse("#bbb").unwrap());
            assert!(style.fill.is_none());
        }
        other => panic!("expected frame rect on top, got {other:?}"),
    }

    let texts: Vec<&str> = scene.texts().map(|t| t.content.as_str()).collect();
    assert_eq!(texts.first(), Some(&"20.0"));
    assert_eq!(texts[10], "0.0");
    assert_eq!(&texts[11..], &["A", "B"]);
}

#[test]
fn category_labels_follow_first_dataset_bars() {
    let mut scene = Scene::new();
    bar_chart(true).draw(&mut scene).unwrap();
    // Skip grid and value labels; then bar A0, label A, bar B0, label B, bar A1, bar B1.
    let k = kinds(&scene);
    assert_eq!(&k[22..], &["rect", "text", "rect", "text", "rect", "rect", "rect"]);
}

#[test]
fn value_labels_are_emitted_after_each_bar() {
    let mut cfg = BarChartConfig::default();
    cfg.bar.label.enabled = true;
    let chart = BarChart::new(cfg).with_dataset(Dataset::with_data("a", [("A", 10.0), ("B", 20.0)]));
    let mut scene = Scene::new();
    chart.draw(&mut scene).unwrap();
    let k = kinds(&scene);
    assert_eq!(&k[22..], &["rect", "text", "text", "rect", "text", "text", "rect"]);
}

#[test]
fn line_chart_raises_hover_zones_to_front() {
    let mut scene = Scene::new();
    line_chart().draw(&mut scene).expect("draw");

    // 11 gridlines, frame, 11 value labels, then per dataset 2 paths + 4 dots; 8 hover zones last
    assert_eq!(scene.len(), 11 + 1 + 11 + 2 * (2 + 4) + 8);
    let tail: Vec<_> = scene.primitives().skip(scene.len() - 8).collect();
    for p in tail {
        match p {
            Primitive::Rect { bbox, style } => {
                assert_eq!(style.opacity, 0.0);
                assert_eq!(bbox.height, 210.0);
            }
            other => panic!("expected hover zone, got {other:?}"),
        }
    }
    let circles = scene.primitives().filter(|p| matches!(p, Primitive::Circle { .. })).count();
    assert_eq!(circles, 8);
}

#[test]
fn redraw_clears_and_is_deterministic() {
    let chart = bar_chart(true);
    let mut first = Scene::new();
    chart.draw(&mut first).unwrap();
    let mut second = Scene::new();
    chart.draw(&mut second).unwrap();
    chart.draw(&mut second).unwrap();
    assert_eq!(first, second);

    let lines = line_chart();
    let mut a = Scene::new();
    let mut b = Scene::new();
    lines.draw(&mut a).unwrap();
    lines.draw(&mut b).unwrap();
    assert_eq!(a, b);
}

#[test]
fn configuration_errors_leave_the_surface_untouched() {
    let mut scene = Scene::new();
    let marker = scene.rect(DrawBox::new(0.0, 0.0, 1.0, 1.0), &Style::default());

    let err = BarChart::new(BarChartConfig::default()).draw(&mut scene).unwrap_err();
    assert_eq!(err, ConfigError::NoDatasets);
    assert_eq!(scene.len(), 1);
    assert!(scene.get(marker).is_some());

    let mismatched = LineChart::new(LineChartConfig::default())
        .with_dataset(Dataset::from_values("a", &[1.0, 2.0]))
        .with_dataset(Dataset::from_values("b", &[1.0, 2.0, 3.0]));
    assert!(matches!(mismatched.draw(&mut scene), Err(ConfigError::MismatchedLengths { .. })));
    assert_eq!(scene.len(), 1);
}

#[test]
fn to_front_keeps_relative_order() {
    let mut scene = Scene::new();
    let style = Style::default();
    let a = scene.rect(DrawBox::new(0.0, 0.0, 1.0, 1.0), &style);
    let b = scene.rect(DrawBox::new(1.0, 0.0, 1.0, 1.0), &style);
    let c = scene.rect(DrawBox::new(2.0, 0.0, 1.0, 1.0), &style);
    scene.to_front(&[c, a]);
    let order: Vec<_> = scene.elements().iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![b, a, c]);
}

#[test]
fn long_line_chart_raises_every_hover_zone() {
    let values: Vec<f64> = (0..5_000).map(|i| (i % 17) as f64 + 1.0).collect();
    let chart = LineChart::new(LineChartConfig { width: 20_000, ..LineChartConfig::default() })
        .with_dataset(Dataset::from_values("long", &values));
    let mut scene = Scene::new();
    chart.draw(&mut scene).expect("draw");

    let tail: Vec<&Primitive> = scene.primitives().skip(scene.len() - values.len()).collect();
    assert!(tail.iter().all(|p| matches!(p, Primitive::Rect { style, .. } if style.opacity == 0.0)));
    assert!(matches!(
        scene.primitives().nth(scene.len() - values.len() - 1),
        Some(Primitive::Circle { .. })
    ));
}
