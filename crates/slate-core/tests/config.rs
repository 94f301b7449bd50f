// File: crates/slate-core/tests/config.rs
// Purpose: Configuration defaults and partial-document merges over them.

use slate_core::color::{BorderColor, ColorSpec, Colorset, Palette, Vary};
use slate_core::config::{BarChartConfig, LineChartConfig};
use slate_core::label::Anchor;
use slate_core::scale::AxisMax;
use slate_core::text::{Font, ValueFormat};
use slate_core::types::Insets;

#[test]
fn bar_defaults() {
    let cfg = BarChartConfig::default();
    assert_eq!((cfg.width, cfg.height), (800, 300));
    assert_eq!(cfg.gutter, Insets::new(100, 30, 20, 30));
    assert_eq!(cfg.grid.max_y, AxisMax::Auto);
    assert!(!cfg.stack);
    assert!(!cfg.bar.label.enabled);
    assert_eq!(cfg.bar.label.position, Anchor::Above);
    assert_eq!(cfg.bar.gutter, 5.0);
    assert_eq!(cfg.bar.border.color, BorderColor::Auto);
    assert_eq!(cfg.grid.horizontal.bands(), 10);
    assert_eq!(cfg.grid.vertical.bands(), 0);
    assert_eq!(cfg.grid.label_y.apply(2.0), "2.0");
}

#[test]
fn line_defaults() {
    let cfg = LineChartConfig::default();
    assert_eq!((cfg.width, cfg.height), (800, 250));
    assert_eq!(cfg.gutter, Insets::new(30, 30, 20, 20));
    assert_eq!(cfg.line.color, ColorSpec::Named(Palette::Blues));
    assert_eq!((cfg.line.width, cfg.line.curve), (4.0, 10.0));
    assert_eq!(cfg.grid.color, "#ddd");
    assert_eq!(cfg.border.color, "#999");
}

#[test]
fn partial_document_merges_over_defaults() {
    let cfg: BarChartConfig = serde_json::from_str(
        r#"{
            "stack": true,
            "grid": { "max_y": 50 },
            "bar": { "label": { "enabled": true, "position": "top" }, "border": { "width": 1 } }
        }"#,
    )
    .unwrap();
    assert!(cfg.stack);
    assert_eq!(cfg.grid.max_y, AxisMax::Fixed(50.0));
    assert_eq!(cfg.grid.color, "#eee");
    assert!(cfg.bar.label.enabled);
    assert_eq!(cfg.bar.label.position, Anchor::Top);
    assert_eq!(cfg.bar.label.font.size_px(), 12.0);
    assert_eq!(cfg.bar.border.width, 1.0);
    assert_eq!(cfg.bar.border.color, BorderColor::Auto);
    assert_eq!(cfg.width, 800);
}

#[test]
fn color_specs_deserialize_by_shape() {
    let cfg: BarChartConfig = serde_json::from_str(r##"{ "bar": { "color": "#123456" } }"##).unwrap();
    assert_eq!(cfg.bar.color, ColorSpec::Literal("#123456".into()));

    let cfg: BarChartConfig = serde_json::from_str(r#"{ "bar": { "color": "purples" } }"#).unwrap();
    assert_eq!(cfg.bar.color, ColorSpec::Named(Palette::Purples));

    let cfg: BarChartConfig =
        serde_json::from_str(r#"{ "bar": { "color": { "hue": 0.5, "vary": "hue" } } }"#).unwrap();
    assert_eq!(
        cfg.bar.color,
        ColorSpec::Generated(Colorset { hue: 0.5, vary: Vary::Hue, ..Colorset::default() })
    );

    let cfg: BarChartConfig =
        serde_json::from_str(r#"{ "bar": { "border": { "width": 2, "color": "navy" } } }"#).unwrap();
    assert_eq!(cfg.bar.border.color, BorderColor::Spec(ColorSpec::Literal("navy".into())));
}

#[test]
fn value_formats() {
    assert_eq!(ValueFormat::Plain.apply(10.0), "10");
    assert_eq!(ValueFormat::Plain.apply(2.5), "2.5");
    assert_eq!(ValueFormat::Fixed(1).apply(12.26), "12.3");
    let cfg: BarChartConfig =
        serde_json::from_str(r#"{ "grid": { "label_y": { "fixed": 3 } } }"#).unwrap();
    assert_eq!(cfg.grid.label_y, ValueFormat::Fixed(3));
}

#[test]
fn partial_gutter_merges_over_the_chart_preset() {
    let cfg: LineChartConfig = serde_json::from_str(r#"{ "gutter": { "left": 50 } }"#).unwrap();
    assert_eq!(cfg.gutter, Insets::new(50, 30, 20, 20));

    let cfg: BarChartConfig = serde_json::from_str(r#"{ "gutter": { "bottom": 40 } }"#).unwrap();
    assert_eq!(cfg.gutter, Insets::new(100, 30, 20, 40));

    let cfg: LineChartConfig =
        serde_json::from_str(r#"{ "gutter": { "left": 50, "right": 10, "top": 5, "bottom": 15 } }"#).unwrap();
    assert_eq!(cfg.gutter, Insets::new(50, 10, 5, 15));
}

#[test]
fn partial_line_sections_keep_line_defaults() {
    let cfg: LineChartConfig = serde_json::from_str(r#"{ "grid": { "max_y": 50 } }"#).unwrap();
    assert_eq!(cfg.grid.max_y, AxisMax::Fixed(50.0));
    assert_eq!(cfg.grid.color, "#ddd");
    assert_eq!(cfg.grid.label_y, ValueFormat::Fixed(1));

    let cfg: LineChartConfig = serde_json::from_str(r#"{ "border": { "width": 2 } }"#).unwrap();
    assert_eq!(cfg.border.width, 2.0);
    assert_eq!(cfg.border.color, "#999");
}

#[test]
fn partial_gridlines_keep_their_direction_defaults() {
    let cfg: BarChartConfig = serde_json::from_str(r#"{ "grid": { "vertical": { "enabled": true } } }"#).unwrap();
    assert!(cfg.grid.vertical.enabled);
    assert_eq!(cfg.grid.vertical.lines, 0);
    assert_eq!(cfg.grid.horizontal.bands(), 10);
    assert_eq!(cfg.grid.color, "#eee");
}

#[test]
fn palette_names_match_in_any_case() {
    let cfg: LineChartConfig = serde_json::from_str(r#"{ "line": { "color": "Greens" } }"#).unwrap();
    assert_eq!(cfg.line.color, ColorSpec::Named(Palette::Greens));
    assert_eq!(cfg.line.color.resolve(2).unwrap().len(), 2);

    let cfg: BarChartConfig = serde_json::from_str(r#"{ "bar": { "color": "BLUES" } }"#).unwrap();
    assert_eq!(cfg.bar.color, ColorSpec::Named(Palette::Blues));
    assert_eq!(serde_json::to_string(&Palette::Blues).unwrap(), r#""blues""#);
}

#[test]
fn font_sizes_keep_fractions() {
    assert_eq!(Font::new("Arial", "12.5px").size_px(), 12.5);
    assert_eq!(Font::new("Arial", " 9px").size_px(), 9.0);
    assert_eq!(Font::new("Arial", "large").size_px(), 0.0);
}
