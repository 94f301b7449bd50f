// File: crates/slate-core/src/text.rs
// Summary: Font/text style model and the label formatting filters applied before text is drawn.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Font family plus a CSS-like size string such as `"12px"`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    pub family: String,
    pub size: String,
}

impl Font {
    pub fn new(family: impl Into<String>, size: impl Into<String>) -> Self {
        Self { family: family.into(), size: size.into() }
    }

    /// Size in pixels taken from the leading number of `size` (`"12px"`, `"12.5px"`); 0 when there is none.
    pub fn size_px(&self) -> f64 {
        let number: String = self.size.trim().chars().take_while(|c| c.is_ascii_digit() || *c == '.').collect();
        number.parse::<f64>().unwrap_or(0.0)
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new("Lucida Grande", "12px")
    }
}

/// Font and color used for a class of text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub font: Font,
    pub color: String,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self { font: Font::default(), color: "#000".to_string() }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

/// Shared formatting callback for numbers.
#[derive(Clone)]
pub struct ValueFn(pub Arc<dyn Fn(f64) -> String + Send + Sync>);

impl fmt::Debug for ValueFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("ValueFn(..)") }
}

impl PartialEq for ValueFn {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

/// Shared formatting callback for category labels.
#[derive(Clone)]
pub struct LabelFn(pub Arc<dyn Fn(&str) -> String + Send + Sync>);

impl fmt::Debug for LabelFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str("LabelFn(..)") }
}

impl PartialEq for LabelFn {
    fn eq(&self, other: &Self) -> bool { Arc::ptr_eq(&self.0, &other.0) }
}

/// Filter turning a value into display text.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueFormat {
    /// Shortest round-trip representation (`10`, `2.5`).
    #[default]
    Plain,
    /// Fixed number of decimals.
    Fixed(usize),
    #[serde(skip)]
    Custom(ValueFn),
}

impl ValueFormat {
    pub fn custom(f: impl Fn(f64) -> String + Send + Sync + 'static) -> Self {
        ValueFormat::Custom(ValueFn(Arc::new(f)))
    }

    pub fn apply(&self, value: f64) -> String {
        match self {
            ValueFormat::Plain => format!("{value}"),
            ValueFormat::Fixed(decimals) => format!("{value:.decimals$}"),
            ValueFormat::Custom(f) => (f.0)(value),
        }
    }
}

/// Filter applied to category labels.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelFormat {
    #[default]
    Identity,
    #[serde(skip)]
    Custom(LabelFn),
}

impl LabelFormat {
    pub fn custom(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        LabelFormat::Custom(LabelFn(Arc::new(f)))
    }

    pub fn apply(&self, label: &str) -> String {
        match self {
            LabelFormat::Identity => label.to_string(),
            LabelFormat::Custom(f) => (f.0)(label),
        }
    }
}
