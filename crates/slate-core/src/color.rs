// File: crates/slate-core/src/color.rs
// Summary: Color parsing/shading and color specifications (literal, named palette, generated colorset).

use std::fmt;

use palette::{FromColor, Hsl, Srgb};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// A concrete 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color(Srgb<u8>);

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(Srgb::new(r, g, b))
    }

    /// Parse `#rgb`, `#rrggbb` or a CSS color name.
    pub fn parse(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('#') {
            return trimmed
                .parse::<Srgb<u8>>()
                .map(Self)
                .map_err(|_| ConfigError::InvalidColor(s.to_string()));
        }
        palette::named::from_str(&trimmed.to_ascii_lowercase())
            .map(Self)
            .ok_or_else(|| ConfigError::InvalidColor(s.to_string()))
    }

    pub fn from_hsl(hue_turns: f32, saturation: f32, lightness: f32) -> Self {
        let hsl: Hsl = Hsl::new(hue_turns.rem_euclid(1.0) * 360.0, saturation.clamp(0.0, 1.0), lightness.clamp(0.0, 1.0));
        Self(Srgb::<f32>::from_color(hsl).into_format())
    }

    fn to_hsl(self) -> Hsl {
        Hsl::from_color(self.0.into_format::<f32>())
    }

    fn shift_lightness(self, delta: f32) -> Self {
        let mut hsl = self.to_hsl();
        hsl.lightness = (hsl.lightness + delta).clamp(0.0, 1.0);
        Self(Srgb::<f32>::from_color(hsl).into_format())
    }

    /// Same hue, lightness reduced by `amount` (0..1).
    pub fn darker_by(self, amount: f32) -> Self { self.shift_lightness(-amount) }

    /// Same hue, lightness increased by `amount` (0..1).
    pub fn lighter_by(self, amount: f32) -> Self { self.shift_lightness(amount) }

    pub fn components(self) -> (u8, u8, u8) {
        (self.0.red, self.0.green, self.0.blue)
    }

    pub fn to_hex(self) -> String {
        let (r, g, b) = self.components();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Which HSL channel a colorset spreads across its colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vary {
    Hue,
    Saturation,
    Lightness,
}

/// Deterministic generator of `n` distinct colors around a base hue.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Colorset {
    /// Base hue in turns (0..1).
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
    pub vary: Vary,
}

impl Default for Colorset {
    fn default() -> Self {
        Self { hue: 0.25, saturation: 0.6, lightness: 0.5, vary: Vary::Lightness }
    }
}

/// Evenly spread `k` of `n` over `[lo, hi]`; a lone value sits in the middle.
fn spread(k: usize, n: usize, lo: f32, hi: f32) -> f32 {
    if n <= 1 {
        return (lo + hi) * 0.5;
    }
    lo + (hi - lo) * k as f32 / (n - 1) as f32
}

impl Colorset {
    /// The k-th color of a set bound to `n` datasets. Stable for a given `n`.
    pub fn color(&self, k: usize, n: usize) -> Color {
        match self.vary {
            Vary::Hue => Color::from_hsl(self.hue + k as f32 / n.max(1) as f32, self.saturation, self.lightness),
            Vary::Saturation => Color::from_hsl(self.hue, spread(k, n, 0.3, 0.9), self.lightness),
            Vary::Lightness => Color::from_hsl(self.hue, self.saturation, spread(k, n, 0.35, 0.75)),
        }
    }

    pub fn generate(&self, n: usize) -> Vec<Color> {
        (0..n).map(|k| self.color(k, n)).collect()
    }
}

/// Built-in colorsets addressable by name; names match in any case.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Palette {
    Blues,
    Greens,
    Reds,
    Purples,
    Grays,
    Rainbow,
}

impl Palette {
    pub fn name(self) -> &'static str {
        match self {
            Palette::Blues => "blues",
            Palette::Greens => "greens",
            Palette::Reds => "reds",
            Palette::Purples => "purples",
            Palette::Grays => "grays",
            Palette::Rainbow => "rainbow",
        }
    }

    pub fn colorset(self) -> Colorset {
        let tinted = |hue| Colorset { hue, saturation: 0.7, lightness: 0.5, vary: Vary::Lightness };
        match self {
            Palette::Blues => tinted(0.6),
            Palette::Greens => tinted(0.33),
            Palette::Reds => tinted(0.0),
            Palette::Purples => tinted(0.75),
            Palette::Grays => Colorset { saturation: 0.0, ..tinted(0.0) },
            Palette::Rainbow => Colorset { hue: 0.0, saturation: 0.65, lightness: 0.5, vary: Vary::Hue },
        }
    }
}

impl TryFrom<String> for Palette {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self> {
        find(&name).ok_or(ConfigError::UnknownPalette(name))
    }
}

impl From<Palette> for String {
    fn from(p: Palette) -> Self { p.name().to_string() }
}

/// Return the list of built-in palettes.
pub fn presets() -> Vec<Palette> {
    vec![
        Palette::Blues,
        Palette::Greens,
        Palette::Reds,
        Palette::Purples,
        Palette::Grays,
        Palette::Rainbow,
    ]
}

/// Find a palette by name.
pub fn find(name: &str) -> Option<Palette> {
    presets().into_iter().find(|p| p.name().eq_ignore_ascii_case(name.trim()))
}

/// How a chart element gets its color. Named palettes and colorsets yield one
/// color per dataset; a literal gives every dataset the same color.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Named(Palette),
    Literal(String),
    Generated(Colorset),
}

impl ColorSpec {
    pub fn literal(s: impl Into<String>) -> Self { ColorSpec::Literal(s.into()) }

    /// Resolve to exactly `count` colors, the k-th for the k-th dataset.
    pub fn resolve(&self, count: usize) -> Result<Vec<Color>> {
        match self {
            ColorSpec::Literal(s) => Ok(vec![Color::parse(s)?; count]),
            ColorSpec::Named(p) => Ok(p.colorset().generate(count)),
            ColorSpec::Generated(set) => Ok(set.generate(count)),
        }
    }
}

impl From<Palette> for ColorSpec {
    fn from(p: Palette) -> Self { ColorSpec::Named(p) }
}

impl From<Colorset> for ColorSpec {
    fn from(c: Colorset) -> Self { ColorSpec::Generated(c) }
}

impl From<&str> for ColorSpec {
    fn from(s: &str) -> Self { ColorSpec::Literal(s.to_string()) }
}

/// Border color: `auto` derives it from each bar's fill.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderColor {
    Auto,
    #[serde(untagged)]
    Spec(ColorSpec),
}

impl BorderColor {
    /// Resolve one border color per dataset against the already-resolved fills.
    pub fn resolve(&self, fills: &[Color], amount: f32) -> Result<Vec<Color>> {
        match self {
            BorderColor::Auto => Ok(fills.iter().map(|c| c.darker_by(amount)).collect()),
            BorderColor::Spec(spec) => spec.resolve(fills.len()),
        }
    }
}
