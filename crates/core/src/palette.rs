//! Harmony-based palette generation around a base color.
//!
//! Every generator works in integer HSL: the base color is converted once,
//! hue or lightness is stepped, and each step is rendered back to hex. Hue
//! arithmetic wraps at 360.

use std::fmt;
use std::str::FromStr;

use crate::color::{hsl_to_rgb, parse_color, rgb_to_hsl, Hsl};
use crate::GradientError;
use serde::{Deserialize, Serialize};

/// Lightness step between monochromatic swatches, in percent.
const LIGHTNESS_STEP: f64 = 20.0;

/// Hue step between analogous swatches, in degrees.
const ANALOGOUS_STEP: f64 = 30.0;

/// Palette-generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Harmony {
    #[default]
    Monochromatic,
    Analogous,
    Complementary,
    Triadic,
    Tetradic,
}

impl Harmony {
    /// All harmonies, in display order.
    pub const ALL: [Harmony; 5] = [
        Harmony::Monochromatic,
        Harmony::Analogous,
        Harmony::Complementary,
        Harmony::Triadic,
        Harmony::Tetradic,
    ];

    /// Lowercase name as used in serialized settings.
    pub fn name(self) -> &'static str {
        match self {
            Harmony::Monochromatic => "monochromatic",
            Harmony::Analogous => "analogous",
            Harmony::Complementary => "complementary",
            Harmony::Triadic => "triadic",
            Harmony::Tetradic => "tetradic",
        }
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Harmony {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Harmony::ALL
            .into_iter()
            .find(|h| h.name() == s)
            .ok_or_else(|| GradientError::InvalidArgument(format!("unknown harmony: {s}")))
    }
}

/// Generates a palette of hex colors related to `base` by `harmony`.
///
/// `count` applies to monochromatic and analogous palettes, which step
/// outward from the base so that the middle swatch (index `count / 2`) is the
/// base itself. Complementary, triadic and tetradic palettes always have
/// 2, 3 and 4 entries.
///
/// Returns `GradientError::InvalidColor` if `base` cannot be parsed.
pub fn generate_palette(
    base: &str,
    harmony: Harmony,
    count: usize,
) -> Result<Vec<String>, GradientError> {
    let rgba = parse_color(base).ok_or_else(|| GradientError::InvalidColor(base.into()))?;
    let hsl = rgb_to_hsl(rgba.rgb());
    let centre = (count / 2) as f64;

    let palette = match harmony {
        Harmony::Monochromatic => (0..count)
            .map(|i| {
                let lightness = f64::from(hsl.l) + (i as f64 - centre) * LIGHTNESS_STEP;
                with_lightness(hsl, lightness.clamp(10.0, 90.0))
            })
            .collect(),
        Harmony::Analogous => (0..count)
            .map(|i| rotated(hsl, (i as f64 - centre) * ANALOGOUS_STEP))
            .collect(),
        Harmony::Complementary => vec![rgba.rgb().to_hex(), rotated(hsl, 180.0)],
        Harmony::Triadic => hue_wheel(hsl, 3),
        Harmony::Tetradic => hue_wheel(hsl, 4),
    };
    Ok(palette)
}

/// `n` colors evenly spaced around the hue wheel, starting at the base.
fn hue_wheel(hsl: Hsl, n: usize) -> Vec<String> {
    let step = 360.0 / n as f64;
    (0..n).map(|i| rotated(hsl, i as f64 * step)).collect()
}

fn rotated(hsl: Hsl, degrees: f64) -> String {
    let hue = normalize_hue(f64::from(hsl.h) + degrees);
    hsl_to_rgb(hue, f64::from(hsl.s), f64::from(hsl.l)).to_hex()
}

fn with_lightness(hsl: Hsl, lightness: f64) -> String {
    hsl_to_rgb(f64::from(hsl.h), f64::from(hsl.s), lightness).to_hex()
}

/// Normalizes a hue angle to [0, 360).
fn normalize_hue(h: f64) -> f64 {
    h.rem_euclid(360.0)
}
