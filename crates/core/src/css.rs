//! Compiles a [`Gradient`] into CSS gradient function text.
//!
//! Output follows standard `linear-gradient()`, `radial-gradient()` and
//! `conic-gradient()` syntax (plus the `repeating-` forms) and can be used
//! directly as a property value. Numbers use Rust's shortest `Display` form,
//! so `90.0` renders as `90` and `16.66` as `16.66`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::color::hex_to_rgb;
use crate::gradient::{normalize_angle, Gradient, GradientKind};
use crate::stop::{sort_stops, ColorStop};
use crate::GradientError;
use regex::Regex;
use serde::{Deserialize, Serialize};

static FUNCTIONAL_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(rgb|hsl)a?\(\s*([^,]+?)\s*,\s*([^,]+?)\s*,\s*([^,]+?)\s*(?:,\s*[\d.]+\s*)?\)$")
        .expect("valid regex")
});

/// Keyword directions for the eight canonical linear angles.
const DIRECTIONS: [(f64, &str); 8] = [
    (0.0, "to top"),
    (45.0, "to top right"),
    (90.0, "to right"),
    (135.0, "to bottom right"),
    (180.0, "to bottom"),
    (225.0, "to bottom left"),
    (270.0, "to left"),
    (315.0, "to top left"),
];

/// Stylesheet dialect for the generated declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CssFormat {
    #[default]
    Css,
    Scss,
    Less,
}

impl CssFormat {
    pub const ALL: [CssFormat; 3] = [CssFormat::Css, CssFormat::Scss, CssFormat::Less];

    pub fn name(self) -> &'static str {
        match self {
            CssFormat::Css => "css",
            CssFormat::Scss => "scss",
            CssFormat::Less => "less",
        }
    }

    /// Wraps a gradient value in a `background` declaration for this dialect.
    pub fn wrap(self, value: &str) -> String {
        match self {
            CssFormat::Css => format!("background: {value};"),
            CssFormat::Scss => format!("$gradient: {value};\nbackground: $gradient;"),
            CssFormat::Less => format!("@gradient: {value};\nbackground: @gradient;"),
        }
    }
}

impl fmt::Display for CssFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CssFormat {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CssFormat::ALL
            .into_iter()
            .find(|f| f.name() == s)
            .ok_or_else(|| GradientError::UnsupportedFormat(s.to_string()))
    }
}

/// Maps an angle to a CSS direction: a keyword for the eight canonical
/// angles, otherwise `<angle>deg`. The angle is normalized first.
pub fn angle_to_direction(angle: f64) -> String {
    let angle = normalize_angle(angle);
    DIRECTIONS
        .iter()
        .find(|(a, _)| *a == angle)
        .map_or_else(|| format!("{angle}deg"), |(_, keyword)| (*keyword).to_string())
}

/// Rewrites a color literal so it carries `opacity`.
///
/// Hex becomes `rgba(r, g, b, o)`, `rgb()`/`hsl()` gain an alpha component,
/// and an existing alpha is replaced. Named colors are returned unchanged, as
/// is every color when `opacity` is exactly 1.
pub fn apply_opacity(color: &str, opacity: f64) -> String {
    if opacity == 1.0 {
        return color.to_string();
    }
    if color.starts_with('#') {
        return match hex_to_rgb(color) {
            Some(rgb) => format!("rgba({}, {}, {}, {opacity})", rgb.r, rgb.g, rgb.b),
            None => color.to_string(),
        };
    }
    match FUNCTIONAL_COLOR.captures(color) {
        Some(caps) => format!(
            "{}a({}, {}, {}, {opacity})",
            caps[1].to_ascii_lowercase(),
            &caps[2],
            &caps[3],
            &caps[4]
        ),
        None => color.to_string(),
    }
}

/// Renders the stop list: sorted by position, each as `<color> <pos>%`,
/// joined by `, `.
pub fn build_color_stops(stops: &[ColorStop]) -> String {
    let mut sorted = stops.to_vec();
    sort_stops(&mut sorted);
    sorted
        .iter()
        .map(|stop| format!("{} {}%", apply_opacity(&stop.color, stop.opacity), stop.position))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builds the gradient function call, e.g.
/// `linear-gradient(to right, #ff0000 0%, #0000ff 100%)`.
pub fn build_css_string(gradient: &Gradient) -> String {
    let prefix = if gradient.repeating { "repeating-" } else { "" };
    let stops = build_color_stops(&gradient.color_stops);
    let Gradient { angle, position, .. } = gradient;
    match gradient.kind {
        GradientKind::Linear => {
            format!("{prefix}linear-gradient({}, {stops})", angle_to_direction(*angle))
        }
        GradientKind::Radial => format!(
            "{prefix}radial-gradient({} at {}% {}%, {stops})",
            gradient.size, position.x, position.y
        ),
        GradientKind::Conic => format!(
            "{prefix}conic-gradient(from {angle}deg at {}% {}%, {stops})",
            position.x, position.y
        ),
    }
}

/// Builds the full declaration for `gradient` in `format`.
pub fn generate_css(gradient: &Gradient, format: CssFormat) -> String {
    format.wrap(&build_css_string(gradient))
}
