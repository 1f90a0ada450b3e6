//! Color types, CSS color literal parsing, and conversion functions.
//!
//! Colors are handled the way CSS gradients need them: as 8-bit sRGB
//! channels (`Rgb`, `Rgba`) with integer-rounded HSL/HSV views. All
//! functions are pure.
//!
//! Accepted literals are `#rgb`/`#rrggbb`, `rgb()`/`rgba()` with integer
//! channels, `hsl()`/`hsla()` with integer components, and the CSS named
//! colors in [`NAMED_COLORS`].

use crate::prng::Xorshift64;
use crate::GradientError;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static HEX_LITERAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#([A-Fa-f0-9]{6}|[A-Fa-f0-9]{3})$").expect("valid regex"));

static RGB_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^rgba?\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*(?:,\s*([\d.]+))?\s*\)$")
        .expect("valid regex")
});

static HSL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^hsla?\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*(?:,\s*([\d.]+))?\s*\)$")
        .expect("valid regex")
});

/// 8-bit sRGB color.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// 8-bit sRGB color with a straight alpha in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

/// HSL with hue in degrees [0, 360) and saturation/lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

/// HSV with hue in degrees [0, 360) and saturation/value in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsv {
    pub h: u16,
    pub s: u8,
    pub v: u8,
}

/// Result of a WCAG 2.1 contrast check between two colors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContrastReport {
    /// Contrast ratio in [1, 21], rounded to two decimals.
    pub ratio: f64,
    /// Normal text, level AA (ratio >= 4.5).
    pub aa: bool,
    /// Normal text, level AAA (ratio >= 7).
    pub aaa: bool,
    /// Large text, level AA (ratio >= 3).
    pub aa_large: bool,
}

/// Textual color notations a color can be converted to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormat {
    Hex,
    Rgb,
    Rgba,
    Hsl,
    Hsla,
    Hsv,
}

impl FromStr for ColorFormat {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hex" => Ok(ColorFormat::Hex),
            "rgb" => Ok(ColorFormat::Rgb),
            "rgba" => Ok(ColorFormat::Rgba),
            "hsl" => Ok(ColorFormat::Hsl),
            "hsla" => Ok(ColorFormat::Hsla),
            "hsv" => Ok(ColorFormat::Hsv),
            _ => Err(GradientError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    /// Builds a color from a packed `0xRRGGBB` value.
    pub const fn from_u32(packed: u32) -> Rgb {
        Rgb {
            r: ((packed >> 16) & 0xff) as u8,
            g: ((packed >> 8) & 0xff) as u8,
            b: (packed & 0xff) as u8,
        }
    }

    /// Parses a hex color like `"#ff00aa"`, `"ff00aa"` or `"#f0a"` (case insensitive).
    ///
    /// Returns `GradientError::InvalidColor` for any other length or a
    /// non-hex digit.
    pub fn from_hex(hex: &str) -> Result<Rgb, GradientError> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GradientError::InvalidColor(format!(
                "non-hex digit in {hex:?}"
            )));
        }
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            n => {
                return Err(GradientError::InvalidColor(format!(
                    "expected 3 or 6 hex digits, got {n}"
                )))
            }
        };
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&expanded[range], 16)
                .map_err(|e| GradientError::InvalidColor(format!("{hex:?}: {e}")))
        };
        Ok(Rgb {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Adds an alpha channel.
    pub fn with_alpha(self, a: f64) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Rgb::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl Rgba {
    /// Drops the alpha channel.
    pub fn rgb(self) -> Rgb {
        Rgb {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// Rounds and clamps a channel value into a byte.
fn channel_to_u8(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, 255.0) as u8
}

/// Parses a 3- or 6-digit hex color, with or without the leading `#`.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    Rgb::from_hex(hex).ok()
}

/// Renders channels as `#rrggbb`; each channel is clamped to [0, 255] and rounded.
pub fn rgb_to_hex(r: f64, g: f64, b: f64) -> String {
    Rgb {
        r: channel_to_u8(r),
        g: channel_to_u8(g),
        b: channel_to_u8(b),
    }
    .to_hex()
}

/// Converts 8-bit RGB to integer-rounded HSL.
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Hsl {
        h: ((h * 360.0).round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    }
}

fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 1.0 / 2.0 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Converts HSL (hue in degrees, saturation/lightness in percent) to 8-bit RGB.
///
/// Hue wraps modulo 360; saturation and lightness are clamped to [0, 100].
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let l = l.clamp(0.0, 100.0) / 100.0;

    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 1.0 / 3.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 1.0 / 3.0),
        )
    };

    Rgb {
        r: channel_to_u8(r * 255.0),
        g: channel_to_u8(g * 255.0),
        b: channel_to_u8(b * 255.0),
    }
}

/// Converts 8-bit RGB to integer-rounded HSV.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let s = if max == 0.0 { 0.0 } else { diff / max };
    let mut h = 0.0;
    if diff != 0.0 {
        h = if max == r {
            ((g - b) / diff) % 6.0
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };
        h *= 60.0;
        if h < 0.0 {
            h += 360.0;
        }
    }

    Hsv {
        h: (h.round() as u16) % 360,
        s: (s * 100.0).round() as u8,
        v: (max * 100.0).round() as u8,
    }
}

/// Converts HSV (hue in degrees, saturation/value in percent) to 8-bit RGB.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0) / 360.0;
    let s = s.clamp(0.0, 100.0) / 100.0;
    let v = v.clamp(0.0, 100.0) / 100.0;

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match (sector as i64).rem_euclid(6) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: channel_to_u8(r * 255.0),
        g: channel_to_u8(g * 255.0),
        b: channel_to_u8(b * 255.0),
    }
}

fn parse_alpha(capture: Option<regex::Match<'_>>) -> Option<f64> {
    match capture {
        None => Some(1.0),
        Some(m) => m.as_str().parse::<f64>().ok().map(|a| a.clamp(0.0, 1.0)),
    }
}

fn parse_int_channel(m: regex::Match<'_>) -> u8 {
    m.as_str()
        .parse::<u32>()
        .map(|v| v.min(255) as u8)
        .unwrap_or(u8::MAX)
}

/// Parses a CSS color literal into RGBA.
///
/// Dispatches on the `#` prefix, the `rgb`/`rgba` and `hsl`/`hsla`
/// functional notations, and the named color table. Returns `None` for
/// anything unrecognized.
pub fn parse_color(color: &str) -> Option<Rgba> {
    let color = color.trim();
    if color.is_empty() {
        return None;
    }

    if color.starts_with('#') {
        return hex_to_rgb(color).map(|rgb| rgb.with_alpha(1.0));
    }

    if let Some(caps) = RGB_LITERAL.captures(color) {
        return Some(Rgba {
            r: parse_int_channel(caps.get(1)?),
            g: parse_int_channel(caps.get(2)?),
            b: parse_int_channel(caps.get(3)?),
            a: parse_alpha(caps.get(4))?,
        });
    }

    if let Some(caps) = HSL_LITERAL.captures(color) {
        let component = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse::<f64>().ok() };
        let rgb = hsl_to_rgb(component(1)?, component(2)?, component(3)?);
        return Some(rgb.with_alpha(parse_alpha(caps.get(4))?));
    }

    named_color(&color.to_ascii_lowercase()).map(|rgb| rgb.with_alpha(1.0))
}

/// Returns the canonical (lowercased) form of a color literal, or `None`
/// if it matches none of the accepted grammars.
pub fn validate_color(color: &str) -> Option<String> {
    if HEX_LITERAL.is_match(color) || RGB_LITERAL.is_match(color) || HSL_LITERAL.is_match(color)
    {
        return Some(color.to_ascii_lowercase());
    }
    let lower = color.to_ascii_lowercase();
    named_color(&lower).map(|_| lower)
}

/// Looks up a lowercase CSS color keyword.
pub fn named_color(name: &str) -> Option<Rgb> {
    NAMED_COLORS
        .binary_search_by_key(&name, |&(n, _)| n)
        .ok()
        .map(|i| Rgb::from_u32(NAMED_COLORS[i].1))
}

/// Linearly interpolates two colors per channel in RGB space.
///
/// `factor` is clamped to [0, 1]. If either color cannot be parsed, the
/// first color is returned unchanged.
pub fn interpolate_colors(from: &str, to: &str, factor: f64) -> String {
    let (Some(a), Some(b)) = (parse_color(from), parse_color(to)) else {
        return from.to_string();
    };
    let t = if factor.is_nan() {
        0.0
    } else {
        factor.clamp(0.0, 1.0)
    };
    let lerp = |x: u8, y: u8| f64::from(x) + (f64::from(y) - f64::from(x)) * t;
    rgb_to_hex(lerp(a.r, b.r), lerp(a.g, b.g), lerp(a.b, b.b))
}

/// Perceived brightness in [0, 255] (`0.299r + 0.587g + 0.114b`).
///
/// Used for light/dark text decisions. Unparsable colors report 128.
pub fn color_brightness(color: &str) -> u8 {
    parse_color(color).map_or(128, |c| {
        channel_to_u8(0.299 * f64::from(c.r) + 0.587 * f64::from(c.g) + 0.114 * f64::from(c.b))
    })
}

/// Whether text on this color should be dark.
pub fn is_light_color(color: &str) -> bool {
    color_brightness(color) > 128
}

/// Black for light colors, white for dark ones.
pub fn contrasting_color(color: &str) -> &'static str {
    if is_light_color(color) {
        "#000000"
    } else {
        "#ffffff"
    }
}

/// Applies inverse sRGB companding (WCAG 2.x threshold) to one 8-bit channel.
fn srgb_channel_to_linear(channel: u8) -> f64 {
    let c = f64::from(channel) / 255.0;
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance in [0, 1].
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_channel_to_linear(rgb.r)
        + 0.7152 * srgb_channel_to_linear(rgb.g)
        + 0.0722 * srgb_channel_to_linear(rgb.b)
}

/// Computes the WCAG contrast ratio between two colors and classifies it.
///
/// Returns `None` if either color cannot be parsed.
pub fn check_color_contrast(a: &str, b: &str) -> Option<ContrastReport> {
    let la = relative_luminance(parse_color(a)?.rgb());
    let lb = relative_luminance(parse_color(b)?.rgb());
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    let contrast = (lighter + 0.05) / (darker + 0.05);
    Some(ContrastReport {
        ratio: (contrast * 100.0).round() / 100.0,
        aa: contrast >= 4.5,
        aaa: contrast >= 7.0,
        aa_large: contrast >= 3.0,
    })
}

/// Renders a color in another notation. Returns `None` if it cannot be parsed.
pub fn convert_color(color: &str, target: ColorFormat) -> Option<String> {
    let c = parse_color(color)?;
    Some(format_rgba(c, target))
}

fn format_rgba(c: Rgba, target: ColorFormat) -> String {
    match target {
        ColorFormat::Hex => c.rgb().to_hex(),
        ColorFormat::Rgb => format!("rgb({}, {}, {})", c.r, c.g, c.b),
        ColorFormat::Rgba => format!("rgba({}, {}, {}, {})", c.r, c.g, c.b, c.a),
        ColorFormat::Hsl => {
            let hsl = rgb_to_hsl(c.rgb());
            format!("hsl({}, {}%, {}%)", hsl.h, hsl.s, hsl.l)
        }
        ColorFormat::Hsla => {
            let hsl = rgb_to_hsl(c.rgb());
            format!("hsla({}, {}%, {}%, {})", hsl.h, hsl.s, hsl.l, c.a)
        }
        ColorFormat::Hsv => {
            let hsv = rgb_to_hsv(c.rgb());
            format!("hsv({}, {}%, {}%)", hsv.h, hsv.s, hsv.v)
        }
    }
}

/// Draws a uniformly random opaque color and renders it in `format`.
pub fn random_color(rng: &mut Xorshift64, format: ColorFormat) -> String {
    let rgb = Rgb {
        r: rng.next_usize(256) as u8,
        g: rng.next_usize(256) as u8,
        b: rng.next_usize(256) as u8,
    };
    format_rgba(rgb.with_alpha(1.0), format)
}

/// Rotates a color's hue by `degrees` and returns it as hex.
///
/// Colors that cannot be parsed are returned unchanged.
pub fn shift_hue(color: &str, degrees: f64) -> String {
    match parse_color(color) {
        Some(c) => {
            let hsl = rgb_to_hsl(c.rgb());
            hsl_to_rgb(f64::from(hsl.h) + degrees, f64::from(hsl.s), f64::from(hsl.l)).to_hex()
        }
        None => color.to_string(),
    }
}

/// CSS named colors, sorted by name for binary search.
pub const NAMED_COLORS: &[(&str, u32)] = &[
    ("aliceblue", 0xf0f8ff),
    ("antiquewhite", 0xfaebd7),
    ("aqua", 0x00ffff),
    ("aquamarine", 0x7fffd4),
    ("azure", 0xf0ffff),
    ("beige", 0xf5f5dc),
    ("bisque", 0xffe4c4),
    ("black", 0x000000),
    ("blanchedalmond", 0xffebcd),
    ("blue", 0x0000ff),
    ("blueviolet", 0x8a2be2),
    ("brown", 0xa52a2a),
    ("burlywood", 0xdeb887),
    ("cadetblue", 0x5f9ea0),
    ("chartreuse", 0x7fff00),
    ("chocolate", 0xd2691e),
    ("coral", 0xff7f50),
    ("cornflowerblue", 0x6495ed),
    ("cornsilk", 0xfff8dc),
    ("crimson", 0xdc143c),
    ("cyan", 0x00ffff),
    ("darkblue", 0x00008b),
    ("darkcyan", 0x008b8b),
    ("darkgoldenrod", 0xb8860b),
    ("darkgray", 0xa9a9a9),
    ("darkgreen", 0x006400),
    ("darkkhaki", 0xbdb76b),
    ("darkmagenta", 0x8b008b),
    ("darkolivegreen", 0x556b2f),
    ("darkorange", 0xff8c00),
    ("darkorchid", 0x9932cc),
    ("darkred", 0x8b0000),
    ("darksalmon", 0xe9967a),
    ("darkseagreen", 0x8fbc8f),
    ("darkslateblue", 0x483d8b),
    ("darkslategray", 0x2f4f4f),
    ("darkturquoise", 0x00ced1),
    ("darkviolet", 0x9400d3),
    ("deeppink", 0xff1493),
    ("deepskyblue", 0x00bfff),
    ("dimgray", 0x696969),
    ("dodgerblue", 0x1e90ff),
    ("firebrick", 0xb22222),
    ("floralwhite", 0xfffaf0),
    ("forestgreen", 0x228b22),
    ("fuchsia", 0xff00ff),
    ("gainsboro", 0xdcdcdc),
    ("ghostwhite", 0xf8f8ff),
    ("gold", 0xffd700),
    ("goldenrod", 0xdaa520),
    ("gray", 0x808080),
    ("green", 0x008000),
    ("greenyellow", 0xadff2f),
    ("honeydew", 0xf0fff0),
    ("hotpink", 0xff69b4),
    ("indianred", 0xcd5c5c),
    ("indigo", 0x4b0082),
    ("ivory", 0xfffff0),
    ("khaki", 0xf0e68c),
    ("lavender", 0xe6e6fa),
    ("lavenderblush", 0xfff0f5),
    ("lawngreen", 0x7cfc00),
    ("lemonchiffon", 0xfffacd),
    ("lightblue", 0xadd8e6),
    ("lightcoral", 0xf08080),
    ("lightcyan", 0xe0ffff),
    ("lightgoldenrodyellow", 0xfafad2),
    ("lightgray", 0xd3d3d3),
    ("lightgreen", 0x90ee90),
    ("lightpink", 0xffb6c1),
    ("lightsalmon", 0xffa07a),
    ("lightseagreen", 0x20b2aa),
    ("lightskyblue", 0x87cefa),
    ("lightslategray", 0x778899),
    ("lightsteelblue", 0xb0c4de),
    ("lightyellow", 0xffffe0),
    ("lime", 0x00ff00),
    ("limegreen", 0x32cd32),
    ("linen", 0xfaf0e6),
    ("magenta", 0xff00ff),
    ("maroon", 0x800000),
    ("mediumaquamarine", 0x66cdaa),
    ("mediumblue", 0x0000cd),
    ("mediumorchid", 0xba55d3),
    ("mediumpurple", 0x9370db),
    ("mediumseagreen", 0x3cb371),
    ("mediumslateblue", 0x7b68ee),
    ("mediumspringgreen", 0x00fa9a),
    ("mediumturquoise", 0x48d1cc),
    ("mediumvioletred", 0xc71585),
    ("midnightblue", 0x191970),
    ("mintcream", 0xf5fffa),
    ("mistyrose", 0xffe4e1),
    ("moccasin", 0xffe4b5),
    ("navajowhite", 0xffdead),
    ("navy", 0x000080),
    ("oldlace", 0xfdf5e6),
    ("olive", 0x808000),
    ("olivedrab", 0x6b8e23),
    ("orange", 0xffa500),
    ("orangered", 0xff4500),
    ("orchid", 0xda70d6),
    ("palegoldenrod", 0xeee8aa),
    ("palegreen", 0x98fb98),
    ("paleturquoise", 0xafeeee),
    ("palevioletred", 0xdb7093),
    ("papayawhip", 0xffefd5),
    ("peachpuff", 0xffdab9),
    ("peru", 0xcd853f),
    ("pink", 0xffc0cb),
    ("plum", 0xdda0dd),
    ("powderblue", 0xb0e0e6),
    ("purple", 0x800080),
    ("red", 0xff0000),
    ("rosybrown", 0xbc8f8f),
    ("royalblue", 0x4169e1),
    ("saddlebrown", 0x8b4513),
    ("salmon", 0xfa8072),
    ("sandybrown", 0xf4a460),
    ("seagreen", 0x2e8b57),
    ("seashell", 0xfff5ee),
    ("sienna", 0xa0522d),
    ("silver", 0xc0c0c0),
    ("skyblue", 0x87ceeb),
    ("slateblue", 0x6a5acd),
    ("slategray", 0x708090),
    ("snow", 0xfffafa),
    ("springgreen", 0x00ff7f),
    ("steelblue", 0x4682b4),
    ("tan", 0xd2b48c),
    ("teal", 0x008080),
    ("thistle", 0xd8bfd8),
    ("tomato", 0xff6347),
    ("turquoise", 0x40e0d0),
    ("violet", 0xee82ee),
    ("wheat", 0xf5deb3),
    ("white", 0xffffff),
    ("whitesmoke", 0xf5f5f5),
    ("yellow", 0xffff00),
    ("yellowgreen", 0x9acd32),
];
