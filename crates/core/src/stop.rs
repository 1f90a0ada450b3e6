//! A single color stop: position along the ramp, color literal, and opacity.

use crate::color::validate_color;
use crate::params::{coerce_f64, param_f64};
use crate::GradientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Color substituted for an invalid literal when validating a whole gradient.
pub const INVALID_STOP_COLOR: &str = "#000000";

/// Color substituted for an invalid literal when a stop is added interactively.
pub const NEW_STOP_FALLBACK_COLOR: &str = "#808080";

/// A color anchor along a gradient ramp.
///
/// `position` is a percentage in [0, 100], `opacity` is in [0, 1], and
/// `color` is a canonical (lowercased) CSS color literal. The constructors
/// enforce all three; values deserialized directly should be passed through
/// [`ColorStop::normalized`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorStop {
    pub position: f64,
    pub color: String,
    #[serde(default = "full_opacity")]
    pub opacity: f64,
}

fn full_opacity() -> f64 {
    1.0
}

/// Clamps a stop position into [0, 100]; NaN and -0 become 0.
pub fn clamp_position(position: f64) -> f64 {
    if position.is_nan() {
        0.0
    } else {
        // `+ 0.0` folds -0.0 into +0.0 so it sorts and prints as 0.
        position.clamp(0.0, 100.0) + 0.0
    }
}

/// Clamps an opacity into [0, 1]; NaN becomes fully opaque.
pub fn clamp_opacity(opacity: f64) -> f64 {
    if opacity.is_nan() {
        1.0
    } else {
        opacity.clamp(0.0, 1.0)
    }
}

impl ColorStop {
    /// Creates a stop, clamping position and opacity.
    ///
    /// Returns `GradientError::InvalidColor` if `color` is not an accepted literal.
    pub fn new(position: f64, color: &str, opacity: f64) -> Result<Self, GradientError> {
        let color = validate_color(color).ok_or_else(|| GradientError::InvalidColor(color.into()))?;
        Ok(Self {
            position: clamp_position(position),
            color,
            opacity: clamp_opacity(opacity),
        })
    }

    /// Creates a stop, substituting `fallback` for an invalid color.
    pub fn lenient(position: f64, color: &str, opacity: f64, fallback: &str) -> Self {
        Self {
            position: clamp_position(position),
            color: validate_color(color).unwrap_or_else(|| fallback.to_string()),
            opacity: clamp_opacity(opacity),
        }
    }

    /// Builds a stop from loosely typed JSON.
    ///
    /// Non-object input yields `None`. A missing or non-numeric position is 0,
    /// a missing or non-numeric opacity is 1, and an invalid color becomes
    /// [`INVALID_STOP_COLOR`].
    pub fn from_value(value: &Value) -> Option<Self> {
        if !value.is_object() {
            return None;
        }
        let color = value.get("color").and_then(Value::as_str).unwrap_or("");
        Some(Self::lenient(
            param_f64(value, "position", 0.0),
            color,
            value.get("opacity").and_then(coerce_f64).unwrap_or(1.0),
            INVALID_STOP_COLOR,
        ))
    }

    /// Returns a copy with every field forced back into its valid range.
    pub fn normalized(&self) -> Self {
        Self::lenient(self.position, &self.color, self.opacity, INVALID_STOP_COLOR)
    }

    /// Whether this stop is at least partly transparent.
    pub fn is_translucent(&self) -> bool {
        self.opacity < 1.0
    }
}

/// Sorts stops ascending by position; equal positions keep their relative order.
pub fn sort_stops(stops: &mut [ColorStop]) {
    stops.sort_by(|a, b| a.position.total_cmp(&b.position));
}
