//! The preset record and structural validation of raw preset JSON.

use gradient_studio_core::gradient::{Gradient, GradientKind};
use gradient_studio_core::params::is_truthy;
use gradient_studio_core::GradientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Category given to presets created without one.
pub const CUSTOM_CATEGORY: &str = "custom";

/// A named, categorized gradient template.
///
/// Serializes flat: the gradient's fields sit next to `id`, `name` and
/// `category`. Timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(flatten)]
    pub gradient: Gradient,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub custom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imported: Option<u64>,
}

impl Preset {
    pub fn kind(&self) -> GradientKind {
        self.gradient.kind
    }

    /// Case-insensitive substring match against name, category and type.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.category.to_lowercase().contains(needle)
            || self.gradient.kind.name().contains(needle)
    }
}

/// Checks that raw preset JSON has the fields a preset needs.
///
/// - `MissingField` lists every absent or empty field among `name`, `type`
///   and `colorStops`.
/// - `InvalidType` if `type` is not linear, radial or conic.
/// - `InsufficientStops` if `colorStops` is not a list of at least two.
pub fn validate_preset(preset: &Value) -> Result<(), GradientError> {
    let missing: Vec<String> = ["name", "type", "colorStops"]
        .into_iter()
        .filter(|field| !preset.get(field).is_some_and(is_truthy))
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(GradientError::MissingField(missing));
    }

    let kind = &preset["type"];
    if !kind
        .as_str()
        .is_some_and(|name| name.parse::<GradientKind>().is_ok())
    {
        let shown = kind.as_str().map_or_else(|| kind.to_string(), str::to_string);
        return Err(GradientError::InvalidType(shown));
    }

    let stops = preset["colorStops"].as_array().map_or(0, Vec::len);
    if stops < 2 {
        return Err(GradientError::InsufficientStops(stops));
    }
    Ok(())
}
