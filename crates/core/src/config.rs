//! Studio settings, loaded from JSON with per-field defaults.

use crate::css::CssFormat;
use crate::history::DEFAULT_HISTORY_CAPACITY;
use crate::logging::LoggingConfig;
use crate::GradientError;
use serde::{Deserialize, Serialize};

/// How long a saved session stays restorable: 24 hours.
pub const DEFAULT_SESSION_MAX_AGE_MS: u64 = 24 * 60 * 60 * 1000;

/// Tunable settings for a [`Studio`](crate::studio::Studio).
///
/// Every field is optional in JSON; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StudioConfig {
    pub history_capacity: usize,
    pub session_max_age_ms: u64,
    pub default_format: CssFormat,
    pub logging: LoggingConfig,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            session_max_age_ms: DEFAULT_SESSION_MAX_AGE_MS,
            default_format: CssFormat::Css,
            logging: LoggingConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Parses settings from a JSON document.
    pub fn from_json(json: &str) -> Result<Self, GradientError> {
        Ok(serde_json::from_str(json)?)
    }
}
