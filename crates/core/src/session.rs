//! Last-session restore blob: `{gradient, timestamp}`.
//!
//! The core only produces and consumes the JSON; storing it is up to the host.

use crate::clock::Clock;
use crate::gradient::Gradient;
use crate::model::GradientModel;
use crate::studio::Studio;
use crate::GradientError;
use serde::{Deserialize, Serialize};

/// Snapshot of the gradient being edited, stamped in epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub gradient: Gradient,
    pub timestamp: u64,
}

impl SessionState {
    /// Captures the model's current gradient, or `None` while it is unset.
    pub fn capture(model: &GradientModel, clock: &dyn Clock) -> Option<Self> {
        model.current_gradient().map(|gradient| Self {
            gradient: gradient.clone(),
            timestamp: clock.now_ms(),
        })
    }

    pub fn to_json(&self) -> Result<String, GradientError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a saved blob. The gradient inside is normalized.
    pub fn from_json(json: &str) -> Result<Self, GradientError> {
        let mut state: SessionState = serde_json::from_str(json)?;
        state.gradient = state.gradient.normalized();
        Ok(state)
    }

    /// Whether the blob is younger than `max_age_ms` at time `now_ms`.
    ///
    /// Blobs stamped in the future count as fresh.
    pub fn is_fresh(&self, now_ms: u64, max_age_ms: u64) -> bool {
        now_ms.saturating_sub(self.timestamp) < max_age_ms
    }

    /// Loads the saved gradient into `studio` if the blob is still fresh
    /// under the studio's configured max age. History is not touched.
    ///
    /// Returns whether the gradient was applied.
    pub fn restore_into(&self, studio: &mut Studio, clock: &dyn Clock) -> bool {
        let max_age = studio.config().session_max_age_ms;
        if !self.is_fresh(clock.now_ms(), max_age) {
            log::info!("saved session is older than {max_age} ms; not restoring");
            return false;
        }
        studio.restore(self.gradient.clone());
        true
    }
}
