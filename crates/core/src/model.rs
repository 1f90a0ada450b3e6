//! The gradient model: owner of the single current [`Gradient`].
//!
//! The model starts **Unset**. `set_gradient` (or `set`) moves it to
//! **Set**, after which updates, CSS generation and export are available.
//! Before that they fail with [`GradientError::NoGradientSet`].
//!
//! Listeners registered with [`GradientModel::subscribe`] are called with the
//! new gradient after every successful change.

use std::fmt;

use crate::clock::{Clock, SystemClock};
use crate::color::shift_hue;
use crate::css::{self, CssFormat};
use crate::gradient::{Gradient, GradientKind, GradientUpdate};
use crate::stop::ColorStop;
use crate::GradientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Version tag written into gradient exports.
pub const EXPORT_VERSION: &str = "1.0";

/// Canonical linear angles tried by [`generate_variations`].
const VARIATION_ANGLES: [f64; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];

/// Hue rotation used for the hue-shifted variation.
const VARIATION_HUE_SHIFT: f64 = 60.0;

/// Receives the new gradient after each change.
///
/// Implemented for any `FnMut(&Gradient)` closure.
pub trait GradientListener {
    fn gradient_changed(&mut self, gradient: &Gradient);
}

impl<F: FnMut(&Gradient)> GradientListener for F {
    fn gradient_changed(&mut self, gradient: &Gradient) {
        self(gradient)
    }
}

/// Handle returned by [`GradientModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(usize);

/// Derived, read-only metrics for a gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradientInfo {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub color_count: usize,
    pub has_transparency: bool,
    pub is_repeating: bool,
    pub css_length: usize,
    pub complexity: f64,
}

/// Self-describing export of the current gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientExport {
    pub version: String,
    pub gradient: Gradient,
    pub css: String,
    pub info: GradientInfo,
    pub timestamp: u64,
}

/// A named alternative to a base gradient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub name: String,
    #[serde(flatten)]
    pub gradient: Gradient,
}

/// Owns the current gradient and notifies listeners when it changes.
pub struct GradientModel {
    current: Option<Gradient>,
    listeners: Vec<(ListenerId, Box<dyn GradientListener>)>,
    next_listener: usize,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for GradientModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientModel")
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .field("clock", &self.clock)
            .finish()
    }
}

impl Default for GradientModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GradientModel {
    /// Creates an unset model using the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Creates an unset model that stamps exports with `clock`.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            current: None,
            listeners: Vec::new(),
            next_listener: 0,
            clock: Box::new(clock),
        }
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }

    /// The current gradient, or `None` while unset.
    pub fn current_gradient(&self) -> Option<&Gradient> {
        self.current.as_ref()
    }

    /// Validates raw JSON and makes it the current gradient.
    ///
    /// On error the previous gradient (if any) is kept.
    pub fn set_gradient(&mut self, raw: &Value) -> Result<&Gradient, GradientError> {
        let gradient = Gradient::from_value(raw).inspect_err(|e| {
            log::warn!("rejected gradient: {e}");
        })?;
        Ok(self.replace(gradient))
    }

    /// Normalizes an already typed gradient and makes it current.
    pub fn set(&mut self, gradient: Gradient) -> &Gradient {
        self.replace(gradient.normalized())
    }

    /// Updates one property by name, coercing `value` as [`set_gradient`](Self::set_gradient) would.
    pub fn update_property(&mut self, name: &str, value: &Value) -> Result<&Gradient, GradientError> {
        self.require_current()?;
        let update = GradientUpdate::from_name(name, value).inspect_err(|e| {
            log::warn!("rejected update of {name}: {e}");
        })?;
        self.apply(update)
    }

    /// Applies a typed property update.
    pub fn apply(&mut self, update: GradientUpdate) -> Result<&Gradient, GradientError> {
        let next = self.require_current()?.with_update(update);
        Ok(self.replace(next))
    }

    /// Generates the declaration for the current gradient.
    pub fn generate_css(&self, format: CssFormat) -> Result<String, GradientError> {
        Ok(css::generate_css(self.require_current()?, format))
    }

    /// Like [`generate_css`](Self::generate_css) with the format given by name.
    pub fn generate_css_named(&self, format: &str) -> Result<String, GradientError> {
        let gradient = self.require_current()?;
        Ok(css::generate_css(gradient, format.parse()?))
    }

    /// Metrics for the current gradient.
    pub fn gradient_info(&self) -> Result<GradientInfo, GradientError> {
        Ok(gradient_info(self.require_current()?))
    }

    /// Bundles the current gradient with its CSS, metrics and a timestamp.
    pub fn export_gradient_data(&self) -> Result<GradientExport, GradientError> {
        let gradient = self.require_current()?;
        Ok(GradientExport {
            version: EXPORT_VERSION.to_string(),
            gradient: gradient.clone(),
            css: css::generate_css(gradient, CssFormat::Css),
            info: gradient_info(gradient),
            timestamp: self.clock.now_ms(),
        })
    }

    /// Sets the gradient carried by an export bundle.
    ///
    /// Fails with `InvalidFormat` if `data` has no `gradient` field.
    pub fn import_gradient_data(&mut self, data: &Value) -> Result<&Gradient, GradientError> {
        match data.get("gradient") {
            Some(gradient) if !gradient.is_null() => self.set_gradient(gradient),
            _ => Err(GradientError::InvalidFormat(
                "gradient data has no gradient field".to_string(),
            )),
        }
    }

    /// Registers a change listener.
    pub fn subscribe(&mut self, listener: impl GradientListener + 'static) -> ListenerId {
        let id = ListenerId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener; returns whether it was registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    fn require_current(&self) -> Result<&Gradient, GradientError> {
        self.current.as_ref().ok_or(GradientError::NoGradientSet)
    }

    fn replace(&mut self, gradient: Gradient) -> &Gradient {
        log::debug!(
            "gradient set: {} with {} stops",
            gradient.kind,
            gradient.color_stops.len()
        );
        for (_, listener) in &mut self.listeners {
            listener.gradient_changed(&gradient);
        }
        self.current.insert(gradient)
    }
}

/// Computes [`GradientInfo`] for any gradient.
///
/// Complexity is `1 + 0.5 * stops`, plus 1 for transparency, 1 for
/// repetition and 0.5 for a linear angle off the 45° grid, rounded to one
/// decimal.
pub fn gradient_info(gradient: &Gradient) -> GradientInfo {
    let has_transparency = gradient.has_transparency();
    let mut complexity = 1.0 + 0.5 * gradient.color_stops.len() as f64;
    if has_transparency {
        complexity += 1.0;
    }
    if gradient.repeating {
        complexity += 1.0;
    }
    if gradient.kind == GradientKind::Linear && gradient.angle % 45.0 != 0.0 {
        complexity += 0.5;
    }

    GradientInfo {
        kind: gradient.kind,
        color_count: gradient.color_stops.len(),
        has_transparency,
        is_repeating: gradient.repeating,
        css_length: css::generate_css(gradient, CssFormat::Css).len(),
        complexity: (complexity * 10.0).round() / 10.0,
    }
}

/// Produces named alternatives to `base`.
///
/// Linear gradients get one variation per canonical angle other than their
/// own. Every gradient then gets a reversed variation (stop positions
/// mirrored) and a hue-shifted one.
pub fn generate_variations(base: &Gradient, name: Option<&str>) -> Vec<Variation> {
    let name = name.unwrap_or("Gradient");
    let mut variations = Vec::new();

    if base.kind == GradientKind::Linear {
        variations.extend(
            VARIATION_ANGLES
                .iter()
                .filter(|&&angle| angle != base.angle)
                .map(|&angle| Variation {
                    name: format!("{name} {angle}°"),
                    gradient: Gradient {
                        angle,
                        ..base.clone()
                    },
                }),
        );
    }

    let reversed: Vec<ColorStop> = base
        .color_stops
        .iter()
        .rev()
        .map(|stop| ColorStop {
            position: 100.0 - stop.position,
            ..stop.clone()
        })
        .collect();
    let hue_shifted: Vec<ColorStop> = base
        .color_stops
        .iter()
        .map(|stop| ColorStop {
            color: shift_hue(&stop.color, VARIATION_HUE_SHIFT),
            ..stop.clone()
        })
        .collect();

    for (i, stops) in [reversed, hue_shifted].into_iter().enumerate() {
        variations.push(Variation {
            name: format!("{name} Variant {}", i + 1),
            gradient: base.with_update(GradientUpdate::ColorStops(stops)),
        });
    }
    variations
}
