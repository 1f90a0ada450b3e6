//! Working list of color stops for the gradient being edited.
//!
//! The store keeps its stops sorted ascending by position after every
//! mutation and refuses to drop below two stops. The gradient model is fed
//! a fresh copy of the list after each edit; the store never shares it.

use crate::color::{interpolate_colors, validate_color};
use crate::params::coerce_f64;
use crate::stop::{clamp_opacity, clamp_position, sort_stops, ColorStop, NEW_STOP_FALLBACK_COLOR};
use crate::GradientError;
use serde_json::Value;

/// Minimum number of stops a gradient may have.
pub const MIN_STOPS: usize = 2;

/// A single-field edit to an existing stop.
#[derive(Debug, Clone, PartialEq)]
pub enum StopUpdate {
    Position(f64),
    Color(String),
    Opacity(f64),
}

impl StopUpdate {
    /// Builds an update from a property name and a loosely typed value.
    ///
    /// Unknown property names yield `GradientError::InvalidArgument`.
    /// Non-numeric positions and opacities are coerced to 0 and 1.
    pub fn from_name(property: &str, value: &Value) -> Result<Self, GradientError> {
        match property {
            "position" => Ok(StopUpdate::Position(coerce_f64(value).unwrap_or(0.0))),
            "color" => Ok(StopUpdate::Color(
                value.as_str().map(str::to_string).unwrap_or_default(),
            )),
            "opacity" => Ok(StopUpdate::Opacity(coerce_f64(value).unwrap_or(1.0))),
            other => Err(GradientError::InvalidArgument(format!(
                "unknown color stop property: {other}"
            ))),
        }
    }
}

/// Ordered collection of color stops.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColorStopStore {
    stops: Vec<ColorStop>,
}

impl ColorStopStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from existing stops, normalizing and sorting them.
    pub fn from_stops(stops: &[ColorStop]) -> Self {
        let mut store = Self::new();
        store.set_color_stops(stops);
        store
    }

    /// Replaces the whole list.
    pub fn set_color_stops(&mut self, stops: &[ColorStop]) -> &[ColorStop] {
        self.stops = stops.iter().map(ColorStop::normalized).collect();
        sort_stops(&mut self.stops);
        &self.stops
    }

    /// The current stops, sorted by position.
    pub fn color_stops(&self) -> &[ColorStop] {
        &self.stops
    }

    /// Number of stops.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    /// Whether the store holds no stops.
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Adds a stop and re-sorts.
    ///
    /// Position and opacity are clamped; an invalid color becomes mid-gray.
    pub fn add(&mut self, position: f64, color: &str, opacity: f64) -> ColorStop {
        let stop = ColorStop::lenient(position, color, opacity, NEW_STOP_FALLBACK_COLOR);
        self.stops.push(stop.clone());
        sort_stops(&mut self.stops);
        stop
    }

    /// Removes the stop at `index`.
    ///
    /// Fails with `GradientError::InvalidOperation` when only two stops
    /// remain or the index is out of bounds; the list is left unchanged.
    pub fn remove(&mut self, index: usize) -> Result<ColorStop, GradientError> {
        if self.stops.len() <= MIN_STOPS {
            return Err(GradientError::InvalidOperation(format!(
                "cannot remove color stop: minimum {MIN_STOPS} stops required"
            )));
        }
        self.check_index(index)?;
        Ok(self.stops.remove(index))
    }

    /// Applies a single-field edit to the stop at `index` and returns the
    /// edited stop.
    ///
    /// A position change re-sorts the list, so the stop may move. An invalid
    /// color is ignored and the previous color kept.
    pub fn update(&mut self, index: usize, update: StopUpdate) -> Result<ColorStop, GradientError> {
        self.check_index(index)?;
        let stop = &mut self.stops[index];
        match update {
            StopUpdate::Position(position) => {
                stop.position = clamp_position(position);
                let edited = stop.clone();
                sort_stops(&mut self.stops);
                return Ok(edited);
            }
            StopUpdate::Color(color) => match validate_color(&color) {
                Some(valid) => stop.color = valid,
                None => log::debug!("ignoring invalid color {color:?} for stop {index}"),
            },
            StopUpdate::Opacity(opacity) => stop.opacity = clamp_opacity(opacity),
        }
        Ok(stop.clone())
    }

    /// Name-based form of [`update`](Self::update) for loosely typed callers.
    pub fn update_by_name(
        &mut self,
        index: usize,
        property: &str,
        value: &Value,
    ) -> Result<ColorStop, GradientError> {
        self.check_index(index)?;
        self.update(index, StopUpdate::from_name(property, value)?)
    }

    /// Samples the ramp color at `position` (percent).
    ///
    /// Finds the first bracketing pair in ascending order and interpolates in
    /// RGB. Exact hits return the stop color unchanged; positions outside the
    /// ramp clamp to the nearest endpoint.
    pub fn color_at_position(&self, position: f64) -> String {
        let (first, last) = match (self.stops.first(), self.stops.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return "#000000".to_string(),
        };
        if self.stops.len() == 1 {
            return first.color.clone();
        }

        let (before, after) = self
            .stops
            .windows(2)
            .find(|pair| position >= pair[0].position && position <= pair[1].position)
            .map_or((first, last), |pair| (&pair[0], &pair[1]));

        if before.position == position {
            return before.color.clone();
        }
        if after.position == position {
            return after.color.clone();
        }
        if position <= first.position {
            return first.color.clone();
        }
        if position >= last.position {
            return last.color.clone();
        }

        let span = after.position - before.position;
        let factor = if span > 0.0 {
            (position - before.position) / span
        } else {
            0.0
        };
        interpolate_colors(&before.color, &after.color, factor)
    }

    fn check_index(&self, index: usize) -> Result<(), GradientError> {
        if index < self.stops.len() {
            Ok(())
        } else {
            Err(GradientError::InvalidOperation(format!(
                "invalid color stop index {index} (have {})",
                self.stops.len()
            )))
        }
    }
}
