//! Command dispatch over the model, the stop store and the history log.
//!
//! A host turns each user intent into an [`Intent`] and hands it to
//! [`Studio::dispatch`]. Mutating intents update the model, resync the stop
//! store from the new gradient and record a history snapshot. Undo and redo
//! replay snapshots without recording. A failed intent changes nothing.

use crate::config::StudioConfig;
use crate::css::CssFormat;
use crate::gradient::{Gradient, GradientUpdate};
use crate::history::HistoryLog;
use crate::model::{GradientListener, GradientModel, ListenerId};
use crate::stops::{ColorStopStore, StopUpdate};
use crate::GradientError;
use serde_json::Value;

/// A user action against the studio.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Validate and load a raw gradient.
    LoadGradient(Value),
    /// Load an already typed gradient, e.g. one taken from a preset.
    ApplyGradient(Gradient),
    SetProperty { name: String, value: Value },
    Update(GradientUpdate),
    AddStop { position: f64, color: String, opacity: f64 },
    UpdateStop { index: usize, update: StopUpdate },
    RemoveStop { index: usize },
    Undo,
    Redo,
}

/// The editing session: current gradient, its stops and their history.
#[derive(Debug)]
pub struct Studio {
    model: GradientModel,
    stops: ColorStopStore,
    history: HistoryLog,
    config: StudioConfig,
}

impl Default for Studio {
    fn default() -> Self {
        Self::new(StudioConfig::default())
    }
}

impl Studio {
    pub fn new(config: StudioConfig) -> Self {
        Self::with_model(GradientModel::new(), config)
    }

    /// Builds a studio around an existing (possibly unset) model.
    pub fn with_model(model: GradientModel, config: StudioConfig) -> Self {
        let mut studio = Self {
            model,
            stops: ColorStopStore::new(),
            history: HistoryLog::new(config.history_capacity),
            config,
        };
        studio.sync_stops();
        studio
    }

    pub fn model(&self) -> &GradientModel {
        &self.model
    }

    pub fn stops(&self) -> &ColorStopStore {
        &self.stops
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn current_gradient(&self) -> Option<&Gradient> {
        self.model.current_gradient()
    }

    /// Registers a listener on the underlying model.
    pub fn subscribe(&mut self, listener: impl GradientListener + 'static) -> ListenerId {
        self.model.subscribe(listener)
    }

    /// CSS for the current gradient in the configured default format.
    pub fn css(&self) -> Result<String, GradientError> {
        self.model.generate_css(self.config.default_format)
    }

    pub fn css_as(&self, format: CssFormat) -> Result<String, GradientError> {
        self.model.generate_css(format)
    }

    /// Applies an intent.
    ///
    /// Returns the gradient after the change, or `None` when an undo or redo
    /// had nothing to step to.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Option<&Gradient>, GradientError> {
        log::debug!("dispatch: {}", intent_name(&intent));
        match intent {
            Intent::Undo => return Ok(self.replay(|history| history.undo().cloned())),
            Intent::Redo => return Ok(self.replay(|history| history.redo().cloned())),
            Intent::LoadGradient(raw) => {
                self.model.set_gradient(&raw)?;
            }
            Intent::ApplyGradient(gradient) => {
                self.model.set(gradient);
            }
            Intent::SetProperty { name, value } => {
                self.model.update_property(&name, &value)?;
            }
            Intent::Update(update) => {
                self.model.apply(update)?;
            }
            Intent::AddStop {
                position,
                color,
                opacity,
            } => self.edit_stops(|stops| {
                stops.add(position, &color, opacity);
                Ok(())
            })?,
            Intent::UpdateStop { index, update } => {
                self.edit_stops(|stops| stops.update(index, update).map(drop))?
            }
            Intent::RemoveStop { index } => {
                self.edit_stops(|stops| stops.remove(index).map(drop))?
            }
        }
        self.sync_stops();
        if let Some(gradient) = self.model.current_gradient() {
            self.history.record(gradient);
        }
        Ok(self.model.current_gradient())
    }

    /// Loads a gradient without touching history, as when restoring a session.
    pub fn restore(&mut self, gradient: Gradient) {
        self.model.set(gradient);
        self.sync_stops();
    }

    /// Samples the current ramp at `position` percent.
    pub fn color_at_position(&self, position: f64) -> String {
        self.stops.color_at_position(position)
    }

    fn edit_stops(
        &mut self,
        edit: impl FnOnce(&mut ColorStopStore) -> Result<(), GradientError>,
    ) -> Result<(), GradientError> {
        let current = self
            .model
            .current_gradient()
            .ok_or(GradientError::NoGradientSet)?;
        let mut stops = ColorStopStore::from_stops(&current.color_stops);
        edit(&mut stops)?;
        self.model
            .apply(GradientUpdate::ColorStops(stops.color_stops().to_vec()))?;
        Ok(())
    }

    fn replay(&mut self, step: impl FnOnce(&mut HistoryLog) -> Option<Gradient>) -> Option<&Gradient> {
        let snapshot = step(&mut self.history)?;
        self.model.set(snapshot);
        self.sync_stops();
        self.model.current_gradient()
    }

    fn sync_stops(&mut self) {
        match self.model.current_gradient() {
            Some(gradient) => {
                self.stops.set_color_stops(&gradient.color_stops);
            }
            None => {
                self.stops.set_color_stops(&[]);
            }
        }
    }
}

fn intent_name(intent: &Intent) -> &'static str {
    match intent {
        Intent::LoadGradient(_) => "load-gradient",
        Intent::ApplyGradient(_) => "apply-gradient",
        Intent::SetProperty { .. } => "set-property",
        Intent::Update(_) => "update",
        Intent::AddStop { .. } => "add-stop",
        Intent::UpdateStop { .. } => "update-stop",
        Intent::RemoveStop { .. } => "remove-stop",
        Intent::Undo => "undo",
        Intent::Redo => "redo",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::GradientKind;
    use serde_json::json;

    fn loaded() -> Studio {
        let mut studio = Studio::default();
        studio
            .dispatch(Intent::LoadGradient(json!({
                "colorStops": [
                    {"position": 0, "color": "#000000"},
                    {"position": 100, "color": "#ffffff"},
                ]
            })))
            .unwrap();
        studio
    }

    fn angle(studio: &Studio) -> f64 {
        studio.current_gradient().unwrap().angle
    }

    // -- Dispatch --

    #[test]
    fn load_records_history_and_syncs_stops() {
        let studio = loaded();
        assert_eq!(studio.history().len(), 1);
        assert_eq!(studio.stops().len(), 2);
        assert_eq!(studio.color_at_position(50.0), "#808080");
    }

    #[test]
    fn stop_intents_before_load_fail() {
        let mut studio = Studio::default();
        let result = studio.dispatch(Intent::AddStop {
            position: 50.0,
            color: "red".into(),
            opacity: 1.0,
        });
        assert!(matches!(result, Err(GradientError::NoGradientSet)));
        assert!(studio.history().is_empty());
    }

    #[test]
    fn add_stop_flows_into_the_gradient() {
        let mut studio = loaded();
        studio
            .dispatch(Intent::AddStop {
                position: 50.0,
                color: "red".into(),
                opacity: 1.0,
            })
            .unwrap();
        assert_eq!(studio.current_gradient().unwrap().color_stops.len(), 3);
        assert_eq!(studio.stops().len(), 3);
        assert_eq!(studio.color_at_position(50.0), "red");
        assert_eq!(
            studio.css().unwrap(),
            "background: linear-gradient(to right, #000000 0%, red 50%, #ffffff 100%);"
        );
    }

    #[test]
    fn failed_remove_changes_nothing() {
        let mut studio = loaded();
        let before = studio.current_gradient().cloned();
        let result = studio.dispatch(Intent::RemoveStop { index: 0 });
        assert!(matches!(result, Err(GradientError::InvalidOperation(_))));
        assert_eq!(studio.current_gradient().cloned(), before);
        assert_eq!(studio.stops().len(), 2);
        assert_eq!(studio.history().len(), 1);
    }

    #[test]
    fn update_stop_by_intent() {
        let mut studio = loaded();
        studio
            .dispatch(Intent::UpdateStop {
                index: 1,
                update: StopUpdate::Opacity(0.5),
            })
            .unwrap();
        assert_eq!(studio.current_gradient().unwrap().color_stops[1].opacity, 0.5);
    }

    #[test]
    fn set_property_rejects_bad_type() {
        let mut studio = loaded();
        let result = studio.dispatch(Intent::SetProperty {
            name: "type".into(),
            value: json!("fractal"),
        });
        assert!(matches!(result, Err(GradientError::UnsupportedType(_))));
        assert_eq!(studio.history().len(), 1);
    }

    // -- Undo / redo --

    #[test]
    fn undo_redo_replay_without_recording() {
        let mut studio = loaded();
        for a in [10.0, 20.0] {
            studio.dispatch(Intent::Update(GradientUpdate::Angle(a))).unwrap();
        }
        assert_eq!(studio.history().len(), 3);

        assert_eq!(studio.dispatch(Intent::Undo).unwrap().map(|g| g.angle), Some(10.0));
        assert_eq!(angle(&studio), 10.0);
        assert_eq!(studio.history().len(), 3);

        studio.dispatch(Intent::Redo).unwrap();
        assert_eq!(angle(&studio), 20.0);
        assert!(studio.dispatch(Intent::Redo).unwrap().is_none());
    }

    #[test]
    fn new_edit_after_undo_discards_redo() {
        let mut studio = loaded();
        studio.dispatch(Intent::Update(GradientUpdate::Angle(10.0))).unwrap();
        studio.dispatch(Intent::Update(GradientUpdate::Angle(20.0))).unwrap();
        studio.dispatch(Intent::Undo).unwrap();
        studio.dispatch(Intent::Undo).unwrap();
        studio
            .dispatch(Intent::Update(GradientUpdate::Kind(GradientKind::Radial)))
            .unwrap();
        assert!(studio.dispatch(Intent::Redo).unwrap().is_none());
        assert_eq!(studio.current_gradient().unwrap().kind, GradientKind::Radial);
    }

    #[test]
    fn undo_restores_stop_store() {
        let mut studio = loaded();
        studio
            .dispatch(Intent::AddStop {
                position: 25.0,
                color: "lime".into(),
                opacity: 1.0,
            })
            .unwrap();
        studio.dispatch(Intent::Undo).unwrap();
        assert_eq!(studio.stops().len(), 2);
    }

    #[test]
    fn restore_does_not_record() {
        let mut studio = Studio::default();
        studio.restore(Gradient::default());
        assert!(studio.history().is_empty());
        assert_eq!(studio.stops().len(), 2);
    }

    #[test]
    fn config_sets_history_capacity_and_format() {
        let config = StudioConfig {
            history_capacity: 2,
            default_format: CssFormat::Less,
            ..StudioConfig::default()
        };
        let mut studio = Studio::new(config);
        for a in [1.0, 2.0, 3.0] {
            studio.dispatch(Intent::ApplyGradient(Gradient {
                angle: a,
                ..Gradient::default()
            }))
            .unwrap();
        }
        assert_eq!(studio.history().len(), 2);
        assert!(studio.css().unwrap().starts_with("@gradient: "));
    }
}
