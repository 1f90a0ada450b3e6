//! The validated gradient descriptor and its property updates.
//!
//! A [`Gradient`] is a plain value. Validation is a pure function from loosely
//! typed JSON (or an unchecked `Gradient`) to a well-formed one, and every
//! update returns a new validated value rather than mutating in place.

use std::fmt;
use std::str::FromStr;

use crate::params::{coerce_f64, is_truthy, param_f64};
use crate::stop::{clamp_position, sort_stops, ColorStop};
use crate::GradientError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Angle used when none is given.
pub const DEFAULT_ANGLE: f64 = 90.0;

/// Shape of the gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
    Conic,
}

impl GradientKind {
    pub const ALL: [GradientKind; 3] = [GradientKind::Linear, GradientKind::Radial, GradientKind::Conic];

    pub fn name(self) -> &'static str {
        match self {
            GradientKind::Linear => "linear",
            GradientKind::Radial => "radial",
            GradientKind::Conic => "conic",
        }
    }
}

impl fmt::Display for GradientKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GradientKind {
    type Err = GradientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GradientKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| GradientError::UnsupportedType(s.to_string()))
    }
}

/// Ending shape extent of a radial gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RadialSize {
    ClosestSide,
    FarthestSide,
    ClosestCorner,
    #[default]
    FarthestCorner,
}

impl RadialSize {
    pub const ALL: [RadialSize; 4] = [
        RadialSize::ClosestSide,
        RadialSize::FarthestSide,
        RadialSize::ClosestCorner,
        RadialSize::FarthestCorner,
    ];

    /// CSS keyword for this size.
    pub fn name(self) -> &'static str {
        match self {
            RadialSize::ClosestSide => "closest-side",
            RadialSize::FarthestSide => "farthest-side",
            RadialSize::ClosestCorner => "closest-corner",
            RadialSize::FarthestCorner => "farthest-corner",
        }
    }

    /// Looks up a size keyword, falling back to `farthest-corner`.
    pub fn from_name_or_default(name: &str) -> Self {
        RadialSize::ALL
            .into_iter()
            .find(|s| s.name() == name)
            .unwrap_or_default()
    }

    fn from_value(value: Option<&Value>) -> Self {
        value
            .and_then(Value::as_str)
            .map_or_else(RadialSize::default, RadialSize::from_name_or_default)
    }
}

impl fmt::Display for RadialSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Center of a radial or conic gradient, in percent of the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Default for Position {
    fn default() -> Self {
        Self { x: 50.0, y: 50.0 }
    }
}

impl Position {
    /// Creates a position with both axes clamped to [0, 100].
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: clamp_position(x),
            y: clamp_position(y),
        }
    }

    /// Builds a position from loosely typed JSON; missing or non-numeric axes are 50.
    pub fn from_value(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }
        Self::new(param_f64(value, "x", 50.0), param_f64(value, "y", 50.0))
    }

    fn normalized(self) -> Self {
        Self::new(self.x, self.y)
    }
}

/// Normalizes an angle into [0, 360). Non-finite angles become 0.
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped + 0.0
    }
}

/// The two-stop red to blue ramp used when a gradient has too few stops.
pub fn default_color_stops() -> Vec<ColorStop> {
    vec![
        ColorStop {
            position: 0.0,
            color: "#ff0000".to_string(),
            opacity: 1.0,
        },
        ColorStop {
            position: 100.0,
            color: "#0000ff".to_string(),
            opacity: 1.0,
        },
    ]
}

/// Validates a raw stop array: non-objects are dropped, the rest are
/// clamped and sorted. Non-arrays yield an empty list.
pub fn validate_color_stops(value: &Value) -> Vec<ColorStop> {
    let mut stops: Vec<ColorStop> = value
        .as_array()
        .map(|items| items.iter().filter_map(ColorStop::from_value).collect())
        .unwrap_or_default();
    sort_stops(&mut stops);
    stops
}

fn ensure_min_stops(stops: Vec<ColorStop>) -> Vec<ColorStop> {
    if stops.len() < 2 {
        default_color_stops()
    } else {
        stops
    }
}

/// A well-formed CSS gradient description.
///
/// Values built through [`Gradient::from_value`], [`Gradient::normalized`]
/// or [`Gradient::with_update`] always have a normalized angle, clamped
/// position, at least two sorted stops and valid stop colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Gradient {
    #[serde(rename = "type")]
    pub kind: GradientKind,
    pub angle: f64,
    pub position: Position,
    pub size: RadialSize,
    #[serde(rename = "colorStops")]
    pub color_stops: Vec<ColorStop>,
    pub repeating: bool,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            kind: GradientKind::Linear,
            angle: DEFAULT_ANGLE,
            position: Position::default(),
            size: RadialSize::FarthestCorner,
            color_stops: default_color_stops(),
            repeating: false,
        }
    }
}

impl Gradient {
    /// Runs the full validation pass over loosely typed JSON.
    ///
    /// Numeric garbage is defaulted or clamped. Structural problems are
    /// rejected: a non-object is `InvalidArgument` and an unknown `type` is
    /// `UnsupportedType`.
    pub fn from_value(raw: &Value) -> Result<Self, GradientError> {
        if !raw.is_object() {
            return Err(GradientError::InvalidArgument(
                "gradient must be a JSON object".to_string(),
            ));
        }

        let kind = match raw.get("type") {
            None | Some(Value::Null) => GradientKind::Linear,
            Some(Value::String(s)) if s.is_empty() => GradientKind::Linear,
            Some(Value::String(s)) => s.parse()?,
            Some(other) => return Err(GradientError::UnsupportedType(other.to_string())),
        };

        Ok(Self {
            kind,
            angle: normalize_angle(param_f64(raw, "angle", DEFAULT_ANGLE)),
            position: raw.get("position").map(Position::from_value).unwrap_or_default(),
            size: RadialSize::from_value(raw.get("size")),
            color_stops: ensure_min_stops(
                raw.get("colorStops")
                    .map(validate_color_stops)
                    .unwrap_or_default(),
            ),
            repeating: raw.get("repeating").is_some_and(is_truthy),
        })
    }

    /// Returns a copy with every invariant re-established.
    ///
    /// Idempotent: normalizing an already normalized gradient is a no-op.
    pub fn normalized(&self) -> Self {
        let mut stops: Vec<ColorStop> = self.color_stops.iter().map(ColorStop::normalized).collect();
        sort_stops(&mut stops);
        Self {
            kind: self.kind,
            angle: normalize_angle(self.angle),
            position: self.position.normalized(),
            size: self.size,
            color_stops: ensure_min_stops(stops),
            repeating: self.repeating,
        }
    }

    /// Returns a new validated gradient with `update` applied.
    pub fn with_update(&self, update: GradientUpdate) -> Self {
        let mut next = self.clone();
        match update {
            GradientUpdate::Kind(kind) => next.kind = kind,
            GradientUpdate::Angle(angle) => next.angle = angle,
            GradientUpdate::Position(position) => next.position = position,
            GradientUpdate::Size(size) => next.size = size,
            GradientUpdate::ColorStops(stops) => next.color_stops = stops,
            GradientUpdate::Repeating(repeating) => next.repeating = repeating,
        }
        next.normalized()
    }

    /// Whether any stop is partly transparent.
    pub fn has_transparency(&self) -> bool {
        self.color_stops.iter().any(ColorStop::is_translucent)
    }
}

/// A single-property edit to a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientUpdate {
    Kind(GradientKind),
    Angle(f64),
    Position(Position),
    Size(RadialSize),
    ColorStops(Vec<ColorStop>),
    Repeating(bool),
}

impl GradientUpdate {
    /// Builds an update from a property name and loosely typed value.
    ///
    /// `type` must name a supported kind (`UnsupportedType` otherwise), and
    /// unknown property names are `InvalidArgument`. Every other property
    /// coerces its value the same way [`Gradient::from_value`] does.
    pub fn from_name(property: &str, value: &Value) -> Result<Self, GradientError> {
        let update = match property {
            "type" => match value.as_str() {
                Some(name) => GradientUpdate::Kind(name.parse()?),
                None => return Err(GradientError::UnsupportedType(value.to_string())),
            },
            "angle" => GradientUpdate::Angle(coerce_f64(value).unwrap_or(DEFAULT_ANGLE)),
            "position" => GradientUpdate::Position(Position::from_value(value)),
            "size" => GradientUpdate::Size(RadialSize::from_value(Some(value))),
            "colorStops" => GradientUpdate::ColorStops(validate_color_stops(value)),
            "repeating" => GradientUpdate::Repeating(is_truthy(value)),
            other => {
                return Err(GradientError::InvalidArgument(format!(
                    "unknown gradient property: {other}"
                )))
            }
        };
        Ok(update)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn stop(position: f64, color: &str) -> ColorStop {
        ColorStop::new(position, color, 1.0).unwrap()
    }

    // -- Angle normalization --

    #[test]
    fn angles_wrap_into_range() {
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(normalize_angle(-90.0), 270.0);
        assert_eq!(normalize_angle(360.0), 0.0);
        assert_eq!(normalize_angle(37.5), 37.5);
    }

    #[test]
    fn negative_zero_and_tiny_negatives_become_zero() {
        assert!(normalize_angle(-0.0).is_sign_positive());
        assert_eq!(normalize_angle(-1e-20), 0.0);
        assert_eq!(normalize_angle(f64::NAN), 0.0);
    }

    // -- from_value --

    #[test]
    fn empty_object_gets_all_defaults() {
        let g = Gradient::from_value(&json!({})).unwrap();
        assert_eq!(g, Gradient::default());
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(matches!(
            Gradient::from_value(&json!([1, 2])),
            Err(GradientError::InvalidArgument(_))
        ));
    }

    #[test]
    fn unknown_type_is_rejected() {
        assert!(matches!(
            Gradient::from_value(&json!({"type": "diamond"})),
            Err(GradientError::UnsupportedType(_))
        ));
        assert!(matches!(
            Gradient::from_value(&json!({"type": 3})),
            Err(GradientError::UnsupportedType(_))
        ));
    }

    #[test]
    fn zero_angle_is_kept() {
        let g = Gradient::from_value(&json!({"angle": 0})).unwrap();
        assert_eq!(g.angle, 0.0);
    }

    #[test]
    fn garbage_numbers_fall_back_to_defaults() {
        let g = Gradient::from_value(&json!({
            "type": "radial",
            "angle": "steep",
            "position": {"x": "left", "y": 250},
            "size": "huge",
        }))
        .unwrap();
        assert_eq!(g.kind, GradientKind::Radial);
        assert_eq!(g.angle, 90.0);
        assert_eq!(g.position, Position { x: 50.0, y: 100.0 });
        assert_eq!(g.size, RadialSize::FarthestCorner);
    }

    #[test]
    fn stops_are_validated_and_sorted() {
        let g = Gradient::from_value(&json!({
            "colorStops": [
                {"position": 80, "color": "blue"},
                "junk",
                {"position": -5, "color": "not-a-color", "opacity": 0.5},
            ]
        }))
        .unwrap();
        assert_eq!(g.color_stops.len(), 2);
        assert_eq!(g.color_stops[0].position, 0.0);
        assert_eq!(g.color_stops[0].color, "#000000");
        assert_eq!(g.color_stops[0].opacity, 0.5);
        assert_eq!(g.color_stops[1].color, "blue");
    }

    #[test]
    fn too_few_stops_reset_to_default_pair() {
        let g = Gradient::from_value(&json!({"colorStops": [{"position": 10, "color": "#fff"}]}))
            .unwrap();
        assert_eq!(g.color_stops, default_color_stops());
        let g = Gradient::from_value(&json!({"colorStops": "nope"})).unwrap();
        assert_eq!(g.color_stops, default_color_stops());
    }

    #[test]
    fn repeating_uses_truthiness() {
        let g = Gradient::from_value(&json!({"repeating": "yes"})).unwrap();
        assert!(g.repeating);
        let g = Gradient::from_value(&json!({"repeating": 0})).unwrap();
        assert!(!g.repeating);
    }

    // -- Serialization --

    #[test]
    fn serializes_with_camel_case_shape() {
        let value = serde_json::to_value(Gradient::default()).unwrap();
        assert_eq!(value["type"], "linear");
        assert_eq!(value["size"], "farthest-corner");
        assert_eq!(value["colorStops"][1]["color"], "#0000ff");
        assert_eq!(value["position"], json!({"x": 50.0, "y": 50.0}));
    }

    #[test]
    fn validation_round_trips_through_json() {
        let g = Gradient::from_value(&json!({
            "type": "conic", "angle": 33, "position": {"x": 10, "y": 20},
            "colorStops": [{"position": 0, "color": "red"}, {"position": 60, "color": "#00ff00", "opacity": 0.3}],
            "repeating": true
        }))
        .unwrap();
        let again = Gradient::from_value(&serde_json::to_value(&g).unwrap()).unwrap();
        assert_eq!(g, again);
    }

    // -- Updates --

    #[test]
    fn with_update_returns_new_normalized_value() {
        let g = Gradient::default();
        let rotated = g.with_update(GradientUpdate::Angle(-45.0));
        assert_eq!(rotated.angle, 315.0);
        assert_eq!(g.angle, 90.0);
    }

    #[test]
    fn with_update_resets_short_stop_lists() {
        let g = Gradient::default().with_update(GradientUpdate::ColorStops(vec![stop(20.0, "red")]));
        assert_eq!(g.color_stops, default_color_stops());
    }

    #[test]
    fn update_from_name_checks_type() {
        assert_eq!(
            GradientUpdate::from_name("type", &json!("conic")).unwrap(),
            GradientUpdate::Kind(GradientKind::Conic)
        );
        assert!(matches!(
            GradientUpdate::from_name("type", &json!("spiral")),
            Err(GradientError::UnsupportedType(_))
        ));
        assert!(matches!(
            GradientUpdate::from_name("blend", &json!(1)),
            Err(GradientError::InvalidArgument(_))
        ));
    }

    #[test]
    fn update_from_name_coerces_values() {
        assert_eq!(
            GradientUpdate::from_name("repeating", &json!(1)).unwrap(),
            GradientUpdate::Repeating(true)
        );
        assert_eq!(
            GradientUpdate::from_name("size", &json!("closest-side")).unwrap(),
            GradientUpdate::Size(RadialSize::ClosestSide)
        );
        assert_eq!(
            GradientUpdate::from_name("position", &json!(null)).unwrap(),
            GradientUpdate::Position(Position::default())
        );
    }

    #[test]
    fn non_numeric_angle_falls_back_like_from_value() {
        let raw = json!({"angle": "steep"});
        let loaded = Gradient::from_value(&raw).unwrap();
        let updated = Gradient::default()
            .with_update(GradientUpdate::Angle(10.0))
            .with_update(GradientUpdate::from_name("angle", &raw["angle"]).unwrap());
        assert_eq!(loaded.angle, DEFAULT_ANGLE);
        assert_eq!(updated.angle, DEFAULT_ANGLE);
        assert_eq!(
            GradientUpdate::from_name("angle", &json!(0)).unwrap(),
            GradientUpdate::Angle(0.0)
        );
    }

    // -- Property-based tests --

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn arb_stop() -> impl Strategy<Value = Value> {
            (-50.0_f64..150.0, -1.0_f64..2.0, prop::sample::select(vec!["red", "#abc", "rgb(1, 2, 3)", "junk"]))
                .prop_map(|(p, o, c)| json!({"position": p, "opacity": o, "color": c}))
        }

        proptest! {
            #[test]
            fn normalized_angle_in_range(angle in -1e6_f64..1e6) {
                let a = normalize_angle(angle);
                prop_assert!((0.0..360.0).contains(&a), "angle {angle} -> {a}");
            }

            #[test]
            fn validation_is_idempotent(
                angle in -720.0_f64..720.0,
                x in -50.0_f64..150.0,
                y in -50.0_f64..150.0,
                stops in prop::collection::vec(arb_stop(), 0..6),
                kind in 0_usize..3,
            ) {
                let raw = json!({
                    "type": GradientKind::ALL[kind].name(),
                    "angle": angle,
                    "position": {"x": x, "y": y},
                    "colorStops": stops,
                });
                let once = Gradient::from_value(&raw).unwrap();
                let twice = Gradient::from_value(&serde_json::to_value(&once).unwrap()).unwrap();
                prop_assert_eq!(&once, &twice);
                prop_assert_eq!(once.normalized(), once.clone());
                prop_assert!(once.color_stops.len() >= 2);
                prop_assert!(once.color_stops.windows(2).all(|w| w[0].position <= w[1].position));
            }
        }
    }
}
