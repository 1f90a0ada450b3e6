//! Error types for the gradient-studio core.

use thiserror::Error;

/// Errors produced by gradient, color stop, history and preset operations.
///
/// Numeric input is never an error (it is clamped or defaulted); these
/// variants cover structural problems that would otherwise corrupt a gradient.
#[derive(Debug, Error)]
pub enum GradientError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An argument had an unknown name or an unusable shape.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The operation would break an invariant (e.g. dropping below two stops).
    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    /// The gradient type is not one of linear, radial or conic.
    #[error("unsupported gradient type: {0}")]
    UnsupportedType(String),

    /// The export format is not one of css, scss or less.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// An operation that needs a current gradient ran before one was set.
    #[error("no gradient set")]
    NoGradientSet,

    /// A preset lacked one or more required fields.
    #[error("missing required fields: {}", .0.join(", "))]
    MissingField(Vec<String>),

    /// A preset declared a gradient type that is not supported.
    #[error("invalid gradient type: {0}")]
    InvalidType(String),

    /// A preset had fewer than two color stops.
    #[error("at least 2 color stops required, got {0}")]
    InsufficientStops(usize),

    /// An imported payload did not have the expected structure.
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// No preset with the given id exists.
    #[error("preset not found: {0}")]
    PresetNotFound(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
