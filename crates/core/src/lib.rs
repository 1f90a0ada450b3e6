#![deny(unsafe_code)]
//! Core of the gradient studio: color math, color stops, the gradient model
//! and its CSS compiler, undo/redo history, and the `Studio` controller that
//! ties them together.
//!
//! Everything here is synchronous and owned by the caller. Hosts feed in
//! loosely typed JSON (`serde_json::Value`) or typed values and get validated
//! [`Gradient`]s and CSS strings back.

pub mod clock;
pub mod color;
pub mod config;
pub mod css;
pub mod error;
pub mod gradient;
pub mod history;
pub mod logging;
pub mod model;
pub mod palette;
pub mod params;
pub mod prng;
pub mod session;
pub mod stop;
pub mod stops;
pub mod studio;

pub use clock::{Clock, ManualClock, SystemClock};
pub use color::{ColorFormat, ContrastReport, Hsl, Hsv, Rgb, Rgba};
pub use config::StudioConfig;
pub use css::CssFormat;
pub use error::GradientError;
pub use gradient::{Gradient, GradientKind, GradientUpdate, Position, RadialSize};
pub use history::HistoryLog;
pub use logging::LoggingConfig;
pub use model::{GradientInfo, GradientListener, GradientModel};
pub use palette::Harmony;
pub use prng::Xorshift64;
pub use session::SessionState;
pub use stop::ColorStop;
pub use stops::{ColorStopStore, StopUpdate};
pub use studio::{Intent, Studio};
