//! Logger setup for hosts embedding the studio.
//!
//! The library itself only emits through the `log` facade. With the
//! `env-logger` feature (on by default) a host can call `init_logging` once
//! to route those records to stderr.

use serde::{Deserialize, Serialize};

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "gradient_studio_core=debug"). When unset, `RUST_LOG` is used, then `info`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub color: ColorMode,
}

/// Whether log output uses ANSI colors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

#[cfg(feature = "env-logger")]
impl From<ColorMode> for env_logger::WriteStyle {
    fn from(mode: ColorMode) -> Self {
        match mode {
            ColorMode::Auto => env_logger::WriteStyle::Auto,
            ColorMode::Always => env_logger::WriteStyle::Always,
            ColorMode::Never => env_logger::WriteStyle::Never,
        }
    }
}

#[cfg(feature = "env-logger")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global logger. Calls after the first are ignored.
#[cfg(feature = "env-logger")]
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = &config.env_filter {
            builder.parse_filters(filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.color.into());

        // Another logger may already be installed by the host.
        if builder.try_init().is_err() {
            return;
        }
        log::debug!("logging initialized");
    });
}
