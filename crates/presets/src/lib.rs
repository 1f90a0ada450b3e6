#![deny(unsafe_code)]
//! Gradient presets: the built-in collection and a catalog that layers the
//! user's custom presets on top, with search, recommendations, pagination,
//! usage counts and JSON import/export.

mod builtin;
mod catalog;
mod preset;

pub use builtin::builtin_presets;
pub use catalog::{
    PresetCatalog, PresetExport, PresetLibrary, PresetStats, DEFAULT_PAGE_SIZE,
    DEFAULT_RECENT_LIMIT, DEFAULT_RECOMMENDATION_LIMIT, EXPORT_VERSION,
};
pub use preset::{validate_preset, Preset, CUSTOM_CATEGORY};
