//! Preset catalog: built-in presets plus the user's custom library.
//!
//! Built-ins are read-only and always come first in catalog order. Custom
//! presets are created, edited, duplicated, imported and exported here; the
//! host persists them through [`PresetCatalog::to_library_json`] and
//! [`PresetCatalog::load_library_json`].

use std::collections::BTreeMap;
use std::fmt;

use gradient_studio_core::clock::{Clock, SystemClock};
use gradient_studio_core::gradient::Gradient;
use gradient_studio_core::prng::Xorshift64;
use gradient_studio_core::GradientError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::builtin::builtin_presets;
use crate::preset::{validate_preset, Preset, CUSTOM_CATEGORY};

/// Version tag written into preset exports.
pub const EXPORT_VERSION: &str = "1.0";

/// Default page size for category listings and pagination.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Default number of recent custom presets returned.
pub const DEFAULT_RECENT_LIMIT: usize = 6;

/// Default number of recommendations returned.
pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 6;

const DEFAULT_CATEGORIES: [&str; 7] = [
    "popular",
    "nature",
    "sunset",
    "ocean",
    "rainbow",
    "monochrome",
    "custom",
];

/// Fields a patch may not overwrite.
const PROTECTED_FIELDS: [&str; 5] = ["id", "custom", "created", "updated", "imported"];

/// Counts over the whole catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PresetStats {
    pub total: usize,
    pub builtin: usize,
    pub custom: usize,
    pub by_category: BTreeMap<String, usize>,
    pub by_type: BTreeMap<String, usize>,
}

/// Bundle produced by [`PresetCatalog::export_presets`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetExport {
    pub version: String,
    pub exported: u64,
    pub presets: Vec<Preset>,
}

/// Persisted custom library: `{presets: [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PresetLibrary {
    pub presets: Vec<Preset>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub usage: BTreeMap<String, u64>,
}

pub struct PresetCatalog {
    builtin: Vec<Preset>,
    custom: Vec<Preset>,
    categories: Vec<String>,
    usage: BTreeMap<String, u64>,
    rng: Xorshift64,
    clock: Box<dyn Clock>,
}

impl fmt::Debug for PresetCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PresetCatalog")
            .field("builtin", &self.builtin.len())
            .field("custom", &self.custom.len())
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl PresetCatalog {
    /// Creates a catalog with the built-ins, using the system clock and an
    /// id generator seeded from it.
    pub fn new() -> Self {
        let seed = SystemClock.now_ms();
        Self::with_clock(SystemClock, seed)
    }

    /// Creates a catalog with an explicit clock and id seed.
    pub fn with_clock(clock: impl Clock + 'static, seed: u64) -> Self {
        let builtin = builtin_presets();
        log::info!("loaded {} built-in presets", builtin.len());
        Self {
            builtin,
            custom: Vec::new(),
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            usage: BTreeMap::new(),
            rng: Xorshift64::new(seed),
            clock: Box::new(clock),
        }
    }

    fn all(&self) -> impl Iterator<Item = &Preset> {
        self.builtin.iter().chain(&self.custom)
    }

    fn generate_id(&mut self) -> String {
        format!("preset_{}_{}", self.clock.now_ms(), self.rng.next_token(9))
    }

    // -- Queries --

    /// Built-ins then custom presets, optionally filtered by category and
    /// truncated to `limit`.
    pub fn presets(&self, category: Option<&str>, limit: Option<usize>) -> Vec<&Preset> {
        self.all()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .take(limit.unwrap_or(usize::MAX))
            .collect()
    }

    pub fn preset_by_id(&self, id: &str) -> Option<&Preset> {
        self.all().find(|p| p.id == id)
    }

    pub fn custom_presets(&self) -> &[Preset] {
        &self.custom
    }

    /// Case-insensitive substring search over name, category and type.
    pub fn search_presets(&self, query: &str, category: Option<&str>) -> Vec<&Preset> {
        let needle = query.to_lowercase();
        self.presets(category, None)
            .into_iter()
            .filter(|p| p.matches(&needle))
            .collect()
    }

    pub fn presets_by_category(&self, category: &str) -> Vec<&Preset> {
        self.presets(Some(category), None)
    }

    /// The `popular` category, [`DEFAULT_PAGE_SIZE`] presets unless `limit` is given.
    pub fn popular_presets(&self, limit: Option<usize>) -> Vec<&Preset> {
        self.presets(Some("popular"), Some(limit.unwrap_or(DEFAULT_PAGE_SIZE)))
    }

    /// Custom presets, newest first by creation time. Returns
    /// [`DEFAULT_RECENT_LIMIT`] presets unless `limit` is given.
    pub fn recent_custom_presets(&self, limit: Option<usize>) -> Vec<&Preset> {
        let mut recent: Vec<&Preset> = self.custom.iter().collect();
        recent.sort_by(|a, b| b.created.cmp(&a.created));
        recent.truncate(limit.unwrap_or(DEFAULT_RECENT_LIMIT));
        recent
    }

    /// Up to `limit` presets (default [`DEFAULT_RECOMMENDATION_LIMIT`]): the
    /// first `limit / 2` sharing `current`'s type, then presets of other
    /// types, both in catalog order.
    pub fn recommendations(&self, current: &Gradient, limit: Option<usize>) -> Vec<&Preset> {
        let limit = limit.unwrap_or(DEFAULT_RECOMMENDATION_LIMIT);
        let mut picks: Vec<&Preset> = self
            .all()
            .filter(|p| p.kind() == current.kind)
            .take(limit / 2)
            .collect();
        let remaining = limit - picks.len();
        picks.extend(self.all().filter(|p| p.kind() != current.kind).take(remaining));
        picks
    }

    /// One page of a (possibly filtered) listing, [`DEFAULT_PAGE_SIZE`] long
    /// unless `limit` is given.
    pub fn load_more_presets(&self, category: Option<&str>, offset: usize, limit: Option<usize>) -> Vec<&Preset> {
        self.presets(category, None)
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(DEFAULT_PAGE_SIZE))
            .collect()
    }

    pub fn preset_stats(&self) -> PresetStats {
        let mut by_category = BTreeMap::new();
        let mut by_type = BTreeMap::new();
        for preset in self.all() {
            *by_category.entry(preset.category.clone()).or_insert(0) += 1;
            *by_type.entry(preset.kind().name().to_string()).or_insert(0) += 1;
        }
        PresetStats {
            total: self.builtin.len() + self.custom.len(),
            builtin: self.builtin.len(),
            custom: self.custom.len(),
            by_category,
            by_type,
        }
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Adds a category; returns `false` if it already exists.
    pub fn add_category(&mut self, name: &str) -> bool {
        if self.categories.iter().any(|c| c == name) {
            return false;
        }
        self.categories.push(name.to_string());
        true
    }

    // -- Custom preset editing --

    /// Saves `gradient` as a new custom preset.
    pub fn add_custom_preset(&mut self, gradient: &Gradient, name: &str, category: Option<&str>) -> &Preset {
        let preset = Preset {
            id: self.generate_id(),
            name: name.to_string(),
            category: category.unwrap_or(CUSTOM_CATEGORY).to_string(),
            gradient: gradient.normalized(),
            custom: true,
            created: Some(self.clock.now_ms()),
            updated: None,
            imported: None,
        };
        log::debug!("added custom preset {}", preset.id);
        self.push_custom(preset)
    }

    /// Removes a custom preset. Built-ins cannot be removed.
    pub fn remove_custom_preset(&mut self, id: &str) -> Result<Preset, GradientError> {
        let index = self.custom_index(id)?;
        Ok(self.custom.remove(index))
    }

    /// Merges a JSON patch into a custom preset.
    ///
    /// Top-level fields in `patch` replace the preset's, except `id`,
    /// `custom` and the timestamps. The merged gradient is re-validated and
    /// `updated` is stamped. On error the preset is unchanged.
    pub fn update_custom_preset(&mut self, id: &str, patch: &Value) -> Result<&Preset, GradientError> {
        let index = self.custom_index(id)?;
        let Some(patch) = patch.as_object() else {
            return Err(GradientError::InvalidArgument(
                "preset patch must be a JSON object".to_string(),
            ));
        };

        let mut merged = match serde_json::to_value(&self.custom[index])? {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        for (key, value) in patch {
            if !PROTECTED_FIELDS.contains(&key.as_str()) {
                merged.insert(key.clone(), value.clone());
            }
        }
        let merged = Value::Object(merged);

        let gradient = Gradient::from_value(&merged)?;
        let now = self.clock.now_ms();
        let preset = &mut self.custom[index];
        if let Some(name) = merged.get("name").and_then(Value::as_str) {
            preset.name = name.to_string();
        }
        if let Some(category) = merged.get("category").and_then(Value::as_str) {
            preset.category = category.to_string();
        }
        preset.gradient = gradient;
        preset.updated = Some(now);
        Ok(preset)
    }

    /// Copies any preset (built-in or custom) into a new custom preset named
    /// `"<name> (Copy)"`.
    pub fn duplicate_preset(&mut self, id: &str) -> Result<&Preset, GradientError> {
        let original = self
            .preset_by_id(id)
            .cloned()
            .ok_or_else(|| GradientError::PresetNotFound(id.to_string()))?;
        let duplicate = Preset {
            id: self.generate_id(),
            name: format!("{} (Copy)", original.name),
            custom: true,
            created: Some(self.clock.now_ms()),
            updated: None,
            imported: None,
            ..original
        };
        Ok(self.push_custom(duplicate))
    }

    pub fn clear_custom_presets(&mut self) {
        self.custom.clear();
    }

    // -- Usage tracking --

    /// Counts one use of a preset.
    pub fn track_usage(&mut self, id: &str) -> u64 {
        let count = self.usage.entry(id.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn usage_stats(&self) -> &BTreeMap<String, u64> {
        &self.usage
    }

    // -- Import / export --

    /// Exports custom presets, all of them or only those in `ids`.
    pub fn export_presets(&self, ids: Option<&[&str]>) -> PresetExport {
        let presets = self
            .custom
            .iter()
            .filter(|p| ids.map_or(true, |ids| ids.contains(&p.id.as_str())))
            .cloned()
            .collect();
        PresetExport {
            version: EXPORT_VERSION.to_string(),
            exported: self.clock.now_ms(),
            presets,
        }
    }

    /// Imports every preset in `data.presets` as a new custom preset with a
    /// fresh id and an `imported` stamp.
    ///
    /// Fails with `InvalidFormat` unless `presets` is a list. Each entry must
    /// pass [`validate_preset`]; one bad entry rejects the whole batch.
    pub fn import_presets(&mut self, data: &Value) -> Result<&[Preset], GradientError> {
        let Some(entries) = data.get("presets").and_then(Value::as_array) else {
            log::warn!("preset import rejected: no presets list");
            return Err(GradientError::InvalidFormat(
                "presets field must be a list".to_string(),
            ));
        };

        let mut parsed = Vec::with_capacity(entries.len());
        for entry in entries {
            validate_preset(entry).inspect_err(|e| log::warn!("preset import rejected: {e}"))?;
            parsed.push((
                entry["name"].as_str().unwrap_or_default().to_string(),
                entry
                    .get("category")
                    .and_then(Value::as_str)
                    .unwrap_or(CUSTOM_CATEGORY)
                    .to_string(),
                entry.get("created").and_then(Value::as_u64),
                Gradient::from_value(entry)?,
            ));
        }

        let now = self.clock.now_ms();
        let start = self.custom.len();
        for (name, category, created, gradient) in parsed {
            let preset = Preset {
                id: self.generate_id(),
                name,
                category,
                gradient,
                custom: true,
                created,
                updated: None,
                imported: Some(now),
            };
            self.custom.push(preset);
        }
        log::info!("imported {} presets", self.custom.len() - start);
        Ok(&self.custom[start..])
    }

    /// Serializes the custom library (and usage counts) for storage.
    pub fn to_library_json(&self) -> Result<String, GradientError> {
        let library = PresetLibrary {
            presets: self.custom.clone(),
            usage: self.usage.clone(),
        };
        Ok(serde_json::to_string(&library)?)
    }

    /// Replaces the custom library with a stored one; returns how many
    /// presets were loaded. Gradients are re-normalized.
    pub fn load_library_json(&mut self, json: &str) -> Result<usize, GradientError> {
        let library: PresetLibrary = serde_json::from_str(json)?;
        self.custom = library
            .presets
            .into_iter()
            .map(|preset| Preset {
                gradient: preset.gradient.normalized(),
                custom: true,
                ..preset
            })
            .collect();
        self.usage = library.usage;
        log::info!("loaded {} custom presets", self.custom.len());
        Ok(self.custom.len())
    }

    fn custom_index(&self, id: &str) -> Result<usize, GradientError> {
        self.custom
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| GradientError::PresetNotFound(id.to_string()))
    }

    fn push_custom(&mut self, preset: Preset) -> &Preset {
        self.custom.push(preset);
        &self.custom[self.custom.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gradient_studio_core::clock::ManualClock;
    use gradient_studio_core::gradient::{GradientKind, GradientUpdate};
    use serde_json::json;

    const NOW: u64 = 1_700_000_000_000;

    fn new_catalog() -> (PresetCatalog, ManualClock) {
        let clock = ManualClock::new(NOW);
        (PresetCatalog::with_clock(clock.clone(), 42), clock)
    }

    fn raw_preset(name: &str, kind: &str) -> Value {
        json!({
            "name": name,
            "type": kind,
            "category": "imports",
            "colorStops": [
                {"position": 0, "color": "#000000"},
                {"position": 100, "color": "#ffffff"},
            ]
        })
    }

    // -- Queries --

    #[test]
    fn presets_filter_and_limit() {
        let (catalog, _) = new_catalog();
        assert_eq!(catalog.presets(None, None).len(), 24);
        assert_eq!(catalog.presets(Some("ocean"), None).len(), 5);
        assert_eq!(catalog.presets(None, Some(3)).len(), 3);
        assert!(catalog.presets(Some("custom"), None).is_empty());
    }

    #[test]
    fn popular_presets_in_catalog_order() {
        let (catalog, _) = new_catalog();
        let ids: Vec<&str> = catalog.popular_presets(None).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            ["sunset-orange", "ocean-blue", "purple-pink", "young-passion", "lady-lips", "amy-crisp"]
        );
        assert_eq!(catalog.popular_presets(Some(2)).len(), 2);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let (catalog, _) = new_catalog();
        let by_name: Vec<&str> = catalog.search_presets("SUNSET", None).iter().map(|p| p.id.as_str()).collect();
        assert!(by_name.contains(&"sunset-orange"));
        assert!(by_name.contains(&"juicy-peach"));
        assert_eq!(catalog.search_presets("conic", None).len(), 2);
        assert_eq!(catalog.search_presets("radial", Some("ocean")).len(), 1);
        assert!(catalog.search_presets("zebra", None).is_empty());
    }

    #[test]
    fn recommendations_take_type_prefixes() {
        let (catalog, _) = new_catalog();
        let radial = Gradient {
            kind: GradientKind::Radial,
            ..Gradient::default()
        };
        let ids: Vec<&str> = catalog.recommendations(&radial, None).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(
            ids,
            ["radial-sunset", "radial-ocean", "sunset-orange", "ocean-blue", "purple-pink", "green-teal"]
        );
        // Only two radial presets exist, so odd limits fill with other types.
        let ids: Vec<&str> = catalog.recommendations(&radial, Some(9)).iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids.len(), 9);
        assert_eq!(&ids[..2], ["radial-sunset", "radial-ocean"]);
    }

    #[test]
    fn load_more_pages_through_listing() {
        let (catalog, _) = new_catalog();
        let page = catalog.load_more_presets(None, 20, None);
        assert_eq!(page.len(), 4);
        assert_eq!(page[0].id, "radial-sunset");
        assert!(catalog.load_more_presets(None, 30, Some(12)).is_empty());
    }

    #[test]
    fn stats_count_by_category_and_type() {
        let (catalog, _) = new_catalog();
        let stats = catalog.preset_stats();
        assert_eq!(stats.total, 24);
        assert_eq!(stats.builtin, 24);
        assert_eq!(stats.custom, 0);
        assert_eq!(stats.by_type["linear"], 20);
        assert_eq!(stats.by_category["popular"], 6);
        assert_eq!(stats.by_category.values().sum::<usize>(), 24);
    }

    #[test]
    fn categories_can_be_extended_once() {
        let (mut catalog, _) = new_catalog();
        assert_eq!(catalog.categories().len(), 7);
        assert!(catalog.add_category("retro"));
        assert!(!catalog.add_category("retro"));
        assert!(!catalog.add_category("ocean"));
        assert_eq!(catalog.categories().last().map(String::as_str), Some("retro"));
    }

    // -- Custom presets --

    #[test]
    fn add_custom_preset_stamps_id_and_created() {
        let (mut catalog, _) = new_catalog();
        let preset = catalog.add_custom_preset(&Gradient::default(), "Mine", None).clone();
        assert!(preset.id.starts_with(&format!("preset_{NOW}_")));
        assert_eq!(preset.id.len(), format!("preset_{NOW}_").len() + 9);
        assert_eq!(preset.category, "custom");
        assert!(preset.custom);
        assert_eq!(preset.created, Some(NOW));
        assert_eq!(catalog.preset_by_id(&preset.id), Some(&preset));
        assert_eq!(catalog.presets(None, None).len(), 25);
    }

    #[test]
    fn generated_ids_are_unique() {
        let (mut catalog, _) = new_catalog();
        let a = catalog.add_custom_preset(&Gradient::default(), "A", None).id.clone();
        let b = catalog.add_custom_preset(&Gradient::default(), "B", None).id.clone();
        assert_ne!(a, b);
    }

    #[test]
    fn remove_only_touches_custom_presets() {
        let (mut catalog, _) = new_catalog();
        let id = catalog.add_custom_preset(&Gradient::default(), "Tmp", None).id.clone();
        assert_eq!(catalog.remove_custom_preset(&id).unwrap().name, "Tmp");
        assert!(matches!(
            catalog.remove_custom_preset(&id),
            Err(GradientError::PresetNotFound(_))
        ));
        assert!(matches!(
            catalog.remove_custom_preset("ocean-blue"),
            Err(GradientError::PresetNotFound(_))
        ));
    }

    #[test]
    fn update_merges_patch_and_stamps_updated() {
        let (mut catalog, clock) = new_catalog();
        let id = catalog.add_custom_preset(&Gradient::default(), "Draft", None).id.clone();
        clock.advance(5_000);

        let updated = catalog
            .update_custom_preset(&id, &json!({"name": "Final", "angle": 450, "id": "hijack", "custom": false}))
            .unwrap();
        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Final");
        assert!(updated.custom);
        assert_eq!(updated.gradient.angle, 90.0);
        assert_eq!(updated.created, Some(NOW));
        assert_eq!(updated.updated, Some(NOW + 5_000));
    }

    #[test]
    fn failed_update_leaves_preset_unchanged() {
        let (mut catalog, _) = new_catalog();
        let id = catalog.add_custom_preset(&Gradient::default(), "Keep", None).id.clone();
        let before = catalog.preset_by_id(&id).cloned();
        assert!(matches!(
            catalog.update_custom_preset(&id, &json!({"type": "mesh", "name": "Lost"})),
            Err(GradientError::UnsupportedType(_))
        ));
        assert!(matches!(
            catalog.update_custom_preset(&id, &json!([1])),
            Err(GradientError::InvalidArgument(_))
        ));
        assert_eq!(catalog.preset_by_id(&id).cloned(), before);
    }

    #[test]
    fn duplicate_builtin_creates_custom_copy() {
        let (mut catalog, _) = new_catalog();
        let copy = catalog.duplicate_preset("deep-blue").unwrap().clone();
        assert_eq!(copy.name, "Deep Blue (Copy)");
        assert!(copy.custom);
        assert_eq!(copy.category, "ocean");
        assert_ne!(copy.id, "deep-blue");
        assert_eq!(copy.gradient, catalog.preset_by_id("deep-blue").unwrap().gradient);
        assert!(matches!(
            catalog.duplicate_preset("missing"),
            Err(GradientError::PresetNotFound(_))
        ));
    }

    #[test]
    fn recent_custom_sorted_newest_first() {
        let (mut catalog, clock) = new_catalog();
        for name in ["first", "second", "third"] {
            catalog.add_custom_preset(&Gradient::default(), name, None);
            clock.advance(1_000);
        }
        let names: Vec<&str> = catalog.recent_custom_presets(Some(2)).iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["third", "second"]);
    }

    #[test]
    fn listing_limits_default_when_omitted() {
        let (mut catalog, clock) = new_catalog();
        for i in 0..8 {
            catalog.add_custom_preset(&Gradient::default(), &format!("p{i}"), None);
            clock.advance(1);
        }
        assert_eq!(catalog.recent_custom_presets(None).len(), DEFAULT_RECENT_LIMIT);
        assert_eq!(
            catalog.recommendations(&Gradient::default(), None).len(),
            DEFAULT_RECOMMENDATION_LIMIT
        );
        assert_eq!(catalog.load_more_presets(None, 0, None).len(), DEFAULT_PAGE_SIZE);
        assert_eq!(catalog.popular_presets(None).len(), 6);
    }

    #[test]
    fn duplicate_of_imported_preset_is_not_marked_imported() {
        let (mut catalog, _) = new_catalog();
        let id = catalog
            .import_presets(&json!({"presets": [raw_preset("Incoming", "linear")]}))
            .unwrap()[0]
            .id
            .clone();
        assert_eq!(catalog.preset_by_id(&id).unwrap().imported, Some(NOW));

        let copy = catalog.duplicate_preset(&id).unwrap();
        assert_eq!(copy.name, "Incoming (Copy)");
        assert_eq!(copy.imported, None);
        assert_eq!(copy.created, Some(NOW));
    }

    #[test]
    fn clear_drops_all_custom_presets() {
        let (mut catalog, _) = new_catalog();
        catalog.add_custom_preset(&Gradient::default(), "A", Some("retro"));
        catalog.clear_custom_presets();
        assert!(catalog.custom_presets().is_empty());
        assert_eq!(catalog.presets(None, None).len(), 24);
    }

    #[test]
    fn usage_counts_accumulate() {
        let (mut catalog, _) = new_catalog();
        assert_eq!(catalog.track_usage("ocean-blue"), 1);
        assert_eq!(catalog.track_usage("ocean-blue"), 2);
        assert_eq!(catalog.usage_stats()["ocean-blue"], 2);
    }

    // -- Import / export --

    #[test]
    fn export_includes_only_custom_presets() {
        let (mut catalog, _) = new_catalog();
        let a = catalog.add_custom_preset(&Gradient::default(), "A", None).id.clone();
        catalog.add_custom_preset(&Gradient::default(), "B", None);

        let all = catalog.export_presets(None);
        assert_eq!(all.version, "1.0");
        assert_eq!(all.exported, NOW);
        assert_eq!(all.presets.len(), 2);

        let some = catalog.export_presets(Some(&[a.as_str(), "ocean-blue"]));
        assert_eq!(some.presets.len(), 1);
        assert_eq!(some.presets[0].name, "A");
    }

    #[test]
    fn import_assigns_fresh_ids_and_stamps() {
        let (mut catalog, _) = new_catalog();
        let mut entry = raw_preset("Imported", "conic");
        entry["id"] = json!("ocean-blue");
        let imported = catalog.import_presets(&json!({"presets": [entry]})).unwrap();

        assert_eq!(imported.len(), 1);
        assert_ne!(imported[0].id, "ocean-blue");
        assert!(imported[0].custom);
        assert_eq!(imported[0].imported, Some(NOW));
        assert_eq!(imported[0].category, "imports");
        assert_eq!(imported[0].kind(), GradientKind::Conic);
    }

    #[test]
    fn import_requires_a_presets_list() {
        let (mut catalog, _) = new_catalog();
        assert!(matches!(
            catalog.import_presets(&json!({"presets": "nope"})),
            Err(GradientError::InvalidFormat(_))
        ));
        assert!(matches!(
            catalog.import_presets(&json!({})),
            Err(GradientError::InvalidFormat(_))
        ));
    }

    #[test]
    fn one_bad_entry_rejects_the_batch() {
        let (mut catalog, _) = new_catalog();
        let batch = json!({"presets": [raw_preset("Good", "linear"), raw_preset("Bad", "mesh")]});
        assert!(matches!(
            catalog.import_presets(&batch),
            Err(GradientError::InvalidType(_))
        ));
        assert!(catalog.custom_presets().is_empty());
    }

    #[test]
    fn export_then_import_into_another_catalog() {
        let (mut source, _) = new_catalog();
        let g = Gradient::default().with_update(GradientUpdate::Angle(33.0));
        source.add_custom_preset(&g, "Shared", Some("sunset"));
        let bundle = serde_json::to_value(source.export_presets(None)).unwrap();

        let (mut target, _) = new_catalog();
        let imported = target.import_presets(&bundle).unwrap();
        assert_eq!(imported[0].name, "Shared");
        assert_eq!(imported[0].gradient, g);
        assert_eq!(imported[0].created, Some(NOW));
    }

    #[test]
    fn library_json_round_trip() {
        let (mut catalog, _) = new_catalog();
        catalog.add_custom_preset(&Gradient::default(), "Saved", None);
        catalog.track_usage("ocean-blue");
        let json = catalog.to_library_json().unwrap();

        let (mut restored, _) = new_catalog();
        assert_eq!(restored.load_library_json(&json).unwrap(), 1);
        assert_eq!(restored.custom_presets(), catalog.custom_presets());
        assert_eq!(restored.usage_stats()["ocean-blue"], 1);

        let value: Value = serde_json::from_str(&json).unwrap();
        assert!(value["presets"].is_array());
    }

    #[test]
    fn bad_library_json_is_an_error() {
        let (mut catalog, _) = new_catalog();
        assert!(matches!(
            catalog.load_library_json("{\"presets\": 3}"),
            Err(GradientError::Serialization(_))
        ));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn recommendations_never_exceed_limit(limit in 0_usize..40, kind in 0_usize..3) {
                let (catalog, _) = new_catalog();
                let current = Gradient { kind: GradientKind::ALL[kind], ..Gradient::default() };
                let picks = catalog.recommendations(&current, Some(limit));
                prop_assert!(picks.len() <= limit);
                let same = picks.iter().take_while(|p| p.kind() == current.kind).count();
                prop_assert!(same <= limit / 2 || picks.iter().all(|p| p.kind() == current.kind));
            }

            #[test]
            fn pages_cover_the_listing(page in 1_usize..10) {
                let (catalog, _) = new_catalog();
                let mut seen = Vec::new();
                let mut offset = 0;
                loop {
                    let chunk = catalog.load_more_presets(None, offset, Some(page));
                    if chunk.is_empty() {
                        break;
                    }
                    offset += chunk.len();
                    seen.extend(chunk.into_iter().map(|p| p.id.clone()));
                }
                let all: Vec<String> = catalog.presets(None, None).iter().map(|p| p.id.clone()).collect();
                prop_assert_eq!(seen, all);
            }
        }
    }
}
