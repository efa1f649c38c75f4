//! Cocktail catalog models
//!
//! Shapes returned by the calculation service's catalog endpoints, plus the
//! fixed presets and labels the calculator falls back to.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Variation entry in the cocktail list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationSummary {
    pub id: String,
    pub name: String,
}

/// Named target strength
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AbvPreset {
    pub name: String,
    pub abv: f64,
}

/// A cocktail as listed by `GET /cocktails`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cocktail {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub variations: Vec<VariationSummary>,
    #[serde(default)]
    pub presets: BTreeMap<String, AbvPreset>,
    pub serving_size_ml: Option<f64>,
    #[serde(default)]
    pub garnish: String,
}

/// Variation detail from `GET /cocktails/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariationDetail {
    pub name: String,
    /// Spirit types the variation calls for
    #[serde(default)]
    pub ingredients: Vec<String>,
}

/// Cocktail detail from `GET /cocktails/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CocktailDetail {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub variations: BTreeMap<String, VariationDetail>,
    #[serde(default)]
    pub garnish: String,
}

/// One bottle a spirit type can be made with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpiritOption {
    pub brand: String,
    pub abv: f64,
}

/// Spirit type -> available bottles, as returned by `GET /spirits`
pub type SpiritCatalog = BTreeMap<String, Vec<SpiritOption>>;

// ============================================================================
// ABV Presets
// ============================================================================

/// Display order of presets; ids outside this list are not offered
pub const PRESET_ORDER: [&str; 3] = ["mild", "classic", "strong"];

/// Target ABV used before a cocktail with a classic preset is chosen
pub const DEFAULT_TARGET_ABV: f64 = 24.0;

/// Lowest selectable target ABV
pub const MIN_TARGET_ABV: f64 = 18.0;
/// Floor for the highest selectable target ABV
pub const MAX_TARGET_ABV_FLOOR: f64 = 35.0;
/// Slider step
pub const TARGET_ABV_STEP: f64 = 0.5;

/// Presets offered when a cocktail declares none
pub fn default_presets() -> BTreeMap<String, AbvPreset> {
    [("mild", "Mild", 22.0), ("classic", "Classic", 24.0), ("strong", "Strong", 26.0)]
        .into_iter()
        .map(|(id, name, abv)| {
            (
                id.to_string(),
                AbvPreset {
                    name: name.to_string(),
                    abv,
                },
            )
        })
        .collect()
}

/// A preset with its id, in display order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresetEntry {
    pub id: String,
    pub name: String,
    pub abv: f64,
}

/// Range of the custom ABV slider
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AbvRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// Presets to offer, falling back to the defaults when none are given
pub fn preset_list(presets: &BTreeMap<String, AbvPreset>) -> Vec<PresetEntry> {
    let defaults;
    let active = if presets.is_empty() {
        defaults = default_presets();
        &defaults
    } else {
        presets
    };

    PRESET_ORDER
        .iter()
        .filter_map(|id| {
            active.get(*id).map(|preset| PresetEntry {
                id: id.to_string(),
                name: preset.name.clone(),
                abv: preset.abv,
            })
        })
        .collect()
}

/// Slider range for the offered presets
pub fn abv_range(presets: &[PresetEntry]) -> AbvRange {
    let max = presets
        .iter()
        .map(|p| p.abv)
        .fold(MAX_TARGET_ABV_FLOOR, f64::max);
    AbvRange {
        min: MIN_TARGET_ABV,
        max,
        step: TARGET_ABV_STEP,
    }
}

impl Cocktail {
    /// Target ABV to start from: the classic preset when there is one
    pub fn initial_target_abv(&self) -> Option<f64> {
        self.presets.get("classic").map(|p| p.abv)
    }
}

// ============================================================================
// Defaults and Labels
// ============================================================================

/// Variation pre-selected when a cocktail is picked
pub fn default_variation(cocktail_id: &str) -> Option<&'static str> {
    match cocktail_id {
        "martini" | "manhattan" | "negroni" => Some("classic"),
        "old_fashioned" => Some("bourbon"),
        _ => None,
    }
}

/// Human-readable name for a spirit type; unknown types show their id
pub fn spirit_label(spirit_type: &str) -> &str {
    match spirit_type {
        "gin" => "Gin",
        "vodka" => "Vodka",
        "bourbon" => "Bourbon",
        "rye" => "Rye Whiskey",
        "vermouth_dry" => "Dry Vermouth",
        "vermouth_sweet" => "Sweet Vermouth",
        "orange_liqueur" => "Orange Liqueur",
        "campari" => "Campari",
        "angostura" => "Bitters",
        "simple_syrup" => "Simple Syrup",
        "olive_brine" => "Olive Brine",
        other => other,
    }
}

/// First listed brand for each required spirit type that the catalog carries
pub fn preselect_spirits(required: &[String], catalog: &SpiritCatalog) -> BTreeMap<String, String> {
    required
        .iter()
        .filter_map(|spirit_type| {
            catalog
                .get(spirit_type)
                .and_then(|options| options.first())
                .map(|option| (spirit_type.clone(), option.brand.clone()))
        })
        .collect()
}
