//! Data models
//!
//! Rust structs for the calculation service's catalog and calculate payloads.

mod calculation;
mod cocktail;

pub use calculation::{CalculateRequest, CalculateResponse, CalculationForm, ServiceErrorBody};
pub use cocktail::{
    abv_range, default_presets, default_variation, preselect_spirits, preset_list, spirit_label,
    AbvPreset, AbvRange, Cocktail, CocktailDetail, PresetEntry, SpiritCatalog, SpiritOption,
    VariationDetail, VariationSummary, DEFAULT_TARGET_ABV, PRESET_ORDER,
};
