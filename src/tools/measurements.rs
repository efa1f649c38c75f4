//! Measurement MCP Tools
//!
//! Tools for converting volumes, suggesting batch sizes, and simplifying
//! amounts into bar measurements.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::FreezerError;
use crate::measure::{
    self, format_simplified_amount, simplify_ml, simplify_oz, BatchSize, FormattedAmount,
    InputConstraints, Quantity, SimplifiedAmount, Unit, VolumeMode, DEFAULT_DRINKS,
};
use crate::models::{abv_range, preset_list, AbvPreset, AbvRange, PresetEntry};

/// Parse a unit name coming from a tool call
pub fn parse_unit(unit: &str) -> Result<Unit, String> {
    Unit::from_str(unit).ok_or_else(|| FreezerError::UnknownUnit(unit.to_string()).to_string())
}

/// Parse a volume mode name coming from a tool call
pub fn parse_mode(mode: &str) -> Result<VolumeMode, String> {
    VolumeMode::from_str(mode)
        .ok_or_else(|| FreezerError::UnknownMode(mode.to_string()).to_string())
}

/// Response for convert_volume
#[derive(Debug, Serialize)]
pub struct ConvertVolumeResponse {
    pub input_value: f64,
    pub input_unit: Unit,
    pub value: f64,
    pub unit: Unit,
}

/// Response for default_batch_volume
#[derive(Debug, Serialize)]
pub struct DefaultBatchVolumeResponse {
    pub volume: f64,
    pub unit: Unit,
    pub drinks: f64,
    pub serving_size_ml: Option<f64>,
}

/// Response for simplify_amount
#[derive(Debug, Serialize)]
pub struct SimplifyAmountResponse {
    pub ml: SimplifiedAmount,
    pub oz: SimplifiedAmount,
    pub display: String,
}

/// Response for batch_size_state
#[derive(Debug, Serialize)]
pub struct BatchSizeStateResponse {
    pub volume: f64,
    pub unit: Unit,
    pub mode: VolumeMode,
    pub drinks: u32,
    pub drinks_available: bool,
    pub volume_ml: f64,
    pub constraints: InputConstraints,
    pub serving_summary: Option<String>,
}

/// Response for abv_presets
#[derive(Debug, Serialize)]
pub struct AbvPresetsResponse {
    pub presets: Vec<PresetEntry>,
    pub range: AbvRange,
}

/// Convert a volume into the other unit
pub fn convert_volume(value: f64, unit: &str) -> Result<ConvertVolumeResponse, String> {
    let from = parse_unit(unit)?;
    let to = from.other();
    Ok(ConvertVolumeResponse {
        input_value: value,
        input_unit: from,
        value: measure::convert(value, from, to),
        unit: to,
    })
}

/// Suggest a starting batch volume
pub fn default_batch_volume(
    serving_size_ml: Option<f64>,
    unit: &str,
) -> Result<DefaultBatchVolumeResponse, String> {
    let unit = parse_unit(unit)?;
    Ok(DefaultBatchVolumeResponse {
        volume: measure::default_batch_volume(serving_size_ml, unit),
        unit,
        drinks: DEFAULT_DRINKS,
        serving_size_ml,
    })
}

/// Simplify an amount in both units and pick the display for `unit`
pub fn simplify_amount(ml: f64, oz: Option<f64>, unit: &str) -> Result<SimplifyAmountResponse, String> {
    let unit = parse_unit(unit)?;
    let quantity = match oz {
        Some(oz) => Quantity::new(ml, oz),
        None => Quantity::from_ml(ml),
    };
    Ok(SimplifyAmountResponse {
        ml: simplify_ml(quantity.ml),
        oz: simplify_oz(quantity.oz),
        display: format_simplified_amount(quantity.ml, quantity.oz, unit == Unit::Oz),
    })
}

/// Format an amount exactly or simplified
pub fn format_amount(
    ml: f64,
    oz: Option<f64>,
    unit: &str,
    simplified: bool,
) -> Result<FormattedAmount, String> {
    let unit = parse_unit(unit)?;
    let quantity = match oz {
        Some(oz) => Quantity::new(ml, oz),
        None => Quantity::from_ml(ml),
    };
    Ok(measure::format_amount(quantity, unit, simplified))
}

/// Input applied to a batch-size field, in order
#[derive(Debug, Default)]
pub struct BatchSizeInput {
    pub volume: Option<f64>,
    pub unit: String,
    pub serving_size_ml: Option<f64>,
    pub switch_unit: Option<String>,
    pub mode: Option<String>,
    pub drinks: Option<u32>,
}

/// Replay a batch-size interaction and report the resulting field state
///
/// The volume is set first (or defaulted from the serving size), then the unit
/// switch, mode switch, and drink count are applied.
pub fn batch_size_state(input: BatchSizeInput) -> Result<BatchSizeStateResponse, String> {
    let mut batch = BatchSize::new(parse_unit(&input.unit)?);
    batch.select_cocktail(input.serving_size_ml);
    if let Some(volume) = input.volume {
        batch.set_volume(volume);
    }
    if let Some(unit) = input.switch_unit.as_deref() {
        batch.change_unit(parse_unit(unit)?);
    }
    if let Some(mode) = input.mode.as_deref() {
        batch.set_mode(parse_mode(mode)?);
    }
    if let Some(drinks) = input.drinks {
        batch.set_drinks(drinks);
    }

    Ok(BatchSizeStateResponse {
        volume: batch.volume,
        unit: batch.unit,
        mode: batch.mode,
        drinks: batch.current_drinks(),
        drinks_available: batch.drinks_available(),
        volume_ml: batch.volume_ml(),
        constraints: batch.constraints(),
        serving_summary: batch.serving_summary(),
    })
}

/// Presets and slider range for a cocktail's target ABV
pub fn abv_presets(presets: Option<BTreeMap<String, AbvPreset>>) -> AbvPresetsResponse {
    let presets = preset_list(&presets.unwrap_or_default());
    let range = abv_range(&presets);
    AbvPresetsResponse { presets, range }
}
