//! Results MCP Tools
//!
//! Renders a calculation service response into a batch sheet: one line per
//! ingredient, the dilution water, and the batch stats.

use serde::Serialize;

use crate::measure::{format_amount, FormattedAmount, Unit};
use crate::models::{spirit_label, CalculateResponse};

/// Label of the dilution water line
pub const WATER_LABEL: &str = "Water (for dilution)";

/// Shown under the sheet when amounts are simplified
pub const SIMPLIFIED_NOTE: &str = "Measurements rounded for easier measuring";

/// How the results are shown; toggles re-render from the same response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CalculationView {
    pub unit: Unit,
    pub simplified: bool,
}

impl CalculationView {
    pub fn new(unit: Unit, simplified: bool) -> Self {
        Self { unit, simplified }
    }

    pub fn toggle_simplified(&mut self) {
        self.simplified = !self.simplified;
    }

    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// Render a cached response under the current view settings
    pub fn render(&self, results: &CalculateResponse) -> BatchSheet {
        let mut lines: Vec<SheetLine> = results
            .ingredient_quantities()
            .into_iter()
            .map(|(spirit_type, quantity)| SheetLine {
                label: spirit_label(spirit_type).to_string(),
                brand: results.spirit_brands.get(spirit_type).cloned(),
                amount: format_amount(quantity, self.unit, self.simplified),
                is_water: false,
            })
            .collect();

        lines.push(SheetLine {
            label: WATER_LABEL.to_string(),
            brand: None,
            amount: format_amount(results.water(), self.unit, self.simplified),
            is_water: true,
        });

        let total = results.total_volume().in_unit(self.unit);
        tracing::debug!(
            "Rendered {} lines for {} ({}, simplified={})",
            lines.len(),
            results.cocktail_name,
            self.unit,
            self.simplified
        );

        BatchSheet {
            title: results.cocktail_name.clone(),
            subtitle: format!("{} - Freezer Batch", results.variation_name),
            lines,
            stats: BatchStats {
                initial_abv: format!("{}%", results.initial_abv),
                final_abv: format!("{}%", results.final_abv),
                total_volume: format!("{} {}", total, self.unit),
            },
            garnish: Some(results.garnish.clone()).filter(|g| !g.is_empty()),
            note: self.simplified.then(|| SIMPLIFIED_NOTE.to_string()),
        }
    }
}

/// One ingredient line of the sheet
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetLine {
    pub label: String,
    pub brand: Option<String>,
    pub amount: FormattedAmount,
    pub is_water: bool,
}

/// Headline numbers for the batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchStats {
    pub initial_abv: String,
    pub final_abv: String,
    pub total_volume: String,
}

/// Rendered results
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSheet {
    pub title: String,
    pub subtitle: String,
    pub lines: Vec<SheetLine>,
    pub stats: BatchStats,
    pub garnish: Option<String>,
    pub note: Option<String>,
}

impl BatchSheet {
    /// Plain-text rendering
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n{}\n\n", self.title, self.subtitle);

        for line in &self.lines {
            let name = match &line.brand {
                Some(brand) => format!("{} ({})", line.label, brand),
                None => line.label.clone(),
            };
            out.push_str(&format!("  {:<32} {}\n", name, line.amount));
        }
        if let Some(note) = &self.note {
            out.push_str(&format!("  ({})\n", note));
        }

        out.push_str(&format!("\nInitial ABV:  {}\n", self.stats.initial_abv));
        out.push_str(&format!("Final ABV:    {}\n", self.stats.final_abv));
        out.push_str(&format!("Total Volume: {}\n", self.stats.total_volume));

        if let Some(garnish) = &self.garnish {
            out.push_str(&format!("Garnish: {}\n", garnish));
        }
        out
    }
}

/// Decode a calculate response and render it
pub fn render_batch(
    response: serde_json::Value,
    unit: &str,
    simplified: bool,
) -> Result<BatchSheet, String> {
    let unit = super::measurements::parse_unit(unit)?;
    let results: CalculateResponse = serde_json::from_value(response)
        .map_err(|e| format!("Invalid calculate response: {}", e))?;
    Ok(CalculationView::new(unit, simplified).render(&results))
}
