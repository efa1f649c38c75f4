//! Amount display
//!
//! Chooses between the exact dual-unit reading and a single simplified bar
//! measurement for one ingredient amount.

use serde::Serialize;

use super::simplify::format_simplified_amount;
use super::units::{Quantity, Unit};

/// Rendered amount: a primary string and, for exact readings, the other unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedAmount {
    pub primary: String,
    pub secondary: Option<String>,
}

impl std::fmt::Display for FormattedAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.secondary {
            Some(secondary) => write!(f, "{} ({})", self.primary, secondary),
            None => f.write_str(&self.primary),
        }
    }
}

/// Exact value with its unit label, e.g. `68.5 ml`
pub fn exact(value: f64, unit: Unit) -> String {
    format!("{} {}", value, unit)
}

/// Format a quantity for display
///
/// Simplified output is a single value in `unit`. Exact output leads with
/// `unit` and follows with the other unit.
pub fn format_amount(quantity: Quantity, unit: Unit, simplified: bool) -> FormattedAmount {
    if simplified {
        return FormattedAmount {
            primary: format_simplified_amount(quantity.ml, quantity.oz, unit == Unit::Oz),
            secondary: None,
        };
    }

    let secondary = unit.other();
    FormattedAmount {
        primary: exact(quantity.in_unit(unit), unit),
        secondary: Some(exact(quantity.in_unit(secondary), secondary)),
    }
}
