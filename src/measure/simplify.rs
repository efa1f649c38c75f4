//! Practical bar measurements
//!
//! Collapses an exact amount into what a bartender would actually pour:
//! dashes for tiny amounts, bar teaspoons just above that, and otherwise the
//! display unit rounded to a jigger-friendly step (5 ml or a quarter ounce).
//!
//! Band selection always happens on a milliliter reading. Only the last band
//! looks at the native unit, so the two entry points share the first three
//! bands and differ in the standard band.

use serde::{Deserialize, Serialize};

use super::converter::{round_half_up, round_to};
use super::units::{ML_PER_BAR_TSP, ML_PER_DASH, ML_PER_OZ_BAND};

/// Upper bound (exclusive) of the dash band, in ml
pub const DASH_LIMIT_ML: f64 = 5.0;
/// Upper bound (exclusive) of the bar teaspoon band, in ml
pub const BAR_TSP_LIMIT_ML: f64 = 7.5;
/// Standard band step in milliliters
pub const ML_STEP: f64 = 5.0;
/// Standard band steps per ounce (quarter ounces)
pub const OZ_STEPS_PER_UNIT: f64 = 4.0;

/// Unit of a simplified amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeasureUnit {
    #[serde(rename = "dash")]
    Dash,
    #[serde(rename = "bar tsp")]
    BarTsp,
    #[serde(rename = "ml")]
    Ml,
    #[serde(rename = "oz")]
    Oz,
}

impl MeasureUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasureUnit::Dash => "dash",
            MeasureUnit::BarTsp => "bar tsp",
            MeasureUnit::Ml => "ml",
            MeasureUnit::Oz => "oz",
        }
    }
}

/// A rounded, practical amount in a single unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimplifiedAmount {
    pub value: f64,
    pub unit: MeasureUnit,
    pub display: String,
}

impl SimplifiedAmount {
    fn zero() -> Self {
        dashes(0.0)
    }
}

/// An amount as seen by the band table
#[derive(Debug, Clone, Copy)]
struct Reading {
    /// Milliliter equivalent used for band decisions
    ml: f64,
    /// The amount in the caller's unit
    native: f64,
}

/// One row of the band table: first band whose predicate matches wins
struct Band {
    applies: fn(&Reading) -> bool,
    rule: fn(&Reading) -> SimplifiedAmount,
}

const ZERO: Band = Band {
    applies: non_positive,
    rule: zero_rule,
};

const DASH: Band = Band {
    applies: below_dash_limit,
    rule: dash_rule,
};

const BAR_TSP: Band = Band {
    applies: below_bar_tsp_limit,
    rule: bar_tsp_rule,
};

const ML_BANDS: [Band; 4] = [
    ZERO,
    DASH,
    BAR_TSP,
    Band {
        applies: always,
        rule: ml_rule,
    },
];

const OZ_BANDS: [Band; 4] = [
    ZERO,
    DASH,
    BAR_TSP,
    Band {
        applies: always,
        rule: oz_rule,
    },
];

fn non_positive(r: &Reading) -> bool {
    r.native <= 0.0
}

fn below_dash_limit(r: &Reading) -> bool {
    r.ml < DASH_LIMIT_ML
}

fn below_bar_tsp_limit(r: &Reading) -> bool {
    r.ml < BAR_TSP_LIMIT_ML
}

fn always(_: &Reading) -> bool {
    true
}

fn zero_rule(_: &Reading) -> SimplifiedAmount {
    SimplifiedAmount::zero()
}

fn dash_rule(r: &Reading) -> SimplifiedAmount {
    dashes(round_half_up(r.ml / ML_PER_DASH))
}

fn bar_tsp_rule(r: &Reading) -> SimplifiedAmount {
    let value = round_to(r.ml / ML_PER_BAR_TSP, 2.0);
    SimplifiedAmount {
        value,
        unit: MeasureUnit::BarTsp,
        display: format!("{} bar tsp", value),
    }
}

fn ml_rule(r: &Reading) -> SimplifiedAmount {
    let value = round_half_up(r.native / ML_STEP) * ML_STEP;
    SimplifiedAmount {
        value,
        unit: MeasureUnit::Ml,
        display: format!("{} ml", value),
    }
}

fn oz_rule(r: &Reading) -> SimplifiedAmount {
    let value = round_to(r.native, OZ_STEPS_PER_UNIT);
    SimplifiedAmount {
        value,
        unit: MeasureUnit::Oz,
        display: format!("{} oz", value),
    }
}

fn dashes(count: f64) -> SimplifiedAmount {
    let display = if count == 1.0 {
        "1 dash".to_string()
    } else {
        format!("{} dashes", count)
    };
    SimplifiedAmount {
        value: count,
        unit: MeasureUnit::Dash,
        display,
    }
}

fn apply(bands: &[Band], reading: Reading) -> SimplifiedAmount {
    bands
        .iter()
        .find(|band| (band.applies)(&reading))
        .map(|band| (band.rule)(&reading))
        .unwrap_or_else(SimplifiedAmount::zero)
}

/// Simplify a milliliter amount
///
/// - `<= 0` -> 0 dashes
/// - `< 5 ml` -> whole dashes
/// - `< 7.5 ml` -> half bar teaspoons
/// - otherwise nearest 5 ml
pub fn simplify_ml(ml: f64) -> SimplifiedAmount {
    apply(&ML_BANDS, Reading { ml, native: ml })
}

/// Simplify an ounce amount
///
/// Dash and bar teaspoon bands are decided (and counted) on `oz * 29.57`;
/// larger amounts round to the nearest quarter ounce.
pub fn simplify_oz(oz: f64) -> SimplifiedAmount {
    apply(
        &OZ_BANDS,
        Reading {
            ml: oz * ML_PER_OZ_BAND,
            native: oz,
        },
    )
}

/// Display string for the simplified amount in the preferred unit
pub fn format_simplified_amount(ml: f64, oz: f64, prefer_oz: bool) -> String {
    if prefer_oz {
        simplify_oz(oz).display
    } else {
        simplify_ml(ml).display
    }
}
