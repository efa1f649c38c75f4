//! Unit types and conversion constants
//!
//! Provides the two display units, the batch-size input mode, and the
//! dual-unit `Quantity` every amount from the calculation service arrives as.

use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Constants
// ============================================================================

/// Milliliters per US fluid ounce, authoritative for converting inputs
pub const ML_PER_FL_OZ: f64 = 29.5735;

/// Milliliters per ounce used only when deciding the dash / bar tsp band of an
/// ounce amount. Kept apart from `ML_PER_FL_OZ` so band edges stay identical.
pub const ML_PER_OZ_BAND: f64 = 29.57;

/// Milliliters per dash
pub const ML_PER_DASH: f64 = 1.0;

/// Milliliters per bar teaspoon
pub const ML_PER_BAR_TSP: f64 = 5.0;

// ============================================================================
// Unit
// ============================================================================

/// Display unit for volumes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Ml,
    #[default]
    Oz,
}

impl Unit {
    /// Get the short label shown next to a value
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Ml => "ml",
            Unit::Oz => "oz",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => Some(Unit::Ml),
            "oz" | "fl oz" | "floz" | "fluid ounce" | "fluid ounces" => Some(Unit::Oz),
            _ => None,
        }
    }

    /// The other unit of the pair
    pub fn other(&self) -> Self {
        match self {
            Unit::Ml => Unit::Oz,
            Unit::Oz => Unit::Ml,
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Volume Mode
// ============================================================================

/// What the batch-size field holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VolumeMode {
    /// Total batch volume entered directly
    #[default]
    Volume,
    /// Drink count multiplied by the cocktail's serving size
    Drinks,
}

impl VolumeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeMode::Volume => "volume",
            VolumeMode::Drinks => "drinks",
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "volume" => Some(VolumeMode::Volume),
            "drinks" => Some(VolumeMode::Drinks),
            _ => None,
        }
    }
}

// ============================================================================
// Quantity
// ============================================================================

/// One physical amount expressed in both units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Quantity {
    pub ml: f64,
    pub oz: f64,
}

impl Quantity {
    /// Pair an ml/oz reading exactly as the calculation service reported it
    pub fn new(ml: f64, oz: f64) -> Self {
        Self { ml, oz }
    }

    /// Build from the canonical ml value, deriving oz with `to_oz`
    pub fn from_ml(ml: f64) -> Self {
        Self {
            ml,
            oz: super::converter::to_oz(ml),
        }
    }

    /// Value in the requested unit
    pub fn in_unit(&self, unit: Unit) -> f64 {
        match unit {
            Unit::Ml => self.ml,
            Unit::Oz => self.oz,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unit_from_str() {
        assert_eq!(Unit::from_str("ml"), Some(Unit::Ml));
        assert_eq!(Unit::from_str(" OZ "), Some(Unit::Oz));
        assert_eq!(Unit::from_str("fluid ounces"), Some(Unit::Oz));
        assert_eq!(Unit::from_str("cup"), None);
    }

    #[test]
    fn test_unit_other() {
        assert_eq!(Unit::Ml.other(), Unit::Oz);
        assert_eq!(Unit::Oz.other(), Unit::Ml);
    }

    #[test]
    fn test_unit_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Unit::Oz).unwrap(), "\"oz\"");
        let unit: Unit = serde_json::from_str("\"ml\"").unwrap();
        assert_eq!(unit, Unit::Ml);
    }

    #[test]
    fn test_volume_mode_from_str() {
        assert_eq!(VolumeMode::from_str("Drinks"), Some(VolumeMode::Drinks));
        assert_eq!(VolumeMode::from_str("volume"), Some(VolumeMode::Volume));
        assert_eq!(VolumeMode::from_str("servings"), None);
    }

    #[test]
    fn test_quantity_from_ml() {
        let q = Quantity::from_ml(750.0);
        assert_eq!(q.ml, 750.0);
        assert_eq!(q.oz, 25.4);
        assert_eq!(q.in_unit(Unit::Oz), 25.4);
        assert_eq!(q.in_unit(Unit::Ml), 750.0);
    }
}
