//! Batch size input
//!
//! State behind the batch-size field: the entered volume, the display unit,
//! and whether the field counts drinks instead of volume.

use serde::Serialize;

use super::converter::{round_half_up, to_ml, to_oz};
use super::estimate::{default_batch_volume, known_serving, DEFAULT_DRINKS, DEFAULT_SERVING_OZ};
use super::units::{Unit, VolumeMode, ML_PER_FL_OZ};

/// Bounds for the numeric input field
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct InputConstraints {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl InputConstraints {
    /// Bounds for a volume entered in `unit`
    pub fn for_volume(unit: Unit) -> Self {
        match unit {
            Unit::Oz => Self { min: 3.0, max: 170.0, step: 1.0 },
            Unit::Ml => Self { min: 100.0, max: 5000.0, step: 50.0 },
        }
    }

    /// Bounds for a drink count
    pub fn for_drinks() -> Self {
        Self { min: 1.0, max: 50.0, step: 1.0 }
    }
}

/// Batch-size field state
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchSize {
    pub volume: f64,
    pub unit: Unit,
    pub mode: VolumeMode,
    pub serving_size_ml: Option<f64>,
}

impl Default for BatchSize {
    fn default() -> Self {
        Self {
            volume: DEFAULT_DRINKS * DEFAULT_SERVING_OZ,
            unit: Unit::Oz,
            mode: VolumeMode::Volume,
            serving_size_ml: None,
        }
    }
}

impl BatchSize {
    /// Start empty-handed in the given unit
    pub fn new(unit: Unit) -> Self {
        Self {
            volume: default_batch_volume(None, unit),
            unit,
            ..Self::default()
        }
    }

    fn serving(&self) -> Option<f64> {
        known_serving(self.serving_size_ml)
    }

    /// Record the newly selected cocktail's serving size
    ///
    /// A known serving size resets the volume to the suggested default.
    /// Without one, drinks mode is no longer available and the field falls
    /// back to volume entry.
    pub fn select_cocktail(&mut self, serving_size_ml: Option<f64>) {
        self.serving_size_ml = serving_size_ml;
        if self.serving().is_some() {
            self.volume = default_batch_volume(self.serving_size_ml, self.unit);
        } else if self.mode == VolumeMode::Drinks {
            self.mode = VolumeMode::Volume;
        }
    }

    /// Whether the field can count drinks
    pub fn drinks_available(&self) -> bool {
        self.serving().is_some()
    }

    /// Switch display unit, converting the entered volume
    pub fn change_unit(&mut self, unit: Unit) {
        if unit != self.unit && self.volume > 0.0 {
            self.volume = match unit {
                Unit::Oz => to_oz(self.volume),
                Unit::Ml => to_ml(self.volume),
            };
        }
        self.unit = unit;
    }

    /// Switch between volume and drink entry
    ///
    /// Returns false (and keeps the current mode) when drinks are requested
    /// but the cocktail has no serving size.
    pub fn set_mode(&mut self, mode: VolumeMode) -> bool {
        if mode == VolumeMode::Drinks && !self.drinks_available() {
            tracing::debug!("Drinks mode unavailable without a serving size");
            return false;
        }
        self.mode = mode;
        true
    }

    /// Set the volume directly; non-finite input counts as zero
    pub fn set_volume(&mut self, volume: f64) {
        self.volume = if volume.is_finite() { volume } else { 0.0 };
    }

    /// Drinks the current volume amounts to
    pub fn current_drinks(&self) -> u32 {
        match self.serving() {
            Some(serving) => {
                let ml = match self.unit {
                    Unit::Oz => self.volume * ML_PER_FL_OZ,
                    Unit::Ml => self.volume,
                };
                round_half_up(ml / serving).max(0.0) as u32
            }
            None => 0,
        }
    }

    /// Set the volume from a drink count
    ///
    /// Ignored when no serving size is known or the count is zero.
    pub fn set_drinks(&mut self, drinks: u32) {
        let Some(serving) = self.serving() else {
            return;
        };
        if drinks == 0 {
            return;
        }
        let total_ml = drinks as f64 * serving;
        self.volume = match self.unit {
            Unit::Oz => total_ml / ML_PER_FL_OZ,
            Unit::Ml => total_ml,
        };
    }

    /// Input bounds for the active mode and unit
    pub fn constraints(&self) -> InputConstraints {
        match self.mode {
            VolumeMode::Volume => InputConstraints::for_volume(self.unit),
            VolumeMode::Drinks => InputConstraints::for_drinks(),
        }
    }

    /// Target volume in milliliters, as submitted to the calculation service
    pub fn volume_ml(&self) -> f64 {
        match self.unit {
            Unit::Oz => self.volume * ML_PER_FL_OZ,
            Unit::Ml => self.volume,
        }
    }

    /// Summary line shown under the drink count
    pub fn serving_summary(&self) -> Option<String> {
        if self.mode != VolumeMode::Drinks {
            return None;
        }
        let serving = self.serving()?;
        let drinks = self.current_drinks();
        Some(format!(
            "{} drink{} × {} ml = {} ml total",
            drinks,
            if drinks == 1 { "" } else { "s" },
            serving,
            drinks as f64 * serving
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let batch = BatchSize::default();
        assert_eq!(batch.volume, 21.0);
        assert_eq!(batch.unit, Unit::Oz);
        assert_eq!(batch.mode, VolumeMode::Volume);
        assert_eq!(BatchSize::new(Unit::Ml).volume, 624.0);
    }

    #[test]
    fn test_change_unit_converts_volume() {
        let mut batch = BatchSize::default();
        batch.change_unit(Unit::Ml);
        assert_eq!(batch.volume, 621.0);
        assert_eq!(batch.unit, Unit::Ml);

        batch.change_unit(Unit::Oz);
        assert_eq!(batch.volume, 21.0);
    }

    #[test]
    fn test_change_unit_same_unit_is_noop() {
        let mut batch = BatchSize::default();
        batch.change_unit(Unit::Oz);
        assert_eq!(batch.volume, 21.0);
    }

    #[test]
    fn test_change_unit_skips_zero_volume() {
        let mut batch = BatchSize::default();
        batch.set_volume(0.0);
        batch.change_unit(Unit::Ml);
        assert_eq!(batch.volume, 0.0);
        assert_eq!(batch.unit, Unit::Ml);
    }

    #[test]
    fn test_select_cocktail_resets_volume() {
        let mut batch = BatchSize::default();
        batch.select_cocktail(Some(90.0));
        assert_eq!(batch.volume, 18.0);

        let mut batch = BatchSize::new(Unit::Ml);
        batch.select_cocktail(Some(90.0));
        assert_eq!(batch.volume, 540.0);
    }

    #[test]
    fn test_drinks_mode_requires_serving_size() {
        let mut batch = BatchSize::default();
        assert!(!batch.set_mode(VolumeMode::Drinks));
        assert_eq!(batch.mode, VolumeMode::Volume);

        batch.select_cocktail(Some(90.0));
        assert!(batch.set_mode(VolumeMode::Drinks));
        assert_eq!(batch.mode, VolumeMode::Drinks);

        batch.select_cocktail(None);
        assert_eq!(batch.mode, VolumeMode::Volume);

        batch.select_cocktail(Some(-90.0));
        assert!(!batch.drinks_available());
        assert!(!batch.set_mode(VolumeMode::Drinks));
    }

    #[test]
    fn test_current_drinks() {
        let mut batch = BatchSize::new(Unit::Ml);
        assert_eq!(batch.current_drinks(), 0);

        batch.select_cocktail(Some(90.0));
        assert_eq!(batch.current_drinks(), 6);

        batch.change_unit(Unit::Oz);
        // 540 ml -> 18.3 oz -> 541.2 ml -> 6 drinks
        assert_eq!(batch.current_drinks(), 6);
    }

    #[test]
    fn test_set_drinks() {
        let mut batch = BatchSize::new(Unit::Ml);
        batch.set_drinks(4);
        assert_eq!(batch.volume, 624.0);

        batch.select_cocktail(Some(90.0));
        batch.set_drinks(4);
        assert_eq!(batch.volume, 360.0);
        batch.set_drinks(0);
        assert_eq!(batch.volume, 360.0);

        batch.change_unit(Unit::Oz);
        batch.set_drinks(10);
        assert!((batch.volume - 900.0 / ML_PER_FL_OZ).abs() < 1e-9);
        assert_eq!(batch.current_drinks(), 10);
    }

    #[test]
    fn test_constraints() {
        let mut batch = BatchSize::default();
        assert_eq!(batch.constraints(), InputConstraints { min: 3.0, max: 170.0, step: 1.0 });
        batch.change_unit(Unit::Ml);
        assert_eq!(batch.constraints(), InputConstraints { min: 100.0, max: 5000.0, step: 50.0 });
        batch.select_cocktail(Some(90.0));
        batch.set_mode(VolumeMode::Drinks);
        assert_eq!(batch.constraints(), InputConstraints::for_drinks());
    }

    #[test]
    fn test_volume_ml() {
        let batch = BatchSize::default();
        assert!((batch.volume_ml() - 21.0 * ML_PER_FL_OZ).abs() < 1e-9);
        assert_eq!(BatchSize::new(Unit::Ml).volume_ml(), 624.0);
    }

    #[test]
    fn test_serving_summary() {
        let mut batch = BatchSize::new(Unit::Ml);
        batch.select_cocktail(Some(90.0));
        assert_eq!(batch.serving_summary(), None);

        batch.set_mode(VolumeMode::Drinks);
        assert_eq!(
            batch.serving_summary().as_deref(),
            Some("6 drinks × 90 ml = 540 ml total")
        );

        batch.set_drinks(1);
        assert_eq!(
            batch.serving_summary().as_deref(),
            Some("1 drink × 90 ml = 90 ml total")
        );
    }

    #[test]
    fn test_set_volume_rejects_non_finite() {
        let mut batch = BatchSize::default();
        batch.set_volume(f64::NAN);
        assert_eq!(batch.volume, 0.0);
    }
}
