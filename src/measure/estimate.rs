//! Default batch volume
//!
//! Suggests a starting batch size when a cocktail is picked and the user has
//! not typed a volume yet: six drinks at the cocktail's serving size.

use super::converter::{round_half_up, round_to};
use super::units::{Unit, ML_PER_FL_OZ};

/// Drinks in the suggested batch
pub const DEFAULT_DRINKS: f64 = 6.0;
/// Serving size assumed when the cocktail does not declare one
pub const DEFAULT_SERVING_OZ: f64 = 3.5;

/// Serving size usable for batch math: positive and finite
pub fn known_serving(serving_size_ml: Option<f64>) -> Option<f64> {
    serving_size_ml.filter(|ml| ml.is_finite() && *ml > 0.0)
}

/// Suggested batch volume in `unit`
///
/// In ounces the per-drink serving is snapped to the nearest half ounce so
/// the total reads cleanly; in milliliters the serving is used as is.
pub fn default_batch_volume(serving_size_ml: Option<f64>, unit: Unit) -> f64 {
    match unit {
        Unit::Oz => {
            let serving_oz = known_serving(serving_size_ml)
                .map(|ml| ml / ML_PER_FL_OZ)
                .unwrap_or(DEFAULT_SERVING_OZ);
            DEFAULT_DRINKS * round_to(serving_oz, 2.0)
        }
        Unit::Ml => {
            let serving = known_serving(serving_size_ml)
                .unwrap_or_else(|| round_half_up(DEFAULT_SERVING_OZ * ML_PER_FL_OZ));
            DEFAULT_DRINKS * serving
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oz_with_serving_size() {
        // 90 ml = 3.0476 oz -> 3.0 oz per drink
        assert_eq!(default_batch_volume(Some(90.0), Unit::Oz), 18.0);
        // 100 ml = 3.381 oz -> 3.5 oz per drink
        assert_eq!(default_batch_volume(Some(100.0), Unit::Oz), 21.0);
    }

    #[test]
    fn test_oz_without_serving_size() {
        assert_eq!(default_batch_volume(None, Unit::Oz), 21.0);
    }

    #[test]
    fn test_ml_with_serving_size() {
        assert_eq!(default_batch_volume(Some(90.0), Unit::Ml), 540.0);
        assert_eq!(default_batch_volume(Some(112.5), Unit::Ml), 675.0);
    }

    #[test]
    fn test_ml_without_serving_size() {
        // 3.5 oz = 103.507 ml -> 104 ml per drink
        assert_eq!(default_batch_volume(None, Unit::Ml), 624.0);
    }

    #[test]
    fn test_zero_serving_size_falls_back() {
        assert_eq!(default_batch_volume(Some(0.0), Unit::Ml), 624.0);
        assert_eq!(default_batch_volume(Some(0.0), Unit::Oz), 21.0);
        assert_eq!(default_batch_volume(Some(f64::NAN), Unit::Oz), 21.0);
    }

    #[test]
    fn test_negative_serving_size_falls_back() {
        assert_eq!(known_serving(Some(-90.0)), None);
        assert_eq!(known_serving(Some(f64::INFINITY)), None);
        assert_eq!(known_serving(Some(90.0)), Some(90.0));
        assert_eq!(default_batch_volume(Some(-90.0), Unit::Ml), 624.0);
        assert_eq!(default_batch_volume(Some(-90.0), Unit::Oz), 21.0);
    }

    #[test]
    fn test_result_is_positive() {
        for ml in [30.0, 60.0, 90.0, 120.0, 150.0] {
            assert!(default_batch_volume(Some(ml), Unit::Oz) > 0.0);
            assert!(default_batch_volume(Some(ml), Unit::Ml) > 0.0);
        }
    }
}
