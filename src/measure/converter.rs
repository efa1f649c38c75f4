//! Unit conversion functions
//!
//! Converts volumes between milliliters and fluid ounces. Each direction
//! rounds differently: ounces keep one decimal, milliliters are whole.

use super::units::{Unit, ML_PER_FL_OZ};

/// Round to the nearest integer, ties toward positive infinity
///
/// `f64::round` sends ties away from zero, which differs for negative halves
/// (-2.5 becomes -3 instead of -2).
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to the nearest multiple of `1 / steps_per_unit`
///
/// `round_to(x, 2.0)` rounds to halves, `round_to(x, 4.0)` to quarters.
pub fn round_to(value: f64, steps_per_unit: f64) -> f64 {
    round_half_up(value * steps_per_unit) / steps_per_unit
}

/// Convert milliliters to fluid ounces, rounded to 1 decimal place
pub fn to_oz(ml: f64) -> f64 {
    round_to(ml / ML_PER_FL_OZ, 10.0)
}

/// Convert fluid ounces to milliliters, rounded to a whole milliliter
pub fn to_ml(oz: f64) -> f64 {
    round_half_up(oz * ML_PER_FL_OZ)
}

/// Convert a value expressed in `from` into `to`
///
/// Same-unit conversions return the value untouched.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    match (from, to) {
        (Unit::Ml, Unit::Oz) => to_oz(value),
        (Unit::Oz, Unit::Ml) => to_ml(value),
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(2.4), 2.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(-2.6), -3.0);
        assert_eq!(round_half_up(0.0), 0.0);
    }

    #[test]
    fn test_round_to_halves_and_quarters() {
        assert_eq!(round_to(3.0476, 2.0), 3.0);
        assert_eq!(round_to(3.25, 2.0), 3.5);
        assert_eq!(round_to(2.32, 4.0), 2.25);
        assert_eq!(round_to(18.43, 4.0), 18.5);
    }

    #[test]
    fn test_to_oz() {
        assert_eq!(to_oz(750.0), 25.4);
        assert_eq!(to_oz(90.0), 3.0);
        assert_eq!(to_oz(0.0), 0.0);
        assert_eq!(to_oz(29.5735), 1.0);
    }

    #[test]
    fn test_to_ml() {
        assert_eq!(to_ml(1.0), 30.0);
        assert_eq!(to_ml(21.0), 621.0);
        assert_eq!(to_ml(0.0), 0.0);
    }

    #[test]
    fn test_negative_values_pass_through() {
        assert_eq!(to_ml(-1.0), -30.0);
        assert_eq!(to_oz(-29.5735), -1.0);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for tenths in 1..=1700 {
            let oz = tenths as f64 / 10.0;
            let back = to_oz(to_ml(oz));
            // Whole-ml rounding moves at most 0.5 ml (~0.017 oz) before the
            // one-decimal rounding on the way back.
            assert!((back - oz).abs() <= 0.1 + 1e-9, "{} -> {}", oz, back);
        }
    }

    #[test]
    fn test_convert() {
        assert_eq!(convert(750.0, Unit::Ml, Unit::Oz), 25.4);
        assert_eq!(convert(21.0, Unit::Oz, Unit::Ml), 621.0);
        assert_eq!(convert(12.34, Unit::Oz, Unit::Oz), 12.34);
    }
}
