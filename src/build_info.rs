//! Build information module
//!
//! Package metadata plus the conversion constants this build measures with,
//! so a banner or status call shows exactly which numbers produced a sheet.

use serde::Serialize;

use crate::config::Settings;
use crate::measure::simplify::{BAR_TSP_LIMIT_ML, DASH_LIMIT_ML};
use crate::measure::units::{ML_PER_BAR_TSP, ML_PER_DASH, ML_PER_FL_OZ, ML_PER_OZ_BAND};

/// Build timestamp in ISO 8601 format
pub const BUILD_TIMESTAMP: &str = match option_env!("FREEZER_BUILD_TIMESTAMP") {
    Some(s) => s,
    None => "unknown",
};

/// Package version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Package name from Cargo.toml
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Conversion constants compiled into the measurement engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EngineConstants {
    /// ml per fluid ounce, used for unit conversion
    pub ml_per_fl_oz: f64,
    /// ml per ounce, used only to place oz amounts in the dash/bar tsp bands
    pub ml_per_oz_band: f64,
    pub ml_per_dash: f64,
    pub ml_per_bar_tsp: f64,
    pub dash_limit_ml: f64,
    pub bar_tsp_limit_ml: f64,
}

impl EngineConstants {
    pub const fn current() -> Self {
        Self {
            ml_per_fl_oz: ML_PER_FL_OZ,
            ml_per_oz_band: ML_PER_OZ_BAND,
            ml_per_dash: ML_PER_DASH,
            ml_per_bar_tsp: ML_PER_BAR_TSP,
            dash_limit_ml: DASH_LIMIT_ML,
            bar_tsp_limit_ml: BAR_TSP_LIMIT_ML,
        }
    }
}

/// Build information structure for serialization
#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_timestamp: &'static str,
    pub engine: EngineConstants,
}

impl BuildInfo {
    pub fn current() -> Self {
        Self {
            name: NAME,
            version: VERSION,
            build_timestamp: BUILD_TIMESTAMP,
            engine: EngineConstants::current(),
        }
    }
}

/// Banner lines for the given settings
pub fn startup_banner(settings: &Settings) -> Vec<String> {
    let info = BuildInfo::current();
    let engine = info.engine;
    vec![
        "===============================================".to_string(),
        "  Freezer Door - batch cocktail measurements".to_string(),
        format!("  Version: {} | Compiled: {}", info.version, info.build_timestamp),
        format!(
            "  1 oz = {} ml (bands: {} ml) | dash < {} ml | bar tsp < {} ml",
            engine.ml_per_fl_oz, engine.ml_per_oz_band, engine.dash_limit_ml, engine.bar_tsp_limit_ml
        ),
        format!(
            "  Default unit: {} | Simplified: {}",
            settings.default_unit,
            if settings.simplified { "on" } else { "off" }
        ),
        "===============================================".to_string(),
    ]
}

/// Print the startup banner to stderr
pub fn print_startup_banner(settings: &Settings) {
    for line in startup_banner(settings) {
        eprintln!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Unit;

    #[test]
    fn test_current_uses_package_metadata() {
        let info = BuildInfo::current();
        assert_eq!(info.name, "freezer-door");
        assert_eq!(info.version, VERSION);
    }

    #[test]
    fn test_engine_keeps_both_ounce_constants() {
        let engine = EngineConstants::current();
        assert_eq!(engine.ml_per_fl_oz, 29.5735);
        assert_eq!(engine.ml_per_oz_band, 29.57);
        assert_eq!(engine.ml_per_bar_tsp, 5.0);
        assert_eq!(engine.bar_tsp_limit_ml, 7.5);
    }

    #[test]
    fn test_banner_reports_constants_and_settings() {
        let settings = Settings {
            default_unit: Unit::Ml,
            simplified: true,
        };
        let banner = startup_banner(&settings);
        assert!(banner.iter().any(|l| l.contains("1 oz = 29.5735 ml (bands: 29.57 ml)")));
        assert!(banner.iter().any(|l| l.contains("Default unit: ml | Simplified: on")));
    }
}
