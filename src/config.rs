//! Service settings
//!
//! Read once from the environment at startup. Nothing is written back.

use serde::Serialize;

use crate::measure::Unit;

/// Environment variable selecting the initial display unit
pub const DEFAULT_UNIT_VAR: &str = "FREEZER_DEFAULT_UNIT";
/// Environment variable turning simplified amounts on by default
pub const SIMPLIFIED_VAR: &str = "FREEZER_SIMPLIFIED";

/// Defaults applied when a tool call leaves unit or simplification unset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Settings {
    pub default_unit: Unit,
    pub simplified: bool,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings through a variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(raw) = lookup(DEFAULT_UNIT_VAR) {
            match Unit::from_str(&raw) {
                Some(unit) => settings.default_unit = unit,
                None => tracing::warn!(
                    "Ignoring {}={:?}; expected ml or oz",
                    DEFAULT_UNIT_VAR,
                    raw
                ),
            }
        }

        if let Some(raw) = lookup(SIMPLIFIED_VAR) {
            match parse_flag(&raw) {
                Some(flag) => settings.simplified = flag,
                None => tracing::warn!(
                    "Ignoring {}={:?}; expected true or false",
                    SIMPLIFIED_VAR,
                    raw
                ),
            }
        }

        settings
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_lowercase().trim() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
