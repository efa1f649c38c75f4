//! Freezer Door Status Tool
//!
//! Provides runtime status information about the Freezer Door service.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::{BuildInfo, EngineConstants};
use crate::config::Settings;

/// Batch workflow instructions for AI assistants
pub const BATCH_INSTRUCTIONS: &str = r#"
# Freezer Door Batch Instructions

Freezer Door turns a calculation service result into amounts a bartender can
pour. It does not compute dilution itself.

## Batch Size

- `default_batch_volume` suggests six drinks at the cocktail's serving size.
  In oz the serving is snapped to the nearest half ounce.
- `batch_size_state` replays the batch-size field: unit switches convert the
  volume (ml -> oz keeps one decimal, oz -> ml is whole), drinks mode needs a
  serving size.
- `convert_volume` converts a single value to the other unit.

## Results

- `render_batch` takes the calculate response JSON and renders every
  ingredient plus the dilution water.
- `simplified: false` shows the exact amount in the chosen unit followed by
  the other unit.
- `simplified: true` shows one practical measure:

| Amount (ml) | Shown as |
|-------------|----------|
| <= 0        | 0 dashes |
| < 5         | whole dashes |
| 5 - 7.5     | half bar teaspoons (1 bar tsp = 5 ml) |
| >= 7.5      | nearest 5 ml, or nearest 1/4 oz |

Re-render with a different unit or toggle instead of asking for a new
calculation.
"#;

/// Runtime status of the Freezer Door service
#[derive(Debug, Clone, Serialize)]
pub struct FreezerStatus {
    /// Build information
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Conversion constants in use
    pub engine: EngineConstants,

    /// Effective settings
    pub settings: Settings,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: chrono::DateTime<chrono::Utc>,
    settings: Settings,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(settings: Settings) -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now(),
            settings,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> FreezerStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        FreezerStatus {
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            engine: build_info.engine,
            settings: self.settings.clone(),
            started_at: self.started_at.to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}
