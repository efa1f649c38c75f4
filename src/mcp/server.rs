//! Freezer Door MCP Server Implementation
//!
//! Implements the MCP server with all Freezer Door tools.

use std::collections::BTreeMap;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::Settings;
use crate::models::AbvPreset;
use crate::tools::measurements::{self, BatchSizeInput};
use crate::tools::results;
use crate::tools::status::StatusTracker;

/// Freezer Door MCP Service
#[derive(Clone)]
pub struct FreezerService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    settings: Settings,
    tool_router: ToolRouter<FreezerService>,
}

impl FreezerService {
    pub fn new(settings: Settings) -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new(settings.clone()))),
            settings,
            tool_router: Self::tool_router(),
        }
    }

    /// Unit from the call, or the configured default
    fn unit_or_default(&self, unit: Option<String>) -> String {
        unit.unwrap_or_else(|| self.settings.default_unit.as_str().to_string())
    }

    fn simplified_or_default(&self, simplified: Option<bool>) -> bool {
        simplified.unwrap_or(self.settings.simplified)
    }
}

fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Measurement Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertVolumeParams {
    /// Volume to convert
    pub value: f64,
    /// Unit the value is in: "ml" or "oz"
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct DefaultBatchVolumeParams {
    /// Serving size of one drink in ml (omit if the cocktail has none)
    pub serving_size_ml: Option<f64>,
    /// Unit for the suggested volume: "ml" or "oz" (default from settings)
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SimplifyAmountParams {
    /// Exact amount in ml
    pub ml: f64,
    /// Exact amount in oz (derived from ml when omitted)
    pub oz: Option<f64>,
    /// Display unit: "ml" or "oz" (default from settings)
    pub unit: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatAmountParams {
    /// Exact amount in ml
    pub ml: f64,
    /// Exact amount in oz (derived from ml when omitted)
    pub oz: Option<f64>,
    /// Display unit: "ml" or "oz" (default from settings)
    pub unit: Option<String>,
    /// Show a single practical measure instead of exact values
    pub simplified: Option<bool>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BatchSizeStateParams {
    /// Volume currently entered (omit to use the suggested default)
    pub volume: Option<f64>,
    /// Unit the volume is entered in: "ml" or "oz" (default from settings)
    pub unit: Option<String>,
    /// Serving size of the selected cocktail in ml
    pub serving_size_ml: Option<f64>,
    /// Switch to this unit, converting the volume
    pub switch_unit: Option<String>,
    /// "volume" or "drinks"
    pub mode: Option<String>,
    /// Number of drinks to set (drinks mode needs a serving size)
    pub drinks: Option<u32>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AbvPresetParam {
    pub name: String,
    pub abv: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AbvPresetsParams {
    /// Cocktail presets keyed by id (mild, classic, strong); defaults when omitted
    pub presets: Option<BTreeMap<String, AbvPresetParam>>,
}

// ============================================================================
// Results Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct RenderBatchParams {
    /// Response body from the calculation service's POST /calculate
    pub calculation: serde_json::Value,
    /// Display unit: "ml" or "oz" (default from settings)
    pub unit: Option<String>,
    /// Show practical measures instead of exact values (default from settings)
    pub simplified: Option<bool>,
    /// Return plain text instead of JSON (default false)
    #[serde(default)]
    pub as_text: bool,
}

// ============================================================================
// Tool Router
// ============================================================================

#[tool_router]
impl FreezerService {
    // --- Status ---

    #[tool(description = "Get the current status of the Freezer Door service including build info, settings, and process information")]
    async fn freezer_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        json_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for sizing a batch and displaying calculation results. Call this before using the other tools.")]
    fn batch_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::BATCH_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(BATCH_INSTRUCTIONS)]))
    }

    // --- Measurements ---

    #[tool(description = "Convert a volume between ml and oz (ml -> oz rounds to 0.1, oz -> ml rounds to whole ml)")]
    fn convert_volume(&self, Parameters(p): Parameters<ConvertVolumeParams>) -> Result<CallToolResult, McpError> {
        let result = measurements::convert_volume(p.value, &p.unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Suggest a starting batch volume: six drinks at the cocktail's serving size")]
    fn default_batch_volume(&self, Parameters(p): Parameters<DefaultBatchVolumeParams>) -> Result<CallToolResult, McpError> {
        let unit = self.unit_or_default(p.unit);
        let result = measurements::default_batch_volume(p.serving_size_ml, &unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Simplify an exact amount into dashes, bar teaspoons, or rounded ml/oz")]
    fn simplify_amount(&self, Parameters(p): Parameters<SimplifyAmountParams>) -> Result<CallToolResult, McpError> {
        let unit = self.unit_or_default(p.unit);
        let result = measurements::simplify_amount(p.ml, p.oz, &unit)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Format an amount as exact ml/oz values or as a single simplified measure")]
    fn format_amount(&self, Parameters(p): Parameters<FormatAmountParams>) -> Result<CallToolResult, McpError> {
        let unit = self.unit_or_default(p.unit);
        let simplified = self.simplified_or_default(p.simplified);
        let result = measurements::format_amount(p.ml, p.oz, &unit, simplified)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Replay changes to the batch-size field (unit switch, volume/drinks mode, drink count) and return its state and input bounds")]
    fn batch_size_state(&self, Parameters(p): Parameters<BatchSizeStateParams>) -> Result<CallToolResult, McpError> {
        let input = BatchSizeInput {
            volume: p.volume,
            unit: self.unit_or_default(p.unit),
            serving_size_ml: p.serving_size_ml,
            switch_unit: p.switch_unit,
            mode: p.mode,
            drinks: p.drinks,
        };
        let result = measurements::batch_size_state(input)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }

    #[tool(description = "List target ABV presets in display order with the custom ABV slider range")]
    fn abv_presets(&self, Parameters(p): Parameters<AbvPresetsParams>) -> Result<CallToolResult, McpError> {
        let presets = p.presets.map(|presets| {
            presets
                .into_iter()
                .map(|(id, preset)| (id, AbvPreset { name: preset.name, abv: preset.abv }))
                .collect()
        });
        json_result(&measurements::abv_presets(presets))
    }

    // --- Results ---

    #[tool(description = "Render a calculation service response as a batch sheet with ingredient amounts, dilution water, and stats")]
    fn render_batch(&self, Parameters(p): Parameters<RenderBatchParams>) -> Result<CallToolResult, McpError> {
        let unit = self.unit_or_default(p.unit);
        let simplified = self.simplified_or_default(p.simplified);
        let sheet = results::render_batch(p.calculation, &unit, simplified)
            .map_err(|e| McpError::invalid_params(e, None))?;
        if p.as_text {
            return Ok(CallToolResult::success(vec![Content::text(sheet.to_text())]));
        }
        json_result(&sheet)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for FreezerService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "freezer-door".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Freezer Door".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Freezer Door - batch cocktail measurements. \
                 Call batch_instructions first. \
                 Batch size: default_batch_volume, batch_size_state, convert_volume, abv_presets. \
                 Results: render_batch (takes the calculate response), format_amount, simplify_amount. \
                 Status: freezer_status."
                    .into(),
            ),
        }
    }
}
