//! Freezer Door Tools module
//!
//! MCP tool implementations for the Freezer Door service.

pub mod measurements;
pub mod results;
pub mod status;
