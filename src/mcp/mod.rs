//! MCP module
//!
//! Exposes the Freezer Door tools over stdio.

pub mod server;

pub use server::FreezerService;
