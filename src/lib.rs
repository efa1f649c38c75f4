//! Freezer Door Library
//!
//! Measurement engine for batched freezer cocktails: ml/oz conversion,
//! default batch sizes, and bar-practical rounding of calculated amounts.

pub mod build_info;
pub mod config;
pub mod error;
pub mod mcp;
pub mod measure;
pub mod models;
pub mod tools;

pub use error::{FreezerError, FreezerResult};
