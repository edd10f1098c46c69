//! Trainify Tools module
//!
//! MCP tool implementations for the fitness calculators.

pub mod calculators;
pub mod status;
