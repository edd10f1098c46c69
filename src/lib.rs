//! Trainify Library
//!
//! Fitness calculators (BMI, BMR, TDEE, macros, body fat, ideal weight,
//! water intake, one-rep max) and the MCP tools that expose them.

pub mod build_info;
pub mod fitness;
pub mod mcp;
pub mod models;
pub mod tools;
