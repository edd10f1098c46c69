//! Input validation
//!
//! Turns raw form text into typed values. A calculation only proceeds once
//! every required field parses to a finite number greater than zero.

use thiserror::Error;

use crate::models::{ActivityFactor, MacroGoal, Sex, WaterActivity};

/// Why a calculation was not computed
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field} is not a number: {value:?}")]
    NotANumber { field: &'static str, value: String },

    #[error("{field} must be a finite number greater than zero")]
    NotPositive { field: &'static str },

    #[error("{field} has an unrecognised value: {value:?}")]
    UnknownOption { field: &'static str, value: String },

    #[error("measurements are outside the formula's valid range")]
    InvalidMeasurements,
}

/// Result type for input parsing
pub type InputResult<T> = Result<T, InputError>;

/// Parse a required physical quantity: finite and strictly positive
pub fn parse_positive(field: &'static str, raw: &str) -> InputResult<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Missing { field });
    }

    let value: f64 = trimmed.parse().map_err(|_| InputError::NotANumber {
        field,
        value: trimmed.to_string(),
    })?;

    if !value.is_finite() || value <= 0.0 {
        return Err(InputError::NotPositive { field });
    }

    Ok(value)
}

/// Blank selects the form default, male
pub fn parse_sex(raw: &str) -> InputResult<Sex> {
    if raw.trim().is_empty() {
        return Ok(Sex::default());
    }
    Sex::from_str(raw).ok_or_else(|| InputError::UnknownOption {
        field: "sex",
        value: raw.trim().to_string(),
    })
}

/// Blank selects the form default, sedentary (1.2)
pub fn parse_activity_factor(raw: &str) -> InputResult<ActivityFactor> {
    if raw.trim().is_empty() {
        return Ok(ActivityFactor::default());
    }
    ActivityFactor::from_str(raw).ok_or_else(|| InputError::UnknownOption {
        field: "activity",
        value: raw.trim().to_string(),
    })
}

/// Never fails: anything but "cut" or "bulk" is a maintenance split
pub fn parse_macro_goal(raw: &str) -> MacroGoal {
    MacroGoal::from_str(raw)
}

/// Blank selects the form default, moderate. An unrecognised level applies
/// no multiplier, same as sedentary.
pub fn parse_water_activity(raw: &str) -> WaterActivity {
    if raw.trim().is_empty() {
        return WaterActivity::default();
    }
    WaterActivity::from_str(raw).unwrap_or_else(|| {
        tracing::debug!(
            activity = raw.trim(),
            "unrecognised water activity level, no multiplier applied"
        );
        WaterActivity::Sedentary
    })
}
