//! Calculator inputs
//!
//! Typed inputs for each calculator. Lengths are centimetres, masses
//! kilograms, ages years. `fitness::forms` builds them from user text and
//! rejects anything not finite and positive; the formulas check the same
//! again, so a hand-built input with a bad quantity is simply not computed.

use super::measurement::{ActivityFactor, MacroGoal, Sex, WaterActivity};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmiInput {
    pub weight_kg: f64,
    pub height_cm: f64,
}

/// Body measurements shared by BMR and TDEE
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BmrInput {
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age_years: f64,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TdeeInput {
    pub body: BmrInput,
    pub activity: ActivityFactor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroInput {
    pub calories: f64,
    pub goal: MacroGoal,
}

/// Circumferences for the U.S. Navy method
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyFatInput {
    Male {
        height_cm: f64,
        neck_cm: f64,
        waist_cm: f64,
    },
    Female {
        height_cm: f64,
        neck_cm: f64,
        waist_cm: f64,
        hip_cm: f64,
    },
}

impl BodyFatInput {
    pub fn sex(&self) -> Sex {
        match self {
            BodyFatInput::Male { .. } => Sex::Male,
            BodyFatInput::Female { .. } => Sex::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdealWeightInput {
    pub height_cm: f64,
    pub sex: Sex,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterInput {
    pub weight_kg: f64,
    pub activity: WaterActivity,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OneRepMaxInput {
    pub weight_kg: f64,
    pub reps: f64,
}
