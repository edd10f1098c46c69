//! Data models
//!
//! Plain value records passed into and returned from the calculators.

mod calculator;
mod input;
mod measurement;
mod result;

pub use calculator::CalculatorKind;
pub use input::{
    BmiInput, BmrInput, BodyFatInput, IdealWeightInput, MacroInput, OneRepMaxInput, TdeeInput,
    WaterInput,
};
pub use measurement::{ActivityFactor, MacroGoal, MacroSplit, Sex, WaterActivity};
pub use result::{
    BmiCategory, BmiResult, BmrResult, BodyFatResult, CalculationResult, IdealWeightResult,
    MacroResult, OneRepMaxResult, TdeeResult, WaterResult,
};
