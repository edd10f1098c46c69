//! Calculation results
//!
//! One result record per calculator, gathered under the `CalculationResult`
//! tagged union. Values are already rounded the way they are displayed.

use serde::Serialize;

use super::measurement::{ActivityFactor, MacroGoal, Sex, WaterActivity};

/// BMI classification band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    /// Colour used to highlight the band
    pub fn indicator(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "blue",
            BmiCategory::Normal => "green",
            BmiCategory::Overweight => "yellow",
            BmiCategory::Obese => "red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
    pub label: &'static str,
    pub indicator: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmrResult {
    pub sex: Sex,
    /// kcal/day at rest
    pub calories: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TdeeResult {
    pub activity: ActivityFactor,
    /// kcal/day, equal to `maintenance`
    pub calories: f64,
    pub weight_loss: f64,
    pub maintenance: f64,
    pub weight_gain: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MacroResult {
    pub goal: MacroGoal,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyFatResult {
    pub sex: Sex,
    pub body_fat_percent: f64,
}

/// Ideal body weight by the four classic height-based formulas, in kg
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IdealWeightResult {
    pub sex: Sex,
    pub robinson: f64,
    pub miller: f64,
    pub devine: f64,
    pub hamwi: f64,
    pub average: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WaterResult {
    pub activity: WaterActivity,
    pub liters: f64,
    /// 250 ml glasses
    pub glasses: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OneRepMaxResult {
    pub one_rep_max_kg: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum CalculationResult {
    Bmi(BmiResult),
    Bmr(BmrResult),
    Tdee(TdeeResult),
    Macros(MacroResult),
    #[serde(rename = "bodyfat")]
    BodyFat(BodyFatResult),
    #[serde(rename = "idealweight")]
    IdealWeight(IdealWeightResult),
    Water(WaterResult),
    #[serde(rename = "onerepmax")]
    OneRepMax(OneRepMaxResult),
}

impl CalculationResult {
    /// One-line human summary, used by the report binary
    pub fn summary(&self) -> String {
        match self {
            CalculationResult::Bmi(r) => format!("{:.1} ({})", r.bmi, r.category.label()),
            CalculationResult::Bmr(r) => format!("{} calories/day", r.calories),
            CalculationResult::Tdee(r) => format!(
                "{} calories/day (loss {}, gain {})",
                r.calories, r.weight_loss, r.weight_gain
            ),
            CalculationResult::Macros(r) => format!(
                "protein {}g, carbs {}g, fat {}g",
                r.protein_g, r.carbs_g, r.fat_g
            ),
            CalculationResult::BodyFat(r) => format!("{:.1}%", r.body_fat_percent),
            CalculationResult::IdealWeight(r) => format!(
                "Robinson {:.1} kg, Miller {:.1} kg, Devine {:.1} kg, Hamwi {:.1} kg",
                r.robinson, r.miller, r.devine, r.hamwi
            ),
            CalculationResult::Water(r) => {
                format!("{:.1} L/day (≈ {} glasses)", r.liters, r.glasses)
            }
            CalculationResult::OneRepMax(r) => format!("{} kg", r.one_rep_max_kg),
        }
    }
}
