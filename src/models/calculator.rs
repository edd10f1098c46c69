//! Calculator catalog
//!
//! The eight calculators the service offers, with the id, title and short
//! description shown when listing them.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CalculatorKind {
    Bmi,
    Bmr,
    Tdee,
    Macros,
    BodyFat,
    IdealWeight,
    Water,
    OneRepMax,
}

impl CalculatorKind {
    pub const ALL: [CalculatorKind; 8] = [
        CalculatorKind::Bmi,
        CalculatorKind::Bmr,
        CalculatorKind::Tdee,
        CalculatorKind::Macros,
        CalculatorKind::BodyFat,
        CalculatorKind::IdealWeight,
        CalculatorKind::Water,
        CalculatorKind::OneRepMax,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "bmi",
            CalculatorKind::Bmr => "bmr",
            CalculatorKind::Tdee => "tdee",
            CalculatorKind::Macros => "macros",
            CalculatorKind::BodyFat => "bodyfat",
            CalculatorKind::IdealWeight => "idealweight",
            CalculatorKind::Water => "water",
            CalculatorKind::OneRepMax => "onerepmax",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "BMI Calculator",
            CalculatorKind::Bmr => "BMR Calculator",
            CalculatorKind::Tdee => "TDEE Calculator",
            CalculatorKind::Macros => "Macro Calculator",
            CalculatorKind::BodyFat => "Body Fat %",
            CalculatorKind::IdealWeight => "Ideal Weight",
            CalculatorKind::Water => "Water Intake",
            CalculatorKind::OneRepMax => "One Rep Max",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "Calculate your Body Mass Index",
            CalculatorKind::Bmr => "Basal Metabolic Rate",
            CalculatorKind::Tdee => "Total Daily Energy Expenditure",
            CalculatorKind::Macros => "Calculate Protein, Carbs & Fats",
            CalculatorKind::BodyFat => "Estimate body fat percentage",
            CalculatorKind::IdealWeight => "Calculate your ideal weight",
            CalculatorKind::Water => "Daily water requirement",
            CalculatorKind::OneRepMax => "Calculate your 1RM",
        }
    }

    /// Unit of the headline figure
    pub fn unit(&self) -> &'static str {
        match self {
            CalculatorKind::Bmi => "kg/m²",
            CalculatorKind::Bmr | CalculatorKind::Tdee => "kcal/day",
            CalculatorKind::Macros => "g",
            CalculatorKind::BodyFat => "%",
            CalculatorKind::IdealWeight | CalculatorKind::OneRepMax => "kg",
            CalculatorKind::Water => "L/day",
        }
    }
}
