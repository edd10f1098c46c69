//! Classification lookups

use crate::models::BmiCategory;

/// Upper bound (exclusive) of the underweight band
pub const BMI_UNDERWEIGHT_BELOW: f64 = 18.5;
/// Upper bound (exclusive) of the normal band
pub const BMI_NORMAL_BELOW: f64 = 25.0;
/// Upper bound (exclusive) of the overweight band
pub const BMI_OVERWEIGHT_BELOW: f64 = 30.0;

/// WHO adult BMI bands; each band includes its lower bound
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < BMI_UNDERWEIGHT_BELOW {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_BELOW {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_BELOW {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
