//! Fitness formulas
//!
//! Closed-form calculators over typed inputs. Each returns `None` when a
//! physical quantity is not finite and strictly positive, or when the
//! arithmetic leaves its numerical domain (a logarithm of a non-positive
//! number, an overflow to infinity). Rounding is applied to the final figure
//! only.
//!
//! # References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy
//!   expenditure. *American Journal of Clinical Nutrition*, 51(2), 241-247.
//! - Hodgdon, J.A., & Beckett, M.B. (1984). Prediction of percent body fat for
//!   U.S. Navy men and women from body circumferences and height. Naval Health
//!   Research Center reports 84-11 and 84-29.
//! - Epley, B. (1985). Poundage chart. *Boyd Epley Workout*.

use crate::models::{
    BmiInput, BmiResult, BmrInput, BmrResult, BodyFatInput, BodyFatResult, IdealWeightInput,
    IdealWeightResult, MacroInput, MacroResult, OneRepMaxInput, OneRepMaxResult, Sex, TdeeInput,
    TdeeResult, WaterInput, WaterResult,
};

use super::classification::classify_bmi;

// ============================================================================
// Constants
// ============================================================================

/// Centimetres per metre
pub const CM_PER_M: f64 = 100.0;
/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Mifflin-St Jeor coefficients
pub const MSJ_WEIGHT_COEF: f64 = 10.0;
pub const MSJ_HEIGHT_COEF: f64 = 6.25;
pub const MSJ_AGE_COEF: f64 = -5.0;
pub const MSJ_MALE_CONSTANT: f64 = 5.0;
pub const MSJ_FEMALE_CONSTANT: f64 = -161.0;

/// Calorie offset for the weight-loss and weight-gain targets around TDEE
pub const TDEE_GOAL_ADJUSTMENT: f64 = 500.0;

/// Energy density of protein and carbohydrate
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_CARBS: f64 = 4.0;
/// Energy density of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;

/// Height the ideal-weight formulas are anchored at (5 ft)
pub const IDEAL_WEIGHT_BASE_HEIGHT_IN: f64 = 60.0;

/// Baseline water need per kilogram of body weight
pub const WATER_LITERS_PER_KG: f64 = 0.033;
/// Glass size used for the glasses estimate
pub const WATER_GLASSES_PER_LITER: f64 = 4.0;

/// Epley divisor
pub const EPLEY_REPS_DIVISOR: f64 = 30.0;

/// Base and per-inch slope of one ideal-weight formula
#[derive(Debug, Clone, Copy, PartialEq)]
struct IdealWeightFormula {
    base_kg: f64,
    kg_per_inch: f64,
}

impl IdealWeightFormula {
    const fn new(base_kg: f64, kg_per_inch: f64) -> Self {
        Self { base_kg, kg_per_inch }
    }

    fn apply(&self, height_in: f64) -> f64 {
        self.base_kg + self.kg_per_inch * (height_in - IDEAL_WEIGHT_BASE_HEIGHT_IN)
    }
}

/// Robinson, Miller, Devine, Hamwi
const IDEAL_WEIGHT_MALE: [IdealWeightFormula; 4] = [
    IdealWeightFormula::new(52.0, 1.9),
    IdealWeightFormula::new(56.2, 1.41),
    IdealWeightFormula::new(50.0, 2.3),
    IdealWeightFormula::new(48.0, 2.7),
];

/// Robinson, Miller, Devine, Hamwi
const IDEAL_WEIGHT_FEMALE: [IdealWeightFormula; 4] = [
    IdealWeightFormula::new(49.0, 1.7),
    IdealWeightFormula::new(53.1, 1.36),
    IdealWeightFormula::new(45.5, 2.3),
    IdealWeightFormula::new(45.5, 2.2),
];

// ============================================================================
// Helpers
// ============================================================================

/// Round half away from zero to `decimals` places
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn finite(value: f64) -> Option<f64> {
    value.is_finite().then_some(value)
}

/// Physical quantities must be finite and strictly positive
fn positive(value: f64) -> Option<f64> {
    (value.is_finite() && value > 0.0).then_some(value)
}

fn positive_body(input: &BmrInput) -> Option<()> {
    positive(input.weight_kg)?;
    positive(input.height_cm)?;
    positive(input.age_years)?;
    Some(())
}

// ============================================================================
// Calculators
// ============================================================================

/// Body Mass Index: weight / height², 1 decimal
///
/// The category is taken from the rounded figure, so 24.96 reads as 25.0 and
/// classifies as overweight.
pub fn bmi(input: &BmiInput) -> Option<BmiResult> {
    let weight_kg = positive(input.weight_kg)?;
    let height_m = positive(input.height_cm)? / CM_PER_M;
    let bmi = round_to(finite(weight_kg / (height_m * height_m))?, 1);
    let category = classify_bmi(bmi);

    Some(BmiResult {
        bmi,
        category,
        label: category.label(),
        indicator: category.indicator(),
    })
}

/// Unrounded Mifflin-St Jeor BMR
///
/// Formula: BMR = 10 x `weight_kg` + 6.25 x `height_cm` - 5 x age + constant
/// - Men: +5
/// - Women: -161
pub fn mifflin_st_jeor(input: &BmrInput) -> f64 {
    let sex_constant = match input.sex {
        Sex::Male => MSJ_MALE_CONSTANT,
        Sex::Female => MSJ_FEMALE_CONSTANT,
    };

    MSJ_WEIGHT_COEF * input.weight_kg
        + MSJ_HEIGHT_COEF * input.height_cm
        + MSJ_AGE_COEF * input.age_years
        + sex_constant
}

/// Basal Metabolic Rate in kcal/day, rounded to the nearest calorie
pub fn bmr(input: &BmrInput) -> Option<BmrResult> {
    positive_body(input)?;

    Some(BmrResult {
        sex: input.sex,
        calories: finite(mifflin_st_jeor(input))?.round(),
    })
}

/// Total Daily Energy Expenditure: exact BMR x activity factor, rounded once
pub fn tdee(input: &TdeeInput) -> Option<TdeeResult> {
    positive_body(&input.body)?;
    let tdee = finite(mifflin_st_jeor(&input.body) * input.activity.factor())?.round();

    Some(TdeeResult {
        activity: input.activity,
        calories: tdee,
        weight_loss: tdee - TDEE_GOAL_ADJUSTMENT,
        maintenance: tdee,
        weight_gain: tdee + TDEE_GOAL_ADJUSTMENT,
    })
}

/// Grams of protein, carbs and fat for a daily calorie budget
pub fn macros(input: &MacroInput) -> Option<MacroResult> {
    let split = input.goal.split();
    let calories = positive(input.calories)?;

    Some(MacroResult {
        goal: input.goal,
        protein_g: finite(calories * split.protein / KCAL_PER_G_PROTEIN)?.round(),
        carbs_g: finite(calories * split.carbs / KCAL_PER_G_CARBS)?.round(),
        fat_g: finite(calories * split.fat / KCAL_PER_G_FAT)?.round(),
    })
}

/// Body fat percentage by the U.S. Navy circumference method, 1 decimal
///
/// Men: 495 / (1.0324 - 0.19077 log10(waist - neck) + 0.15456 log10(height)) - 450
/// Women: 495 / (1.29579 - 0.35004 log10(waist + hip - neck) + 0.221 log10(height)) - 450
///
/// `None` when the circumference term is not positive (waist at or below neck).
pub fn body_fat(input: &BodyFatInput) -> Option<BodyFatResult> {
    let density = match *input {
        BodyFatInput::Male { height_cm, neck_cm, waist_cm } => {
            positive(height_cm)?;
            positive(neck_cm)?;
            positive(waist_cm)?;
            let girth = waist_cm - neck_cm;
            if girth <= 0.0 {
                return None;
            }
            1.0324 - 0.19077 * girth.log10() + 0.15456 * height_cm.log10()
        }
        BodyFatInput::Female { height_cm, neck_cm, waist_cm, hip_cm } => {
            positive(height_cm)?;
            positive(neck_cm)?;
            positive(waist_cm)?;
            positive(hip_cm)?;
            let girth = waist_cm + hip_cm - neck_cm;
            if girth <= 0.0 {
                return None;
            }
            1.29579 - 0.35004 * girth.log10() + 0.221 * height_cm.log10()
        }
    };

    let percent = finite(495.0 / density - 450.0)?;

    Some(BodyFatResult {
        sex: input.sex(),
        body_fat_percent: round_to(percent, 1),
    })
}

/// Robinson, Miller, Devine and Hamwi ideal weights, 1 decimal each
///
/// Heights under five feet extrapolate the same lines downward.
pub fn ideal_weight(input: &IdealWeightInput) -> Option<IdealWeightResult> {
    let height_in = positive(input.height_cm)? / CM_PER_INCH;
    let formulas = match input.sex {
        Sex::Male => &IDEAL_WEIGHT_MALE,
        Sex::Female => &IDEAL_WEIGHT_FEMALE,
    };

    let [robinson, miller, devine, hamwi] = formulas.map(|f| f.apply(height_in));
    let average = finite((robinson + miller + devine + hamwi) / 4.0)?;

    Some(IdealWeightResult {
        sex: input.sex,
        robinson: round_to(robinson, 1),
        miller: round_to(miller, 1),
        devine: round_to(devine, 1),
        hamwi: round_to(hamwi, 1),
        average: round_to(average, 1),
    })
}

/// Daily water need in litres, 1 decimal, plus a 250 ml glass count
pub fn water_intake(input: &WaterInput) -> Option<WaterResult> {
    let mut liters = positive(input.weight_kg)? * WATER_LITERS_PER_KG;
    if let Some(multiplier) = input.activity.multiplier() {
        liters *= multiplier;
    }
    let liters = round_to(finite(liters)?, 1);

    Some(WaterResult {
        activity: input.activity,
        liters,
        glasses: (liters * WATER_GLASSES_PER_LITER).round(),
    })
}

/// Epley one-rep max: weight x (1 + reps / 30), nearest kilogram
pub fn one_rep_max(input: &OneRepMaxInput) -> Option<OneRepMaxResult> {
    let weight_kg = positive(input.weight_kg)?;
    let reps = positive(input.reps)?;
    let orm = weight_kg * (1.0 + reps / EPLEY_REPS_DIVISOR);

    Some(OneRepMaxResult {
        one_rep_max_kg: finite(orm)?.round(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ActivityFactor, BmiCategory, MacroGoal, WaterActivity};

    fn male_70kg() -> BmrInput {
        BmrInput {
            weight_kg: 70.0,
            height_cm: 175.0,
            age_years: 25.0,
            sex: Sex::Male,
        }
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(22.857, 1), 22.9);
        assert_eq!(round_to(116.666, 0), 117.0);
        assert_eq!(round_to(2.25, 1), 2.3);
    }

    #[test]
    fn test_bmi_normal() {
        let result = bmi(&BmiInput { weight_kg: 70.0, height_cm: 175.0 }).unwrap();
        assert_eq!(result.bmi, 22.9);
        assert_eq!(result.category, BmiCategory::Normal);
        assert_eq!(result.label, "Normal weight");
        assert_eq!(result.indicator, "green");
    }

    #[test]
    fn test_bmi_boundary_is_overweight() {
        let result = bmi(&BmiInput { weight_kg: 76.6, height_cm: 175.0 }).unwrap();
        assert_eq!(result.bmi, 25.0);
        assert_eq!(result.category, BmiCategory::Overweight);
    }

    #[test]
    fn test_bmi_matches_definition() {
        for (w, h) in [(50.0, 160.0), (95.0, 175.0), (120.5, 190.0), (45.2, 150.3)] {
            let expected = w / (h / 100.0_f64).powi(2);
            let result = bmi(&BmiInput { weight_kg: w, height_cm: h }).unwrap();
            assert!((result.bmi - expected).abs() <= 0.05, "{w} kg / {h} cm");
        }
    }

    #[test]
    fn test_bmi_extremes() {
        assert_eq!(
            bmi(&BmiInput { weight_kg: 50.0, height_cm: 175.0 }).unwrap().category,
            BmiCategory::Underweight
        );
        assert_eq!(
            bmi(&BmiInput { weight_kg: 95.0, height_cm: 175.0 }).unwrap().category,
            BmiCategory::Obese
        );
    }

    #[test]
    fn test_bmr_male() {
        assert_eq!(mifflin_st_jeor(&male_70kg()), 1673.75);
        assert_eq!(bmr(&male_70kg()).unwrap().calories, 1674.0);
    }

    #[test]
    fn test_bmr_female() {
        let input = BmrInput {
            weight_kg: 60.0,
            height_cm: 165.0,
            age_years: 30.0,
            sex: Sex::Female,
        };
        assert_eq!(mifflin_st_jeor(&input), 1320.25);
        assert_eq!(bmr(&input).unwrap().calories, 1320.0);
    }

    #[test]
    fn test_bmr_sex_offset_is_166() {
        let male = mifflin_st_jeor(&male_70kg());
        let female = mifflin_st_jeor(&BmrInput { sex: Sex::Female, ..male_70kg() });
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_rounds_only_final_value() {
        let result = tdee(&TdeeInput {
            body: male_70kg(),
            activity: ActivityFactor::Sedentary,
        })
        .unwrap();
        assert_eq!(result.calories, 2009.0);
        assert_eq!(result.weight_loss, 1509.0);
        assert_eq!(result.maintenance, 2009.0);
        assert_eq!(result.weight_gain, 2509.0);
    }

    #[test]
    fn test_tdee_moderately_active() {
        let result = tdee(&TdeeInput {
            body: male_70kg(),
            activity: ActivityFactor::ModeratelyActive,
        })
        .unwrap();
        // 1673.75 x 1.55 = 2594.3125
        assert_eq!(result.calories, 2594.0);
    }

    #[test]
    fn test_macros_cut() {
        let result = macros(&MacroInput { calories: 2000.0, goal: MacroGoal::Cut }).unwrap();
        assert_eq!(result.protein_g, 200.0);
        assert_eq!(result.carbs_g, 150.0);
        assert_eq!(result.fat_g, 67.0);
    }

    #[test]
    fn test_macros_maintain() {
        let result = macros(&MacroInput { calories: 2000.0, goal: MacroGoal::Maintain }).unwrap();
        assert_eq!(result.protein_g, 150.0);
        assert_eq!(result.carbs_g, 200.0);
        assert_eq!(result.fat_g, 67.0);
    }

    #[test]
    fn test_macros_bulk() {
        let result = macros(&MacroInput { calories: 2500.0, goal: MacroGoal::Bulk }).unwrap();
        assert_eq!(result.protein_g, 188.0);
        assert_eq!(result.carbs_g, 313.0);
        assert_eq!(result.fat_g, 56.0);
    }

    #[test]
    fn test_body_fat_male() {
        let result = body_fat(&BodyFatInput::Male {
            height_cm: 178.0,
            neck_cm: 38.0,
            waist_cm: 85.0,
        })
        .unwrap();
        assert_eq!(result.sex, Sex::Male);
        assert_eq!(result.body_fat_percent, 16.4);
    }

    #[test]
    fn test_body_fat_female() {
        let result = body_fat(&BodyFatInput::Female {
            height_cm: 165.0,
            neck_cm: 34.0,
            waist_cm: 75.0,
            hip_cm: 100.0,
        })
        .unwrap();
        assert_eq!(result.sex, Sex::Female);
        assert_eq!(result.body_fat_percent, 28.9);
    }

    #[test]
    fn test_body_fat_waist_not_above_neck() {
        let equal = BodyFatInput::Male { height_cm: 178.0, neck_cm: 40.0, waist_cm: 40.0 };
        let below = BodyFatInput::Male { height_cm: 178.0, neck_cm: 45.0, waist_cm: 40.0 };
        assert_eq!(body_fat(&equal), None);
        assert_eq!(body_fat(&below), None);

        let female = BodyFatInput::Female {
            height_cm: 165.0,
            neck_cm: 200.0,
            waist_cm: 70.0,
            hip_cm: 90.0,
        };
        assert_eq!(body_fat(&female), None);
    }

    #[test]
    fn test_ideal_weight_male() {
        let result = ideal_weight(&IdealWeightInput { height_cm: 175.0, sex: Sex::Male }).unwrap();
        assert_eq!(result.robinson, 68.9);
        assert_eq!(result.miller, 68.7);
        assert_eq!(result.devine, 70.5);
        assert_eq!(result.hamwi, 72.0);
        assert_eq!(result.average, 70.0);
    }

    #[test]
    fn test_ideal_weight_female() {
        let result =
            ideal_weight(&IdealWeightInput { height_cm: 165.0, sex: Sex::Female }).unwrap();
        assert_eq!(result.robinson, 57.4);
        assert_eq!(result.miller, 59.8);
        assert_eq!(result.devine, 56.9);
        assert_eq!(result.hamwi, 56.4);
    }

    #[test]
    fn test_ideal_weight_at_five_feet_is_formula_base() {
        let result =
            ideal_weight(&IdealWeightInput { height_cm: 152.4, sex: Sex::Male }).unwrap();
        assert_eq!(result.robinson, 52.0);
        assert_eq!(result.miller, 56.2);
        assert_eq!(result.devine, 50.0);
        assert_eq!(result.hamwi, 48.0);
    }

    #[test]
    fn test_water_intake_multipliers() {
        let at = |activity| water_intake(&WaterInput { weight_kg: 70.0, activity }).unwrap();

        let sedentary = at(WaterActivity::Sedentary);
        assert_eq!(sedentary.liters, 2.3);
        assert_eq!(sedentary.glasses, 9.0);

        let moderate = at(WaterActivity::Moderate);
        assert_eq!(moderate.liters, 2.8);
        assert_eq!(moderate.glasses, 11.0);

        let intense = at(WaterActivity::Intense);
        assert_eq!(intense.liters, 3.2);
        assert_eq!(intense.glasses, 13.0);
    }

    #[test]
    fn test_one_rep_max() {
        let result = one_rep_max(&OneRepMaxInput { weight_kg: 100.0, reps: 5.0 }).unwrap();
        assert_eq!(result.one_rep_max_kg, 117.0);

        let result = one_rep_max(&OneRepMaxInput { weight_kg: 60.0, reps: 10.0 }).unwrap();
        assert_eq!(result.one_rep_max_kg, 80.0);
    }

    #[test]
    fn test_overflow_is_not_computed() {
        let huge = BmiInput { weight_kg: f64::MAX, height_cm: 1e-10 };
        assert_eq!(bmi(&huge), None);
    }

    #[test]
    fn test_non_positive_quantities_are_not_computed() {
        for bad in [0.0, -70.0, f64::NAN, f64::INFINITY] {
            assert_eq!(bmi(&BmiInput { weight_kg: bad, height_cm: 175.0 }), None);
            assert_eq!(bmi(&BmiInput { weight_kg: 70.0, height_cm: bad }), None);

            let body = BmrInput { age_years: bad, ..male_70kg() };
            assert_eq!(bmr(&body), None);
            let body = BmrInput { weight_kg: bad, ..male_70kg() };
            assert_eq!(
                tdee(&TdeeInput { body, activity: ActivityFactor::Sedentary }),
                None
            );

            assert_eq!(macros(&MacroInput { calories: bad, goal: MacroGoal::Cut }), None);
            assert_eq!(
                body_fat(&BodyFatInput::Male { height_cm: 178.0, neck_cm: bad, waist_cm: 85.0 }),
                None
            );
            assert_eq!(
                body_fat(&BodyFatInput::Female {
                    height_cm: 165.0,
                    neck_cm: 34.0,
                    waist_cm: 75.0,
                    hip_cm: bad,
                }),
                None
            );
            assert_eq!(ideal_weight(&IdealWeightInput { height_cm: bad, sex: Sex::Male }), None);
            assert_eq!(
                water_intake(&WaterInput { weight_kg: bad, activity: WaterActivity::Light }),
                None
            );
            assert_eq!(one_rep_max(&OneRepMaxInput { weight_kg: 100.0, reps: bad }), None);
            assert_eq!(one_rep_max(&OneRepMaxInput { weight_kg: bad, reps: 5.0 }), None);
        }
    }

    #[test]
    fn test_negative_reps_do_not_cancel_the_lift() {
        assert_eq!(one_rep_max(&OneRepMaxInput { weight_kg: 100.0, reps: -30.0 }), None);
    }

    #[test]
    fn test_calculators_are_deterministic() {
        let input = TdeeInput { body: male_70kg(), activity: ActivityFactor::VeryActive };
        assert_eq!(tdee(&input), tdee(&input));
        let input = BodyFatInput::Male { height_cm: 180.0, neck_cm: 39.0, waist_cm: 90.0 };
        assert_eq!(body_fat(&input), body_fat(&input));
    }
}
