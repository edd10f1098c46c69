//! Calculator forms
//!
//! Raw text as a user typed it, one form per calculator. A form parses into
//! its typed input and is then handed to the matching formula. `calculate`
//! is the front door: it never fails loudly, it either yields a result or
//! nothing. Rejections are logged once, at debug level, in `try_calculate`.

use crate::models::{
    BmiInput, BmrInput, BodyFatInput, CalculationResult, CalculatorKind, IdealWeightInput,
    MacroInput, OneRepMaxInput, Sex, TdeeInput, WaterInput,
};

use super::formulas;
use super::validation::{
    parse_activity_factor, parse_macro_goal, parse_positive, parse_sex, parse_water_activity,
    InputError, InputResult,
};

/// A raw form that can be parsed and computed
pub trait CalculatorForm {
    type Input;

    const KIND: CalculatorKind;

    /// Validate every required field
    fn parse(&self) -> InputResult<Self::Input>;

    /// Run the formula on validated input
    fn compute(input: &Self::Input) -> Option<CalculationResult>;
}

/// Parse and compute, reporting why nothing was computed
pub fn try_calculate<F: CalculatorForm>(form: &F) -> InputResult<CalculationResult> {
    let outcome = form
        .parse()
        .and_then(|input| F::compute(&input).ok_or(InputError::InvalidMeasurements));

    if let Err(e) = &outcome {
        tracing::debug!(calculator = F::KIND.as_str(), reason = %e, "calculation not computed");
    }
    outcome
}

/// Parse and compute; `None` means "not computed"
pub fn calculate<F: CalculatorForm>(form: &F) -> Option<CalculationResult> {
    try_calculate(form).ok()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BmiForm {
    pub weight: String,
    pub height: String,
}

impl CalculatorForm for BmiForm {
    type Input = BmiInput;

    const KIND: CalculatorKind = CalculatorKind::Bmi;

    fn parse(&self) -> InputResult<BmiInput> {
        Ok(BmiInput {
            weight_kg: parse_positive("weight", &self.weight)?,
            height_cm: parse_positive("height", &self.height)?,
        })
    }

    fn compute(input: &BmiInput) -> Option<CalculationResult> {
        formulas::bmi(input).map(CalculationResult::Bmi)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BmrForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub sex: String,
}

impl CalculatorForm for BmrForm {
    type Input = BmrInput;

    const KIND: CalculatorKind = CalculatorKind::Bmr;

    fn parse(&self) -> InputResult<BmrInput> {
        Ok(BmrInput {
            weight_kg: parse_positive("weight", &self.weight)?,
            height_cm: parse_positive("height", &self.height)?,
            age_years: parse_positive("age", &self.age)?,
            sex: parse_sex(&self.sex)?,
        })
    }

    fn compute(input: &BmrInput) -> Option<CalculationResult> {
        formulas::bmr(input).map(CalculationResult::Bmr)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TdeeForm {
    pub weight: String,
    pub height: String,
    pub age: String,
    pub sex: String,
    /// Level name or factor ("1.2" ... "1.9")
    pub activity: String,
}

impl CalculatorForm for TdeeForm {
    type Input = TdeeInput;

    const KIND: CalculatorKind = CalculatorKind::Tdee;

    fn parse(&self) -> InputResult<TdeeInput> {
        let body = BmrForm {
            weight: self.weight.clone(),
            height: self.height.clone(),
            age: self.age.clone(),
            sex: self.sex.clone(),
        }
        .parse()?;

        Ok(TdeeInput {
            body,
            activity: parse_activity_factor(&self.activity)?,
        })
    }

    fn compute(input: &TdeeInput) -> Option<CalculationResult> {
        formulas::tdee(input).map(CalculationResult::Tdee)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MacroForm {
    pub calories: String,
    pub goal: String,
}

impl CalculatorForm for MacroForm {
    type Input = MacroInput;

    const KIND: CalculatorKind = CalculatorKind::Macros;

    fn parse(&self) -> InputResult<MacroInput> {
        Ok(MacroInput {
            calories: parse_positive("calories", &self.calories)?,
            goal: parse_macro_goal(&self.goal),
        })
    }

    fn compute(input: &MacroInput) -> Option<CalculationResult> {
        formulas::macros(input).map(CalculationResult::Macros)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BodyFatForm {
    pub sex: String,
    pub height: String,
    pub neck: String,
    pub waist: String,
    /// Only read for women
    pub hip: String,
}

impl CalculatorForm for BodyFatForm {
    type Input = BodyFatInput;

    const KIND: CalculatorKind = CalculatorKind::BodyFat;

    fn parse(&self) -> InputResult<BodyFatInput> {
        let sex = parse_sex(&self.sex)?;
        let height_cm = parse_positive("height", &self.height)?;
        let neck_cm = parse_positive("neck", &self.neck)?;
        let waist_cm = parse_positive("waist", &self.waist)?;

        Ok(match sex {
            Sex::Male => BodyFatInput::Male { height_cm, neck_cm, waist_cm },
            Sex::Female => BodyFatInput::Female {
                height_cm,
                neck_cm,
                waist_cm,
                hip_cm: parse_positive("hip", &self.hip)?,
            },
        })
    }

    fn compute(input: &BodyFatInput) -> Option<CalculationResult> {
        formulas::body_fat(input).map(CalculationResult::BodyFat)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdealWeightForm {
    pub height: String,
    pub sex: String,
}

impl CalculatorForm for IdealWeightForm {
    type Input = IdealWeightInput;

    const KIND: CalculatorKind = CalculatorKind::IdealWeight;

    fn parse(&self) -> InputResult<IdealWeightInput> {
        Ok(IdealWeightInput {
            height_cm: parse_positive("height", &self.height)?,
            sex: parse_sex(&self.sex)?,
        })
    }

    fn compute(input: &IdealWeightInput) -> Option<CalculationResult> {
        formulas::ideal_weight(input).map(CalculationResult::IdealWeight)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaterForm {
    pub weight: String,
    pub activity: String,
}

impl CalculatorForm for WaterForm {
    type Input = WaterInput;

    const KIND: CalculatorKind = CalculatorKind::Water;

    fn parse(&self) -> InputResult<WaterInput> {
        Ok(WaterInput {
            weight_kg: parse_positive("weight", &self.weight)?,
            activity: parse_water_activity(&self.activity),
        })
    }

    fn compute(input: &WaterInput) -> Option<CalculationResult> {
        formulas::water_intake(input).map(CalculationResult::Water)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OneRepMaxForm {
    pub weight: String,
    pub reps: String,
}

impl CalculatorForm for OneRepMaxForm {
    type Input = OneRepMaxInput;

    const KIND: CalculatorKind = CalculatorKind::OneRepMax;

    fn parse(&self) -> InputResult<OneRepMaxInput> {
        Ok(OneRepMaxInput {
            weight_kg: parse_positive("weight", &self.weight)?,
            reps: parse_positive("reps", &self.reps)?,
        })
    }

    fn compute(input: &OneRepMaxInput) -> Option<CalculationResult> {
        formulas::one_rep_max(input).map(CalculationResult::OneRepMax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BmiCategory, MacroGoal, WaterActivity};

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn test_bmi_form() {
        let form = BmiForm { weight: s("70"), height: s("175") };
        match calculate(&form) {
            Some(CalculationResult::Bmi(r)) => {
                assert_eq!(r.bmi, 22.9);
                assert_eq!(r.category, BmiCategory::Normal);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_weight_is_not_computed() {
        for weight in ["0", "", "abc", "-70", "NaN"] {
            let form = BmiForm { weight: s(weight), height: s("175") };
            assert_eq!(calculate(&form), None, "weight {weight:?}");
        }
        let form = OneRepMaxForm { weight: s("0"), reps: s("5") };
        assert_eq!(calculate(&form), None);
        let form = WaterForm { weight: s("heavy"), activity: s("light") };
        assert_eq!(calculate(&form), None);
    }

    #[test]
    fn test_try_calculate_reports_first_bad_field() {
        let form = BmrForm { weight: s("70"), height: s(""), age: s("0"), sex: s("male") };
        assert_eq!(try_calculate(&form), Err(InputError::Missing { field: "height" }));
    }

    #[test]
    fn test_bmr_form_default_sex_is_male() {
        let form = BmrForm { weight: s("70"), height: s("175"), age: s("25"), sex: s("") };
        match calculate(&form) {
            Some(CalculationResult::Bmr(r)) => {
                assert_eq!(r.sex, Sex::Male);
                assert_eq!(r.calories, 1674.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_bmr_form_unknown_sex_is_rejected() {
        let form = BmrForm { weight: s("70"), height: s("175"), age: s("25"), sex: s("robot") };
        assert!(matches!(
            try_calculate(&form),
            Err(InputError::UnknownOption { field: "sex", .. })
        ));
    }

    #[test]
    fn test_tdee_form_with_numeric_activity() {
        let form = TdeeForm {
            weight: s("70"),
            height: s("175"),
            age: s("25"),
            sex: s("male"),
            activity: s("1.2"),
        };
        match calculate(&form) {
            Some(CalculationResult::Tdee(r)) => assert_eq!(r.calories, 2009.0),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_macro_form_unknown_goal_uses_maintain() {
        let form = MacroForm { calories: s("2000"), goal: s("shred") };
        match calculate(&form) {
            Some(CalculationResult::Macros(r)) => {
                assert_eq!(r.goal, MacroGoal::Maintain);
                assert_eq!(r.protein_g, 150.0);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_body_fat_male_ignores_hip() {
        let form = BodyFatForm {
            sex: s("male"),
            height: s("178"),
            neck: s("38"),
            waist: s("85"),
            hip: s("not a number"),
        };
        assert!(calculate(&form).is_some());
    }

    #[test]
    fn test_body_fat_female_requires_hip() {
        let form = BodyFatForm {
            sex: s("female"),
            height: s("165"),
            neck: s("34"),
            waist: s("75"),
            hip: s(""),
        };
        assert_eq!(try_calculate(&form), Err(InputError::Missing { field: "hip" }));
    }

    #[test]
    fn test_body_fat_waist_below_neck_is_invalid_measurements() {
        let form = BodyFatForm {
            sex: s("male"),
            height: s("178"),
            neck: s("40"),
            waist: s("35"),
            hip: s(""),
        };
        assert_eq!(try_calculate(&form), Err(InputError::InvalidMeasurements));
        assert_eq!(calculate(&form), None);
    }

    #[test]
    fn test_water_form_defaults_to_moderate() {
        let form = WaterForm { weight: s("70"), activity: s("") };
        match calculate(&form) {
            Some(CalculationResult::Water(r)) => {
                assert_eq!(r.activity, WaterActivity::Moderate);
                assert_eq!(r.liters, 2.8);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_ideal_weight_form() {
        let form = IdealWeightForm { height: s("175"), sex: s("male") };
        match calculate(&form) {
            Some(CalculationResult::IdealWeight(r)) => assert_eq!(r.robinson, 68.9),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_one_rep_max_form() {
        let form = OneRepMaxForm { weight: s("100"), reps: s("5") };
        assert_eq!(
            calculate(&form).map(|r| r.summary()),
            Some("117 kg".to_string())
        );
    }

    fn bmi() -> BmiForm {
        BmiForm { weight: s("70"), height: s("175") }
    }

    fn bmr() -> BmrForm {
        BmrForm { weight: s("70"), height: s("175"), age: s("25"), sex: s("male") }
    }

    fn tdee() -> TdeeForm {
        TdeeForm {
            weight: s("82.5"),
            height: s("181"),
            age: s("41"),
            sex: s("female"),
            activity: s("very_active"),
        }
    }

    fn macros() -> MacroForm {
        MacroForm { calories: s("2000"), goal: s("cut") }
    }

    fn body_fat() -> BodyFatForm {
        BodyFatForm {
            sex: s("female"),
            height: s("165"),
            neck: s("34"),
            waist: s("75"),
            hip: s("98"),
        }
    }

    fn ideal_weight() -> IdealWeightForm {
        IdealWeightForm { height: s("175"), sex: s("female") }
    }

    fn water() -> WaterForm {
        WaterForm { weight: s("70"), activity: s("intense") }
    }

    fn one_rep_max() -> OneRepMaxForm {
        OneRepMaxForm { weight: s("100"), reps: s("5") }
    }

    fn all_valid() -> Vec<Option<CalculationResult>> {
        vec![
            calculate(&bmi()),
            calculate(&bmr()),
            calculate(&tdee()),
            calculate(&macros()),
            calculate(&body_fat()),
            calculate(&ideal_weight()),
            calculate(&water()),
            calculate(&one_rep_max()),
        ]
    }

    #[test]
    fn test_zero_or_non_numeric_required_field_is_not_computed() {
        for bad in ["0", "abc"] {
            let cases = [
                ("bmi weight", calculate(&BmiForm { weight: s(bad), ..bmi() })),
                ("bmi height", calculate(&BmiForm { height: s(bad), ..bmi() })),
                ("bmr weight", calculate(&BmrForm { weight: s(bad), ..bmr() })),
                ("bmr height", calculate(&BmrForm { height: s(bad), ..bmr() })),
                ("bmr age", calculate(&BmrForm { age: s(bad), ..bmr() })),
                ("tdee weight", calculate(&TdeeForm { weight: s(bad), ..tdee() })),
                ("tdee height", calculate(&TdeeForm { height: s(bad), ..tdee() })),
                ("tdee age", calculate(&TdeeForm { age: s(bad), ..tdee() })),
                ("macros calories", calculate(&MacroForm { calories: s(bad), ..macros() })),
                ("body fat height", calculate(&BodyFatForm { height: s(bad), ..body_fat() })),
                ("body fat neck", calculate(&BodyFatForm { neck: s(bad), ..body_fat() })),
                ("body fat waist", calculate(&BodyFatForm { waist: s(bad), ..body_fat() })),
                ("body fat hip", calculate(&BodyFatForm { hip: s(bad), ..body_fat() })),
                (
                    "ideal weight height",
                    calculate(&IdealWeightForm { height: s(bad), ..ideal_weight() }),
                ),
                ("water weight", calculate(&WaterForm { weight: s(bad), ..water() })),
                ("1rm weight", calculate(&OneRepMaxForm { weight: s(bad), ..one_rep_max() })),
                ("1rm reps", calculate(&OneRepMaxForm { reps: s(bad), ..one_rep_max() })),
            ];
            for (field, result) in cases {
                assert_eq!(result, None, "{field} = {bad:?}");
            }
        }
    }

    #[test]
    fn test_same_forms_twice_give_same_results() {
        let first = all_valid();
        assert!(first.iter().all(Option::is_some), "{first:?}");
        assert_eq!(first, all_valid());
    }
}
