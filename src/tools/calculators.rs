//! Calculator Tools
//!
//! Wraps the fitness engine in serialisable responses for the MCP surface.

use serde::Serialize;

use crate::fitness::{try_calculate, CalculatorForm};
use crate::models::{CalculationResult, CalculatorKind};

/// Response for every calculate_* tool
///
/// `computed: false` is the "not computed" outcome: the caller should show
/// no result, and `reason` says which input was rejected.
#[derive(Debug, Serialize)]
pub struct CalculatorResponse {
    pub calculator: &'static str,
    pub title: &'static str,
    pub computed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Calculator entry for listing
#[derive(Debug, Serialize)]
pub struct CalculatorSummary {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
}

impl From<CalculatorKind> for CalculatorSummary {
    fn from(kind: CalculatorKind) -> Self {
        Self {
            id: kind.as_str(),
            title: kind.title(),
            description: kind.description(),
            unit: kind.unit(),
        }
    }
}

/// Response for list_calculators
#[derive(Debug, Serialize)]
pub struct ListCalculatorsResponse {
    pub calculators: Vec<CalculatorSummary>,
    pub total: usize,
}

/// Run one calculator form
pub fn run_calculator<F: CalculatorForm>(form: &F) -> CalculatorResponse {
    let kind = F::KIND;
    match try_calculate(form) {
        Ok(result) => CalculatorResponse {
            calculator: kind.as_str(),
            title: kind.title(),
            computed: true,
            summary: Some(result.summary()),
            result: Some(result),
            reason: None,
        },
        Err(e) => CalculatorResponse {
            calculator: kind.as_str(),
            title: kind.title(),
            computed: false,
            result: None,
            summary: None,
            reason: Some(e.to_string()),
        },
    }
}

/// List all available calculators
pub fn list_calculators() -> ListCalculatorsResponse {
    let calculators: Vec<CalculatorSummary> = CalculatorKind::ALL
        .into_iter()
        .map(CalculatorSummary::from)
        .collect();
    let total = calculators.len();

    ListCalculatorsResponse { calculators, total }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fitness::{BmiForm, BodyFatForm, MacroForm, WaterForm};

    #[test]
    fn test_computed_response_json() {
        let form = MacroForm {
            calories: "2000".into(),
            goal: "cut".into(),
        };
        let response = run_calculator(&form);
        assert!(response.computed);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["calculator"], "macros");
        assert_eq!(json["result"]["calculator"], "macros");
        assert_eq!(json["result"]["protein_g"], 200.0);
        assert_eq!(json["result"]["carbs_g"], 150.0);
        assert_eq!(json["result"]["fat_g"], 67.0);
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_bmi_response_carries_label_and_indicator() {
        let form = BmiForm {
            weight: "95".into(),
            height: "175".into(),
        };
        let json = serde_json::to_value(run_calculator(&form)).unwrap();
        assert_eq!(json["result"]["bmi"], 31.0);
        assert_eq!(json["result"]["category"], "obese");
        assert_eq!(json["result"]["label"], "Obese");
        assert_eq!(json["result"]["indicator"], "red");
        assert_eq!(json["summary"], "31.0 (Obese)");
    }

    #[test]
    fn test_not_computed_response_json() {
        let form = WaterForm {
            weight: "0".into(),
            activity: "light".into(),
        };
        let response = run_calculator(&form);
        assert!(!response.computed);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["computed"], false);
        assert!(json.get("result").is_none());
        assert_eq!(
            json["reason"],
            "weight must be a finite number greater than zero"
        );
    }

    #[test]
    fn test_body_fat_invalid_measurements_reason() {
        let form = BodyFatForm {
            sex: "male".into(),
            height: "180".into(),
            neck: "40".into(),
            waist: "40".into(),
            hip: String::new(),
        };
        let response = run_calculator(&form);
        assert!(!response.computed);
        assert_eq!(
            response.reason.as_deref(),
            Some("measurements are outside the formula's valid range")
        );
    }

    #[test]
    fn test_list_calculators() {
        let response = list_calculators();
        assert_eq!(response.total, 8);
        assert_eq!(response.calculators[0].id, "bmi");
        assert_eq!(response.calculators[7].title, "One Rep Max");
    }
}
