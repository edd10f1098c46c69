//! Trainify MCP Server Implementation
//!
//! Exposes every fitness calculator as an MCP tool.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::fitness::{
    BmiForm, BmrForm, BodyFatForm, CalculatorForm, IdealWeightForm, MacroForm, OneRepMaxForm,
    TdeeForm, WaterForm,
};
use crate::tools::calculators;
use crate::tools::status::StatusTracker;

/// Trainify MCP Service
#[derive(Clone)]
pub struct TrainifyService {
    status_tracker: Arc<Mutex<StatusTracker>>,
    tool_router: ToolRouter<TrainifyService>,
}

impl TrainifyService {
    pub fn new() -> Self {
        Self {
            status_tracker: Arc::new(Mutex::new(StatusTracker::new())),
            tool_router: Self::tool_router(),
        }
    }

    /// Run a calculator, count it, and render the response as tool output
    async fn run<F: CalculatorForm>(&self, form: F) -> Result<CallToolResult, McpError> {
        let response = calculators::run_calculator(&form);
        self.status_tracker.lock().await.record(response.computed);
        to_tool_result(&response)
    }
}

impl Default for TrainifyService {
    fn default() -> Self {
        Self::new()
    }
}

fn to_tool_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Calculator Parameter Structs
// ============================================================================
//
// Every field is text as typed into a form; validation happens in the engine.

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmiParams {
    /// Body weight in kg
    pub weight: Option<String>,
    /// Height in cm
    pub height: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BmrParams {
    /// Body weight in kg
    pub weight: Option<String>,
    /// Height in cm
    pub height: Option<String>,
    /// Age in years
    pub age: Option<String>,
    /// Sex: male or female (defaults to male)
    pub sex: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct TdeeParams {
    /// Body weight in kg
    pub weight: Option<String>,
    /// Height in cm
    pub height: Option<String>,
    /// Age in years
    pub age: Option<String>,
    /// Sex: male or female (defaults to male)
    pub sex: Option<String>,
    /// Activity factor: 1.2, 1.375, 1.55, 1.725, 1.9 or sedentary, lightly_active,
    /// moderately_active, very_active, extra_active (defaults to 1.2)
    pub activity: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct MacroParams {
    /// Daily calories (kcal)
    pub calories: Option<String>,
    /// Goal: cut, maintain or bulk (anything else uses maintain)
    pub goal: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct BodyFatParams {
    /// Sex: male or female (defaults to male)
    pub sex: Option<String>,
    /// Height in cm
    pub height: Option<String>,
    /// Neck circumference in cm
    pub neck: Option<String>,
    /// Waist circumference in cm
    pub waist: Option<String>,
    /// Hip circumference in cm (required for women only)
    pub hip: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IdealWeightParams {
    /// Height in cm
    pub height: Option<String>,
    /// Sex: male or female (defaults to male)
    pub sex: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WaterParams {
    /// Body weight in kg
    pub weight: Option<String>,
    /// Activity: sedentary, light, moderate or intense (defaults to moderate)
    pub activity: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct OneRepMaxParams {
    /// Weight lifted in kg
    pub weight: Option<String>,
    /// Repetitions performed
    pub reps: Option<String>,
}

impl From<BmiParams> for BmiForm {
    fn from(p: BmiParams) -> Self {
        Self {
            weight: p.weight.unwrap_or_default(),
            height: p.height.unwrap_or_default(),
        }
    }
}

impl From<BmrParams> for BmrForm {
    fn from(p: BmrParams) -> Self {
        Self {
            weight: p.weight.unwrap_or_default(),
            height: p.height.unwrap_or_default(),
            age: p.age.unwrap_or_default(),
            sex: p.sex.unwrap_or_default(),
        }
    }
}

impl From<TdeeParams> for TdeeForm {
    fn from(p: TdeeParams) -> Self {
        Self {
            weight: p.weight.unwrap_or_default(),
            height: p.height.unwrap_or_default(),
            age: p.age.unwrap_or_default(),
            sex: p.sex.unwrap_or_default(),
            activity: p.activity.unwrap_or_default(),
        }
    }
}

impl From<MacroParams> for MacroForm {
    fn from(p: MacroParams) -> Self {
        Self {
            calories: p.calories.unwrap_or_default(),
            goal: p.goal.unwrap_or_default(),
        }
    }
}

impl From<BodyFatParams> for BodyFatForm {
    fn from(p: BodyFatParams) -> Self {
        Self {
            sex: p.sex.unwrap_or_default(),
            height: p.height.unwrap_or_default(),
            neck: p.neck.unwrap_or_default(),
            waist: p.waist.unwrap_or_default(),
            hip: p.hip.unwrap_or_default(),
        }
    }
}

impl From<IdealWeightParams> for IdealWeightForm {
    fn from(p: IdealWeightParams) -> Self {
        Self {
            height: p.height.unwrap_or_default(),
            sex: p.sex.unwrap_or_default(),
        }
    }
}

impl From<WaterParams> for WaterForm {
    fn from(p: WaterParams) -> Self {
        Self {
            weight: p.weight.unwrap_or_default(),
            activity: p.activity.unwrap_or_default(),
        }
    }
}

impl From<OneRepMaxParams> for OneRepMaxForm {
    fn from(p: OneRepMaxParams) -> Self {
        Self {
            weight: p.weight.unwrap_or_default(),
            reps: p.reps.unwrap_or_default(),
        }
    }
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl TrainifyService {
    // --- Status ---

    #[tool(description = "Get the current status of the Trainify service including build info, calculation counts, and process information")]
    async fn trainify_status(&self) -> Result<CallToolResult, McpError> {
        let tracker = self.status_tracker.lock().await;
        to_tool_result(&tracker.get_status())
    }

    #[tool(description = "Get instructions for using the fitness calculators: required fields, options, defaults and how to read results. Call this before the first calculation in a session.")]
    fn calculator_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::CALCULATOR_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(CALCULATOR_INSTRUCTIONS)]))
    }

    #[tool(description = "List the available fitness calculators with their titles, descriptions and units")]
    fn list_calculators(&self) -> Result<CallToolResult, McpError> {
        to_tool_result(&calculators::list_calculators())
    }

    // --- Calculators ---

    #[tool(description = "Calculate Body Mass Index from weight (kg) and height (cm), with its category (Underweight, Normal weight, Overweight, Obese)")]
    async fn calculate_bmi(&self, Parameters(p): Parameters<BmiParams>) -> Result<CallToolResult, McpError> {
        self.run(BmiForm::from(p)).await
    }

    #[tool(description = "Calculate Basal Metabolic Rate (kcal/day) with the Mifflin-St Jeor equation")]
    async fn calculate_bmr(&self, Parameters(p): Parameters<BmrParams>) -> Result<CallToolResult, McpError> {
        self.run(BmrForm::from(p)).await
    }

    #[tool(description = "Calculate Total Daily Energy Expenditure (kcal/day) as BMR times an activity factor, with weight-loss and weight-gain targets")]
    async fn calculate_tdee(&self, Parameters(p): Parameters<TdeeParams>) -> Result<CallToolResult, McpError> {
        self.run(TdeeForm::from(p)).await
    }

    #[tool(description = "Split daily calories into grams of protein, carbs and fat for a cut, maintain or bulk goal")]
    async fn calculate_macros(&self, Parameters(p): Parameters<MacroParams>) -> Result<CallToolResult, McpError> {
        self.run(MacroForm::from(p)).await
    }

    #[tool(description = "Estimate body fat percentage with the U.S. Navy circumference method (hip needed for women)")]
    async fn calculate_body_fat(&self, Parameters(p): Parameters<BodyFatParams>) -> Result<CallToolResult, McpError> {
        self.run(BodyFatForm::from(p)).await
    }

    #[tool(description = "Calculate ideal body weight (kg) by the Robinson, Miller, Devine and Hamwi formulas")]
    async fn calculate_ideal_weight(&self, Parameters(p): Parameters<IdealWeightParams>) -> Result<CallToolResult, McpError> {
        self.run(IdealWeightForm::from(p)).await
    }

    #[tool(description = "Calculate daily water intake (litres and 250 ml glasses) from body weight and activity level")]
    async fn calculate_water_intake(&self, Parameters(p): Parameters<WaterParams>) -> Result<CallToolResult, McpError> {
        self.run(WaterForm::from(p)).await
    }

    #[tool(description = "Estimate one-rep max (kg) from a weight lifted for a number of reps using the Epley formula")]
    async fn calculate_one_rep_max(&self, Parameters(p): Parameters<OneRepMaxParams>) -> Result<CallToolResult, McpError> {
        self.run(OneRepMaxForm::from(p)).await
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for TrainifyService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "trainify".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Trainify Fitness Calculators".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Trainify - fitness calculators. \
                 IMPORTANT: Call calculator_instructions before the first calculation. \
                 Calculators: calculate_bmi, calculate_bmr, calculate_tdee, calculate_macros, \
                 calculate_body_fat, calculate_ideal_weight, calculate_water_intake, calculate_one_rep_max. \
                 All inputs are metric text fields; a result with computed=false means an input was rejected. \
                 Catalog: list_calculators. Status: trainify_status."
                    .into(),
            ),
        }
    }
}
