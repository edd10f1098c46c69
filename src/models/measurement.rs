//! Measurement option types
//!
//! Closed sets of choices a calculator form offers alongside its numeric fields:
//! sex, activity factor, macro goal and water activity level.

use serde::{Deserialize, Serialize};

/// Biological sex, selects the formula branch for sex-dependent calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    #[default]
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Some(Sex::Male),
            "female" | "f" => Some(Sex::Female),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Sex::Male => "Male",
            Sex::Female => "Female",
        }
    }
}

/// Activity multiplier applied to BMR for TDEE
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityFactor {
    /// Little or no exercise
    #[default]
    Sedentary,
    /// Light exercise 1-3 days/week
    LightlyActive,
    /// Moderate exercise 3-5 days/week
    ModeratelyActive,
    /// Hard exercise 6-7 days/week
    VeryActive,
    /// Very hard exercise and a physical job
    ExtraActive,
}

impl ActivityFactor {
    pub const ALL: [ActivityFactor; 5] = [
        ActivityFactor::Sedentary,
        ActivityFactor::LightlyActive,
        ActivityFactor::ModeratelyActive,
        ActivityFactor::VeryActive,
        ActivityFactor::ExtraActive,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            ActivityFactor::Sedentary => 1.2,
            ActivityFactor::LightlyActive => 1.375,
            ActivityFactor::ModeratelyActive => 1.55,
            ActivityFactor::VeryActive => 1.725,
            ActivityFactor::ExtraActive => 1.9,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityFactor::Sedentary => "sedentary",
            ActivityFactor::LightlyActive => "lightly_active",
            ActivityFactor::ModeratelyActive => "moderately_active",
            ActivityFactor::VeryActive => "very_active",
            ActivityFactor::ExtraActive => "extra_active",
        }
    }

    /// Parse a level name or one of the numeric factors a form submits ("1.2", "1.55", ...)
    pub fn from_str(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "sedentary" => return Some(ActivityFactor::Sedentary),
            "light" | "lightly_active" => return Some(ActivityFactor::LightlyActive),
            "moderate" | "moderately_active" => return Some(ActivityFactor::ModeratelyActive),
            "very" | "very_active" => return Some(ActivityFactor::VeryActive),
            "extra" | "extra_active" => return Some(ActivityFactor::ExtraActive),
            _ => {}
        }

        let value: f64 = normalized.parse().ok()?;
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - value).abs() < 1e-9)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityFactor::Sedentary => "Sedentary (little or no exercise)",
            ActivityFactor::LightlyActive => "Lightly active (light exercise 1-3 days/week)",
            ActivityFactor::ModeratelyActive => {
                "Moderately active (moderate exercise 3-5 days/week)"
            }
            ActivityFactor::VeryActive => "Very active (hard exercise 6-7 days/week)",
            ActivityFactor::ExtraActive => "Extra active (very hard exercise & physical job)",
        }
    }
}

/// Percentage split of daily calories across macronutrients
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// Dietary goal driving the macro split
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroGoal {
    /// Weight loss
    Cut,
    #[default]
    Maintain,
    /// Weight gain
    Bulk,
}

impl MacroGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            MacroGoal::Cut => "cut",
            MacroGoal::Maintain => "maintain",
            MacroGoal::Bulk => "bulk",
        }
    }

    /// Unknown goals resolve to `Maintain`
    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "cut" => MacroGoal::Cut,
            "bulk" => MacroGoal::Bulk,
            _ => MacroGoal::Maintain,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MacroGoal::Cut => "Cut (Weight Loss)",
            MacroGoal::Maintain => "Maintain Weight",
            MacroGoal::Bulk => "Bulk (Weight Gain)",
        }
    }

    pub fn split(&self) -> MacroSplit {
        match self {
            MacroGoal::Cut => MacroSplit { protein: 0.4, carbs: 0.3, fat: 0.3 },
            MacroGoal::Maintain => MacroSplit { protein: 0.3, carbs: 0.4, fat: 0.3 },
            MacroGoal::Bulk => MacroSplit { protein: 0.3, carbs: 0.5, fat: 0.2 },
        }
    }
}

/// Activity level for daily water intake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaterActivity {
    Sedentary,
    Light,
    #[default]
    Moderate,
    Intense,
}

impl WaterActivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaterActivity::Sedentary => "sedentary",
            WaterActivity::Light => "light",
            WaterActivity::Moderate => "moderate",
            WaterActivity::Intense => "intense",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sedentary" => Some(WaterActivity::Sedentary),
            "light" => Some(WaterActivity::Light),
            "moderate" => Some(WaterActivity::Moderate),
            "intense" => Some(WaterActivity::Intense),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            WaterActivity::Sedentary => "Sedentary",
            WaterActivity::Light => "Light Activity",
            WaterActivity::Moderate => "Moderate Activity",
            WaterActivity::Intense => "Intense Activity",
        }
    }

    /// Multiplier on the weight-based baseline; sedentary leaves the baseline as is
    pub fn multiplier(&self) -> Option<f64> {
        match self {
            WaterActivity::Sedentary => None,
            WaterActivity::Light => Some(1.1),
            WaterActivity::Moderate => Some(1.2),
            WaterActivity::Intense => Some(1.4),
        }
    }
}
