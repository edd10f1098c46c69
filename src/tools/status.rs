//! Trainify Status Tool
//!
//! Runtime status of the service, plus the usage guide handed to assistants.

use serde::Serialize;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;
use crate::models::CalculatorKind;

/// Calculator usage instructions for AI assistants
pub const CALCULATOR_INSTRUCTIONS: &str = r#"
# Trainify Calculator Instructions

Every calculator takes its inputs as text, exactly as a user would type them
into a form. Units are metric: kilograms, centimetres, years.

## Results

Each calculate_* tool returns JSON with a `computed` flag.

- `computed: true` - `result` holds the figures, `summary` a one-line reading.
- `computed: false` - no result. `reason` names the field that was rejected.
  Do not invent a value; ask the user for the missing or corrected input.

A field is rejected when it is missing, not a number, zero, negative or not
finite.

## Calculators

| Tool | Required | Optional (default) |
|------|----------|--------------------|
| calculate_bmi | weight, height | |
| calculate_bmr | weight, height, age | sex (male) |
| calculate_tdee | weight, height, age | sex (male), activity (1.2) |
| calculate_macros | calories | goal (maintain) |
| calculate_body_fat | height, neck, waist; hip for women | sex (male) |
| calculate_ideal_weight | height | sex (male) |
| calculate_water_intake | weight | activity (moderate) |
| calculate_one_rep_max | weight, reps | |

### Options

- **sex**: male, female
- **TDEE activity**: 1.2 sedentary, 1.375 lightly active, 1.55 moderately
  active, 1.725 very active, 1.9 extra active (names or numbers)
- **macro goal**: cut (40/30/30), maintain (30/40/30), bulk (30/50/20) as
  protein/carbs/fat. Any other goal uses maintain.
- **water activity**: sedentary (no adjustment), light (x1.1),
  moderate (x1.2), intense (x1.4)

## Notes

- BMI bands: below 18.5 underweight, below 25 normal, below 30 overweight,
  otherwise obese. Exactly 25.0 is overweight.
- Body fat uses the U.S. Navy method. Waist must exceed neck (for women,
  waist + hip must exceed neck) or nothing is computed.
- TDEE also reports weight-loss (-500 kcal) and weight-gain (+500 kcal)
  targets.
- One rep max uses the Epley formula and is most reliable under 10 reps.
"#;

/// Runtime status of the Trainify service
#[derive(Debug, Clone, Serialize)]
pub struct TrainifyStatus {
    /// Build information
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,

    /// Calculator usage
    pub calculators_available: usize,
    pub calculations_computed: u64,
    pub calculations_rejected: u64,

    /// Process information
    pub started_at: String,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Status tracker for collecting runtime information
pub struct StatusTracker {
    start_time: Instant,
    started_at: String,
    computed: u64,
    rejected: u64,
}

impl StatusTracker {
    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            started_at: chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            computed: 0,
            rejected: 0,
        }
    }

    /// Count one calculator call
    pub fn record(&mut self, computed: bool) {
        if computed {
            self.computed += 1;
        } else {
            self.rejected += 1;
        }
    }

    pub fn get_status(&self) -> TrainifyStatus {
        let build_info = BuildInfo::current();

        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        TrainifyStatus {
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            calculators_available: CalculatorKind::ALL.len(),
            calculations_computed: self.computed,
            calculations_rejected: self.rejected,
            started_at: self.started_at.clone(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

impl Default for StatusTracker {
    fn default() -> Self {
        Self::new()
    }
}
