//! Fitness calculation module
//!
//! Input validation, the eight fitness formulas and their classification
//! lookups. Pure functions only: no I/O and no shared state.

pub mod classification;
pub mod forms;
pub mod formulas;
pub mod validation;

pub use classification::classify_bmi;
pub use forms::{
    calculate, try_calculate, BmiForm, BmrForm, BodyFatForm, CalculatorForm, IdealWeightForm,
    MacroForm, OneRepMaxForm, TdeeForm, WaterForm,
};
pub use formulas::{
    body_fat, bmi, bmr, ideal_weight, macros, mifflin_st_jeor, one_rep_max, round_to, tdee,
    water_intake,
};
pub use validation::{parse_positive, InputError, InputResult};
