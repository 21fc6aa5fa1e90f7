//! # SmartCalc Health Library
//!
//! Closed-form health and fitness calculators: BMI classification, basal
//! metabolic rate and TDEE via Mifflin-St Jeor, daily macro splits, and
//! one-rep-max estimation (Epley/Brzycki). Everything here is a direct
//! formula evaluation over `f64`: no iteration, no state.

// Declare all the modules that constitute this crate.
pub mod bmi;
pub mod energy;
pub mod error;
pub mod macros;
pub mod one_rep_max;

// Re-export the key components to create a clean, public-facing API.
pub use bmi::{BmiCategory, BmiReading};
pub use energy::{ActivityLevel, BodyMetrics};
pub use error::HealthError;
pub use macros::{DietPlan, Goal, MacroSplit};
pub use one_rep_max::{OneRmEstimate, OneRmFormula, TrainingSet};

// Re-export the shared measurement enums.
pub use core_types::{Sex, UnitSystem};
