use crate::energy::{ActivityLevel, BodyMetrics};
use crate::error::HealthError;
use serde::{Deserialize, Serialize};

/// Calories added to (or cut from) TDEE for a body-composition goal.
const GOAL_ADJUSTMENT_CAL: f64 = 500.0;

// Calories per gram of each macronutrient.
const CAL_PER_G_PROTEIN: f64 = 4.0;
const CAL_PER_G_CARBS: f64 = 4.0;
const CAL_PER_G_FAT: f64 = 9.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    Lose,
    Maintain,
    Gain,
}

impl Goal {
    fn calorie_adjustment(&self) -> f64 {
        match self {
            Goal::Lose => -GOAL_ADJUSTMENT_CAL,
            Goal::Maintain => 0.0,
            Goal::Gain => GOAL_ADJUSTMENT_CAL,
        }
    }
}

/// How daily calories are split across protein / carbs / fat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DietPlan {
    /// 30% protein, 40% carbs, 30% fat.
    Balanced,
    /// 40% protein, 20% carbs, 40% fat.
    LowCarb,
    /// 50% protein, 30% carbs, 20% fat.
    HighProtein,
    /// 25% protein, 5% carbs, 70% fat.
    Keto,
}

impl DietPlan {
    /// (protein, carbs, fat) calorie fractions. Always sums to 1.
    pub fn ratios(&self) -> (f64, f64, f64) {
        match self {
            DietPlan::Balanced => (0.30, 0.40, 0.30),
            DietPlan::LowCarb => (0.40, 0.20, 0.40),
            DietPlan::HighProtein => (0.50, 0.30, 0.20),
            DietPlan::Keto => (0.25, 0.05, 0.70),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSplit {
    /// Goal-adjusted daily calorie budget.
    pub calories: u32,
    pub protein_g: u32,
    pub carbs_g: u32,
    pub fats_g: u32,
}

/// Computes a daily macro split from body metrics, activity, goal, and diet.
///
/// TDEE is adjusted for the goal, then divided by the diet's calorie ratios
/// and converted to grams (4 cal/g protein and carbs, 9 cal/g fat).
pub fn split(
    metrics: &BodyMetrics,
    activity: ActivityLevel,
    goal: Goal,
    diet: DietPlan,
) -> Result<MacroSplit, HealthError> {
    let tdee = metrics.tdee(activity) + goal.calorie_adjustment();
    if tdee <= 0.0 {
        return Err(HealthError::InvalidInput(
            "goal adjustment leaves no calorie budget".to_string(),
        ));
    }

    tracing::debug!(tdee, ?goal, ?diet, "macro split computed");

    let (protein_ratio, carbs_ratio, fat_ratio) = diet.ratios();
    Ok(MacroSplit {
        calories: tdee.round() as u32,
        protein_g: (tdee * protein_ratio / CAL_PER_G_PROTEIN).round() as u32,
        carbs_g: (tdee * carbs_ratio / CAL_PER_G_CARBS).round() as u32,
        fats_g: (tdee * fat_ratio / CAL_PER_G_FAT).round() as u32,
    })
}
