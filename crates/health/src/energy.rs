use crate::error::HealthError;
use core_types::Sex;
use serde::{Deserialize, Serialize};

const LB_TO_KG: f64 = 0.453592;
const IN_TO_CM: f64 = 2.54;

/// How active a person is day to day. Multiplies BMR into TDEE.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityLevel {
    /// Office job, little exercise.
    Sedentary,
    /// Light exercise 1-2 days a week.
    Light,
    /// Moderate exercise 3-5 days a week.
    Moderate,
    /// Heavy exercise 6-7 days a week.
    Heavy,
    /// Training twice a day.
    Athlete,
}

impl ActivityLevel {
    /// Standard TDEE activity multipliers.
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Heavy => 1.725,
            ActivityLevel::Athlete => 1.9,
        }
    }
}

/// Normalized (metric) body measurements used by the energy formulas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMetrics {
    pub sex: Sex,
    pub age_years: u32,
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl BodyMetrics {
    pub fn new(sex: Sex, age_years: u32, height_cm: f64, weight_kg: f64) -> Result<Self, HealthError> {
        if !(height_cm.is_finite() && weight_kg.is_finite()) || height_cm <= 0.0 || weight_kg <= 0.0 {
            return Err(HealthError::InvalidInput(
                "height and weight must be positive".to_string(),
            ));
        }
        if age_years == 0 || age_years > 120 {
            return Err(HealthError::InvalidInput(
                "age must be between 1 and 120".to_string(),
            ));
        }
        Ok(Self {
            sex,
            age_years,
            height_cm,
            weight_kg,
        })
    }

    /// Builds metrics from imperial units (height in inches, weight in pounds).
    pub fn from_imperial(
        sex: Sex,
        age_years: u32,
        height_in: f64,
        weight_lb: f64,
    ) -> Result<Self, HealthError> {
        Self::new(sex, age_years, height_in * IN_TO_CM, weight_lb * LB_TO_KG)
    }

    /// Basal metabolic rate via the Mifflin-St Jeor equation:
    /// `10w + 6.25h - 5a + 5` for males, `- 161` for females.
    pub fn bmr(&self) -> f64 {
        let base = 10.0 * self.weight_kg + 6.25 * self.height_cm - 5.0 * self.age_years as f64;
        match self.sex {
            Sex::Male => base + 5.0,
            Sex::Female => base - 161.0,
        }
    }

    /// Total daily energy expenditure: BMR scaled by the activity multiplier.
    pub fn tdee(&self, activity: ActivityLevel) -> f64 {
        self.bmr() * activity.multiplier()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn reference_male() -> BodyMetrics {
        BodyMetrics::new(Sex::Male, 30, 175.0, 75.0).unwrap()
    }

    #[test]
    fn mifflin_st_jeor_male() {
        // 10*75 + 6.25*175 - 5*30 + 5 = 1698.75
        assert!((reference_male().bmr() - 1698.75).abs() < 1e-9);
    }

    #[test]
    fn mifflin_st_jeor_female() {
        let metrics = BodyMetrics::new(Sex::Female, 30, 175.0, 75.0).unwrap();
        assert!((metrics.bmr() - 1532.75).abs() < 1e-9);
    }

    #[rstest]
    #[case(ActivityLevel::Sedentary, 2038.5)]
    #[case(ActivityLevel::Moderate, 2633.0625)]
    #[case(ActivityLevel::Athlete, 3227.625)]
    fn tdee_scales_with_activity(#[case] activity: ActivityLevel, #[case] expected: f64) {
        assert!((reference_male().tdee(activity) - expected).abs() < 1e-6);
    }

    #[test]
    fn imperial_conversion_matches_metric() {
        // 5'9" / 165 lb.
        let imperial = BodyMetrics::from_imperial(Sex::Male, 30, 69.0, 165.0).unwrap();
        assert!((imperial.height_cm - 175.26).abs() < 1e-9);
        assert!((imperial.weight_kg - 74.84268).abs() < 1e-6);
    }

    #[test]
    fn rejects_degenerate_measurements() {
        assert!(BodyMetrics::new(Sex::Male, 30, 0.0, 75.0).is_err());
        assert!(BodyMetrics::new(Sex::Male, 0, 175.0, 75.0).is_err());
    }
}
