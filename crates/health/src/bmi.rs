use crate::error::HealthError;
use serde::{Deserialize, Serialize};

/// WHO BMI classification bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Band boundaries: <18.5, <25, <30, otherwise obese.
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiReading {
    pub bmi: f64,
    pub category: BmiCategory,
}

/// BMI from metric measurements: `kg / m^2`.
pub fn from_metric(height_cm: f64, weight_kg: f64) -> Result<BmiReading, HealthError> {
    if !(height_cm.is_finite() && weight_kg.is_finite()) || height_cm <= 0.0 || weight_kg <= 0.0 {
        return Err(HealthError::InvalidInput(
            "height and weight must be positive".to_string(),
        ));
    }
    let meters = height_cm / 100.0;
    let bmi = weight_kg / (meters * meters);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::classify(bmi),
    })
}

/// BMI from imperial measurements: `703 * lb / in^2`.
pub fn from_imperial(feet: f64, inches: f64, weight_lb: f64) -> Result<BmiReading, HealthError> {
    let total_inches = feet * 12.0 + inches;
    if !(total_inches.is_finite() && weight_lb.is_finite())
        || total_inches <= 0.0
        || weight_lb <= 0.0
        || inches < 0.0
    {
        return Err(HealthError::InvalidInput(
            "height and weight must be positive".to_string(),
        ));
    }
    let bmi = 703.0 * weight_lb / (total_inches * total_inches);
    Ok(BmiReading {
        bmi,
        category: BmiCategory::classify(bmi),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn metric_reading() {
        let reading = from_metric(180.0, 75.0).unwrap();
        assert!((reading.bmi - 23.1).abs() < 0.05);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[test]
    fn imperial_reading() {
        let reading = from_imperial(5.0, 10.0, 170.0).unwrap();
        assert!((reading.bmi - 24.4).abs() < 0.05);
        assert_eq!(reading.category, BmiCategory::Normal);
    }

    #[rstest]
    #[case(17.0, BmiCategory::Underweight)]
    #[case(18.5, BmiCategory::Normal)]
    #[case(24.9, BmiCategory::Normal)]
    #[case(25.0, BmiCategory::Overweight)]
    #[case(29.9, BmiCategory::Overweight)]
    #[case(30.0, BmiCategory::Obese)]
    fn classification_bands(#[case] bmi: f64, #[case] expected: BmiCategory) {
        assert_eq!(BmiCategory::classify(bmi), expected);
    }

    #[test]
    fn rejects_zero_height() {
        assert!(from_metric(0.0, 75.0).is_err());
        assert!(from_imperial(0.0, 0.0, 170.0).is_err());
    }
}
