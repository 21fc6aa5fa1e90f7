use crate::error::HealthError;
use serde::{Deserialize, Serialize};

/// Which estimation formula to use for the one-rep max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OneRmFormula {
    /// `w * (1 + r/30)`.
    Epley,
    /// `w / (1.0278 - 0.0278r)`. Undefined above ~36 reps.
    Brzycki,
}

/// A row of the training percentage table: lift this much for that many reps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    pub percent: u32,
    pub weight: f64,
    pub reps: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneRmEstimate {
    /// Estimated one-rep max, rounded to the nearest unit of weight.
    pub one_rep_max: f64,
    pub training_table: Vec<TrainingSet>,
}

// Standard rep estimates for each training percentage of the 1RM.
const TRAINING_PERCENTAGES: [(u32, u32); 10] = [
    (95, 2),
    (90, 4),
    (85, 6),
    (80, 8),
    (75, 10),
    (70, 12),
    (65, 15),
    (60, 20),
    (55, 24),
    (50, 30),
];

/// Estimates the one-rep max from a submaximal set.
///
/// A single-rep set *is* the max. The Brzycki denominator crosses zero just
/// short of 37 reps; rep counts that high are rejected for both formulas
/// since the estimates are meaningless there anyway.
pub fn estimate(
    weight: f64,
    reps: u32,
    formula: OneRmFormula,
) -> Result<OneRmEstimate, HealthError> {
    if !weight.is_finite() || weight <= 0.0 {
        return Err(HealthError::InvalidInput(
            "lifted weight must be positive".to_string(),
        ));
    }
    if reps == 0 || reps > 30 {
        return Err(HealthError::InvalidInput(
            "rep count must be between 1 and 30".to_string(),
        ));
    }

    let raw = if reps == 1 {
        weight
    } else {
        match formula {
            OneRmFormula::Epley => weight * (1.0 + reps as f64 / 30.0),
            OneRmFormula::Brzycki => weight / (1.0278 - 0.0278 * reps as f64),
        }
    };
    let one_rep_max = raw.round();
    tracing::debug!(weight, reps, ?formula, one_rep_max, "one-rep max estimated");

    let training_table = TRAINING_PERCENTAGES
        .iter()
        .map(|&(percent, reps)| TrainingSet {
            percent,
            weight: (one_rep_max * percent as f64 / 100.0).round(),
            reps,
        })
        .collect();

    Ok(OneRmEstimate {
        one_rep_max,
        training_table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(OneRmFormula::Epley, 100.0, 5, 117.0)]
    #[case(OneRmFormula::Brzycki, 100.0, 5, 113.0)]
    #[case(OneRmFormula::Epley, 225.0, 5, 263.0)]
    fn estimates_match_fixtures(
        #[case] formula: OneRmFormula,
        #[case] weight: f64,
        #[case] reps: u32,
        #[case] expected: f64,
    ) {
        let estimate = estimate(weight, reps, formula).unwrap();
        assert_eq!(estimate.one_rep_max, expected);
    }

    #[test]
    fn single_rep_is_the_max_itself() {
        for formula in [OneRmFormula::Epley, OneRmFormula::Brzycki] {
            assert_eq!(estimate(140.0, 1, formula).unwrap().one_rep_max, 140.0);
        }
    }

    #[test]
    fn training_table_spans_95_down_to_50() {
        let table = estimate(100.0, 5, OneRmFormula::Epley).unwrap().training_table;
        assert_eq!(table.len(), 10);
        assert_eq!(table[0].percent, 95);
        assert_eq!(table[0].weight, 111.0); // 117 * 0.95 = 111.15
        assert_eq!(table[9].percent, 50);
        assert_eq!(table[9].weight, 59.0); // 117 * 0.50 = 58.5
    }

    #[test]
    fn rejects_out_of_range_reps() {
        assert!(estimate(100.0, 0, OneRmFormula::Epley).is_err());
        assert!(estimate(100.0, 31, OneRmFormula::Brzycki).is_err());
    }
}
