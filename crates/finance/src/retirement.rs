use crate::error::FinanceError;
use core_types::UserProfile;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a retirement savings projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    /// Expected annual return as a percentage.
    pub annual_return_pct: Decimal,
}

impl RetirementInputs {
    /// Seeds the projection from the stored user profile.
    pub fn from_profile(profile: &UserProfile, annual_return_pct: Decimal) -> Self {
        Self {
            current_age: profile.age,
            retirement_age: profile.retirement_age,
            current_savings: profile.current_savings,
            monthly_contribution: profile.monthly_contribution,
            annual_return_pct,
        }
    }
}

/// One yearly point of the savings projection, keyed by the saver's age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsPoint {
    pub age: u32,
    pub savings: Decimal,
    pub contributions: Decimal,
    pub interest: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementOutcome {
    pub total_at_retirement: Decimal,
    pub total_contributions: Decimal,
    pub total_interest: Decimal,
    pub series: Vec<SavingsPoint>,
}

/// Projects savings growth from the current age to the retirement age.
///
/// Interest accrues on the running balance each month, then the contribution
/// lands: `balance += balance * r + monthly`.
pub fn project(inputs: &RetirementInputs) -> Result<RetirementOutcome, FinanceError> {
    if inputs.retirement_age <= inputs.current_age {
        return Err(FinanceError::InvalidInput(
            "retirement age must be greater than the current age".to_string(),
        ));
    }
    if inputs.current_savings < Decimal::ZERO || inputs.monthly_contribution < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "amounts must not be negative".to_string(),
        ));
    }
    if inputs.annual_return_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "return rate must not be negative".to_string(),
        ));
    }

    let years = inputs.retirement_age - inputs.current_age;
    let monthly_rate = inputs.annual_return_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);

    let mut balance = inputs.current_savings;
    let mut contributions = inputs.current_savings;

    let mut series = Vec::with_capacity(years as usize + 1);
    series.push(SavingsPoint {
        age: inputs.current_age,
        savings: balance,
        contributions,
        interest: Decimal::ZERO,
    });

    for month in 1..=(years * 12) {
        let interest = balance * monthly_rate;
        balance += interest + inputs.monthly_contribution;
        contributions += inputs.monthly_contribution;

        if month % 12 == 0 {
            series.push(SavingsPoint {
                age: inputs.current_age + month / 12,
                savings: balance,
                contributions,
                interest: balance - contributions,
            });
        }
    }

    tracing::debug!(%balance, years, "retirement projection complete");

    Ok(RetirementOutcome {
        total_at_retirement: balance,
        total_contributions: contributions,
        total_interest: balance - contributions,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn thirty_five_years_of_growth() {
        let outcome = project(&RetirementInputs {
            current_age: 30,
            retirement_age: 65,
            current_savings: dec!(50000),
            monthly_contribution: dec!(500),
            annual_return_pct: dec!(7),
        })
        .unwrap();

        assert!((outcome.total_at_retirement - dec!(1475834.89)).abs() < dec!(1));
        assert_eq!(outcome.total_contributions, dec!(260000));
        assert_eq!(outcome.series.first().unwrap().age, 30);
        assert_eq!(outcome.series.last().unwrap().age, 65);
    }

    #[test]
    fn seeds_from_profile() {
        let inputs = RetirementInputs::from_profile(&UserProfile::default(), dec!(7));
        assert_eq!(inputs.current_age, 30);
        assert_eq!(inputs.retirement_age, 65);
        assert_eq!(inputs.current_savings, dec!(20000));
        assert_eq!(inputs.monthly_contribution, dec!(500));
    }

    #[test]
    fn rejects_retirement_in_the_past() {
        let inputs = RetirementInputs {
            current_age: 70,
            retirement_age: 65,
            current_savings: dec!(1000),
            monthly_contribution: dec!(100),
            annual_return_pct: dec!(7),
        };
        assert!(project(&inputs).is_err());
    }
}
