use crate::error::FinanceError;
use crate::investment::GrowthPoint;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The target net worth: one million.
pub const TARGET: Decimal = dec!(1000000);

/// Safety brake on the open-ended search: 100 years.
const MAX_MONTHS: u32 = 1200;

/// Inputs for the time-to-millionaire search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MillionaireInputs {
    pub current_balance: Decimal,
    pub monthly_contribution: Decimal,
    /// Expected annual return as a percentage.
    pub annual_return_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MillionaireOutcome {
    /// Months until the balance first reaches the target. Equals the cap when
    /// the target was not reached.
    pub months: u32,
    /// Whether the target was reached within the 100-year cap.
    pub reached: bool,
    pub final_balance: Decimal,
    /// Yearly points plus the crossing month.
    pub series: Vec<GrowthPoint>,
}

impl MillionaireOutcome {
    /// The month count split into whole years and leftover months.
    pub fn years_and_months(&self) -> (u32, u32) {
        (self.months / 12, self.months % 12)
    }
}

/// Searches forward for the month the balance first reaches $1M.
///
/// Same compounding step as the investment projection. Inputs that can never
/// grow (no contribution, no return, below target) are rejected rather than
/// spinning to the cap.
pub fn project(inputs: &MillionaireInputs) -> Result<MillionaireOutcome, FinanceError> {
    if inputs.current_balance < Decimal::ZERO || inputs.monthly_contribution < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "amounts must not be negative".to_string(),
        ));
    }
    if inputs.annual_return_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "return rate must not be negative".to_string(),
        ));
    }
    if inputs.current_balance < TARGET
        && inputs.monthly_contribution.is_zero()
        && inputs.annual_return_pct.is_zero()
    {
        return Err(FinanceError::InvalidInput(
            "with no contributions and no growth the target is unreachable".to_string(),
        ));
    }

    let monthly_rate = inputs.annual_return_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);
    let mut balance = inputs.current_balance;
    let mut invested = inputs.current_balance;
    let mut months = 0u32;

    let mut series = vec![GrowthPoint {
        year: 0,
        total: balance,
        invested,
        gains: Decimal::ZERO,
    }];

    while balance < TARGET && months < MAX_MONTHS {
        balance = (balance + inputs.monthly_contribution) * (Decimal::ONE + monthly_rate);
        invested += inputs.monthly_contribution;
        months += 1;

        if months % 12 == 0 || balance >= TARGET {
            series.push(GrowthPoint {
                year: months / 12,
                total: balance,
                invested,
                gains: balance - invested,
            });
        }
    }

    let reached = balance >= TARGET;
    tracing::debug!(months, reached, %balance, "millionaire search complete");

    Ok(MillionaireOutcome {
        months,
        reached,
        final_balance: balance,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_growth_is_simple_division() {
        // $500k short of the target, $5k/month, 0% return -> 100 months.
        let outcome = project(&MillionaireInputs {
            current_balance: dec!(500000),
            monthly_contribution: dec!(5000),
            annual_return_pct: Decimal::ZERO,
        })
        .unwrap();
        assert!(outcome.reached);
        assert_eq!(outcome.months, 100);
        assert_eq!(outcome.years_and_months(), (8, 4));
    }

    #[test]
    fn compounding_shortens_the_wait() {
        // $25k starting, $1k/month at 8% -> 23 years 7 months.
        let outcome = project(&MillionaireInputs {
            current_balance: dec!(25000),
            monthly_contribution: dec!(1000),
            annual_return_pct: dec!(8),
        })
        .unwrap();
        assert!(outcome.reached);
        assert_eq!(outcome.months, 283);
        assert_eq!(outcome.years_and_months(), (23, 7));
        assert!(outcome.final_balance >= TARGET);
    }

    #[test]
    fn already_a_millionaire_takes_zero_months() {
        let outcome = project(&MillionaireInputs {
            current_balance: dec!(1500000),
            monthly_contribution: Decimal::ZERO,
            annual_return_pct: dec!(5),
        })
        .unwrap();
        assert!(outcome.reached);
        assert_eq!(outcome.months, 0);
    }

    #[test]
    fn rejects_unreachable_target() {
        assert!(
            project(&MillionaireInputs {
                current_balance: dec!(1000),
                monthly_contribution: Decimal::ZERO,
                annual_return_pct: Decimal::ZERO,
            })
            .is_err()
        );
    }

    #[test]
    fn tiny_contribution_hits_the_cap() {
        let outcome = project(&MillionaireInputs {
            current_balance: Decimal::ZERO,
            monthly_contribution: dec!(10),
            annual_return_pct: Decimal::ZERO,
        })
        .unwrap();
        assert!(!outcome.reached);
        assert_eq!(outcome.months, 1200);
    }
}
