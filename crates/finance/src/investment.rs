use crate::error::FinanceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a recurring-contribution investment projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentInputs {
    pub initial_amount: Decimal,
    pub monthly_contribution: Decimal,
    /// Expected annual return as a percentage.
    pub annual_return_pct: Decimal,
    pub years: u32,
}

/// One yearly point of a growth projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrowthPoint {
    pub year: u32,
    pub total: Decimal,
    pub invested: Decimal,
    pub gains: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentOutcome {
    pub final_balance: Decimal,
    pub total_invested: Decimal,
    pub total_gains: Decimal,
    /// Year 0 (the starting state) through the final year.
    pub series: Vec<GrowthPoint>,
}

/// Projects compound growth with monthly contributions.
///
/// Contributions are deposited at the start of each month and compound at the
/// monthly rate: `balance = (balance + monthly) * (1 + r)`.
pub fn project(inputs: &InvestmentInputs) -> Result<InvestmentOutcome, FinanceError> {
    if inputs.initial_amount < Decimal::ZERO || inputs.monthly_contribution < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "amounts must not be negative".to_string(),
        ));
    }
    if inputs.annual_return_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "return rate must not be negative".to_string(),
        ));
    }
    if inputs.years == 0 {
        return Err(FinanceError::InvalidInput(
            "projection must cover at least one year".to_string(),
        ));
    }

    let monthly_rate = inputs.annual_return_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);
    let mut balance = inputs.initial_amount;
    let mut invested = inputs.initial_amount;

    let mut series = Vec::with_capacity(inputs.years as usize + 1);
    series.push(GrowthPoint {
        year: 0,
        total: balance,
        invested,
        gains: Decimal::ZERO,
    });

    for month in 1..=(inputs.years * 12) {
        balance = (balance + inputs.monthly_contribution) * (Decimal::ONE + monthly_rate);
        invested += inputs.monthly_contribution;

        if month % 12 == 0 {
            series.push(GrowthPoint {
                year: month / 12,
                total: balance,
                invested,
                gains: balance - invested,
            });
        }
    }

    tracing::debug!(%balance, %invested, years = inputs.years, "investment projection complete");

    Ok(InvestmentOutcome {
        final_balance: balance,
        total_invested: invested,
        total_gains: balance - invested,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn twenty_years_of_500_a_month_at_7_pct() {
        let outcome = project(&InvestmentInputs {
            initial_amount: dec!(10000),
            monthly_contribution: dec!(500),
            annual_return_pct: dec!(7),
            years: 20,
        })
        .unwrap();

        assert_eq!(outcome.total_invested, dec!(130000));
        assert!((outcome.final_balance - dec!(302370.09)).abs() < dec!(0.5));
        assert!((outcome.total_gains - dec!(172370.09)).abs() < dec!(0.5));
        assert_eq!(outcome.series.len(), 21);
        assert_eq!(outcome.series[0].total, dec!(10000));
    }

    #[test]
    fn zero_return_accumulates_contributions_only() {
        let outcome = project(&InvestmentInputs {
            initial_amount: dec!(1000),
            monthly_contribution: dec!(100),
            annual_return_pct: Decimal::ZERO,
            years: 2,
        })
        .unwrap();
        assert_eq!(outcome.final_balance, dec!(3400));
        assert_eq!(outcome.total_gains, Decimal::ZERO);
    }

    #[test]
    fn rejects_negative_contribution() {
        assert!(
            project(&InvestmentInputs {
                initial_amount: dec!(1000),
                monthly_contribution: dec!(-1),
                annual_return_pct: dec!(7),
                years: 5,
            })
            .is_err()
        );
    }
}
