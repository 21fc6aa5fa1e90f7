use crate::error::FinanceError;
use chrono::{Months, NaiveDate};
use core_types::UserProfile;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

fn default_max_years() -> u32 {
    50
}

/// Inputs for the financial-independence crossover search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireInputs {
    pub current_age: u32,
    pub current_net_worth: Decimal,
    /// Post-tax annual income.
    pub annual_income: Decimal,
    pub annual_spending: Decimal,
    /// Expected annual return as a percentage.
    pub annual_return_pct: Decimal,
    /// Safe withdrawal rate as a percentage (the "4% rule").
    pub safe_withdrawal_rate_pct: Decimal,
    /// When set, the FIRE target grows by this annual percentage, so the
    /// crossover is against an inflation-adjusted number.
    pub inflation_rate_pct: Option<Decimal>,
    /// Projection horizon in years.
    #[serde(default = "default_max_years")]
    pub max_years: u32,
}

impl FireInputs {
    /// Seeds the projection from the stored user profile. Spending defaults to
    /// the profile's income minus twelve monthly contributions (the profile
    /// does not track spending directly).
    pub fn from_profile(profile: &UserProfile, annual_return_pct: Decimal) -> Self {
        let annual_spending =
            profile.annual_income - profile.monthly_contribution * Decimal::from(12u32);
        Self {
            current_age: profile.age,
            current_net_worth: profile.current_savings,
            annual_income: profile.annual_income,
            annual_spending,
            annual_return_pct,
            safe_withdrawal_rate_pct: profile.safe_withdrawal_rate,
            inflation_rate_pct: None,
            max_years: default_max_years(),
        }
    }
}

/// One projected year, keyed by age.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirePoint {
    pub age: u32,
    pub net_worth: Decimal,
    /// The FIRE target for this year (moves when inflation-adjusted).
    pub target: Decimal,
    /// What the net worth would sustain at the safe withdrawal rate.
    pub passive_income: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FireOutcome {
    /// Annual spending divided by the safe withdrawal rate, in today's money.
    pub fire_number: Decimal,
    /// Fractional years until the net worth crosses the target (one decimal
    /// place), or `None` if the crossover never happens within the horizon.
    pub years_to_fire: Option<Decimal>,
    pub series: Vec<FirePoint>,
}

impl FireOutcome {
    /// The calendar month financial independence is reached, counted from
    /// `from`. `None` when the target is never reached.
    pub fn freedom_date(&self, from: NaiveDate) -> Option<NaiveDate> {
        let years = self.years_to_fire?;
        let months = (years * Decimal::from(12u32)).round().to_u32()?;
        from.checked_add_months(Months::new(months))
    }
}

/// Projects net worth year by year and finds the FIRE crossover.
///
/// Growth step: `balance = balance * (1 + r) + (income - spending)`. The
/// crossover year is refined by linear interpolation between the two yearly
/// samples that bracket the target.
pub fn project(inputs: &FireInputs) -> Result<FireOutcome, FinanceError> {
    if inputs.annual_spending <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "annual spending must be positive".to_string(),
        ));
    }
    if inputs.safe_withdrawal_rate_pct <= Decimal::ZERO
        || inputs.safe_withdrawal_rate_pct > Decimal::ONE_HUNDRED
    {
        return Err(FinanceError::InvalidInput(
            "safe withdrawal rate must be a percentage in (0, 100]".to_string(),
        ));
    }
    if inputs.annual_return_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "return rate must not be negative".to_string(),
        ));
    }
    if inputs.max_years == 0 || inputs.max_years > 100 {
        return Err(FinanceError::InvalidInput(
            "projection horizon must be between 1 and 100 years".to_string(),
        ));
    }

    let swr = inputs.safe_withdrawal_rate_pct / Decimal::ONE_HUNDRED;
    let fire_number = inputs.annual_spending / swr;
    let annual_savings = inputs.annual_income - inputs.annual_spending;
    let growth = Decimal::ONE + inputs.annual_return_pct / Decimal::ONE_HUNDRED;
    let inflation = inputs
        .inflation_rate_pct
        .map(|pct| Decimal::ONE + pct / Decimal::ONE_HUNDRED);

    let mut balance = inputs.current_net_worth;
    let mut years_to_fire = if balance >= fire_number {
        Some(Decimal::ZERO)
    } else {
        None
    };

    let mut series = Vec::with_capacity(inputs.max_years as usize + 1);
    series.push(FirePoint {
        age: inputs.current_age,
        net_worth: balance,
        target: fire_number,
        passive_income: balance * swr,
    });

    for year in 1..=inputs.max_years {
        let previous = balance;
        balance = balance * growth + annual_savings;

        let target = match inflation {
            Some(factor) => fire_number * factor.powi(year as i64),
            None => fire_number,
        };

        series.push(FirePoint {
            age: inputs.current_age + year,
            net_worth: balance,
            target,
            passive_income: balance * swr,
        });

        if years_to_fire.is_none() && balance >= target && balance > previous {
            // Linear interpolation between the bracketing yearly samples.
            let fraction = (target - previous) / (balance - previous);
            years_to_fire = Some((Decimal::from(year - 1) + fraction).round_dp(1));
        }
    }

    tracing::debug!(
        %fire_number,
        ?years_to_fire,
        horizon = inputs.max_years,
        "fire projection complete"
    );

    Ok(FireOutcome {
        fire_number,
        years_to_fire,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fixture() -> FireInputs {
        FireInputs {
            current_age: 30,
            current_net_worth: dec!(20000),
            annual_income: dec!(60000),
            annual_spending: dec!(45000),
            annual_return_pct: dec!(7),
            safe_withdrawal_rate_pct: dec!(4.0),
            inflation_rate_pct: None,
            max_years: 50,
        }
    }

    #[test]
    fn fire_number_is_spending_over_swr() {
        let outcome = project(&fixture()).unwrap();
        assert_eq!(outcome.fire_number, dec!(1125000));
    }

    #[test]
    fn fixed_target_crossover_interpolates_to_tenths() {
        let outcome = project(&fixture()).unwrap();
        assert_eq!(outcome.years_to_fire, Some(dec!(25.8)));
    }

    #[test]
    fn inflation_pushes_the_target_out() {
        let mut inputs = fixture();
        inputs.inflation_rate_pct = Some(dec!(3));
        let outcome = project(&inputs).unwrap();
        assert_eq!(outcome.years_to_fire, Some(dec!(42.7)));
    }

    #[test]
    fn already_independent_is_year_zero() {
        let mut inputs = fixture();
        inputs.current_net_worth = dec!(2000000);
        let outcome = project(&inputs).unwrap();
        assert_eq!(outcome.years_to_fire, Some(Decimal::ZERO));
    }

    #[test]
    fn spending_everything_never_crosses() {
        let mut inputs = fixture();
        inputs.annual_spending = dec!(60000);
        let outcome = project(&inputs).unwrap();
        assert_eq!(outcome.years_to_fire, None);
        assert!(outcome.freedom_date(NaiveDate::from_ymd_opt(2026, 8, 1).unwrap()).is_none());
    }

    #[test]
    fn passive_income_tracks_the_balance() {
        let outcome = project(&fixture()).unwrap();
        assert_eq!(outcome.series[0].passive_income, dec!(800));
    }

    #[test]
    fn seeds_from_profile() {
        let inputs = FireInputs::from_profile(&UserProfile::default(), dec!(7));
        assert_eq!(inputs.annual_spending, dec!(54000));
        assert_eq!(inputs.safe_withdrawal_rate_pct, dec!(4.0));
    }
}
