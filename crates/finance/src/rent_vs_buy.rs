use crate::annuity;
use crate::error::FinanceError;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

// Carrying-cost assumptions baked into the buy path, as a fraction of the
// current home value per year.
const PROPERTY_TAX_RATE: Decimal = dec!(0.012);
const HOME_INSURANCE_RATE: Decimal = dec!(0.005);

fn default_horizon_years() -> u32 {
    30
}

/// Inputs for the rent-vs-buy net-worth comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyInputs {
    // Buy side.
    pub home_price: Decimal,
    pub down_payment: Decimal,
    /// Mortgage rate as an annual percentage.
    pub annual_rate_pct: Decimal,
    pub loan_term_years: u32,
    /// One-time purchase closing costs, percent of the home price.
    pub buying_closing_costs_pct: Decimal,
    /// Costs of an eventual sale, percent of the home value (haircut on equity).
    pub selling_closing_costs_pct: Decimal,
    /// Annual maintenance, percent of the current home value.
    pub maintenance_pct: Decimal,
    pub home_appreciation_pct: Decimal,

    // Rent side.
    pub monthly_rent: Decimal,
    /// Annual rent increase as a percentage.
    pub rent_increase_pct: Decimal,
    pub monthly_renters_insurance: Decimal,
    /// Return earned by the renter's invested savings, annual percentage.
    pub investment_return_pct: Decimal,

    /// Comparison horizon in years.
    #[serde(default = "default_horizon_years")]
    pub horizon_years: u32,
}

/// One compared year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonPoint {
    pub year: u32,
    /// The renter's opportunity-cost portfolio.
    pub rent_net_worth: Decimal,
    /// Home equity after the selling-cost haircut.
    pub buy_net_worth: Decimal,
    /// Cumulative unrecoverable rent-side spending.
    pub rent_cost: Decimal,
    /// Cumulative unrecoverable buy-side spending (interest, maintenance,
    /// taxes, insurance, closing costs).
    pub buy_cost: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentVsBuyOutcome {
    pub monthly_mortgage: Decimal,
    /// First year the buyer's net worth overtakes the renter's, if any.
    pub breakeven_year: Option<u32>,
    pub series: Vec<ComparisonPoint>,
}

/// Compares the net-worth trajectories of renting versus buying.
///
/// The renter starts with the down payment and purchase closing costs
/// invested, and each year invests (or draws down) the cash-flow difference
/// between owning and renting. The buyer builds equity through paydown and
/// appreciation, discounted by selling costs.
pub fn compare(inputs: &RentVsBuyInputs) -> Result<RentVsBuyOutcome, FinanceError> {
    let loan_amount = inputs.home_price - inputs.down_payment;
    if loan_amount <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "down payment covers the full home price; nothing to compare".to_string(),
        ));
    }
    if inputs.monthly_rent <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "monthly rent must be positive".to_string(),
        ));
    }
    if inputs.horizon_years == 0 || inputs.horizon_years > 50 {
        return Err(FinanceError::InvalidInput(
            "comparison horizon must be between 1 and 50 years".to_string(),
        ));
    }
    if inputs.loan_term_years == 0 {
        return Err(FinanceError::InvalidInput(
            "loan term must be at least one year".to_string(),
        ));
    }

    let months = inputs.loan_term_years * 12;
    let monthly_mortgage = annuity::monthly_payment(loan_amount, inputs.annual_rate_pct, months)?;
    let monthly_rate = inputs.annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);

    let buy_closing_costs = inputs.home_price * inputs.buying_closing_costs_pct / Decimal::ONE_HUNDRED;
    let rent_growth = Decimal::ONE + inputs.rent_increase_pct / Decimal::ONE_HUNDRED;
    let appreciation = Decimal::ONE + inputs.home_appreciation_pct / Decimal::ONE_HUNDRED;
    let investment_growth = Decimal::ONE + inputs.investment_return_pct / Decimal::ONE_HUNDRED;
    let equity_factor = Decimal::ONE - inputs.selling_closing_costs_pct / Decimal::ONE_HUNDRED;

    // The renter invests the cash the buyer sank into the purchase.
    let mut rent_savings = inputs.down_payment + buy_closing_costs;
    let mut home_value = inputs.home_price;
    let mut mortgage_balance = loan_amount;
    let mut total_rent_cost = Decimal::ZERO;
    let mut total_buy_cost = buy_closing_costs;

    let mut series = Vec::with_capacity(inputs.horizon_years as usize);
    let mut breakeven_year = None;

    for year in 1..=inputs.horizon_years {
        // Rent path: this year's (increased) rent plus renter's insurance.
        let current_monthly_rent = inputs.monthly_rent * rent_growth.powi(year as i64 - 1);
        let yearly_rent = current_monthly_rent * Decimal::from(12u32);
        let yearly_renters_insurance = inputs.monthly_renters_insurance * Decimal::from(12u32);
        total_rent_cost += yearly_rent + yearly_renters_insurance;
        rent_savings *= investment_growth;

        // Buy path: twelve months of mortgage paydown.
        let mut interest_paid = Decimal::ZERO;
        for _ in 0..12 {
            if mortgage_balance > Decimal::ZERO {
                let interest = mortgage_balance * monthly_rate;
                let principal = monthly_mortgage - interest;
                interest_paid += interest;
                mortgage_balance -= principal;
            }
        }

        home_value *= appreciation;
        let yearly_maintenance = home_value * inputs.maintenance_pct / Decimal::ONE_HUNDRED;
        let property_tax = home_value * PROPERTY_TAX_RATE;
        let home_insurance = home_value * HOME_INSURANCE_RATE;
        total_buy_cost += interest_paid + yearly_maintenance + property_tax + home_insurance;

        // Whoever spends less on housing this year invests the difference; a
        // single portfolio variable carries the signed adjustment.
        let cost_to_own =
            monthly_mortgage * Decimal::from(12u32) + yearly_maintenance + property_tax + home_insurance;
        let cost_to_rent = yearly_rent + yearly_renters_insurance;
        rent_savings += cost_to_own - cost_to_rent;

        let buy_net_worth = home_value * equity_factor - mortgage_balance;

        series.push(ComparisonPoint {
            year,
            rent_net_worth: rent_savings,
            buy_net_worth,
            rent_cost: total_rent_cost,
            buy_cost: total_buy_cost,
        });

        if breakeven_year.is_none() && buy_net_worth > rent_savings {
            breakeven_year = Some(year);
        }
    }

    tracing::debug!(
        %monthly_mortgage,
        ?breakeven_year,
        horizon = inputs.horizon_years,
        "rent-vs-buy comparison complete"
    );

    Ok(RentVsBuyOutcome {
        monthly_mortgage,
        breakeven_year,
        series,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> RentVsBuyInputs {
        RentVsBuyInputs {
            home_price: dec!(400000),
            down_payment: dec!(80000),
            annual_rate_pct: dec!(6.5),
            loan_term_years: 30,
            buying_closing_costs_pct: dec!(3),
            selling_closing_costs_pct: dec!(6),
            maintenance_pct: dec!(1),
            home_appreciation_pct: dec!(3),
            monthly_rent: dec!(2000),
            rent_increase_pct: dec!(3),
            monthly_renters_insurance: dec!(20),
            investment_return_pct: dec!(7),
            horizon_years: 30,
        }
    }

    #[test]
    fn mortgage_payment_for_the_default_scenario() {
        let outcome = compare(&fixture()).unwrap();
        assert!((outcome.monthly_mortgage - dec!(2022.62)).abs() < dec!(0.01));
        assert_eq!(outcome.series.len(), 30);
    }

    #[test]
    fn high_rates_keep_renting_ahead_for_decades() {
        // At 6.5% with $2k rent the renter's invested cash never falls behind
        // within the 30-year window.
        let outcome = compare(&fixture()).unwrap();
        assert_eq!(outcome.breakeven_year, None);
        let year5 = &outcome.series[4];
        assert!((year5.rent_net_worth - dec!(188922.06)).abs() < dec!(1));
        assert!((year5.buy_net_worth - dec!(136331.92)).abs() < dec!(1));
    }

    #[test]
    fn expensive_rent_flips_the_comparison_quickly() {
        let mut inputs = fixture();
        inputs.monthly_rent = dec!(4500);
        let outcome = compare(&inputs).unwrap();
        let breakeven = outcome.breakeven_year.expect("buying should win");
        assert!(breakeven <= 5, "breakeven at year {breakeven}");
    }

    #[test]
    fn tracks_cumulative_unrecoverable_costs() {
        let outcome = compare(&fixture()).unwrap();
        let first = &outcome.series[0];
        // Year one rent cost: 12 * 2000 + 12 * 20.
        assert_eq!(first.rent_cost, dec!(24240));
        assert!(first.buy_cost > dec!(40000));
    }

    #[test]
    fn rejects_full_cash_purchase() {
        let mut inputs = fixture();
        inputs.down_payment = dec!(400000);
        assert!(compare(&inputs).is_err());
    }
}
