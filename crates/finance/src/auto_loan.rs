use crate::annuity::{self, AmortizationPoint};
use crate::error::FinanceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for an auto loan, including sales tax and a trade-in credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanInputs {
    pub vehicle_price: Decimal,
    pub down_payment: Decimal,
    pub trade_in: Decimal,
    /// Annual interest rate as a percentage. 0 is valid (promotional financing).
    pub annual_rate_pct: Decimal,
    pub term_months: u32,
    /// Sales tax applied to the vehicle price, as a percentage.
    pub sales_tax_pct: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AutoLoanOutcome {
    pub sales_tax: Decimal,
    /// Price plus tax, minus down payment and trade-in. Zero when the cash
    /// covers the purchase outright.
    pub loan_amount: Decimal,
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
    /// Vehicle price + tax + financed interest.
    pub total_cost: Decimal,
    /// Schedule sampled every six months (plus first and last).
    pub schedule: Vec<AmortizationPoint>,
}

/// Amortizes an auto loan.
///
/// A purchase fully covered by down payment and trade-in is not an error: the
/// outcome has a zero payment and an empty schedule.
pub fn plan(inputs: &AutoLoanInputs) -> Result<AutoLoanOutcome, FinanceError> {
    if inputs.vehicle_price <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "vehicle price must be positive".to_string(),
        ));
    }
    if inputs.sales_tax_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "sales tax must not be negative".to_string(),
        ));
    }

    let sales_tax = inputs.vehicle_price * inputs.sales_tax_pct / Decimal::ONE_HUNDRED;
    let loan_amount = inputs.vehicle_price + sales_tax - inputs.down_payment - inputs.trade_in;

    if loan_amount <= Decimal::ZERO {
        return Ok(AutoLoanOutcome {
            sales_tax,
            loan_amount: Decimal::ZERO,
            monthly_payment: Decimal::ZERO,
            total_interest: Decimal::ZERO,
            total_cost: inputs.vehicle_price + sales_tax,
            schedule: Vec::new(),
        });
    }

    let summary = annuity::amortize(loan_amount, inputs.annual_rate_pct, inputs.term_months, 6)?;

    Ok(AutoLoanOutcome {
        sales_tax,
        loan_amount,
        monthly_payment: summary.monthly_payment,
        total_cost: inputs.vehicle_price + sales_tax + summary.total_interest,
        total_interest: summary.total_interest,
        schedule: summary.schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn fixture() -> AutoLoanInputs {
        AutoLoanInputs {
            vehicle_price: dec!(35000),
            down_payment: dec!(5000),
            trade_in: dec!(2000),
            annual_rate_pct: dec!(7.5),
            term_months: 60,
            sales_tax_pct: dec!(6.25),
        }
    }

    #[test]
    fn finances_price_plus_tax_minus_credits() {
        let outcome = plan(&fixture()).unwrap();
        assert_eq!(outcome.sales_tax, dec!(2187.50));
        assert_eq!(outcome.loan_amount, dec!(30187.50));
        assert!((outcome.monthly_payment - dec!(604.90)).abs() < dec!(0.01));
        assert!((outcome.total_interest - dec!(6106.23)).abs() < dec!(0.05));
        assert!((outcome.total_cost - dec!(43293.73)).abs() < dec!(0.05));
    }

    #[test]
    fn cash_purchase_needs_no_loan() {
        let mut inputs = fixture();
        inputs.down_payment = dec!(40000);
        let outcome = plan(&inputs).unwrap();
        assert_eq!(outcome.monthly_payment, Decimal::ZERO);
        assert_eq!(outcome.total_interest, Decimal::ZERO);
        assert_eq!(outcome.total_cost, dec!(37187.50));
        assert!(outcome.schedule.is_empty());
    }

    #[test]
    fn zero_percent_financing_is_straight_line() {
        let mut inputs = fixture();
        inputs.annual_rate_pct = Decimal::ZERO;
        let outcome = plan(&inputs).unwrap();
        assert_eq!(outcome.monthly_payment, dec!(30187.50) / dec!(60));
        assert_eq!(outcome.total_interest, Decimal::ZERO);
    }
}
