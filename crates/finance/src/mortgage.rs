use crate::annuity::{self, AmortizationPoint};
use crate::error::FinanceError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for a fixed-rate mortgage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageInputs {
    pub home_price: Decimal,
    pub down_payment: Decimal,
    /// Annual interest rate as a percentage (e.g. 6.5).
    pub annual_rate_pct: Decimal,
    pub term_years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MortgageOutcome {
    /// Home price minus down payment.
    pub loan_amount: Decimal,
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
    /// Everything paid for the home: principal, interest, and the down payment.
    pub total_cost: Decimal,
    /// Yearly-sampled amortization schedule (plus the first month).
    pub schedule: Vec<AmortizationPoint>,
}

/// Amortizes a mortgage.
pub fn plan(inputs: &MortgageInputs) -> Result<MortgageOutcome, FinanceError> {
    let loan_amount = inputs.home_price - inputs.down_payment;
    if loan_amount <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "down payment covers the full home price; nothing to finance".to_string(),
        ));
    }
    if inputs.term_years == 0 {
        return Err(FinanceError::InvalidInput(
            "loan term must be at least one year".to_string(),
        ));
    }

    let months = inputs.term_years * 12;
    let summary = annuity::amortize(loan_amount, inputs.annual_rate_pct, months, 12)?;

    Ok(MortgageOutcome {
        loan_amount,
        monthly_payment: summary.monthly_payment,
        total_cost: loan_amount + summary.total_interest + inputs.down_payment,
        total_interest: summary.total_interest,
        schedule: summary.schedule,
    })
}
