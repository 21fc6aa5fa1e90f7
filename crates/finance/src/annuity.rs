use crate::error::FinanceError;
use rust_decimal::{Decimal, MathematicalOps};
use serde::{Deserialize, Serialize};

/// One sampled point of an amortization schedule.
///
/// `interest` and `principal` are cumulative since the first payment, matching
/// what a paydown chart plots. `balance` is the remaining loan balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationPoint {
    pub month: u32,
    pub balance: Decimal,
    pub interest: Decimal,
    pub principal: Decimal,
}

/// The full result of amortizing a loan: the fixed payment, the interest paid
/// over the life of the loan, and a sampled schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationSummary {
    pub monthly_payment: Decimal,
    pub total_interest: Decimal,
    pub schedule: Vec<AmortizationPoint>,
}

/// Computes the fixed monthly payment for a fully amortizing loan.
///
/// Standard annuity formula `M = P * r(1+r)^n / ((1+r)^n - 1)` with the
/// monthly rate `r` derived from the annual percentage rate. A 0% rate
/// degenerates to straight-line repayment `P / n`.
pub fn monthly_payment(
    principal: Decimal,
    annual_rate_pct: Decimal,
    months: u32,
) -> Result<Decimal, FinanceError> {
    if principal <= Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "loan principal must be positive".to_string(),
        ));
    }
    if months == 0 {
        return Err(FinanceError::InvalidInput(
            "loan term must be at least one month".to_string(),
        ));
    }
    if annual_rate_pct < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "interest rate must not be negative".to_string(),
        ));
    }

    if annual_rate_pct.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let monthly_rate = annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);
    let growth = (Decimal::ONE + monthly_rate).powi(months as i64);
    Ok(principal * monthly_rate * growth / (growth - Decimal::ONE))
}

/// Runs the month-by-month paydown of a fixed-payment loan.
///
/// Iterates the full term, accruing interest on the running balance before
/// each payment, and emits sampled points: the first month, every
/// `sample_every` months, and the final month. The running balance is clamped
/// at zero so a final payment never leaves a negative remainder.
pub fn amortize(
    principal: Decimal,
    annual_rate_pct: Decimal,
    months: u32,
    sample_every: u32,
) -> Result<AmortizationSummary, FinanceError> {
    let payment = monthly_payment(principal, annual_rate_pct, months)?;
    let sample_every = sample_every.max(1);
    let monthly_rate = annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);

    let mut balance = principal;
    let mut total_interest = Decimal::ZERO;
    let mut schedule = Vec::new();

    for month in 1..=months {
        let interest = balance * monthly_rate;
        let principal_paid = payment - interest;
        balance -= principal_paid;
        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }
        total_interest += interest;

        if month == 1 || month % sample_every == 0 || month == months {
            schedule.push(AmortizationPoint {
                month,
                balance,
                interest: total_interest,
                principal: principal - balance,
            });
        }
    }

    tracing::debug!(
        %principal,
        %payment,
        %total_interest,
        months,
        "amortization complete"
    );

    Ok(AmortizationSummary {
        monthly_payment: payment,
        total_interest,
        schedule,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn assert_close(actual: Decimal, expected: Decimal, tolerance: Decimal) {
        assert!(
            (actual - expected).abs() < tolerance,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    // $240k at 6.5% over 30 years: the canonical mortgage fixture.
    #[case(dec!(240000), dec!(6.5), 360, dec!(1516.96))]
    // $340k principal at the same terms.
    #[case(dec!(340000), dec!(6.5), 360, dec!(2149.03))]
    // $30,187.50 at 7.5% over 60 months: the auto-loan fixture.
    #[case(dec!(30187.50), dec!(7.5), 60, dec!(604.90))]
    fn monthly_payment_matches_fixtures(
        #[case] principal: Decimal,
        #[case] rate: Decimal,
        #[case] months: u32,
        #[case] expected: Decimal,
    ) {
        let payment = monthly_payment(principal, rate, months).unwrap();
        assert_close(payment, expected, dec!(0.01));
    }

    #[test]
    fn zero_rate_is_straight_line() {
        let payment = monthly_payment(dec!(12000), Decimal::ZERO, 24).unwrap();
        assert_eq!(payment, dec!(500));
    }

    #[test]
    fn rejects_non_positive_principal() {
        assert!(monthly_payment(Decimal::ZERO, dec!(5), 12).is_err());
        assert!(monthly_payment(dec!(-100), dec!(5), 12).is_err());
    }

    #[test]
    fn rejects_negative_rate_and_zero_term() {
        assert!(monthly_payment(dec!(1000), dec!(-1), 12).is_err());
        assert!(monthly_payment(dec!(1000), dec!(5), 0).is_err());
    }

    #[test]
    fn amortization_pays_loan_down_to_zero() {
        let summary = amortize(dec!(240000), dec!(6.5), 360, 12).unwrap();
        let last = summary.schedule.last().unwrap();
        assert_eq!(last.month, 360);
        assert!(last.balance < dec!(0.01));
        assert_close(summary.total_interest, dec!(306106.77), dec!(0.05));
        // First month plus one point per year.
        assert_eq!(summary.schedule.len(), 31);
    }

    #[test]
    fn schedule_interest_is_cumulative() {
        let summary = amortize(dec!(10000), dec!(12), 24, 6).unwrap();
        let interests: Vec<Decimal> = summary.schedule.iter().map(|p| p.interest).collect();
        assert!(interests.windows(2).all(|w| w[0] < w[1]));
        assert_close(
            *interests.last().unwrap(),
            summary.total_interest,
            dec!(0.001),
        );
    }
}
