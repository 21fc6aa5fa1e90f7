use crate::error::FinanceError;
use chrono::{Months, NaiveDate};
use core_types::PayoffStrategy;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Below this residual a debt counts as retired (sub-cent dust from the
/// decimal paydown arithmetic).
const PAID_OFF: Decimal = dec!(0.01);

/// Hard cap on the simulation: 30 years of monthly steps.
const MAX_MONTHS: u32 = 360;

/// A single debt in the payoff plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Debt {
    pub name: String,
    pub balance: Decimal,
    /// Annual interest rate as a percentage.
    pub annual_rate_pct: Decimal,
    pub minimum_payment: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffInputs {
    pub debts: Vec<Debt>,
    /// Budget on top of the minimum payments.
    pub extra_monthly: Decimal,
    pub strategy: PayoffStrategy,
}

/// One point of the aggregate balance history (quarterly plus the final month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayoffPoint {
    pub month: u32,
    pub remaining_balance: Decimal,
    pub interest_paid: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebtPayoffOutcome {
    /// Months until debt-free, or the cap if the plan never gets there.
    pub months: u32,
    pub total_interest: Decimal,
    pub debt_free: bool,
    pub history: Vec<PayoffPoint>,
}

/// Runs the monthly debt payoff simulation.
///
/// Each month: interest accrues on every open balance, every debt receives its
/// minimum payment (capped at what it still owes), then the snowball (the
/// extra budget plus the minimums freed by debts retired in earlier months)
/// goes to the highest-priority open debt, cascading any remainder down the
/// priority order. Priority is fixed up front by the chosen strategy.
pub fn plan(inputs: &DebtPayoffInputs) -> Result<DebtPayoffOutcome, FinanceError> {
    if inputs.debts.is_empty() {
        return Err(FinanceError::InvalidInput(
            "at least one debt is required".to_string(),
        ));
    }
    for debt in &inputs.debts {
        if debt.balance < Decimal::ZERO
            || debt.annual_rate_pct < Decimal::ZERO
            || debt.minimum_payment < Decimal::ZERO
        {
            return Err(FinanceError::InvalidInput(format!(
                "debt '{}' has a negative balance, rate, or minimum payment",
                debt.name
            )));
        }
    }
    if inputs.extra_monthly < Decimal::ZERO {
        return Err(FinanceError::InvalidInput(
            "extra monthly budget must not be negative".to_string(),
        ));
    }

    let mut debts = inputs.debts.clone();
    match inputs.strategy {
        PayoffStrategy::Snowball => debts.sort_by(|a, b| a.balance.cmp(&b.balance)),
        PayoffStrategy::Avalanche => {
            debts.sort_by(|a, b| b.annual_rate_pct.cmp(&a.annual_rate_pct))
        }
    }

    let open_total =
        |debts: &[Debt]| -> Decimal { debts.iter().map(|d| d.balance.max(Decimal::ZERO)).sum() };
    let any_open = |debts: &[Debt]| debts.iter().any(|d| d.balance > PAID_OFF);

    let mut months = 0u32;
    let mut total_interest = Decimal::ZERO;
    // Minimums released by debts retired in earlier months.
    let mut freed_minimums = Decimal::ZERO;

    let mut history = vec![PayoffPoint {
        month: 0,
        remaining_balance: open_total(&debts),
        interest_paid: Decimal::ZERO,
    }];

    while any_open(&debts) && months < MAX_MONTHS {
        months += 1;

        // 1. Accrue interest.
        for debt in &mut debts {
            if debt.balance > Decimal::ZERO {
                let interest =
                    debt.balance * debt.annual_rate_pct / Decimal::ONE_HUNDRED / Decimal::from(12u32);
                debt.balance += interest;
                total_interest += interest;
            }
        }

        // 2. Minimum payments, never overpaying a nearly-retired debt.
        let mut freed_this_month = Decimal::ZERO;
        for debt in &mut debts {
            if debt.balance <= PAID_OFF {
                continue;
            }
            let payment = debt.minimum_payment.min(debt.balance);
            debt.balance -= payment;
            if debt.balance <= PAID_OFF {
                freed_this_month += debt.minimum_payment;
            }
        }

        // 3. The snowball, cascading down the priority order.
        let mut snowball = inputs.extra_monthly + freed_minimums;
        for debt in &mut debts {
            if snowball <= Decimal::ZERO {
                break;
            }
            if debt.balance > PAID_OFF {
                let payment = snowball.min(debt.balance);
                debt.balance -= payment;
                snowball -= payment;
                if debt.balance <= PAID_OFF {
                    freed_this_month += debt.minimum_payment;
                }
            }
        }
        freed_minimums += freed_this_month;

        if months % 3 == 0 || !any_open(&debts) {
            history.push(PayoffPoint {
                month: months,
                remaining_balance: open_total(&debts),
                interest_paid: total_interest,
            });
        }
    }

    let debt_free = !any_open(&debts);
    tracing::debug!(
        months,
        debt_free,
        %total_interest,
        strategy = ?inputs.strategy,
        "debt payoff simulation complete"
    );

    Ok(DebtPayoffOutcome {
        months,
        total_interest,
        debt_free,
        history,
    })
}

/// The calendar month the plan finishes, counted from `start`.
pub fn projected_payoff_date(start: NaiveDate, months: u32) -> Option<NaiveDate> {
    start.checked_add_months(Months::new(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn card_and_car() -> Vec<Debt> {
        vec![
            Debt {
                name: "Credit Card".to_string(),
                balance: dec!(5000),
                annual_rate_pct: dec!(18.9),
                minimum_payment: dec!(100),
            },
            Debt {
                name: "Car Loan".to_string(),
                balance: dec!(12000),
                annual_rate_pct: dec!(6.5),
                minimum_payment: dec!(250),
            },
        ]
    }

    #[test]
    fn card_and_car_clear_in_22_months() {
        let outcome = plan(&DebtPayoffInputs {
            debts: card_and_car(),
            extra_monthly: dec!(500),
            strategy: PayoffStrategy::Snowball,
        })
        .unwrap();
        assert!(outcome.debt_free);
        assert_eq!(outcome.months, 22);
        assert!((outcome.total_interest - dec!(1340.15)).abs() < dec!(0.05));
        assert_eq!(outcome.history.last().unwrap().month, 22);
        assert!(outcome.history.last().unwrap().remaining_balance <= dec!(0.01));
    }

    #[rstest]
    // A small cheap debt and a large expensive one separate the strategies:
    // avalanche attacks the 22% balance first and pays less interest overall.
    #[case(PayoffStrategy::Snowball, dec!(3310.30))]
    #[case(PayoffStrategy::Avalanche, dec!(2732.13))]
    fn avalanche_beats_snowball_on_interest(
        #[case] strategy: PayoffStrategy,
        #[case] expected_interest: Decimal,
    ) {
        let debts = vec![
            Debt {
                name: "Store Card".to_string(),
                balance: dec!(2000),
                annual_rate_pct: dec!(5),
                minimum_payment: dec!(50),
            },
            Debt {
                name: "Credit Card".to_string(),
                balance: dec!(10000),
                annual_rate_pct: dec!(22),
                minimum_payment: dec!(200),
            },
        ];
        let outcome = plan(&DebtPayoffInputs {
            debts,
            extra_monthly: dec!(300),
            strategy,
        })
        .unwrap();
        assert!(outcome.debt_free);
        assert_eq!(outcome.months, 28);
        assert!((outcome.total_interest - expected_interest).abs() < dec!(0.05));
    }

    #[test]
    fn runaway_interest_stops_at_the_cap() {
        let outcome = plan(&DebtPayoffInputs {
            debts: vec![Debt {
                name: "Payday Loan".to_string(),
                balance: dec!(10000),
                annual_rate_pct: dec!(60),
                minimum_payment: dec!(100),
            }],
            extra_monthly: dec!(300),
            strategy: PayoffStrategy::Avalanche,
        })
        .unwrap();
        assert!(!outcome.debt_free);
        assert_eq!(outcome.months, 360);
    }

    #[test]
    fn rejects_empty_debt_list() {
        let inputs = DebtPayoffInputs {
            debts: Vec::new(),
            extra_monthly: dec!(100),
            strategy: PayoffStrategy::Snowball,
        };
        assert!(plan(&inputs).is_err());
    }

    #[test]
    fn payoff_date_advances_by_plan_length() {
        let start = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        let date = projected_payoff_date(start, 22).unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2027, 11, 15).unwrap());
    }
}
