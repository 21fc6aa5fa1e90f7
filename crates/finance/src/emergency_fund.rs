use crate::error::FinanceError;
use core_types::RiskTolerance;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs for sizing an emergency fund.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundInputs {
    pub essential_monthly: Decimal,
    pub optional_monthly: Decimal,
    pub current_savings: Decimal,
    pub risk: RiskTolerance,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyFundOutcome {
    /// Monthly expenses times the months of cushion the risk tolerance asks for.
    pub target_fund: Decimal,
    /// How long current savings would last at the monthly burn rate.
    pub months_of_cover: Decimal,
    /// Progress toward the target, capped at 100.
    pub progress_pct: Decimal,
}

/// Sizes the emergency fund. Zero expenses yield zero cover rather than a
/// division by zero.
pub fn plan(inputs: &EmergencyFundInputs) -> Result<EmergencyFundOutcome, FinanceError> {
    if inputs.essential_monthly < Decimal::ZERO
        || inputs.optional_monthly < Decimal::ZERO
        || inputs.current_savings < Decimal::ZERO
    {
        return Err(FinanceError::InvalidInput(
            "amounts must not be negative".to_string(),
        ));
    }

    let monthly_total = inputs.essential_monthly + inputs.optional_monthly;
    let target_fund = monthly_total * Decimal::from(inputs.risk.target_months());

    let months_of_cover = if monthly_total > Decimal::ZERO {
        inputs.current_savings / monthly_total
    } else {
        Decimal::ZERO
    };

    let progress_pct = if target_fund > Decimal::ZERO {
        (inputs.current_savings / target_fund * Decimal::ONE_HUNDRED).min(Decimal::ONE_HUNDRED)
    } else {
        Decimal::ZERO
    };

    Ok(EmergencyFundOutcome {
        target_fund,
        months_of_cover,
        progress_pct,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    // 2000 essential + 500 optional at each risk tolerance.
    #[case(RiskTolerance::Low, dec!(7500))]
    #[case(RiskTolerance::Medium, dec!(15000))]
    #[case(RiskTolerance::High, dec!(22500))]
    fn target_scales_with_risk_tolerance(
        #[case] risk: RiskTolerance,
        #[case] expected_target: Decimal,
    ) {
        let outcome = plan(&EmergencyFundInputs {
            essential_monthly: dec!(2000),
            optional_monthly: dec!(500),
            current_savings: dec!(5000),
            risk,
        })
        .unwrap();
        assert_eq!(outcome.target_fund, expected_target);
        assert_eq!(outcome.months_of_cover, dec!(2));
    }

    #[test]
    fn progress_is_capped_at_100() {
        let outcome = plan(&EmergencyFundInputs {
            essential_monthly: dec!(1000),
            optional_monthly: Decimal::ZERO,
            current_savings: dec!(50000),
            risk: RiskTolerance::Low,
        })
        .unwrap();
        assert_eq!(outcome.progress_pct, dec!(100));
    }

    #[test]
    fn zero_expenses_do_not_divide_by_zero() {
        let outcome = plan(&EmergencyFundInputs {
            essential_monthly: Decimal::ZERO,
            optional_monthly: Decimal::ZERO,
            current_savings: dec!(5000),
            risk: RiskTolerance::Medium,
        })
        .unwrap();
        assert_eq!(outcome.target_fund, Decimal::ZERO);
        assert_eq!(outcome.months_of_cover, Decimal::ZERO);
        assert_eq!(outcome.progress_pct, Decimal::ZERO);
    }
}
