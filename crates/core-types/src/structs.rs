use crate::error::CoreError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The single user profile shared by the profile-aware calculators.
///
/// There is exactly one of these per installation. Calculators that the user
/// has marked as profile-aware (retirement, FIRE) read their starting values
/// from it and can write updated values back through the profile store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: u32,
    pub retirement_age: u32,
    pub annual_income: Decimal,
    pub current_savings: Decimal,
    pub monthly_contribution: Decimal,
    /// Safe withdrawal rate as a percentage (e.g. 4.0 for the "4% rule").
    pub safe_withdrawal_rate: Decimal,
}

impl UserProfile {
    /// Checks that the profile describes a plannable situation.
    ///
    /// The guards mirror the input clamping of the calculators that consume
    /// the profile: a retirement date in the past or a zero withdrawal rate
    /// would otherwise surface as a degenerate projection.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.retirement_age <= self.age {
            return Err(CoreError::InvalidInput(
                "retirement_age".to_string(),
                "must be greater than the current age".to_string(),
            ));
        }
        if self.annual_income < Decimal::ZERO
            || self.current_savings < Decimal::ZERO
            || self.monthly_contribution < Decimal::ZERO
        {
            return Err(CoreError::InvalidInput(
                "profile".to_string(),
                "money fields must not be negative".to_string(),
            ));
        }
        if self.safe_withdrawal_rate <= Decimal::ZERO
            || self.safe_withdrawal_rate > Decimal::ONE_HUNDRED
        {
            return Err(CoreError::InvalidInput(
                "safe_withdrawal_rate".to_string(),
                "must be a percentage in (0, 100]".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 30,
            retirement_age: 65,
            annual_income: dec!(60000),
            current_savings: dec!(20000),
            monthly_contribution: dec!(500),
            safe_withdrawal_rate: dec!(4.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_is_valid() {
        assert!(UserProfile::default().validate().is_ok());
    }

    #[test]
    fn rejects_retirement_in_the_past() {
        let profile = UserProfile {
            age: 65,
            retirement_age: 60,
            ..UserProfile::default()
        };
        assert!(profile.validate().is_err());
    }

    #[test]
    fn rejects_zero_withdrawal_rate() {
        let profile = UserProfile {
            safe_withdrawal_rate: Decimal::ZERO,
            ..UserProfile::default()
        };
        assert!(profile.validate().is_err());
    }
}
