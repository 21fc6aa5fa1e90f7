use serde::{Deserialize, Serialize};

/// The measurement system a user enters body metrics in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    Metric,
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

/// How much cushion a household wants in its emergency fund.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTolerance {
    Low,
    Medium,
    High,
}

impl RiskTolerance {
    /// Months of expenses the emergency fund should cover at this tolerance.
    pub fn target_months(&self) -> u32 {
        match self {
            RiskTolerance::Low => 3,
            RiskTolerance::Medium => 6,
            RiskTolerance::High => 9,
        }
    }
}

/// The ordering rule a debt payoff plan uses to prioritize debts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayoffStrategy {
    /// Smallest balance first. Wins on motivation.
    Snowball,
    /// Highest interest rate first. Wins on total interest.
    Avalanche,
}
