//! # SmartCalc Finance Library
//!
//! This crate contains the financial projection engines for the SmartCalc
//! suite: loan amortization, compound-growth projections, the debt payoff
//! simulation, the FIRE crossover search, and the rent-vs-buy comparison.
//!
//! ## Architectural Principles
//!
//! - **Pure logic crate:** Every calculator is a stateless function from a
//!   validated inputs struct to an outcome struct. There is no IO here; the
//!   binary owns rendering and persistence, this crate owns arithmetic.
//! - **Decimal money math:** All currency values are `rust_decimal::Decimal`.
//!   Floating point never touches a dollar amount.
//! - **Bounded iteration:** The open-ended searches (debt payoff, time to
//!   $1M) carry hard month caps so degenerate inputs terminate.
//!
//! ## Public API
//!
//! One module per calculator, each exposing an `*Inputs` struct, an
//! `*Outcome` struct, and a single entry point (`plan`, `project`, or
//! `compare`). The shared annuity engine used by the loan calculators lives
//! in [`annuity`].

// Declare all the modules that constitute this crate.
pub mod annuity;
pub mod auto_loan;
pub mod debt_payoff;
pub mod emergency_fund;
pub mod error;
pub mod fire;
pub mod investment;
pub mod millionaire;
pub mod mortgage;
pub mod rent_vs_buy;
pub mod retirement;

// Re-export the key components to create a clean, public-facing API.
pub use annuity::{AmortizationPoint, AmortizationSummary};
pub use auto_loan::{AutoLoanInputs, AutoLoanOutcome};
pub use debt_payoff::{Debt, DebtPayoffInputs, DebtPayoffOutcome};
pub use emergency_fund::{EmergencyFundInputs, EmergencyFundOutcome};
pub use error::FinanceError;
pub use fire::{FireInputs, FireOutcome};
pub use investment::{GrowthPoint, InvestmentInputs, InvestmentOutcome};
pub use millionaire::{MillionaireInputs, MillionaireOutcome};
pub use mortgage::{MortgageInputs, MortgageOutcome};
pub use rent_vs_buy::{RentVsBuyInputs, RentVsBuyOutcome};
pub use retirement::{RetirementInputs, RetirementOutcome};

// Re-export the strategy enum consumers need to build payoff inputs.
pub use core_types::PayoffStrategy;
