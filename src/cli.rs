use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use core_types::{PayoffStrategy, RiskTolerance, Sex, UnitSystem};
use finance::Debt;
use health::{ActivityLevel, DietPlan, Goal, OneRmFormula};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Financial and health calculators for decisions that matter.
#[derive(Parser)]
#[command(name = "smartcalc", author, version, about, long_about = None)]
pub struct Cli {
    /// Emit the raw result as JSON instead of formatted tables.
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Amortize a fixed-rate mortgage.
    Mortgage(MortgageArgs),
    /// Amortize an auto loan with sales tax and trade-in.
    AutoLoan(AutoLoanArgs),
    /// Project compound growth with monthly contributions.
    Investment(InvestmentArgs),
    /// Project retirement savings from now to the retirement age.
    Retirement(RetirementArgs),
    /// Find how long until a portfolio reaches $1,000,000.
    Millionaire(MillionaireArgs),
    /// Size an emergency fund for a risk tolerance.
    EmergencyFund(EmergencyFundArgs),
    /// Simulate paying off a set of debts with a snowball or avalanche plan.
    DebtPayoff(DebtPayoffArgs),
    /// Find the financial-independence crossover year.
    Fire(FireArgs),
    /// Compare the net-worth trajectories of renting versus buying.
    RentVsBuy(RentVsBuyArgs),
    /// Compute and classify body mass index.
    Bmi(BmiArgs),
    /// Compute BMR and daily calorie needs (Mifflin-St Jeor).
    Calories(CaloriesArgs),
    /// Compute a daily protein/carb/fat split for a goal and diet.
    Macros(MacrosArgs),
    /// Estimate a one-rep max and its training percentages.
    OneRepMax(OneRepMaxArgs),
    /// Inspect or edit the stored user profile.
    Profile {
        #[command(subcommand)]
        command: ProfileCommands,
    },
    /// Browse the built-in articles.
    Blog {
        #[command(subcommand)]
        command: BlogCommands,
    },
}

// ==============================================================================
// Shared value enums
// ==============================================================================
// The library crates stay clap-free; these mirror their enums for argument
// parsing and convert with `From`.

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitsArg {
    Metric,
    Imperial,
}

impl From<UnitsArg> for UnitSystem {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Metric => UnitSystem::Metric,
            UnitsArg::Imperial => UnitSystem::Imperial,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SexArg {
    Male,
    Female,
}

impl From<SexArg> for Sex {
    fn from(arg: SexArg) -> Self {
        match arg {
            SexArg::Male => Sex::Male,
            SexArg::Female => Sex::Female,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum RiskArg {
    Low,
    Medium,
    High,
}

impl From<RiskArg> for RiskTolerance {
    fn from(arg: RiskArg) -> Self {
        match arg {
            RiskArg::Low => RiskTolerance::Low,
            RiskArg::Medium => RiskTolerance::Medium,
            RiskArg::High => RiskTolerance::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Snowball,
    Avalanche,
}

impl From<StrategyArg> for PayoffStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Snowball => PayoffStrategy::Snowball,
            StrategyArg::Avalanche => PayoffStrategy::Avalanche,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ActivityArg {
    Sedentary,
    Light,
    Moderate,
    Heavy,
    Athlete,
}

impl From<ActivityArg> for ActivityLevel {
    fn from(arg: ActivityArg) -> Self {
        match arg {
            ActivityArg::Sedentary => ActivityLevel::Sedentary,
            ActivityArg::Light => ActivityLevel::Light,
            ActivityArg::Moderate => ActivityLevel::Moderate,
            ActivityArg::Heavy => ActivityLevel::Heavy,
            ActivityArg::Athlete => ActivityLevel::Athlete,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GoalArg {
    Lose,
    Maintain,
    Gain,
}

impl From<GoalArg> for Goal {
    fn from(arg: GoalArg) -> Self {
        match arg {
            GoalArg::Lose => Goal::Lose,
            GoalArg::Maintain => Goal::Maintain,
            GoalArg::Gain => Goal::Gain,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum DietArg {
    Balanced,
    LowCarb,
    HighProtein,
    Keto,
}

impl From<DietArg> for DietPlan {
    fn from(arg: DietArg) -> Self {
        match arg {
            DietArg::Balanced => DietPlan::Balanced,
            DietArg::LowCarb => DietPlan::LowCarb,
            DietArg::HighProtein => DietPlan::HighProtein,
            DietArg::Keto => DietPlan::Keto,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FormulaArg {
    Epley,
    Brzycki,
}

impl From<FormulaArg> for OneRmFormula {
    fn from(arg: FormulaArg) -> Self {
        match arg {
            FormulaArg::Epley => OneRmFormula::Epley,
            FormulaArg::Brzycki => OneRmFormula::Brzycki,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CategoryArg {
    Finance,
    Health,
}

impl From<CategoryArg> for content::Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Finance => content::Category::Finance,
            CategoryArg::Health => content::Category::Health,
        }
    }
}

// ==============================================================================
// Finance commands
// ==============================================================================

#[derive(Args)]
pub struct MortgageArgs {
    /// Purchase price of the home.
    #[arg(long)]
    pub home_price: Decimal,

    /// Cash paid up front.
    #[arg(long)]
    pub down_payment: Decimal,

    /// Annual interest rate, percent.
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in years.
    #[arg(long, default_value_t = 30)]
    pub term_years: u32,
}

#[derive(Args)]
pub struct AutoLoanArgs {
    /// Sticker price of the vehicle.
    #[arg(long)]
    pub price: Decimal,

    /// Cash paid up front.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub down_payment: Decimal,

    /// Trade-in credit.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub trade_in: Decimal,

    /// Annual interest rate, percent. 0 is valid (promotional financing).
    #[arg(long)]
    pub rate: Decimal,

    /// Loan term in months.
    #[arg(long, default_value_t = 60)]
    pub term_months: u32,

    /// Sales tax on the vehicle price, percent.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub sales_tax: Decimal,
}

#[derive(Args)]
pub struct InvestmentArgs {
    /// Starting balance.
    #[arg(long)]
    pub initial: Decimal,

    /// Contribution deposited at the start of each month.
    #[arg(long)]
    pub monthly: Decimal,

    /// Expected annual return, percent (defaults to configuration).
    #[arg(long)]
    pub return_rate: Option<Decimal>,

    /// Projection length in years.
    #[arg(long, default_value_t = 20)]
    pub years: u32,
}

#[derive(Args)]
pub struct RetirementArgs {
    /// Current age (defaults to the stored profile).
    #[arg(long)]
    pub age: Option<u32>,

    /// Planned retirement age (defaults to the stored profile).
    #[arg(long)]
    pub retirement_age: Option<u32>,

    /// Savings already set aside (defaults to the stored profile).
    #[arg(long)]
    pub current_savings: Option<Decimal>,

    /// Monthly contribution (defaults to the stored profile).
    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Expected annual return, percent (defaults to configuration).
    #[arg(long)]
    pub return_rate: Option<Decimal>,

    /// Write the values used back to the stored profile.
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct MillionaireArgs {
    /// Current portfolio balance.
    #[arg(long)]
    pub balance: Decimal,

    /// Contribution deposited at the start of each month.
    #[arg(long)]
    pub monthly: Decimal,

    /// Expected annual return, percent (defaults to configuration).
    #[arg(long)]
    pub return_rate: Option<Decimal>,
}

#[derive(Args)]
pub struct EmergencyFundArgs {
    /// Essential monthly expenses (rent, food, utilities).
    #[arg(long)]
    pub essential: Decimal,

    /// Optional monthly expenses that could be cut in a pinch.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub optional: Decimal,

    /// Savings already earmarked for emergencies.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub savings: Decimal,

    /// Risk tolerance: how many months of cushion to target.
    #[arg(long, value_enum, default_value = "medium")]
    pub risk: RiskArg,
}

#[derive(Args)]
pub struct DebtPayoffArgs {
    /// A debt as `name:balance:rate:minimum`, e.g. `visa:5000:18.9:100`.
    /// Repeat for each debt.
    #[arg(long = "debt", value_parser = parse_debt, required = true)]
    pub debts: Vec<Debt>,

    /// Monthly budget on top of the minimum payments.
    #[arg(long, default_value_t = Decimal::ZERO)]
    pub extra: Decimal,

    /// Which debt the snowball hits first.
    #[arg(long, value_enum, default_value = "snowball")]
    pub strategy: StrategyArg,

    /// Plan start date for the projected payoff date (defaults to today).
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
}

#[derive(Args)]
pub struct FireArgs {
    /// Current age (defaults to the stored profile).
    #[arg(long)]
    pub age: Option<u32>,

    /// Current net worth (defaults to the stored profile's savings).
    #[arg(long)]
    pub net_worth: Option<Decimal>,

    /// Post-tax annual income (defaults to the stored profile).
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Annual spending (defaults to profile income minus contributions).
    #[arg(long)]
    pub spending: Option<Decimal>,

    /// Expected annual return, percent (defaults to configuration).
    #[arg(long)]
    pub return_rate: Option<Decimal>,

    /// Safe withdrawal rate, percent (defaults to the stored profile).
    #[arg(long)]
    pub swr: Option<Decimal>,

    /// Grow the FIRE target with inflation.
    #[arg(long)]
    pub adjust_inflation: bool,

    /// Inflation rate, percent. Implies --adjust-inflation.
    #[arg(long)]
    pub inflation_rate: Option<Decimal>,

    /// Projection horizon in years (defaults to configuration).
    #[arg(long)]
    pub years: Option<u32>,

    /// Write the values used back to the stored profile.
    #[arg(long)]
    pub save: bool,
}

#[derive(Args)]
pub struct RentVsBuyArgs {
    /// Purchase price of the home.
    #[arg(long)]
    pub home_price: Decimal,

    /// Cash paid up front.
    #[arg(long)]
    pub down_payment: Decimal,

    /// Mortgage rate, annual percent.
    #[arg(long)]
    pub rate: Decimal,

    /// Mortgage term in years.
    #[arg(long, default_value_t = 30)]
    pub term_years: u32,

    /// One-time purchase closing costs, percent of the home price.
    #[arg(long, default_value_t = dec!(3))]
    pub buying_closing_costs: Decimal,

    /// Eventual selling costs, percent of the home value.
    #[arg(long, default_value_t = dec!(6))]
    pub selling_closing_costs: Decimal,

    /// Annual maintenance, percent of the home value.
    #[arg(long, default_value_t = dec!(1))]
    pub maintenance: Decimal,

    /// Annual home appreciation, percent.
    #[arg(long, default_value_t = dec!(3))]
    pub appreciation: Decimal,

    /// Current monthly rent for a comparable home.
    #[arg(long)]
    pub rent: Decimal,

    /// Annual rent increase, percent.
    #[arg(long, default_value_t = dec!(3))]
    pub rent_increase: Decimal,

    /// Monthly renter's insurance.
    #[arg(long, default_value_t = dec!(15))]
    pub renters_insurance: Decimal,

    /// Return on the renter's invested savings, annual percent (defaults to
    /// configuration).
    #[arg(long)]
    pub investment_return: Option<Decimal>,

    /// Comparison horizon in years.
    #[arg(long, default_value_t = 30)]
    pub horizon: u32,
}

// ==============================================================================
// Health commands
// ==============================================================================

/// Body measurements in either unit system.
#[derive(Args)]
pub struct BodyArgs {
    #[arg(long, value_enum, default_value = "metric")]
    pub units: UnitsArg,

    /// Height in centimeters (metric).
    #[arg(long)]
    pub height_cm: Option<f64>,

    /// Weight in kilograms (metric).
    #[arg(long)]
    pub weight_kg: Option<f64>,

    /// Height: feet component (imperial).
    #[arg(long)]
    pub feet: Option<f64>,

    /// Height: inches component (imperial).
    #[arg(long)]
    pub inches: Option<f64>,

    /// Weight in pounds (imperial).
    #[arg(long)]
    pub pounds: Option<f64>,
}

#[derive(Args)]
pub struct BmiArgs {
    #[command(flatten)]
    pub body: BodyArgs,
}

#[derive(Args)]
pub struct CaloriesArgs {
    #[arg(long, value_enum)]
    pub sex: SexArg,

    #[arg(long)]
    pub age: u32,

    #[command(flatten)]
    pub body: BodyArgs,

    #[arg(long, value_enum, default_value = "moderate")]
    pub activity: ActivityArg,
}

#[derive(Args)]
pub struct MacrosArgs {
    #[command(flatten)]
    pub calories: CaloriesArgs,

    #[arg(long, value_enum, default_value = "maintain")]
    pub goal: GoalArg,

    #[arg(long, value_enum, default_value = "balanced")]
    pub diet: DietArg,
}

#[derive(Args)]
pub struct OneRepMaxArgs {
    /// Weight lifted.
    #[arg(long)]
    pub weight: f64,

    /// Reps completed with that weight (1-30).
    #[arg(long)]
    pub reps: u32,

    #[arg(long, value_enum, default_value = "epley")]
    pub formula: FormulaArg,
}

// ==============================================================================
// Profile and blog commands
// ==============================================================================

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Print the stored profile.
    Show,
    /// Overlay the given fields onto the stored profile.
    Set(ProfileSetArgs),
    /// Restore the default profile.
    Reset,
}

#[derive(Args)]
pub struct ProfileSetArgs {
    #[arg(long)]
    pub age: Option<u32>,

    #[arg(long)]
    pub retirement_age: Option<u32>,

    #[arg(long)]
    pub annual_income: Option<Decimal>,

    #[arg(long)]
    pub current_savings: Option<Decimal>,

    #[arg(long)]
    pub monthly_contribution: Option<Decimal>,

    /// Safe withdrawal rate, percent.
    #[arg(long)]
    pub safe_withdrawal_rate: Option<Decimal>,
}

#[derive(Subcommand)]
pub enum BlogCommands {
    /// List the articles, newest first.
    List {
        /// Only show one category.
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,
    },
    /// Print one article by its slug.
    Show {
        slug: String,
    },
}

/// Parses a `name:balance:rate:minimum` debt description.
fn parse_debt(s: &str) -> Result<Debt, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let [name, balance, rate, minimum] = parts.as_slice() else {
        return Err(format!(
            "expected `name:balance:rate:minimum`, got `{s}`"
        ));
    };
    if name.is_empty() {
        return Err("debt name must not be empty".to_string());
    }
    let number = |field: &str, raw: &str| -> Result<Decimal, String> {
        raw.parse()
            .map_err(|_| format!("invalid {field} `{raw}` in `{s}`"))
    };
    Ok(Debt {
        name: name.to_string(),
        balance: number("balance", balance)?,
        annual_rate_pct: number("rate", rate)?,
        minimum_payment: number("minimum payment", minimum)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn parses_a_debt_description() {
        let debt = parse_debt("visa:5000:18.9:100").unwrap();
        assert_eq!(debt.name, "visa");
        assert_eq!(debt.balance, dec!(5000));
        assert_eq!(debt.annual_rate_pct, dec!(18.9));
        assert_eq!(debt.minimum_payment, dec!(100));
    }

    #[test]
    fn rejects_malformed_debt_descriptions() {
        assert!(parse_debt("visa:5000:18.9").is_err());
        assert!(parse_debt(":5000:18.9:100").is_err());
        assert!(parse_debt("visa:abc:18.9:100").is_err());
        assert!(parse_debt("visa:5000:18.9:100:extra").is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
