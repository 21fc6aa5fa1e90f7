use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section (and every field) carries a default, so the application runs
/// without any configuration file at all.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub storage: Storage,
    #[serde(default)]
    pub projections: Projections,
    #[serde(default)]
    pub display: Display,
}

/// Where on-device state lives.
#[derive(Debug, Clone, Deserialize)]
pub struct Storage {
    /// Path of the JSON file holding the user profile.
    #[serde(default = "Storage::default_profile_file")]
    pub profile_file: PathBuf,
}

impl Storage {
    fn default_profile_file() -> PathBuf {
        PathBuf::from("smartcalc-profile.json")
    }
}

impl Default for Storage {
    fn default() -> Self {
        Self {
            profile_file: Self::default_profile_file(),
        }
    }
}

/// Fallback assumptions for the forward-looking calculators.
#[derive(Debug, Clone, Deserialize)]
pub struct Projections {
    /// Annual market return assumed when the user does not supply one.
    #[serde(default = "Projections::default_return_rate")]
    pub default_return_rate_pct: Decimal,
    /// Annual inflation assumed by inflation-adjusted targets.
    #[serde(default = "Projections::default_inflation_rate")]
    pub default_inflation_rate_pct: Decimal,
    /// Hard ceiling on projected years for open-ended simulations.
    #[serde(default = "Projections::default_max_years")]
    pub max_projection_years: u32,
}

impl Projections {
    fn default_return_rate() -> Decimal {
        dec!(7.0)
    }

    fn default_inflation_rate() -> Decimal {
        dec!(3.0)
    }

    fn default_max_years() -> u32 {
        50
    }
}

impl Default for Projections {
    fn default() -> Self {
        Self {
            default_return_rate_pct: Self::default_return_rate(),
            default_inflation_rate_pct: Self::default_inflation_rate(),
            max_projection_years: Self::default_max_years(),
        }
    }
}

/// How monetary values are rendered by the CLI.
#[derive(Debug, Clone, Deserialize)]
pub struct Display {
    #[serde(default = "Display::default_currency_symbol")]
    pub currency_symbol: String,
    #[serde(default = "Display::default_decimal_places")]
    pub decimal_places: u32,
}

impl Display {
    fn default_currency_symbol() -> String {
        "$".to_string()
    }

    fn default_decimal_places() -> u32 {
        2
    }
}

impl Default for Display {
    fn default() -> Self {
        Self {
            currency_symbol: Self::default_currency_symbol(),
            decimal_places: Self::default_decimal_places(),
        }
    }
}
