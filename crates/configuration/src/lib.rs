use rust_decimal::Decimal;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean, public API.
pub use error::ConfigError;
pub use settings::{Config, Display, Projections, Storage};

/// Loads the application configuration.
///
/// Sources, in ascending precedence:
/// 1. Built-in defaults (every field has one).
/// 2. An optional `smartcalc.toml` in the working directory.
/// 3. Environment variables prefixed with `SMARTCALC_`
///    (e.g. `SMARTCALC_STORAGE__PROFILE_FILE`).
pub fn load_config() -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::with_name("smartcalc").required(false))
        .add_source(
            config::Environment::with_prefix("SMARTCALC")
                .separator("__"),
        )
        .build()?;

    // Attempt to deserialize the entire configuration into our `Config` struct
    let config = builder.try_deserialize::<Config>()?;
    validate(&config)?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Rejects configurations that would make the projection loops degenerate.
fn validate(config: &Config) -> Result<(), ConfigError> {
    let projections = &config.projections;
    if projections.max_projection_years == 0 || projections.max_projection_years > 100 {
        return Err(ConfigError::ValidationError(
            "projections.max_projection_years must be between 1 and 100".to_string(),
        ));
    }
    if projections.default_return_rate_pct < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "projections.default_return_rate_pct must not be negative".to_string(),
        ));
    }
    if projections.default_inflation_rate_pct < Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "projections.default_inflation_rate_pct must not be negative".to_string(),
        ));
    }
    if config.display.decimal_places > 6 {
        return Err(ConfigError::ValidationError(
            "display.decimal_places must be at most 6".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(validate(&config).is_ok());
        assert_eq!(config.projections.default_return_rate_pct, dec!(7.0));
        assert_eq!(config.projections.max_projection_years, 50);
        assert_eq!(config.display.currency_symbol, "$");
    }

    #[test]
    fn rejects_zero_projection_ceiling() {
        let mut config = Config::default();
        config.projections.max_projection_years = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn rejects_negative_default_return() {
        let mut config = Config::default();
        config.projections.default_return_rate_pct = dec!(-1);
        assert!(validate(&config).is_err());
    }
}
