//! Configuration management for simbld_passgen
//!
//! Loads generator limits from `PASSGEN_*` environment variables (a `.env` file
//! is picked up when present) and falls back to defaults for anything unset.

use crate::types::{GeneratorConfig, PasswordError};
use config::{Config, Environment};
use std::collections::HashMap;

/// Prefix shared by every environment variable read here
pub const ENV_PREFIX: &str = "PASSGEN";

/// Load generator configuration from the process environment
pub fn load_config() -> Result<GeneratorConfig, PasswordError> {
    dotenvy::dotenv().ok();
    build_config(None)
}

/// Load generator configuration from an explicit variable map instead of the
/// process environment
pub fn load_config_from(vars: HashMap<String, String>) -> Result<GeneratorConfig, PasswordError> {
    build_config(Some(vars))
}

fn build_config(vars: Option<HashMap<String, String>>) -> Result<GeneratorConfig, PasswordError> {
    let defaults = GeneratorConfig::default();

    let config = Config::builder()
        .set_default("max_attempts", i64::from(defaults.max_attempts))
        .and_then(|builder| builder.set_default("max_redraws", i64::from(defaults.max_redraws)))
        .map_err(config_error)?
        .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true).source(vars))
        .build()
        .map_err(config_error)?
        .try_deserialize::<GeneratorConfig>()
        .map_err(config_error)?;

    validate_config(&config)?;
    Ok(config)
}

fn config_error(err: config::ConfigError) -> PasswordError {
    PasswordError::Config {
        message: err.to_string(),
    }
}

/// Validate configuration values
fn validate_config(config: &GeneratorConfig) -> Result<(), PasswordError> {
    if config.max_attempts == 0 {
        return Err(PasswordError::Config {
            message: "max_attempts must be at least 1".to_string(),
        });
    }

    if config.max_redraws == 0 {
        return Err(PasswordError::Config {
            message: "max_redraws must be at least 1".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = load_config_from(HashMap::new()).expect("Failed to load config");
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_overrides_from_vars() {
        let config = load_config_from(vars(&[
            ("PASSGEN_MAX_ATTEMPTS", "25"),
            ("PASSGEN_MAX_REDRAWS", "8"),
        ]))
        .expect("Failed to load config");

        assert_eq!(config.max_attempts, 25);
        assert_eq!(config.max_redraws, 8);
    }

    #[test]
    fn test_unrelated_vars_ignored() {
        let config = load_config_from(vars(&[("OTHER_MAX_ATTEMPTS", "3")]))
            .expect("Failed to load config");
        assert_eq!(config.max_attempts, GeneratorConfig::default().max_attempts);
    }

    #[test]
    fn test_zero_attempts_rejected() {
        let result = load_config_from(vars(&[("PASSGEN_MAX_ATTEMPTS", "0")]));
        assert!(matches!(result, Err(PasswordError::Config { .. })));
    }

    #[test]
    fn test_non_numeric_rejected() {
        let result = load_config_from(vars(&[("PASSGEN_MAX_REDRAWS", "lots")]));
        assert!(matches!(result, Err(PasswordError::Config { .. })));
    }
}
