//! # Configuration Loading
//!
//! Builds an [`EstimatorConfig`] from a TOML file and `PRICER_*` environment
//! variables.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     PRICER_LABOUR_RATE=0.015                                           │
//! │     PRICER_FLAT_MARKUP_RATE=0.05                                       │
//! │     PRICER_CURRENCY_SYMBOL=€                                           │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH> or PRICER_CONFIG                                   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     5% flat, 1.2% labour per person, standard category table          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The category table itself only comes from the file; there is no env
//! override for individual categories.

use std::path::Path;

use pricer_core::EstimatorConfig;
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

/// Overrides the per-person labour rate.
pub const LABOUR_RATE_ENV: &str = "PRICER_LABOUR_RATE";

/// Overrides the flat markup rate.
pub const FLAT_MARKUP_RATE_ENV: &str = "PRICER_FLAT_MARKUP_RATE";

/// Overrides the currency symbol.
pub const CURRENCY_SYMBOL_ENV: &str = "PRICER_CURRENCY_SYMBOL";

/// Loads configuration from file, environment, and defaults.
///
/// ## Load Order (later overrides earlier)
/// 1. Default values
/// 2. Config file, if a path is given and it exists
/// 3. Environment variables
pub fn load(config_path: Option<&Path>) -> AppResult<EstimatorConfig> {
    load_with_env(config_path, |key| std::env::var(key).ok())
}

/// Same as [`load`], reading overrides through `env` instead of the process
/// environment.
pub fn load_with_env<F>(config_path: Option<&Path>, env: F) -> AppResult<EstimatorConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match config_path {
        Some(path) if path.exists() => read_config_file(path)?,
        Some(path) => {
            warn!(?path, "Config file not found, using defaults");
            EstimatorConfig::default()
        }
        None => {
            debug!("No config file given, using defaults");
            EstimatorConfig::default()
        }
    };

    apply_env_overrides(&mut config, env);
    config.validate()?;

    Ok(config)
}

fn read_config_file(path: &Path) -> AppResult<EstimatorConfig> {
    info!(?path, "Loading rate config from file");

    let contents = std::fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(toml::from_str(&contents)?)
}

/// Applies environment variable overrides.
///
/// Values that do not parse are logged and skipped, the same way a bad
/// category falls back instead of failing.
fn apply_env_overrides<F>(config: &mut EstimatorConfig, env: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(raw) = env(LABOUR_RATE_ENV) {
        match raw.trim().parse::<f64>() {
            Ok(rate) => {
                debug!(rate, "Overriding labour rate from environment");
                config.labour_rate = rate;
            }
            Err(_) => warn!(value = %raw, "Ignoring unparseable {}", LABOUR_RATE_ENV),
        }
    }

    if let Some(raw) = env(FLAT_MARKUP_RATE_ENV) {
        match raw.trim().parse::<f64>() {
            Ok(rate) => {
                debug!(rate, "Overriding flat markup rate from environment");
                config.flat_markup_rate = rate;
            }
            Err(_) => warn!(value = %raw, "Ignoring unparseable {}", FLAT_MARKUP_RATE_ENV),
        }
    }

    if let Some(symbol) = env(CURRENCY_SYMBOL_ENV) {
        debug!(symbol = %symbol, "Overriding currency symbol from environment");
        config.currency_symbol = symbol;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::io::Write;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults_without_file() {
        let config = load_with_env(None, no_env).unwrap();
        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let config = load_with_env(Some(path.as_path()), no_env).unwrap();
        assert_eq!(config, EstimatorConfig::default());
    }

    #[test]
    fn test_loads_rates_from_file() {
        let file = write_config(
            r#"
            flat_markup_rate = 0.085

            [rates]
            food = 0.07
            electronics = 0.05
            drugs = 0.03
            other = 0.02
            "#,
        );

        let config = load_with_env(Some(file.path()), no_env).unwrap();
        assert_eq!(config.flat_markup_rate, 0.085);
        assert_eq!(config.labour_rate, 0.012);
        assert_eq!(config.rates.rate_for("vehicle"), 0.02);
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let file = write_config("flat_markup_rate = \"lots\"");
        let result = load_with_env(Some(file.path()), no_env);
        assert!(matches!(result, Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn test_table_without_other_is_an_error() {
        let file = write_config("[rates]\nfood = 0.07\n");
        let result = load_with_env(Some(file.path()), no_env);
        assert!(matches!(result, Err(AppError::ConfigParse(_))));
    }

    #[test]
    fn test_env_overrides_file() {
        let file = write_config("labour_rate = 0.02\n");
        let env: HashMap<&str, &str> = [
            (LABOUR_RATE_ENV, "0.015"),
            (CURRENCY_SYMBOL_ENV, "€"),
        ]
        .into_iter()
        .collect();

        let config =
            load_with_env(Some(file.path()), |key| env.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(config.labour_rate, 0.015);
        assert_eq!(config.currency_symbol, "€");
        assert_eq!(config.flat_markup_rate, 0.05);
    }

    #[test]
    fn test_unparseable_env_is_ignored() {
        let config = load_with_env(None, |key| {
            (key == FLAT_MARKUP_RATE_ENV).then(|| "five percent".to_string())
        })
        .unwrap();
        assert_eq!(config.flat_markup_rate, 0.05);
    }

    #[test]
    fn test_out_of_range_env_fails_validation() {
        let result = load_with_env(None, |key| {
            (key == LABOUR_RATE_ENV).then(|| "1.2".to_string())
        });
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}
