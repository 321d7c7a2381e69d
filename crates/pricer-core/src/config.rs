//! # Estimator Configuration
//!
//! Every rate the estimator uses lives in one explicit struct. Nothing is
//! read from globals or the environment here; loading a configuration from
//! disk is the caller's job (see `pricer-cli`).
//!
//! ## TOML Shape
//! ```toml
//! labour_rate = 0.012
//! flat_markup_rate = 0.05
//! currency_symbol = "$"
//!
//! [rates]
//! food = 0.13
//! drugs = 0.075
//! electronics = 0.02
//! other = 0.0
//! ```
//!
//! Omitted fields take their defaults. If `[rates]` is given, it must
//! contain `other`.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreResult};
use crate::rates::{check_rate, RateTable};
use crate::{DEFAULT_CURRENCY_SYMBOL, DEFAULT_FLAT_MARKUP_RATE, DEFAULT_LABOUR_RATE};

/// Rates and display settings for an [`Estimator`](crate::Estimator).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EstimatorConfig {
    /// Labour rate per person working on the order.
    pub labour_rate: f64,

    /// Markup applied to every order before anything else.
    pub flat_markup_rate: f64,

    /// Symbol placed in front of formatted totals.
    pub currency_symbol: String,

    /// Category markup rates, with the `"other"` fallback.
    pub rates: RateTable,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            labour_rate: DEFAULT_LABOUR_RATE,
            flat_markup_rate: DEFAULT_FLAT_MARKUP_RATE,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            rates: RateTable::default(),
        }
    }
}

impl EstimatorConfig {
    /// Default configuration with a custom rate table.
    pub fn with_rates(rates: RateTable) -> Self {
        EstimatorConfig {
            rates,
            ..Self::default()
        }
    }

    /// Validates the scalar settings.
    ///
    /// The rate table validates itself on construction, so only the fields
    /// that can be assigned freely are checked here.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::EstimatorConfig;
    ///
    /// let mut config = EstimatorConfig::default();
    /// assert!(config.validate().is_ok());
    ///
    /// config.labour_rate = 1.5;
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> CoreResult<()> {
        check_rate("labour_rate", self.labour_rate)?;
        check_rate("flat_markup_rate", self.flat_markup_rate)?;

        if self.currency_symbol.trim().is_empty() {
            return Err(ConfigError::EmptyCurrencySymbol);
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
