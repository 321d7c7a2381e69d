//! # pricer-cli
//!
//! Thin command-line shell around `pricer-core`.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Parse args (clap)                                                   │
//! │  2. Install tracing subscriber (stderr)                                 │
//! │  3. Load EstimatorConfig: defaults → TOML file → PRICER_* env           │
//! │  4. Quote the order                                                     │
//! │  5. Print "$1,591.58" or the JSON breakdown to stdout                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod logging;

use std::path::PathBuf;

use clap::Parser;
use pricer_core::Estimator;
use tracing::info;

pub use error::{AppError, AppResult};

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "pricer")]
#[command(about = "Estimate a quoted price with labour and category markups")]
pub struct Cli {
    /// Base price, e.g. "$1,299.99"
    pub base: String,

    /// Number of people required, e.g. "3 people"
    pub people: String,

    /// Product category, e.g. "food"
    pub category: String,

    /// Path to a TOML rate configuration file
    #[arg(short, long, env = "PRICER_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print the full quote breakdown as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Runs one estimate and returns what should be printed.
pub fn run(cli: &Cli) -> AppResult<String> {
    let config = config::load(cli.config.as_deref())?;
    let estimator = Estimator::new(config);

    let quote = estimator.quote(cli.base.as_str(), cli.people.as_str(), &cli.category);
    info!(
        category = %quote.category,
        fallback = quote.fallback_rate_applied,
        total = %quote.formatted_total,
        "Quote ready"
    );

    if cli.json {
        Ok(serde_json::to_string_pretty(&quote)?)
    } else {
        Ok(quote.formatted_total)
    }
}

/// The single line written to stderr when [`run`] fails.
pub fn failure_message(err: &AppError) -> String {
    format!("pricer: {}", err)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pricer").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_parses_positional_args() {
        let parsed = cli(&["$1,299.99", "3 people", "food", "--json"]);
        assert_eq!(parsed.base, "$1,299.99");
        assert_eq!(parsed.people, "3 people");
        assert_eq!(parsed.category, "food");
        assert!(parsed.json);
        assert!(!parsed.verbose);
    }

    #[test]
    fn test_missing_args_are_rejected() {
        assert!(Cli::try_parse_from(["pricer", "$100"]).is_err());
    }

    #[test]
    fn test_run_prints_json_breakdown() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("rates.toml");
        std::fs::write(&config_path, "[rates]\nfood = 0.13\nother = 0.0\n").unwrap();

        let mut parsed = cli(&["$1,000.00", "0 people", "food", "--json"]);
        parsed.config = Some(config_path);

        let output = run(&parsed).unwrap();
        let json: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(json["formatted_total"], "$1,186.50");
        assert_eq!(json["fallback_rate_applied"], false);
    }

    #[test]
    fn test_run_reports_bad_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("rates.toml");
        std::fs::write(&config_path, "flat_markup_rate = 3.0\n").unwrap();

        let mut parsed = cli(&["$100", "1", "food"]);
        parsed.config = Some(config_path);

        let err = run(&parsed).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert_eq!(
            failure_message(&err),
            "pricer: Invalid configuration: flat_markup_rate must be a rate in [0, 1), got 3"
        );
    }
}
