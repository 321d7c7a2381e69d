//! Tracing subscriber setup for the `pricer` binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset.
const QUIET_FILTER: &str = "warn,pricer_cli=info";

/// Default filter with `--verbose`.
const VERBOSE_FILTER: &str = "info,pricer_core=debug,pricer_cli=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show every parsed input and intermediate amount
/// - `RUST_LOG=pricer_core=trace` - Core crate only
/// - Default: warnings, plus CLI info with `--verbose` raising it to debug
///
/// Logs go to stderr so stdout carries only the quote.
pub fn init(verbose: bool) {
    let default_filter = if verbose { VERBOSE_FILTER } else { QUIET_FILTER };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

// =============================================================================
// Unit Tests
// =============================================================================
