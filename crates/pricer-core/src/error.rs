//! # Error Types
//!
//! Error types for pricer-core.
//!
//! ## Where Errors Can Happen
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Failure Surface                                 │
//! │                                                                         │
//! │  Building configuration (this file)                                    │
//! │  └── ConfigError      - Rate table / scalar rate problems              │
//! │                                                                         │
//! │  Estimating a price                                                     │
//! │  └── (none)           - Bad input is substituted, never rejected       │
//! │                                                                         │
//! │  pricer-cli (separate crate)                                           │
//! │  └── AppError         - File, TOML and output failures                 │
//! │                                                                         │
//! │  Flow: ConfigError → AppError → exit code                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field and value in messages
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Configuration errors.
///
/// A configuration is checked once, when it is built or loaded. After that
/// the estimator has nothing left that can fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// The rate table has no `"other"` entry.
    ///
    /// ## Why This Is Fatal
    /// Every unknown category is priced at the `"other"` rate. Without it
    /// the lookup would have nothing to fall back to.
    #[error("Rate table must define an \"{category}\" rate")]
    MissingFallbackRate { category: &'static str },

    /// A rate is negative, not finite, or 100% or more.
    #[error("{field} must be a rate in [0, 1), got {value}")]
    RateOutOfRange { field: String, value: f64 },

    /// A rate table key is empty after trimming.
    #[error("Rate table contains an empty category name")]
    EmptyCategory,

    /// The currency symbol is empty.
    #[error("Currency symbol must not be empty")]
    EmptyCurrencySymbol,
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ConfigError.
pub type CoreResult<T> = Result<T, ConfigError>;

// =============================================================================
// Unit Tests
// =============================================================================
