//! # pricer-core: Pure Estimation Logic for Pricer
//!
//! This crate turns three loosely formatted inputs (a base price, a head
//! count and a product category) into a quoted price string. Everything in
//! here is a pure function with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Pricer Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    pricer-cli (binary)                          │   │
//! │  │     args ──► config.toml + PRICER_* env ──► stdout / JSON       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ EstimatorConfig                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ pricer-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐ ┌────────┐  │   │
//! │  │   │  parse  │ │  rates  │ │ markup  │ │ rounding │ │ format │  │   │
//! │  │   └────┬────┘ └────┬────┘ └────┬────┘ └────┬─────┘ └───┬────┘  │   │
//! │  │        └───────────┴─────┬─────┴───────────┴───────────┘       │   │
//! │  │                     ┌────▼─────┐                               │   │
//! │  │                     │ estimate │                               │   │
//! │  │                     └──────────┘                               │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • NEVER FAILS ON BAD INPUT           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`parse`] - Lenient number extraction from user input
//! - [`rates`] - Category rate table with an `"other"` fallback
//! - [`markup`] - Labour, flat and product-type markup arithmetic
//! - [`rounding`] - Cent rounding that survives binary float error
//! - [`format`] - Thousands separators and currency rendering
//! - [`estimate`] - The end-to-end estimator and its [`Quote`] breakdown
//! - [`config`] - Explicit estimator configuration
//! - [`error`] - Configuration error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: same input = same output, no hidden state
//! 2. **Substitute, Don't Reject**: garbage numbers become `0`, unknown
//!    categories take the `"other"` rate
//! 3. **Round Per Step**: every markup is rounded to cents before summing
//! 4. **Typed Config Errors**: only building a configuration can fail
//!
//! ## Example Usage
//!
//! ```rust
//! use pricer_core::{Estimator, EstimatorConfig};
//!
//! let estimator = Estimator::new(EstimatorConfig::default());
//!
//! assert_eq!(estimator.estimate_price("$1,299.99", "3 people", "food"), "$1,591.58");
//! assert_eq!(estimator.estimate_price("$5,432.00", "1 person", "drugs"), "$6,199.81");
//!
//! // Unknown categories fall back to the "other" rate
//! assert_eq!(estimator.estimate_price("$12,456.95", "4 people", "books"), "$13,707.63");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod estimate;
pub mod format;
pub mod markup;
pub mod parse;
pub mod rates;
pub mod rounding;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use config::EstimatorConfig;
pub use error::{ConfigError, CoreResult};
pub use estimate::{estimate_price, Estimator, Quote};
pub use format::{format_number_string_with_commas, format_price_result};
pub use markup::{flat_markup, labour_cost, product_type_markup, single_person_labour_cost};
pub use parse::{parse_base_price, parse_people_count, strip_thousands_separators, RawValue};
pub use rates::{find_product_type_rate, RateTable};
pub use rounding::round_to_two_decimal_places;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Category key every rate table must define.
///
/// Any category missing from the table is priced at this entry's rate.
pub const OTHER_CATEGORY: &str = "other";

/// Default labour rate charged per person working on an order (1.2%).
pub const DEFAULT_LABOUR_RATE: f64 = 0.012;

/// Default flat markup applied to every order (5%).
pub const DEFAULT_FLAT_MARKUP_RATE: f64 = 0.05;

/// Default currency symbol for rendered quotes.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";
