//! # Estimate Module
//!
//! The end-to-end estimator: raw strings in, currency string out.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "$1,299.99"  "3 people"  "food"                                        │
//! │       │            │         │                                          │
//! │       ▼            ▼         ▼                                          │
//! │  parse_base   parse_people  rates.rate_for                              │
//! │    1299.99         3          0.13                                      │
//! │       │            │         │                                          │
//! │       ▼            │         │                                          │
//! │  + flat_markup ──► marked-up price 1364.99                              │
//! │                    │         │                                          │
//! │                    ├──► labour_cost ──────────► 49.14                   │
//! │                    └──► product_type_markup ──► 177.45                  │
//! │                                                                         │
//! │  total = marked + labour + product ──► round ──► "$1,591.58"            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Nothing in this module can fail. Unparseable amounts count as zero and
//! unknown categories take the `"other"` rate.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::EstimatorConfig;
use crate::format::format_price_with_symbol;
use crate::markup::{flat_markup, labour_cost, product_type_markup};
use crate::parse::{parse_base_price, parse_people_count, RawValue};
use crate::rounding::round_to_two_decimal_places;

// =============================================================================
// Quote
// =============================================================================

/// Itemised result of one estimate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Base price as parsed from the input.
    pub base_price: f64,

    /// Head count as parsed from the input.
    pub people: u32,

    /// Category as given by the caller.
    pub category: String,

    /// Markup rate applied for the category.
    pub category_rate: f64,

    /// True when the category was unknown and `"other"` was used.
    pub fallback_rate_applied: bool,

    /// Flat markup on the base price.
    pub flat_markup: f64,

    /// Base price plus flat markup, rounded to cents; the basis for the
    /// other markups.
    pub marked_up_price: f64,

    /// Labour for the whole crew.
    pub labour_cost: f64,

    /// Category markup.
    pub product_markup: f64,

    /// Rounded grand total.
    pub total: f64,

    /// Grand total rendered as currency.
    pub formatted_total: String,
}

// =============================================================================
// Estimator
// =============================================================================

/// Prices orders against a fixed [`EstimatorConfig`].
///
/// Immutable after construction; share it freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Estimator {
    config: EstimatorConfig,
}

impl Estimator {
    /// Creates an estimator for `config`.
    pub fn new(config: EstimatorConfig) -> Self {
        Estimator { config }
    }

    /// The configuration this estimator prices with.
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Estimates a price and returns it formatted as currency.
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::Estimator;
    ///
    /// let estimator = Estimator::default();
    /// assert_eq!(estimator.estimate_price("$5,432.00", "1 person", "drugs"), "$6,199.81");
    /// assert_eq!(estimator.estimate_price(3000, 3, "food").chars().next(), Some('$'));
    /// ```
    pub fn estimate_price(
        &self,
        base: impl Into<RawValue>,
        people: impl Into<RawValue>,
        category: &str,
    ) -> String {
        self.quote(base, people, category).formatted_total
    }

    /// Estimates a price and returns every intermediate amount.
    pub fn quote(
        &self,
        base: impl Into<RawValue>,
        people: impl Into<RawValue>,
        category: &str,
    ) -> Quote {
        let base_price = parse_base_price(base);
        let people = parse_people_count(people);

        let (category_rate, fallback_rate_applied) = match self.config.rates.lookup(category) {
            Some(rate) => (rate, false),
            None => (self.config.rates.fallback_rate(), true),
        };

        debug!(
            base_price,
            people,
            category,
            category_rate,
            fallback_rate_applied,
            "Parsed estimate inputs"
        );

        let flat = flat_markup(base_price, self.config.flat_markup_rate);
        let marked_up_price = round_to_two_decimal_places(base_price + flat);

        let labour = labour_cost(marked_up_price, self.config.labour_rate, people);
        let product_markup = product_type_markup(marked_up_price, category_rate);

        let total = round_to_two_decimal_places(marked_up_price + labour + product_markup);
        let formatted_total = format_price_with_symbol(total, &self.config.currency_symbol);

        debug!(
            flat_markup = flat,
            labour_cost = labour,
            product_markup,
            total,
            "Estimate computed"
        );

        Quote {
            base_price,
            people,
            category: category.to_string(),
            category_rate,
            fallback_rate_applied,
            flat_markup: flat,
            marked_up_price,
            labour_cost: labour,
            product_markup,
            total,
            formatted_total,
        }
    }
}

/// One-shot estimate against `config`.
///
/// ## Example
/// ```rust
/// use pricer_core::{estimate_price, EstimatorConfig};
///
/// let config = EstimatorConfig::default();
/// assert_eq!(estimate_price(&config, "$12,456.95", "4 people", "books"), "$13,707.63");
/// ```
pub fn estimate_price(
    config: &EstimatorConfig,
    base: impl Into<RawValue>,
    people: impl Into<RawValue>,
    category: &str,
) -> String {
    Estimator::new(config.clone()).estimate_price(base, people, category)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::RateTable;

    #[test]
    fn test_reference_quotes() {
        let estimator = Estimator::default();
        assert_eq!(estimator.estimate_price("$1,299.99", "3 people", "food"), "$1,591.58");
        assert_eq!(estimator.estimate_price("$5,432.00", "1 person", "drugs"), "$6,199.81");
        assert_eq!(estimator.estimate_price("$12,456.95", "4 people", "books"), "$13,707.63");
    }

    #[test]
    fn test_quote_breakdown() {
        let quote = Estimator::default().quote("$1,299.99", "3 people", "food");

        assert_eq!(quote.base_price, 1299.99);
        assert_eq!(quote.people, 3);
        assert_eq!(quote.category_rate, 0.13);
        assert!(!quote.fallback_rate_applied);
        assert_eq!(quote.flat_markup, 65.0);
        assert_eq!(quote.labour_cost, 49.14);
        assert_eq!(quote.product_markup, 177.45);
        assert_eq!(quote.total, 1591.58);
        assert_eq!(quote.formatted_total, "$1,591.58");
    }

    #[test]
    fn test_unknown_category_is_flagged() {
        let quote = Estimator::default().quote("$12,456.95", "4 people", "books");
        assert!(quote.fallback_rate_applied);
        assert_eq!(quote.category_rate, 0.0);
        assert_eq!(quote.product_markup, 0.0);
        assert_eq!(quote.flat_markup, 622.85);
        assert_eq!(quote.marked_up_price, 13079.8);
        assert_eq!(quote.labour_cost, 627.83);
        assert_eq!(quote.total, 13707.63);
    }

    #[test]
    fn test_result_has_two_cent_digits() {
        let price = Estimator::default().estimate_price("$5000.00", "4 people", "food");
        let decimal_part = &price[price.find('.').unwrap() + 1..];
        assert_eq!(decimal_part.len(), 2);
        assert!(price.starts_with('$'));
    }

    #[test]
    fn test_numeric_inputs() {
        let estimator = Estimator::default();
        assert_eq!(
            estimator.estimate_price(1299.99, 3, "food"),
            estimator.estimate_price("$1,299.99", "3 people", "food")
        );
    }

    #[test]
    fn test_garbage_inputs_never_fail() {
        let estimator = Estimator::default();
        assert_eq!(estimator.estimate_price("$%^&", "none", "???"), "$0.00");

        // No people means no labour, everything else still applies
        let quote = estimator.quote("$1,000.00", "nobody", "food");
        assert_eq!(quote.labour_cost, 0.0);
        assert_eq!(quote.formatted_total, "$1,186.50");
    }

    #[test]
    fn test_custom_config() {
        let rates = RateTable::new([("food", 0.07), ("other", 0.02)]).unwrap();
        let mut config = EstimatorConfig::with_rates(rates);
        config.currency_symbol = "€".to_string();

        // 1000 + 50 flat = 1050; labour 1050 × 1.2% = 12.60; other 2% = 21.00
        assert_eq!(estimate_price(&config, "1000", "1", "vehicle"), "€1,083.60");
    }

    #[test]
    fn test_quote_serializes() {
        let quote = Estimator::default().quote("$5,432.00", "1 person", "drugs");
        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["formatted_total"], "$6,199.81");
        assert_eq!(json["people"], 1);
        assert_eq!(json["marked_up_price"], 5703.6);
    }
}
