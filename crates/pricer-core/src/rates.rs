//! # Rates Module
//!
//! The category → markup rate table.
//!
//! ## Fallback Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  rate_for("food")      ──► table has "food"   ──► 0.13                  │
//! │  rate_for("vehicle")   ──► not in table       ──► rates["other"]        │
//! │  rate_for(" FOOD ")    ──► normalised "food"  ──► 0.13                  │
//! │                                                                         │
//! │  A RateTable cannot be built without "other", so lookup never fails    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, CoreResult};
use crate::OTHER_CATEGORY;

// =============================================================================
// Rate Table
// =============================================================================

/// Validated mapping from category name to markup rate.
///
/// ## Invariants
/// - An `"other"` entry is always present
/// - Every rate is finite and in `[0, 1)`
/// - Keys are trimmed and lowercased
///
/// Deserialization runs the same checks as [`RateTable::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<String, f64>",
    into = "BTreeMap<String, f64>"
)]
pub struct RateTable {
    rates: BTreeMap<String, f64>,
    fallback: f64,
}

impl RateTable {
    /// Builds a rate table from `(category, rate)` pairs.
    ///
    /// ## Errors
    /// - [`ConfigError::MissingFallbackRate`] if no `"other"` entry is given
    /// - [`ConfigError::RateOutOfRange`] for a rate outside `[0, 1)`
    /// - [`ConfigError::EmptyCategory`] for a blank category name
    ///
    /// ## Example
    /// ```rust
    /// use pricer_core::rates::RateTable;
    ///
    /// let table = RateTable::new([("food", 0.07), ("other", 0.02)]).unwrap();
    /// assert_eq!(table.rate_for("food"), 0.07);
    /// assert_eq!(table.rate_for("vehicle"), 0.02);
    ///
    /// assert!(RateTable::new([("food", 0.07)]).is_err());
    /// ```
    pub fn new<I, K>(entries: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut rates = BTreeMap::new();

        for (category, rate) in entries {
            let key = normalize_category(category.as_ref());
            if key.is_empty() {
                return Err(ConfigError::EmptyCategory);
            }
            check_rate(&format!("rates.{}", key), rate)?;
            rates.insert(key, rate);
        }

        let fallback = *rates
            .get(OTHER_CATEGORY)
            .ok_or(ConfigError::MissingFallbackRate {
                category: OTHER_CATEGORY,
            })?;

        Ok(RateTable { rates, fallback })
    }

    /// Returns the rate for `category`, or the `"other"` rate if the
    /// category is not in the table.
    pub fn rate_for(&self, category: &str) -> f64 {
        self.lookup(category).unwrap_or(self.fallback)
    }

    /// Returns the rate for `category` only if the table lists it.
    pub fn lookup(&self, category: &str) -> Option<f64> {
        self.rates.get(&normalize_category(category)).copied()
    }

    /// The `"other"` rate.
    #[inline]
    pub fn fallback_rate(&self) -> f64 {
        self.fallback
    }

    /// Iterates over `(category, rate)` in category order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.rates.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of categories, `"other"` included.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// Always false: `"other"` is always present.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl Default for RateTable {
    /// The standard category rates.
    ///
    /// | Category    | Rate  |
    /// |-------------|-------|
    /// | food        | 13%   |
    /// | drugs       | 7.5%  |
    /// | electronics | 2%    |
    /// | other       | 0%    |
    fn default() -> Self {
        let rates: BTreeMap<String, f64> = [
            ("food", 0.13),
            ("drugs", 0.075),
            ("electronics", 0.02),
            (OTHER_CATEGORY, 0.0),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        RateTable {
            rates,
            fallback: 0.0,
        }
    }
}

impl TryFrom<BTreeMap<String, f64>> for RateTable {
    type Error = ConfigError;

    fn try_from(map: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        RateTable::new(map)
    }
}

impl From<RateTable> for BTreeMap<String, f64> {
    fn from(table: RateTable) -> Self {
        table.rates
    }
}

// =============================================================================
// Free Functions
// =============================================================================

/// Looks up the markup rate for `category`, falling back to `"other"`.
///
/// ## Example
/// ```rust
/// use pricer_core::rates::{find_product_type_rate, RateTable};
///
/// let table = RateTable::default();
/// assert_eq!(find_product_type_rate(&table, "drugs"), 0.075);
/// assert_eq!(find_product_type_rate(&table, "books"), 0.0);
/// ```
pub fn find_product_type_rate(table: &RateTable, category: &str) -> f64 {
    table.rate_for(category)
}

/// Checks that `value` is a usable rate: finite and in `[0, 1)`.
pub(crate) fn check_rate(field: &str, value: f64) -> CoreResult<()> {
    if value.is_finite() && (0.0..1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::RateOutOfRange {
            field: field.to_string(),
            value,
        })
    }
}

fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn example_categories() -> RateTable {
        RateTable::new([
            ("food", 0.07),
            ("electronics", 0.05),
            ("drugs", 0.03),
            ("other", 0.02),
        ])
        .unwrap()
    }

    #[test]
    fn test_known_category() {
        let table = example_categories();
        assert_eq!(find_product_type_rate(&table, "electronics"), 0.05);
        assert_eq!(find_product_type_rate(&table, "food"), 0.07);
        assert_eq!(find_product_type_rate(&table, "other"), 0.02);
    }

    #[test]
    fn test_unknown_category_falls_back_to_other() {
        let table = example_categories();
        assert_eq!(find_product_type_rate(&table, "vehicle"), 0.02);
        assert_eq!(find_product_type_rate(&table, "sand"), 0.02);
        assert_eq!(find_product_type_rate(&table, ""), 0.02);
        assert_eq!(table.lookup("vehicle"), None);
    }

    #[test]
    fn test_lookup_is_normalised() {
        let table = RateTable::new([(" Food ", 0.07), ("OTHER", 0.02)]).unwrap();
        assert_eq!(table.rate_for("food"), 0.07);
        assert_eq!(table.rate_for("  FOOD"), 0.07);
        assert_eq!(table.fallback_rate(), 0.02);
    }

    #[test]
    fn test_missing_other_is_rejected() {
        let err = RateTable::new([("food", 0.07)]).unwrap_err();
        assert_eq!(err, ConfigError::MissingFallbackRate { category: "other" });
    }

    #[test]
    fn test_out_of_range_rates_are_rejected() {
        for bad in [-0.01, 1.0, 2.5, f64::NAN, f64::INFINITY] {
            let result = RateTable::new([("food", bad), ("other", 0.0)]);
            assert!(
                matches!(result, Err(ConfigError::RateOutOfRange { ref field, .. }) if field == "rates.food"),
                "rate {} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_blank_category_is_rejected() {
        let result = RateTable::new([("  ", 0.01), ("other", 0.0)]);
        assert_eq!(result.unwrap_err(), ConfigError::EmptyCategory);
    }

    #[test]
    fn test_default_table() {
        let table = RateTable::default();
        assert_eq!(table.rate_for("food"), 0.13);
        assert_eq!(table.rate_for("drugs"), 0.075);
        assert_eq!(table.rate_for("electronics"), 0.02);
        assert_eq!(table.rate_for("books"), 0.0);
        assert_eq!(table.len(), 4);
        assert!(!table.is_empty());
    }

    #[test]
    fn test_deserialize_validates() {
        let table: RateTable = serde_json::from_str(r#"{"food": 0.07, "other": 0.02}"#).unwrap();
        assert_eq!(table.rate_for("anything"), 0.02);

        let missing: Result<RateTable, _> = serde_json::from_str(r#"{"food": 0.07}"#);
        assert!(missing.is_err());
    }

    #[test]
    fn test_iter_in_category_order() {
        let table = RateTable::default();
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["drugs", "electronics", "food", "other"]);
    }
}
