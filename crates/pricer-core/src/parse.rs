//! # Parse Module
//!
//! Lenient number extraction from whatever the user typed.
//!
//! ## Substitution Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input                       parse_base_price      parse_people_count   │
//! │  ──────────────────────────  ────────────────      ──────────────────   │
//! │  "$5,400.00"                 5400.0                5                    │
//! │  "3500.50"                   3500.5                3500                 │
//! │  "4 people"                  4.0                   4                    │
//! │  "$%^&" / "none"             0.0                   0                    │
//! │  2500 (number)               2500.0                2500                 │
//! │                                                                         │
//! │  Nothing here returns an error: unusable input becomes zero            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

/// Currency symbols accepted in front of a base price.
const CURRENCY_SYMBOLS: &[char] = &['$', '€', '£', '¥'];

/// Thousands separator stripped before parsing.
const THOUSANDS_SEPARATOR: char = ',';

// =============================================================================
// Raw Value
// =============================================================================

/// A raw user input that may already be numeric or may still be text.
///
/// Deserializes untagged, so `2500`, `2500.0` and `"$2,500"` are all accepted
/// from JSON or TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Already a number.
    Number(f64),
    /// Free-form text such as `"$1,299.99"` or `"3 people"`.
    Text(String),
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Number(f64::from(value))
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

// =============================================================================
// Base Price
// =============================================================================

/// Extracts a base price from a number or a loosely formatted string.
///
/// ## Rules
/// - Finite, non-negative numbers pass through unchanged
/// - Strings: trim, drop one leading currency symbol, drop every `,`,
///   then read the longest leading decimal literal
/// - Anything else is `0.0`
///
/// ## Example
/// ```rust
/// use pricer_core::parse::parse_base_price;
///
/// assert_eq!(parse_base_price("$5,400.00"), 5400.0);
/// assert_eq!(parse_base_price(700.95), 700.95);
/// assert_eq!(parse_base_price("$%^&"), 0.0);
/// ```
pub fn parse_base_price(input: impl Into<RawValue>) -> f64 {
    match input.into() {
        RawValue::Number(value) => non_negative_or_zero(value),
        RawValue::Text(text) => parse_price_text(&text),
    }
}

fn parse_price_text(text: &str) -> f64 {
    let trimmed = text.trim();
    let unprefixed = trimmed
        .strip_prefix(CURRENCY_SYMBOLS)
        .unwrap_or(trimmed)
        .trim_start();

    let cleaned = strip_thousands_separators(unprefixed);

    leading_decimal_literal(&cleaned)
        .parse::<f64>()
        .map(non_negative_or_zero)
        .unwrap_or(0.0)
}

/// Returns the longest prefix made of digits with at most one `.`.
fn leading_decimal_literal(s: &str) -> &str {
    let mut seen_dot = false;
    let mut end = 0;

    for (idx, ch) in s.char_indices() {
        match ch {
            '0'..='9' => end = idx + 1,
            '.' if !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }

    &s[..end]
}

fn non_negative_or_zero(value: f64) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        0.0
    }
}

// =============================================================================
// People Count
// =============================================================================

/// Extracts a head count from a number or a string like `"3 people"`.
///
/// ## Rules
/// - Numbers are truncated toward zero; negative or non-finite become `0`
/// - Strings: the leading run of ASCII digits (after trimming) is the count,
///   trailing words are ignored
/// - No digits means `0`; overlong digit runs saturate at `u32::MAX`
///
/// ## Example
/// ```rust
/// use pricer_core::parse::parse_people_count;
///
/// assert_eq!(parse_people_count("4 people"), 4);
/// assert_eq!(parse_people_count("1 person"), 1);
/// assert_eq!(parse_people_count(3), 3);
/// assert_eq!(parse_people_count("none"), 0);
/// ```
pub fn parse_people_count(input: impl Into<RawValue>) -> u32 {
    match input.into() {
        // `as` saturates at u32::MAX for out-of-range floats
        RawValue::Number(value) if value.is_finite() && value > 0.0 => value.trunc() as u32,
        RawValue::Number(_) => 0,
        RawValue::Text(text) => text
            .trim_start()
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u32, |count, digit| {
                count
                    .saturating_mul(10)
                    .saturating_add(u32::from(digit - b'0'))
            }),
    }
}

// =============================================================================
// Separators
// =============================================================================

/// Returns a copy of `s` with every thousands separator removed.
///
/// Digits and the decimal point are kept as they are.
///
/// ## Example
/// ```rust
/// use pricer_core::parse::strip_thousands_separators;
///
/// assert_eq!(strip_thousands_separators("3,450.75"), "3450.75");
/// ```
pub fn strip_thousands_separators(s: &str) -> String {
    s.chars().filter(|&c| c != THOUSANDS_SEPARATOR).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
