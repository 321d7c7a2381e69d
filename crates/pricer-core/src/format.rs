//! # Format Module
//!
//! Renders amounts the way a US receipt would: `$12,345.67`.

use crate::rounding::round_to_two_decimal_places;
use crate::DEFAULT_CURRENCY_SYMBOL;

/// Inserts `,` every three digits in the integer part of a numeric string.
///
/// The fractional part, if any, is copied as is; it is not padded or
/// truncated. A leading `-` is kept in front.
///
/// ## Example
/// ```rust
/// use pricer_core::format::format_number_string_with_commas;
///
/// assert_eq!(format_number_string_with_commas("3450"), "3,450");
/// assert_eq!(format_number_string_with_commas("3450.50"), "3,450.50");
/// assert_eq!(format_number_string_with_commas("1234567.8"), "1,234,567.8");
/// ```
pub fn format_number_string_with_commas(numeric: &str) -> String {
    let (sign, unsigned) = match numeric.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", numeric),
    };

    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let digits = integer.chars().count();
    let mut out = String::with_capacity(numeric.len() + digits / 3);
    out.push_str(sign);

    for (idx, ch) in integer.chars().enumerate() {
        if idx > 0 && (digits - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if let Some(fraction) = fraction {
        out.push('.');
        out.push_str(fraction);
    }

    out
}

/// Formats an amount as dollars with exactly two cent digits.
///
/// ## Example
/// ```rust
/// use pricer_core::format::format_price_result;
///
/// assert_eq!(format_price_result(3000.0), "$3,000.00");
/// assert_eq!(format_price_result(2500.75), "$2,500.75");
/// ```
pub fn format_price_result(value: f64) -> String {
    format_price_with_symbol(value, DEFAULT_CURRENCY_SYMBOL)
}

/// Formats an amount with a caller-chosen currency symbol.
///
/// The amount is rounded to cents first. Negative amounts render with the
/// sign ahead of the symbol (`-$5.50`).
pub fn format_price_with_symbol(value: f64, symbol: &str) -> String {
    let rounded = round_to_two_decimal_places(value);
    let sign = if rounded < 0.0 { "-" } else { "" };
    let plain = format!("{:.2}", rounded.abs());

    format!(
        "{}{}{}",
        sign,
        symbol,
        format_number_string_with_commas(&plain)
    )
}

// =============================================================================
// Unit Tests
// =============================================================================
