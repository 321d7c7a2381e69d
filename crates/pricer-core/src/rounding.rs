//! # Rounding Module
//!
//! Rounds to whole cents, half away from zero.
//!
//! ## The Representation Problem
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1.005 is stored as 1.00499999999999989341858963598497...               │
//! │                                                                         │
//! │  naive:   (1.005 * 100.0).round() / 100.0  = 1.00   ❌                 │
//! │  nudged:  scale, add a few ULPs, round     = 1.01   ✅                 │
//! │                                                                         │
//! │  The nudge is relative to the scaled value, so it only ever flips      │
//! │  values sitting within float noise of a half-cent boundary             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

/// How many ULPs of the scaled value to add before rounding.
const BOUNDARY_ULPS: f64 = 4.0;

/// Rounds `value` to two decimal places, half away from zero.
///
/// Non-finite input rounds to `0.0`.
///
/// ## Example
/// ```rust
/// use pricer_core::rounding::round_to_two_decimal_places;
///
/// assert_eq!(round_to_two_decimal_places(33.555), 33.56);
/// assert_eq!(round_to_two_decimal_places(34.582), 34.58);
/// assert_eq!(round_to_two_decimal_places(1.005), 1.01);
/// ```
pub fn round_to_two_decimal_places(value: f64) -> f64 {
    if !value.is_finite() {
        return 0.0;
    }

    let scaled = value * 100.0;
    let nudge = scaled.abs() * f64::EPSILON * BOUNDARY_ULPS;

    // Integer / 100.0 is correctly rounded, so the result equals the literal
    (scaled + nudge.copysign(scaled)).round() / 100.0
}

// =============================================================================
// Unit Tests
// =============================================================================
