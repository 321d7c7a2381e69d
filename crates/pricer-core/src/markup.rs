//! # Markup Module
//!
//! The cost calculators. Each one multiplies a price by a rate and rounds
//! the result to cents before it is summed with anything else.
//!
//! ## How a Quote Is Built
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Base: $1,299.99   People: 3   Category: food                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  flat_markup(base, 5%)                 = $65.00                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Marked-up price                       = $1,364.99                      │
//! │       │                                                                 │
//! │       ├──► labour_cost(marked, 1.2%, 3) = $49.14                        │
//! │       └──► product_type_markup(marked, 13%) = $177.45                   │
//! │                                                                         │
//! │  Total: $1,364.99 + $49.14 + $177.45   = $1,591.58                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::rounding::round_to_two_decimal_places;

/// Labour cost of a single person working on an order.
///
/// ## Example
/// ```rust
/// use pricer_core::markup::single_person_labour_cost;
///
/// assert_eq!(single_person_labour_cost(10000.0, 0.02), 200.0);
/// assert_eq!(single_person_labour_cost(3456.0, 0.015), 51.84);
/// ```
pub fn single_person_labour_cost(price: f64, rate: f64) -> f64 {
    round_to_two_decimal_places(price * rate)
}

/// Labour cost for `people` workers.
///
/// The head count is folded into the per-person rate, the single-person
/// cost at that rate is rounded, and the total is rounded once more. Scaling
/// an already rounded per-person cent amount would drift by a cent on inputs
/// like `(8132, 1.9%, 4)`.
///
/// ## Example
/// ```rust
/// use pricer_core::markup::labour_cost;
///
/// assert_eq!(labour_cost(10000.0, 0.02, 5), 1000.0);
/// assert_eq!(labour_cost(8132.0, 0.019, 4), 618.03);
/// ```
pub fn labour_cost(price: f64, rate: f64, people: u32) -> f64 {
    let crew_rate = rate * f64::from(people);
    round_to_two_decimal_places(single_person_labour_cost(price, crew_rate))
}

/// Flat markup applied to every order regardless of category.
///
/// ## Example
/// ```rust
/// use pricer_core::markup::flat_markup;
///
/// assert_eq!(flat_markup(21451.30, 0.085), 1823.36);
/// ```
pub fn flat_markup(price: f64, flat_rate: f64) -> f64 {
    round_to_two_decimal_places(price * flat_rate)
}

/// Category-specific markup.
pub fn product_type_markup(price: f64, product_rate: f64) -> f64 {
    round_to_two_decimal_places(price * product_rate)
}

// =============================================================================
// Unit Tests
// =============================================================================
