//! # Price Module
//!
//! Provides the `Price` type used for every monetary value in Emporium.
//!
//! ## Why Floating Point Here?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PLAIN DOUBLE-PRECISION ARITHMETIC                                      │
//! │                                                                         │
//! │  Prices, surcharges and discounts are IEEE-754 doubles:                 │
//! │    100.0 + 5.0            = 105.0                                       │
//! │    50.0 × (1 - 0.2)       = 40.0                                        │
//! │    (105.0 + 50.0) × 0.9   = 139.5                                       │
//! │                                                                         │
//! │  No rounding step is ever applied. NaN and Infinity propagate           │
//! │  silently through every operation. Sums are compensated:                │
//! │    0.1 + 0.2 + 0.3        = 0.6   (not 0.6000000000000001)              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use emporium_core::price::Price;
//!
//! let price = Price::new(100.0);
//! let wrapped = price + Price::new(5.0);
//! assert_eq!(wrapped.value(), 105.0);
//!
//! // Display uses Rust's `{:?}` float form
//! assert_eq!(price.to_string(), "100.0");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

// =============================================================================
// Price Type
// =============================================================================

/// A monetary amount as a double-precision float.
///
/// ## Design Decisions
/// - **f64**: matches the arithmetic the pricing rules are defined in
/// - **Single field tuple struct**: zero-cost wrapper, serialized as a bare number
/// - **No validation**: negative and non-finite values are representable;
///   see [`crate::validation`] for opt-in checks
///
/// ## Where Price is Used
/// ```text
/// BasicItem.price ──► Surcharge / FractionalDiscount ──► Priceable::price()
///                                                            │
///                         Cart::subtotal() ◄─────────────────┘
///                               │
///                               ▼
///                  PricingStrategy::apply() ──► Cart::total()
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(f64);

impl Price {
    /// Creates a price from a raw amount.
    #[inline]
    pub const fn new(amount: f64) -> Self {
        Price(amount)
    }

    /// Returns zero.
    #[inline]
    pub const fn zero() -> Self {
        Price(0.0)
    }

    /// Returns the raw amount.
    #[inline]
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Checks if the amount is exactly zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Checks if the amount is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.0 < 0.0
    }

    /// Checks that the amount is neither NaN nor infinite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Takes a fraction off the amount: `amount × (1 - fraction)`.
    ///
    /// Shared by percentage strategies and the fractional-discount decorator
    /// so both compute the reduction the same way.
    ///
    /// ## Example
    /// ```rust
    /// use emporium_core::price::Price;
    ///
    /// let subtotal = Price::new(150.0);
    /// assert_eq!(subtotal.discounted_by(0.1).value(), 135.0);
    /// ```
    #[inline]
    pub fn discounted_by(&self, fraction: f64) -> Price {
        Price(self.0 * (1.0 - fraction))
    }
}

/// Renders a float the way prices are shown: Rust's `{:?}` float form.
///
/// Inside `[1e-4, 1e16)` that is the shortest round-trip decimal with a
/// fractional digit always present (`135.0`, `20.0`, `10000000.0`).
/// Outside it switches to exponent form (`1e16`, `1e-5`).
pub fn format_amount(value: f64) -> String {
    format!("{:?}", value)
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display writes the bare amount with no currency symbol; callers add it.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_amount(self.0))
    }
}

impl From<f64> for Price {
    #[inline]
    fn from(amount: f64) -> Self {
        Price(amount)
    }
}

impl From<Price> for f64 {
    #[inline]
    fn from(price: Price) -> Self {
        price.0
    }
}

impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Price {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Price(self.0 - other.0)
    }
}

/// Scaling by a plain factor.
impl Mul<f64> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, factor: f64) -> Self {
        Price(self.0 * factor)
    }
}

/// Compensated (Kahan) summation in iteration order.
///
/// A running compensation term carries the low-order bits each addition
/// drops, so `[0.1, 0.2, 0.3]` sums to `0.6`. A plain running sum is kept
/// alongside: when the compensated result is NaN but the plain sum is
/// infinite (infinities of one sign), the infinity is returned.
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        let mut sum = 0.0_f64;
        let mut compensation = 0.0_f64;
        let mut simple_sum = 0.0_f64;

        for Price(value) in iter {
            let adjusted = value - compensation;
            let next = sum + adjusted;
            compensation = (next - sum) - adjusted;
            sum = next;
            simple_sum += value;
        }

        let compensated = sum - compensation;
        if compensated.is_nan() && simple_sum.is_infinite() {
            Price(simple_sum)
        } else {
            Price(compensated)
        }
    }
}

impl<'a> Sum<&'a Price> for Price {
    fn sum<I: Iterator<Item = &'a Price>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_keeps_fraction() {
        assert_eq!(Price::new(135.0).to_string(), "135.0");
        assert_eq!(Price::new(139.5).to_string(), "139.5");
        assert_eq!(Price::zero().to_string(), "0.0");
        assert_eq!(Price::new(-5.0).to_string(), "-5.0");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(20.0), "20.0");
        assert_eq!(format_amount(0.2 * 100.0), "20.0");
        assert_eq!(format_amount(12.5), "12.5");
    }

    #[test]
    fn test_arithmetic() {
        let a = Price::new(100.0);
        let b = Price::new(50.0);

        assert_eq!((a + b).value(), 150.0);
        assert_eq!((a - b).value(), 50.0);
        assert_eq!((a * 0.5).value(), 50.0);

        let mut c = a;
        c += b;
        assert_eq!(c.value(), 150.0);
    }

    #[test]
    fn test_discounted_by() {
        assert_eq!(Price::new(150.0).discounted_by(0.1).value(), 135.0);
        assert_eq!(Price::new(50.0).discounted_by(0.2).value(), 40.0);
        assert_eq!(Price::new(50.0).discounted_by(0.0).value(), 50.0);
        assert_eq!(Price::new(50.0).discounted_by(1.0).value(), 0.0);
    }

    #[test]
    fn test_sum_of_empty_is_zero() {
        let total: Price = Vec::<Price>::new().into_iter().sum();
        assert!(total.is_zero());
    }

    #[test]
    fn test_sum_is_compensated() {
        let total: Price = [0.1, 0.2, 0.3].into_iter().map(Price::new).sum();
        assert_eq!(total.value(), 0.6);
        assert_eq!(total.to_string(), "0.6");

        let total: Price = [19.99, 5.01, 0.1, 0.7].into_iter().map(Price::new).sum();
        assert_eq!(total.value(), 25.799999999999997);
    }

    #[test]
    fn test_sum_of_infinities() {
        let total: Price = [f64::INFINITY, 1.0].into_iter().map(Price::new).sum();
        assert_eq!(total.value(), f64::INFINITY);

        let total: Price = [f64::INFINITY, f64::NEG_INFINITY]
            .into_iter()
            .map(Price::new)
            .sum();
        assert!(total.value().is_nan());

        let total: Price = [f64::NAN, 1.0].into_iter().map(Price::new).sum();
        assert!(total.value().is_nan());
    }

    #[test]
    fn test_format_amount_range_edges() {
        assert_eq!(format_amount(1e7), "10000000.0");
        assert_eq!(format_amount(1e15), "1000000000000000.0");
        assert_eq!(format_amount(1e16), "1e16");
        assert_eq!(format_amount(0.0001), "0.0001");
        assert_eq!(format_amount(0.00001), "1e-5");
    }

    #[test]
    fn test_sum_in_order() {
        let prices = [Price::new(100.0), Price::new(50.0), Price::new(0.25)];
        let total: Price = prices.iter().sum();
        assert_eq!(total.value(), 150.25);
    }

    #[test]
    fn test_special_values_propagate() {
        let nan = Price::new(f64::NAN) + Price::new(1.0);
        assert!(!nan.is_finite());
        assert!(nan.value().is_nan());

        let inf = Price::new(f64::INFINITY).discounted_by(0.1);
        assert_eq!(inf.value(), f64::INFINITY);
    }

    #[test]
    fn test_checks() {
        assert!(Price::zero().is_zero());
        assert!(!Price::zero().is_negative());
        assert!(Price::new(-1.0).is_negative());
        assert!(Price::new(1.0).is_finite());
    }

    #[test]
    fn test_serializes_as_bare_number() {
        let json = serde_json::to_string(&Price::new(139.5)).unwrap();
        assert_eq!(json, "139.5");
    }
}
