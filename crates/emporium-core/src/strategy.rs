//! # Pricing Strategies
//!
//! Interchangeable algorithms that turn a cart subtotal into the amount due.
//!
//! ## Strategy Selection
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart::total()                                        │
//! │                                                                         │
//! │   subtotal ──► strategy set? ──no──► subtotal                           │
//! │                     │                                                   │
//! │                    yes                                                  │
//! │                     ▼                                                   │
//! │          strategy.apply(subtotal)   (exactly once)                      │
//! │                                                                         │
//! │   PercentageOff::ten_percent()     150.0 ──► 135.0                      │
//! │   PercentageOff::twenty_percent()  150.0 ──► 120.0                      │
//! │   NoDiscount                       150.0 ──► 150.0                      │
//! │   |p| p * 0.5  (any closure)       150.0 ──►  75.0                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::CoreResult;
use crate::price::{format_amount, Price};
use crate::validation::validate_fraction;

// =============================================================================
// Strategy Trait
// =============================================================================

/// A pure function from a cart total to a discounted total.
///
/// Implementations must be deterministic and side-effect free. No validation
/// of negative or non-finite totals is performed.
pub trait PricingStrategy {
    /// Applies the strategy to an aggregate total.
    fn apply(&self, total: Price) -> Price;

    /// Human-readable name shown in cart summaries.
    fn label(&self) -> String {
        "custom pricing".to_string()
    }
}

/// Closures are strategies.
///
/// ```rust
/// use emporium_core::{Price, PricingStrategy};
///
/// let half_off = |total: Price| total * 0.5;
/// assert_eq!(half_off.apply(Price::new(150.0)).value(), 75.0);
/// ```
impl<F> PricingStrategy for F
where
    F: Fn(Price) -> Price,
{
    fn apply(&self, total: Price) -> Price {
        self(total)
    }
}

// =============================================================================
// Percentage Off
// =============================================================================

/// Takes a fixed fraction off the total: `total × (1 - rate)`.
///
/// ## Example
/// ```rust
/// use emporium_core::{PercentageOff, Price, PricingStrategy};
///
/// let strategy = PercentageOff::ten_percent();
/// assert_eq!(strategy.apply(Price::new(150.0)).value(), 135.0);
/// assert_eq!(strategy.label(), "10.0% off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentageOff {
    rate: f64,
}

impl PercentageOff {
    /// Creates a strategy from a rate in `[0, 1]`. The rate is not checked.
    pub const fn new(rate: f64) -> Self {
        PercentageOff { rate }
    }

    /// Creates a strategy after checking the rate lies in `[0, 1]`.
    pub fn try_new(rate: f64) -> CoreResult<Self> {
        validate_fraction(rate)?;
        Ok(PercentageOff { rate })
    }

    /// 10% off.
    pub const fn ten_percent() -> Self {
        PercentageOff::new(0.10)
    }

    /// 20% off.
    pub const fn twenty_percent() -> Self {
        PercentageOff::new(0.20)
    }

    /// Returns the configured rate.
    pub const fn rate(&self) -> f64 {
        self.rate
    }
}

impl PricingStrategy for PercentageOff {
    fn apply(&self, total: Price) -> Price {
        total.discounted_by(self.rate)
    }

    fn label(&self) -> String {
        format!("{}% off", format_amount(self.rate * 100.0))
    }
}

// =============================================================================
// No Discount
// =============================================================================

/// The identity strategy. Setting it is equivalent to setting none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoDiscount;

impl PricingStrategy for NoDiscount {
    fn apply(&self, total: Price) -> Price {
        total
    }

    fn label(&self) -> String {
        "no discount".to_string()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{CoreError, ValidationError};

    #[test]
    fn test_ten_percent_off() {
        let strategy = PercentageOff::ten_percent();
        assert_eq!(strategy.apply(Price::new(150.0)).value(), 135.0);
        assert_eq!(strategy.apply(Price::new(155.0)).value(), 139.5);
    }

    #[test]
    fn test_twenty_percent_off() {
        let strategy = PercentageOff::twenty_percent();
        assert_eq!(strategy.apply(Price::new(150.0)).value(), 120.0);
        assert_eq!(strategy.label(), "20.0% off");
    }

    #[test]
    fn test_percentage_matches_formula_across_rates() {
        let total = Price::new(250.0);
        for rate in [0.0, 0.05, 0.25, 0.5, 0.75, 1.0] {
            let expected = 250.0 * (1.0 - rate);
            let actual = PercentageOff::new(rate).apply(total).value();
            assert!((actual - expected).abs() < 1e-9, "rate {}", rate);
        }
    }

    #[test]
    fn test_try_new_rejects_out_of_range_rate() {
        assert!(PercentageOff::try_new(0.15).is_ok());

        let err = PercentageOff::try_new(1.5).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_unchecked_rate_is_permissive() {
        // 150% off yields a negative total; nothing stops it.
        let strategy = PercentageOff::new(1.5);
        assert_eq!(strategy.apply(Price::new(100.0)).value(), -50.0);
    }

    #[test]
    fn test_no_discount_is_identity() {
        assert_eq!(NoDiscount.apply(Price::new(42.5)).value(), 42.5);
        assert_eq!(NoDiscount.label(), "no discount");
    }

    #[test]
    fn test_closure_strategy() {
        let flat_ten_off = |total: Price| total - Price::new(10.0);
        assert_eq!(flat_ten_off.apply(Price::new(150.0)).value(), 140.0);
        assert_eq!(flat_ten_off.label(), "custom pricing");
    }

    #[test]
    fn test_boxed_strategy_dispatches() {
        let boxed: Box<dyn PricingStrategy> = Box::new(PercentageOff::ten_percent());
        assert_eq!(boxed.apply(Price::new(150.0)).value(), 135.0);
        assert_eq!(boxed.label(), "10.0% off");
    }
}
