//! # Cart
//!
//! Collects priceable items in insertion order and computes the amount due
//! using an optional pricing strategy.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Caller                    Cart method            State change          │
//! │  ──────                    ───────────            ────────────          │
//! │                                                                         │
//! │  Put item in cart ───────► add() ───────────────► items.push(handle)    │
//! │                                                                         │
//! │  Choose a discount ──────► set_strategy() ──────► strategy = Some(s)    │
//! │                                                                         │
//! │  Drop the discount ──────► clear_strategy() ────► strategy = None       │
//! │                                                                         │
//! │  Ask for amount due ─────► total() ─────────────► (read only)           │
//! │                                                                         │
//! │  NOTE: items are shared handles. Wrapping a handle in a decorator       │
//! │        AFTER adding it builds a new value; the cart keeps the original. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::price::Price;
use crate::priceable::Priceable;
use crate::strategy::PricingStrategy;

/// The shopping cart.
///
/// ## Invariants
/// - Items keep insertion order and are never removed
/// - Duplicates are allowed (the same handle may be added twice)
/// - At most one strategy; setting a new one replaces the old
/// - `total()` applies the strategy exactly once, to the summed prices
pub struct Cart {
    items: Vec<Rc<dyn Priceable>>,
    strategy: Option<Box<dyn PricingStrategy>>,
    created_at: DateTime<Utc>,
}

impl Cart {
    /// Creates a new empty cart with no strategy.
    pub fn new() -> Self {
        Cart {
            items: Vec::new(),
            strategy: None,
            created_at: Utc::now(),
        }
    }

    /// Creates an empty cart with a strategy already set.
    pub fn with_strategy<S: PricingStrategy + 'static>(strategy: S) -> Self {
        let mut cart = Cart::new();
        cart.set_strategy(strategy);
        cart
    }

    /// Appends a shared item handle. Always succeeds.
    ///
    /// The cart holds a clone of the handle, so the caller can keep using
    /// its own copy.
    pub fn add(&mut self, item: Rc<dyn Priceable>) {
        self.items.push(item);
    }

    /// Appends an owned item, moving it behind a fresh shared handle.
    pub fn add_item<P: Priceable + 'static>(&mut self, item: P) {
        self.add(Rc::new(item));
    }

    /// Sets the pricing strategy, replacing any previous one.
    pub fn set_strategy<S: PricingStrategy + 'static>(&mut self, strategy: S) {
        self.strategy = Some(Box::new(strategy));
    }

    /// Removes the pricing strategy.
    pub fn clear_strategy(&mut self) {
        self.strategy = None;
    }

    /// Returns the current strategy, if any.
    pub fn strategy(&self) -> Option<&dyn PricingStrategy> {
        self.strategy.as_deref()
    }

    /// Iterates the items in insertion order.
    pub fn items(&self) -> impl Iterator<Item = &Rc<dyn Priceable>> {
        self.items.iter()
    }

    /// Returns the number of items (duplicates counted).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// When the cart was created.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Sums item prices in insertion order with compensated summation.
    /// Zero for an empty cart.
    pub fn subtotal(&self) -> Price {
        self.items.iter().map(|item| item.price()).sum()
    }

    /// Calculates the amount due: the subtotal, passed once through the
    /// strategy when one is set.
    ///
    /// ## Example
    /// ```rust
    /// use emporium_core::{BasicItem, Cart, PercentageOff};
    ///
    /// let mut cart = Cart::new();
    /// cart.add_item(BasicItem::new("Product 1", 100.0));
    /// cart.add_item(BasicItem::new("Product 2", 50.0));
    /// assert_eq!(cart.total().value(), 150.0);
    ///
    /// cart.set_strategy(PercentageOff::ten_percent());
    /// assert_eq!(cart.total().value(), 135.0);
    /// ```
    pub fn total(&self) -> Price {
        let subtotal = self.subtotal();
        match &self.strategy {
            Some(strategy) => strategy.apply(subtotal),
            None => subtotal,
        }
    }

    /// Takes a serializable snapshot of the cart.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Cart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let descriptions: Vec<String> = self.items.iter().map(|i| i.description()).collect();
        f.debug_struct("Cart")
            .field("items", &descriptions)
            .field("strategy", &self.strategy.as_ref().map(|s| s.label()))
            .field("created_at", &self.created_at)
            .finish()
    }
}

// =============================================================================
// Cart Summary
// =============================================================================

/// One item as it appears in a summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryLine {
    pub description: String,
    pub price: Price,
}

/// Cart snapshot for display and JSON output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<SummaryLine>,
    pub subtotal: Price,
    /// Label of the strategy in effect, if any.
    pub strategy: Option<String>,
    pub total: Price,
    pub created_at: DateTime<Utc>,
}

impl From<&Cart> for CartSummary {
    fn from(cart: &Cart) -> Self {
        CartSummary {
            lines: cart
                .items()
                .map(|item| SummaryLine {
                    description: item.description(),
                    price: item.price(),
                })
                .collect(),
            subtotal: cart.subtotal(),
            strategy: cart.strategy().map(|s| s.label()),
            total: cart.total(),
            created_at: cart.created_at(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
