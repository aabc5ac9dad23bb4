//! # emporium-core: Pure Pricing Logic for Emporium
//!
//! This crate holds the two moving parts of the Emporium checkout: discount
//! strategies that adjust a cart total, and decorators that wrap products to
//! change their price and description. Everything here is a pure function
//! of its inputs.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Emporium Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/emporium-demo (Driver)                     │   │
//! │  │     env config ──► build items ──► cart.total() ──► stdout      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ emporium-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │  ┌──────────┐ ┌───────────┐ ┌───────────┐ ┌──────────┐          │   │
//! │  │  │  price   │ │ priceable │ │ decorator │ │   cart   │          │   │
//! │  │  │  Price   │ │ BasicItem │ │ Surcharge │ │   Cart   │          │   │
//! │  │  └──────────┘ └───────────┘ │ Discount  │ │ Summary  │          │   │
//! │  │  ┌──────────┐ ┌───────────┐ └───────────┘ └──────────┘          │   │
//! │  │  │ strategy │ │validation │                                     │   │
//! │  │  │ % off    │ │  checks   │                                     │   │
//! │  │  └──────────┘ └───────────┘                                     │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`price`] - `Price` newtype over `f64`
//! - [`strategy`] - `PricingStrategy` trait and percentage discounts
//! - [`priceable`] - `Priceable` capability and `BasicItem`
//! - [`decorator`] - `Surcharge` and `FractionalDiscount` wrappers
//! - [`cart`] - `Cart` aggregator and `CartSummary`
//! - [`error`] - Domain error types
//! - [`validation`] - Optional input checks used by `try_new` constructors
//!
//! ## Example Usage
//!
//! ```rust
//! use emporium_core::{BasicItem, Cart, PercentageOff, PriceableExt};
//!
//! let mut cart = Cart::new();
//! cart.add_item(BasicItem::new("Product 1", 100.0).gift_wrapped());
//! cart.add_item(BasicItem::new("Product 2", 50.0));
//! cart.set_strategy(PercentageOff::ten_percent());
//!
//! // (105.0 + 50.0) × 0.9
//! assert_eq!(cart.total().to_string(), "139.5");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod decorator;
pub mod error;
pub mod price;
pub mod priceable;
pub mod strategy;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartSummary, SummaryLine};
pub use decorator::{FractionalDiscount, PriceableExt, Surcharge};
pub use error::{CoreError, CoreResult, ValidationError};
pub use price::Price;
pub use priceable::{BasicItem, Priceable};
pub use strategy::{NoDiscount, PercentageOff, PricingStrategy};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Flat fee added by the gift-wrap decorator.
pub const GIFT_WRAP_FEE: f64 = 5.0;

/// Tag appended to a gift-wrapped item's description.
pub const GIFT_WRAP_TAG: &str = "Gift Wrapped";

/// Maximum length of an item name accepted by [`BasicItem::try_new`].
pub const MAX_ITEM_NAME_LENGTH: usize = 200;
