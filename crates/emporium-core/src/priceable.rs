//! # Priceable Items
//!
//! The capability shared by everything that can be put in a cart, and the
//! plain item that sits at the bottom of every decorator chain.
//!
//! ## Item Shapes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Priceable                                                              │
//! │  ├── BasicItem            name + fixed price (leaf)                     │
//! │  ├── Surcharge<P>         wraps P, adds a flat fee                      │
//! │  ├── FractionalDiscount<P> wraps P, takes a fraction off                │
//! │  └── &P, Box<P>, Rc<P>    handles delegate to the pointee               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::rc::Rc;

use crate::error::CoreResult;
use crate::price::Price;
use crate::validation::{validate_item_name, validate_price};

// =============================================================================
// Priceable Trait
// =============================================================================

/// Anything with a price and a human-readable description.
///
/// Both accessors are pure: calling them never changes the value and always
/// returns the same answer for the same value.
pub trait Priceable {
    /// The current price.
    fn price(&self) -> Price;

    /// The human-readable description.
    fn description(&self) -> String;
}

impl<P: Priceable + ?Sized> Priceable for &P {
    fn price(&self) -> Price {
        (**self).price()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<P: Priceable + ?Sized> Priceable for Box<P> {
    fn price(&self) -> Price {
        (**self).price()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

impl<P: Priceable + ?Sized> Priceable for Rc<P> {
    fn price(&self) -> Price {
        (**self).price()
    }

    fn description(&self) -> String {
        (**self).description()
    }
}

// =============================================================================
// Basic Item
// =============================================================================

/// A named item with a fixed price.
///
/// ## Example
/// ```rust
/// use emporium_core::{BasicItem, Priceable};
///
/// let item = BasicItem::new("Product 1", 100.0);
/// assert_eq!(item.price().value(), 100.0);
/// assert_eq!(item.description(), "Product 1");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BasicItem {
    name: String,
    price: Price,
}

impl BasicItem {
    /// Creates an item. Neither the name nor the price is checked.
    pub fn new(name: impl Into<String>, price: impl Into<Price>) -> Self {
        BasicItem {
            name: name.into(),
            price: price.into(),
        }
    }

    /// Creates an item after validating the name and price.
    ///
    /// ## Rules
    /// - Name must be non-blank and at most 200 characters
    /// - Price must be finite and non-negative
    pub fn try_new(name: impl Into<String>, price: f64) -> CoreResult<Self> {
        let name = name.into();
        validate_item_name(&name)?;
        validate_price(price)?;
        Ok(BasicItem::new(name, price))
    }

    /// Returns the item name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Priceable for BasicItem {
    fn price(&self) -> Price {
        self.price
    }

    fn description(&self) -> String {
        self.name.clone()
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
    fn test_basic_item_accessors() {
        let item = BasicItem::new("Product 2", 50.0);
        assert_eq!(item.name(), "Product 2");
        assert_eq!(item.description(), "Product 2");
        assert_eq!(item.price(), Price::new(50.0));
    }

    #[test]
    fn test_accessors_are_repeatable() {
        let item = BasicItem::new("Product 1", 100.0);
        assert_eq!(item.price(), item.price());
        assert_eq!(item.description(), item.description());
    }

    #[test]
    fn test_unchecked_constructor_accepts_anything() {
        let item = BasicItem::new("", -10.0);
        assert_eq!(item.price().value(), -10.0);
        assert_eq!(item.description(), "");
    }

    #[test]
    fn test_try_new_validates() {
        assert!(BasicItem::try_new("Product 1", 100.0).is_ok());

        let err = BasicItem::try_new("  ", 100.0).unwrap_err();
        assert_eq!(
            err,
            CoreError::Validation(ValidationError::Required {
                field: "name".to_string()
            })
        );

        let err = BasicItem::try_new("Product 1", -1.0).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::MustBeNonNegative { .. })
        ));
    }

    #[test]
    fn test_handles_delegate() {
        let item = BasicItem::new("Product 1", 100.0);

        let by_ref: &dyn Priceable = &item;
        assert_eq!(by_ref.price().value(), 100.0);

        let boxed: Box<dyn Priceable> = Box::new(item.clone());
        assert_eq!(boxed.description(), "Product 1");

        let shared: Rc<dyn Priceable> = Rc::new(item);
        let alias = Rc::clone(&shared);
        assert_eq!(alias.price(), shared.price());
    }
}
