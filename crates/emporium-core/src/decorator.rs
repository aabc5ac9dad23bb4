//! # Product Decorators
//!
//! Wrappers that take ownership of one inner [`Priceable`] and derive a new
//! price and description from it. The inner value is never modified, and
//! nothing is cached: every call re-reads the whole chain.
//!
//! ## Chain Evaluation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BasicItem("Product 1", 100.0)                                          │
//! │      .gift_wrapped()            ──► Surcharge { fee: 5.0 }              │
//! │      .with_discount(0.5)        ──► FractionalDiscount { 0.5 }          │
//! │                                                                         │
//! │  price():       (100.0 + 5.0) × (1 - 0.5)          = 52.5               │
//! │  description(): "Product 1 (Gift Wrapped) (Discount: 50.0%)"            │
//! │                                                                         │
//! │  Innermost first, outermost last: wrapping A then B gives B(A(p)).      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::rc::Rc;

use crate::error::CoreResult;
use crate::price::{format_amount, Price};
use crate::priceable::Priceable;
use crate::validation::{validate_fee, validate_fraction, validate_tag};
use crate::{GIFT_WRAP_FEE, GIFT_WRAP_TAG};

// =============================================================================
// Surcharge
// =============================================================================

/// Adds a flat fee and tags the description: `"<inner> (<tag>)"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Surcharge<P> {
    inner: P,
    fee: f64,
    tag: String,
}

impl<P: Priceable> Surcharge<P> {
    /// Wraps `inner` with a fee and tag. Neither is checked.
    pub fn new(inner: P, fee: f64, tag: impl Into<String>) -> Self {
        Surcharge {
            inner,
            fee,
            tag: tag.into(),
        }
    }

    /// Wraps `inner` after checking the fee is finite and non-negative and
    /// the tag is not blank.
    pub fn try_new(inner: P, fee: f64, tag: impl Into<String>) -> CoreResult<Self> {
        let tag = tag.into();
        validate_fee(fee)?;
        validate_tag(&tag)?;
        Ok(Surcharge::new(inner, fee, tag))
    }

    /// Gift wrapping: a 5.0 fee tagged `Gift Wrapped`.
    ///
    /// ```rust
    /// use emporium_core::{BasicItem, Priceable, Surcharge};
    ///
    /// let wrapped = Surcharge::gift_wrapped(BasicItem::new("Product 1", 100.0));
    /// assert_eq!(wrapped.price().value(), 105.0);
    /// assert_eq!(wrapped.description(), "Product 1 (Gift Wrapped)");
    /// ```
    pub fn gift_wrapped(inner: P) -> Self {
        Surcharge::new(inner, GIFT_WRAP_FEE, GIFT_WRAP_TAG)
    }
}

impl<P> Surcharge<P> {
    /// The flat fee added on top of the inner price.
    pub fn fee(&self) -> f64 {
        self.fee
    }

    /// The tag appended to the description.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Borrows the wrapped value.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps, returning the inner value untouched.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priceable> Priceable for Surcharge<P> {
    fn price(&self) -> Price {
        self.inner.price() + Price::new(self.fee)
    }

    fn description(&self) -> String {
        format!("{} ({})", self.inner.description(), self.tag)
    }
}

// =============================================================================
// Fractional Discount
// =============================================================================

/// Takes a fraction off the inner price and notes it in the description:
/// `"<inner> (Discount: <fraction × 100>%)"`.
///
/// ```rust
/// use emporium_core::{BasicItem, FractionalDiscount, Priceable};
///
/// let discounted = FractionalDiscount::new(BasicItem::new("Product 2", 50.0), 0.2);
/// assert_eq!(discounted.price().value(), 40.0);
/// assert_eq!(discounted.description(), "Product 2 (Discount: 20.0%)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FractionalDiscount<P> {
    inner: P,
    fraction: f64,
}

impl<P: Priceable> FractionalDiscount<P> {
    /// Wraps `inner` with a discount fraction. Values outside `[0, 1]` are
    /// accepted and produce surcharges or negative prices.
    pub fn new(inner: P, fraction: f64) -> Self {
        FractionalDiscount { inner, fraction }
    }

    /// Wraps `inner` after checking the fraction lies in `[0, 1]`.
    pub fn try_new(inner: P, fraction: f64) -> CoreResult<Self> {
        validate_fraction(fraction)?;
        Ok(FractionalDiscount::new(inner, fraction))
    }
}

impl<P> FractionalDiscount<P> {
    /// The fraction taken off.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Borrows the wrapped value.
    pub fn inner(&self) -> &P {
        &self.inner
    }

    /// Unwraps, returning the inner value untouched.
    pub fn into_inner(self) -> P {
        self.inner
    }
}

impl<P: Priceable> Priceable for FractionalDiscount<P> {
    fn price(&self) -> Price {
        self.inner.price().discounted_by(self.fraction)
    }

    fn description(&self) -> String {
        format!(
            "{} (Discount: {}%)",
            self.inner.description(),
            format_amount(self.fraction * 100.0)
        )
    }
}

// =============================================================================
// Fluent Wrapping
// =============================================================================

/// Chaining helpers available on every sized [`Priceable`].
///
/// Each call wraps the receiver, so calls apply in reading order.
pub trait PriceableExt: Priceable + Sized {
    /// Wraps in [`Surcharge::gift_wrapped`].
    fn gift_wrapped(self) -> Surcharge<Self> {
        Surcharge::gift_wrapped(self)
    }

    /// Wraps in a [`Surcharge`] with the given fee and tag.
    fn with_surcharge(self, fee: f64, tag: impl Into<String>) -> Surcharge<Self> {
        Surcharge::new(self, fee, tag)
    }

    /// Wraps in a [`FractionalDiscount`].
    fn with_discount(self, fraction: f64) -> FractionalDiscount<Self> {
        FractionalDiscount::new(self, fraction)
    }

    /// Erases the concrete type behind a box.
    fn boxed(self) -> Box<dyn Priceable>
    where
        Self: 'static,
    {
        Box::new(self)
    }

    /// Erases the concrete type behind a shared handle, ready for a cart.
    fn shared(self) -> Rc<dyn Priceable>
    where
        Self: 'static,
    {
        Rc::new(self)
    }
}

impl<P: Priceable> PriceableExt for P {}

// =============================================================================
// Unit Tests
// =============================================================================
