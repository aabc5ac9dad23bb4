//! # Demonstration Scenarios
//!
//! Builds the two-product cart the driver prints.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Literal                                                                │
//! │    add(Product 1), add(Product 2), set 10% off                          │
//! │    then Product 1 → gift wrapped, Product 2 → 20% item discount         │
//! │    cart still holds the plain handles          total = 135.0            │
//! │                                                                         │
//! │  Corrected                                                              │
//! │    Product 1 gift wrapped, then add both       total = 139.5            │
//! │                                                                         │
//! │  Decorated                                                              │
//! │    both decorations, then add both             total = 130.5            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::rc::Rc;

use emporium_core::{BasicItem, Cart, Price, Priceable, PriceableExt};
use tracing::{debug, info};

use crate::config::{DemoConfig, Scenario};

/// Fractional discount the original wiring puts on Product 2.
pub const PRODUCT_2_DISCOUNT: f64 = 0.2;

/// Prefix of the single stdout line.
pub const TOTAL_LINE_PREFIX: &str = "Total amount after applying the discount: $";

fn product_1() -> BasicItem {
    BasicItem::new("Product 1", 100.0)
}

fn product_2() -> BasicItem {
    BasicItem::new("Product 2", 50.0)
}

/// Builds the cart for the configured scenario and strategy.
pub fn run(config: &DemoConfig) -> Cart {
    info!(scenario = ?config.scenario, strategy = ?config.strategy, "Building cart");

    let mut cart = match config.scenario {
        Scenario::Literal => literal(config),
        Scenario::Corrected => corrected(),
        Scenario::Decorated => decorated(),
    };

    // Literal sets its strategy mid-sequence, as the original wiring does.
    if config.scenario != Scenario::Literal {
        install_strategy(&mut cart, config);
    }

    info!(
        items = cart.len(),
        subtotal = %cart.subtotal(),
        total = %cart.total(),
        "Cart total computed"
    );
    cart
}

fn install_strategy(cart: &mut Cart, config: &DemoConfig) {
    match config.strategy.to_strategy() {
        Some(strategy) => {
            debug!(rate = strategy.rate(), "Setting pricing strategy");
            cart.set_strategy(strategy);
        }
        None => debug!("No pricing strategy"),
    }
}

fn add(cart: &mut Cart, item: Rc<dyn Priceable>) {
    debug!(description = %item.description(), price = %item.price(), "Adding item");
    cart.add(item);
}

fn literal(config: &DemoConfig) -> Cart {
    let mut cart = Cart::new();
    let product_1 = product_1().shared();
    let product_2 = product_2().shared();
    add(&mut cart, Rc::clone(&product_1));
    add(&mut cart, Rc::clone(&product_2));

    install_strategy(&mut cart, config);

    // Rebinding builds new values; the cart keeps the handles it was given.
    let product_1 = product_1.gift_wrapped();
    let product_2 = product_2.with_discount(PRODUCT_2_DISCOUNT);
    debug!(
        product_1 = %product_1.description(),
        product_2 = %product_2.description(),
        "Decorated after adding; cart unaffected"
    );

    cart
}

fn corrected() -> Cart {
    let mut cart = Cart::new();
    add(&mut cart, product_1().gift_wrapped().shared());
    add(&mut cart, product_2().shared());
    cart
}

fn decorated() -> Cart {
    let mut cart = Cart::new();
    add(&mut cart, product_1().gift_wrapped().shared());
    add(&mut cart, product_2().with_discount(PRODUCT_2_DISCOUNT).shared());
    cart
}

/// Renders the line the driver prints.
///
/// ```rust
/// use emporium_core::Price;
/// use emporium_demo::scenario::total_line;
///
/// assert_eq!(
///     total_line(Price::new(135.0)),
///     "Total amount after applying the discount: $135.0"
/// );
/// ```
pub fn total_line(total: Price) -> String {
    format!("{}{}", TOTAL_LINE_PREFIX, total)
}
