//! # Validation Module
//!
//! Opt-in input checks for item, decorator and strategy parameters.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Two Construction Paths                             │
//! │                                                                         │
//! │  Unchecked: BasicItem::new / Surcharge::new / FractionalDiscount::new   │
//! │  └── Accepts any value; NaN, negatives and fractions > 1 flow through  │
//! │                                                                         │
//! │  Checked:   BasicItem::try_new / Surcharge::try_new / ...::try_new      │
//! │  └── THIS MODULE: rejects values with a typed ValidationError           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use emporium_core::validation::{validate_fraction, validate_price};
//!
//! assert!(validate_price(100.0).is_ok());
//! assert!(validate_fraction(1.5).is_err());
//! ```

use crate::error::ValidationError;
use crate::MAX_ITEM_NAME_LENGTH;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - Must be at most MAX_ITEM_NAME_LENGTH (200) characters
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_ITEM_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_ITEM_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates a surcharge tag: must not be blank.
pub fn validate_tag(tag: &str) -> ValidationResult<()> {
    if tag.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "tag".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates an item price.
///
/// ## Rules
/// - Must be finite
/// - Must be non-negative (zero is allowed for free items)
///
/// ## Example
/// ```rust
/// use emporium_core::validation::validate_price;
///
/// assert!(validate_price(0.0).is_ok());
/// assert!(validate_price(-1.0).is_err());
/// assert!(validate_price(f64::NAN).is_err());
/// ```
pub fn validate_price(price: f64) -> ValidationResult<()> {
    validate_finite("price", price)?;

    if price < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a flat surcharge fee. Same rules as prices.
pub fn validate_fee(fee: f64) -> ValidationResult<()> {
    validate_finite("fee", fee)?;

    if fee < 0.0 {
        return Err(ValidationError::MustBeNonNegative {
            field: "fee".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount fraction or strategy rate.
///
/// ## Rules
/// - Must be finite
/// - Must lie in `[0, 1]` (0% to 100% off)
pub fn validate_fraction(fraction: f64) -> ValidationResult<()> {
    validate_finite("fraction", fraction)?;

    if !(0.0..=1.0).contains(&fraction) {
        return Err(ValidationError::OutOfRange {
            field: "fraction".to_string(),
            min: 0.0,
            max: 1.0,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Product 1").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name("   ").is_err());
        assert!(validate_item_name(&"A".repeat(201)).is_err());
        assert!(validate_item_name(&"A".repeat(200)).is_ok());
    }

    #[test]
    fn test_validate_tag() {
        assert!(validate_tag("Gift Wrapped").is_ok());
        assert!(validate_tag(" ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(0.0).is_ok());
        assert!(validate_price(100.0).is_ok());

        assert_eq!(
            validate_price(-0.01),
            Err(ValidationError::MustBeNonNegative {
                field: "price".to_string()
            })
        );
        assert!(validate_price(f64::INFINITY).is_err());
        assert!(validate_price(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_fee() {
        assert!(validate_fee(5.0).is_ok());
        assert!(validate_fee(-5.0).is_err());
        assert!(validate_fee(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_fraction() {
        assert!(validate_fraction(0.0).is_ok());
        assert!(validate_fraction(0.2).is_ok());
        assert!(validate_fraction(1.0).is_ok());

        assert!(validate_fraction(-0.1).is_err());
        assert!(validate_fraction(1.01).is_err());
        assert_eq!(
            validate_fraction(f64::NAN),
            Err(ValidationError::NotFinite {
                field: "fraction".to_string()
            })
        );
    }
}
