//! # Error Types
//!
//! Domain-specific error types for emporium-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  emporium-core errors (this file)                                       │
//! │  ├── CoreError        - General domain errors                           │
//! │  └── ValidationError  - Rejected constructor input                      │
//! │                                                                         │
//! │  emporium-demo errors (app)                                             │
//! │  └── ConfigError      - Bad EMPORIUM_* environment values               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The demonstrated path (`Cart::add`, `Cart::total`, decorator `new`) never
//! produces these. Only the checked `try_new` constructors do.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing errors.
#[derive(Debug, Error, PartialEq)]
pub enum CoreError {
    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors raised by checked constructors.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Value must not be below zero.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::OutOfRange {
            field: "fraction".to_string(),
            min: 0.0,
            max: 1.0,
        };
        assert_eq!(err.to_string(), "fraction must be between 0 and 1");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::NotFinite {
            field: "price".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert_eq!(
            core_err.to_string(),
            "Validation error: price must be a finite number"
        );
    }
}
