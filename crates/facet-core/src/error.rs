//! # Error Types
//!
//! Domain-specific error types for facet-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  facet-core errors (this file)                                         │
//! │  ├── CoreError        - Invalid-input failures (caller bugs)           │
//! │  ├── ValidationError  - Field-level validation failures                │
//! │  └── DistanceError    - Distance estimator unavailability              │
//! │                                                                         │
//! │  facet-checkout errors (separate crate)                                │
//! │  ├── GeoError         - IP lookup failures (degraded, never surfaced)  │
//! │  └── CheckoutError    - What the storefront handler sees               │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CheckoutError → Storefront        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Only invalid *inputs* become errors - configuration absence (no zone,
//!    no band, no jurisdiction) is a normal outcome, represented in types
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core calculation errors.
///
/// These represent caller bugs - malformed inputs the engine refuses to
/// route around. Everything else (unknown zones, unmatched bands, failed
/// lookups) degrades to a valid, conservative output instead.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Tax was requested on a non-positive subtotal.
    ///
    /// ## When This Occurs
    /// - Checkout invoked with an empty or corrupted cart total
    /// - A caller forwarded a refund/negative adjustment into tax math
    #[error("Subtotal must be positive, got {subtotal}")]
    NonPositiveSubtotal { subtotal: f64 },

    /// Shipping was requested without a destination country.
    #[error("Shipping destination requires a country")]
    MissingDestinationCountry,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when caller-supplied input doesn't meet requirements.
/// Used for early validation before calculation runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: f64, max: f64 },
}

// =============================================================================
// Distance Error
// =============================================================================

/// Failure of a [`crate::distance::DistanceEstimator`] implementation.
///
/// The shipped placeholder estimator is total and never returns this, but
/// real geocoding/carrier integrations fail. The rate engine treats a
/// failing estimator as "method unavailable" and excludes the method; this
/// error never aborts a shipping calculation.
#[derive(Debug, Error)]
pub enum DistanceError {
    /// The backing distance service could not produce an estimate.
    #[error("Distance service unavailable: {0}")]
    Unavailable(String),
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
    fn test_error_messages() {
        let err = CoreError::NonPositiveSubtotal { subtotal: -4.5 };
        assert_eq!(err.to_string(), "Subtotal must be positive, got -4.5");

        let err = CoreError::MissingDestinationCountry;
        assert_eq!(err.to_string(), "Shipping destination requires a country");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "country".to_string(),
        };
        assert_eq!(err.to_string(), "country is required");

        let err = ValidationError::MustBePositive {
            field: "subtotal".to_string(),
        };
        assert_eq!(err.to_string(), "subtotal must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "country".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
