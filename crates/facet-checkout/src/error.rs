//! Error types for the checkout layer.
//!
//! `GeoError` never crosses this crate's boundary as a failure: the
//! resolver catches it at the point of use and degrades to the
//! international default. Only `CheckoutError` (invalid inputs surfaced
//! from the core) reaches the storefront handler.

use thiserror::Error;

/// Errors the storefront handler can see from a quote.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Invalid input rejected by the core engine.
    #[error(transparent)]
    Core(#[from] facet_core::CoreError),
}

/// Convenience type alias for Results with CheckoutError.
pub type CheckoutResult<T> = Result<T, CheckoutError>;

/// Failure of the best-effort IP-geolocation lookup.
///
/// Treated identically regardless of variant: the resolver logs it and
/// falls back to the international tax-free default.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Transport failure: connect error, timeout, non-2xx status.
    #[error("Geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The service answered but reported a failed lookup.
    #[error("Geolocation lookup returned status '{status}'")]
    LookupFailed { status: String },
}
