//! # facet-core: Pure Business Logic for Facet Commerce
//!
//! This crate is the decision-logic core of the Facet storefront. Everything
//! here is a pure function over caller-supplied inputs: no database, no
//! network, no clocks hidden inside calculations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Facet Commerce Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Storefront (web handlers)                      │   │
//! │  │     Catalog ──► Cart ──► Checkout ──► Order                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    facet-checkout                               │   │
//! │  │     IP geolocation client, jurisdiction resolver, quotes        │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                ★ facet-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   zone    │  │   rates   │  │    tax    │  │   │
//! │  │   │ Settings  │  │ resolve_  │  │ calculate │  │ resolve + │  │   │
//! │  │   │  Methods  │  │   zone    │  │ _shipping │  │  compute  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Contract types (settings, methods, zones, cart, options)
//! - [`zone`] - Destination country to shipping zone resolution
//! - [`rates`] - The shipping rate engine
//! - [`distance`] - Distance estimation seam for distance-based methods
//! - [`tax`] - Jurisdiction tables, resolution tiers, tax computation
//! - [`money`] - Currency rounding and display helpers
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation and settings linting
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every calculation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Absence is not an error**: No matching zone, no viable rate band, no
//!    matching jurisdiction - all are normal, representable outcomes
//! 4. **Explicit Errors**: Invalid inputs are typed errors, never strings or panics
//!
//! ## Example Usage
//!
//! ```rust
//! use facet_core::tax::{compute_tax, jurisdiction};
//!
//! // Ontario charges a single 13% HST component
//! let on = jurisdiction("ON").unwrap();
//! let result = compute_tax(500.0, on).unwrap();
//!
//! assert_eq!(result.total_tax_amount, 65.0);
//! assert_eq!(result.total, 565.0);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod distance;
pub mod error;
pub mod money;
pub mod rates;
pub mod tax;
pub mod types;
pub mod validation;
pub mod zone;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use facet_core::ShippingSettings` instead of
// `use facet_core::types::ShippingSettings`

pub use error::{CoreError, CoreResult, ValidationError};
pub use rates::{calculate_shipping, calculate_shipping_with};
pub use types::*;
pub use zone::resolve_zone;

// =============================================================================
// Crate-Level Constants
// =============================================================================
// The reference storefront re-derived these defaults ad hoc at each use site;
// they are engine policy, so they live here as named constants with one point
// of application each.

/// Default weight (kg-equivalent) assumed for a cart item with no weight.
///
/// Jewelry catalog entries frequently omit weight; half a kilogram is the
/// packed-parcel assumption applied when the weight-based engine needs one.
/// Applied in exactly one place: [`rates::total_cart_weight`].
pub const DEFAULT_ITEM_WEIGHT_KG: f64 = 0.5;

/// Base rate for the `calculated` method type's synthetic estimate.
///
/// Stands in for a carrier-rate API call. The estimate is
/// `CALCULATED_BASE_RATE + weight × CALCULATED_RATE_PER_KG`.
pub const CALCULATED_BASE_RATE: f64 = 15.99;

/// Per-kilogram component of the `calculated` synthetic estimate.
pub const CALCULATED_RATE_PER_KG: f64 = 2.5;

/// Placeholder distance (km) when origin and destination share a country.
///
/// See [`distance::RegionalEstimate`]. A real geocoding service replaces
/// this through the [`distance::DistanceEstimator`] seam.
pub const DOMESTIC_DISTANCE_KM: f64 = 500.0;

/// Placeholder distance (km) when origin and destination countries differ.
pub const INTERNATIONAL_DISTANCE_KM: f64 = 2000.0;

/// Synthetic option id for the storewide free-shipping overlay.
pub const FREE_GLOBAL_ID: &str = "free_global";

/// Synthetic option id for the local pickup overlay.
pub const LOCAL_PICKUP_ID: &str = "local_pickup";
