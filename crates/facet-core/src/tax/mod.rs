//! # Tax Subsystem
//!
//! Jurisdiction resolution and tax computation, independent of shipping.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Tax Subsystem                                    │
//! │                                                                         │
//! │  Location signal                 Resolution                Computation  │
//! │  ───────────────                 ──────────                ───────────  │
//! │                                                                         │
//! │  Shipping address ──┐                                                   │
//! │  Detected location ─┼──► resolve (this crate: pure tiers;              │
//! │  Client IP ─────────┘     facet-checkout: IP tier)                     │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                    ResolvedJurisdiction ────► compute_tax(subtotal)    │
//! │                    (code + components +            │                    │
//! │                     provenance)                    ▼                    │
//! │                                              TaxResult                 │
//! │                                    (itemized lines, totals,            │
//! │                                     location + provenance)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//! - [`jurisdictions`] - The static rate table (US states, Canadian
//!   provinces, defaults) and name→code tables
//! - [`resolve`] - The pure resolution tiers (address, detected location)
//! - [`compute`] - Per-component tax math

pub mod compute;
pub mod jurisdictions;
pub mod resolve;

pub use compute::{compute_tax, compute_tax_result, TaxComputation, TaxLine, TaxResult};
pub use jurisdictions::{
    ca_province_code, jurisdiction, us_state_code, DEFAULT_CA, DEFAULT_INTERNATIONAL, DEFAULT_US,
};
pub use resolve::{
    from_country_region, from_detected, from_shipping_address, international_fallback,
    CountryClass, DetectedLocation, ShippingAddress,
};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Tax Components
// =============================================================================

/// Kind of tax component a jurisdiction levies.
///
/// The Canadian kinds (GST/PST/HST/QST) are the only place multiple
/// simultaneous components occur (GST+PST, GST+QST).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TaxType {
    Sales,
    Excise,
    GrossReceipts,
    Gst,
    Pst,
    Hst,
    Qst,
}

/// One tax a jurisdiction levies: display name, decimal rate, kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxComponent {
    pub name: String,

    /// Decimal rate (0.0725 = 7.25%).
    pub rate: f64,

    #[serde(rename = "type")]
    pub tax_type: TaxType,
}

// =============================================================================
// Jurisdictions
// =============================================================================

/// A tax jurisdiction: display name plus its ordered component list.
///
/// An empty `taxes` list is a valid jurisdiction (tax-free states, the
/// international default), not missing data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxJurisdiction {
    /// Display name ("California", "Ontario", "International").
    pub location: String,

    pub taxes: Vec<TaxComponent>,
}

/// A jurisdiction plus how it was determined.
///
/// `provenance` is the user-facing string describing the signal that won
/// ("Shipping Address: California", "Location Detection Failed", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedJurisdiction {
    /// Table key ("CA", "ON", "DEFAULT_INTERNATIONAL", ...).
    pub code: String,

    pub jurisdiction: TaxJurisdiction,

    pub provenance: String,
}
