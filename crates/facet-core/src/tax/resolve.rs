//! # Pure Resolution Tiers
//!
//! The jurisdiction-resolution tiers that need no I/O: an explicit
//! shipping address (highest priority) and a caller-supplied detected
//! location. The IP-based tier lives in `facet-checkout`, which composes
//! all three in priority order.
//!
//! ## Tier Behavior
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Tier 1: Shipping address  {state, country} both present               │
//! │          US: state NAME or code → name table → code → table lookup     │
//! │          Canada: same with the province table                          │
//! │          other country → international default                         │
//! │          unrecognized state → DEFAULT_US / DEFAULT_CA                  │
//! │                                                                         │
//! │  Tier 2: Detected location {country, region}                           │
//! │          region used directly as a code candidate (no name table -     │
//! │          geolocation sources already emit region codes)                │
//! │                                                                         │
//! │  Tiers 3/4 (IP lookup, final fallback): facet-checkout                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is total: unusable input yields `None` (tier not
//! applicable) and unrecognized-but-usable input degrades to a default
//! jurisdiction. Nothing errors.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::jurisdictions::{
    ca_province_code, default_ca, default_international, default_us, jurisdiction, us_state_code,
    DEFAULT_CA, DEFAULT_INTERNATIONAL, DEFAULT_US,
};
use super::{ResolvedJurisdiction, TaxJurisdiction};

// =============================================================================
// Location Signals
// =============================================================================

/// Shipping address fields relevant to tax resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub state: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

/// A location detected by an earlier step (e.g. browser geolocation),
/// already code-like: `region` is expected to be a region code, not a
/// display name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DetectedLocation {
    pub country: Option<String>,
    pub region: Option<String>,
}

// =============================================================================
// Country Classification
// =============================================================================

/// The three-way country branching every tier shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountryClass {
    UnitedStates,
    Canada,
    Other,
}

impl CountryClass {
    /// Classifies a country name or code, case-insensitively.
    pub fn classify(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "us" | "usa" | "united states" | "united states of america" => {
                CountryClass::UnitedStates
            }
            "ca" | "can" | "canada" => CountryClass::Canada,
            _ => CountryClass::Other,
        }
    }
}

// =============================================================================
// Tier 1: Shipping Address
// =============================================================================

/// Resolves from an explicit shipping address.
///
/// Applicable only when state and country are both present and non-empty;
/// otherwise `None` and the caller moves to the next tier. Provenance:
/// `"Shipping Address: {location}"`.
pub fn from_shipping_address(address: &ShippingAddress) -> Option<ResolvedJurisdiction> {
    let state = address.state.as_deref().map(str::trim).filter(|s| !s.is_empty())?;
    let country = address
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())?;

    let (code, entry) = match CountryClass::classify(country) {
        CountryClass::UnitedStates => lookup_or_default(
            us_state_code(state).as_deref(),
            DEFAULT_US,
            default_us(),
        ),
        CountryClass::Canada => lookup_or_default(
            ca_province_code(state).as_deref(),
            DEFAULT_CA,
            default_ca(),
        ),
        CountryClass::Other => (DEFAULT_INTERNATIONAL.to_string(), default_international()),
    };

    Some(ResolvedJurisdiction {
        provenance: format!("Shipping Address: {}", entry.location),
        code,
        jurisdiction: entry.clone(),
    })
}

// =============================================================================
// Tier 2: Detected Location
// =============================================================================

/// Resolves from a caller-supplied detected location.
///
/// Applicable when `country` is present; `region` is taken as a code
/// candidate directly. Provenance: `"Detected Location: {location}"`.
pub fn from_detected(detected: &DetectedLocation) -> Option<ResolvedJurisdiction> {
    let country = detected
        .country
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())?;

    let (code, entry) = from_country_region(country, detected.region.as_deref());
    Some(ResolvedJurisdiction {
        provenance: format!("Detected Location: {}", entry.location),
        code,
        jurisdiction: entry.clone(),
    })
}

// =============================================================================
// Shared Branching
// =============================================================================

/// The US/Canada/other branch keyed on a country plus an optional region
/// code candidate. Shared by the detected tier and the checkout crate's IP
/// tier.
pub fn from_country_region(
    country: &str,
    region: Option<&str>,
) -> (String, &'static TaxJurisdiction) {
    match CountryClass::classify(country) {
        CountryClass::UnitedStates => lookup_or_default(region, DEFAULT_US, default_us()),
        CountryClass::Canada => lookup_or_default(region, DEFAULT_CA, default_ca()),
        CountryClass::Other => (DEFAULT_INTERNATIONAL.to_string(), default_international()),
    }
}

/// The zero-tax fallback used when no tier produced usable data, or when
/// detection failed outright.
pub fn international_fallback(provenance: &str) -> ResolvedJurisdiction {
    ResolvedJurisdiction {
        code: DEFAULT_INTERNATIONAL.to_string(),
        jurisdiction: default_international().clone(),
        provenance: provenance.to_string(),
    }
}

fn lookup_or_default(
    candidate: Option<&str>,
    default_code: &str,
    default_entry: &'static TaxJurisdiction,
) -> (String, &'static TaxJurisdiction) {
    if let Some(candidate) = candidate {
        if let Some(entry) = jurisdiction(candidate) {
            return (candidate.trim().to_uppercase(), entry);
        }
    }
    (default_code.to_string(), default_entry)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn address(state: Option<&str>, country: Option<&str>) -> ShippingAddress {
        ShippingAddress {
            state: state.map(str::to_string),
            country: country.map(str::to_string),
            city: None,
            postal_code: None,
        }
    }

    #[test]
    fn test_country_classification() {
        assert_eq!(
            CountryClass::classify("United States"),
            CountryClass::UnitedStates
        );
        assert_eq!(CountryClass::classify("USA"), CountryClass::UnitedStates);
        assert_eq!(CountryClass::classify("us"), CountryClass::UnitedStates);
        assert_eq!(CountryClass::classify("Canada"), CountryClass::Canada);
        assert_eq!(CountryClass::classify("CA"), CountryClass::Canada);
        assert_eq!(CountryClass::classify("France"), CountryClass::Other);
    }

    #[test]
    fn test_address_with_state_name() {
        let resolved =
            from_shipping_address(&address(Some("California"), Some("United States"))).unwrap();
        assert_eq!(resolved.code, "CA");
        assert_eq!(resolved.jurisdiction.location, "California");
        assert_eq!(resolved.provenance, "Shipping Address: California");
    }

    #[test]
    fn test_address_with_state_abbreviation() {
        let resolved = from_shipping_address(&address(Some("TX"), Some("USA"))).unwrap();
        assert_eq!(resolved.code, "TX");
        assert_eq!(resolved.provenance, "Shipping Address: Texas");
    }

    #[test]
    fn test_address_with_province_name() {
        let resolved = from_shipping_address(&address(Some("Ontario"), Some("Canada"))).unwrap();
        assert_eq!(resolved.code, "ON");
        assert_eq!(resolved.jurisdiction.taxes[0].name, "HST");
    }

    #[test]
    fn test_address_with_unrecognized_state_uses_country_default() {
        let resolved =
            from_shipping_address(&address(Some("Atlantis"), Some("United States"))).unwrap();
        assert_eq!(resolved.code, "DEFAULT_US");
        assert!(resolved.jurisdiction.taxes.is_empty());

        let resolved = from_shipping_address(&address(Some("Atlantis"), Some("Canada"))).unwrap();
        assert_eq!(resolved.code, "DEFAULT_CA");
        assert_eq!(resolved.jurisdiction.taxes.len(), 1); // GST still owed
    }

    #[test]
    fn test_address_in_other_country_is_international() {
        let resolved = from_shipping_address(&address(Some("Bavaria"), Some("Germany"))).unwrap();
        assert_eq!(resolved.code, "DEFAULT_INTERNATIONAL");
        assert!(resolved.jurisdiction.taxes.is_empty());
        assert_eq!(resolved.provenance, "Shipping Address: International");
    }

    #[test]
    fn test_address_tier_requires_both_fields() {
        assert!(from_shipping_address(&address(None, Some("United States"))).is_none());
        assert!(from_shipping_address(&address(Some("California"), None)).is_none());
        assert!(from_shipping_address(&address(Some("  "), Some("United States"))).is_none());
    }

    #[test]
    fn test_detected_location_uses_region_as_code() {
        let resolved = from_detected(&DetectedLocation {
            country: Some("US".to_string()),
            region: Some("WA".to_string()),
        })
        .unwrap();
        assert_eq!(resolved.code, "WA");
        assert_eq!(resolved.provenance, "Detected Location: Washington");
    }

    #[test]
    fn test_detected_location_without_region_uses_country_default() {
        let resolved = from_detected(&DetectedLocation {
            country: Some("CA".to_string()),
            region: None,
        })
        .unwrap();
        assert_eq!(resolved.code, "DEFAULT_CA");
        assert_eq!(resolved.provenance, "Detected Location: Canada");
    }

    #[test]
    fn test_detected_location_requires_country() {
        assert!(from_detected(&DetectedLocation {
            country: None,
            region: Some("CA".to_string()),
        })
        .is_none());
    }

    #[test]
    fn test_detected_region_names_are_not_normalized() {
        // Tier 2 expects codes; a full name misses the table and degrades
        let resolved = from_detected(&DetectedLocation {
            country: Some("US".to_string()),
            region: Some("California".to_string()),
        })
        .unwrap();
        assert_eq!(resolved.code, "DEFAULT_US");
    }

    #[test]
    fn test_international_fallback() {
        let resolved = international_fallback("Unknown");
        assert_eq!(resolved.code, "DEFAULT_INTERNATIONAL");
        assert!(resolved.jurisdiction.taxes.is_empty());
        assert_eq!(resolved.provenance, "Unknown");
    }
}
