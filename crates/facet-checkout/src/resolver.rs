//! # Jurisdiction Resolver
//!
//! Composes the three location signals into one resolved tax jurisdiction.
//!
//! ## Priority (first applicable wins)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Shipping address   (state + country)    pure, facet-core          │
//! │  2. Detected location  (country + region)   pure, facet-core          │
//! │  3. IP geolocation     (client IP)          network, best-effort      │
//! │  4. Nothing usable                          international, "Unknown"  │
//! │                                                                         │
//! │  Tier 3 failure of ANY kind (timeout, refusal, bad body, fail         │
//! │  status) → international default, "Location Detection Failed".        │
//! │  Resolution NEVER fails; checkout always gets a jurisdiction.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use facet_core::tax::{
    from_country_region, from_detected, from_shipping_address, international_fallback,
    DetectedLocation, ResolvedJurisdiction, ShippingAddress,
};

use crate::geo::GeoClient;

/// Provenance reported when the IP tier was reached but failed.
const DETECTION_FAILED: &str = "Location Detection Failed";

/// Provenance reported when no tier had usable data.
const UNKNOWN: &str = "Unknown";

/// The location signals checkout gathered for one request, best first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSignals {
    /// Explicit shipping address, if the shopper entered one.
    pub shipping_address: Option<ShippingAddress>,

    /// Location from a prior detection step (browser geolocation).
    pub detected_location: Option<DetectedLocation>,

    /// Best-known client IP from the request's forwarding headers.
    pub client_ip: Option<String>,
}

/// Resolves the tax jurisdiction for a checkout request.
///
/// Total: every input combination produces a jurisdiction. The only I/O is
/// the tier-3 lookup, reached when neither pure tier applies, and its
/// failure degrades locally.
pub async fn resolve_jurisdiction(
    signals: &LocationSignals,
    geo: &GeoClient,
) -> ResolvedJurisdiction {
    if let Some(address) = &signals.shipping_address {
        if let Some(resolved) = from_shipping_address(address) {
            debug!(code = %resolved.code, "jurisdiction from shipping address");
            return resolved;
        }
    }

    if let Some(detected) = &signals.detected_location {
        if let Some(resolved) = from_detected(detected) {
            debug!(code = %resolved.code, "jurisdiction from detected location");
            return resolved;
        }
    }

    let ip = signals
        .client_ip
        .as_deref()
        .map(str::trim)
        .filter(|ip| !ip.is_empty());

    if let Some(ip) = ip {
        match geo.lookup(ip).await {
            Ok(location) => {
                if let Some(country) = location.country_signal() {
                    let (code, entry) = from_country_region(country, location.region.as_deref());
                    debug!(code = %code, "jurisdiction from IP geolocation");
                    return ResolvedJurisdiction {
                        provenance: format!("IP Geolocation: {}", entry.location),
                        code,
                        jurisdiction: entry.clone(),
                    };
                }
                warn!(ip = %ip, "IP geolocation answered without a country");
                return international_fallback(DETECTION_FAILED);
            }
            Err(err) => {
                warn!(ip = %ip, error = %err, "IP geolocation failed; using international default");
                return international_fallback(DETECTION_FAILED);
            }
        }
    }

    international_fallback(UNKNOWN)
}

/// Extracts the client IP from an `x-forwarded-for` style header value:
/// the first non-empty, comma-separated entry.
///
/// ## Example
/// ```rust
/// use facet_checkout::resolver::first_forwarded_ip;
///
/// assert_eq!(
///     first_forwarded_ip("203.0.113.7, 70.41.3.18, 150.172.238.178"),
///     Some("203.0.113.7")
/// );
/// assert_eq!(first_forwarded_ip(""), None);
/// ```
pub fn first_forwarded_ip(header_value: &str) -> Option<&str> {
    header_value
        .split(',')
        .map(str::trim)
        .find(|entry| !entry.is_empty())
}

// =============================================================================
// Unit Tests
// =============================================================================
