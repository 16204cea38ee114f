//! # IP Geolocation Client
//!
//! The engine's single outbound network call: resolving a client IP to a
//! coarse location, used as the lowest-priority tax-jurisdiction signal.
//!
//! ## Best-Effort Contract
//! The lookup service is an untrusted oracle. The client surfaces every
//! failure mode - connect error, timeout, non-2xx, malformed body, a
//! `status` other than `"success"` - as a typed [`GeoError`] and nothing
//! else. Deciding what a failure *means* (fall back to the international
//! default) belongs to the resolver, which keeps the fallback policy
//! visible and testable instead of buried in a catch block here.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::GeoConfig;
use crate::error::GeoError;

/// Response shape of the lookup service (ip-api compatible).
///
/// Fields other than `status` are optional: failed lookups omit them, and
/// partial answers happen on anonymized ranges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IpLocation {
    /// `"success"` or `"fail"`.
    pub status: String,

    /// Country display name ("United States").
    pub country: Option<String>,

    /// ISO country code ("US").
    pub country_code: Option<String>,

    /// Region code ("CA" for California).
    pub region: Option<String>,

    /// Region display name ("California").
    pub region_name: Option<String>,
}

impl IpLocation {
    /// Best country signal: the ISO code when present, else the name.
    /// Both classify through the same US/Canada/other branching.
    pub fn country_signal(&self) -> Option<&str> {
        self.country_code.as_deref().or(self.country.as_deref())
    }
}

/// Thin reqwest wrapper around the lookup endpoint.
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoClient {
    /// Builds a client with the configured endpoint and timeout.
    ///
    /// The timeout is applied at the client level so every request on the
    /// checkout critical path is bounded; a timeout surfaces as a
    /// [`GeoError::Request`] like any other transport failure.
    pub fn new(config: &GeoConfig) -> Result<Self, GeoError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;

        Ok(GeoClient {
            client,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
        })
    }

    /// Looks up a client IP.
    ///
    /// ## Returns
    /// The parsed location on a successful lookup; a [`GeoError`] on any
    /// transport failure or when the service reports `status != "success"`
    /// (private-range IPs, quota exhaustion).
    pub async fn lookup(&self, ip: &str) -> Result<IpLocation, GeoError> {
        let url = format!("{}/{}", self.endpoint, ip.trim());
        debug!(ip = %ip, "IP geolocation lookup");

        let location: IpLocation = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if location.status != "success" {
            return Err(GeoError::LookupFailed {
                status: location.status,
            });
        }

        debug!(
            country = location.country_code.as_deref().unwrap_or("?"),
            region = location.region.as_deref().unwrap_or("?"),
            "IP geolocation resolved"
        );
        Ok(location)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
