//! Geolocation client configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. The public ip-api endpoint is the out-of-the-box default;
//! deployments point `FACET_GEO_ENDPOINT` at their own mirror or a paid
//! tier.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default lookup endpoint. Responses are `{status, country, countryCode,
/// region, regionName}`-shaped JSON.
pub const DEFAULT_GEO_ENDPOINT: &str = "http://ip-api.com/json";

/// Default request timeout in seconds.
///
/// The lookup is a best-effort signal on the checkout critical path; a
/// slow answer is worth less than no answer, so the bound is short and a
/// timeout degrades exactly like any other lookup failure.
pub const DEFAULT_GEO_TIMEOUT_SECS: u64 = 3;

/// IP-geolocation client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeoConfig {
    /// Lookup endpoint; the client appends `/{ip}`.
    pub endpoint: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl GeoConfig {
    /// Load configuration from environment variables.
    ///
    /// - `FACET_GEO_ENDPOINT` - lookup endpoint (default: public ip-api)
    /// - `FACET_GEO_TIMEOUT_SECS` - request timeout (default: 3)
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(GeoConfig {
            endpoint: env::var("FACET_GEO_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_GEO_ENDPOINT.to_string()),

            timeout_secs: env::var("FACET_GEO_TIMEOUT_SECS")
                .unwrap_or_else(|_| DEFAULT_GEO_TIMEOUT_SECS.to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("FACET_GEO_TIMEOUT_SECS".to_string()))?,
        })
    }

    /// The timeout as a `Duration` for the HTTP client builder.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for GeoConfig {
    fn default() -> Self {
        GeoConfig {
            endpoint: DEFAULT_GEO_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_GEO_TIMEOUT_SECS,
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeoConfig::default();
        assert_eq!(config.endpoint, DEFAULT_GEO_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_GEO_TIMEOUT_SECS);
        assert_eq!(config.timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_from_env_round_trip() {
        // Untouched vars: defaults apply
        env::remove_var("FACET_GEO_ENDPOINT");
        env::remove_var("FACET_GEO_TIMEOUT_SECS");
        let config = GeoConfig::from_env().unwrap();
        assert_eq!(config.endpoint, DEFAULT_GEO_ENDPOINT);

        env::set_var("FACET_GEO_ENDPOINT", "http://geo.internal/json");
        env::set_var("FACET_GEO_TIMEOUT_SECS", "10");
        let config = GeoConfig::from_env().unwrap();
        assert_eq!(config.endpoint, "http://geo.internal/json");
        assert_eq!(config.timeout_secs, 10);

        env::set_var("FACET_GEO_TIMEOUT_SECS", "not-a-number");
        assert!(matches!(
            GeoConfig::from_env(),
            Err(ConfigError::InvalidValue(_))
        ));

        env::remove_var("FACET_GEO_ENDPOINT");
        env::remove_var("FACET_GEO_TIMEOUT_SECS");
    }
}
