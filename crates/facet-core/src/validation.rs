//! # Validation Module
//!
//! Input validation and merchant-settings linting.
//!
//! ## Two Kinds of Checks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input validation (hard failures)                                       │
//! │  ├── validate_destination  - shipping needs a country                  │
//! │  ├── validate_subtotal     - tax needs a positive subtotal             │
//! │  └── validate_cart         - quantities/prices/weights sane            │
//! │      These are caller bugs. The engine rejects them with typed         │
//! │      errors instead of routing around them.                            │
//! │                                                                         │
//! │  Settings linting (warnings, never failures)                           │
//! │  └── lint_settings         - duplicate zone countries, inverted        │
//! │      bands, negative prices/rates, zones with nothing enabled          │
//! │      Merchant configuration errors are UNDEFINED for calculation       │
//! │      (first zone wins, bands evaluate as written); the lint makes      │
//! │      them visible to the admin back office without correcting them.    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CartItem, PricingRule, RateBand, ShippingDestination, ShippingSettings};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Input Validators
// =============================================================================

/// Validates a shipping destination before rate calculation.
///
/// ## Rules
/// - `country` must be non-empty (zone matching has nothing else to key on)
pub fn validate_destination(destination: &ShippingDestination) -> CoreResult<()> {
    if destination.country.trim().is_empty() {
        return Err(CoreError::MissingDestinationCountry);
    }
    Ok(())
}

/// Validates an order subtotal before tax computation.
///
/// ## Rules
/// - Must be positive (> 0); zero, negative, and NaN are rejected
pub fn validate_subtotal(subtotal: f64) -> CoreResult<()> {
    if !(subtotal > 0.0) {
        return Err(CoreError::NonPositiveSubtotal { subtotal });
    }
    Ok(())
}

/// Validates cart lines handed in by the checkout flow.
///
/// ## Rules
/// - Quantity must be positive
/// - Price must be non-negative (zero is allowed - promo items)
/// - Weight, when present, must be non-negative
pub fn validate_cart(items: &[CartItem]) -> ValidationResult<()> {
    for item in items {
        if item.quantity == 0 {
            return Err(ValidationError::MustBePositive {
                field: format!("quantity of {}", item.id),
            });
        }
        if item.price < 0.0 {
            return Err(ValidationError::OutOfRange {
                field: format!("price of {}", item.id),
                min: 0.0,
                max: f64::MAX,
            });
        }
        if let Some(weight) = item.weight {
            if weight < 0.0 {
                return Err(ValidationError::OutOfRange {
                    field: format!("weight of {}", item.id),
                    min: 0.0,
                    max: f64::MAX,
                });
            }
        }
    }
    Ok(())
}

// =============================================================================
// Settings Lint
// =============================================================================

/// A merchant-configuration problem surfaced by [`lint_settings`].
///
/// Warnings, not errors: the engine still calculates over such settings
/// with documented first-match semantics. The admin back office shows
/// these when the merchant saves.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigWarning {
    /// A country in more than one zone; the first zone wins at resolution.
    #[error("Country '{country}' appears in zone '{first_zone}' and zone '{duplicate_zone}'; the first match wins")]
    DuplicateCountry {
        country: String,
        first_zone: String,
        duplicate_zone: String,
    },

    /// A rate band whose bounded edges are inverted; it can never match.
    #[error("Method '{method_id}' in zone '{zone_id}' has band {index} with min {min} > max {max}")]
    InvertedBand {
        zone_id: String,
        method_id: String,
        index: usize,
        min: f64,
        max: f64,
    },

    /// A negative band rate.
    #[error("Method '{method_id}' in zone '{zone_id}' has band {index} with negative rate {rate}")]
    NegativeRate {
        zone_id: String,
        method_id: String,
        index: usize,
        rate: f64,
    },

    /// A negative flat price.
    #[error("Method '{method_id}' in zone '{zone_id}' has a negative price {price}")]
    NegativePrice {
        zone_id: String,
        method_id: String,
        price: f64,
    },

    /// A negative free-shipping threshold.
    #[error("Method '{method_id}' in zone '{zone_id}' has a negative free threshold {threshold}")]
    NegativeThreshold {
        zone_id: String,
        method_id: String,
        threshold: f64,
    },

    /// A zone whose methods are all disabled (or absent).
    #[error("Zone '{zone_id}' has no enabled methods; destinations in it get only global overlays")]
    NoEnabledMethods { zone_id: String },
}

/// Lints a merchant settings document, returning every problem found.
///
/// An empty result means the settings are well-formed. Problems never stop
/// a calculation; they exist so the admin save path can warn.
pub fn lint_settings(settings: &ShippingSettings) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();
    let mut seen_countries: std::collections::HashMap<&str, &str> =
        std::collections::HashMap::new();

    for zone in &settings.zones {
        for country in &zone.countries {
            if let Some(first_zone) = seen_countries.get(country.as_str()).copied() {
                warnings.push(ConfigWarning::DuplicateCountry {
                    country: country.clone(),
                    first_zone: first_zone.to_string(),
                    duplicate_zone: zone.id.clone(),
                });
            } else {
                seen_countries.insert(country.as_str(), zone.id.as_str());
            }
        }

        if !zone.methods.iter().any(|m| m.enabled) {
            warnings.push(ConfigWarning::NoEnabledMethods {
                zone_id: zone.id.clone(),
            });
        }

        for method in &zone.methods {
            match method.pricing {
                PricingRule::Free { free_threshold } => {
                    if let Some(threshold) = free_threshold {
                        if threshold < 0.0 {
                            warnings.push(ConfigWarning::NegativeThreshold {
                                zone_id: zone.id.clone(),
                                method_id: method.id.clone(),
                                threshold,
                            });
                        }
                    }
                }
                PricingRule::Fixed { price } => {
                    lint_price(&mut warnings, zone.id.as_str(), method.id.as_str(), price);
                }
                PricingRule::WeightBased {
                    ref weight_rates,
                    price,
                } => {
                    lint_price(&mut warnings, zone.id.as_str(), method.id.as_str(), price);
                    lint_bands(
                        &mut warnings,
                        zone.id.as_str(),
                        method.id.as_str(),
                        weight_rates.as_deref(),
                    );
                }
                PricingRule::DistanceBased {
                    ref distance_rates,
                    price,
                } => {
                    lint_price(&mut warnings, zone.id.as_str(), method.id.as_str(), price);
                    lint_bands(
                        &mut warnings,
                        zone.id.as_str(),
                        method.id.as_str(),
                        distance_rates.as_deref(),
                    );
                }
                PricingRule::Calculated => {}
            }
        }
    }

    warnings
}

fn lint_price(
    warnings: &mut Vec<ConfigWarning>,
    zone_id: &str,
    method_id: &str,
    price: Option<f64>,
) {
    if let Some(price) = price {
        if price < 0.0 {
            warnings.push(ConfigWarning::NegativePrice {
                zone_id: zone_id.to_string(),
                method_id: method_id.to_string(),
                price,
            });
        }
    }
}

fn lint_bands(
    warnings: &mut Vec<ConfigWarning>,
    zone_id: &str,
    method_id: &str,
    bands: Option<&[RateBand]>,
) {
    let Some(bands) = bands else {
        return;
    };

    for (index, band) in bands.iter().enumerate() {
        if !band.is_unbounded() && band.min > band.max {
            warnings.push(ConfigWarning::InvertedBand {
                zone_id: zone_id.to_string(),
                method_id: method_id.to_string(),
                index,
                min: band.min,
                max: band.max,
            });
        }
        if band.rate < 0.0 {
            warnings.push(ConfigWarning::NegativeRate {
                zone_id: zone_id.to_string(),
                method_id: method_id.to_string(),
                index,
                rate: band.rate,
            });
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
