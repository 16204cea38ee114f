//! # Contract Types
//!
//! The shapes this engine shares with the storefront and the merchant
//! settings document.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shipping Contract Types                            │
//! │                                                                         │
//! │  ShippingSettings (merchant document, read-only snapshot)              │
//! │  ├── defaultCurrency, weightUnit, dimensionUnit                        │
//! │  ├── originAddress ──────────────► OriginAddress                       │
//! │  ├── globalSettings ─────────────► GlobalSettings (overlays)           │
//! │  └── zones[] ────────────────────► ShippingZone                        │
//! │                                    ├── countries[]                     │
//! │                                    └── methods[] ──► ShippingMethod    │
//! │                                                      └── PricingRule   │
//! │                                                                         │
//! │  Inputs:  CartItem[], ShippingDestination, cart total                  │
//! │  Output:  CalculatedShippingOption[] (ranked for UI selection)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tolerant Schema
//! Settings documents are merchant-edited JSON from the admin back office.
//! Unknown fields are ignored, optional fields default, and a method's
//! fields that belong to a different pricing type simply don't participate
//! in evaluation. Deserialization never rejects a well-formed document over
//! surplus data.

use chrono::{DateTime, Datelike, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Units
// =============================================================================

/// Unit for cart item weights and rate-table bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    Kg,
    Lb,
}

impl Default for WeightUnit {
    fn default() -> Self {
        WeightUnit::Kg
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightUnit::Kg => write!(f, "kg"),
            WeightUnit::Lb => write!(f, "lb"),
        }
    }
}

/// Unit for product dimensions (carried in settings, not used in pricing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum DimensionUnit {
    Cm,
    In,
}

impl Default for DimensionUnit {
    fn default() -> Self {
        DimensionUnit::Cm
    }
}

// =============================================================================
// Rate Bands
// =============================================================================

/// Sentinel for an unbounded upper band edge (`max` in merchant JSON).
pub const UNBOUNDED: f64 = -1.0;

/// One band of a weight or distance rate table.
///
/// Bands are evaluated in configured order; the first match wins. A band
/// matches when `value >= min` and either `max == -1` (unbounded) or
/// `value <= max` - both edges inclusive, so a weight of exactly 5 matches
/// a `{min: 0, max: 5}` band before a `{min: 5, max: -1}` band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RateBand {
    pub min: f64,
    pub max: f64,
    pub rate: f64,
}

impl RateBand {
    /// Checks whether a weight/distance value falls inside this band.
    #[inline]
    pub fn matches(&self, value: f64) -> bool {
        value >= self.min && (self.max == UNBOUNDED || value <= self.max)
    }

    /// Checks whether this band has no upper edge.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        self.max == UNBOUNDED
    }
}

// =============================================================================
// Estimated Delivery
// =============================================================================

/// Business-day delivery range, carried from configuration to output
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct EstimatedDays {
    pub min: u32,
    pub max: u32,
}

impl EstimatedDays {
    pub const fn new(min: u32, max: u32) -> Self {
        EstimatedDays { min, max }
    }

    /// Projects this range onto the calendar as a concrete delivery window.
    ///
    /// Business days only: Saturdays and Sundays don't count toward the
    /// range. The storefront shows the result as "arrives Aug 10 - Aug 14".
    ///
    /// ## Example
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// use facet_core::types::EstimatedDays;
    ///
    /// // Friday + 1 business day = Monday
    /// let friday = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
    /// let window = EstimatedDays::new(1, 3).window_from(friday);
    /// assert_eq!(window.earliest.to_string(), "2025-08-04 12:00:00 UTC");
    /// ```
    pub fn window_from(&self, from: DateTime<Utc>) -> DeliveryWindow {
        DeliveryWindow {
            earliest: add_business_days(from, self.min),
            latest: add_business_days(from, self.max),
        }
    }
}

/// Concrete calendar window computed from an [`EstimatedDays`] range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryWindow {
    #[ts(as = "String")]
    pub earliest: DateTime<Utc>,
    #[ts(as = "String")]
    pub latest: DateTime<Utc>,
}

/// Advances a date by `days` business days, skipping weekends.
fn add_business_days(from: DateTime<Utc>, days: u32) -> DateTime<Utc> {
    let mut current = from;
    let mut remaining = days;
    while remaining > 0 {
        current += Duration::days(1);
        match current.weekday() {
            Weekday::Sat | Weekday::Sun => {}
            _ => remaining -= 1,
        }
    }
    current
}

// =============================================================================
// Shipping Methods
// =============================================================================

/// One pricing rule within a zone.
///
/// The envelope fields are shared by every method type; the pricing rule is
/// a tagged union on the document's `type` field, so evaluation is an
/// exhaustive match instead of runtime field-presence probing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingMethod {
    /// Merchant-chosen id, unique within its zone (e.g. "standard").
    pub id: String,

    /// Display name shown to the shopper (e.g. "Standard Shipping").
    pub name: String,

    /// Disabled methods never appear in calculated options.
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Business-day range carried through to the output unchanged.
    pub estimated_days: Option<EstimatedDays>,

    /// The `type`-tagged pricing rule governing evaluation.
    #[serde(flatten)]
    pub pricing: PricingRule,
}

fn default_enabled() -> bool {
    true
}

/// Pricing rule variants, tagged by the document's `type` field.
///
/// Exactly one variant governs evaluation. Fields belonging to other types
/// in the merchant document are ignored by deserialization (tolerant
/// schema), not validated away.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PricingRule {
    /// Free shipping, optionally gated on a minimum subtotal.
    #[serde(rename_all = "camelCase")]
    Free {
        /// Minimum subtotal for the method to apply; absent = always free.
        free_threshold: Option<f64>,
    },

    /// Flat price regardless of cart contents.
    #[serde(rename_all = "camelCase")]
    Fixed {
        /// Flat amount; absent is treated as 0.
        price: Option<f64>,
    },

    /// Priced from a weight rate table, with a flat-price fallback.
    #[serde(rename_all = "camelCase")]
    WeightBased {
        /// Ordered bands over total cart weight; first match wins.
        weight_rates: Option<Vec<RateBand>>,
        /// Fallback flat amount when no bands are configured.
        price: Option<f64>,
    },

    /// Priced from a distance rate table, with a flat-price fallback.
    #[serde(rename_all = "camelCase")]
    DistanceBased {
        /// Ordered bands over origin-to-destination distance (km).
        distance_rates: Option<Vec<RateBand>>,
        /// Fallback flat amount when no bands are configured.
        price: Option<f64>,
    },

    /// Synthetic carrier-style estimate (placeholder for a rate API).
    Calculated,
}

// =============================================================================
// Shipping Zones
// =============================================================================

/// Groups destination countries under a shared set of methods.
///
/// ## Invariant
/// A country should belong to at most one zone in well-formed
/// configuration. Resolution takes the *first* matching zone if duplicates
/// exist; `validation::lint_settings` surfaces the duplicate instead of
/// correcting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingZone {
    pub id: String,
    pub name: String,

    /// Merchant-entered country names, matched exactly (case-sensitive)
    /// against the destination country.
    #[serde(default)]
    pub countries: Vec<String>,

    /// Pricing rules for this zone, evaluated in configured order.
    #[serde(default)]
    pub methods: Vec<ShippingMethod>,
}

// =============================================================================
// Origin Address
// =============================================================================

/// Merchant ship-from location. Only distance-based pricing reads it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OriginAddress {
    #[serde(default)]
    pub country: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub address: Option<String>,
}

// =============================================================================
// Global Settings
// =============================================================================

/// Zone-independent overlay options applied before zone resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct GlobalSettings {
    /// Emit a synthetic free-shipping option above the threshold.
    pub enable_free_shipping: bool,

    /// Minimum cart total for the storewide free-shipping overlay.
    pub free_shipping_threshold: f64,

    /// Emit a synthetic local pickup option.
    pub enable_local_pickup: bool,

    /// Pickup instructions shown to the shopper; a generic line is used
    /// when absent.
    pub local_pickup_instructions: Option<String>,
}

// =============================================================================
// Shipping Settings
// =============================================================================

/// Merchant-wide shipping configuration.
///
/// Loaded once per calculation from the configuration store and treated as
/// an immutable snapshot for the duration of that calculation - the engine
/// never mutates it and assumes nobody else does mid-calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingSettings {
    /// Currency code used in generated descriptions (e.g. "USD").
    #[serde(default = "default_currency")]
    pub default_currency: String,

    #[serde(default)]
    pub weight_unit: WeightUnit,

    #[serde(default)]
    pub dimension_unit: DimensionUnit,

    #[serde(default)]
    pub origin_address: OriginAddress,

    #[serde(default)]
    pub zones: Vec<ShippingZone>,

    #[serde(default)]
    pub global_settings: GlobalSettings,
}

fn default_currency() -> String {
    "USD".to_string()
}

// =============================================================================
// Cart Input
// =============================================================================

/// A cart line as supplied by the checkout flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: String,
    pub name: String,

    /// Unit price in the merchant's default currency.
    pub price: f64,

    pub quantity: u32,

    /// Unit weight in the configured weight unit. When absent, the engine
    /// applies [`crate::DEFAULT_ITEM_WEIGHT_KG`] at the weight-summing step.
    pub weight: Option<f64>,
}

impl CartItem {
    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

// =============================================================================
// Destination Input
// =============================================================================

/// Where the order ships. Only `country` participates in zone matching;
/// the rest is used opportunistically by distance and tax resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ShippingDestination {
    pub country: String,
    pub state: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
}

// =============================================================================
// Calculated Options (output)
// =============================================================================

/// One viable shipping option, ranked for UI selection.
///
/// `id` equals the source method's id, or a synthetic id
/// ([`crate::FREE_GLOBAL_ID`], [`crate::LOCAL_PICKUP_ID`]) for the global
/// overlays. `price == 0` is a meaningful result (free shipping), not the
/// absence of a price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CalculatedShippingOption {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub estimated_days: Option<EstimatedDays>,
    pub description: Option<String>,
}

impl CalculatedShippingOption {
    /// Zero-price options sort ahead of everything else.
    #[inline]
    pub fn is_free(&self) -> bool {
        self.price == 0.0
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_rate_band_matching() {
        let band = RateBand {
            min: 0.0,
            max: 5.0,
            rate: 10.0,
        };
        assert!(band.matches(0.0));
        assert!(band.matches(5.0)); // inclusive upper edge
        assert!(!band.matches(5.01));

        let open = RateBand {
            min: 5.0,
            max: UNBOUNDED,
            rate: 20.0,
        };
        assert!(open.is_unbounded());
        assert!(open.matches(5.0));
        assert!(open.matches(5000.0));
        assert!(!open.matches(4.99));
    }

    #[test]
    fn test_method_deserializes_from_merchant_document() {
        let json = r#"{
            "id": "standard",
            "name": "Standard Shipping",
            "type": "weight_based",
            "enabled": true,
            "price": 9.99,
            "weightRates": [
                {"min": 0, "max": 5, "rate": 10},
                {"min": 5, "max": -1, "rate": 20}
            ],
            "estimatedDays": {"min": 3, "max": 7}
        }"#;

        let method: ShippingMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.id, "standard");
        assert!(method.enabled);
        assert_eq!(method.estimated_days, Some(EstimatedDays::new(3, 7)));
        match method.pricing {
            PricingRule::WeightBased {
                ref weight_rates,
                price,
            } => {
                assert_eq!(weight_rates.as_ref().unwrap().len(), 2);
                assert_eq!(price, Some(9.99));
            }
            ref other => panic!("expected weight_based, got {:?}", other),
        }
    }

    #[test]
    fn test_method_tolerates_foreign_fields() {
        // A free method whose document still carries weight-based leftovers
        let json = r#"{
            "id": "free",
            "name": "Free Shipping",
            "type": "free",
            "freeThreshold": 50,
            "weightRates": [{"min": 0, "max": -1, "rate": 99}],
            "legacyFlag": true
        }"#;

        let method: ShippingMethod = serde_json::from_str(json).unwrap();
        assert!(method.enabled); // defaulted
        assert_eq!(
            method.pricing,
            PricingRule::Free {
                free_threshold: Some(50.0)
            }
        );
    }

    #[test]
    fn test_calculated_method_needs_no_fields() {
        let json = r#"{"id": "api", "name": "Carrier Rate", "type": "calculated"}"#;
        let method: ShippingMethod = serde_json::from_str(json).unwrap();
        assert_eq!(method.pricing, PricingRule::Calculated);
    }

    #[test]
    fn test_settings_defaults_fill_sparse_document() {
        let settings: ShippingSettings = serde_json::from_str(r#"{"zones": []}"#).unwrap();
        assert_eq!(settings.default_currency, "USD");
        assert_eq!(settings.weight_unit, WeightUnit::Kg);
        assert!(!settings.global_settings.enable_free_shipping);
    }

    #[test]
    fn test_pricing_rule_serializes_with_type_tag() {
        let method = ShippingMethod {
            id: "flat".to_string(),
            name: "Flat Rate".to_string(),
            enabled: true,
            estimated_days: None,
            pricing: PricingRule::Fixed { price: Some(7.5) },
        };
        let json = serde_json::to_value(&method).unwrap();
        assert_eq!(json["type"], "fixed");
        assert_eq!(json["price"], 7.5);
    }

    #[test]
    fn test_cart_item_line_total() {
        let item = CartItem {
            id: "ring-1".to_string(),
            name: "Solitaire Ring".to_string(),
            price: 249.5,
            quantity: 2,
            weight: None,
        };
        assert_eq!(item.line_total(), 499.0);
    }

    #[test]
    fn test_delivery_window_skips_weekends() {
        // Friday 2025-08-01
        let friday = Utc.with_ymd_and_hms(2025, 8, 1, 12, 0, 0).unwrap();
        let window = EstimatedDays::new(1, 3).window_from(friday);

        // +1 business day: Monday the 4th
        assert_eq!(window.earliest.day(), 4);
        // +3 business days: Wednesday the 6th
        assert_eq!(window.latest.day(), 6);
    }

    #[test]
    fn test_delivery_window_zero_days_is_same_day() {
        let monday = Utc.with_ymd_and_hms(2025, 8, 4, 9, 0, 0).unwrap();
        let window = EstimatedDays::new(0, 0).window_from(monday);
        assert_eq!(window.earliest, monday);
        assert_eq!(window.latest, monday);
    }
}
