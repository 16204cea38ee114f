//! # Checkout Quote
//!
//! The composed flow the storefront runs when the shopper reaches
//! checkout: shipping options and tax for one cart, in one call.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  quote(cart, destination, settings, signals, geo)                       │
//! │                                                                         │
//! │  1. Validate cart lines, derive subtotal                               │
//! │  2. Rate engine → ranked shipping options                              │
//! │  3. Default selection = first ranked option (free/cheapest first)      │
//! │  4. Resolve jurisdiction from the location signals                     │
//! │  5. Tax on the subtotal                                                │
//! │  6. Grand total = subtotal + selected shipping + tax                   │
//! │                                                                         │
//! │  The shopper picks a different option in the UI? The storefront       │
//! │  re-quotes or adjusts the persisted order - this function is          │
//! │  stateless either way.                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use facet_core::money::round2;
use facet_core::tax::{compute_tax_result, TaxResult};
use facet_core::validation::{validate_cart, validate_subtotal};
use facet_core::{
    calculate_shipping, CalculatedShippingOption, CartItem, CoreError, ShippingDestination,
    ShippingSettings,
};

use crate::error::CheckoutResult;
use crate::geo::GeoClient;
use crate::resolver::{resolve_jurisdiction, LocationSignals};

/// Everything checkout needs to render the order summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    /// Cart subtotal the quote was computed from.
    pub subtotal: f64,

    /// Ranked shipping options for UI selection.
    pub shipping_options: Vec<CalculatedShippingOption>,

    /// Default selection: the first ranked option, when any exist.
    pub selected_shipping: Option<CalculatedShippingOption>,

    /// Itemized tax with location and provenance.
    pub tax: TaxResult,

    /// `subtotal + selected shipping price + total tax`, rounded to cents.
    pub grand_total: f64,
}

/// Produces a full checkout quote for one cart.
///
/// ## Errors
/// Only invalid inputs fail: an empty/zero-value cart (non-positive
/// subtotal), malformed cart lines, or a destination without a country.
/// Lookup failures never surface here - the quote degrades instead.
pub async fn quote(
    cart: &[CartItem],
    destination: &ShippingDestination,
    settings: &ShippingSettings,
    signals: &LocationSignals,
    geo: &GeoClient,
) -> CheckoutResult<CheckoutQuote> {
    validate_cart(cart).map_err(CoreError::from)?;

    let subtotal = cart.iter().map(CartItem::line_total).sum();
    validate_subtotal(subtotal)?;

    let shipping_options = calculate_shipping(cart, destination, settings, subtotal)?;
    let selected_shipping = shipping_options.first().cloned();

    let resolved = resolve_jurisdiction(signals, geo).await;
    let tax = compute_tax_result(subtotal, &resolved)?;

    let shipping_price = selected_shipping.as_ref().map(|o| o.price).unwrap_or(0.0);
    let grand_total = round2(subtotal + shipping_price + tax.total_tax_amount);

    debug!(
        subtotal,
        options = shipping_options.len(),
        jurisdiction = %resolved.code,
        grand_total,
        "checkout quote"
    );

    Ok(CheckoutQuote {
        subtotal,
        shipping_options,
        selected_shipping,
        tax,
        grand_total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GeoConfig;
    use facet_core::tax::{DetectedLocation, ShippingAddress};
    use facet_core::{
        EstimatedDays, GlobalSettings, PricingRule, ShippingMethod, ShippingZone, FREE_GLOBAL_ID,
    };

    fn offline_geo() -> GeoClient {
        GeoClient::new(&GeoConfig {
            endpoint: "http://127.0.0.1:9/json".to_string(),
            timeout_secs: 1,
        })
        .unwrap()
    }

    fn ring(price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: "ring-classic".to_string(),
            name: "Classic Band".to_string(),
            price,
            quantity,
            weight: Some(0.1),
        }
    }

    fn settings() -> ShippingSettings {
        ShippingSettings {
            default_currency: "USD".to_string(),
            weight_unit: Default::default(),
            dimension_unit: Default::default(),
            origin_address: Default::default(),
            zones: vec![ShippingZone {
                id: "domestic".to_string(),
                name: "Domestic".to_string(),
                countries: vec!["United States".to_string()],
                methods: vec![
                    ShippingMethod {
                        id: "standard".to_string(),
                        name: "Standard Shipping".to_string(),
                        enabled: true,
                        estimated_days: Some(EstimatedDays::new(3, 7)),
                        pricing: PricingRule::Fixed { price: Some(10.0) },
                    },
                    ShippingMethod {
                        id: "express".to_string(),
                        name: "Express Shipping".to_string(),
                        enabled: true,
                        estimated_days: Some(EstimatedDays::new(1, 2)),
                        pricing: PricingRule::Fixed { price: Some(25.0) },
                    },
                ],
            }],
            global_settings: GlobalSettings::default(),
        }
    }

    fn us_destination() -> ShippingDestination {
        ShippingDestination {
            country: "United States".to_string(),
            state: Some("California".to_string()),
            ..Default::default()
        }
    }

    fn address_signals() -> LocationSignals {
        LocationSignals {
            shipping_address: Some(ShippingAddress {
                state: Some("California".to_string()),
                country: Some("United States".to_string()),
                city: None,
                postal_code: None,
            }),
            detected_location: None,
            client_ip: None,
        }
    }

    #[tokio::test]
    async fn test_full_quote_with_address() {
        // 2 × 500 = 1000 subtotal; cheapest option (standard, 10.00)
        // selected; California tax 72.50
        let quote = quote(
            &[ring(500.0, 2)],
            &us_destination(),
            &settings(),
            &address_signals(),
            &offline_geo(),
        )
        .await
        .unwrap();

        assert_eq!(quote.subtotal, 1000.0);
        assert_eq!(quote.shipping_options.len(), 2);
        assert_eq!(quote.selected_shipping.as_ref().unwrap().id, "standard");
        assert_eq!(quote.tax.total_tax_amount, 72.5);
        assert_eq!(quote.tax.detected_location, "Shipping Address: California");
        assert_eq!(quote.grand_total, 1082.5); // 1000 + 10 + 72.50
    }

    #[tokio::test]
    async fn test_quote_prefers_free_overlay_as_default() {
        let mut s = settings();
        s.global_settings.enable_free_shipping = true;
        s.global_settings.free_shipping_threshold = 500.0;

        let quote = quote(
            &[ring(500.0, 2)],
            &us_destination(),
            &s,
            &address_signals(),
            &offline_geo(),
        )
        .await
        .unwrap();

        assert_eq!(quote.selected_shipping.as_ref().unwrap().id, FREE_GLOBAL_ID);
        assert_eq!(quote.grand_total, 1072.5); // free shipping selected
    }

    #[tokio::test]
    async fn test_quote_for_unzoned_destination_still_succeeds() {
        // No zone for Japan, overlays off: empty options, zero shipping,
        // international tax-free via detected location
        let quote = quote(
            &[ring(500.0, 2)],
            &ShippingDestination {
                country: "Japan".to_string(),
                ..Default::default()
            },
            &settings(),
            &LocationSignals {
                shipping_address: None,
                detected_location: Some(DetectedLocation {
                    country: Some("JP".to_string()),
                    region: None,
                }),
                client_ip: None,
            },
            &offline_geo(),
        )
        .await
        .unwrap();

        assert!(quote.shipping_options.is_empty());
        assert!(quote.selected_shipping.is_none());
        assert!(quote.tax.taxes.is_empty());
        assert_eq!(quote.grand_total, 1000.0);
    }

    #[tokio::test]
    async fn test_empty_cart_is_rejected() {
        let err = quote(
            &[],
            &us_destination(),
            &settings(),
            &address_signals(),
            &offline_geo(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("Subtotal must be positive"));
    }

    #[tokio::test]
    async fn test_zero_quantity_line_is_rejected() {
        let err = quote(
            &[ring(500.0, 0)],
            &us_destination(),
            &settings(),
            &address_signals(),
            &offline_geo(),
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("must be positive"));
    }
}
