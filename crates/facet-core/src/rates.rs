//! # Shipping Rate Engine
//!
//! Given a cart, a destination, and the merchant's settings snapshot,
//! evaluates every applicable pricing rule and returns a ranked list of
//! viable shipping options.
//!
//! ## Evaluation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     calculate_shipping                                  │
//! │                                                                         │
//! │  1. Storewide free-shipping overlay (cart total over threshold?)       │
//! │  2. Local pickup overlay (enabled?)                                    │
//! │  3. Resolve destination → zone (none? stop after overlays)             │
//! │  4. For each ENABLED method in the zone, in configured order:          │
//! │       free          threshold met (or absent) → price 0                │
//! │       fixed         flat price                                         │
//! │       weight_based  first matching weight band, else flat fallback     │
//! │       distance_based first matching distance band, else flat fallback  │
//! │       calculated    synthetic carrier-style estimate                   │
//! │  5. Rank: zero-price first (insertion order), then ascending price     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Failure Semantics
//! Every lookup is total over well-formed input. A method that produces no
//! viable price (no matching band, failing distance estimator) is excluded
//! from the output - exclusion, never an error. The only error out of this
//! module is a missing destination country, which is a caller bug.

use std::cmp::Ordering;

use crate::distance::{DistanceEstimator, RegionalEstimate};
use crate::error::CoreResult;
use crate::money::{format_amount, round2};
use crate::types::{
    CalculatedShippingOption, CartItem, EstimatedDays, PricingRule, ShippingDestination,
    ShippingMethod, ShippingSettings,
};
use crate::validation::validate_destination;
use crate::zone::resolve_zone;
use crate::{
    CALCULATED_BASE_RATE, CALCULATED_RATE_PER_KG, DEFAULT_ITEM_WEIGHT_KG, FREE_GLOBAL_ID,
    LOCAL_PICKUP_ID,
};

/// Estimated range attached to the storewide free-shipping overlay.
pub const FREE_GLOBAL_DAYS: EstimatedDays = EstimatedDays::new(3, 7);

/// Estimated range attached to the local pickup overlay.
pub const LOCAL_PICKUP_DAYS: EstimatedDays = EstimatedDays::new(1, 1);

// =============================================================================
// Entry Points
// =============================================================================

/// Calculates ranked shipping options using the placeholder distance model.
///
/// ## Arguments
/// * `items` - Cart lines (weights optional, defaulted per engine policy)
/// * `destination` - Where the order ships; `country` is required
/// * `settings` - Immutable merchant settings snapshot
/// * `cart_total` - Order subtotal, used by free-shipping thresholds
///
/// ## Returns
/// Viable options ranked free-first then cheapest-first. An empty list is a
/// valid result (destination outside all zones, overlays disabled).
pub fn calculate_shipping(
    items: &[CartItem],
    destination: &ShippingDestination,
    settings: &ShippingSettings,
    cart_total: f64,
) -> CoreResult<Vec<CalculatedShippingOption>> {
    calculate_shipping_with(items, destination, settings, cart_total, &RegionalEstimate)
}

/// Calculates ranked shipping options with a caller-supplied distance
/// estimator (e.g. a real geocoding integration).
pub fn calculate_shipping_with(
    items: &[CartItem],
    destination: &ShippingDestination,
    settings: &ShippingSettings,
    cart_total: f64,
    estimator: &dyn DistanceEstimator,
) -> CoreResult<Vec<CalculatedShippingOption>> {
    validate_destination(destination)?;

    let mut options = Vec::new();
    let global = &settings.global_settings;

    // Storewide overlays come first so they hold insertion order among the
    // zero-price group after ranking.
    if global.enable_free_shipping && cart_total >= global.free_shipping_threshold {
        options.push(CalculatedShippingOption {
            id: FREE_GLOBAL_ID.to_string(),
            name: "Free Shipping".to_string(),
            price: 0.0,
            estimated_days: Some(FREE_GLOBAL_DAYS),
            description: Some(format!(
                "Free shipping on orders over {}",
                format_amount(global.free_shipping_threshold, &settings.default_currency)
            )),
        });
    }

    if global.enable_local_pickup {
        options.push(CalculatedShippingOption {
            id: LOCAL_PICKUP_ID.to_string(),
            name: "Local Pickup".to_string(),
            price: 0.0,
            estimated_days: Some(LOCAL_PICKUP_DAYS),
            description: Some(
                global
                    .local_pickup_instructions
                    .clone()
                    .unwrap_or_else(|| "Pick up your order at our store".to_string()),
            ),
        });
    }

    // A destination outside every zone gets only the overlays.
    if let Some(zone) = resolve_zone(&destination.country, &settings.zones) {
        let total_weight = total_cart_weight(items);

        for method in zone.methods.iter().filter(|m| m.enabled) {
            if let Some(option) =
                evaluate_method(method, total_weight, cart_total, destination, settings, estimator)
            {
                options.push(option);
            }
        }
    }

    rank_options(&mut options);
    Ok(options)
}

// =============================================================================
// Weight Accumulation
// =============================================================================

/// Total cart weight: `Σ (item weight or default) × quantity`.
///
/// This is the single point where [`DEFAULT_ITEM_WEIGHT_KG`] applies.
pub fn total_cart_weight(items: &[CartItem]) -> f64 {
    items
        .iter()
        .map(|item| item.weight.unwrap_or(DEFAULT_ITEM_WEIGHT_KG) * item.quantity as f64)
        .sum()
}

// =============================================================================
// Method Evaluation
// =============================================================================

/// Evaluates one enabled method against the cart. `None` means the method
/// is not viable for this cart (threshold unmet, no matching band, distance
/// unavailable) and is excluded from the output.
fn evaluate_method(
    method: &ShippingMethod,
    total_weight: f64,
    cart_total: f64,
    destination: &ShippingDestination,
    settings: &ShippingSettings,
    estimator: &dyn DistanceEstimator,
) -> Option<CalculatedShippingOption> {
    let (price, description) = match method.pricing {
        PricingRule::Free { free_threshold } => {
            if let Some(threshold) = free_threshold {
                if cart_total < threshold {
                    return None;
                }
                (
                    0.0,
                    Some(format!(
                        "Free on orders over {}",
                        format_amount(threshold, &settings.default_currency)
                    )),
                )
            } else {
                (0.0, None)
            }
        }

        PricingRule::Fixed { price } => (price.unwrap_or(0.0), None),

        PricingRule::WeightBased {
            ref weight_rates,
            price,
        } => {
            let description = Some(format!(
                "Based on total weight of {:.2} {}",
                total_weight, settings.weight_unit
            ));
            match banded_price(weight_rates.as_deref(), total_weight, price) {
                BandOutcome::Priced(p) => (p, description),
                BandOutcome::NoMatch => return None,
            }
        }

        PricingRule::DistanceBased {
            ref distance_rates,
            price,
        } => {
            // A failing estimator makes this one method unavailable; the
            // rest of the calculation proceeds.
            let distance = estimator
                .distance_km(&settings.origin_address, destination)
                .ok()?;
            let description = Some(format!("Based on shipping distance of {:.0} km", distance));
            match banded_price(distance_rates.as_deref(), distance, price) {
                BandOutcome::Priced(p) => (p, description),
                BandOutcome::NoMatch => return None,
            }
        }

        PricingRule::Calculated => (
            round2(CALCULATED_BASE_RATE + total_weight * CALCULATED_RATE_PER_KG),
            Some("Estimated from carrier rates".to_string()),
        ),
    };

    Some(CalculatedShippingOption {
        id: method.id.clone(),
        name: method.name.clone(),
        price,
        estimated_days: method.estimated_days,
        description,
    })
}

enum BandOutcome {
    Priced(f64),
    NoMatch,
}

/// Shared band-lookup policy for weight and distance tables.
///
/// No table configured → flat fallback price (or 0). Table configured but
/// no band matches → not viable.
fn banded_price(
    bands: Option<&[crate::types::RateBand]>,
    value: f64,
    fallback: Option<f64>,
) -> BandOutcome {
    match bands {
        None | Some([]) => BandOutcome::Priced(fallback.unwrap_or(0.0)),
        Some(bands) => bands
            .iter()
            .find(|band| band.matches(value))
            .map(|band| BandOutcome::Priced(band.rate))
            .unwrap_or(BandOutcome::NoMatch),
    }
}

// =============================================================================
// Ranking
// =============================================================================

/// Ranks options: every zero-price option before every priced option, then
/// ascending by price.
///
/// The zero tier is an explicit two-way rule, not a numeric consequence:
/// zero-price options compare Equal among themselves so the stable sort
/// keeps their insertion order (overlays first, then zone methods).
fn rank_options(options: &mut [CalculatedShippingOption]) {
    options.sort_by(|a, b| match (a.is_free(), b.is_free()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
    });
}

// =============================================================================
// Unit Tests
// =============================================================================
