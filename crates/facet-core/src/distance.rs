//! # Distance Estimation Seam
//!
//! Distance-based shipping methods price off the distance between the
//! merchant's origin address and the shopper's destination. Real distance
//! comes from a geocoding service; that is I/O, and this crate has none.
//! So the engine prices through a trait, and ships a deliberately crude
//! regional placeholder as the default implementation.
//!
//! A production integration implements [`DistanceEstimator`] over its
//! geocoding client and passes it to
//! [`crate::rates::calculate_shipping_with`]. A failing estimator excludes
//! the method from the calculated options; it never aborts the calculation.

use crate::error::DistanceError;
use crate::types::{OriginAddress, ShippingDestination};
use crate::{DOMESTIC_DISTANCE_KM, INTERNATIONAL_DISTANCE_KM};

/// Produces an origin-to-destination distance in kilometers.
pub trait DistanceEstimator {
    /// Estimates the shipping distance for a destination.
    ///
    /// Implementations backed by a network service should map their failure
    /// modes into [`DistanceError::Unavailable`]; the rate engine treats
    /// any error as "method unavailable" for the affected method only.
    fn distance_km(
        &self,
        origin: &OriginAddress,
        destination: &ShippingDestination,
    ) -> Result<f64, DistanceError>;
}

/// The shipped placeholder: same country = 500 km, different country =
/// 2000 km.
///
/// Not a geodesic calculation. It keeps distance-based rate tables
/// evaluable with two coarse tiers until a real geocoding integration is
/// plugged in behind the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegionalEstimate;

impl DistanceEstimator for RegionalEstimate {
    fn distance_km(
        &self,
        origin: &OriginAddress,
        destination: &ShippingDestination,
    ) -> Result<f64, DistanceError> {
        // Both strings come from the same merchant/checkout vocabulary, so a
        // forgiving comparison is safe here (unlike zone matching, which is
        // a compatibility surface).
        let same_country = origin
            .country
            .trim()
            .eq_ignore_ascii_case(destination.country.trim());

        if same_country {
            Ok(DOMESTIC_DISTANCE_KM)
        } else {
            Ok(INTERNATIONAL_DISTANCE_KM)
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
