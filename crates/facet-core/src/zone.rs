//! # Zone Resolver
//!
//! Maps a destination country to a merchant-defined shipping zone.
//!
//! This is a leaf component: no dependencies, no error conditions. A
//! destination outside every configured zone is a normal outcome (the
//! shopper sees only the global overlay options), not a failure.

use crate::types::ShippingZone;

/// Returns the first zone (in configured order) listing `country`.
///
/// Matching is exact membership against each zone's merchant-entered
/// country names - case-sensitive, no normalization. The admin save path
/// owns whatever normalization the merchant wants; this resolver is the
/// compatibility surface for existing settings documents.
///
/// ## Duplicate Countries
/// A country listed in more than one zone is a merchant configuration
/// error. The first zone wins; `validation::lint_settings` reports the
/// duplicate rather than this function correcting it.
///
/// ## Example
/// ```rust
/// use facet_core::types::ShippingZone;
/// use facet_core::zone::resolve_zone;
///
/// let zones = vec![ShippingZone {
///     id: "na".to_string(),
///     name: "North America".to_string(),
///     countries: vec!["United States".to_string(), "Canada".to_string()],
///     methods: vec![],
/// }];
///
/// assert!(resolve_zone("Canada", &zones).is_some());
/// assert!(resolve_zone("canada", &zones).is_none()); // case-sensitive
/// assert!(resolve_zone("France", &zones).is_none());
/// ```
pub fn resolve_zone<'a>(country: &str, zones: &'a [ShippingZone]) -> Option<&'a ShippingZone> {
    zones
        .iter()
        .find(|zone| zone.countries.iter().any(|c| c == country))
}

// =============================================================================
// Unit Tests
// =============================================================================
