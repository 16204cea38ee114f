//! # Tax Computation
//!
//! Applies a jurisdiction's component list to an order subtotal.
//!
//! ## Rounding Contract
//! Each component amount is rounded to cents independently
//! (`round2(subtotal × rate)`), and the total is the rounded sum of those
//! already-rounded amounts. Components are displayed line by line on the
//! checkout screen, so the printed column must add up to the printed
//! total - rounding once at the end would break that.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreResult;
use crate::money::round2;
use crate::validation::validate_subtotal;

use super::{ResolvedJurisdiction, TaxJurisdiction, TaxType};

// =============================================================================
// Output Types
// =============================================================================

/// One computed tax line: the component plus its amount for this order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxLine {
    pub name: String,

    #[serde(rename = "type")]
    pub tax_type: TaxType,

    pub rate: f64,

    /// `round2(subtotal × rate)` - independently rounded per component.
    pub amount: f64,
}

/// The arithmetic output of [`compute_tax`], before location/provenance
/// are attached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxComputation {
    pub taxes: Vec<TaxLine>,

    /// Unrounded sum of component rates - informational only.
    pub total_tax_rate: f64,

    /// Rounded sum of the rounded component amounts.
    pub total_tax_amount: f64,

    pub subtotal: f64,

    /// `subtotal + total_tax_amount`.
    pub total: f64,
}

/// The full tax result handed back to checkout: itemized breakdown plus
/// where the rate came from and how that location was determined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct TaxResult {
    pub taxes: Vec<TaxLine>,
    pub total_tax_rate: f64,
    pub total_tax_amount: f64,

    /// Display name of the taxing jurisdiction ("California", "Quebec").
    pub tax_location: String,

    /// How the jurisdiction was determined ("Shipping Address: ...").
    pub detected_location: String,

    pub subtotal: f64,
    pub total: f64,
}

// =============================================================================
// Computation
// =============================================================================

/// Applies a jurisdiction's tax components to a subtotal.
///
/// ## Precondition
/// `subtotal > 0`. A non-positive (or NaN) subtotal is a caller bug and is
/// rejected, not silently zeroed.
///
/// ## Zero-Component Jurisdictions
/// Tax-free jurisdictions produce an empty line list, zero totals, and
/// `total == subtotal` - a valid, expected outcome.
///
/// ## Example
/// ```rust
/// use facet_core::tax::{compute_tax, jurisdiction};
///
/// let qc = jurisdiction("QC").unwrap();
/// let result = compute_tax(200.0, qc).unwrap();
///
/// assert_eq!(result.taxes[0].amount, 10.0);  // GST 5%
/// assert_eq!(result.taxes[1].amount, 19.95); // QST 9.975%
/// assert_eq!(result.total_tax_amount, 29.95);
/// assert_eq!(result.total, 229.95);
/// ```
pub fn compute_tax(subtotal: f64, jurisdiction: &TaxJurisdiction) -> CoreResult<TaxComputation> {
    validate_subtotal(subtotal)?;

    let taxes: Vec<TaxLine> = jurisdiction
        .taxes
        .iter()
        .map(|component| TaxLine {
            name: component.name.clone(),
            tax_type: component.tax_type,
            rate: component.rate,
            amount: round2(subtotal * component.rate),
        })
        .collect();

    let total_tax_amount = round2(taxes.iter().map(|line| line.amount).sum());
    let total_tax_rate = jurisdiction.taxes.iter().map(|c| c.rate).sum();

    Ok(TaxComputation {
        total_tax_rate,
        total_tax_amount,
        subtotal,
        total: subtotal + total_tax_amount,
        taxes,
    })
}

/// Computes tax for a resolved jurisdiction, producing the full
/// [`TaxResult`] with location and provenance attached.
pub fn compute_tax_result(
    subtotal: f64,
    resolved: &ResolvedJurisdiction,
) -> CoreResult<TaxResult> {
    let computation = compute_tax(subtotal, &resolved.jurisdiction)?;
    Ok(TaxResult {
        taxes: computation.taxes,
        total_tax_rate: computation.total_tax_rate,
        total_tax_amount: computation.total_tax_amount,
        tax_location: resolved.jurisdiction.location.clone(),
        detected_location: resolved.provenance.clone(),
        subtotal: computation.subtotal,
        total: computation.total,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;
    use crate::tax::resolve::{from_shipping_address, ShippingAddress};
    use crate::tax::{jurisdiction, TaxComponent};

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_non_positive_subtotal_is_rejected() {
        let on = jurisdiction("ON").unwrap();
        assert!(matches!(
            compute_tax(0.0, on),
            Err(CoreError::NonPositiveSubtotal { .. })
        ));
        assert!(matches!(
            compute_tax(-10.0, on),
            Err(CoreError::NonPositiveSubtotal { .. })
        ));
        assert!(matches!(
            compute_tax(f64::NAN, on),
            Err(CoreError::NonPositiveSubtotal { .. })
        ));
    }

    #[test]
    fn test_tax_free_jurisdiction_yields_zero() {
        let or = jurisdiction("OR").unwrap();
        let result = compute_tax(149.99, or).unwrap();
        assert!(result.taxes.is_empty());
        assert_eq!(result.total_tax_rate, 0.0);
        assert_eq!(result.total_tax_amount, 0.0);
        assert_eq!(result.total, 149.99);
    }

    #[test]
    fn test_components_round_independently_then_sum() {
        // Rates {0.05, 0.07} on 100: components 5.00 and 7.00, total 12.00
        let jur = TaxJurisdiction {
            location: "Test".to_string(),
            taxes: vec![
                TaxComponent {
                    name: "A".to_string(),
                    rate: 0.05,
                    tax_type: TaxType::Sales,
                },
                TaxComponent {
                    name: "B".to_string(),
                    rate: 0.07,
                    tax_type: TaxType::Sales,
                },
            ],
        };
        let result = compute_tax(100.0, &jur).unwrap();
        assert_eq!(result.taxes[0].amount, 5.0);
        assert_eq!(result.taxes[1].amount, 7.0);
        assert_eq!(result.total_tax_amount, 12.0);
        assert!(close(result.total_tax_rate, 0.12));
    }

    #[test]
    fn test_per_component_rounding_is_visible_in_the_sum() {
        // Two components that each round up half a cent: per-component
        // rounding gives 0.13 + 0.13 = 0.26; summed-then-rounded would
        // give 0.25.
        let jur = TaxJurisdiction {
            location: "Test".to_string(),
            taxes: vec![
                TaxComponent {
                    name: "A".to_string(),
                    rate: 0.125,
                    tax_type: TaxType::Sales,
                },
                TaxComponent {
                    name: "B".to_string(),
                    rate: 0.125,
                    tax_type: TaxType::Sales,
                },
            ],
        };
        let result = compute_tax(1.0, &jur).unwrap();
        assert_eq!(result.taxes[0].amount, 0.13);
        assert_eq!(result.total_tax_amount, 0.26);
    }

    #[test]
    fn test_end_to_end_california() {
        let resolved = from_shipping_address(&ShippingAddress {
            state: Some("California".to_string()),
            country: Some("United States".to_string()),
            city: None,
            postal_code: None,
        })
        .unwrap();

        let result = compute_tax_result(1000.0, &resolved).unwrap();
        assert_eq!(result.taxes.len(), 1);
        assert_eq!(result.taxes[0].name, "California Sales Tax");
        assert_eq!(result.taxes[0].rate, 0.0725);
        assert_eq!(result.taxes[0].amount, 72.5);
        assert_eq!(result.total_tax_amount, 72.5);
        assert!(close(result.total, 1072.5));
        assert_eq!(result.tax_location, "California");
        assert_eq!(result.detected_location, "Shipping Address: California");
    }

    #[test]
    fn test_end_to_end_ontario() {
        let resolved = from_shipping_address(&ShippingAddress {
            state: Some("Ontario".to_string()),
            country: Some("Canada".to_string()),
            city: None,
            postal_code: None,
        })
        .unwrap();

        let result = compute_tax_result(500.0, &resolved).unwrap();
        assert_eq!(result.taxes.len(), 1);
        assert_eq!(result.taxes[0].name, "HST");
        assert_eq!(result.taxes[0].amount, 65.0);
        assert!(close(result.total, 565.0));
    }

    #[test]
    fn test_end_to_end_quebec_stacks_two_components() {
        let resolved = from_shipping_address(&ShippingAddress {
            state: Some("Quebec".to_string()),
            country: Some("Canada".to_string()),
            city: None,
            postal_code: None,
        })
        .unwrap();

        let result = compute_tax_result(200.0, &resolved).unwrap();
        assert_eq!(result.taxes.len(), 2);
        assert_eq!(result.taxes[0].name, "GST");
        assert_eq!(result.taxes[0].amount, 10.0);
        assert_eq!(result.taxes[1].name, "QST");
        assert_eq!(result.taxes[1].amount, 19.95);
        assert_eq!(result.total_tax_amount, 29.95);
        assert!(close(result.total, 229.95));
    }
}
