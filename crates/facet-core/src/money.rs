//! # Money Module
//!
//! Currency rounding and display helpers.
//!
//! ## One Rounding Point
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE SCATTERED-ROUNDING PROBLEM                                         │
//! │                                                                         │
//! │  Tax components are displayed line by line on the checkout screen:     │
//! │                                                                         │
//! │    GST (5%)            $10.00                                          │
//! │    QST (9.975%)        $19.95                                          │
//! │    ─────────────────────────                                           │
//! │    Total tax           $29.95                                          │
//! │                                                                         │
//! │  If each line rounds one way and the total rounds another, the column  │
//! │  stops adding up. So: every displayed amount is rounded per-component  │
//! │  through round2(), and totals are sums OF the rounded components.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Amounts are `f64` dollars throughout the engine. Merchant rate tables and
//! carts arrive as decimal JSON, and component rates like Quebec's 9.975%
//! don't reduce to whole basis points, so the engine keeps the decimal
//! representation and funnels every cent boundary through [`round2`].

// =============================================================================
// Rounding
// =============================================================================

/// Rounds an amount to 2 decimal places (cents), half away from zero.
///
/// Implemented as multiply-by-100, round, divide-by-100. This is the exact
/// rounding point applied to every per-component tax amount and every
/// computed shipping price before it reaches an order or a screen.
///
/// ## Example
/// ```rust
/// use facet_core::money::round2;
///
/// assert_eq!(round2(72.499999999), 72.5);
/// assert_eq!(round2(10.005), 10.01);
/// assert_eq!(round2(15.99 + 1.5 * 2.5), 19.74);
/// ```
#[inline]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

// =============================================================================
// Display Helpers
// =============================================================================

/// Formats an amount with its currency code for option descriptions.
///
/// ## Example
/// ```rust
/// use facet_core::money::format_amount;
///
/// assert_eq!(format_amount(100.0, "USD"), "100.00 USD");
/// assert_eq!(format_amount(49.5, "CAD"), "49.50 CAD");
/// ```
///
/// ## Note
/// This is for generated description strings. The storefront formats
/// amounts for display with proper locale handling.
pub fn format_amount(amount: f64, currency: &str) -> String {
    format!("{:.2} {}", amount, currency)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_exact_cents_pass_through() {
        assert_eq!(round2(72.5), 72.5);
        assert_eq!(round2(0.0), 0.0);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_round2_half_up_on_cents() {
        assert_eq!(round2(10.005), 10.01);
        assert_eq!(round2(10.004), 10.0);
    }

    #[test]
    fn test_round2_binary_noise_collapses() {
        // 1000 × 0.0725 lands a hair under 72.5 in f64
        assert_eq!(round2(1000.0 * 0.0725), 72.5);
        // 200 × 0.09975 lands a hair off 19.95
        assert_eq!(round2(200.0 * 0.09975), 19.95);
    }

    #[test]
    fn test_round2_negative_amounts() {
        // Refund adjustments round away from zero, mirroring positive amounts
        assert_eq!(round2(-10.005), -10.01);
        assert_eq!(round2(-10.004), -10.0);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(100.0, "USD"), "100.00 USD");
        assert_eq!(format_amount(0.0, "EUR"), "0.00 EUR");
        assert_eq!(format_amount(12.345, "USD"), "12.35 USD");
    }
}
