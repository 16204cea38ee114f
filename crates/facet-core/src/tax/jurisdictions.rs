//! # Jurisdiction Tables
//!
//! The authoritative, hand-maintained tax tables: every US state plus DC,
//! every Canadian province and territory, and three fallback entries. This
//! is domain data, not configuration - it ships with the engine, is
//! initialized once, and is immutable for the life of the process.
//!
//! ## Table Shape
//! - US entries carry at most one component. Most are plain sales tax;
//!   Hawaii's is a general excise tax and New Mexico's a gross receipts
//!   tax. Five states (AK, DE, MT, NH, OR) levy no state sales tax and
//!   carry an empty component list.
//! - Canadian entries mirror the actual federal/provincial structure:
//!   GST alone (AB and the territories), GST+PST (BC, MB, SK), harmonized
//!   HST (ON and the Atlantic provinces), GST+QST (QC). These are the only
//!   multi-component entries.
//! - `DEFAULT_US` carries no components: US sales tax is state-level, and
//!   with no usable state there is no defensible rate to charge.
//!   `DEFAULT_CA` carries GST 5%, which is owed federally in every
//!   province. `DEFAULT_INTERNATIONAL` is tax-free.

use lazy_static::lazy_static;
use std::collections::HashMap;

use super::{TaxComponent, TaxJurisdiction, TaxType};

// =============================================================================
// Fallback Keys
// =============================================================================

/// Table key for a US order with no usable state.
pub const DEFAULT_US: &str = "DEFAULT_US";

/// Table key for a Canadian order with no usable province.
pub const DEFAULT_CA: &str = "DEFAULT_CA";

/// Table key for everywhere else, and for failed location detection.
pub const DEFAULT_INTERNATIONAL: &str = "DEFAULT_INTERNATIONAL";

// =============================================================================
// Table Construction
// =============================================================================

fn component(name: &str, rate: f64, tax_type: TaxType) -> TaxComponent {
    TaxComponent {
        name: name.to_string(),
        rate,
        tax_type,
    }
}

fn sales(location: &str, rate: f64) -> TaxJurisdiction {
    TaxJurisdiction {
        location: location.to_string(),
        taxes: vec![component(&format!("{} Sales Tax", location), rate, TaxType::Sales)],
    }
}

fn tax_free(location: &str) -> TaxJurisdiction {
    TaxJurisdiction {
        location: location.to_string(),
        taxes: vec![],
    }
}

fn jurisdiction_with(location: &str, taxes: Vec<TaxComponent>) -> TaxJurisdiction {
    TaxJurisdiction {
        location: location.to_string(),
        taxes,
    }
}

fn gst() -> TaxComponent {
    component("GST", 0.05, TaxType::Gst)
}

fn pst(rate: f64) -> TaxComponent {
    component("PST", rate, TaxType::Pst)
}

fn hst(rate: f64) -> TaxComponent {
    component("HST", rate, TaxType::Hst)
}

lazy_static! {
    static ref JURISDICTIONS: HashMap<&'static str, TaxJurisdiction> = {
        let mut m = HashMap::new();

        // ----------------------------------------------------------------
        // United States (state base rates; DC included)
        // ----------------------------------------------------------------
        m.insert("AL", sales("Alabama", 0.04));
        m.insert("AK", tax_free("Alaska"));
        m.insert("AZ", sales("Arizona", 0.056));
        m.insert("AR", sales("Arkansas", 0.065));
        m.insert("CA", sales("California", 0.0725));
        m.insert("CO", sales("Colorado", 0.029));
        m.insert("CT", sales("Connecticut", 0.0635));
        m.insert("DE", tax_free("Delaware"));
        m.insert("DC", sales("District of Columbia", 0.06));
        m.insert("FL", sales("Florida", 0.06));
        m.insert("GA", sales("Georgia", 0.04));
        m.insert(
            "HI",
            jurisdiction_with(
                "Hawaii",
                vec![component("Hawaii General Excise Tax", 0.04, TaxType::Excise)],
            ),
        );
        m.insert("ID", sales("Idaho", 0.06));
        m.insert("IL", sales("Illinois", 0.0625));
        m.insert("IN", sales("Indiana", 0.07));
        m.insert("IA", sales("Iowa", 0.06));
        m.insert("KS", sales("Kansas", 0.065));
        m.insert("KY", sales("Kentucky", 0.06));
        m.insert("LA", sales("Louisiana", 0.0445));
        m.insert("ME", sales("Maine", 0.055));
        m.insert("MD", sales("Maryland", 0.06));
        m.insert("MA", sales("Massachusetts", 0.0625));
        m.insert("MI", sales("Michigan", 0.06));
        m.insert("MN", sales("Minnesota", 0.06875));
        m.insert("MS", sales("Mississippi", 0.07));
        m.insert("MO", sales("Missouri", 0.04225));
        m.insert("MT", tax_free("Montana"));
        m.insert("NE", sales("Nebraska", 0.055));
        m.insert("NV", sales("Nevada", 0.0685));
        m.insert("NH", tax_free("New Hampshire"));
        m.insert("NJ", sales("New Jersey", 0.06625));
        m.insert(
            "NM",
            jurisdiction_with(
                "New Mexico",
                vec![component(
                    "New Mexico Gross Receipts Tax",
                    0.04875,
                    TaxType::GrossReceipts,
                )],
            ),
        );
        m.insert("NY", sales("New York", 0.04));
        m.insert("NC", sales("North Carolina", 0.0475));
        m.insert("ND", sales("North Dakota", 0.05));
        m.insert("OH", sales("Ohio", 0.0575));
        m.insert("OK", sales("Oklahoma", 0.045));
        m.insert("OR", tax_free("Oregon"));
        m.insert("PA", sales("Pennsylvania", 0.06));
        m.insert("RI", sales("Rhode Island", 0.07));
        m.insert("SC", sales("South Carolina", 0.06));
        m.insert("SD", sales("South Dakota", 0.042));
        m.insert("TN", sales("Tennessee", 0.07));
        m.insert("TX", sales("Texas", 0.0625));
        m.insert("UT", sales("Utah", 0.061));
        m.insert("VT", sales("Vermont", 0.06));
        m.insert("VA", sales("Virginia", 0.053));
        m.insert("WA", sales("Washington", 0.065));
        m.insert("WV", sales("West Virginia", 0.06));
        m.insert("WI", sales("Wisconsin", 0.05));
        m.insert("WY", sales("Wyoming", 0.04));

        // ----------------------------------------------------------------
        // Canada (GST / GST+PST / HST / GST+QST per provincial structure)
        // ----------------------------------------------------------------
        m.insert("AB", jurisdiction_with("Alberta", vec![gst()]));
        m.insert(
            "BC",
            jurisdiction_with("British Columbia", vec![gst(), pst(0.07)]),
        );
        m.insert("MB", jurisdiction_with("Manitoba", vec![gst(), pst(0.07)]));
        m.insert("NB", jurisdiction_with("New Brunswick", vec![hst(0.15)]));
        m.insert(
            "NL",
            jurisdiction_with("Newfoundland and Labrador", vec![hst(0.15)]),
        );
        m.insert(
            "NT",
            jurisdiction_with("Northwest Territories", vec![gst()]),
        );
        m.insert("NS", jurisdiction_with("Nova Scotia", vec![hst(0.15)]));
        m.insert("NU", jurisdiction_with("Nunavut", vec![gst()]));
        m.insert("ON", jurisdiction_with("Ontario", vec![hst(0.13)]));
        m.insert(
            "PE",
            jurisdiction_with("Prince Edward Island", vec![hst(0.15)]),
        );
        m.insert(
            "QC",
            jurisdiction_with(
                "Quebec",
                vec![gst(), component("QST", 0.09975, TaxType::Qst)],
            ),
        );
        m.insert(
            "SK",
            jurisdiction_with("Saskatchewan", vec![gst(), pst(0.06)]),
        );
        m.insert("YT", jurisdiction_with("Yukon", vec![gst()]));

        // ----------------------------------------------------------------
        // Fallbacks
        // ----------------------------------------------------------------
        m.insert(DEFAULT_US, tax_free("United States"));
        m.insert(DEFAULT_CA, jurisdiction_with("Canada", vec![gst()]));
        m.insert(DEFAULT_INTERNATIONAL, tax_free("International"));

        m
    };

    static ref US_STATE_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("alabama", "AL");
        m.insert("alaska", "AK");
        m.insert("arizona", "AZ");
        m.insert("arkansas", "AR");
        m.insert("california", "CA");
        m.insert("colorado", "CO");
        m.insert("connecticut", "CT");
        m.insert("delaware", "DE");
        m.insert("district of columbia", "DC");
        m.insert("florida", "FL");
        m.insert("georgia", "GA");
        m.insert("hawaii", "HI");
        m.insert("idaho", "ID");
        m.insert("illinois", "IL");
        m.insert("indiana", "IN");
        m.insert("iowa", "IA");
        m.insert("kansas", "KS");
        m.insert("kentucky", "KY");
        m.insert("louisiana", "LA");
        m.insert("maine", "ME");
        m.insert("maryland", "MD");
        m.insert("massachusetts", "MA");
        m.insert("michigan", "MI");
        m.insert("minnesota", "MN");
        m.insert("mississippi", "MS");
        m.insert("missouri", "MO");
        m.insert("montana", "MT");
        m.insert("nebraska", "NE");
        m.insert("nevada", "NV");
        m.insert("new hampshire", "NH");
        m.insert("new jersey", "NJ");
        m.insert("new mexico", "NM");
        m.insert("new york", "NY");
        m.insert("north carolina", "NC");
        m.insert("north dakota", "ND");
        m.insert("ohio", "OH");
        m.insert("oklahoma", "OK");
        m.insert("oregon", "OR");
        m.insert("pennsylvania", "PA");
        m.insert("rhode island", "RI");
        m.insert("south carolina", "SC");
        m.insert("south dakota", "SD");
        m.insert("tennessee", "TN");
        m.insert("texas", "TX");
        m.insert("utah", "UT");
        m.insert("vermont", "VT");
        m.insert("virginia", "VA");
        m.insert("washington", "WA");
        m.insert("west virginia", "WV");
        m.insert("wisconsin", "WI");
        m.insert("wyoming", "WY");
        m
    };

    static ref CA_PROVINCE_CODES: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert("alberta", "AB");
        m.insert("british columbia", "BC");
        m.insert("manitoba", "MB");
        m.insert("new brunswick", "NB");
        m.insert("newfoundland and labrador", "NL");
        m.insert("northwest territories", "NT");
        m.insert("nova scotia", "NS");
        m.insert("nunavut", "NU");
        m.insert("ontario", "ON");
        m.insert("prince edward island", "PE");
        m.insert("quebec", "QC");
        m.insert("saskatchewan", "SK");
        m.insert("yukon", "YT");
        m
    };
}

// =============================================================================
// Lookups
// =============================================================================

/// Looks up a jurisdiction by table key (case-insensitive, trimmed).
///
/// ## Example
/// ```rust
/// use facet_core::tax::jurisdiction;
///
/// assert_eq!(jurisdiction("CA").unwrap().location, "California");
/// assert_eq!(jurisdiction("on").unwrap().location, "Ontario");
/// assert!(jurisdiction("XX").is_none());
/// ```
pub fn jurisdiction(code: &str) -> Option<&'static TaxJurisdiction> {
    JURISDICTIONS.get(code.trim().to_uppercase().as_str())
}

/// The `DEFAULT_US` entry.
pub fn default_us() -> &'static TaxJurisdiction {
    &JURISDICTIONS[DEFAULT_US]
}

/// The `DEFAULT_CA` entry.
pub fn default_ca() -> &'static TaxJurisdiction {
    &JURISDICTIONS[DEFAULT_CA]
}

/// The `DEFAULT_INTERNATIONAL` entry.
pub fn default_international() -> &'static TaxJurisdiction {
    &JURISDICTIONS[DEFAULT_INTERNATIONAL]
}

/// Normalizes a US state name or abbreviation to a 2-letter code.
///
/// Full names go through the name table; a 2-character input is treated as
/// already being a code. Anything else is `None` (the caller falls back to
/// `DEFAULT_US`).
pub fn us_state_code(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if let Some(code) = US_STATE_CODES.get(trimmed.to_lowercase().as_str()) {
        return Some((*code).to_string());
    }
    if trimmed.chars().count() == 2 {
        return Some(trimmed.to_uppercase());
    }
    None
}

/// Normalizes a Canadian province name or abbreviation to a 2-letter code.
pub fn ca_province_code(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if let Some(code) = CA_PROVINCE_CODES.get(trimmed.to_lowercase().as_str()) {
        return Some((*code).to_string());
    }
    if trimmed.chars().count() == 2 {
        return Some(trimmed.to_uppercase());
    }
    None
}

// =============================================================================
// Unit Tests
// =============================================================================
