//! # facet-checkout: Checkout Orchestration
//!
//! Composes the pure calculators in `facet-core` into the checkout flow
//! the storefront actually runs:
//!
//! ```text
//! cart + destination ──► shipping options (ranked, cheapest/free first)
//! subtotal + best-known location ──► jurisdiction ──► itemized tax
//!                                 └─► quote (options + tax + grand total)
//! ```
//!
//! This crate owns the engine's only outbound network call: the best-effort
//! IP-geolocation lookup used as the lowest-priority location signal. The
//! call is bounded by a configurable timeout and every failure mode
//! degrades to the international tax-free default - checkout never blocks
//! on a transient lookup failure.
//!
//! ## Modules
//!
//! - [`config`] - Environment-driven geolocation configuration
//! - [`geo`] - The reqwest-backed IP-geolocation client
//! - [`resolver`] - Three-tier jurisdiction resolution
//! - [`quote`] - The composed checkout quote
//! - [`error`] - Error types for this layer

pub mod config;
pub mod error;
pub mod geo;
pub mod quote;
pub mod resolver;

pub use config::{ConfigError, GeoConfig};
pub use error::{CheckoutError, CheckoutResult, GeoError};
pub use geo::{GeoClient, IpLocation};
pub use quote::{quote, CheckoutQuote};
pub use resolver::{first_forwarded_ip, resolve_jurisdiction, LocationSignals};
