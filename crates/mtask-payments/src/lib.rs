//! Payment-intent client for the Stripe REST API.
//!
//! This crate provides:
//! - `PaymentClient` for creating provider-side payment intents
//! - Decimal-to-minor-unit conversion with a pinned rounding policy
//! - Typed errors and bounded retry for transient network failures

pub mod client;
pub mod error;
pub mod types;

pub use client::{to_minor_units, PaymentClient, PaymentConfig};
pub use error::{PaymentError, PaymentResult};
pub use types::PaymentIntent;
