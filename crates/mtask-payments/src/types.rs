//! Payment provider wire types.

use serde::Deserialize;

/// Subset of the provider's payment-intent object the backend consumes.
///
/// Only the client secret leaves the server; the rest is kept for logging
/// and tests.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
    pub amount: i64,
    pub currency: String,
}
