//! Stripe payment-intent HTTP client.

use std::time::Duration;

use reqwest::Client;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use tracing::{debug, warn};

use crate::error::{PaymentError, PaymentResult};
use crate::types::PaymentIntent;

/// Currency charged for every intent.
const CURRENCY: &str = "usd";

/// Configuration for the payment client.
#[derive(Debug, Clone)]
pub struct PaymentConfig {
    /// Provider API secret key.
    pub secret_key: String,
    /// Base URL of the provider API.
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Max retries for transient network failures.
    pub max_retries: u32,
}

impl PaymentConfig {
    /// Create config from environment variables.
    pub fn from_env() -> PaymentResult<Self> {
        let secret_key = std::env::var("STRIPE_SECRET_KEY")
            .map_err(|_| PaymentError::Config("STRIPE_SECRET_KEY is not set".to_string()))?;

        Ok(Self {
            secret_key,
            base_url: std::env::var("STRIPE_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            timeout: Duration::from_secs(
                std::env::var("STRIPE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(30),
            ),
            max_retries: std::env::var("STRIPE_RETRIES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        })
    }
}

/// Client for the payment provider.
pub struct PaymentClient {
    http: Client,
    config: PaymentConfig,
}

impl PaymentClient {
    /// Create a new payment client.
    pub fn new(config: PaymentConfig) -> PaymentResult<Self> {
        let http = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(PaymentError::Network)?;

        Ok(Self { http, config })
    }

    /// Create from environment variables.
    pub fn from_env() -> PaymentResult<Self> {
        Self::new(PaymentConfig::from_env()?)
    }

    /// Create a payment intent for a decimal USD amount.
    ///
    /// The amount is converted to integer cents before the call; the
    /// provider's own validation is the only guard on its value.
    pub async fn create_intent(&self, price: Decimal) -> PaymentResult<PaymentIntent> {
        let amount = to_minor_units(price)?;
        let url = format!("{}/v1/payment_intents", self.config.base_url);

        debug!(amount, "Requesting payment intent");

        let response = self
            .with_retry(|| async {
                self.http
                    .post(&url)
                    .bearer_auth(&self.config.secret_key)
                    .form(&[
                        ("amount", amount.to_string()),
                        ("currency", CURRENCY.to_string()),
                        ("automatic_payment_methods[enabled]", "true".to_string()),
                    ])
                    .send()
                    .await
                    .map_err(PaymentError::Network)
            })
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PaymentError::RequestFailed(format!(
                "Payment provider returned {}: {}",
                status, body
            )));
        }

        let intent: PaymentIntent = response.json().await?;
        Ok(intent)
    }

    /// Execute with retry logic.
    async fn with_retry<F, Fut, T>(&self, operation: F) -> PaymentResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = PaymentResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match operation().await {
                Ok(result) => return Ok(result),
                Err(e) if e.is_retryable() && attempt < self.config.max_retries => {
                    let delay = Duration::from_millis(500 * 2u64.pow(attempt));
                    warn!(
                        "Payment request failed (attempt {}), retrying in {:?}: {}",
                        attempt + 1,
                        delay,
                        e
                    );
                    tokio::time::sleep(delay).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or(PaymentError::RequestFailed("Unknown error".to_string())))
    }
}

/// Convert a decimal currency amount into integer minor units (cents).
///
/// Midpoints round away from zero: 19.995 becomes 2000 cents, not 1999.
pub fn to_minor_units(price: Decimal) -> PaymentResult<i64> {
    let cents = (price * Decimal::from(100))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    cents
        .to_i64()
        .ok_or_else(|| PaymentError::InvalidAmount(format!("amount out of range: {}", price)))
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn test_config(base_url: String) -> PaymentConfig {
        PaymentConfig {
            secret_key: "sk_test_123".to_string(),
            base_url,
            timeout: Duration::from_secs(5),
            max_retries: 0,
        }
    }

    #[test]
    fn minor_units_round_to_cents() {
        assert_eq!(to_minor_units(dec("19.99")).unwrap(), 1999);
        assert_eq!(to_minor_units(dec("10")).unwrap(), 1000);
        assert_eq!(to_minor_units(dec("0.01")).unwrap(), 1);
        assert_eq!(to_minor_units(dec("0")).unwrap(), 0);
    }

    #[test]
    fn minor_units_midpoint_rounds_away_from_zero() {
        assert_eq!(to_minor_units(dec("19.995")).unwrap(), 2000);
        assert_eq!(to_minor_units(dec("0.005")).unwrap(), 1);
        assert_eq!(to_minor_units(dec("-19.995")).unwrap(), -2000);
    }

    #[test]
    fn minor_units_truncates_sub_cent_noise() {
        assert_eq!(to_minor_units(dec("19.994")).unwrap(), 1999);
        assert_eq!(to_minor_units(dec("19.996")).unwrap(), 2000);
    }

    #[tokio::test]
    async fn create_intent_posts_minor_units() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .and(header("Authorization", "Bearer sk_test_123"))
            .and(body_string_contains("amount=1999"))
            .and(body_string_contains("currency=usd"))
            .and(body_string_contains("automatic_payment_methods"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "pi_123",
                "client_secret": "pi_123_secret_abc",
                "amount": 1999,
                "currency": "usd",
                "status": "requires_payment_method"
            })))
            .mount(&server)
            .await;

        let client = PaymentClient::new(test_config(server.uri())).unwrap();
        let intent = client.create_intent(dec("19.99")).await.unwrap();

        assert_eq!(intent.id, "pi_123");
        assert_eq!(intent.client_secret, "pi_123_secret_abc");
        assert_eq!(intent.amount, 1999);
        assert_eq!(intent.currency, "usd");
    }

    #[tokio::test]
    async fn create_intent_surfaces_provider_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/payment_intents"))
            .respond_with(ResponseTemplate::new(402).set_body_json(json!({
                "error": { "message": "Your card was declined." }
            })))
            .mount(&server)
            .await;

        let client = PaymentClient::new(test_config(server.uri())).unwrap();
        let result = client.create_intent(dec("5.00")).await;

        assert!(matches!(result, Err(PaymentError::RequestFailed(_))));
    }
}
