//! Payment-intent handler.

use axum::extract::State;
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateIntentRequest {
    pub price: PriceEnvelope,
}

/// The client nests the amount one level deep.
#[derive(Debug, Deserialize)]
pub struct PriceEnvelope {
    pub price: Decimal,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIntentResponse {
    pub client_secret: String,
}

/// Create a provider-side payment intent and return its client secret.
pub async fn create_payment_intent(
    State(state): State<AppState>,
    Json(request): Json<CreateIntentRequest>,
) -> ApiResult<Json<CreateIntentResponse>> {
    let intent = state.payments.create_intent(request.price.price).await?;

    Ok(Json(CreateIntentResponse {
        client_secret: intent.client_secret,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_parses_nested_price() {
        let request: CreateIntentRequest =
            serde_json::from_str(r#"{"price":{"price":19.99}}"#).unwrap();
        assert_eq!(request.price.price, "19.99".parse::<Decimal>().unwrap());
    }

    #[test]
    fn response_exposes_camel_case_secret() {
        let response = CreateIntentResponse {
            client_secret: "pi_1_secret".to_string(),
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["clientSecret"], serde_json::json!("pi_1_secret"));
    }
}
