//! Token issuing handler.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Sign the posted claims into a 3-hour bearer token.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(claims): Json<Map<String, Value>>,
) -> ApiResult<Json<TokenResponse>> {
    let token = state.issuer.issue(claims)?;
    Ok(Json(TokenResponse { token }))
}
