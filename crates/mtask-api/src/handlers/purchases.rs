//! Coin purchase handlers.

use axum::extract::{Path, State};
use axum::Json;

use mtask_models::{InsertSummary, Purchase};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validate::require_email;

/// Record a completed coin purchase for the calling user.
pub async fn create_purchase(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(purchase): Json<Purchase>,
) -> ApiResult<Json<InsertSummary>> {
    require_email(&purchase.email)?;
    caller.authorize_owner(&purchase.email)?;

    let summary = state.purchases.insert(&purchase).await?;
    Ok(Json(summary))
}

/// List every purchase.
pub async fn list_purchases(State(state): State<AppState>) -> ApiResult<Json<Vec<Purchase>>> {
    let purchases = state.purchases.list().await?;
    Ok(Json(purchases))
}

/// List purchases made by one user.
pub async fn list_purchases_by_email(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Purchase>>> {
    caller.authorize_owner(&email)?;
    let purchases = state.purchases.list_by_email(&email).await?;
    Ok(Json(purchases))
}
