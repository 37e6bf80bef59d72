//! User handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use mtask_models::{InsertSummary, Role, UpdateSummary, User};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validate::require_email;

/// Register a new user document.
pub async fn create_user(
    State(state): State<AppState>,
    Json(user): Json<User>,
) -> ApiResult<Json<InsertSummary>> {
    require_email(&user.email)?;
    let summary = state.users.insert(&user).await?;
    Ok(Json(summary))
}

/// List every user.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state.users.list().await?;
    Ok(Json(users))
}

/// Get a single user by email. Missing users come back as `null`.
pub async fn get_user_by_email(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Option<User>>> {
    caller.authorize_owner(&email)?;
    let user = state.users.find_by_email(&email).await?;
    Ok(Json(user))
}

/// Coin-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateCoinRequest {
    #[serde(rename = "newCoin")]
    pub new_coin: i64,
}

/// Set the coin balance of a user.
pub async fn update_user_coin(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(email): Path<String>,
    Json(request): Json<UpdateCoinRequest>,
) -> ApiResult<Json<UpdateSummary>> {
    caller.authorize_owner(&email)?;
    let summary = state.users.set_coin(&email, request.new_coin).await?;
    Ok(Json(summary))
}

/// Role-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateRoleRequest {
    #[serde(rename = "newRole")]
    pub new_role: Role,
}

/// Set the role of a user. Admin only.
pub async fn update_user_role(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(email): Path<String>,
    Json(request): Json<UpdateRoleRequest>,
) -> ApiResult<Json<UpdateSummary>> {
    caller.require_admin()?;
    let summary = state.users.set_role(&email, request.new_role).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coin_update_uses_wire_field_name() {
        let request: UpdateCoinRequest = serde_json::from_str(r#"{"newCoin":42}"#).unwrap();
        assert_eq!(request.new_coin, 42);
    }

    #[test]
    fn role_update_rejects_open_ended_strings() {
        let ok: UpdateRoleRequest = serde_json::from_str(r#"{"newRole":"buyer"}"#).unwrap();
        assert_eq!(ok.new_role, Role::Buyer);

        let bad: Result<UpdateRoleRequest, _> = serde_json::from_str(r#"{"newRole":"owner"}"#);
        assert!(bad.is_err());
    }
}
