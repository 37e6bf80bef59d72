//! Submission handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use mtask_models::{DeleteSummary, InsertSummary, Submission, SubmissionStatus, UpdateSummary};
use mtask_store::parse_object_id;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validate::require_email;

/// Hand in work against a task. The caller must own the worker email.
pub async fn create_submission(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(submission): Json<Submission>,
) -> ApiResult<Json<InsertSummary>> {
    require_email(&submission.worker_email)?;
    caller.authorize_owner(&submission.worker_email)?;

    let summary = state.submissions.insert(&submission).await?;
    Ok(Json(summary))
}

/// List every submission.
pub async fn list_submissions(State(state): State<AppState>) -> ApiResult<Json<Vec<Submission>>> {
    let submissions = state.submissions.list().await?;
    Ok(Json(submissions))
}

/// List submissions handed in by one worker.
pub async fn list_submissions_by_worker(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Submission>>> {
    caller.authorize_owner(&email)?;
    let submissions = state.submissions.list_by_worker(&email).await?;
    Ok(Json(submissions))
}

/// Status-update request body.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: SubmissionStatus,
}

/// Review a submission by setting its status.
///
/// Any authenticated caller may review; a submission never names its
/// reviewer, so ownership cannot be checked against the document.
pub async fn update_submission_status(
    State(state): State<AppState>,
    _caller: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> ApiResult<Json<UpdateSummary>> {
    let id = parse_object_id(&id)?;
    let summary = state.submissions.set_status(id, request.status).await?;
    Ok(Json(summary))
}

/// Delete a submission.
///
/// Ownership rides in the delete filter: a non-admin caller can only match
/// documents whose worker email equals their token email.
pub async fn delete_submission(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteSummary>> {
    let id = parse_object_id(&id)?;

    let owner = if caller.is_admin() {
        None
    } else {
        Some(caller.require_email()?)
    };

    let summary = state.submissions.delete(id, owner).await?;
    Ok(Json(summary))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_update_accepts_known_statuses_only() {
        let ok: UpdateStatusRequest = serde_json::from_str(r#"{"status":"approved"}"#).unwrap();
        assert_eq!(ok.status, SubmissionStatus::Approved);

        let bad: Result<UpdateStatusRequest, _> = serde_json::from_str(r#"{"status":"done"}"#);
        assert!(bad.is_err());
    }
}
