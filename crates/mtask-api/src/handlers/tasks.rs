//! Task handlers.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use mtask_models::{InsertSummary, Task, UpdateSummary};
use mtask_store::{parse_object_id, TaskPatch};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::state::AppState;
use crate::validate::require_email;

/// Post a new task. The caller must own the embedded provider email.
pub async fn create_task(
    State(state): State<AppState>,
    caller: AuthUser,
    Json(task): Json<Task>,
) -> ApiResult<Json<InsertSummary>> {
    require_email(&task.task_provider.email)?;
    caller.authorize_owner(&task.task_provider.email)?;

    let summary = state.tasks.insert(&task).await?;
    Ok(Json(summary))
}

/// List every task.
pub async fn list_tasks(State(state): State<AppState>) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list().await?;
    Ok(Json(tasks))
}

/// List tasks posted by one provider.
pub async fn list_tasks_by_provider(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list_by_provider(&email).await?;
    Ok(Json(tasks))
}

/// Get a single task by id. Missing tasks come back as `null`.
pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Option<Task>>> {
    let id = parse_object_id(&id)?;
    let task = state.tasks.get(id).await?;
    Ok(Json(task))
}

/// Task-update request body.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    #[serde(rename = "taskName")]
    #[validate(length(min = 1, max = 500))]
    pub task_name: String,

    #[serde(rename = "subInfo")]
    #[validate(length(max = 500))]
    pub sub_info: String,

    #[serde(rename = "taskDetails")]
    #[validate(length(max = 5000))]
    pub task_details: String,
}

/// Update the editable fields of a task.
///
/// Ownership rides in the update filter: a non-admin caller can only match
/// documents whose provider email equals their token email.
pub async fn update_task(
    State(state): State<AppState>,
    caller: AuthUser,
    Path(id): Path<String>,
    Json(request): Json<UpdateTaskRequest>,
) -> ApiResult<Json<UpdateSummary>> {
    request.validate()?;
    let id = parse_object_id(&id)?;

    let owner = if caller.is_admin() {
        None
    } else {
        Some(caller.require_email()?)
    };

    let patch = TaskPatch {
        task_name: request.task_name,
        sub_info: request.sub_info,
        task_details: request.task_details,
    };
    let summary = state.tasks.update_details(id, owner, &patch).await?;
    Ok(Json(summary))
}
