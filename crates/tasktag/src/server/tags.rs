use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::server::error::{ApiError, ApiErrorResponse};
use crate::server::ServerState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagTaskRequest {
    pub task: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TaggedTask {
    pub task: String,
    pub category: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TagTasksRequest {
    pub tasks: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TagTasksResponse {
    pub results: Vec<TaggedTask>,
}

#[utoipa::path(
    post,
    path = "/tag-task",
    tag = "tagging",
    request_body = TagTaskRequest,
    responses(
        (status = 200, description = "Task tagged with a category", body = TaggedTask),
        (status = 400, body = ApiErrorResponse),
    ),
    description = "Tag a single task with an appropriate category."
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn tag_task(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<TagTaskRequest>,
) -> Result<Json<TaggedTask>, ApiError> {
    if payload.task.trim().is_empty() {
        return Err(ApiError::bad_request("task cannot be empty"));
    }

    let category = state.tagger.categorize(&payload.task).to_string();
    Ok(Json(TaggedTask {
        task: payload.task,
        category,
    }))
}

#[utoipa::path(
    post,
    path = "/tag-tasks",
    tag = "tagging",
    request_body = TagTasksRequest,
    responses(
        (status = 200, description = "Tasks tagged with categories; blank entries are skipped", body = TagTasksResponse),
        (status = 400, body = ApiErrorResponse),
    ),
    description = "Tag multiple tasks in one request."
)]
#[tracing::instrument(skip_all)]
pub(crate) async fn tag_tasks(
    State(state): State<Arc<ServerState>>,
    Json(payload): Json<TagTasksRequest>,
) -> Result<Json<TagTasksResponse>, ApiError> {
    if payload.tasks.is_empty() {
        return Err(ApiError::bad_request("tasks list cannot be empty"));
    }

    let results = payload
        .tasks
        .into_iter()
        .filter(|task| !task.trim().is_empty())
        .map(|task| {
            let category = state.tagger.categorize(&task).to_string();
            TaggedTask { task, category }
        })
        .collect();

    Ok(Json(TagTasksResponse { results }))
}
