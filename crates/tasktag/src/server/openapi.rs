use axum::Json;
use utoipa::OpenApi;

use crate::server::error::{ApiErrorBody, ApiErrorResponse};
use crate::server::meta::{CategoriesResponse, DemoResponse, ServiceStatus};
use crate::server::tags::{TagTaskRequest, TagTasksRequest, TagTasksResponse, TaggedTask};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Task tagging API",
        version = "0.1.0",
        description = "Assigns free-text tasks to categories via keyword and lemma matching"
    ),
    paths(
        crate::server::meta::root,
        crate::server::meta::health,
        crate::server::meta::healthz,
        crate::server::meta::categories,
        crate::server::meta::demo,
        crate::server::tags::tag_task,
        crate::server::tags::tag_tasks,
    ),
    components(schemas(
        // Error
        ApiErrorResponse,
        ApiErrorBody,
        // Meta
        ServiceStatus,
        CategoriesResponse,
        DemoResponse,
        // Tagging
        TagTaskRequest,
        TaggedTask,
        TagTasksRequest,
        TagTasksResponse,
    )),
    tags(
        (name = "meta", description = "Service status and health"),
        (name = "tagging", description = "Task categorization"),
    )
)]
pub struct ApiDoc;

pub(crate) async fn serve_spec() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
