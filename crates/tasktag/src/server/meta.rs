use axum::extract::State;
use axum::Json;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use utoipa::ToSchema;

use crate::server::tags::TaggedTask;
use crate::server::ServerState;

/// Tasks shown by the demo endpoint.
pub const DEMO_TASKS: [&str; 5] = [
    "Buy milk and bread",
    "Finish project report",
    "Go to the gym",
    "Call mom about birthday",
    "Book flight tickets",
];

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub message: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DemoResponse {
    pub demo_results: Vec<TaggedTask>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "meta",
    responses((status = 200, body = ServiceStatus)),
    description = "Root endpoint with service information."
)]
pub(crate) async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "success".to_string(),
        message: "Task tagging API is running. Visit /openapi.json for the API schema."
            .to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "meta",
    responses((status = 200, body = ServiceStatus)),
    description = "Health check endpoint."
)]
pub(crate) async fn health() -> Json<ServiceStatus> {
    Json(healthy())
}

#[utoipa::path(
    get,
    path = "/healthz",
    tag = "meta",
    responses((status = 200, body = ServiceStatus)),
    description = "Health check endpoint for platform probes."
)]
pub(crate) async fn healthz() -> Json<ServiceStatus> {
    Json(healthy())
}

fn healthy() -> ServiceStatus {
    ServiceStatus {
        status: "healthy".to_string(),
        message: "API is running successfully".to_string(),
    }
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "tagging",
    responses((status = 200, body = CategoriesResponse)),
    description = "All available categories and their keywords."
)]
pub(crate) async fn categories(State(state): State<Arc<ServerState>>) -> Json<CategoriesResponse> {
    let categories = state
        .tagger
        .taxonomy()
        .iter()
        .map(|category| (category.name.clone(), category.keywords.clone()))
        .collect();
    Json(CategoriesResponse { categories })
}

#[utoipa::path(
    get,
    path = "/demo",
    tag = "tagging",
    responses((status = 200, body = DemoResponse)),
    description = "Example tasks and the categories they resolve to."
)]
pub(crate) async fn demo(State(state): State<Arc<ServerState>>) -> Json<DemoResponse> {
    let demo_results = DEMO_TASKS
        .iter()
        .map(|task| TaggedTask {
            task: task.to_string(),
            category: state.tagger.categorize(task).to_string(),
        })
        .collect();
    Json(DemoResponse { demo_results })
}
