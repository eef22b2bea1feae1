use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{post, put},
};

use vitrine_core::RecordId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", post(create_project).get(list_projects))
        .route("/:id", put(update_project).delete(delete_project))
}

pub async fn create_project(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProjectRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_project(draft).await {
        Ok(project) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Project created successfully!",
                "project": project,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to create project.", e),
    }
}

pub async fn update_project(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ProjectRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid project id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_project(id, draft).await {
        Ok(project) => Json(serde_json::json!({
            "success": true,
            "message": "Project updated successfully!",
            "project": project,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update project.", e),
    }
}

pub async fn delete_project(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid project id"),
    };

    match services.store().delete_project(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete project.", e),
    }
}

pub async fn list_projects(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_projects().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load projects.", e),
    }
}
