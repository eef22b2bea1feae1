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
        .route("/", post(create_research).get(list_research))
        .route("/:id", put(update_research).delete(delete_research))
}

pub async fn create_research(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ResearchRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_research(draft).await {
        Ok(paper) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Research paper added successfully!",
                "paper": paper,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to add research paper.", e),
    }
}

pub async fn update_research(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ResearchRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid paper id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_research(id, draft).await {
        Ok(paper) => Json(serde_json::json!({
            "success": true,
            "message": "Research paper updated successfully!",
            "paper": paper,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update research paper.", e),
    }
}

pub async fn delete_research(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid paper id"),
    };

    match services.store().delete_research(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete research paper.", e),
    }
}

pub async fn list_research(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_research().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load research papers.", e),
    }
}
