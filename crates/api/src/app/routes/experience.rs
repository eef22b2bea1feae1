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
        .route("/", post(create_experience).get(list_experience))
        .route("/:id", put(update_experience).delete(delete_experience))
}

pub async fn create_experience(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ExperienceRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_experience(draft).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Experience created successfully!",
                "experience": entry,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to create experience.", e),
    }
}

pub async fn update_experience(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::ExperienceRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid experience id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_experience(id, draft).await {
        Ok(entry) => Json(serde_json::json!({
            "success": true,
            "message": "Experience updated successfully!",
            "experience": entry,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update experience.", e),
    }
}

pub async fn delete_experience(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid experience id"),
    };

    match services.store().delete_experience(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete experience.", e),
    }
}

pub async fn list_experience(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_experience().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load experience.", e),
    }
}
