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
        .route("/", post(create_education).get(list_education))
        .route("/:id", put(update_education).delete(delete_education))
}

pub async fn create_education(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::EducationRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_education(draft).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Education created successfully!",
                "education": entry,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to create education.", e),
    }
}

pub async fn update_education(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::EducationRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid education id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_education(id, draft).await {
        Ok(entry) => Json(serde_json::json!({
            "success": true,
            "message": "Education updated successfully!",
            "education": entry,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update education.", e),
    }
}

pub async fn delete_education(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid education id"),
    };

    match services.store().delete_education(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete education.", e),
    }
}

pub async fn list_education(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_education().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load education.", e),
    }
}
