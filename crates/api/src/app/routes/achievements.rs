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
        .route("/", post(create_achievement).get(list_achievements))
        .route("/:id", put(update_achievement).delete(delete_achievement))
}

pub async fn create_achievement(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::AchievementRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_achievement(draft).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Achievement created successfully!",
                "achievement": entry,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to create achievement.", e),
    }
}

pub async fn update_achievement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::AchievementRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid achievement id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_achievement(id, draft).await {
        Ok(entry) => Json(serde_json::json!({
            "success": true,
            "message": "Achievement updated successfully!",
            "achievement": entry,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update achievement.", e),
    }
}

pub async fn delete_achievement(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid achievement id"),
    };

    match services.store().delete_achievement(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete achievement.", e),
    }
}

pub async fn list_achievements(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_achievements().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load achievements.", e),
    }
}
