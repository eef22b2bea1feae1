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
        .route("/", post(create_skill).get(list_skills))
        .route("/:id", put(update_skill).delete(delete_skill))
}

pub async fn create_skill(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::SkillRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_skill(draft).await {
        Ok(skill) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Skill created successfully!",
                "skill": skill,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to create skill.", e),
    }
}

pub async fn update_skill(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::SkillRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid skill id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_skill(id, draft).await {
        Ok(skill) => Json(serde_json::json!({
            "success": true,
            "message": "Skill updated successfully!",
            "skill": skill,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update skill.", e),
    }
}

pub async fn delete_skill(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid skill id"),
    };

    match services.store().delete_skill(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete skill.", e),
    }
}

pub async fn list_skills(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_skills().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load skills.", e),
    }
}
