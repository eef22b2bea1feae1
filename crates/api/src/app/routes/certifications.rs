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
        .route("/", post(create_certification).get(list_certifications))
        .route("/:id", put(update_certification).delete(delete_certification))
}

pub async fn create_certification(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::CertificationRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().create_certification(draft).await {
        Ok(cert) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "success": true,
                "message": "Certification added successfully!",
                "certification": cert,
            })),
        )
            .into_response(),
        Err(e) => errors::persistence_failure("Failed to add certification.", e),
    }
}

pub async fn update_certification(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    Json(body): Json<dto::CertificationRequest>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid certification id"),
    };

    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().update_certification(id, draft).await {
        Ok(cert) => Json(serde_json::json!({
            "success": true,
            "message": "Certification updated successfully!",
            "certification": cert,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update certification.", e),
    }
}

pub async fn delete_certification(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id: RecordId = match id.parse() {
        Ok(v) => v,
        Err(_) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid certification id"),
    };

    match services.store().delete_certification(id).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to delete certification.", e),
    }
}

pub async fn list_certifications(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().list_certifications().await {
        Ok(items) => Json(serde_json::json!({ "items": items })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load certifications.", e),
    }
}
