//! The profile singleton: read + upsert-if-absent.

use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn get_profile(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.store().get_profile().await {
        Ok(profile) => Json(serde_json::json!({ "profile": profile })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load profile.", e),
    }
}

/// Update the existing row if present, else insert the first one. A second
/// submission must never create a second row.
pub async fn upsert_profile(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ProfileRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().upsert_profile(draft).await {
        Ok(profile) => Json(serde_json::json!({
            "success": true,
            "message": "Profile updated successfully!",
            "profile": profile,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update profile.", e),
    }
}
