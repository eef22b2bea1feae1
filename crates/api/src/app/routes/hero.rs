//! The hero-settings singleton: read + upsert-if-absent.

use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn get_hero(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    match services.store().get_hero().await {
        Ok(hero) => Json(serde_json::json!({ "hero": hero })).into_response(),
        Err(e) => errors::persistence_failure("Failed to load hero settings.", e),
    }
}

pub async fn upsert_hero(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::HeroRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    match services.store().upsert_hero(draft).await {
        Ok(hero) => Json(serde_json::json!({
            "success": true,
            "message": "Hero settings updated successfully!",
            "hero": hero,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to update hero settings.", e),
    }
}
