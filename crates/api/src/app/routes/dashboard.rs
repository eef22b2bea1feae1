//! The admin dashboard payload.

use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::errors;
use crate::app::services::AppServices;
use crate::context::AdminContext;

pub async fn dashboard(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(admin): Extension<AdminContext>,
) -> axum::response::Response {
    match services.dashboard_content().await {
        Ok(content) => Json(serde_json::json!({
            "admin": {
                "email": admin.email(),
                "name": admin.name(),
            },
            "content": content,
        }))
        .into_response(),
        Err(e) => errors::persistence_failure("Failed to load dashboard.", e),
    }
}
