//! The public site payload.

use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::errors;
use crate::app::services::AppServices;

/// Everything the public pages render, in one response: hero, profile, and
/// the visible subset of each collection in display order.
pub async fn site_content(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    match services.site_content().await {
        Ok(content) => Json(content).into_response(),
        Err(e) => errors::persistence_failure("Failed to load content.", e),
    }
}
