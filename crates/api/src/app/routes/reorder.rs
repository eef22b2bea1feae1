//! Batch reorder for the drag-to-reorder admin lists.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};

use vitrine_content::{Collection, ReorderItem};
use vitrine_core::RecordId;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Apply `{ collection, items: [{id, order}] }` as one all-or-nothing batch.
///
/// The collection name is checked against the allow-list before storage is
/// touched; authorization is the upstream admin session gate.
pub async fn reorder(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ReorderRequest>,
) -> axum::response::Response {
    let collection: Collection = match body.collection.parse() {
        Ok(collection) => collection,
        Err(_) => {
            return errors::json_error(StatusCode::BAD_REQUEST, "invalid_collection", "Invalid collection");
        }
    };

    let mut items = Vec::with_capacity(body.items.len());
    for item in &body.items {
        let id: RecordId = match item.id.parse() {
            Ok(id) => id,
            Err(_) => {
                return errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid record id");
            }
        };
        items.push(ReorderItem { id, order: item.order });
    }

    match services.store().reorder(collection, &items).await {
        Ok(()) => Json(serde_json::json!({ "success": true })).into_response(),
        Err(e) => errors::persistence_failure("Failed to reorder items.", e),
    }
}
