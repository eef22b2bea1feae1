//! Public contact form.

use std::sync::Arc;

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use vitrine_content::Message;

use crate::app::services::AppServices;
use crate::app::{dto, errors};

/// Validate, persist, then notify.
///
/// A persistence failure is logged and does not abort the notification (the
/// validated input is still deliverable); a mail transport failure surfaces
/// as the generic error. Missing SMTP credentials skip notification with a
/// warning.
pub async fn submit(
    Extension(services): Extension<Arc<AppServices>>,
    Json(body): Json<dto::ContactRequest>,
) -> axum::response::Response {
    let draft = match body.into_draft() {
        Ok(draft) => draft,
        Err(field_errors) => return errors::validation_failed(field_errors),
    };

    let message = match services.store().create_message(draft.clone()).await {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("failed to persist contact message: {e}");
            Message::create(draft, Utc::now())
        }
    };

    match services.mailer() {
        Some(mailer) => {
            if let Err(e) = mailer.send_contact_notification(&message).await {
                tracing::error!("failed to send contact notification: {e}");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(serde_json::json!({
                        "success": false,
                        "message": "Something went wrong. Please try again.",
                    })),
                )
                    .into_response();
            }
        }
        None => {
            tracing::warn!("SMTP credentials not configured; skipping contact notification");
        }
    }

    Json(serde_json::json!({
        "success": true,
        "message": "Message sent successfully!",
    }))
    .into_response()
}
