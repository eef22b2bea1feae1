use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use vitrine_core::FieldErrors;
use vitrine_infra::StoreError;

/// Error envelope used for non-form failures.
pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// 422 with the field-level error map, mirroring the form layout.
pub fn validation_failed(errors: FieldErrors) -> axum::response::Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({
            "success": false,
            "errors": errors,
        })),
    )
        .into_response()
}

/// Map a store failure: unknown ids are 404, anything else is logged and
/// surfaced as a generic user-facing message.
pub fn persistence_failure(user_message: &'static str, err: StoreError) -> axum::response::Response {
    match err {
        StoreError::NotFound => json_error(StatusCode::NOT_FOUND, "not_found", "record not found"),
        err => {
            tracing::error!("persistence failure: {err}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "success": false,
                    "message": user_message,
                })),
            )
                .into_response()
        }
    }
}
