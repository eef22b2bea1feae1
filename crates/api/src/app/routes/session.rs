//! Login and logout: the only ungated admin routes.

use std::sync::Arc;

use axum::{
    Json,
    extract::Extension,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Redirect},
};
use chrono::{Duration, Utc};

use vitrine_auth::{SessionClaims, SessionCodec};

use crate::app::{dto, errors};
use crate::config::{AppConfig, SESSION_TTL_HOURS};
use crate::middleware;

/// Compare the submitted password against the configured secret; on match,
/// set the session cookie and send the browser to the dashboard. The failure
/// message is deliberately generic.
pub async fn login(
    Extension(config): Extension<Arc<AppConfig>>,
    Extension(codec): Extension<Arc<dyn SessionCodec>>,
    Json(body): Json<dto::LoginRequest>,
) -> axum::response::Response {
    if body.password != config.admin_password {
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({
                "success": false,
                "message": "Invalid password",
            })),
        )
            .into_response();
    }

    let now = Utc::now();
    let claims = SessionClaims::admin(now, now + Duration::hours(SESSION_TTL_HOURS));

    let token = match codec.encode(&claims) {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("failed to sign session token: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_error",
                "failed to create session",
            );
        }
    };

    let cookie = middleware::session_cookie(&token, SESSION_TTL_HOURS * 3600);
    let cookie = match HeaderValue::from_str(&cookie) {
        Ok(value) => value,
        Err(e) => {
            tracing::error!("failed to build session cookie: {e}");
            return errors::json_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "session_error",
                "failed to create session",
            );
        }
    };

    let mut response = Redirect::to("/admin/dashboard").into_response();
    response.headers_mut().insert(header::SET_COOKIE, cookie);
    response
}

/// Clear the cookie and send the browser back to the login page.
pub async fn logout() -> axum::response::Response {
    let mut response = Redirect::to("/admin/login").into_response();
    if let Ok(cookie) = HeaderValue::from_str(&middleware::clear_session_cookie()) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}
