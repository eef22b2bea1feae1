use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use chrono::Utc;

use vitrine_auth::SessionCodec;

use crate::context::AdminContext;

/// Name of the session cookie set at login.
pub const SESSION_COOKIE: &str = "session";

#[derive(Clone)]
pub struct SessionGate {
    pub codec: Arc<dyn SessionCodec>,
}

/// Gate for the admin area: decode the session cookie and redirect
/// unauthenticated requests to the login page. Expired or tampered tokens
/// count as unauthenticated.
pub async fn session_gate(
    State(gate): State<SessionGate>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let claims = session_token(req.headers())
        .and_then(|token| gate.codec.decode(token, Utc::now()).ok());

    match claims {
        Some(claims) => {
            req.extensions_mut().insert(AdminContext::new(claims));
            next.run(req).await
        }
        None => Redirect::to("/admin/login").into_response(),
    }
}

/// Extract the session token from the `Cookie` header, if present.
pub fn session_token(headers: &HeaderMap) -> Option<&str> {
    let cookies = headers.get(header::COOKIE)?.to_str().ok()?;

    cookies
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
}

/// `Set-Cookie` value establishing a session.
pub fn session_cookie(token: &str, max_age_secs: i64) -> String {
    format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax; Max-Age={max_age_secs}")
}

/// `Set-Cookie` value clearing the session.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn session_token_found_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; session=abc.def.ghi; lang=en");
        assert_eq!(session_token(&headers), Some("abc.def.ghi"));
    }

    #[test]
    fn no_cookie_header_means_no_token() {
        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[test]
    fn similarly_named_cookies_do_not_match() {
        let headers = headers_with_cookie("session_hint=x; other=y");
        assert_eq!(session_token(&headers), None);
    }
}
