//! HTTP application wiring (axum router + service wiring).
//!
//! Folder layout:
//! - `services.rs`: infrastructure wiring (content store, mailer)
//! - `routes/`: HTTP routes + handlers (one file per content area)
//! - `dto.rs`: request/response DTOs and validation mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{
    Extension, Router,
    routing::{get, post},
};

use vitrine_auth::{Hs256SessionCodec, SessionCodec};

use crate::config::AppConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app(config: AppConfig) -> Router {
    let codec: Arc<dyn SessionCodec> =
        Arc::new(Hs256SessionCodec::new(config.session_secret.as_bytes()));
    let gate = middleware::SessionGate { codec: codec.clone() };

    let services = Arc::new(services::build_services(&config).await);
    let config = Arc::new(config);

    // Everything under /admin except login and logout sits behind the gate.
    let admin = routes::admin_router().layer(axum::middleware::from_fn_with_state(
        gate,
        middleware::session_gate,
    ));

    Router::new()
        .route("/health", get(routes::system::health))
        .route("/content", get(routes::content::site_content))
        .route("/contact", post(routes::contact::submit))
        .nest(
            "/admin",
            Router::new()
                .route("/login", post(routes::session::login))
                .route("/logout", post(routes::session::logout))
                .merge(admin),
        )
        .layer(Extension(services))
        .layer(Extension(codec))
        .layer(Extension(config))
}
