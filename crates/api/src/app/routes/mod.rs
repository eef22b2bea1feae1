use axum::{
    Router,
    routing::{get, put},
};

pub mod achievements;
pub mod certifications;
pub mod contact;
pub mod content;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod hero;
pub mod messages;
pub mod profile;
pub mod projects;
pub mod reorder;
pub mod research;
pub mod session;
pub mod skills;
pub mod system;

/// Router for the session-gated admin area (the gate itself is layered on in
/// `app::build_app`).
pub fn admin_router() -> Router {
    Router::new()
        .route("/dashboard", get(dashboard::dashboard))
        .nest("/projects", projects::router())
        .nest("/skills", skills::router())
        .nest("/experience", experience::router())
        .nest("/education", education::router())
        .nest("/achievements", achievements::router())
        .nest("/research", research::router())
        .nest("/certifications", certifications::router())
        .nest("/messages", messages::router())
        .route("/profile", get(profile::get_profile).put(profile::upsert_profile))
        .route("/hero", get(hero::get_hero).put(hero::upsert_hero))
        .route("/reorder", put(reorder::reorder))
}
