//! Process configuration resolved from the environment.

use vitrine_infra::SmtpConfig;

/// Session lifetime; also the cookie's `Max-Age`.
pub const SESSION_TTL_HOURS: i64 = 24;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    /// The single admin credential. Compared verbatim at login.
    pub admin_password: String,
    /// HMAC secret for session tokens.
    pub session_secret: String,
    /// `true` selects the Postgres store (requires `database_url`).
    pub use_persistent_store: bool,
    pub database_url: Option<String>,
    /// Present only when SMTP credentials are fully configured.
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    /// Resolve configuration from the environment. Missing secrets fall back
    /// to insecure dev defaults with a logged warning.
    pub fn from_env() -> Self {
        let admin_password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| {
            tracing::warn!("ADMIN_PASSWORD not set; using insecure dev default");
            "admin123".to_string()
        });

        let session_secret = std::env::var("SESSION_SECRET").unwrap_or_else(|_| {
            tracing::warn!("SESSION_SECRET not set; using insecure dev default");
            "dev-secret".to_string()
        });

        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        let use_persistent_store = std::env::var("USE_PERSISTENT_STORE")
            .unwrap_or_else(|_| "false".to_string())
            .parse::<bool>()
            .unwrap_or(false);

        Self {
            bind_addr,
            admin_password,
            session_secret,
            use_persistent_store,
            database_url: std::env::var("DATABASE_URL").ok(),
            smtp: smtp_from_env(),
        }
    }
}

/// SMTP settings are all-or-nothing: without both credentials, notification
/// mail is disabled rather than misconfigured.
fn smtp_from_env() -> Option<SmtpConfig> {
    let username = std::env::var("SMTP_USER").ok()?;
    let password = std::env::var("SMTP_PASS").ok()?;

    let host = std::env::var("SMTP_HOST").unwrap_or_else(|_| "smtp.gmail.com".to_string());
    let port = std::env::var("SMTP_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(587);
    let recipient = std::env::var("CONTACT_RECIPIENT").unwrap_or_else(|_| username.clone());

    Some(SmtpConfig { host, port, username, password, recipient })
}
