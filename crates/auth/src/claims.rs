use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims carried by the admin session token.
///
/// This is the minimal set Vitrine expects once a token has been decoded and
/// its signature verified by the codec layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Subject: the admin account email.
    pub sub: String,

    /// Display name shown in the admin UI.
    pub name: String,

    /// Issued-at (unix seconds).
    pub iat: i64,

    /// Expiry (unix seconds).
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for the single admin identity.
    pub fn admin(issued_at: DateTime<Utc>, expires_at: DateTime<Utc>) -> Self {
        Self {
            sub: "admin@example.com".to_string(),
            name: "Admin".to_string(),
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        }
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.iat, 0).single().unwrap_or_default()
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        Utc.timestamp_opt(self.exp, 0).single().unwrap_or_default()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("session has expired")]
    Expired,

    #[error("session not yet valid (issued_at is in the future)")]
    NotYetValid,

    #[error("invalid session time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Deterministically validate session claims against a caller-supplied clock.
///
/// Note: this validates the *claims* only. Signature verification and
/// decoding live in [`crate::codec`].
pub fn validate_claims(claims: &SessionClaims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now.timestamp() < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now.timestamp() >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn claims_at(issued: DateTime<Utc>) -> SessionClaims {
        SessionClaims::admin(issued, issued + Duration::hours(24))
    }

    #[test]
    fn claims_inside_the_window_validate() {
        let now = Utc::now();
        assert!(validate_claims(&claims_at(now), now + Duration::hours(1)).is_ok());
    }

    #[test]
    fn expired_claims_are_rejected() {
        let issued = Utc::now() - Duration::hours(48);
        let err = validate_claims(&claims_at(issued), Utc::now()).unwrap_err();
        assert_eq!(err, TokenValidationError::Expired);
    }

    #[test]
    fn future_issued_at_is_rejected() {
        let issued = Utc::now() + Duration::hours(1);
        let err = validate_claims(&claims_at(issued), Utc::now()).unwrap_err();
        assert_eq!(err, TokenValidationError::NotYetValid);
    }

    #[test]
    fn inverted_window_is_rejected() {
        let now = Utc::now();
        let claims = SessionClaims::admin(now, now - Duration::seconds(1));
        let err = validate_claims(&claims, now).unwrap_err();
        assert_eq!(err, TokenValidationError::InvalidTimeWindow);
    }
}
