//! Session token codec (HS256).

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use crate::claims::{SessionClaims, TokenValidationError, validate_claims};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("failed to sign session token")]
    Encode,

    #[error("invalid session token")]
    Invalid,

    #[error(transparent)]
    Claims(#[from] TokenValidationError),
}

/// Encode/decode boundary for session tokens.
///
/// Decoding takes an explicit `now` so expiry handling stays deterministic
/// under test.
pub trait SessionCodec: Send + Sync {
    fn encode(&self, claims: &SessionClaims) -> Result<String, SessionError>;
    fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError>;
}

/// HMAC-SHA256 signed tokens derived from a shared secret.
pub struct Hs256SessionCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl Hs256SessionCodec {
    pub fn new(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }
}

impl SessionCodec for Hs256SessionCodec {
    fn encode(&self, claims: &SessionClaims) -> Result<String, SessionError> {
        jsonwebtoken::encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|_| SessionError::Encode)
    }

    fn decode(&self, token: &str, now: DateTime<Utc>) -> Result<SessionClaims, SessionError> {
        // Expiry is checked below against the caller's clock, not the system
        // clock jsonwebtoken would use.
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.required_spec_claims = HashSet::new();

        let data = jsonwebtoken::decode::<SessionClaims>(token, &self.decoding, &validation)
            .map_err(|_| SessionError::Invalid)?;

        validate_claims(&data.claims, now)?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn codec() -> Hs256SessionCodec {
        Hs256SessionCodec::new(b"test-secret")
    }

    fn fresh_claims() -> SessionClaims {
        let now = Utc::now();
        SessionClaims::admin(now, now + Duration::hours(24))
    }

    #[test]
    fn encode_decode_round_trip() {
        let claims = fresh_claims();
        let token = codec().encode(&claims).unwrap();
        let decoded = codec().decode(&token, Utc::now()).unwrap();
        assert_eq!(decoded, claims);
    }

    #[test]
    fn tokens_signed_with_another_secret_are_rejected() {
        let token = Hs256SessionCodec::new(b"other-secret").encode(&fresh_claims()).unwrap();
        let err = codec().decode(&token, Utc::now()).unwrap_err();
        assert_eq!(err, SessionError::Invalid);
    }

    #[test]
    fn tampered_tokens_are_rejected() {
        let mut token = codec().encode(&fresh_claims()).unwrap();
        token.pop();
        token.push('x');
        assert!(codec().decode(&token, Utc::now()).is_err());
    }

    #[test]
    fn expired_tokens_are_rejected_at_decode_time() {
        let claims = fresh_claims();
        let token = codec().encode(&claims).unwrap();
        let later = claims.expires_at() + Duration::seconds(1);
        let err = codec().decode(&token, later).unwrap_err();
        assert_eq!(err, SessionError::Claims(TokenValidationError::Expired));
    }

    #[test]
    fn garbage_is_rejected() {
        assert_eq!(codec().decode("definitely.not.a-token", Utc::now()).unwrap_err(), SessionError::Invalid);
    }
}
