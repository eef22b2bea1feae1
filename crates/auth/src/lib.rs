//! `vitrine-auth` — admin session tokens.
//!
//! This crate is intentionally decoupled from HTTP: it knows nothing about
//! cookies, only about the signed claims that travel inside one.

pub mod claims;
pub mod codec;

pub use claims::{SessionClaims, TokenValidationError, validate_claims};
pub use codec::{Hs256SessionCodec, SessionCodec, SessionError};
