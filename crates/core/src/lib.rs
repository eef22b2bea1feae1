//! `vitrine-core` — shared kernel: identifiers and the error model.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult, FieldErrors};
pub use id::RecordId;
