//! `vitrine-infra` — storage and outbound mail.
//!
//! The [`store::ContentStore`] trait is the seam between the HTTP layer and
//! persistence; it ships with an in-memory implementation (dev/test) and a
//! Postgres implementation.

pub mod mail;
pub mod store;

pub use mail::{MailError, SmtpConfig, SmtpMailer};
pub use store::{ContentStore, MemoryStore, PostgresStore, StoreError};
