//! Contact-form messages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::validate;

/// A message submitted through the public contact form.
///
/// Messages are not reorderable; the inbox lists them newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    #[serde(rename = "message")]
    pub body: String,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

/// Validated contact-form input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, body: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validate::require_min(&mut errors, "name", name, 2, "Name is required");
        let email = validate::require_email(&mut errors, "email", email, "Invalid email address");
        let body = validate::require_min(
            &mut errors,
            "message",
            body,
            10,
            "Message must be at least 10 characters",
        );

        errors.into_result(Self { name, email, body })
    }
}

impl Message {
    pub fn create(draft: ContactDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            name: draft.name,
            email: draft.email,
            body: draft.body,
            read: false,
            created_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_character_names_are_rejected() {
        let err = ContactDraft::new("A", "a@example.com", "Hello, I would like to chat.").unwrap_err();
        assert_eq!(err.field("name").unwrap(), ["Name is required"]);
    }

    #[test]
    fn short_messages_are_rejected() {
        let err = ContactDraft::new("Ada", "ada@example.com", "Hi").unwrap_err();
        assert_eq!(err.field("message").unwrap(), ["Message must be at least 10 characters"]);
    }

    #[test]
    fn invalid_email_is_rejected() {
        let err = ContactDraft::new("Ada", "not-an-email", "Hello, I would like to chat.").unwrap_err();
        assert_eq!(err.field("email").unwrap(), ["Invalid email address"]);
    }

    #[test]
    fn new_messages_start_unread() {
        let draft = ContactDraft::new("Ada", "ada@example.com", "Hello, I would like to chat.").unwrap();
        let message = Message::create(draft, Utc::now());
        assert!(!message.read);
    }

    #[test]
    fn body_serializes_under_its_wire_name() {
        let draft = ContactDraft::new("Ada", "ada@example.com", "Hello, I would like to chat.").unwrap();
        let json = serde_json::to_value(Message::create(draft, Utc::now())).unwrap();
        assert!(json.get("message").is_some());
        assert!(json.get("body").is_none());
    }
}
