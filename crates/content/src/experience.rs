//! Work and community experience entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: RecordId,
    pub role: String,
    pub company: String,
    /// Display string, e.g. "2024 - Present".
    pub period: String,
    pub description: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceDraft {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

impl ExperienceDraft {
    pub fn new(role: &str, company: &str, period: &str, description: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let role = validate::require(&mut errors, "role", role, "Role is required");
        let company = validate::require(&mut errors, "company", company, "Company is required");
        let period = validate::require(&mut errors, "period", period, "Period is required");
        let description = validate::require_min(
            &mut errors,
            "description",
            description,
            10,
            "Description must be at least 10 characters",
        );

        errors.into_result(Self { role, company, period, description })
    }
}

impl Experience {
    pub fn create(draft: ExperienceDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            role: draft.role,
            company: draft.company,
            period: draft.period,
            description: draft.description,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: ExperienceDraft, now: DateTime<Utc>) {
        self.role = draft.role;
        self.company = draft.company;
        self.period = draft.period;
        self.description = draft.description;
        self.updated_at = now;
    }
}

impl_orderable!(Experience);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_collects_every_missing_field() {
        let err = ExperienceDraft::new("", "", "", "short").unwrap_err();
        for field in ["role", "company", "period", "description"] {
            assert!(err.field(field).is_some(), "{field} should have an error");
        }
    }

    #[test]
    fn valid_draft_passes() {
        let draft = ExperienceDraft::new(
            "Tech Associate Lead",
            "Computer Society",
            "2024 - Present",
            "Leading technical initiatives and event logistics.",
        );
        assert!(draft.is_ok());
    }
}
