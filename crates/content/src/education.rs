//! Education history entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: RecordId,
    pub degree: String,
    pub institution: String,
    pub period: String,
    /// Grade or result, e.g. "CGPA 7" or "85%".
    pub score: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EducationDraft {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub score: String,
}

impl EducationDraft {
    pub fn new(degree: &str, institution: &str, period: &str, score: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let degree = validate::require(&mut errors, "degree", degree, "Degree is required");
        let institution =
            validate::require(&mut errors, "institution", institution, "Institution is required");
        let period = validate::require(&mut errors, "period", period, "Period is required");
        let score = validate::require(&mut errors, "score", score, "Score is required");

        errors.into_result(Self { degree, institution, period, score })
    }
}

impl Education {
    pub fn create(draft: EducationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            degree: draft.degree,
            institution: draft.institution,
            period: draft.period,
            score: draft.score,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: EducationDraft, now: DateTime<Utc>) {
        self.degree = draft.degree;
        self.institution = draft.institution;
        self.period = draft.period;
        self.score = draft.score;
        self.updated_at = now;
    }
}

impl_orderable!(Education);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_four_fields_are_required() {
        let err = EducationDraft::new("", " ", "", "").unwrap_err();
        for field in ["degree", "institution", "period", "score"] {
            assert!(err.field(field).is_some());
        }
    }
}
