//! Achievements and awards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Display date, e.g. "2025". Sorted lexicographically as a tiebreak.
    pub date: String,
    pub award: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AchievementDraft {
    pub title: String,
    pub description: String,
    pub date: String,
    pub award: Option<String>,
}

impl AchievementDraft {
    pub fn new(title: &str, description: &str, date: &str, award: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = validate::require(&mut errors, "title", title, "Title is required");
        let description = validate::require_min(
            &mut errors,
            "description",
            description,
            10,
            "Description must be at least 10 characters",
        );
        let date = validate::require(&mut errors, "date", date, "Date is required");
        let award = validate::optional_text(award);

        errors.into_result(Self { title, description, date, award })
    }
}

impl Achievement {
    pub fn create(draft: AchievementDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            title: draft.title,
            description: draft.description,
            date: draft.date,
            award: draft.award,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: AchievementDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        self.date = draft.date;
        self.award = draft.award;
        self.updated_at = now;
    }
}

impl_orderable!(Achievement);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn award_is_optional_but_title_is_not() {
        let ok = AchievementDraft::new("Hackathon Winner", "Built a winning prototype.", "2025", "");
        assert_eq!(ok.unwrap().award, None);

        let err = AchievementDraft::new("", "Built a winning prototype.", "2025", "First Prize")
            .unwrap_err();
        assert_eq!(err.field("title").unwrap(), ["Title is required"]);
    }
}
