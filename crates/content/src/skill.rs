//! Skills, grouped by category with a 0-100 proficiency.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: RecordId,
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    /// Icon name resolved by the frontend's icon set.
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or updating a skill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillDraft {
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub is_visible: bool,
}

impl SkillDraft {
    pub fn new(
        name: &str,
        category: &str,
        proficiency: i32,
        icon: &str,
        color: &str,
        is_visible: bool,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validate::require(&mut errors, "name", name, "Name is required");
        let category = validate::require(&mut errors, "category", category, "Category is required");
        let proficiency = validate::require_range(
            &mut errors,
            "proficiency",
            proficiency,
            0,
            100,
            "Proficiency must be between 0 and 100",
        );
        let icon = validate::optional_text(icon);
        let color = validate::optional_text(color);

        errors.into_result(Self {
            name,
            category,
            proficiency,
            icon,
            color,
            is_visible,
        })
    }
}

impl Skill {
    pub fn create(draft: SkillDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            name: draft.name,
            category: draft.category,
            proficiency: draft.proficiency,
            icon: draft.icon,
            color: draft.color,
            is_visible: draft.is_visible,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: SkillDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.category = draft.category;
        self.proficiency = draft.proficiency;
        self.icon = draft.icon;
        self.color = draft.color;
        self.is_visible = draft.is_visible;
        self.updated_at = now;
    }
}

impl_orderable!(Skill);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_rejects_out_of_range_proficiency() {
        for bad in [-1, 101, 500] {
            let err = SkillDraft::new("Rust", "Languages", bad, "", "", true).unwrap_err();
            assert!(err.field("proficiency").is_some(), "{bad} should be rejected");
        }
        assert!(SkillDraft::new("Rust", "Languages", 0, "", "", true).is_ok());
        assert!(SkillDraft::new("Rust", "Languages", 100, "", "", true).is_ok());
    }

    #[test]
    fn draft_requires_name_and_category() {
        let err = SkillDraft::new(" ", "", 50, "", "", true).unwrap_err();
        assert_eq!(err.field("name").unwrap(), ["Name is required"]);
        assert_eq!(err.field("category").unwrap(), ["Category is required"]);
    }

    #[test]
    fn empty_icon_and_color_become_none() {
        let draft = SkillDraft::new("Rust", "Languages", 90, "  ", "", true).unwrap();
        assert_eq!(draft.icon, None);
        assert_eq!(draft.color, None);
    }
}
