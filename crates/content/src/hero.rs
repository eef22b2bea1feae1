//! Hero-section settings (singleton).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::validate;

/// Landing-section copy. At most one row is meaningful; writes are
/// upsert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSettings {
    pub id: RecordId,
    pub heading: String,
    pub subheading: Option<String>,
    /// Rotating keywords shown under the heading.
    pub keywords: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroDraft {
    pub heading: String,
    pub subheading: Option<String>,
    pub keywords: Vec<String>,
}

impl HeroDraft {
    /// Keywords arrive as a comma-separated string.
    pub fn new(heading: &str, subheading: &str, keywords: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let heading = validate::require(&mut errors, "heading", heading, "Heading is required");
        let subheading = validate::optional_text(subheading);
        let keywords = validate::split_csv(keywords);

        errors.into_result(Self { heading, subheading, keywords })
    }
}

impl HeroSettings {
    pub fn create(draft: HeroDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            heading: draft.heading,
            subheading: draft.subheading,
            keywords: draft.keywords,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: HeroDraft, now: DateTime<Utc>) {
        self.heading = draft.heading;
        self.subheading = draft.subheading;
        self.keywords = draft.keywords;
        self.updated_at = now;
    }
}
