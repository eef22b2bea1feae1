//! Research papers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchPaper {
    pub id: RecordId,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub link: Option<String>,
    /// Display date, e.g. "2025-03". Sorted lexicographically as a tiebreak.
    pub publication_date: String,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResearchDraft {
    pub title: String,
    pub abstract_text: String,
    pub link: Option<String>,
    pub publication_date: String,
}

impl ResearchDraft {
    pub fn new(
        title: &str,
        abstract_text: &str,
        link: &str,
        publication_date: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = validate::require(&mut errors, "title", title, "Title is required");
        let abstract_text = validate::require_min(
            &mut errors,
            "abstract",
            abstract_text,
            10,
            "Abstract must be at least 10 characters",
        );
        let link = validate::optional_url(&mut errors, "link", link);
        let publication_date = validate::require(
            &mut errors,
            "publicationDate",
            publication_date,
            "Publication Date is required",
        );

        errors.into_result(Self { title, abstract_text, link, publication_date })
    }
}

impl ResearchPaper {
    pub fn create(draft: ResearchDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            title: draft.title,
            abstract_text: draft.abstract_text,
            link: draft.link,
            publication_date: draft.publication_date,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: ResearchDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.abstract_text = draft.abstract_text;
        self.link = draft.link;
        self.publication_date = draft.publication_date;
        self.updated_at = now;
    }
}

impl_orderable!(ResearchPaper);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abstract_serializes_under_its_wire_name() {
        let paper = ResearchPaper::create(
            ResearchDraft::new("On Sorting", "A study of stable secondary orderings.", "", "2025")
                .unwrap(),
            Utc::now(),
        );
        let json = serde_json::to_value(&paper).unwrap();
        assert!(json.get("abstract").is_some());
        assert!(json.get("abstractText").is_none());
    }

    #[test]
    fn short_abstract_is_rejected() {
        let err = ResearchDraft::new("On Sorting", "tiny", "", "2025").unwrap_err();
        assert_eq!(err.field("abstract").unwrap(), ["Abstract must be at least 10 characters"]);
    }
}
