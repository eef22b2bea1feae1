//! Portfolio projects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

/// A project card shown in the projects section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: RecordId,
    pub title: String,
    pub description: String,
    /// Free-form: absolute URLs and site-relative paths are both allowed.
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub featured: bool,
    pub is_visible: bool,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Validated input for creating or updating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub tags: Vec<String>,
    pub link: Option<String>,
    pub github_link: Option<String>,
    pub featured: bool,
    pub is_visible: bool,
}

impl ProjectDraft {
    /// Validate raw form fields. Tags arrive as a comma-separated string.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        title: &str,
        description: &str,
        image_url: &str,
        tags: &str,
        link: &str,
        github_link: &str,
        featured: bool,
        is_visible: bool,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let title = validate::require(&mut errors, "title", title, "Title is required");
        let description = validate::require_min(
            &mut errors,
            "description",
            description,
            10,
            "Description must be at least 10 characters",
        );
        let image_url = validate::optional_text(image_url);
        let tags = validate::split_csv(tags);
        let link = validate::optional_url(&mut errors, "link", link);
        let github_link = validate::optional_url(&mut errors, "githubLink", github_link);

        errors.into_result(Self {
            title,
            description,
            image_url,
            tags,
            link,
            github_link,
            featured,
            is_visible,
        })
    }
}

impl Project {
    /// Materialize a new record from a validated draft.
    pub fn create(draft: ProjectDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            title: draft.title,
            description: draft.description,
            image_url: draft.image_url,
            tags: draft.tags,
            link: draft.link,
            github_link: draft.github_link,
            featured: draft.featured,
            is_visible: draft.is_visible,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite editable fields from a validated draft.
    pub fn apply(&mut self, draft: ProjectDraft, now: DateTime<Utc>) {
        self.title = draft.title;
        self.description = draft.description;
        self.image_url = draft.image_url;
        self.tags = draft.tags;
        self.link = draft.link;
        self.github_link = draft.github_link;
        self.featured = draft.featured;
        self.is_visible = draft.is_visible;
        self.updated_at = now;
    }
}

impl_orderable!(Project);

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProjectDraft {
        ProjectDraft::new(
            "Vision AI",
            "Retinal scan analysis with convolutional models.",
            "/images/vision.png",
            "TensorFlow, Computer Vision",
            "https://example.com/vision",
            "",
            true,
            true,
        )
        .unwrap()
    }

    #[test]
    fn draft_normalizes_tags_and_empty_optionals() {
        let draft = valid_draft();
        assert_eq!(draft.tags, ["TensorFlow", "Computer Vision"]);
        assert_eq!(draft.github_link, None);
        assert_eq!(draft.image_url.as_deref(), Some("/images/vision.png"));
    }

    #[test]
    fn draft_rejects_missing_title_and_short_description() {
        let err = ProjectDraft::new("", "too short", "", "", "", "", false, true).unwrap_err();
        assert_eq!(err.field("title").unwrap(), ["Title is required"]);
        assert_eq!(
            err.field("description").unwrap(),
            ["Description must be at least 10 characters"]
        );
    }

    #[test]
    fn draft_rejects_malformed_links() {
        let err = ProjectDraft::new(
            "Title",
            "A perfectly fine description.",
            "",
            "",
            "not-a-url",
            "also bad",
            false,
            true,
        )
        .unwrap_err();
        assert!(err.field("link").is_some());
        assert!(err.field("githubLink").is_some());
    }

    #[test]
    fn create_then_apply_keeps_id_and_created_at() {
        let now = Utc::now();
        let mut project = Project::create(valid_draft(), now);
        let id = project.id;

        let later = now + chrono::Duration::minutes(5);
        let update = ProjectDraft::new(
            "Vision AI v2",
            "Retinal scan analysis, now with better recall.",
            "",
            "PyTorch",
            "",
            "",
            false,
            false,
        )
        .unwrap();
        project.apply(update, later);

        assert_eq!(project.id, id);
        assert_eq!(project.created_at, now);
        assert_eq!(project.updated_at, later);
        assert_eq!(project.title, "Vision AI v2");
        assert!(!project.is_visible);
    }
}
