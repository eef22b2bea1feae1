//! The owner profile (singleton).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::validate;

/// Site-owner profile. At most one row is meaningful; writes are
/// upsert-if-absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: RecordId,
    pub bio: String,
    pub career_objective: String,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDraft {
    pub bio: String,
    pub career_objective: String,
    pub resume_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub twitter_url: Option<String>,
    pub email: Option<String>,
}

impl ProfileDraft {
    pub fn new(
        bio: &str,
        career_objective: &str,
        resume_url: &str,
        linkedin_url: &str,
        github_url: &str,
        twitter_url: &str,
        email: &str,
    ) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let bio = validate::require_min(&mut errors, "bio", bio, 10, "Bio must be at least 10 characters");
        let career_objective = validate::require_min(
            &mut errors,
            "careerObjective",
            career_objective,
            10,
            "Career Objective must be at least 10 characters",
        );
        let resume_url = validate::optional_url(&mut errors, "resumeUrl", resume_url);
        let linkedin_url = validate::optional_url(&mut errors, "linkedinUrl", linkedin_url);
        let github_url = validate::optional_url(&mut errors, "githubUrl", github_url);
        let twitter_url = validate::optional_url(&mut errors, "twitterUrl", twitter_url);
        let email = validate::optional_email(&mut errors, "email", email);

        errors.into_result(Self {
            bio,
            career_objective,
            resume_url,
            linkedin_url,
            github_url,
            twitter_url,
            email,
        })
    }
}

impl Profile {
    pub fn create(draft: ProfileDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            bio: draft.bio,
            career_objective: draft.career_objective,
            resume_url: draft.resume_url,
            linkedin_url: draft.linkedin_url,
            github_url: draft.github_url,
            twitter_url: draft.twitter_url,
            email: draft.email,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: ProfileDraft, now: DateTime<Utc>) {
        self.bio = draft.bio;
        self.career_objective = draft.career_objective;
        self.resume_url = draft.resume_url;
        self.linkedin_url = draft.linkedin_url;
        self.github_url = draft.github_url;
        self.twitter_url = draft.twitter_url;
        self.email = draft.email;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> ProfileDraft {
        ProfileDraft::new(
            "Developer focused on fast, clean interfaces.",
            "Seeking opportunities to apply theory in practice.",
            "",
            "https://linkedin.com/in/someone",
            "https://github.com/someone",
            "",
            "someone@example.com",
        )
        .unwrap()
    }

    #[test]
    fn short_bio_and_objective_are_rejected() {
        let err = ProfileDraft::new("short", "tiny", "", "", "", "", "").unwrap_err();
        assert!(err.field("bio").is_some());
        assert!(err.field("careerObjective").is_some());
    }

    #[test]
    fn optional_email_may_be_empty_but_not_malformed() {
        assert!(valid_draft().twitter_url.is_none());

        let err = ProfileDraft::new(
            "Developer focused on fast, clean interfaces.",
            "Seeking opportunities to apply theory in practice.",
            "",
            "",
            "",
            "",
            "not-an-email",
        )
        .unwrap_err();
        assert_eq!(err.field("email").unwrap(), ["Invalid email address"]);
    }

    #[test]
    fn apply_preserves_identity() {
        let now = Utc::now();
        let mut profile = Profile::create(valid_draft(), now);
        let id = profile.id;

        profile.apply(valid_draft(), now + chrono::Duration::hours(1));
        assert_eq!(profile.id, id);
        assert_eq!(profile.created_at, now);
    }
}
