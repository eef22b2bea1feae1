//! Certifications.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{FieldErrors, RecordId};

use crate::collection::impl_orderable;
use crate::validate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certification {
    pub id: RecordId,
    pub name: String,
    pub issuer: String,
    /// Display date, e.g. "2024-11". Sorted lexicographically as a tiebreak.
    pub date: String,
    pub credential_url: Option<String>,
    pub order: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CertificationDraft {
    pub name: String,
    pub issuer: String,
    pub date: String,
    pub credential_url: Option<String>,
}

impl CertificationDraft {
    pub fn new(name: &str, issuer: &str, date: &str, credential_url: &str) -> Result<Self, FieldErrors> {
        let mut errors = FieldErrors::new();

        let name = validate::require(&mut errors, "name", name, "Name is required");
        let issuer = validate::require(&mut errors, "issuer", issuer, "Issuer is required");
        let date = validate::require(&mut errors, "date", date, "Date is required");
        let credential_url = validate::optional_url(&mut errors, "credentialUrl", credential_url);

        errors.into_result(Self { name, issuer, date, credential_url })
    }
}

impl Certification {
    pub fn create(draft: CertificationDraft, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            name: draft.name,
            issuer: draft.issuer,
            date: draft.date,
            credential_url: draft.credential_url,
            order: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn apply(&mut self, draft: CertificationDraft, now: DateTime<Utc>) {
        self.name = draft.name;
        self.issuer = draft.issuer;
        self.date = draft.date;
        self.credential_url = draft.credential_url;
        self.updated_at = now;
    }
}

impl_orderable!(Certification);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_url_must_be_http_when_present() {
        let err = CertificationDraft::new("AWS SAA", "Amazon", "2024", "nonsense").unwrap_err();
        assert_eq!(err.field("credentialUrl").unwrap(), ["Invalid URL"]);

        let ok = CertificationDraft::new("AWS SAA", "Amazon", "2024", "https://credly.com/x");
        assert_eq!(ok.unwrap().credential_url.as_deref(), Some("https://credly.com/x"));
    }
}
