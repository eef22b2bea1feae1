//! Reorderable collections and the reorder allow-list.

use core::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use vitrine_core::{DomainError, RecordId};

/// A collection whose display order can be rearranged from the admin UI.
///
/// This doubles as the reorder endpoint's allow-list: a request naming
/// anything else never reaches storage. Messages and the two singletons are
/// deliberately absent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Collection {
    Project,
    Skill,
    Experience,
    Education,
    Achievement,
    ResearchPaper,
    Certification,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Project,
        Collection::Skill,
        Collection::Experience,
        Collection::Education,
        Collection::Achievement,
        Collection::ResearchPaper,
        Collection::Certification,
    ];

    /// Wire name, as submitted by the admin UI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Collection::Project => "project",
            Collection::Skill => "skill",
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Achievement => "achievement",
            Collection::ResearchPaper => "researchPaper",
            Collection::Certification => "certification",
        }
    }

    /// Database table backing the collection.
    ///
    /// Reorder SQL interpolates this constant, never request input.
    pub fn table(&self) -> &'static str {
        match self {
            Collection::Project => "projects",
            Collection::Skill => "skills",
            Collection::Experience => "experience",
            Collection::Education => "education",
            Collection::Achievement => "achievements",
            Collection::ResearchPaper => "research_papers",
            Collection::Certification => "certifications",
        }
    }
}

impl core::fmt::Display for Collection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown collection: {s}")))
    }
}

/// One position assignment within a reorder batch.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReorderItem {
    pub id: RecordId,
    pub order: i32,
}

/// A record that carries a sort position.
pub trait Orderable {
    fn id(&self) -> RecordId;
    fn order(&self) -> i32;
    /// Move the record to a new position, touching its update timestamp.
    fn reposition(&mut self, order: i32, now: DateTime<Utc>);
}

macro_rules! impl_orderable {
    ($t:ty) => {
        impl $crate::collection::Orderable for $t {
            fn id(&self) -> vitrine_core::RecordId {
                self.id
            }

            fn order(&self) -> i32 {
                self.order
            }

            fn reposition(&mut self, order: i32, now: chrono::DateTime<chrono::Utc>) {
                self.order = order;
                self.updated_at = now;
            }
        }
    };
}
pub(crate) use impl_orderable;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_allow_listed_name_parses_back_to_its_collection() {
        for collection in Collection::ALL {
            let parsed: Collection = collection.as_str().parse().unwrap();
            assert_eq!(parsed, collection);
        }
    }

    #[test]
    fn research_paper_uses_the_camel_case_wire_name() {
        assert_eq!(Collection::ResearchPaper.as_str(), "researchPaper");
        assert_eq!("researchPaper".parse::<Collection>().unwrap(), Collection::ResearchPaper);
    }

    #[test]
    fn names_outside_the_allow_list_are_rejected() {
        for name in ["message", "profile", "heroSettings", "users; DROP TABLE users", ""] {
            assert!(name.parse::<Collection>().is_err(), "{name:?} should not parse");
        }
    }
}
