//! Content persistence.
//!
//! [`ContentStore`] is the only seam the HTTP layer talks to. Two
//! implementations exist: [`MemoryStore`] (dev/test) and [`PostgresStore`].

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;

use async_trait::async_trait;
use thiserror::Error;

use vitrine_content::{
    Achievement, AchievementDraft, Certification, CertificationDraft, Collection, ContactDraft,
    Education, EducationDraft, Experience, ExperienceDraft, HeroDraft, HeroSettings, Message,
    Profile, ProfileDraft, Project, ProjectDraft, ReorderItem, ResearchDraft, ResearchPaper,
    Skill, SkillDraft,
};
use vitrine_core::RecordId;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced record does not exist.
    #[error("record not found")]
    NotFound,

    /// Backend failure (connection, SQL, lock).
    #[error("storage failure in {operation}: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },
}

impl StoreError {
    pub(crate) fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound)
    }
}

/// Persistence seam for all portfolio content.
///
/// Lists return rows pre-sorted: orderable collections ascending by their
/// `order` field with the collection's secondary key as a tiebreak, messages
/// newest first. Writes against unknown ids return [`StoreError::NotFound`].
#[async_trait]
pub trait ContentStore: Send + Sync {
    // Projects
    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, StoreError>;
    async fn update_project(&self, id: RecordId, draft: ProjectDraft) -> Result<Project, StoreError>;
    async fn delete_project(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_projects(&self) -> Result<Vec<Project>, StoreError>;

    // Skills
    async fn create_skill(&self, draft: SkillDraft) -> Result<Skill, StoreError>;
    async fn update_skill(&self, id: RecordId, draft: SkillDraft) -> Result<Skill, StoreError>;
    async fn delete_skill(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError>;

    // Experience
    async fn create_experience(&self, draft: ExperienceDraft) -> Result<Experience, StoreError>;
    async fn update_experience(&self, id: RecordId, draft: ExperienceDraft) -> Result<Experience, StoreError>;
    async fn delete_experience(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_experience(&self) -> Result<Vec<Experience>, StoreError>;

    // Education
    async fn create_education(&self, draft: EducationDraft) -> Result<Education, StoreError>;
    async fn update_education(&self, id: RecordId, draft: EducationDraft) -> Result<Education, StoreError>;
    async fn delete_education(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_education(&self) -> Result<Vec<Education>, StoreError>;

    // Achievements
    async fn create_achievement(&self, draft: AchievementDraft) -> Result<Achievement, StoreError>;
    async fn update_achievement(&self, id: RecordId, draft: AchievementDraft) -> Result<Achievement, StoreError>;
    async fn delete_achievement(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_achievements(&self) -> Result<Vec<Achievement>, StoreError>;

    // Research papers
    async fn create_research(&self, draft: ResearchDraft) -> Result<ResearchPaper, StoreError>;
    async fn update_research(&self, id: RecordId, draft: ResearchDraft) -> Result<ResearchPaper, StoreError>;
    async fn delete_research(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_research(&self) -> Result<Vec<ResearchPaper>, StoreError>;

    // Certifications
    async fn create_certification(&self, draft: CertificationDraft) -> Result<Certification, StoreError>;
    async fn update_certification(&self, id: RecordId, draft: CertificationDraft) -> Result<Certification, StoreError>;
    async fn delete_certification(&self, id: RecordId) -> Result<(), StoreError>;
    async fn list_certifications(&self) -> Result<Vec<Certification>, StoreError>;

    // Messages
    async fn create_message(&self, draft: ContactDraft) -> Result<Message, StoreError>;
    async fn list_messages(&self) -> Result<Vec<Message>, StoreError>;
    async fn mark_message_read(&self, id: RecordId) -> Result<(), StoreError>;
    async fn delete_message(&self, id: RecordId) -> Result<(), StoreError>;

    // Singletons
    async fn get_profile(&self) -> Result<Option<Profile>, StoreError>;
    async fn upsert_profile(&self, draft: ProfileDraft) -> Result<Profile, StoreError>;
    async fn get_hero(&self) -> Result<Option<HeroSettings>, StoreError>;
    async fn upsert_hero(&self, draft: HeroDraft) -> Result<HeroSettings, StoreError>;

    /// Apply a batch of position updates to one collection, all-or-nothing.
    ///
    /// A single unknown id fails the entire batch with
    /// [`StoreError::NotFound`] and leaves every position untouched.
    async fn reorder(&self, collection: Collection, items: &[ReorderItem]) -> Result<(), StoreError>;
}
