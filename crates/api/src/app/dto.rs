//! Request/response DTOs and their mapping into validated drafts.
//!
//! Request types mirror the admin forms: optional text fields default to the
//! empty string (unchecked checkboxes simply don't submit), and
//! comma-separated fields stay strings until draft validation splits them.

use serde::{Deserialize, Serialize};

use vitrine_content::{
    Achievement, AchievementDraft, Certification, CertificationDraft, ContactDraft, Education,
    EducationDraft, Experience, ExperienceDraft, HeroDraft, HeroSettings, Message, Profile,
    ProfileDraft, Project, ProjectDraft, ResearchDraft, ResearchPaper, Skill, SkillDraft,
};
use vitrine_core::FieldErrors;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRequest {
    pub fn into_draft(self) -> Result<ContactDraft, FieldErrors> {
        ContactDraft::new(&self.name, &self.email, &self.message)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image_url: String,
    /// Comma-separated.
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub github_link: String,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub is_visible: bool,
}

impl ProjectRequest {
    pub fn into_draft(self) -> Result<ProjectDraft, FieldErrors> {
        ProjectDraft::new(
            &self.title,
            &self.description,
            &self.image_url,
            &self.tags,
            &self.link,
            &self.github_link,
            self.featured,
            self.is_visible,
        )
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillRequest {
    pub name: String,
    pub category: String,
    pub proficiency: i32,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub is_visible: bool,
}

impl SkillRequest {
    pub fn into_draft(self) -> Result<SkillDraft, FieldErrors> {
        SkillDraft::new(
            &self.name,
            &self.category,
            self.proficiency,
            &self.icon,
            &self.color,
            self.is_visible,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct ExperienceRequest {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

impl ExperienceRequest {
    pub fn into_draft(self) -> Result<ExperienceDraft, FieldErrors> {
        ExperienceDraft::new(&self.role, &self.company, &self.period, &self.description)
    }
}

#[derive(Debug, Deserialize)]
pub struct EducationRequest {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub score: String,
}

impl EducationRequest {
    pub fn into_draft(self) -> Result<EducationDraft, FieldErrors> {
        EducationDraft::new(&self.degree, &self.institution, &self.period, &self.score)
    }
}

#[derive(Debug, Deserialize)]
pub struct AchievementRequest {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub award: String,
}

impl AchievementRequest {
    pub fn into_draft(self) -> Result<AchievementDraft, FieldErrors> {
        AchievementDraft::new(&self.title, &self.description, &self.date, &self.award)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResearchRequest {
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    #[serde(default)]
    pub link: String,
    pub publication_date: String,
}

impl ResearchRequest {
    pub fn into_draft(self) -> Result<ResearchDraft, FieldErrors> {
        ResearchDraft::new(&self.title, &self.abstract_text, &self.link, &self.publication_date)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificationRequest {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(default)]
    pub credential_url: String,
}

impl CertificationRequest {
    pub fn into_draft(self) -> Result<CertificationDraft, FieldErrors> {
        CertificationDraft::new(&self.name, &self.issuer, &self.date, &self.credential_url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    pub bio: String,
    pub career_objective: String,
    #[serde(default)]
    pub resume_url: String,
    #[serde(default)]
    pub linkedin_url: String,
    #[serde(default)]
    pub github_url: String,
    #[serde(default)]
    pub twitter_url: String,
    #[serde(default)]
    pub email: String,
}

impl ProfileRequest {
    pub fn into_draft(self) -> Result<ProfileDraft, FieldErrors> {
        ProfileDraft::new(
            &self.bio,
            &self.career_objective,
            &self.resume_url,
            &self.linkedin_url,
            &self.github_url,
            &self.twitter_url,
            &self.email,
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct HeroRequest {
    pub heading: String,
    #[serde(default)]
    pub subheading: String,
    /// Comma-separated.
    #[serde(default)]
    pub keywords: String,
}

impl HeroRequest {
    pub fn into_draft(self) -> Result<HeroDraft, FieldErrors> {
        HeroDraft::new(&self.heading, &self.subheading, &self.keywords)
    }
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    /// The admin UI historically submitted this field as `model`.
    #[serde(alias = "model")]
    pub collection: String,
    pub items: Vec<ReorderItemRequest>,
}

#[derive(Debug, Deserialize)]
pub struct ReorderItemRequest {
    pub id: String,
    pub order: i32,
}

// -------------------------
// Response DTOs
// -------------------------

/// The public site payload (`GET /content`).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteContent {
    pub hero: Option<HeroSettings>,
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
    pub research_papers: Vec<ResearchPaper>,
    pub certifications: Vec<Certification>,
}

/// The admin dashboard payload: every collection unfiltered plus the inbox.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardContent {
    pub hero: Option<HeroSettings>,
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
    pub skills: Vec<Skill>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub achievements: Vec<Achievement>,
    pub research_papers: Vec<ResearchPaper>,
    pub certifications: Vec<Certification>,
    pub messages: Vec<Message>,
}
