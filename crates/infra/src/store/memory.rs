//! In-memory [`ContentStore`] for dev and tests.

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use vitrine_content::{
    Achievement, AchievementDraft, Certification, CertificationDraft, Collection, ContactDraft,
    Education, EducationDraft, Experience, ExperienceDraft, HeroDraft, HeroSettings, Message,
    Orderable, Profile, ProfileDraft, Project, ProjectDraft, ReorderItem, ResearchDraft,
    ResearchPaper, Skill, SkillDraft,
};
use vitrine_core::RecordId;

use super::{ContentStore, StoreError};

/// Everything lives in `RwLock`ed tables; critical sections are short and
/// never await.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: RwLock<Vec<Project>>,
    skills: RwLock<Vec<Skill>>,
    experience: RwLock<Vec<Experience>>,
    education: RwLock<Vec<Education>>,
    achievements: RwLock<Vec<Achievement>>,
    research: RwLock<Vec<ResearchPaper>>,
    certifications: RwLock<Vec<Certification>>,
    messages: RwLock<Vec<Message>>,
    profile: RwLock<Option<Profile>>,
    hero: RwLock<Option<HeroSettings>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(operation: &'static str) -> StoreError {
    StoreError::backend(operation, "table lock poisoned")
}

/// Verify the whole batch before mutating anything: one unknown id aborts
/// the lot.
fn apply_reorder<T: Orderable>(
    rows: &mut [T],
    items: &[ReorderItem],
    now: DateTime<Utc>,
) -> Result<(), StoreError> {
    for item in items {
        if !rows.iter().any(|row| row.id() == item.id) {
            return Err(StoreError::NotFound);
        }
    }
    for item in items {
        if let Some(row) = rows.iter_mut().find(|row| row.id() == item.id) {
            row.reposition(item.order, now);
        }
    }
    Ok(())
}

#[async_trait]
impl ContentStore for MemoryStore {
    // ---- projects ----

    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        let project = Project::create(draft, Utc::now());
        let mut rows = self.projects.write().map_err(|_| poisoned("create_project"))?;
        rows.push(project.clone());
        Ok(project)
    }

    async fn update_project(&self, id: RecordId, draft: ProjectDraft) -> Result<Project, StoreError> {
        let mut rows = self.projects.write().map_err(|_| poisoned("update_project"))?;
        let row = rows.iter_mut().find(|p| p.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_project(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.projects.write().map_err(|_| poisoned("delete_project"))?;
        let before = rows.len();
        rows.retain(|p| p.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = self.projects.read().map_err(|_| poisoned("list_projects"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| a.order.cmp(&b.order).then(a.created_at.cmp(&b.created_at)));
        Ok(rows)
    }

    // ---- skills ----

    async fn create_skill(&self, draft: SkillDraft) -> Result<Skill, StoreError> {
        let skill = Skill::create(draft, Utc::now());
        let mut rows = self.skills.write().map_err(|_| poisoned("create_skill"))?;
        rows.push(skill.clone());
        Ok(skill)
    }

    async fn update_skill(&self, id: RecordId, draft: SkillDraft) -> Result<Skill, StoreError> {
        let mut rows = self.skills.write().map_err(|_| poisoned("update_skill"))?;
        let row = rows.iter_mut().find(|s| s.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_skill(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.skills.write().map_err(|_| poisoned("delete_skill"))?;
        let before = rows.len();
        rows.retain(|s| s.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        let rows = self.skills.read().map_err(|_| poisoned("list_skills"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| a.order.cmp(&b.order).then(b.proficiency.cmp(&a.proficiency)));
        Ok(rows)
    }

    // ---- experience ----

    async fn create_experience(&self, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        let entry = Experience::create(draft, Utc::now());
        let mut rows = self.experience.write().map_err(|_| poisoned("create_experience"))?;
        rows.push(entry.clone());
        Ok(entry)
    }

    async fn update_experience(&self, id: RecordId, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        let mut rows = self.experience.write().map_err(|_| poisoned("update_experience"))?;
        let row = rows.iter_mut().find(|e| e.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_experience(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.experience.write().map_err(|_| poisoned("delete_experience"))?;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, StoreError> {
        let rows = self.experience.read().map_err(|_| poisoned("list_experience"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| a.order.cmp(&b.order).then(b.created_at.cmp(&a.created_at)));
        Ok(rows)
    }

    // ---- education ----

    async fn create_education(&self, draft: EducationDraft) -> Result<Education, StoreError> {
        let entry = Education::create(draft, Utc::now());
        let mut rows = self.education.write().map_err(|_| poisoned("create_education"))?;
        rows.push(entry.clone());
        Ok(entry)
    }

    async fn update_education(&self, id: RecordId, draft: EducationDraft) -> Result<Education, StoreError> {
        let mut rows = self.education.write().map_err(|_| poisoned("update_education"))?;
        let row = rows.iter_mut().find(|e| e.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_education(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.education.write().map_err(|_| poisoned("delete_education"))?;
        let before = rows.len();
        rows.retain(|e| e.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_education(&self) -> Result<Vec<Education>, StoreError> {
        let rows = self.education.read().map_err(|_| poisoned("list_education"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| a.order.cmp(&b.order).then(b.created_at.cmp(&a.created_at)));
        Ok(rows)
    }

    // ---- achievements ----

    async fn create_achievement(&self, draft: AchievementDraft) -> Result<Achievement, StoreError> {
        let entry = Achievement::create(draft, Utc::now());
        let mut rows = self.achievements.write().map_err(|_| poisoned("create_achievement"))?;
        rows.push(entry.clone());
        Ok(entry)
    }

    async fn update_achievement(&self, id: RecordId, draft: AchievementDraft) -> Result<Achievement, StoreError> {
        let mut rows = self.achievements.write().map_err(|_| poisoned("update_achievement"))?;
        let row = rows.iter_mut().find(|a| a.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_achievement(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.achievements.write().map_err(|_| poisoned("delete_achievement"))?;
        let before = rows.len();
        rows.retain(|a| a.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        let rows = self.achievements.read().map_err(|_| poisoned("list_achievements"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| a.order.cmp(&b.order).then(b.date.cmp(&a.date)));
        Ok(rows)
    }

    // ---- research papers ----

    async fn create_research(&self, draft: ResearchDraft) -> Result<ResearchPaper, StoreError> {
        let paper = ResearchPaper::create(draft, Utc::now());
        let mut rows = self.research.write().map_err(|_| poisoned("create_research"))?;
        rows.push(paper.clone());
        Ok(paper)
    }

    async fn update_research(&self, id: RecordId, draft: ResearchDraft) -> Result<ResearchPaper, StoreError> {
        let mut rows = self.research.write().map_err(|_| poisoned("update_research"))?;
        let row = rows.iter_mut().find(|r| r.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_research(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.research.write().map_err(|_| poisoned("delete_research"))?;
        let before = rows.len();
        rows.retain(|r| r.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_research(&self) -> Result<Vec<ResearchPaper>, StoreError> {
        let rows = self.research.read().map_err(|_| poisoned("list_research"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| {
            a.order
                .cmp(&b.order)
                .then(b.publication_date.cmp(&a.publication_date))
        });
        Ok(rows)
    }

    // ---- certifications ----

    async fn create_certification(&self, draft: CertificationDraft) -> Result<Certification, StoreError> {
        let cert = Certification::create(draft, Utc::now());
        let mut rows = self.certifications.write().map_err(|_| poisoned("create_certification"))?;
        rows.push(cert.clone());
        Ok(cert)
    }

    async fn update_certification(&self, id: RecordId, draft: CertificationDraft) -> Result<Certification, StoreError> {
        let mut rows = self.certifications.write().map_err(|_| poisoned("update_certification"))?;
        let row = rows.iter_mut().find(|c| c.id == id).ok_or(StoreError::NotFound)?;
        row.apply(draft, Utc::now());
        Ok(row.clone())
    }

    async fn delete_certification(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.certifications.write().map_err(|_| poisoned("delete_certification"))?;
        let before = rows.len();
        rows.retain(|c| c.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, StoreError> {
        let rows = self.certifications.read().map_err(|_| poisoned("list_certifications"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| a.order.cmp(&b.order).then(b.date.cmp(&a.date)));
        Ok(rows)
    }

    // ---- messages ----

    async fn create_message(&self, draft: ContactDraft) -> Result<Message, StoreError> {
        let message = Message::create(draft, Utc::now());
        let mut rows = self.messages.write().map_err(|_| poisoned("create_message"))?;
        rows.push(message.clone());
        Ok(message)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let rows = self.messages.read().map_err(|_| poisoned("list_messages"))?;
        let mut rows = rows.clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn mark_message_read(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.messages.write().map_err(|_| poisoned("mark_message_read"))?;
        let row = rows.iter_mut().find(|m| m.id == id).ok_or(StoreError::NotFound)?;
        row.read = true;
        Ok(())
    }

    async fn delete_message(&self, id: RecordId) -> Result<(), StoreError> {
        let mut rows = self.messages.write().map_err(|_| poisoned("delete_message"))?;
        let before = rows.len();
        rows.retain(|m| m.id != id);
        if rows.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    // ---- singletons ----

    async fn get_profile(&self) -> Result<Option<Profile>, StoreError> {
        let slot = self.profile.read().map_err(|_| poisoned("get_profile"))?;
        Ok(slot.clone())
    }

    async fn upsert_profile(&self, draft: ProfileDraft) -> Result<Profile, StoreError> {
        let mut slot = self.profile.write().map_err(|_| poisoned("upsert_profile"))?;
        let profile = match slot.as_mut() {
            Some(existing) => {
                existing.apply(draft, Utc::now());
                existing.clone()
            }
            None => {
                let created = Profile::create(draft, Utc::now());
                *slot = Some(created.clone());
                created
            }
        };
        Ok(profile)
    }

    async fn get_hero(&self) -> Result<Option<HeroSettings>, StoreError> {
        let slot = self.hero.read().map_err(|_| poisoned("get_hero"))?;
        Ok(slot.clone())
    }

    async fn upsert_hero(&self, draft: HeroDraft) -> Result<HeroSettings, StoreError> {
        let mut slot = self.hero.write().map_err(|_| poisoned("upsert_hero"))?;
        let hero = match slot.as_mut() {
            Some(existing) => {
                existing.apply(draft, Utc::now());
                existing.clone()
            }
            None => {
                let created = HeroSettings::create(draft, Utc::now());
                *slot = Some(created.clone());
                created
            }
        };
        Ok(hero)
    }

    // ---- reorder ----

    async fn reorder(&self, collection: Collection, items: &[ReorderItem]) -> Result<(), StoreError> {
        let now = Utc::now();
        match collection {
            Collection::Project => {
                let mut rows = self.projects.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
            Collection::Skill => {
                let mut rows = self.skills.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
            Collection::Experience => {
                let mut rows = self.experience.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
            Collection::Education => {
                let mut rows = self.education.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
            Collection::Achievement => {
                let mut rows = self.achievements.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
            Collection::ResearchPaper => {
                let mut rows = self.research.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
            Collection::Certification => {
                let mut rows = self.certifications.write().map_err(|_| poisoned("reorder"))?;
                apply_reorder(rows.as_mut_slice(), items, now)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn project_draft(title: &str) -> ProjectDraft {
        ProjectDraft::new(title, "A description long enough to pass.", "", "", "", "", false, true)
            .unwrap()
    }

    fn skill_draft(name: &str, proficiency: i32) -> SkillDraft {
        SkillDraft::new(name, "Languages", proficiency, "", "", true).unwrap()
    }

    fn profile_draft(bio: &str) -> ProfileDraft {
        ProfileDraft::new(bio, "Looking for interesting problems.", "", "", "", "", "").unwrap()
    }

    #[tokio::test]
    async fn reorder_with_unknown_id_changes_nothing() {
        let store = MemoryStore::new();
        let a = store.create_project(project_draft("a")).await.unwrap();
        let b = store.create_project(project_draft("b")).await.unwrap();

        let items = vec![
            ReorderItem { id: a.id, order: 5 },
            ReorderItem { id: RecordId::new(), order: 6 },
            ReorderItem { id: b.id, order: 7 },
        ];
        let err = store.reorder(Collection::Project, &items).await.unwrap_err();
        assert!(err.is_not_found());

        // No partial application: both rows still at their default position.
        let rows = store.list_projects().await.unwrap();
        assert!(rows.iter().all(|p| p.order == 0));
    }

    #[tokio::test]
    async fn skills_with_equal_order_fall_back_to_proficiency() {
        let store = MemoryStore::new();
        store.create_skill(skill_draft("C", 60)).await.unwrap();
        store.create_skill(skill_draft("Rust", 95)).await.unwrap();
        store.create_skill(skill_draft("Python", 80)).await.unwrap();

        let names: Vec<_> = store
            .list_skills()
            .await
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, ["Rust", "Python", "C"]);
    }

    #[tokio::test]
    async fn messages_list_newest_first() {
        let store = MemoryStore::new();
        for name in ["Ada", "Grace", "Edsger"] {
            store
                .create_message(
                    ContactDraft::new(name, "a@example.com", "Hello from the test suite.").unwrap(),
                )
                .await
                .unwrap();
            // Distinct created_at stamps even on coarse clocks.
            tokio::time::sleep(std::time::Duration::from_millis(2)).await;
        }

        let names: Vec<_> = store.list_messages().await.unwrap().into_iter().map(|m| m.name).collect();
        assert_eq!(names, ["Edsger", "Grace", "Ada"]);
    }

    #[tokio::test]
    async fn mark_message_read_flips_the_flag() {
        let store = MemoryStore::new();
        let message = store
            .create_message(ContactDraft::new("Ada", "a@example.com", "Hello from the test suite.").unwrap())
            .await
            .unwrap();

        store.mark_message_read(message.id).await.unwrap();
        assert!(store.list_messages().await.unwrap()[0].read);

        let err = store.mark_message_read(RecordId::new()).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn profile_upsert_never_creates_a_second_row() {
        let store = MemoryStore::new();
        assert!(store.get_profile().await.unwrap().is_none());

        let first = store
            .upsert_profile(profile_draft("First bio, long enough."))
            .await
            .unwrap();
        let second = store
            .upsert_profile(profile_draft("Second bio, also long enough."))
            .await
            .unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(
            store.get_profile().await.unwrap().unwrap().bio,
            "Second bio, also long enough."
        );
    }

    #[tokio::test]
    async fn delete_unknown_record_is_not_found() {
        let store = MemoryStore::new();
        assert!(store.delete_project(RecordId::new()).await.unwrap_err().is_not_found());
        assert!(store.delete_message(RecordId::new()).await.unwrap_err().is_not_found());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 64,
            ..ProptestConfig::default()
        })]

        /// Property: any permutation of existing ids submitted with
        /// sequential positions is exactly the order reads come back in.
        #[test]
        fn reorder_permutation_defines_read_order(
            perm in Just((0usize..6).collect::<Vec<_>>()).prop_shuffle()
        ) {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();

            rt.block_on(async {
                let store = MemoryStore::new();
                let mut ids = Vec::new();
                for i in 0..6 {
                    let p = store.create_project(project_draft(&format!("p{i}"))).await.unwrap();
                    ids.push(p.id);
                }

                let items: Vec<ReorderItem> = perm
                    .iter()
                    .enumerate()
                    .map(|(position, &idx)| ReorderItem { id: ids[idx], order: position as i32 })
                    .collect();
                store.reorder(Collection::Project, &items).await.unwrap();

                let listed: Vec<RecordId> =
                    store.list_projects().await.unwrap().into_iter().map(|p| p.id).collect();
                let expected: Vec<RecordId> = perm.iter().map(|&idx| ids[idx]).collect();
                prop_assert_eq!(listed, expected);
                Ok(())
            })?;
        }
    }
}
