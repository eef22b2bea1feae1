//! Infrastructure wiring: content store + outbound mail.

use std::sync::Arc;

use vitrine_infra::{ContentStore, MemoryStore, PostgresStore, SmtpMailer, StoreError};

use crate::app::dto::{DashboardContent, SiteContent};
use crate::config::AppConfig;

pub struct AppServices {
    store: Arc<dyn ContentStore>,
    mailer: Option<SmtpMailer>,
}

/// Choose the storage backend from configuration.
///
/// `USE_PERSISTENT_STORE=true` requires `DATABASE_URL`; anything else runs on
/// the in-memory store (dev/test).
pub async fn build_services(config: &AppConfig) -> AppServices {
    let store: Arc<dyn ContentStore> = if config.use_persistent_store {
        let url = config
            .database_url
            .as_deref()
            .expect("DATABASE_URL must be set when USE_PERSISTENT_STORE=true");
        let store = PostgresStore::connect(url)
            .await
            .expect("failed to connect to Postgres");
        Arc::new(store)
    } else {
        Arc::new(MemoryStore::new())
    };

    let mailer = match &config.smtp {
        Some(smtp) => match SmtpMailer::new(smtp) {
            Ok(mailer) => Some(mailer),
            Err(e) => {
                tracing::warn!("invalid SMTP configuration, notifications disabled: {e}");
                None
            }
        },
        None => None,
    };

    AppServices { store, mailer }
}

impl AppServices {
    pub fn store(&self) -> &dyn ContentStore {
        self.store.as_ref()
    }

    pub fn mailer(&self) -> Option<&SmtpMailer> {
        self.mailer.as_ref()
    }

    /// The public site payload: visibility-filtered, display-ordered.
    pub async fn site_content(&self) -> Result<SiteContent, StoreError> {
        let projects = self
            .store
            .list_projects()
            .await?
            .into_iter()
            .filter(|p| p.is_visible)
            .collect();
        let skills = self
            .store
            .list_skills()
            .await?
            .into_iter()
            .filter(|s| s.is_visible)
            .collect();

        Ok(SiteContent {
            hero: self.store.get_hero().await?,
            profile: self.store.get_profile().await?,
            projects,
            skills,
            experience: self.store.list_experience().await?,
            education: self.store.list_education().await?,
            achievements: self.store.list_achievements().await?,
            research_papers: self.store.list_research().await?,
            certifications: self.store.list_certifications().await?,
        })
    }

    /// Everything the admin dashboard shows, unfiltered.
    pub async fn dashboard_content(&self) -> Result<DashboardContent, StoreError> {
        Ok(DashboardContent {
            hero: self.store.get_hero().await?,
            profile: self.store.get_profile().await?,
            projects: self.store.list_projects().await?,
            skills: self.store.list_skills().await?,
            experience: self.store.list_experience().await?,
            education: self.store.list_education().await?,
            achievements: self.store.list_achievements().await?,
            research_papers: self.store.list_research().await?,
            certifications: self.store.list_certifications().await?,
            messages: self.store.list_messages().await?,
        })
    }
}
