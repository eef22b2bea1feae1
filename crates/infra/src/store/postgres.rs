//! Postgres-backed [`ContentStore`] implementation.
//!
//! ## Error mapping
//!
//! SQLx errors are mapped to [`StoreError`] as follows: `RowNotFound` becomes
//! `NotFound`, database-reported errors keep their message under `Backend`,
//! and everything else (pool closed, network) is also `Backend`. Writes that
//! touch zero rows report `NotFound` themselves.
//!
//! ## Thread safety
//!
//! `PostgresStore` is `Send + Sync`; all operations go through the SQLx
//! connection pool. The reorder batch and the singleton upserts run inside
//! transactions so partial application cannot occur.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use vitrine_content::{
    Achievement, AchievementDraft, Certification, CertificationDraft, Collection, ContactDraft,
    Education, EducationDraft, HeroDraft, HeroSettings, Message, Profile, ProfileDraft, Project,
    ProjectDraft, ReorderItem, ResearchDraft, ResearchPaper, Skill, SkillDraft,
};
use vitrine_content::{Experience, ExperienceDraft};
use vitrine_core::RecordId;

use super::{ContentStore, StoreError};

/// Table definitions, applied idempotently at startup.
const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS projects (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    image_url TEXT,
    tags TEXT[] NOT NULL DEFAULT '{}',
    link TEXT,
    github_link TEXT,
    featured BOOLEAN NOT NULL DEFAULT FALSE,
    is_visible BOOLEAN NOT NULL DEFAULT TRUE,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS skills (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    category TEXT NOT NULL,
    proficiency INTEGER NOT NULL,
    icon TEXT,
    color TEXT,
    is_visible BOOLEAN NOT NULL DEFAULT TRUE,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS experience (
    id UUID PRIMARY KEY,
    role TEXT NOT NULL,
    company TEXT NOT NULL,
    period TEXT NOT NULL,
    description TEXT NOT NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS education (
    id UUID PRIMARY KEY,
    degree TEXT NOT NULL,
    institution TEXT NOT NULL,
    period TEXT NOT NULL,
    score TEXT NOT NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS achievements (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    description TEXT NOT NULL,
    date TEXT NOT NULL,
    award TEXT,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS research_papers (
    id UUID PRIMARY KEY,
    title TEXT NOT NULL,
    abstract TEXT NOT NULL,
    link TEXT,
    publication_date TEXT NOT NULL,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS certifications (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    issuer TEXT NOT NULL,
    date TEXT NOT NULL,
    credential_url TEXT,
    sort_order INTEGER NOT NULL DEFAULT 0,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS messages (
    id UUID PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT NOT NULL,
    body TEXT NOT NULL,
    read BOOLEAN NOT NULL DEFAULT FALSE,
    created_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS profile (
    id UUID PRIMARY KEY,
    bio TEXT NOT NULL,
    career_objective TEXT NOT NULL,
    resume_url TEXT,
    linkedin_url TEXT,
    github_url TEXT,
    twitter_url TEXT,
    email TEXT,
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);

CREATE TABLE IF NOT EXISTS hero_settings (
    id UUID PRIMARY KEY,
    heading TEXT NOT NULL,
    subheading TEXT,
    keywords TEXT[] NOT NULL DEFAULT '{}',
    created_at TIMESTAMPTZ NOT NULL,
    updated_at TIMESTAMPTZ NOT NULL
);
"#;

/// Postgres-backed content store.
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Wrap an existing pool. Callers are responsible for the schema.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect and apply the schema idempotently.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPool::connect(database_url)
            .await
            .map_err(|e| map_sqlx_error("connect", e))?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::raw_sql(SCHEMA)
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("ensure_schema", e))?;
        Ok(())
    }
}

fn map_sqlx_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db) => StoreError::backend(operation, db.message().to_string()),
        other => StoreError::backend(operation, other.to_string()),
    }
}

fn decode_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    StoreError::backend(operation, format!("failed to decode row: {err}"))
}

// Row mappers. Column sets mirror the schema above; `sort_order` maps onto
// the entities' `order` field.

fn project_from_row(row: &PgRow) -> Result<Project, sqlx::Error> {
    Ok(Project {
        id: RecordId::from_uuid(row.try_get("id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        image_url: row.try_get("image_url")?,
        tags: row.try_get("tags")?,
        link: row.try_get("link")?,
        github_link: row.try_get("github_link")?,
        featured: row.try_get("featured")?,
        is_visible: row.try_get("is_visible")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn skill_from_row(row: &PgRow) -> Result<Skill, sqlx::Error> {
    Ok(Skill {
        id: RecordId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        category: row.try_get("category")?,
        proficiency: row.try_get("proficiency")?,
        icon: row.try_get("icon")?,
        color: row.try_get("color")?,
        is_visible: row.try_get("is_visible")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn experience_from_row(row: &PgRow) -> Result<Experience, sqlx::Error> {
    Ok(Experience {
        id: RecordId::from_uuid(row.try_get("id")?),
        role: row.try_get("role")?,
        company: row.try_get("company")?,
        period: row.try_get("period")?,
        description: row.try_get("description")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn education_from_row(row: &PgRow) -> Result<Education, sqlx::Error> {
    Ok(Education {
        id: RecordId::from_uuid(row.try_get("id")?),
        degree: row.try_get("degree")?,
        institution: row.try_get("institution")?,
        period: row.try_get("period")?,
        score: row.try_get("score")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn achievement_from_row(row: &PgRow) -> Result<Achievement, sqlx::Error> {
    Ok(Achievement {
        id: RecordId::from_uuid(row.try_get("id")?),
        title: row.try_get("title")?,
        description: row.try_get("description")?,
        date: row.try_get("date")?,
        award: row.try_get("award")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn research_from_row(row: &PgRow) -> Result<ResearchPaper, sqlx::Error> {
    Ok(ResearchPaper {
        id: RecordId::from_uuid(row.try_get("id")?),
        title: row.try_get("title")?,
        abstract_text: row.try_get("abstract")?,
        link: row.try_get("link")?,
        publication_date: row.try_get("publication_date")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn certification_from_row(row: &PgRow) -> Result<Certification, sqlx::Error> {
    Ok(Certification {
        id: RecordId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        issuer: row.try_get("issuer")?,
        date: row.try_get("date")?,
        credential_url: row.try_get("credential_url")?,
        order: row.try_get("sort_order")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn message_from_row(row: &PgRow) -> Result<Message, sqlx::Error> {
    Ok(Message {
        id: RecordId::from_uuid(row.try_get("id")?),
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        body: row.try_get("body")?,
        read: row.try_get("read")?,
        created_at: row.try_get("created_at")?,
    })
}

fn profile_from_row(row: &PgRow) -> Result<Profile, sqlx::Error> {
    Ok(Profile {
        id: RecordId::from_uuid(row.try_get("id")?),
        bio: row.try_get("bio")?,
        career_objective: row.try_get("career_objective")?,
        resume_url: row.try_get("resume_url")?,
        linkedin_url: row.try_get("linkedin_url")?,
        github_url: row.try_get("github_url")?,
        twitter_url: row.try_get("twitter_url")?,
        email: row.try_get("email")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

fn hero_from_row(row: &PgRow) -> Result<HeroSettings, sqlx::Error> {
    Ok(HeroSettings {
        id: RecordId::from_uuid(row.try_get("id")?),
        heading: row.try_get("heading")?,
        subheading: row.try_get("subheading")?,
        keywords: row.try_get("keywords")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}

#[async_trait]
impl ContentStore for PostgresStore {
    // ---- projects ----

    async fn create_project(&self, draft: ProjectDraft) -> Result<Project, StoreError> {
        let project = Project::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO projects
                (id, title, description, image_url, tags, link, github_link,
                 featured, is_visible, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(project.id.as_uuid())
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.image_url)
        .bind(&project.tags)
        .bind(&project.link)
        .bind(&project.github_link)
        .bind(project.featured)
        .bind(project.is_visible)
        .bind(project.order)
        .bind(project.created_at)
        .bind(project.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_project", e))?;
        Ok(project)
    }

    async fn update_project(&self, id: RecordId, draft: ProjectDraft) -> Result<Project, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE projects
            SET title = $2, description = $3, image_url = $4, tags = $5,
                link = $6, github_link = $7, featured = $8, is_visible = $9,
                updated_at = $10
            WHERE id = $1
            RETURNING id, title, description, image_url, tags, link, github_link,
                      featured, is_visible, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.image_url)
        .bind(&draft.tags)
        .bind(&draft.link)
        .bind(&draft.github_link)
        .bind(draft.featured)
        .bind(draft.is_visible)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_project", e))?
        .ok_or(StoreError::NotFound)?;
        project_from_row(&row).map_err(|e| decode_error("update_project", e))
    }

    async fn delete_project(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_project", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_projects(&self) -> Result<Vec<Project>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, image_url, tags, link, github_link,
                   featured, is_visible, sort_order, created_at, updated_at
            FROM projects
            ORDER BY sort_order ASC, created_at ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_projects", e))?;
        rows.iter()
            .map(|row| project_from_row(row).map_err(|e| decode_error("list_projects", e)))
            .collect()
    }

    // ---- skills ----

    async fn create_skill(&self, draft: SkillDraft) -> Result<Skill, StoreError> {
        let skill = Skill::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO skills
                (id, name, category, proficiency, icon, color, is_visible,
                 sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(skill.id.as_uuid())
        .bind(&skill.name)
        .bind(&skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon)
        .bind(&skill.color)
        .bind(skill.is_visible)
        .bind(skill.order)
        .bind(skill.created_at)
        .bind(skill.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_skill", e))?;
        Ok(skill)
    }

    async fn update_skill(&self, id: RecordId, draft: SkillDraft) -> Result<Skill, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE skills
            SET name = $2, category = $3, proficiency = $4, icon = $5,
                color = $6, is_visible = $7, updated_at = $8
            WHERE id = $1
            RETURNING id, name, category, proficiency, icon, color, is_visible,
                      sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.name)
        .bind(&draft.category)
        .bind(draft.proficiency)
        .bind(&draft.icon)
        .bind(&draft.color)
        .bind(draft.is_visible)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_skill", e))?
        .ok_or(StoreError::NotFound)?;
        skill_from_row(&row).map_err(|e| decode_error("update_skill", e))
    }

    async fn delete_skill(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_skill", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, proficiency, icon, color, is_visible,
                   sort_order, created_at, updated_at
            FROM skills
            ORDER BY sort_order ASC, proficiency DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_skills", e))?;
        rows.iter()
            .map(|row| skill_from_row(row).map_err(|e| decode_error("list_skills", e)))
            .collect()
    }

    // ---- experience ----

    async fn create_experience(&self, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        let entry = Experience::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO experience
                (id, role, company, period, description, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(&entry.role)
        .bind(&entry.company)
        .bind(&entry.period)
        .bind(&entry.description)
        .bind(entry.order)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_experience", e))?;
        Ok(entry)
    }

    async fn update_experience(&self, id: RecordId, draft: ExperienceDraft) -> Result<Experience, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE experience
            SET role = $2, company = $3, period = $4, description = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, role, company, period, description, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.role)
        .bind(&draft.company)
        .bind(&draft.period)
        .bind(&draft.description)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_experience", e))?
        .ok_or(StoreError::NotFound)?;
        experience_from_row(&row).map_err(|e| decode_error("update_experience", e))
    }

    async fn delete_experience(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM experience WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_experience", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, role, company, period, description, sort_order, created_at, updated_at
            FROM experience
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_experience", e))?;
        rows.iter()
            .map(|row| experience_from_row(row).map_err(|e| decode_error("list_experience", e)))
            .collect()
    }

    // ---- education ----

    async fn create_education(&self, draft: EducationDraft) -> Result<Education, StoreError> {
        let entry = Education::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO education
                (id, degree, institution, period, score, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(&entry.degree)
        .bind(&entry.institution)
        .bind(&entry.period)
        .bind(&entry.score)
        .bind(entry.order)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_education", e))?;
        Ok(entry)
    }

    async fn update_education(&self, id: RecordId, draft: EducationDraft) -> Result<Education, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE education
            SET degree = $2, institution = $3, period = $4, score = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, degree, institution, period, score, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.degree)
        .bind(&draft.institution)
        .bind(&draft.period)
        .bind(&draft.score)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_education", e))?
        .ok_or(StoreError::NotFound)?;
        education_from_row(&row).map_err(|e| decode_error("update_education", e))
    }

    async fn delete_education(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM education WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_education", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_education(&self) -> Result<Vec<Education>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, degree, institution, period, score, sort_order, created_at, updated_at
            FROM education
            ORDER BY sort_order ASC, created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_education", e))?;
        rows.iter()
            .map(|row| education_from_row(row).map_err(|e| decode_error("list_education", e)))
            .collect()
    }

    // ---- achievements ----

    async fn create_achievement(&self, draft: AchievementDraft) -> Result<Achievement, StoreError> {
        let entry = Achievement::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO achievements
                (id, title, description, date, award, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(entry.id.as_uuid())
        .bind(&entry.title)
        .bind(&entry.description)
        .bind(&entry.date)
        .bind(&entry.award)
        .bind(entry.order)
        .bind(entry.created_at)
        .bind(entry.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_achievement", e))?;
        Ok(entry)
    }

    async fn update_achievement(&self, id: RecordId, draft: AchievementDraft) -> Result<Achievement, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE achievements
            SET title = $2, description = $3, date = $4, award = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, title, description, date, award, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.title)
        .bind(&draft.description)
        .bind(&draft.date)
        .bind(&draft.award)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_achievement", e))?
        .ok_or(StoreError::NotFound)?;
        achievement_from_row(&row).map_err(|e| decode_error("update_achievement", e))
    }

    async fn delete_achievement(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM achievements WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_achievement", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_achievements(&self) -> Result<Vec<Achievement>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, date, award, sort_order, created_at, updated_at
            FROM achievements
            ORDER BY sort_order ASC, date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_achievements", e))?;
        rows.iter()
            .map(|row| achievement_from_row(row).map_err(|e| decode_error("list_achievements", e)))
            .collect()
    }

    // ---- research papers ----

    async fn create_research(&self, draft: ResearchDraft) -> Result<ResearchPaper, StoreError> {
        let paper = ResearchPaper::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO research_papers
                (id, title, abstract, link, publication_date, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(paper.id.as_uuid())
        .bind(&paper.title)
        .bind(&paper.abstract_text)
        .bind(&paper.link)
        .bind(&paper.publication_date)
        .bind(paper.order)
        .bind(paper.created_at)
        .bind(paper.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_research", e))?;
        Ok(paper)
    }

    async fn update_research(&self, id: RecordId, draft: ResearchDraft) -> Result<ResearchPaper, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE research_papers
            SET title = $2, abstract = $3, link = $4, publication_date = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, title, abstract, link, publication_date, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.title)
        .bind(&draft.abstract_text)
        .bind(&draft.link)
        .bind(&draft.publication_date)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_research", e))?
        .ok_or(StoreError::NotFound)?;
        research_from_row(&row).map_err(|e| decode_error("update_research", e))
    }

    async fn delete_research(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM research_papers WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_research", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_research(&self) -> Result<Vec<ResearchPaper>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, abstract, link, publication_date, sort_order, created_at, updated_at
            FROM research_papers
            ORDER BY sort_order ASC, publication_date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_research", e))?;
        rows.iter()
            .map(|row| research_from_row(row).map_err(|e| decode_error("list_research", e)))
            .collect()
    }

    // ---- certifications ----

    async fn create_certification(&self, draft: CertificationDraft) -> Result<Certification, StoreError> {
        let cert = Certification::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO certifications
                (id, name, issuer, date, credential_url, sort_order, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(cert.id.as_uuid())
        .bind(&cert.name)
        .bind(&cert.issuer)
        .bind(&cert.date)
        .bind(&cert.credential_url)
        .bind(cert.order)
        .bind(cert.created_at)
        .bind(cert.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_certification", e))?;
        Ok(cert)
    }

    async fn update_certification(&self, id: RecordId, draft: CertificationDraft) -> Result<Certification, StoreError> {
        let row = sqlx::query(
            r#"
            UPDATE certifications
            SET name = $2, issuer = $3, date = $4, credential_url = $5, updated_at = $6
            WHERE id = $1
            RETURNING id, name, issuer, date, credential_url, sort_order, created_at, updated_at
            "#,
        )
        .bind(id.as_uuid())
        .bind(&draft.name)
        .bind(&draft.issuer)
        .bind(&draft.date)
        .bind(&draft.credential_url)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("update_certification", e))?
        .ok_or(StoreError::NotFound)?;
        certification_from_row(&row).map_err(|e| decode_error("update_certification", e))
    }

    async fn delete_certification(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM certifications WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_certification", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn list_certifications(&self) -> Result<Vec<Certification>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, issuer, date, credential_url, sort_order, created_at, updated_at
            FROM certifications
            ORDER BY sort_order ASC, date DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_certifications", e))?;
        rows.iter()
            .map(|row| certification_from_row(row).map_err(|e| decode_error("list_certifications", e)))
            .collect()
    }

    // ---- messages ----

    async fn create_message(&self, draft: ContactDraft) -> Result<Message, StoreError> {
        let message = Message::create(draft, Utc::now());
        sqlx::query(
            r#"
            INSERT INTO messages (id, name, email, body, read, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(message.id.as_uuid())
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.body)
        .bind(message.read)
        .bind(message.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("create_message", e))?;
        Ok(message)
    }

    async fn list_messages(&self) -> Result<Vec<Message>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, body, read, created_at
            FROM messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_messages", e))?;
        rows.iter()
            .map(|row| message_from_row(row).map_err(|e| decode_error("list_messages", e)))
            .collect()
    }

    async fn mark_message_read(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("UPDATE messages SET read = TRUE WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("mark_message_read", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn delete_message(&self, id: RecordId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM messages WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete_message", e))?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    // ---- singletons ----

    async fn get_profile(&self) -> Result<Option<Profile>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, bio, career_objective, resume_url, linkedin_url,
                   github_url, twitter_url, email, created_at, updated_at
            FROM profile
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_profile", e))?;
        row.map(|row| profile_from_row(&row).map_err(|e| decode_error("get_profile", e)))
            .transpose()
    }

    #[instrument(skip(self, draft), err)]
    async fn upsert_profile(&self, draft: ProfileDraft) -> Result<Profile, StoreError> {
        // Select-then-write inside one transaction keeps the table at a
        // single row even under concurrent submissions.
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("upsert_profile", e))?;

        let existing = sqlx::query(
            r#"
            SELECT id, bio, career_objective, resume_url, linkedin_url,
                   github_url, twitter_url, email, created_at, updated_at
            FROM profile
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("upsert_profile", e))?;

        let profile = match existing {
            Some(row) => {
                let mut profile =
                    profile_from_row(&row).map_err(|e| decode_error("upsert_profile", e))?;
                profile.apply(draft, Utc::now());
                sqlx::query(
                    r#"
                    UPDATE profile
                    SET bio = $2, career_objective = $3, resume_url = $4,
                        linkedin_url = $5, github_url = $6, twitter_url = $7,
                        email = $8, updated_at = $9
                    WHERE id = $1
                    "#,
                )
                .bind(profile.id.as_uuid())
                .bind(&profile.bio)
                .bind(&profile.career_objective)
                .bind(&profile.resume_url)
                .bind(&profile.linkedin_url)
                .bind(&profile.github_url)
                .bind(&profile.twitter_url)
                .bind(&profile.email)
                .bind(profile.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("upsert_profile", e))?;
                profile
            }
            None => {
                let profile = Profile::create(draft, Utc::now());
                sqlx::query(
                    r#"
                    INSERT INTO profile
                        (id, bio, career_objective, resume_url, linkedin_url,
                         github_url, twitter_url, email, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                    "#,
                )
                .bind(profile.id.as_uuid())
                .bind(&profile.bio)
                .bind(&profile.career_objective)
                .bind(&profile.resume_url)
                .bind(&profile.linkedin_url)
                .bind(&profile.github_url)
                .bind(&profile.twitter_url)
                .bind(&profile.email)
                .bind(profile.created_at)
                .bind(profile.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("upsert_profile", e))?;
                profile
            }
        };

        tx.commit().await.map_err(|e| map_sqlx_error("upsert_profile", e))?;
        Ok(profile)
    }

    async fn get_hero(&self) -> Result<Option<HeroSettings>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, heading, subheading, keywords, created_at, updated_at
            FROM hero_settings
            LIMIT 1
            "#,
        )
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| map_sqlx_error("get_hero", e))?;
        row.map(|row| hero_from_row(&row).map_err(|e| decode_error("get_hero", e)))
            .transpose()
    }

    #[instrument(skip(self, draft), err)]
    async fn upsert_hero(&self, draft: HeroDraft) -> Result<HeroSettings, StoreError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("upsert_hero", e))?;

        let existing = sqlx::query(
            r#"
            SELECT id, heading, subheading, keywords, created_at, updated_at
            FROM hero_settings
            LIMIT 1
            FOR UPDATE
            "#,
        )
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| map_sqlx_error("upsert_hero", e))?;

        let hero = match existing {
            Some(row) => {
                let mut hero = hero_from_row(&row).map_err(|e| decode_error("upsert_hero", e))?;
                hero.apply(draft, Utc::now());
                sqlx::query(
                    r#"
                    UPDATE hero_settings
                    SET heading = $2, subheading = $3, keywords = $4, updated_at = $5
                    WHERE id = $1
                    "#,
                )
                .bind(hero.id.as_uuid())
                .bind(&hero.heading)
                .bind(&hero.subheading)
                .bind(&hero.keywords)
                .bind(hero.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("upsert_hero", e))?;
                hero
            }
            None => {
                let hero = HeroSettings::create(draft, Utc::now());
                sqlx::query(
                    r#"
                    INSERT INTO hero_settings
                        (id, heading, subheading, keywords, created_at, updated_at)
                    VALUES ($1, $2, $3, $4, $5, $6)
                    "#,
                )
                .bind(hero.id.as_uuid())
                .bind(&hero.heading)
                .bind(&hero.subheading)
                .bind(&hero.keywords)
                .bind(hero.created_at)
                .bind(hero.updated_at)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("upsert_hero", e))?;
                hero
            }
        };

        tx.commit().await.map_err(|e| map_sqlx_error("upsert_hero", e))?;
        Ok(hero)
    }

    // ---- reorder ----

    #[instrument(
        skip(self, items),
        fields(collection = %collection, item_count = items.len()),
        err
    )]
    async fn reorder(&self, collection: Collection, items: &[ReorderItem]) -> Result<(), StoreError> {
        if items.is_empty() {
            return Ok(());
        }

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_sqlx_error("reorder", e))?;

        // Table name comes from the Collection enum, never from the request.
        let sql = format!(
            "UPDATE {} SET sort_order = $2, updated_at = $3 WHERE id = $1",
            collection.table()
        );

        let now = Utc::now();
        for item in items {
            let result = sqlx::query(&sql)
                .bind(item.id.as_uuid())
                .bind(item.order)
                .bind(now)
                .execute(&mut *tx)
                .await
                .map_err(|e| map_sqlx_error("reorder", e))?;

            // One unknown id aborts the whole batch.
            if result.rows_affected() != 1 {
                tx.rollback().await.map_err(|e| map_sqlx_error("reorder", e))?;
                return Err(StoreError::NotFound);
            }
        }

        tx.commit().await.map_err(|e| map_sqlx_error("reorder", e))?;
        Ok(())
    }
}
