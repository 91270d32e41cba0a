//! Project draft and the synthesized project record.

use crate::catalog::Template;
use crate::generator::GeneratorConfig;
use crate::slug::{is_valid_slug, slugify};
use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

const PROJECT_ID_LEN: usize = 9;
const PROJECT_ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Name being configured plus its derived slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    name: String,
    slug: String,
}

impl ProjectDraft {
    pub fn new(name: impl Into<String>) -> Self {
        let mut draft = Self::default();
        draft.set_name(name);
        draft
    }

    /// Replace the name; the slug is recomputed from it.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.slug = slugify(&self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn is_valid(&self, min_len: usize) -> bool {
        is_valid_slug(&self.slug, min_len)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Generating,
    Ready,
    Deploying,
    Live,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Generating => "generating",
            ProjectStatus::Ready => "ready",
            ProjectStatus::Deploying => "deploying",
            ProjectStatus::Live => "live",
        }
    }
}

/// Checklist entry shown after generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub is_completed: bool,
}

impl Task {
    fn new(id: &str, title: &str, is_completed: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            is_completed,
        }
    }
}

/// Launch checklist attached to every generated project.
pub fn default_tasks() -> Vec<Task> {
    vec![
        Task::new("1", "Update README.md", false),
        Task::new("2", "Connect Database", false),
        Task::new("3", "Deploy to Production", true),
    ]
}

/// Completed project handed to the caller at the end of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub template_id: String,
    pub repo_url: String,
    pub deploy_url: String,
    pub status: ProjectStatus,
    pub created_at: DateTime<Utc>,
    pub tasks: Vec<Task>,
}

impl Project {
    /// Build the project record for a finished run.
    pub fn synthesize(draft: &ProjectDraft, template: &Template, config: &GeneratorConfig) -> Self {
        Self {
            id: new_project_id(),
            name: draft.name().to_string(),
            template_id: template.id.clone(),
            repo_url: repo_url(config, draft.slug()),
            deploy_url: deploy_url(config, draft.slug()),
            status: ProjectStatus::Live,
            created_at: Utc::now(),
            tasks: default_tasks(),
        }
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed).count()
    }
}

pub fn repo_url(config: &GeneratorConfig, slug: &str) -> String {
    format!(
        "{}/{}/{}",
        config.repo_host.trim_end_matches('/'),
        config.owner,
        slug
    )
}

pub fn deploy_url(config: &GeneratorConfig, slug: &str) -> String {
    format!("https://{}.{}", slug, config.deploy_domain.trim_start_matches('.'))
}

/// Random nine-character base36 identifier.
pub fn new_project_id() -> String {
    let mut rng = rand::rng();
    (0..PROJECT_ID_LEN)
        .map(|_| char::from(PROJECT_ID_ALPHABET[rng.random_range(0..PROJECT_ID_ALPHABET.len())]))
        .collect()
}
