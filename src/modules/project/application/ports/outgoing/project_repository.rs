// src/modules/project/application/ports/outgoing/project_repository.rs

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

/// Editable project fields. Used for both create and full update.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ProjectData {
    pub name: String,
    #[serde(default)]
    pub subheading: Option<String>,
    pub date_started: NaiveDate,
    #[serde(default)]
    pub date_ended: Option<NaiveDate>,
    #[serde(default)]
    pub is_pinned: bool,
    #[serde(default)]
    pub poster_image_url: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
}

impl ProjectData {
    /// Trims text fields and turns blank optionals into `None`.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            subheading: trimmed(self.subheading),
            poster_image_url: trimmed(self.poster_image_url),
            color: trimmed(self.color),
            ..self
        }
    }
}

fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProjectResult {
    pub id: i32,
    pub name: String,
    pub subheading: Option<String>,
    pub date_started: NaiveDate,
    pub date_ended: Option<NaiveDate>,
    pub is_pinned: bool,
    pub poster_image_url: Option<String>,
    pub color: Option<String>,
    pub display_order: i32,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectRepositoryError {
    #[error("Project not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Inserts at the end of the list (`display_order = max + 1`).
    async fn create_project(&self, data: ProjectData)
        -> Result<ProjectResult, ProjectRepositoryError>;

    async fn update_project(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError>;

    /// Removes the project; components and tag/tech links cascade.
    async fn delete_project(&self, project_id: i32) -> Result<(), ProjectRepositoryError>;
}
