use async_trait::async_trait;

use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::application::ports::outgoing::TagRepositoryError;

const MAX_TAG_NAME_LEN: usize = 100;

//
// ──────────────────────────────────────────────────────────
// Attach Tag Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct AttachTagCommand {
    project_id: i32,
    name: String,
    color: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AttachTagCommandError {
    #[error("Tag name cannot be empty")]
    EmptyName,

    #[error("Tag name must not exceed 100 characters")]
    NameTooLong,
}

impl AttachTagCommand {
    pub fn new(
        project_id: i32,
        name: String,
        color: Option<String>,
    ) -> Result<Self, AttachTagCommandError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(AttachTagCommandError::EmptyName);
        }

        if name.chars().count() > MAX_TAG_NAME_LEN {
            return Err(AttachTagCommandError::NameTooLong);
        }

        Ok(Self {
            project_id,
            name: name.to_string(),
            color: color
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty()),
        })
    }

    pub fn project_id(&self) -> i32 {
        self.project_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn color(&self) -> Option<&String> {
        self.color.as_ref()
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Error
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum AttachTagError {
    #[error("Project not found")]
    ProjectNotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<TagRepositoryError> for AttachTagError {
    fn from(err: TagRepositoryError) -> Self {
        match err {
            TagRepositoryError::ProjectNotFound => AttachTagError::ProjectNotFound,
            other => AttachTagError::RepositoryError(other.to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// Finds or creates the master tag by name, then links it to the project.
#[async_trait]
pub trait AttachTagUseCase: Send + Sync {
    async fn execute(&self, command: AttachTagCommand) -> Result<Tag, AttachTagError>;
}
