use async_trait::async_trait;

use crate::modules::project::domain::entities::Tag;

#[derive(Debug, Clone, thiserror::Error)]
pub enum TagRepositoryError {
    #[error("Tag not found")]
    NotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Master tag list plus the project links.
#[async_trait]
pub trait TagRepository: Send + Sync {
    /// All master tags ordered by name.
    async fn list_tags(&self) -> Result<Vec<Tag>, TagRepositoryError>;

    /// Returns the tag with exactly this name, creating it when missing. An
    /// existing tag keeps its colour.
    async fn find_or_create(
        &self,
        name: &str,
        color: Option<String>,
    ) -> Result<Tag, TagRepositoryError>;

    /// Links tag and project. Linking twice is a no-op.
    async fn link(&self, project_id: i32, tag_id: i32) -> Result<(), TagRepositoryError>;

    async fn update_color(
        &self,
        tag_id: i32,
        color: Option<String>,
    ) -> Result<Tag, TagRepositoryError>;

    /// Removes the link only; the master tag stays.
    async fn unlink(&self, project_id: i32, tag_id: i32) -> Result<(), TagRepositoryError>;
}
