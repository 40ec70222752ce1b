use async_trait::async_trait;

use crate::modules::project::domain::entities::TechStackItem;
use crate::modules::tech_stack::domain::entities::{TechStackFields, TechStackMaster, TechUsage};

#[derive(Debug, Clone, thiserror::Error)]
pub enum TechStackRepositoryError {
    #[error("Tech stack item not found")]
    NotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Another tech stack item already uses this name")]
    NameTaken,

    #[error("Tech stack item is already linked to this project")]
    AlreadyLinked,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait TechStackRepository: Send + Sync {
    async fn list_masters(&self) -> Result<Vec<TechStackMaster>, TechStackRepositoryError>;

    async fn update_master(
        &self,
        tech_id: i32,
        fields: &TechStackFields,
    ) -> Result<TechStackMaster, TechStackRepositoryError>;

    async fn usage(&self, tech_id: i32) -> Result<TechUsage, TechStackRepositoryError>;

    /// Master record with this exact name; created from `fields` when missing.
    async fn find_or_create(
        &self,
        fields: &TechStackFields,
    ) -> Result<TechStackMaster, TechStackRepositoryError>;

    /// Appends the master to the project's stack (display_order = max + 1).
    async fn link(
        &self,
        project_id: i32,
        tech: &TechStackMaster,
    ) -> Result<TechStackItem, TechStackRepositoryError>;

    async fn unlink(&self, link_id: i32) -> Result<(), TechStackRepositoryError>;
}
