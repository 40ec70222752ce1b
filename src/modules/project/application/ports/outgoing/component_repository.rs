// src/modules/project/application/ports/outgoing/component_repository.rs

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::project::domain::component::ComponentKind;
use crate::modules::project::domain::entities::ProjectComponent;

#[derive(Debug, Clone, PartialEq)]
pub struct NewComponent {
    pub project_id: i32,
    pub kind: ComponentKind,
    /// Already validated against `kind` and unwrapped to an object.
    pub component_data: Value,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ComponentRepositoryError {
    #[error("Component not found")]
    NotFound,

    #[error("Project not found")]
    ProjectNotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

/// Write side for project components. A stored component keeps its kind
/// for life.
#[async_trait]
pub trait ComponentRepository: Send + Sync {
    async fn find_component(
        &self,
        component_id: i32,
    ) -> Result<ProjectComponent, ComponentRepositoryError>;

    /// Appends after the project's last component.
    async fn create_component(
        &self,
        data: NewComponent,
    ) -> Result<ProjectComponent, ComponentRepositoryError>;

    async fn update_component_data(
        &self,
        component_id: i32,
        component_data: Value,
    ) -> Result<ProjectComponent, ComponentRepositoryError>;

    async fn delete_component(&self, component_id: i32) -> Result<(), ComponentRepositoryError>;
}
