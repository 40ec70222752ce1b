use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::modules::project::application::ports::incoming::use_cases::{
    UpdateComponentError, UpdateComponentUseCase,
};
use crate::modules::project::application::ports::outgoing::component_repository::ComponentRepository;
use crate::modules::project::domain::component::{ComponentData, ComponentKind};
use crate::modules::project::domain::entities::ProjectComponent;

pub struct UpdateComponentService<R>
where
    R: ComponentRepository,
{
    repository: R,
}

impl<R> UpdateComponentService<R>
where
    R: ComponentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> UpdateComponentUseCase for UpdateComponentService<R>
where
    R: ComponentRepository + Send + Sync,
{
    async fn execute(
        &self,
        component_id: i32,
        component_data: Value,
    ) -> Result<ProjectComponent, UpdateComponentError> {
        let existing = self.repository.find_component(component_id).await?;

        let kind: ComponentKind = existing.component_type.parse().map_err(|e| {
            warn!(component_id, "Refusing to edit component: {}", e);
            UpdateComponentError::InvalidData(format!(
                "stored component type '{}' cannot be edited",
                existing.component_type
            ))
        })?;

        let component_data = ComponentData::validated_payload(kind, &component_data)
            .map_err(|e| UpdateComponentError::InvalidData(e.to_string()))?;

        let updated = self
            .repository
            .update_component_data(component_id, component_data)
            .await?;

        info!(component_id, kind = %kind, "Component data updated");

        Ok(updated)
    }
}
