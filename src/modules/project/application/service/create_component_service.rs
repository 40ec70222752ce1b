use async_trait::async_trait;
use tracing::info;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateComponentCommand, CreateComponentError, CreateComponentUseCase,
};
use crate::modules::project::application::ports::outgoing::component_repository::{
    ComponentRepository, NewComponent,
};
use crate::modules::project::domain::component::{ComponentData, ComponentKind};
use crate::modules::project::domain::entities::ProjectComponent;

pub struct CreateComponentService<R>
where
    R: ComponentRepository,
{
    repository: R,
}

impl<R> CreateComponentService<R>
where
    R: ComponentRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> CreateComponentUseCase for CreateComponentService<R>
where
    R: ComponentRepository + Send + Sync,
{
    async fn execute(
        &self,
        command: CreateComponentCommand,
    ) -> Result<ProjectComponent, CreateComponentError> {
        let kind: ComponentKind = command
            .component_type
            .trim()
            .parse()
            .map_err(|_| CreateComponentError::UnknownType(command.component_type.clone()))?;

        let component_data = ComponentData::validated_payload(kind, &command.component_data)
            .map_err(|e| CreateComponentError::InvalidData(e.to_string()))?;

        let created = self
            .repository
            .create_component(NewComponent {
                project_id: command.project_id,
                kind,
                component_data,
            })
            .await?;

        info!(
            component_id = created.id,
            project_id = created.project_id,
            kind = %kind,
            "Component created"
        );

        Ok(created)
    }
}
