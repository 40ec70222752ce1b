use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, NotSet,
    QueryFilter, Set,
};
use serde_json::Value;
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::project_query_postgres::to_component;
use crate::modules::project::adapter::outgoing::sea_orm_entity::project_components::{
    ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::component_repository::{
    ComponentRepository, ComponentRepositoryError, NewComponent,
};
use crate::modules::project::domain::entities::ProjectComponent;
use crate::shared::persistence::{is_foreign_key_violation, next_display_order_in};

#[derive(Clone)]
pub struct ComponentRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ComponentRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ComponentRepository for ComponentRepositoryPostgres {
    async fn find_component(
        &self,
        component_id: i32,
    ) -> Result<ProjectComponent, ComponentRepositoryError> {
        Entity::find_by_id(component_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(to_component)
            .ok_or(ComponentRepositoryError::NotFound)
    }

    async fn create_component(
        &self,
        data: NewComponent,
    ) -> Result<ProjectComponent, ComponentRepositoryError> {
        let display_order = next_display_order_in::<Entity, _>(
            &*self.db,
            Column::DisplayOrder,
            Condition::all().add(Column::ProjectId.eq(data.project_id)),
        )
        .await
        .map_err(map_db_err)?;

        let model = ActiveModel {
            id: NotSet,
            project_id: Set(data.project_id),
            component_type: Set(data.kind.as_str().to_string()),
            component_data: Set(data.component_data),
            display_order: Set(display_order),
        };

        let result = model.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                ComponentRepositoryError::ProjectNotFound
            } else {
                map_db_err(e)
            }
        })?;

        Ok(to_component(result))
    }

    async fn update_component_data(
        &self,
        component_id: i32,
        component_data: Value,
    ) -> Result<ProjectComponent, ComponentRepositoryError> {
        let model = ActiveModel {
            component_data: Set(component_data),
            ..Default::default()
        };

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(component_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .map(to_component)
            .ok_or(ComponentRepositoryError::NotFound)
    }

    async fn delete_component(&self, component_id: i32) -> Result<(), ComponentRepositoryError> {
        let result = Entity::delete_by_id(component_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ComponentRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> ComponentRepositoryError {
    ComponentRepositoryError::DatabaseError(e.to_string())
}
