use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, NotSet,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;

use crate::modules::project::adapter::outgoing::sea_orm_entity::{projects, project_tech_stack};
use crate::modules::project::domain::entities::TechStackItem;
use crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack::{
    ActiveModel as TechActiveModel, Column as TechColumn, Entity as TechEntity,
};
use crate::modules::tech_stack::application::ports::outgoing::{
    TechStackRepository, TechStackRepositoryError,
};
use crate::modules::tech_stack::domain::entities::{
    TechStackFields, TechStackMaster, TechUsage, TechUsageProject,
};
use crate::shared::persistence::{
    is_foreign_key_violation, is_unique_violation, next_display_order_in,
};

#[derive(Debug, Clone)]
pub struct TechStackRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TechStackRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_by_name(
        &self,
        name: &str,
    ) -> Result<Option<TechStackMaster>, TechStackRepositoryError> {
        let found = TechEntity::find()
            .filter(TechColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_master()))
    }
}

#[async_trait]
impl TechStackRepository for TechStackRepositoryPostgres {
    async fn list_masters(&self) -> Result<Vec<TechStackMaster>, TechStackRepositoryError> {
        let models = TechEntity::find()
            .order_by_asc(TechColumn::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_master()).collect())
    }

    async fn update_master(
        &self,
        tech_id: i32,
        fields: &TechStackFields,
    ) -> Result<TechStackMaster, TechStackRepositoryError> {
        let model = TechActiveModel {
            name: Set(fields.name().to_string()),
            color: Set(fields.color().cloned()),
            image_url: Set(fields.image_url().cloned()),
            ..Default::default()
        };

        let updated = TechEntity::update_many()
            .set(model)
            .filter(TechColumn::Id.eq(tech_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    TechStackRepositoryError::NameTaken
                } else {
                    map_db_err(e)
                }
            })?;

        updated
            .first()
            .map(|m| m.to_master())
            .ok_or(TechStackRepositoryError::NotFound)
    }

    async fn usage(&self, tech_id: i32) -> Result<TechUsage, TechStackRepositoryError> {
        TechEntity::find_by_id(tech_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(TechStackRepositoryError::NotFound)?;

        let rows = project_tech_stack::Entity::find()
            .filter(project_tech_stack::Column::TechStackId.eq(tech_id))
            .find_also_related(projects::Entity)
            .order_by_asc(projects::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let projects: Vec<TechUsageProject> = rows
            .into_iter()
            .filter_map(|(_, project)| project)
            .map(|p| TechUsageProject {
                id: p.id,
                name: p.name,
            })
            .collect();

        Ok(TechUsage {
            tech_id,
            count: projects.len(),
            projects,
        })
    }

    async fn find_or_create(
        &self,
        fields: &TechStackFields,
    ) -> Result<TechStackMaster, TechStackRepositoryError> {
        if let Some(existing) = self.find_by_name(fields.name()).await? {
            return Ok(existing);
        }

        let model = TechActiveModel {
            id: NotSet,
            name: Set(fields.name().to_string()),
            color: Set(fields.color().cloned()),
            image_url: Set(fields.image_url().cloned()),
        };

        match model.insert(&*self.db).await {
            Ok(created) => Ok(created.to_master()),
            Err(e) if is_unique_violation(&e) => {
                debug!(name = fields.name(), "Tech stack item created concurrently, reusing it");
                self.find_by_name(fields.name())
                    .await?
                    .ok_or(TechStackRepositoryError::NotFound)
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn link(
        &self,
        project_id: i32,
        tech: &TechStackMaster,
    ) -> Result<TechStackItem, TechStackRepositoryError> {
        let display_order = next_display_order_in::<project_tech_stack::Entity, _>(
            &*self.db,
            project_tech_stack::Column::DisplayOrder,
            Condition::all().add(project_tech_stack::Column::ProjectId.eq(project_id)),
        )
        .await
        .map_err(map_db_err)?;

        let link = project_tech_stack::ActiveModel {
            id: NotSet,
            project_id: Set(project_id),
            tech_stack_id: Set(tech.id),
            display_order: Set(display_order),
        };

        let created = link.insert(&*self.db).await.map_err(|e| {
            if is_foreign_key_violation(&e) {
                TechStackRepositoryError::ProjectNotFound
            } else if is_unique_violation(&e) {
                TechStackRepositoryError::AlreadyLinked
            } else {
                map_db_err(e)
            }
        })?;

        Ok(TechStackItem {
            link_id: created.id,
            tech_id: tech.id,
            name: tech.name.clone(),
            color: tech.color.clone(),
            image_url: tech.image_url.clone(),
            display_order: created.display_order,
        })
    }

    async fn unlink(&self, link_id: i32) -> Result<(), TechStackRepositoryError> {
        let result = project_tech_stack::Entity::delete_by_id(link_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TechStackRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TechStackRepositoryError {
    TechStackRepositoryError::DatabaseError(e.to_string())
}
