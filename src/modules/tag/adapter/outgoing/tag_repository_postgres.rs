use async_trait::async_trait;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    QueryOrder, Set,
};
use std::sync::Arc;
use tracing::debug;

use crate::modules::project::adapter::outgoing::sea_orm_entity::project_tags;
use crate::modules::project::domain::entities::Tag;
use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags::{
    ActiveModel as TagActiveModel, Column as TagColumn, Entity as TagEntity,
};
use crate::modules::tag::application::ports::outgoing::{TagRepository, TagRepositoryError};
use crate::shared::persistence::{is_foreign_key_violation, is_unique_violation};

#[derive(Debug, Clone)]
pub struct TagRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TagRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Tag>, TagRepositoryError> {
        let found = TagEntity::find()
            .filter(TagColumn::Name.eq(name))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|m| m.to_tag()))
    }
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn list_tags(&self) -> Result<Vec<Tag>, TagRepositoryError> {
        let models = TagEntity::find()
            .order_by_asc(TagColumn::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(|m| m.to_tag()).collect())
    }

    async fn find_or_create(
        &self,
        name: &str,
        color: Option<String>,
    ) -> Result<Tag, TagRepositoryError> {
        if let Some(existing) = self.find_by_name(name).await? {
            return Ok(existing);
        }

        let model = TagActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            color: Set(color),
        };

        match model.insert(&*self.db).await {
            Ok(created) => Ok(created.to_tag()),
            // Lost a race with a concurrent insert of the same name.
            Err(e) if is_unique_violation(&e) => {
                debug!(name, "Tag created concurrently, reusing it");
                self.find_by_name(name)
                    .await?
                    .ok_or(TagRepositoryError::NotFound)
            }
            Err(e) => Err(map_db_err(e)),
        }
    }

    async fn link(&self, project_id: i32, tag_id: i32) -> Result<(), TagRepositoryError> {
        let link = project_tags::ActiveModel {
            project_id: Set(project_id),
            tag_id: Set(tag_id),
        };

        project_tags::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([project_tags::Column::ProjectId, project_tags::Column::TagId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    TagRepositoryError::ProjectNotFound
                } else {
                    map_db_err(e)
                }
            })?;

        Ok(())
    }

    async fn update_color(
        &self,
        tag_id: i32,
        color: Option<String>,
    ) -> Result<Tag, TagRepositoryError> {
        let model = TagActiveModel {
            color: Set(color),
            ..Default::default()
        };

        let updated = TagEntity::update_many()
            .set(model)
            .filter(TagColumn::Id.eq(tag_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .first()
            .map(|m| m.to_tag())
            .ok_or(TagRepositoryError::NotFound)
    }

    async fn unlink(&self, project_id: i32, tag_id: i32) -> Result<(), TagRepositoryError> {
        let result = project_tags::Entity::delete_many()
            .filter(project_tags::Column::ProjectId.eq(project_id))
            .filter(project_tags::Column::TagId.eq(tag_id))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(TagRepositoryError::NotFound);
        }

        Ok(())
    }
}

fn map_db_err(e: DbErr) -> TagRepositoryError {
    TagRepositoryError::DatabaseError(e.to_string())
}
