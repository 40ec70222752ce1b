// src/modules/project/adapter/outgoing/project_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use std::collections::HashMap;
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{self, Column, Entity};
use crate::modules::project::adapter::outgoing::sea_orm_entity::{
    project_components, project_tags, project_tech_stack,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::modules::project::domain::entities::{
    Project, ProjectComponent, ProjectDetail, RelatedProject, Tag, TechStackItem,
};
use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;
use crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack;

// ============================================================================
// Query Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn tags_by_project(
        &self,
        project_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Tag>>, ProjectQueryError> {
        let rows = project_tags::Entity::find()
            .filter(project_tags::Column::ProjectId.is_in(project_ids.to_vec()))
            .find_also_related(tags::Entity)
            .order_by_asc(tags::Column::Name)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut grouped: HashMap<i32, Vec<Tag>> = HashMap::new();
        for (link, tag) in rows {
            if let Some(tag) = tag {
                grouped.entry(link.project_id).or_default().push(tag.to_tag());
            }
        }

        Ok(grouped)
    }

    async fn tech_by_project(
        &self,
        project_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<TechStackItem>>, ProjectQueryError> {
        let rows = project_tech_stack::Entity::find()
            .filter(project_tech_stack::Column::ProjectId.is_in(project_ids.to_vec()))
            .find_also_related(tech_stack::Entity)
            .order_by_asc(project_tech_stack::Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let mut grouped: HashMap<i32, Vec<TechStackItem>> = HashMap::new();
        for (link, tech) in rows {
            if let Some(tech) = tech {
                grouped
                    .entry(link.project_id)
                    .or_default()
                    .push(to_tech_item(link, tech));
            }
        }

        Ok(grouped)
    }
}

#[async_trait]
impl ProjectQuery for ProjectQueryPostgres {
    async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError> {
        let models = Entity::find()
            .order_by_asc(Column::DisplayOrder)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        if models.is_empty() {
            return Ok(vec![]);
        }

        let ids: Vec<i32> = models.iter().map(|m| m.id).collect();
        let mut tags = self.tags_by_project(&ids).await?;
        let mut tech = self.tech_by_project(&ids).await?;

        Ok(models
            .into_iter()
            .map(|m| {
                let project_tags = tags.remove(&m.id).unwrap_or_default();
                let project_tech = tech.remove(&m.id).unwrap_or_default();
                model_to_project(m, project_tags, project_tech)
            })
            .collect())
    }

    async fn get_project_detail(
        &self,
        project_id: i32,
    ) -> Result<ProjectDetail, ProjectQueryError> {
        let model = Entity::find_by_id(project_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .ok_or(ProjectQueryError::NotFound)?;

        let tags = self
            .tags_by_project(&[project_id])
            .await?
            .remove(&project_id)
            .unwrap_or_default();

        let tech = self
            .tech_by_project(&[project_id])
            .await?
            .remove(&project_id)
            .unwrap_or_default();

        let components = project_components::Entity::find()
            .filter(project_components::Column::ProjectId.eq(project_id))
            .order_by_asc(project_components::Column::DisplayOrder)
            .order_by_asc(project_components::Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(to_component)
            .collect();

        let color = model.color.clone();

        Ok(ProjectDetail {
            project: model_to_project(model, tags, tech),
            color,
            components,
            related_projects: vec![],
        })
    }

    async fn find_related(
        &self,
        project_ids: &[i32],
    ) -> Result<Vec<RelatedProject>, ProjectQueryError> {
        if project_ids.is_empty() {
            return Ok(vec![]);
        }

        let mut found: HashMap<i32, projects::Model> = Entity::find()
            .filter(Column::Id.is_in(project_ids.to_vec()))
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        // Keep the caller's order.
        Ok(project_ids
            .iter()
            .filter_map(|id| found.remove(id))
            .map(|m| RelatedProject {
                id: m.id,
                name: m.name,
                poster_image_url: m.poster_image_url,
            })
            .collect())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_project(
    model: projects::Model,
    tags: Vec<Tag>,
    tech_stack: Vec<TechStackItem>,
) -> Project {
    Project {
        id: model.id,
        name: model.name,
        subheading: model.subheading,
        date_started: model.date_started,
        date_ended: model.date_ended,
        is_pinned: model.is_pinned,
        poster_image_url: model.poster_image_url,
        display_order: model.display_order,
        tags,
        tech_stack,
    }
}

fn to_tech_item(link: project_tech_stack::Model, tech: tech_stack::Model) -> TechStackItem {
    TechStackItem {
        link_id: link.id,
        tech_id: tech.id,
        name: tech.name,
        color: tech.color,
        image_url: tech.image_url,
        display_order: link.display_order,
    }
}

pub(crate) fn to_component(model: project_components::Model) -> ProjectComponent {
    ProjectComponent {
        id: model.id,
        project_id: model.project_id,
        component_type: model.component_type,
        component_data: model.component_data,
        display_order: model.display_order,
    }
}

fn map_db_err(e: DbErr) -> ProjectQueryError {
    ProjectQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
