use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "projects")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub name: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub subheading: Option<String>,

    pub date_started: Date,

    #[sea_orm(nullable)]
    pub date_ended: Option<Date>,

    pub is_pinned: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub poster_image_url: Option<String>,

    #[sea_orm(nullable)]
    pub color: Option<String>,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::project_components::Entity")]
    ProjectComponents,

    #[sea_orm(has_many = "super::project_tags::Entity")]
    ProjectTags,

    #[sea_orm(has_many = "super::project_tech_stack::Entity")]
    ProjectTechStack,
}

impl Related<super::project_components::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectComponents.def()
    }
}

impl Related<super::project_tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTags.def()
    }
}

impl Related<super::project_tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProjectTechStack.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}
