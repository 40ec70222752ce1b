use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::tech_stack::domain::entities::TechStackMaster;

/// Master list of technologies shared by every project.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tech_stack")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub name: String,

    #[sea_orm(nullable)]
    pub color: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub image_url: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        has_many = "crate::modules::project::adapter::outgoing::sea_orm_entity::project_tech_stack::Entity"
    )]
    ProjectTechStack,
}

impl Model {
    pub fn to_master(&self) -> TechStackMaster {
        TechStackMaster {
            id: self.id,
            name: self.name.clone(),
            color: self.color.clone(),
            image_url: self.image_url.clone(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
