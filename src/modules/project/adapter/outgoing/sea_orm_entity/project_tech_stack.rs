use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack;

/// Ordered link between a project and a master tech stack item.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_tech_stack")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub project_id: i32,

    pub tech_stack_id: i32,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::projects::Entity",
        from = "Column::ProjectId",
        to = "super::projects::Column::Id",
        on_delete = "Cascade"
    )]
    Projects,

    #[sea_orm(
        belongs_to = "crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack::Entity",
        from = "Column::TechStackId",
        to = "crate::modules::tech_stack::adapter::outgoing::sea_orm_entity::tech_stack::Column::Id",
        on_delete = "Cascade"
    )]
    TechStack,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<tech_stack::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TechStack.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
