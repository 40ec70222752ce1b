use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::tag::adapter::outgoing::sea_orm_entity::tags;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "project_tags")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub project_id: i32,

    #[sea_orm(primary_key, auto_increment = false)]
    pub tag_id: i32,
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
        belongs_to = "crate::modules::tag::adapter::outgoing::sea_orm_entity::tags::Entity",
        from = "Column::TagId",
        to = "crate::modules::tag::adapter::outgoing::sea_orm_entity::tags::Column::Id",
        on_delete = "Cascade"
    )]
    Tags,
}

impl Related<super::projects::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Projects.def()
    }
}

impl Related<tags::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tags.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
