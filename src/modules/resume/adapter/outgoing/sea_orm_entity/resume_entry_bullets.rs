use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::Bullet;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resume_entry_bullets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub entry_id: i32,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resume_entries::Entity",
        from = "Column::EntryId",
        to = "super::resume_entries::Column::Id",
        on_delete = "Cascade"
    )]
    ResumeEntries,
}

impl Related<super::resume_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeEntries.def()
    }
}

impl From<Model> for Bullet {
    fn from(m: Model) -> Self {
        Bullet {
            id: m.id,
            entry_id: m.entry_id,
            content: m.content,
            display_order: m.display_order,
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
