use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::Section;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resume_sections")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub section_type: String,

    pub display_order: i32,

    pub is_visible: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::resume_entries::Entity")]
    ResumeEntries,
}

impl Related<super::resume_entries::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeEntries.def()
    }
}

impl From<Model> for Section {
    fn from(m: Model) -> Self {
        Section {
            id: m.id,
            title: m.title,
            section_type: m.section_type,
            display_order: m.display_order,
            is_visible: m.is_visible,
            entries: Vec::new(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
