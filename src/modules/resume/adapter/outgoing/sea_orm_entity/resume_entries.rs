use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::Entry;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resume_entries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub section_id: i32,

    pub title: String,

    #[sea_orm(nullable)]
    pub subtitle: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    #[sea_orm(nullable)]
    pub start_date: Option<Date>,

    #[sea_orm(nullable)]
    pub end_date: Option<Date>,

    pub is_current: bool,

    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::resume_sections::Entity",
        from = "Column::SectionId",
        to = "super::resume_sections::Column::Id",
        on_delete = "Cascade"
    )]
    ResumeSections,

    #[sea_orm(has_many = "super::resume_entry_bullets::Entity")]
    ResumeEntryBullets,
}

impl Related<super::resume_sections::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeSections.def()
    }
}

impl Related<super::resume_entry_bullets::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ResumeEntryBullets.def()
    }
}

impl From<Model> for Entry {
    fn from(m: Model) -> Self {
        Entry {
            id: m.id,
            section_id: m.section_id,
            title: m.title,
            subtitle: m.subtitle,
            location: m.location,
            start_date: m.start_date,
            end_date: m.end_date,
            is_current: m.is_current,
            description: m.description,
            display_order: m.display_order,
            bullets: Vec::new(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
