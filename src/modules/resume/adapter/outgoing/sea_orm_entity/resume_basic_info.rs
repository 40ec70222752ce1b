use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::modules::resume::domain::entities::BasicInfo;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "resume_basic_info")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub full_name: String,

    #[sea_orm(nullable)]
    pub email: Option<String>,

    #[sea_orm(nullable)]
    pub phone: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub linkedin_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub github_url: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub website_url: Option<String>,

    #[sea_orm(nullable)]
    pub location: Option<String>,

    #[sea_orm(column_type = "Text", nullable)]
    pub summary: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl From<Model> for BasicInfo {
    fn from(m: Model) -> Self {
        BasicInfo {
            id: m.id,
            full_name: m.full_name,
            email: m.email,
            phone: m.phone,
            linkedin_url: m.linkedin_url,
            github_url: m.github_url,
            website_url: m.website_url,
            location: m.location,
            summary: m.summary,
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}
