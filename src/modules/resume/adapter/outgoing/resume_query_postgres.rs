use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    resume_basic_info, resume_entries, resume_entry_bullets, resume_sections,
};
use crate::modules::resume::application::ports::outgoing::{ResumeQuery, ResumeQueryError};
use crate::modules::resume::domain::entities::ResumeRows;

#[derive(Clone)]
pub struct ResumeQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ResumeQuery for ResumeQueryPostgres {
    async fn load_rows(&self) -> Result<ResumeRows, ResumeQueryError> {
        let db = &*self.db;

        let basic_info = resume_basic_info::Entity::find()
            .order_by_asc(resume_basic_info::Column::Id)
            .one(db)
            .await
            .map_err(map_db_err)?;

        let sections = resume_sections::Entity::find()
            .all(db)
            .await
            .map_err(map_db_err)?;

        let entries = resume_entries::Entity::find()
            .all(db)
            .await
            .map_err(map_db_err)?;

        let bullets = resume_entry_bullets::Entity::find()
            .all(db)
            .await
            .map_err(map_db_err)?;

        Ok(ResumeRows {
            basic_info: basic_info.map(Into::into),
            sections: sections.into_iter().map(Into::into).collect(),
            entries: entries.into_iter().map(Into::into).collect(),
            bullets: bullets.into_iter().map(Into::into).collect(),
        })
    }
}

fn map_db_err(e: DbErr) -> ResumeQueryError {
    ResumeQueryError::DatabaseError(e.to_string())
}
