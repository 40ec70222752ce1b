use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, NotSet, PrimaryKeyTrait, QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::modules::resume::adapter::outgoing::sea_orm_entity::{
    resume_basic_info, resume_entries, resume_entry_bullets, resume_sections,
};
use crate::modules::resume::application::ports::outgoing::{
    BasicInfoData, BulletData, EntryData, ResumeRepository, ResumeRepositoryError, SectionData,
};
use crate::modules::resume::domain::entities::{BasicInfo, Bullet, Entry, Section};
use crate::shared::persistence::{is_foreign_key_violation, next_display_order_in};

#[derive(Clone)]
pub struct ResumeRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ResumeRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    async fn delete_row<E>(&self, id: i32) -> Result<(), ResumeRepositoryError>
    where
        E: EntityTrait,
        E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    {
        let result = E::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ResumeRepositoryError::NotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl ResumeRepository for ResumeRepositoryPostgres {
    async fn save_basic_info(
        &self,
        data: BasicInfoData,
    ) -> Result<BasicInfo, ResumeRepositoryError> {
        let existing = resume_basic_info::Entity::find()
            .order_by_asc(resume_basic_info::Column::Id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        let saved = match existing {
            Some(row) => {
                let mut model = row.into_active_model();
                apply_basic_info(&mut model, data);
                model.update(&*self.db).await
            }
            None => {
                let mut model = resume_basic_info::ActiveModel {
                    id: NotSet,
                    ..Default::default()
                };
                apply_basic_info(&mut model, data);
                model.insert(&*self.db).await
            }
        }
        .map_err(map_db_err)?;

        Ok(saved.into())
    }

    async fn create_section(&self, data: SectionData) -> Result<Section, ResumeRepositoryError> {
        let display_order = next_display_order_in::<resume_sections::Entity, _>(
            &*self.db,
            resume_sections::Column::DisplayOrder,
            Condition::all(),
        )
        .await
        .map_err(map_db_err)?;

        let model = resume_sections::ActiveModel {
            id: NotSet,
            title: Set(data.title),
            section_type: Set(data.section_type),
            display_order: Set(display_order),
            is_visible: Set(data.is_visible),
        };

        let created = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(created.into())
    }

    async fn update_section(
        &self,
        section_id: i32,
        data: SectionData,
    ) -> Result<Section, ResumeRepositoryError> {
        let model = resume_sections::ActiveModel {
            title: Set(data.title),
            section_type: Set(data.section_type),
            is_visible: Set(data.is_visible),
            ..Default::default()
        };

        let updated = resume_sections::Entity::update_many()
            .set(model)
            .filter(resume_sections::Column::Id.eq(section_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn delete_section(&self, section_id: i32) -> Result<(), ResumeRepositoryError> {
        self.delete_row::<resume_sections::Entity>(section_id).await
    }

    async fn create_entry(
        &self,
        section_id: i32,
        data: EntryData,
    ) -> Result<Entry, ResumeRepositoryError> {
        let display_order = next_display_order_in::<resume_entries::Entity, _>(
            &*self.db,
            resume_entries::Column::DisplayOrder,
            Condition::all().add(resume_entries::Column::SectionId.eq(section_id)),
        )
        .await
        .map_err(map_db_err)?;

        let model = resume_entries::ActiveModel {
            id: NotSet,
            section_id: Set(section_id),
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            description: Set(data.description),
            display_order: Set(display_order),
        };

        let created = model.insert(&*self.db).await.map_err(map_insert_err)?;
        Ok(created.into())
    }

    async fn update_entry(
        &self,
        entry_id: i32,
        data: EntryData,
    ) -> Result<Entry, ResumeRepositoryError> {
        let model = resume_entries::ActiveModel {
            title: Set(data.title),
            subtitle: Set(data.subtitle),
            location: Set(data.location),
            start_date: Set(data.start_date),
            end_date: Set(data.end_date),
            is_current: Set(data.is_current),
            description: Set(data.description),
            ..Default::default()
        };

        let updated = resume_entries::Entity::update_many()
            .set(model)
            .filter(resume_entries::Column::Id.eq(entry_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn delete_entry(&self, entry_id: i32) -> Result<(), ResumeRepositoryError> {
        self.delete_row::<resume_entries::Entity>(entry_id).await
    }

    async fn create_bullet(
        &self,
        entry_id: i32,
        data: BulletData,
    ) -> Result<Bullet, ResumeRepositoryError> {
        let display_order = next_display_order_in::<resume_entry_bullets::Entity, _>(
            &*self.db,
            resume_entry_bullets::Column::DisplayOrder,
            Condition::all().add(resume_entry_bullets::Column::EntryId.eq(entry_id)),
        )
        .await
        .map_err(map_db_err)?;

        let model = resume_entry_bullets::ActiveModel {
            id: NotSet,
            entry_id: Set(entry_id),
            content: Set(data.content),
            display_order: Set(display_order),
        };

        let created = model.insert(&*self.db).await.map_err(map_insert_err)?;
        Ok(created.into())
    }

    async fn update_bullet(
        &self,
        bullet_id: i32,
        data: BulletData,
    ) -> Result<Bullet, ResumeRepositoryError> {
        let model = resume_entry_bullets::ActiveModel {
            content: Set(data.content),
            ..Default::default()
        };

        let updated = resume_entry_bullets::Entity::update_many()
            .set(model)
            .filter(resume_entry_bullets::Column::Id.eq(bullet_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(ResumeRepositoryError::NotFound)
    }

    async fn delete_bullet(&self, bullet_id: i32) -> Result<(), ResumeRepositoryError> {
        self.delete_row::<resume_entry_bullets::Entity>(bullet_id)
            .await
    }
}

fn apply_basic_info(model: &mut resume_basic_info::ActiveModel, data: BasicInfoData) {
    model.full_name = Set(data.full_name);
    model.email = Set(data.email);
    model.phone = Set(data.phone);
    model.linkedin_url = Set(data.linkedin_url);
    model.github_url = Set(data.github_url);
    model.website_url = Set(data.website_url);
    model.location = Set(data.location);
    model.summary = Set(data.summary);
}

fn map_db_err(e: DbErr) -> ResumeRepositoryError {
    ResumeRepositoryError::DatabaseError(e.to_string())
}

fn map_insert_err(e: DbErr) -> ResumeRepositoryError {
    if is_foreign_key_violation(&e) {
        ResumeRepositoryError::ParentNotFound
    } else {
        map_db_err(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value as DbValue};
    use std::collections::BTreeMap;

    fn max_row(value: Option<i32>) -> BTreeMap<&'static str, DbValue> {
        BTreeMap::from([("max_order", DbValue::Int(value))])
    }

    fn basic_info_model(id: i32, full_name: &str) -> resume_basic_info::Model {
        resume_basic_info::Model {
            id,
            full_name: full_name.to_string(),
            email: None,
            phone: None,
            linkedin_url: None,
            github_url: None,
            website_url: None,
            location: None,
            summary: None,
        }
    }

    fn basic_info_data(full_name: &str) -> BasicInfoData {
        BasicInfoData {
            full_name: full_name.to_string(),
            email: None,
            phone: None,
            linkedin_url: None,
            github_url: None,
            website_url: None,
            location: None,
            summary: None,
        }
    }

    fn section_model(id: i32, display_order: i32) -> resume_sections::Model {
        resume_sections::Model {
            id,
            title: "Experience".to_string(),
            section_type: "experience".to_string(),
            display_order,
            is_visible: true,
        }
    }

    fn section_data() -> SectionData {
        SectionData {
            title: "Experience".to_string(),
            section_type: "experience".to_string(),
            is_visible: true,
        }
    }

    fn bullet_model(id: i32, entry_id: i32, display_order: i32) -> resume_entry_bullets::Model {
        resume_entry_bullets::Model {
            id,
            entry_id,
            content: "Led the migration".to_string(),
            display_order,
        }
    }

    #[tokio::test]
    async fn test_save_basic_info_updates_existing_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![basic_info_model(1, "Old Name")]])
            .append_query_results(vec![vec![basic_info_model(1, "Ada Lovelace")]])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let saved = repo
            .save_basic_info(basic_info_data("Ada Lovelace"))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(saved.full_name, "Ada Lovelace");
    }

    #[tokio::test]
    async fn test_save_basic_info_inserts_first_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<resume_basic_info::Model>::new()])
            .append_query_results(vec![vec![basic_info_model(1, "Ada Lovelace")]])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let saved = repo
            .save_basic_info(basic_info_data("Ada Lovelace"))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
    }

    #[tokio::test]
    async fn test_create_section_appends() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![max_row(Some(2))]])
            .append_query_results(vec![vec![section_model(7, 3)]])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let section = repo.create_section(section_data()).await.unwrap();

        assert_eq!(section.id, 7);
        assert_eq!(section.display_order, 3);
        assert!(section.entries.is_empty());
    }

    #[tokio::test]
    async fn test_update_section_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<resume_sections::Model>::new()])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_section(99, section_data()).await;

        assert!(matches!(result, Err(ResumeRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_create_entry_missing_section() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![max_row(None)]])
            .append_query_errors(vec![DbErr::Custom(
                "insert on table \"resume_entries\" violates foreign key constraint".to_string(),
            )])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_entry(
                404,
                EntryData {
                    title: "Engineer".to_string(),
                    subtitle: None,
                    location: None,
                    start_date: None,
                    end_date: None,
                    is_current: false,
                    description: None,
                },
            )
            .await;

        assert!(matches!(result, Err(ResumeRepositoryError::ParentNotFound)));
    }

    #[tokio::test]
    async fn test_create_bullet_starts_at_zero() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![max_row(None)]])
            .append_query_results(vec![vec![bullet_model(30, 5, 0)]])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let bullet = repo
            .create_bullet(
                5,
                BulletData {
                    content: "Led the migration".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(bullet.display_order, 0);
        assert_eq!(bullet.entry_id, 5);
    }

    #[tokio::test]
    async fn test_update_bullet() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![bullet_model(30, 5, 2)]])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));
        let bullet = repo
            .update_bullet(
                30,
                BulletData {
                    content: "Led the migration".to_string(),
                },
            )
            .await
            .unwrap();

        assert_eq!(bullet.display_order, 2);
    }

    #[tokio::test]
    async fn test_delete_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = ResumeRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_entry(3).await.is_ok());
        assert!(matches!(
            repo.delete_bullet(4).await,
            Err(ResumeRepositoryError::NotFound)
        ));
    }
}
