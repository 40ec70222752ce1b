use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, NotSet,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::modules::project::adapter::outgoing::sea_orm_entity::projects::{
    self, ActiveModel, Column, Entity,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectRepository, ProjectRepositoryError, ProjectResult,
};
use crate::shared::persistence::next_display_order_in;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn create_project(
        &self,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let display_order =
            next_display_order_in::<Entity, _>(&*self.db, Column::DisplayOrder, Condition::all())
                .await
                .map_err(map_db_err)?;

        let model = ActiveModel {
            id: NotSet,
            display_order: Set(display_order),
            ..fields(data)
        };

        let result = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(result))
    }

    async fn update_project(
        &self,
        project_id: i32,
        data: ProjectData,
    ) -> Result<ProjectResult, ProjectRepositoryError> {
        let results = Entity::update_many()
            .set(fields(data))
            .filter(Column::Id.eq(project_id))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        let result = results
            .into_iter()
            .next()
            .ok_or(ProjectRepositoryError::NotFound)?;

        Ok(model_to_result(result))
    }

    async fn delete_project(&self, project_id: i32) -> Result<(), ProjectRepositoryError> {
        let result = Entity::delete_by_id(project_id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ProjectRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Editable columns only; `id` and `display_order` stay unset.
fn fields(data: ProjectData) -> ActiveModel {
    ActiveModel {
        id: NotSet,
        name: Set(data.name),
        subheading: Set(data.subheading),
        date_started: Set(data.date_started),
        date_ended: Set(data.date_ended),
        is_pinned: Set(data.is_pinned),
        poster_image_url: Set(data.poster_image_url),
        color: Set(data.color),
        display_order: NotSet,
    }
}

fn model_to_result(model: projects::Model) -> ProjectResult {
    ProjectResult {
        id: model.id,
        name: model.name,
        subheading: model.subheading,
        date_started: model.date_started,
        date_ended: model.date_ended,
        is_pinned: model.is_pinned,
        poster_image_url: model.poster_image_url,
        color: model.color,
        display_order: model.display_order,
    }
}

fn map_db_err(e: DbErr) -> ProjectRepositoryError {
    ProjectRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
    use std::collections::BTreeMap;

    use crate::tests::support::project_test_fixtures::{date, sample_project_data};

    fn project_model(id: i32, name: &str, display_order: i32) -> projects::Model {
        projects::Model {
            id,
            name: name.to_string(),
            subheading: Some("Minimax in Rust".to_string()),
            date_started: date(2023, 1, 1),
            date_ended: None,
            is_pinned: false,
            poster_image_url: None,
            color: None,
            display_order,
        }
    }

    fn max_row(value: Option<i32>) -> BTreeMap<&'static str, Value> {
        BTreeMap::from([("max_order", Value::Int(value))])
    }

    #[tokio::test]
    async fn test_create_project_appends_to_end() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![max_row(Some(2))]])
            .append_query_results(vec![vec![project_model(7, "Chess AI", 3)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .create_project(sample_project_data("Chess AI"))
            .await
            .unwrap();

        assert_eq!(result.id, 7);
        assert_eq!(result.display_order, 3);
        assert_eq!(result.subheading.as_deref(), Some("Minimax in Rust"));
    }

    #[tokio::test]
    async fn test_update_project_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<projects::Model>::new()])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.update_project(9, sample_project_data("x")).await;

        assert!(matches!(result, Err(ProjectRepositoryError::NotFound)));
    }

    #[tokio::test]
    async fn test_update_project_returns_updated_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![project_model(1, "Chess Engine", 0)]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_project(1, sample_project_data("Chess Engine"))
            .await
            .unwrap();

        assert_eq!(result.name, "Chess Engine");
    }

    #[tokio::test]
    async fn test_delete_project() {
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

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));

        assert!(repo.delete_project(1).await.is_ok());
        assert!(matches!(
            repo.delete_project(1).await,
            Err(ProjectRepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_create_project_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom("connection reset".to_string())])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_project(sample_project_data("x")).await;

        assert!(matches!(result, Err(ProjectRepositoryError::DatabaseError(_))));
    }
}
