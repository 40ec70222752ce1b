use actix_web::{delete, web, Responder};
use tracing::error;

use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Deletes the project together with its components, tag links and tech
/// stack links.
#[delete("/api/admin/projects/{id}")]
pub async fn delete_project_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let project_id = path.into_inner();

    match data.project.delete.execute(project_id).await {
        Ok(()) => ApiResponse::no_content(),

        Err(DeleteProjectError::NotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(DeleteProjectError::RepositoryError(e)) => {
            error!("Repository error deleting project {}: {}", project_id, e);
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::Value;

    use crate::modules::project::application::ports::incoming::use_cases::DeleteProjectUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockDeleteProjectUseCase {
        result: Result<(), DeleteProjectError>,
    }

    #[async_trait]
    impl DeleteProjectUseCase for MockDeleteProjectUseCase {
        async fn execute(&self, _project_id: i32) -> Result<(), DeleteProjectError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_delete_project_returns_no_content() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_project(MockDeleteProjectUseCase { result: Ok(()) })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/projects/1")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    }

    #[actix_web::test]
    async fn test_delete_project_not_found() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_project(MockDeleteProjectUseCase {
                result: Err(DeleteProjectError::NotFound),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(delete_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/admin/projects/1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "PROJECT_NOT_FOUND");
    }
}
