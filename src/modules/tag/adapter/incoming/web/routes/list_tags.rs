use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::tag::application::ports::incoming::use_cases::ListTagsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/tags")]
pub async fn list_tags_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tag.list.execute().await {
        Ok(tags) => ApiResponse::success(tags),

        Err(ListTagsError::RepositoryError(msg)) => {
            error!("Failed to list tags: {}", msg);
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

    use crate::modules::project::domain::entities::Tag;
    use crate::modules::tag::application::ports::incoming::use_cases::ListTagsUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_test_fixtures::sample_tag;

    struct MockListTagsUseCase {
        result: Result<Vec<Tag>, ListTagsError>,
    }

    #[async_trait]
    impl ListTagsUseCase for MockListTagsUseCase {
        async fn execute(&self) -> Result<Vec<Tag>, ListTagsError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_list_tags_success() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tags(MockListTagsUseCase {
                result: Ok(vec![sample_tag(1, "games"), sample_tag(2, "web")]),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(list_tags_handler)).await;

        let req = test::TestRequest::get().uri("/api/admin/tags").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"].as_array().unwrap().len(), 2);
        assert_eq!(body["data"][1]["name"], "web");
    }

    #[actix_web::test]
    async fn test_list_tags_repository_error() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tags(MockListTagsUseCase {
                result: Err(ListTagsError::RepositoryError("down".to_string())),
            })
            .build();

        let app =
            test::init_service(App::new().app_data(app_state).service(list_tags_handler)).await;

        let req = test::TestRequest::get().uri("/api/admin/tags").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
