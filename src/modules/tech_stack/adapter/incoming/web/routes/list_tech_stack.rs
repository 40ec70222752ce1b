use actix_web::{get, web, Responder};
use tracing::error;

use crate::modules::tech_stack::application::ports::incoming::use_cases::ListTechStackError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/admin/tech-stack")]
pub async fn list_tech_stack_handler(data: web::Data<AppState>) -> impl Responder {
    match data.tech_stack.list.execute().await {
        Ok(masters) => ApiResponse::success(masters),

        Err(ListTechStackError::RepositoryError(msg)) => {
            error!("Failed to list tech stack: {}", msg);
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

    use crate::modules::tech_stack::application::ports::incoming::use_cases::ListTechStackUseCase;
    use crate::modules::tech_stack::domain::entities::TechStackMaster;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockListTechStackUseCase {
        result: Result<Vec<TechStackMaster>, ListTechStackError>,
    }

    #[async_trait]
    impl ListTechStackUseCase for MockListTechStackUseCase {
        async fn execute(&self) -> Result<Vec<TechStackMaster>, ListTechStackError> {
            self.result.clone()
        }
    }

    #[actix_web::test]
    async fn test_list_tech_stack_success() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tech_stack(MockListTechStackUseCase {
                result: Ok(vec![TechStackMaster {
                    id: 1,
                    name: "Rust".to_string(),
                    color: Some("#dea584".to_string()),
                    image_url: None,
                }]),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_tech_stack_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/tech-stack")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"][0]["name"], "Rust");
        assert_eq!(body["data"][0]["image_url"], Value::Null);
    }

    #[actix_web::test]
    async fn test_list_tech_stack_error() {
        let app_state = TestAppStateBuilder::default()
            .with_list_tech_stack(MockListTechStackUseCase {
                result: Err(ListTechStackError::RepositoryError("down".to_string())),
            })
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(list_tech_stack_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/admin/tech-stack")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
