use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    LinkTechStackCommand, LinkTechStackError,
};
use crate::modules::tech_stack::domain::entities::TechStackFields;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LinkTechStackRequest {
    pub project_id: i32,
    pub name: String,
    pub color: Option<String>,
    pub image_url: Option<String>,
}

#[post("/api/admin/projects/tech-stack")]
pub async fn link_tech_stack_handler(
    payload: web::Json<LinkTechStackRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();

    let fields = match TechStackFields::new(payload.name, payload.color, payload.image_url) {
        Ok(fields) => fields,
        Err(e) => return ApiResponse::validation_error(&e.to_string()),
    };
    let command = LinkTechStackCommand::new(payload.project_id, fields);

    match data.tech_stack.link.execute(command).await {
        Ok(item) => ApiResponse::created(item),

        Err(LinkTechStackError::ProjectNotFound) => {
            ApiResponse::not_found("PROJECT_NOT_FOUND", "Project not found")
        }

        Err(e @ LinkTechStackError::AlreadyLinked) => {
            ApiResponse::conflict("TECH_STACK_ALREADY_LINKED", &e.to_string())
        }

        Err(LinkTechStackError::RepositoryError(msg)) => {
            error!(
                "Failed to link tech stack item to project {}: {}",
                payload.project_id, msg
            );
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    use crate::modules::project::domain::entities::TechStackItem;
    use crate::modules::tech_stack::application::ports::incoming::use_cases::LinkTechStackUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::project_test_fixtures::sample_tech;

    #[derive(Clone)]
    struct MockLinkTechStackUseCase {
        result: Result<TechStackItem, LinkTechStackError>,
        received: Arc<Mutex<Option<LinkTechStackCommand>>>,
    }

    impl MockLinkTechStackUseCase {
        fn new(result: Result<TechStackItem, LinkTechStackError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl LinkTechStackUseCase for MockLinkTechStackUseCase {
        async fn execute(
            &self,
            command: LinkTechStackCommand,
        ) -> Result<TechStackItem, LinkTechStackError> {
            *self.received.lock().unwrap() = Some(command);
            self.result.clone()
        }
    }

    async fn post(uc: MockLinkTechStackUseCase, body: Value) -> (StatusCode, Value) {
        let app_state = TestAppStateBuilder::default()
            .with_link_tech_stack(uc)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .service(link_tech_stack_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/admin/projects/tech-stack")
            .set_json(body)
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_link_tech_stack_created() {
        let uc = MockLinkTechStackUseCase::new(Ok(sample_tech(3, "Rust", 2)));
        let received = uc.received.clone();

        let (status, body) = post(uc, json!({ "project_id": 4, "name": " Rust " })).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"]["display_order"], 2);

        let command = received.lock().unwrap().clone().unwrap();
        assert_eq!(command.project_id(), 4);
        assert_eq!(command.fields().name(), "Rust");
    }

    #[actix_web::test]
    async fn test_link_tech_stack_rejects_blank_name() {
        let uc = MockLinkTechStackUseCase::new(Ok(sample_tech(3, "Rust", 2)));
        let received = uc.received.clone();

        let (status, _) = post(uc, json!({ "project_id": 4, "name": "" })).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(received.lock().unwrap().is_none());
    }

    #[actix_web::test]
    async fn test_link_tech_stack_already_linked() {
        let uc = MockLinkTechStackUseCase::new(Err(LinkTechStackError::AlreadyLinked));

        let (status, body) = post(uc, json!({ "project_id": 4, "name": "Rust" })).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["error"]["code"], "TECH_STACK_ALREADY_LINKED");
    }

    #[actix_web::test]
    async fn test_link_tech_stack_project_not_found() {
        let uc = MockLinkTechStackUseCase::new(Err(LinkTechStackError::ProjectNotFound));

        let (status, _) = post(uc, json!({ "project_id": 99, "name": "Rust" })).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
