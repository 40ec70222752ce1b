use actix_web::{delete, post, put, web, Responder};
use serde::Deserialize;

use crate::modules::resume::adapter::incoming::web::routes::write_error::{
    map_write_error, Resource,
};
use crate::modules::resume::application::ports::outgoing::BulletData;
use crate::shared::api::ApiResponse;
use crate::AppState;

const BULLET: Resource = Resource {
    name: "Bullet",
    not_found_code: "BULLET_NOT_FOUND",
    parent_not_found_code: "ENTRY_NOT_FOUND",
};

#[derive(Debug, Deserialize)]
pub struct CreateBulletRequest {
    pub entry_id: i32,
    pub content: String,
}

#[post("/api/admin/resume/bullets")]
pub async fn create_bullet_handler(
    payload: web::Json<CreateBulletRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let payload = payload.into_inner();
    let bullet = BulletData {
        content: payload.content,
    };

    match data.resume.bullets.create(payload.entry_id, bullet).await {
        Ok(created) => ApiResponse::created(created),
        Err(err) => map_write_error(&BULLET, err),
    }
}

#[put("/api/admin/resume/bullets/{id}")]
pub async fn update_bullet_handler(
    path: web::Path<i32>,
    payload: web::Json<BulletData>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .resume
        .bullets
        .update(path.into_inner(), payload.into_inner())
        .await
    {
        Ok(bullet) => ApiResponse::success(bullet),
        Err(err) => map_write_error(&BULLET, err),
    }
}

#[delete("/api/admin/resume/bullets/{id}")]
pub async fn delete_bullet_handler(
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.resume.bullets.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::no_content(),
        Err(err) => map_write_error(&BULLET, err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use async_trait::async_trait;
    use serde_json::{json, Value};

    use crate::modules::resume::application::ports::incoming::use_cases::{
        ManageBulletsUseCase, ResumeWriteError,
    };
    use crate::modules::resume::domain::entities::Bullet;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    struct MockBullets {
        error: Option<ResumeWriteError>,
    }

    impl MockBullets {
        fn outcome(&self, bullet: Bullet) -> Result<Bullet, ResumeWriteError> {
            match &self.error {
                Some(err) => Err(err.clone()),
                None => Ok(bullet),
            }
        }
    }

    #[async_trait]
    impl ManageBulletsUseCase for MockBullets {
        async fn create(&self, entry_id: i32, data: BulletData) -> Result<Bullet, ResumeWriteError> {
            self.outcome(Bullet {
                id: 40,
                entry_id,
                content: data.content,
                display_order: 3,
            })
        }

        async fn update(&self, bullet_id: i32, data: BulletData) -> Result<Bullet, ResumeWriteError> {
            self.outcome(Bullet {
                id: bullet_id,
                entry_id: 1,
                content: data.content,
                display_order: 0,
            })
        }

        async fn delete(&self, _bullet_id: i32) -> Result<(), ResumeWriteError> {
            self.error.clone().map_or(Ok(()), Err)
        }
    }

    async fn call(uc: MockBullets, req: test::TestRequest) -> (StatusCode, Option<Value>) {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().with_manage_bullets(uc).build())
                .service(create_bullet_handler)
                .service(update_bullet_handler)
                .service(delete_bullet_handler),
        )
        .await;

        let resp = test::call_service(&app, req.to_request()).await;
        let status = resp.status();
        if status == StatusCode::NO_CONTENT {
            return (status, None);
        }

        (status, Some(test::read_body_json(resp).await))
    }

    #[actix_web::test]
    async fn test_create_bullet() {
        let (status, body) = call(
            MockBullets { error: None },
            test::TestRequest::post()
                .uri("/api/admin/resume/bullets")
                .set_json(json!({ "entry_id": 6, "content": "Cut build times by half" })),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        let body = body.unwrap();
        assert_eq!(body["data"]["entry_id"], 6);
        assert_eq!(body["data"]["display_order"], 3);
    }

    #[actix_web::test]
    async fn test_create_bullet_missing_entry() {
        let (status, body) = call(
            MockBullets {
                error: Some(ResumeWriteError::ParentNotFound),
            },
            test::TestRequest::post()
                .uri("/api/admin/resume/bullets")
                .set_json(json!({ "entry_id": 99, "content": "x" })),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.unwrap()["error"]["code"], "ENTRY_NOT_FOUND");
    }

    #[actix_web::test]
    async fn test_update_bullet_validation_error() {
        let (status, _) = call(
            MockBullets {
                error: Some(ResumeWriteError::Validation(
                    "content must not be empty".to_string(),
                )),
            },
            test::TestRequest::put()
                .uri("/api/admin/resume/bullets/2")
                .set_json(json!({ "content": "" })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_bullet() {
        let (status, body) = call(
            MockBullets { error: None },
            test::TestRequest::delete().uri("/api/admin/resume/bullets/2"),
        )
        .await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert!(body.is_none());
    }
}
