pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::project;
pub use modules::resume;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::modules::project::adapter::outgoing::{
    ComponentRepositoryPostgres, ProjectQueryPostgres, ProjectRepositoryPostgres,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::project::application::service::{
    CreateComponentService, CreateProjectService, DeleteComponentService, DeleteProjectService,
    GetProjectDetailService, GetProjectPageService, GetProjectsService, UpdateComponentService,
    UpdateProjectService,
};
use crate::modules::reorder::adapter::outgoing::ReorderRepositoryPostgres;
use crate::modules::reorder::application::ports::incoming::use_cases::ReorderUseCase;
use crate::modules::reorder::application::service::ReorderService;
use crate::modules::resume::adapter::outgoing::{ResumeQueryPostgres, ResumeRepositoryPostgres};
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::resume::application::service::{
    GetResumeService, ManageBulletsService, ManageEntriesService, ManageSectionsService,
    UpdateBasicInfoService,
};
use crate::modules::tag::adapter::outgoing::TagRepositoryPostgres;
use crate::modules::tag::application::service::{
    AttachTagService, DetachTagService, ListTagsService, UpdateTagService,
};
use crate::modules::tag::application::tag_use_cases::TagUseCases;
use crate::modules::tech_stack::adapter::outgoing::TechStackRepositoryPostgres;
use crate::modules::tech_stack::application::service::{
    GetTechStackUsageService, LinkTechStackService, ListTechStackService,
    UnlinkTechStackService, UpdateTechStackService,
};
use crate::modules::tech_stack::application::tech_stack_use_cases::TechStackUseCases;
use crate::shared::api::{custom_json_config, custom_query_config};

use actix_web::{web, App, HttpServer};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub project: ProjectUseCases,
    pub tag: TagUseCases,
    pub tech_stack: TechStackUseCases,
    pub resume: ResumeUseCases,
    pub reorder: Arc<dyn ReorderUseCase + Send + Sync>,
}

impl AppState {
    #[cfg(not(tarpaulin_include))]
    fn from_db(db: &Arc<DatabaseConnection>) -> Self {
        let project_query = ProjectQueryPostgres::new(Arc::clone(db));
        let project_repo = ProjectRepositoryPostgres::new(Arc::clone(db));
        let component_repo = ComponentRepositoryPostgres::new(Arc::clone(db));
        let tag_repo = TagRepositoryPostgres::new(Arc::clone(db));
        let tech_stack_repo = TechStackRepositoryPostgres::new(Arc::clone(db));
        let resume_query = ResumeQueryPostgres::new(Arc::clone(db));
        let resume_repo = ResumeRepositoryPostgres::new(Arc::clone(db));

        Self {
            project: ProjectUseCases {
                get_list: Arc::new(GetProjectsService::new(project_query.clone())),
                get_detail: Arc::new(GetProjectDetailService::new(project_query.clone())),
                get_page: Arc::new(GetProjectPageService::new(project_query)),
                create: Arc::new(CreateProjectService::new(project_repo.clone())),
                update: Arc::new(UpdateProjectService::new(project_repo.clone())),
                delete: Arc::new(DeleteProjectService::new(project_repo)),
                create_component: Arc::new(CreateComponentService::new(component_repo.clone())),
                update_component: Arc::new(UpdateComponentService::new(component_repo.clone())),
                delete_component: Arc::new(DeleteComponentService::new(component_repo)),
            },
            tag: TagUseCases {
                list: Arc::new(ListTagsService::new(tag_repo.clone())),
                attach: Arc::new(AttachTagService::new(tag_repo.clone())),
                update: Arc::new(UpdateTagService::new(tag_repo.clone())),
                detach: Arc::new(DetachTagService::new(tag_repo)),
            },
            tech_stack: TechStackUseCases {
                list: Arc::new(ListTechStackService::new(tech_stack_repo.clone())),
                update: Arc::new(UpdateTechStackService::new(tech_stack_repo.clone())),
                usage: Arc::new(GetTechStackUsageService::new(tech_stack_repo.clone())),
                link: Arc::new(LinkTechStackService::new(tech_stack_repo.clone())),
                unlink: Arc::new(UnlinkTechStackService::new(tech_stack_repo)),
            },
            resume: ResumeUseCases {
                get: Arc::new(GetResumeService::new(resume_query)),
                update_basic_info: Arc::new(UpdateBasicInfoService::new(resume_repo.clone())),
                sections: Arc::new(ManageSectionsService::new(resume_repo.clone())),
                entries: Arc::new(ManageEntriesService::new(resume_repo.clone())),
                bullets: Arc::new(ManageBulletsService::new(resume_repo)),
            },
            reorder: Arc::new(ReorderService::new(ReorderRepositoryPostgres::new(
                Arc::clone(db),
            ))),
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env();

    let mut opt = ConnectOptions::new(config.database_url.clone());
    opt.max_connections(config.db_max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(8))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .map_err(|e| std::io::Error::other(format!("Database connection failed: {}", e)))?;
    let db_arc = Arc::new(db);

    if config.run_migrations {
        Migrator::up(&*db_arc, None)
            .await
            .map_err(|e| std::io::Error::other(format!("Migrations failed: {}", e)))?;
        info!("Migrations applied");
    }

    let state = AppState::from_db(&db_arc);
    let admin_enabled = config.admin_enabled;

    if admin_enabled {
        warn!("Admin routes are ENABLED and unauthenticated");
    }

    let openapi = ApiDoc::openapi();

    info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(move || {
        let mut app = App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_arc)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes);

        if admin_enabled {
            app = app.configure(init_admin_routes);
        }

        app
    })
    .bind(config.bind_address())?
    .run()
    .await
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Projects
    cfg.service(crate::project::adapter::incoming::web::routes::get_projects_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_page_handler);
    cfg.service(crate::project::adapter::incoming::web::routes::get_project_handler);
    // Resume
    cfg.service(crate::resume::adapter::incoming::web::routes::get_resume_handler);
}

#[cfg(not(tarpaulin_include))]
fn init_admin_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::project::adapter::incoming::web::routes as project;
    use crate::modules::reorder::adapter::incoming::web::routes as reorder;
    use crate::modules::resume::adapter::incoming::web::routes as resume;
    use crate::modules::tag::adapter::incoming::web::routes as tag;
    use crate::modules::tech_stack::adapter::incoming::web::routes as tech_stack;

    // Projects
    cfg.service(project::create_project_handler);
    cfg.service(project::update_project_handler);
    cfg.service(project::delete_project_handler);
    cfg.service(project::create_component_handler);
    cfg.service(project::update_component_handler);
    cfg.service(project::delete_component_handler);
    // Tags
    cfg.service(tag::list_tags_handler);
    cfg.service(tag::attach_tag_handler);
    cfg.service(tag::update_tag_handler);
    cfg.service(tag::detach_tag_handler);
    // Tech stack
    cfg.service(tech_stack::list_tech_stack_handler);
    cfg.service(tech_stack::update_tech_stack_handler);
    cfg.service(tech_stack::get_tech_stack_usage_handler);
    cfg.service(tech_stack::link_tech_stack_handler);
    cfg.service(tech_stack::unlink_tech_stack_handler);
    // Resume
    cfg.service(resume::update_basic_info_handler);
    cfg.service(resume::create_section_handler);
    cfg.service(resume::update_section_handler);
    cfg.service(resume::delete_section_handler);
    cfg.service(resume::create_entry_handler);
    cfg.service(resume::update_entry_handler);
    cfg.service(resume::delete_entry_handler);
    cfg.service(resume::create_bullet_handler);
    cfg.service(resume::update_bullet_handler);
    cfg.service(resume::delete_bullet_handler);
    // Reorder
    cfg.service(reorder::reorder_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e}");
    }
}
