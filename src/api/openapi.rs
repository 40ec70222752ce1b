use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::OpenApi;

use crate::modules::project::adapter::incoming::web::routes::{
    ProjectDetailResponse, ProjectListResponse,
};
use crate::modules::project::domain::component::{CarouselImage, ImagePosition, MediaType};
use crate::modules::project::domain::entities::{
    Project, ProjectComponent, ProjectDetail, RelatedProject, Tag, TechStackItem,
};
use crate::modules::project::domain::listing::{PinnedFilter, SortOption};
use crate::modules::project::domain::render::{
    LinkKind, MediaBlock, PageHeader, RenderedBlock, RenderedPage, RepositoryLink,
};
use crate::modules::resume::domain::entities::{BasicInfo, Bullet, Entry, Resume, Section};

/// Public read API. Admin routes are left out of the document.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio API",
        version = "1.0.0",
        description = "Read API for portfolio projects, rendered project pages and the resume"
    ),
    paths(
        // Projects
        crate::modules::project::adapter::incoming::web::routes::get_projects_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_handler,
        crate::modules::project::adapter::incoming::web::routes::get_project_page_handler,

        // Resume
        crate::modules::resume::adapter::incoming::web::routes::get_resume_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Projects
            ProjectListResponse,
            ProjectDetailResponse,
            Project,
            ProjectDetail,
            ProjectComponent,
            RelatedProject,
            Tag,
            TechStackItem,
            SortOption,
            PinnedFilter,
            CarouselImage,
            ImagePosition,
            MediaType,

            // Rendered page
            RenderedPage,
            PageHeader,
            RenderedBlock,
            MediaBlock,
            RepositoryLink,
            LinkKind,

            // Resume
            Resume,
            BasicInfo,
            Section,
            Entry,
            Bullet
        )
    ),
    tags(
        (name = "projects", description = "Project list, detail and rendered pages"),
        (name = "resume", description = "Resume"),
    )
)]
pub struct ApiDoc;
