use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::project::application::ports::incoming::use_cases::GetProjectsError;
use crate::modules::project::domain::entities::Project;
use crate::modules::project::domain::listing::{PinnedFilter, ProjectListFilter, SortOption};
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Query / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct GetProjectsQuery {
    /// Free-text search over project, tag and tech names.
    pub name: Option<String>,
    /// Exact tag name.
    pub tag: Option<String>,
    /// `all`, `pinned` / `true`, `unpinned` / `false`.
    #[serde(rename = "isPinned", default)]
    #[param(value_type = Option<PinnedFilter>)]
    pub is_pinned: PinnedFilter,
    /// `date-newest` (default), `date-oldest`, `name-asc`, `name-desc`.
    #[serde(default)]
    #[param(value_type = Option<SortOption>)]
    pub sort: SortOption,
}

impl From<GetProjectsQuery> for (ProjectListFilter, SortOption) {
    fn from(q: GetProjectsQuery) -> Self {
        let filter = ProjectListFilter {
            query: q.name,
            tag: q.tag,
            pinned: q.is_pinned,
        };

        (filter, q.sort)
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub count: usize,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// List projects
///
/// Returns every project matching the filters, in the requested order.
#[utoipa::path(
    get,
    path = "/api/projects",
    tag = "projects",
    params(GetProjectsQuery),
    responses(
        (status = 200, description = "Filtered and sorted projects", body = inline(SuccessResponse<ProjectListResponse>)),
        (status = 400, description = "Unknown sort or pinned value", body = ErrorResponse),
        (status = 500, description = "Database failure", body = ErrorResponse)
    )
)]
#[get("/api/projects")]
pub async fn get_projects_handler(
    query: web::Query<GetProjectsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, sort) = query.into_inner().into();

    match data.project.get_list.execute(filter, sort).await {
        Ok(projects) => ApiResponse::success(ProjectListResponse {
            count: projects.len(),
            projects,
        }),

        Err(GetProjectsError::QueryFailed(msg)) => {
            error!("Failed to list projects: {}", msg);
            ApiResponse::internal_error()
        }
    }
}
