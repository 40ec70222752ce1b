use async_trait::async_trait;
use tracing::warn;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectDetailUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::{
    ProjectQuery, ProjectQueryError,
};
use crate::modules::project::domain::component::{ComponentData, ComponentKind};
use crate::modules::project::domain::entities::ProjectDetail;

pub struct GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectDetailService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectDetailUseCase for GetProjectDetailService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<ProjectDetail, GetProjectDetailError> {
        load_detail(&self.query, project_id)
            .await
            .map_err(GetProjectDetailError::from)
    }
}

/// Fetches a project, sorts its components and resolves the projects its
/// `related_projects` components point at.
pub(crate) async fn load_detail<Q>(
    query: &Q,
    project_id: i32,
) -> Result<ProjectDetail, ProjectQueryError>
where
    Q: ProjectQuery + ?Sized,
{
    let mut detail = query.get_project_detail(project_id).await?;

    detail.components.sort_by_key(|c| c.display_order);

    let ids = related_ids(&detail);
    if !ids.is_empty() {
        detail.related_projects = query.find_related(&ids).await?;
    }

    Ok(detail)
}

fn related_ids(detail: &ProjectDetail) -> Vec<i32> {
    let mut ids: Vec<i32> = Vec::new();

    let components = detail
        .components
        .iter()
        .filter(|c| c.component_type == ComponentKind::RelatedProjects.as_str());

    for component in components {
        match ComponentData::parse(ComponentKind::RelatedProjects, &component.component_data) {
            Ok(ComponentData::RelatedProjects(data)) => {
                for id in data.project_ids {
                    if !ids.contains(&id) {
                        ids.push(id);
                    }
                }
            }
            Ok(_) => {}
            // Rendered later as an inline error block.
            Err(e) => warn!(component_id = component.id, "{}", e),
        }
    }

    ids
}
