use async_trait::async_trait;
use tracing::debug;

use crate::modules::project::application::ports::incoming::use_cases::{
    GetProjectDetailError, GetProjectPageUseCase,
};
use crate::modules::project::application::ports::outgoing::project_query::ProjectQuery;
use crate::modules::project::application::service::get_project_detail_service::load_detail;
use crate::modules::project::domain::render::{render_page, RenderedPage};

pub struct GetProjectPageService<Q>
where
    Q: ProjectQuery,
{
    query: Q,
}

impl<Q> GetProjectPageService<Q>
where
    Q: ProjectQuery,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> GetProjectPageUseCase for GetProjectPageService<Q>
where
    Q: ProjectQuery + Send + Sync,
{
    async fn execute(&self, project_id: i32) -> Result<RenderedPage, GetProjectDetailError> {
        let detail = load_detail(&self.query, project_id).await?;
        let page = render_page(&detail);

        debug!(
            project_id,
            components = detail.components.len(),
            blocks = page.blocks.len(),
            "Rendered project page"
        );

        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use crate::modules::project::application::ports::outgoing::project_query::ProjectQueryError;
    use crate::modules::project::domain::entities::{Project, ProjectDetail, RelatedProject};
    use crate::modules::project::domain::render::RenderedBlock;
    use crate::tests::support::project_test_fixtures::{sample_component, sample_detail};

    struct MockProjectQuery {
        detail: Result<ProjectDetail, ProjectQueryError>,
    }

    #[async_trait]
    impl ProjectQuery for MockProjectQuery {
        async fn list_projects(&self) -> Result<Vec<Project>, ProjectQueryError> {
            unimplemented!("not used in GetProjectPageService tests")
        }

        async fn get_project_detail(
            &self,
            _project_id: i32,
        ) -> Result<ProjectDetail, ProjectQueryError> {
            self.detail.clone()
        }

        async fn find_related(
            &self,
            project_ids: &[i32],
        ) -> Result<Vec<RelatedProject>, ProjectQueryError> {
            Ok(project_ids
                .iter()
                .map(|id| RelatedProject {
                    id: *id,
                    name: format!("Project {}", id),
                    poster_image_url: None,
                })
                .collect())
        }
    }

    #[tokio::test]
    async fn execute_renders_header_and_blocks_in_order() {
        let detail = sample_detail(vec![
            sample_component(1, "related_projects", json!({ "project_ids": [7] }), 3),
            sample_component(2, "title", json!({ "title": "Chess Engine" }), 0),
            sample_component(3, "video", json!({ "video_url": "nope" }), 1),
            sample_component(4, "about", json!({ "text": "hello" }), 2),
        ]);

        let service = GetProjectPageService::new(MockProjectQuery { detail: Ok(detail) });

        let page = service.execute(1).await.unwrap();

        assert_eq!(page.header.title, "Chess Engine");
        assert_eq!(page.blocks.len(), 3);
        assert!(matches!(page.blocks[0], RenderedBlock::Error { component_id: 3, .. }));
        assert!(matches!(page.blocks[1], RenderedBlock::About { .. }));
        match &page.blocks[2] {
            RenderedBlock::RelatedProjects { projects } => {
                assert_eq!(projects[0].name, "Project 7");
            }
            other => panic!("expected related projects, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn execute_maps_not_found() {
        let service = GetProjectPageService::new(MockProjectQuery {
            detail: Err(ProjectQueryError::NotFound),
        });

        let result = service.execute(1).await;

        assert!(matches!(result, Err(GetProjectDetailError::NotFound)));
    }
}
