use actix_web::web;
use std::sync::Arc;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateComponentUseCase, CreateProjectUseCase, DeleteComponentUseCase, DeleteProjectUseCase,
    GetProjectDetailUseCase, GetProjectPageUseCase, GetProjectsUseCase, UpdateComponentUseCase,
    UpdateProjectUseCase,
};
use crate::modules::project::application::project_use_cases::ProjectUseCases;
use crate::modules::reorder::application::ports::incoming::use_cases::ReorderUseCase;
use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeUseCase, ManageBulletsUseCase, ManageEntriesUseCase, ManageSectionsUseCase,
    UpdateBasicInfoUseCase,
};
use crate::modules::resume::application::resume_use_cases::ResumeUseCases;
use crate::modules::tag::application::ports::incoming::use_cases::{
    AttachTagUseCase, DetachTagUseCase, ListTagsUseCase, UpdateTagUseCase,
};
use crate::modules::tag::application::tag_use_cases::TagUseCases;
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    GetTechStackUsageUseCase, LinkTechStackUseCase, ListTechStackUseCase, UnlinkTechStackUseCase,
    UpdateTechStackUseCase,
};
use crate::modules::tech_stack::application::tech_stack_use_cases::TechStackUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;

/// Builds an `AppState` full of inert stubs; each `with_*` swaps in the use
/// case a test actually drives.
pub struct TestAppStateBuilder {
    project: ProjectUseCases,
    tag: TagUseCases,
    tech_stack: TechStackUseCases,
    resume: ResumeUseCases,
    reorder: Arc<dyn ReorderUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            project: ProjectUseCases {
                get_list: Arc::new(StubGetProjectsUseCase),
                get_detail: Arc::new(StubGetProjectDetailUseCase),
                get_page: Arc::new(StubGetProjectPageUseCase),
                create: Arc::new(StubCreateProjectUseCase),
                update: Arc::new(StubUpdateProjectUseCase),
                delete: Arc::new(StubDeleteProjectUseCase),
                create_component: Arc::new(StubCreateComponentUseCase),
                update_component: Arc::new(StubUpdateComponentUseCase),
                delete_component: Arc::new(StubDeleteComponentUseCase),
            },
            tag: TagUseCases {
                list: Arc::new(StubListTagsUseCase),
                attach: Arc::new(StubAttachTagUseCase),
                update: Arc::new(StubUpdateTagUseCase),
                detach: Arc::new(StubDetachTagUseCase),
            },
            tech_stack: TechStackUseCases {
                list: Arc::new(StubListTechStackUseCase),
                update: Arc::new(StubUpdateTechStackUseCase),
                usage: Arc::new(StubGetTechStackUsageUseCase),
                link: Arc::new(StubLinkTechStackUseCase),
                unlink: Arc::new(StubUnlinkTechStackUseCase),
            },
            resume: ResumeUseCases {
                get: Arc::new(StubGetResumeUseCase),
                update_basic_info: Arc::new(StubUpdateBasicInfoUseCase),
                sections: Arc::new(StubManageSectionsUseCase),
                entries: Arc::new(StubManageEntriesUseCase),
                bullets: Arc::new(StubManageBulletsUseCase),
            },
            reorder: Arc::new(StubReorderUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_get_projects(mut self, uc: impl GetProjectsUseCase + Send + Sync + 'static) -> Self {
        self.project.get_list = Arc::new(uc);
        self
    }

    pub fn with_get_project_detail(mut self, uc: impl GetProjectDetailUseCase + Send + Sync + 'static) -> Self {
        self.project.get_detail = Arc::new(uc);
        self
    }

    pub fn with_get_project_page(mut self, uc: impl GetProjectPageUseCase + Send + Sync + 'static) -> Self {
        self.project.get_page = Arc::new(uc);
        self
    }

    pub fn with_create_project(mut self, uc: impl CreateProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.create = Arc::new(uc);
        self
    }

    pub fn with_update_project(mut self, uc: impl UpdateProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.update = Arc::new(uc);
        self
    }

    pub fn with_delete_project(mut self, uc: impl DeleteProjectUseCase + Send + Sync + 'static) -> Self {
        self.project.delete = Arc::new(uc);
        self
    }

    pub fn with_create_component(mut self, uc: impl CreateComponentUseCase + Send + Sync + 'static) -> Self {
        self.project.create_component = Arc::new(uc);
        self
    }

    pub fn with_update_component(mut self, uc: impl UpdateComponentUseCase + Send + Sync + 'static) -> Self {
        self.project.update_component = Arc::new(uc);
        self
    }

    pub fn with_delete_component(mut self, uc: impl DeleteComponentUseCase + Send + Sync + 'static) -> Self {
        self.project.delete_component = Arc::new(uc);
        self
    }

    pub fn with_list_tags(mut self, uc: impl ListTagsUseCase + Send + Sync + 'static) -> Self {
        self.tag.list = Arc::new(uc);
        self
    }

    pub fn with_attach_tag(mut self, uc: impl AttachTagUseCase + Send + Sync + 'static) -> Self {
        self.tag.attach = Arc::new(uc);
        self
    }

    pub fn with_update_tag(mut self, uc: impl UpdateTagUseCase + Send + Sync + 'static) -> Self {
        self.tag.update = Arc::new(uc);
        self
    }

    pub fn with_detach_tag(mut self, uc: impl DetachTagUseCase + Send + Sync + 'static) -> Self {
        self.tag.detach = Arc::new(uc);
        self
    }

    pub fn with_list_tech_stack(mut self, uc: impl ListTechStackUseCase + Send + Sync + 'static) -> Self {
        self.tech_stack.list = Arc::new(uc);
        self
    }

    pub fn with_update_tech_stack(mut self, uc: impl UpdateTechStackUseCase + Send + Sync + 'static) -> Self {
        self.tech_stack.update = Arc::new(uc);
        self
    }

    pub fn with_get_tech_stack_usage(mut self, uc: impl GetTechStackUsageUseCase + Send + Sync + 'static) -> Self {
        self.tech_stack.usage = Arc::new(uc);
        self
    }

    pub fn with_link_tech_stack(mut self, uc: impl LinkTechStackUseCase + Send + Sync + 'static) -> Self {
        self.tech_stack.link = Arc::new(uc);
        self
    }

    pub fn with_unlink_tech_stack(mut self, uc: impl UnlinkTechStackUseCase + Send + Sync + 'static) -> Self {
        self.tech_stack.unlink = Arc::new(uc);
        self
    }

    pub fn with_get_resume(mut self, uc: impl GetResumeUseCase + Send + Sync + 'static) -> Self {
        self.resume.get = Arc::new(uc);
        self
    }

    pub fn with_update_basic_info(mut self, uc: impl UpdateBasicInfoUseCase + Send + Sync + 'static) -> Self {
        self.resume.update_basic_info = Arc::new(uc);
        self
    }

    pub fn with_manage_sections(mut self, uc: impl ManageSectionsUseCase + Send + Sync + 'static) -> Self {
        self.resume.sections = Arc::new(uc);
        self
    }

    pub fn with_manage_entries(mut self, uc: impl ManageEntriesUseCase + Send + Sync + 'static) -> Self {
        self.resume.entries = Arc::new(uc);
        self
    }

    pub fn with_manage_bullets(mut self, uc: impl ManageBulletsUseCase + Send + Sync + 'static) -> Self {
        self.resume.bullets = Arc::new(uc);
        self
    }

    pub fn with_reorder(mut self, uc: impl ReorderUseCase + Send + Sync + 'static) -> Self {
        self.reorder = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            project: self.project,
            tag: self.tag,
            tech_stack: self.tech_stack,
            resume: self.resume,
            reorder: self.reorder,
        })
    }
}
