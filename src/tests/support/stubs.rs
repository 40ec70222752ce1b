//! Inert use cases for `TestAppStateBuilder::default()`. Route tests replace
//! the one use case they exercise; everything else answers with an empty
//! list or a not-found error.

use async_trait::async_trait;
use serde_json::Value;

use crate::modules::project::application::ports::incoming::use_cases::{
    CreateComponentCommand, CreateComponentError, CreateComponentUseCase, CreateProjectError,
    CreateProjectUseCase, DeleteComponentError, DeleteComponentUseCase, DeleteProjectError,
    DeleteProjectUseCase, GetProjectDetailError, GetProjectDetailUseCase, GetProjectPageUseCase,
    GetProjectsError, GetProjectsUseCase, UpdateComponentError, UpdateComponentUseCase,
    UpdateProjectError, UpdateProjectUseCase,
};
use crate::modules::project::application::ports::outgoing::project_repository::{
    ProjectData, ProjectResult,
};
use crate::modules::project::domain::entities::{
    Project, ProjectComponent, ProjectDetail, Tag, TechStackItem,
};
use crate::modules::project::domain::listing::{ProjectListFilter, SortOption};
use crate::modules::project::domain::render::RenderedPage;
use crate::modules::reorder::application::ports::incoming::use_cases::{
    ReorderCommand, ReorderError, ReorderUseCase,
};
use crate::modules::resume::application::ports::incoming::use_cases::{
    GetResumeError, GetResumeUseCase, ManageBulletsUseCase, ManageEntriesUseCase,
    ManageSectionsUseCase, ResumeWriteError, UpdateBasicInfoUseCase,
};
use crate::modules::resume::application::ports::outgoing::{
    BasicInfoData, BulletData, EntryData, SectionData,
};
use crate::modules::resume::domain::entities::{BasicInfo, Bullet, Entry, Resume, Section};
use crate::modules::tag::application::ports::incoming::use_cases::{
    AttachTagCommand, AttachTagError, AttachTagUseCase, DetachTagError, DetachTagUseCase,
    ListTagsError, ListTagsUseCase, UpdateTagError, UpdateTagUseCase,
};
use crate::modules::tech_stack::application::ports::incoming::use_cases::{
    GetTechStackUsageError, GetTechStackUsageUseCase, LinkTechStackCommand, LinkTechStackError,
    LinkTechStackUseCase, ListTechStackError, ListTechStackUseCase, UnlinkTechStackError,
    UnlinkTechStackUseCase, UpdateTechStackError, UpdateTechStackUseCase,
};
use crate::modules::tech_stack::domain::entities::{
    TechStackFields, TechStackMaster, TechUsage,
};

/* --------------------------------------------------
 * Project
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetProjectsUseCase;

#[async_trait]
impl GetProjectsUseCase for StubGetProjectsUseCase {
    async fn execute(
        &self,
        _filter: ProjectListFilter,
        _sort: SortOption,
    ) -> Result<Vec<Project>, GetProjectsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectDetailUseCase;

#[async_trait]
impl GetProjectDetailUseCase for StubGetProjectDetailUseCase {
    async fn execute(&self, _project_id: i32) -> Result<ProjectDetail, GetProjectDetailError> {
        Err(GetProjectDetailError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetProjectPageUseCase;

#[async_trait]
impl GetProjectPageUseCase for StubGetProjectPageUseCase {
    async fn execute(&self, _project_id: i32) -> Result<RenderedPage, GetProjectDetailError> {
        Err(GetProjectDetailError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateProjectUseCase;

#[async_trait]
impl CreateProjectUseCase for StubCreateProjectUseCase {
    async fn execute(&self, _data: ProjectData) -> Result<ProjectResult, CreateProjectError> {
        Err(CreateProjectError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateProjectUseCase;

#[async_trait]
impl UpdateProjectUseCase for StubUpdateProjectUseCase {
    async fn execute(
        &self,
        _project_id: i32,
        _data: ProjectData,
    ) -> Result<ProjectResult, UpdateProjectError> {
        Err(UpdateProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteProjectUseCase;

#[async_trait]
impl DeleteProjectUseCase for StubDeleteProjectUseCase {
    async fn execute(&self, _project_id: i32) -> Result<(), DeleteProjectError> {
        Err(DeleteProjectError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubCreateComponentUseCase;

#[async_trait]
impl CreateComponentUseCase for StubCreateComponentUseCase {
    async fn execute(
        &self,
        _command: CreateComponentCommand,
    ) -> Result<ProjectComponent, CreateComponentError> {
        Err(CreateComponentError::ProjectNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateComponentUseCase;

#[async_trait]
impl UpdateComponentUseCase for StubUpdateComponentUseCase {
    async fn execute(
        &self,
        _component_id: i32,
        _component_data: Value,
    ) -> Result<ProjectComponent, UpdateComponentError> {
        Err(UpdateComponentError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDeleteComponentUseCase;

#[async_trait]
impl DeleteComponentUseCase for StubDeleteComponentUseCase {
    async fn execute(&self, _component_id: i32) -> Result<(), DeleteComponentError> {
        Err(DeleteComponentError::NotFound)
    }
}

/* --------------------------------------------------
 * Tags
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubListTagsUseCase;

#[async_trait]
impl ListTagsUseCase for StubListTagsUseCase {
    async fn execute(&self) -> Result<Vec<Tag>, ListTagsError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubAttachTagUseCase;

#[async_trait]
impl AttachTagUseCase for StubAttachTagUseCase {
    async fn execute(&self, _command: AttachTagCommand) -> Result<Tag, AttachTagError> {
        Err(AttachTagError::ProjectNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTagUseCase;

#[async_trait]
impl UpdateTagUseCase for StubUpdateTagUseCase {
    async fn execute(&self, _tag_id: i32, _color: Option<String>) -> Result<Tag, UpdateTagError> {
        Err(UpdateTagError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubDetachTagUseCase;

#[async_trait]
impl DetachTagUseCase for StubDetachTagUseCase {
    async fn execute(&self, _project_id: i32, _tag_id: i32) -> Result<(), DetachTagError> {
        Err(DetachTagError::NotLinked)
    }
}

/* --------------------------------------------------
 * Tech stack
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubListTechStackUseCase;

#[async_trait]
impl ListTechStackUseCase for StubListTechStackUseCase {
    async fn execute(&self) -> Result<Vec<TechStackMaster>, ListTechStackError> {
        Ok(vec![])
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateTechStackUseCase;

#[async_trait]
impl UpdateTechStackUseCase for StubUpdateTechStackUseCase {
    async fn execute(
        &self,
        _tech_id: i32,
        _fields: TechStackFields,
    ) -> Result<TechStackMaster, UpdateTechStackError> {
        Err(UpdateTechStackError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubGetTechStackUsageUseCase;

#[async_trait]
impl GetTechStackUsageUseCase for StubGetTechStackUsageUseCase {
    async fn execute(&self, _tech_id: i32) -> Result<TechUsage, GetTechStackUsageError> {
        Err(GetTechStackUsageError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubLinkTechStackUseCase;

#[async_trait]
impl LinkTechStackUseCase for StubLinkTechStackUseCase {
    async fn execute(
        &self,
        _command: LinkTechStackCommand,
    ) -> Result<TechStackItem, LinkTechStackError> {
        Err(LinkTechStackError::ProjectNotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubUnlinkTechStackUseCase;

#[async_trait]
impl UnlinkTechStackUseCase for StubUnlinkTechStackUseCase {
    async fn execute(&self, _link_id: i32) -> Result<(), UnlinkTechStackError> {
        Err(UnlinkTechStackError::NotFound)
    }
}

/* --------------------------------------------------
 * Resume
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubGetResumeUseCase;

#[async_trait]
impl GetResumeUseCase for StubGetResumeUseCase {
    async fn execute(&self) -> Result<Resume, GetResumeError> {
        Ok(Resume {
            basic_info: None,
            sections: vec![],
        })
    }
}

#[derive(Default, Clone)]
pub struct StubUpdateBasicInfoUseCase;

#[async_trait]
impl UpdateBasicInfoUseCase for StubUpdateBasicInfoUseCase {
    async fn execute(&self, _data: BasicInfoData) -> Result<BasicInfo, ResumeWriteError> {
        Err(ResumeWriteError::RepositoryError(
            "not used in this test".to_string(),
        ))
    }
}

#[derive(Default, Clone)]
pub struct StubManageSectionsUseCase;

#[async_trait]
impl ManageSectionsUseCase for StubManageSectionsUseCase {
    async fn create(&self, _data: SectionData) -> Result<Section, ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }

    async fn update(
        &self,
        _section_id: i32,
        _data: SectionData,
    ) -> Result<Section, ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }

    async fn delete(&self, _section_id: i32) -> Result<(), ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubManageEntriesUseCase;

#[async_trait]
impl ManageEntriesUseCase for StubManageEntriesUseCase {
    async fn create(&self, _section_id: i32, _data: EntryData) -> Result<Entry, ResumeWriteError> {
        Err(ResumeWriteError::ParentNotFound)
    }

    async fn update(&self, _entry_id: i32, _data: EntryData) -> Result<Entry, ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }

    async fn delete(&self, _entry_id: i32) -> Result<(), ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }
}

#[derive(Default, Clone)]
pub struct StubManageBulletsUseCase;

#[async_trait]
impl ManageBulletsUseCase for StubManageBulletsUseCase {
    async fn create(&self, _entry_id: i32, _data: BulletData) -> Result<Bullet, ResumeWriteError> {
        Err(ResumeWriteError::ParentNotFound)
    }

    async fn update(&self, _bullet_id: i32, _data: BulletData) -> Result<Bullet, ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }

    async fn delete(&self, _bullet_id: i32) -> Result<(), ResumeWriteError> {
        Err(ResumeWriteError::NotFound)
    }
}

/* --------------------------------------------------
 * Reorder
 * -------------------------------------------------- */

#[derive(Default, Clone)]
pub struct StubReorderUseCase;

#[async_trait]
impl ReorderUseCase for StubReorderUseCase {
    async fn execute(&self, command: ReorderCommand) -> Result<usize, ReorderError> {
        Ok(command.items().len())
    }
}
