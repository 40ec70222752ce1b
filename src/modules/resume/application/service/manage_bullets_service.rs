use async_trait::async_trait;
use tracing::info;

use crate::modules::resume::application::ports::incoming::use_cases::{
    ManageBulletsUseCase, ResumeWriteError,
};
use crate::modules::resume::application::ports::outgoing::{BulletData, ResumeRepository};
use crate::modules::resume::application::service::resume_validation::validate_bullet;
use crate::modules::resume::domain::entities::Bullet;

pub struct ManageBulletsService<R>
where
    R: ResumeRepository,
{
    repository: R,
}

impl<R> ManageBulletsService<R>
where
    R: ResumeRepository,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> ManageBulletsUseCase for ManageBulletsService<R>
where
    R: ResumeRepository + Send + Sync,
{
    async fn create(&self, entry_id: i32, data: BulletData) -> Result<Bullet, ResumeWriteError> {
        let data = data.normalized();
        validate_bullet(&data).map_err(ResumeWriteError::Validation)?;

        let created = self.repository.create_bullet(entry_id, data).await?;
        info!(entry_id, bullet_id = created.id, "Resume bullet created");

        Ok(created)
    }

    async fn update(&self, bullet_id: i32, data: BulletData) -> Result<Bullet, ResumeWriteError> {
        let data = data.normalized();
        validate_bullet(&data).map_err(ResumeWriteError::Validation)?;

        Ok(self.repository.update_bullet(bullet_id, data).await?)
    }

    async fn delete(&self, bullet_id: i32) -> Result<(), ResumeWriteError> {
        self.repository.delete_bullet(bullet_id).await?;
        Ok(())
    }
}
