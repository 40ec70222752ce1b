use async_trait::async_trait;

use crate::modules::resume::application::ports::incoming::use_cases::ResumeWriteError;
use crate::modules::resume::application::ports::outgoing::BulletData;
use crate::modules::resume::domain::entities::Bullet;

#[async_trait]
pub trait ManageBulletsUseCase: Send + Sync {
    async fn create(&self, entry_id: i32, data: BulletData) -> Result<Bullet, ResumeWriteError>;

    async fn update(&self, bullet_id: i32, data: BulletData) -> Result<Bullet, ResumeWriteError>;

    async fn delete(&self, bullet_id: i32) -> Result<(), ResumeWriteError>;
}
