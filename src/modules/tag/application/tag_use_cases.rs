use std::sync::Arc;

use crate::modules::tag::application::ports::incoming::use_cases::{
    AttachTagUseCase, DetachTagUseCase, ListTagsUseCase, UpdateTagUseCase,
};

#[derive(Clone)]
pub struct TagUseCases {
    pub list: Arc<dyn ListTagsUseCase + Send + Sync>,
    pub attach: Arc<dyn AttachTagUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateTagUseCase + Send + Sync>,
    pub detach: Arc<dyn DetachTagUseCase + Send + Sync>,
}
