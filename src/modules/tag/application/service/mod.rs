pub mod attach_tag_service;
pub mod detach_tag_service;
pub mod list_tags_service;
pub mod update_tag_service;

pub use attach_tag_service::AttachTagService;
pub use detach_tag_service::DetachTagService;
pub use list_tags_service::ListTagsService;
pub use update_tag_service::UpdateTagService;
