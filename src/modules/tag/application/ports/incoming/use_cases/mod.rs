mod attach_tag;
mod detach_tag;
mod list_tags;
mod update_tag;

pub use attach_tag::{AttachTagCommand, AttachTagCommandError, AttachTagError, AttachTagUseCase};
pub use detach_tag::{DetachTagError, DetachTagUseCase};
pub use list_tags::{ListTagsError, ListTagsUseCase};
pub use update_tag::{UpdateTagError, UpdateTagUseCase};
