mod attach_tag;
mod detach_tag;
mod list_tags;
mod update_tag;

pub use attach_tag::attach_tag_handler;
pub use detach_tag::detach_tag_handler;
pub use list_tags::list_tags_handler;
pub use update_tag::update_tag_handler;
