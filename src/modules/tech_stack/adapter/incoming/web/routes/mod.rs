mod get_tech_stack_usage;
mod link_tech_stack;
mod list_tech_stack;
mod unlink_tech_stack;
mod update_tech_stack;

pub use get_tech_stack_usage::get_tech_stack_usage_handler;
pub use link_tech_stack::link_tech_stack_handler;
pub use list_tech_stack::list_tech_stack_handler;
pub use unlink_tech_stack::unlink_tech_stack_handler;
pub use update_tech_stack::update_tech_stack_handler;
