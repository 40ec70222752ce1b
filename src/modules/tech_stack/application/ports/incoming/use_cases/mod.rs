mod get_tech_stack_usage;
mod link_tech_stack;
mod list_tech_stack;
mod unlink_tech_stack;
mod update_tech_stack;

pub use get_tech_stack_usage::{GetTechStackUsageError, GetTechStackUsageUseCase};
pub use link_tech_stack::{LinkTechStackCommand, LinkTechStackError, LinkTechStackUseCase};
pub use list_tech_stack::{ListTechStackError, ListTechStackUseCase};
pub use unlink_tech_stack::{UnlinkTechStackError, UnlinkTechStackUseCase};
pub use update_tech_stack::{UpdateTechStackError, UpdateTechStackUseCase};
