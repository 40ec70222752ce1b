pub mod get_tech_stack_usage_service;
pub mod link_tech_stack_service;
pub mod list_tech_stack_service;
pub mod unlink_tech_stack_service;
pub mod update_tech_stack_service;

pub use get_tech_stack_usage_service::GetTechStackUsageService;
pub use link_tech_stack_service::LinkTechStackService;
pub use list_tech_stack_service::ListTechStackService;
pub use unlink_tech_stack_service::UnlinkTechStackService;
pub use update_tech_stack_service::UpdateTechStackService;
