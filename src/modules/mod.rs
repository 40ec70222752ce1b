pub mod project;
pub mod reorder;
pub mod resume;
pub mod tag;
pub mod tech_stack;
