pub mod reorder_target;

pub use reorder_target::ReorderTarget;
