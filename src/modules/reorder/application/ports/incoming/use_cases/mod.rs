mod reorder;

pub use reorder::{ReorderCommand, ReorderError, ReorderUseCase};
