pub mod reorder_repository;

pub use reorder_repository::{ReorderRepository, ReorderRepositoryError};
