pub mod assembly;
pub mod entities;
