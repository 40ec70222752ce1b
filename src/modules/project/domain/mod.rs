pub mod component;
pub mod entities;
pub mod listing;
pub mod render;
