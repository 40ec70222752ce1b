pub mod api;
pub mod display_order;
pub mod persistence;
