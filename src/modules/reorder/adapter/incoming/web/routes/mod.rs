mod reorder;

pub use reorder::reorder_handler;
