pub mod ports;
pub mod service;
pub mod tag_use_cases;
