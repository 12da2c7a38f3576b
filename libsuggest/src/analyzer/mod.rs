pub mod base;
pub mod passthrough;
