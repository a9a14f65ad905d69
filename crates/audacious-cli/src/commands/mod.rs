//! CLI command implementations

pub mod concat;
pub mod generate;
pub mod info;
pub mod json_output;
pub mod mix;

mod reporting;
