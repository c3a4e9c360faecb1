//! High-level operations.

pub mod generate;

pub use generate::{generate_wrappers, GenerateOptions, GenerateReport};
