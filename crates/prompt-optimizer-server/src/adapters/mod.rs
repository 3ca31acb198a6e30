//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod json_file;

// Re-exports
pub use json_file::{load_catalog, JsonFileUsageRepository};
