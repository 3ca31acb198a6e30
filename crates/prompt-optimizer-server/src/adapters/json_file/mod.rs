//! JSON file adapters
//!
//! Usage statistics and catalog documents stored as plain JSON files.

mod catalog_loader;
mod usage_repository;

pub use catalog_loader::load_catalog;
pub use usage_repository::JsonFileUsageRepository;
