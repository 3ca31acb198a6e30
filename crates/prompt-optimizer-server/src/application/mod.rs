//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! the catalog, the renderer and the usage repository.

mod prompt_service;

pub use prompt_service::PromptService;
