//! Prompt Optimizer Routes
//!
//! - / - HTML overview page
//! - /api/generate - Render a template
//! - /api/templates/:category - Category catalog
//! - /api/examples/:category/:template - Template examples
//! - /api/stats - Usage statistics
//! - /api/popular - Popularity ranking

pub mod error;
pub mod generate;
pub mod index;
pub mod stats;
pub mod swagger;
pub mod templates;

pub use error::ApiError;
