//! Prompt Optimizer API Models
//!
//! Request/response DTOs for the HTTP layer.
//! - Generate: Render a template
//! - Catalog: Categories, templates and examples
//! - Stats: Usage document and popularity ranking

mod catalog;
mod error;
mod generate;
mod stats;

pub use catalog::*;
pub use error::*;
pub use generate::*;
pub use stats::*;
