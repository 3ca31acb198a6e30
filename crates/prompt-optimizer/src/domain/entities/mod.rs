//! Domain Entities
//!
//! Pure domain models without infrastructure dependencies.
//! - Category: Named grouping of templates
//! - Template: Prompt pattern with `{placeholder}` variables
//! - Usage: Persisted statistics and the capped recent-usage history
//! - Render: Outcome of a successful render

mod render;
mod template;
mod usage;

pub use render::*;
pub use template::*;
pub use usage::*;
